use std::process::Command;

const TEAMS: &str = r##"{
    "game": "connect_four",
    "teams": {
        "la": { "name": "Los Angeles", "color": "#FFD700", "skill_level": 0.9 },
        "nyc": { "name": "New York", "color": "#1E90FF", "skill_level": 0.9 }
    }
}"##;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_leaguecast"))
}

#[test]
fn train_then_compete_without_video() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("teams.json"), TEAMS).unwrap();

    for team in ["la", "nyc"] {
        let status = bin()
            .current_dir(dir.path())
            .args(["train", team])
            .status()
            .unwrap();
        assert!(status.success(), "train {team} failed");
    }
    assert!(dir.path().join("models/connect_four/la.policy").exists());

    let out = bin()
        .current_dir(dir.path())
        .args(["compete", "la", "nyc", "--no-video", "--seed", "7"])
        .output()
        .unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["team1"], "la");
    assert_eq!(report["team2"], "nyc");
    assert!(report["turns"].as_u64().unwrap() >= 7);
    let winner = report["winner"].as_str().unwrap();
    assert!(["la", "nyc", "draw"].contains(&winner), "{winner}");
    assert!(report.get("video").is_none());
}

#[test]
fn compete_refuses_untrained_teams() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("teams.json"), TEAMS).unwrap();

    let out = bin()
        .current_dir(dir.path())
        .args(["compete", "la", "nyc", "--no-video"])
        .output()
        .unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("has not been trained"), "{stderr}");
}

#[test]
fn unknown_team_lists_the_choices() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("teams.json"), TEAMS).unwrap();

    let out = bin()
        .current_dir(dir.path())
        .args(["compete", "la", "boston", "--no-video"])
        .output()
        .unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("unknown team 'boston'"), "{stderr}");
    assert!(stderr.contains("la, nyc"), "{stderr}");
}
