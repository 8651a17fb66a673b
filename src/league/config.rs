use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::foundation::error::{LeagueError, LeagueResult};
use crate::league::team::Team;

/// League configuration: teams plus the default game id.
#[derive(Clone, Debug)]
pub struct Config {
    pub teams: BTreeMap<String, Team>,
    pub default_game: String,
    pub models_dir: PathBuf,
}

#[derive(serde::Deserialize)]
struct ConfigFile {
    teams: BTreeMap<String, TeamSpec>,
    #[serde(default = "default_game")]
    game: String,
}

#[derive(serde::Deserialize)]
struct TeamSpec {
    name: String,
    color: String,
    #[serde(default)]
    skill_level: Option<f64>,
}

fn default_game() -> String {
    "connect_four".to_owned()
}

impl Config {
    /// Load a JSON league config.
    pub fn from_path(path: &Path) -> LeagueResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            LeagueError::config(format!(
                "failed to read league config '{}': {e}",
                path.display()
            ))
        })?;
        let file: ConfigFile = serde_json::from_str(&raw).map_err(|e| {
            LeagueError::config(format!(
                "failed to parse league config '{}': {e}",
                path.display()
            ))
        })?;

        let teams = file
            .teams
            .into_iter()
            .map(|(id, spec)| {
                let team = Team {
                    id: id.clone(),
                    name: spec.name,
                    color: spec.color,
                    skill_level: spec.skill_level,
                };
                (id, team)
            })
            .collect();

        Ok(Self {
            teams,
            default_game: file.game,
            models_dir: PathBuf::from("models"),
        })
    }

    /// Look up a team, failing fast with the enumerated choices.
    pub fn team(&self, id: &str) -> LeagueResult<&Team> {
        self.teams.get(id).ok_or_else(|| {
            let available: Vec<&str> = self.teams.keys().map(String::as_str).collect();
            LeagueError::config(format!(
                "unknown team '{id}'. Available: {}",
                available.join(", ")
            ))
        })
    }
}
