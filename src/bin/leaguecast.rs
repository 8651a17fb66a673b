use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use leaguecast::league::{self, Config, MatchOpts, MatchOutcome, MatchReport, SkillAgent};
use leaguecast::output::OutputNaming;
use leaguecast::pipeline::{ProduceOpts, produce_match_video_file};
use leaguecast::TimelineSpec;

#[derive(Parser, Debug)]
#[command(name = "leaguecast", version)]
struct Cli {
    /// League config file.
    #[arg(long, default_value = "teams.json", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a match between two teams and print the JSON result.
    Compete(CompeteArgs),
    /// Materialize a team's model artifact so it can compete.
    Train(TrainArgs),
}

#[derive(Parser, Debug)]
struct CompeteArgs {
    /// First team id.
    team1: String,
    /// Second team id.
    team2: String,

    /// Game id (defaults to the config's game).
    #[arg(long)]
    game: Option<String>,

    /// Skip video production.
    #[arg(long)]
    no_video: bool,

    /// Render every k-th turn into the play segment.
    #[arg(long, default_value_t = 1)]
    stride: u32,

    /// Upper bound on recorded turns.
    #[arg(long, default_value_t = 200)]
    max_turns: u32,

    /// RNG seed for skill-modulated decisions (random when omitted).
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser, Debug)]
struct TrainArgs {
    /// Team id.
    team: String,

    /// Game id (defaults to the config's game).
    #[arg(long)]
    game: Option<String>,
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("leaguecast=info"));
    // Logs go to stderr; stdout carries only the JSON match report.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let Cli { config, cmd } = Cli::parse();
    match cmd {
        Command::Compete(args) => cmd_compete(&config, args),
        Command::Train(args) => cmd_train(&config, args),
    }
}

fn cmd_compete(config_path: &Path, args: CompeteArgs) -> anyhow::Result<()> {
    let config = Config::from_path(config_path)?;
    let game = league::game(args.game.as_deref().unwrap_or(&config.default_game))?;
    let team1 = config.team(&args.team1)?.clone();
    let team2 = config.team(&args.team2)?.clone();

    for team in [&team1, &team2] {
        if !team.trained(&config.models_dir, game.id) {
            bail!(
                "{} has not been trained for {} yet. Run: leaguecast train {}",
                team.name,
                game.display_name,
                team.id
            );
        }
    }

    let seed = args.seed.unwrap_or_else(rand::random::<u64>);
    let mut env = game.make_env();
    let mut agents = [
        SkillAgent::new(game.make_policy(), team1.skill_level, seed),
        SkillAgent::new(game.make_policy(), team2.skill_level, seed.wrapping_add(1)),
    ];
    let opts = MatchOpts {
        max_turns: args.max_turns,
        record: !args.no_video,
    };

    tracing::info!("match: {} vs {}", team1.name, team2.name);
    let telemetry = league::run_match(env.as_mut(), &mut agents, &opts);
    let outcome = MatchOutcome::decide(&team1, &team2, &telemetry);

    let video = if args.no_video {
        None
    } else {
        let produce = ProduceOpts {
            timeline: TimelineSpec {
                stride: NonZeroU32::new(args.stride).unwrap_or(NonZeroU32::MIN),
                ..TimelineSpec::default()
            },
            ..ProduceOpts::default()
        };
        let path = produce_match_video_file(
            &team1,
            &team2,
            game.display_name,
            &telemetry,
            &outcome,
            &produce,
            &OutputNaming::system(),
        )?;
        Some(path.display().to_string())
    };

    let report = MatchReport::new(&team1, &team2, &telemetry, &outcome, video);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn cmd_train(config_path: &Path, args: TrainArgs) -> anyhow::Result<()> {
    let config = Config::from_path(config_path)?;
    let game = league::game(args.game.as_deref().unwrap_or(&config.default_game))?;
    let team = config.team(&args.team)?.clone();

    // The learning procedure itself lives outside this tool; competing only
    // checks that the artifact exists.
    let path = team.model_path(&config.models_dir, game.id);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create models dir '{}'", parent.display()))?;
    }
    let artifact = serde_json::json!({
        "team": team.id,
        "game": game.id,
        "policy": "heuristic",
    });
    std::fs::write(&path, serde_json::to_vec_pretty(&artifact)?)
        .with_context(|| format!("write model artifact '{}'", path.display()))?;

    eprintln!(
        "trained {} for {} -> {}",
        team.id,
        game.display_name,
        path.display()
    );
    Ok(())
}
