//! Match simulation: teams, league config, the game registry, decision
//! functions and the match loop that materializes a [`MatchTelemetry`].

pub mod config;
pub mod connect_four;
pub mod driver;
pub mod env;
pub mod games;
pub mod policy;
pub mod team;
pub mod telemetry;

pub use config::Config;
pub use driver::{MatchOpts, MatchReport, run_match};
pub use env::{MatchEnv, Observation, Step};
pub use games::{GameInfo, game, list_games};
pub use policy::{Policy, SkillAgent};
pub use team::Team;
pub use telemetry::{MatchOutcome, MatchTelemetry, Turn};
