//! Registry of supported games.

use crate::foundation::error::{LeagueError, LeagueResult};
use crate::league::connect_four::{ConnectFour, ConnectFourHeuristic};
use crate::league::env::MatchEnv;
use crate::league::policy::Policy;

/// A supported game: stable id, display name, environment and policy
/// constructors.
#[derive(Debug)]
pub struct GameInfo {
    pub id: &'static str,
    pub display_name: &'static str,
    make_env: fn() -> Box<dyn MatchEnv>,
    make_policy: fn() -> Box<dyn Policy>,
}

impl GameInfo {
    pub fn make_env(&self) -> Box<dyn MatchEnv> {
        (self.make_env)()
    }

    pub fn make_policy(&self) -> Box<dyn Policy> {
        (self.make_policy)()
    }
}

fn connect_four_env() -> Box<dyn MatchEnv> {
    Box::new(ConnectFour::new())
}

fn connect_four_policy() -> Box<dyn Policy> {
    Box::new(ConnectFourHeuristic)
}

static GAMES: &[GameInfo] = &[GameInfo {
    id: "connect_four",
    display_name: "Connect Four",
    make_env: connect_four_env,
    make_policy: connect_four_policy,
}];

/// Look up a game, failing fast with the enumerated choices.
pub fn game(id: &str) -> LeagueResult<&'static GameInfo> {
    GAMES.iter().find(|g| g.id == id).ok_or_else(|| {
        let available: Vec<&str> = GAMES.iter().map(|g| g.id).collect();
        LeagueError::config(format!(
            "unknown game '{id}'. Available: {}",
            available.join(", ")
        ))
    })
}

pub fn list_games() -> impl Iterator<Item = &'static GameInfo> {
    GAMES.iter()
}
