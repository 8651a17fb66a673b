//! The match loop: a pure simulation stage producing a complete
//! [`MatchTelemetry`]. Compositing consumes the telemetry afterwards; the two
//! stages share no state.

use std::collections::BTreeMap;

use crate::league::env::MatchEnv;
use crate::league::policy::{Policy, SkillAgent};
use crate::league::team::Team;
use crate::league::telemetry::{MatchOutcome, MatchTelemetry, Turn};

#[derive(Clone, Copy, Debug)]
pub struct MatchOpts {
    /// Upper bound on recorded plies.
    pub max_turns: u32,
    /// Capture a game frame per turn (disabled for `--no-video` runs).
    pub record: bool,
}

impl Default for MatchOpts {
    fn default() -> Self {
        Self {
            max_turns: 200,
            record: true,
        }
    }
}

/// Run one match to termination, truncation or the turn cap.
#[tracing::instrument(skip_all, fields(max_turns = opts.max_turns))]
pub fn run_match(
    env: &mut dyn MatchEnv,
    agents: &mut [SkillAgent<Box<dyn Policy>>; 2],
    opts: &MatchOpts,
) -> MatchTelemetry {
    env.reset();
    let mut telemetry = MatchTelemetry::default();
    let mut cumulative = (0.0f64, 0.0f64);

    for index in 1..=opts.max_turns {
        let mover = env.current_player().min(1);
        let obs = env.observe();
        let action = agents[mover].decide(&obs);
        let step = env.step(action);

        cumulative.0 += step.rewards[0];
        cumulative.1 += step.rewards[1];
        let game_frame = if opts.record { env.render_frame() } else { None };
        telemetry.turns.push(Turn {
            index,
            game_frame,
            cumulative,
        });

        if step.terminated || step.truncated {
            break;
        }
    }

    tracing::debug!(
        turns = telemetry.turn_count(),
        score = ?cumulative,
        "match finished"
    );
    telemetry
}

/// The JSON match report printed by the CLI.
#[derive(Debug, serde::Serialize)]
pub struct MatchReport {
    pub team1: String,
    pub team2: String,
    pub rewards: BTreeMap<String, f64>,
    /// Winning team id, or `"draw"`.
    pub winner: String,
    pub turns: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
}

impl MatchReport {
    pub fn new(
        team1: &Team,
        team2: &Team,
        telemetry: &MatchTelemetry,
        outcome: &MatchOutcome,
        video: Option<String>,
    ) -> Self {
        let mut rewards = BTreeMap::new();
        rewards.insert(team1.id.clone(), outcome.final_score.0);
        rewards.insert(team2.id.clone(), outcome.final_score.1);
        Self {
            team1: team1.id.clone(),
            team2: team2.id.clone(),
            rewards,
            winner: outcome
                .winner
                .as_ref()
                .map(|t| t.id.clone())
                .unwrap_or_else(|| "draw".to_owned()),
            turns: telemetry.turn_count() as u32,
            video,
        }
    }
}
