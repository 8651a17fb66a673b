//! The fully materialized record of a simulated match.

use image::RgbImage;

use crate::foundation::error::{LeagueError, LeagueResult};
use crate::league::team::Team;

/// One recorded ply: the rendered game frame (if any) and the cumulative
/// score as of this turn.
pub struct Turn {
    /// 1-based turn number.
    pub index: u32,
    pub game_frame: Option<RgbImage>,
    /// Exact running sum of signed per-turn rewards for (team1, team2).
    pub cumulative: (f64, f64),
}

/// Ordered per-turn record, fully materialized before compositing begins.
#[derive(Default)]
pub struct MatchTelemetry {
    pub turns: Vec<Turn>,
}

impl MatchTelemetry {
    /// Turn indices must start at 1 and increase strictly.
    pub fn validate(&self) -> LeagueResult<()> {
        let mut prev = 0u32;
        for turn in &self.turns {
            if prev == 0 && turn.index != 1 {
                return Err(LeagueError::validation(format!(
                    "telemetry must start at turn 1, got {}",
                    turn.index
                )));
            }
            if prev != 0 && turn.index <= prev {
                return Err(LeagueError::validation(format!(
                    "telemetry turn indices must increase strictly ({} after {prev})",
                    turn.index
                )));
            }
            prev = turn.index;
        }
        Ok(())
    }

    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }

    /// Final cumulative score; `(0, 0)` for a zero-turn match.
    pub fn final_score(&self) -> (f64, f64) {
        self.turns
            .last()
            .map(|t| t.cumulative)
            .unwrap_or((0.0, 0.0))
    }
}

/// Match result as the compositor sees it.
#[derive(Clone, Debug)]
pub struct MatchOutcome {
    /// `None` means a draw.
    pub winner: Option<Team>,
    pub final_score: (f64, f64),
}

impl MatchOutcome {
    /// Winner by final score comparison; a zero-turn match is a `(0, 0)`
    /// draw.
    pub fn decide(team1: &Team, team2: &Team, telemetry: &MatchTelemetry) -> Self {
        let (s1, s2) = telemetry.final_score();
        let winner = if s1 > s2 {
            Some(team1.clone())
        } else if s2 > s1 {
            Some(team2.clone())
        } else {
            None
        };
        Self {
            winner,
            final_score: (s1, s2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(id: &str) -> Team {
        Team {
            id: id.into(),
            name: id.to_uppercase(),
            color: "#FF0000".into(),
            skill_level: None,
        }
    }

    fn turn(index: u32, cumulative: (f64, f64)) -> Turn {
        Turn {
            index,
            game_frame: None,
            cumulative,
        }
    }

    #[test]
    fn validate_accepts_gapped_but_increasing_indices() {
        let t = MatchTelemetry {
            turns: vec![turn(1, (0.0, 0.0)), turn(3, (1.0, 0.0)), turn(7, (2.0, 0.0))],
        };
        assert!(t.validate().is_ok());
    }

    #[test]
    fn validate_rejects_wrong_start_and_repeats() {
        let starts_late = MatchTelemetry {
            turns: vec![turn(2, (0.0, 0.0))],
        };
        assert!(starts_late.validate().is_err());

        let repeats = MatchTelemetry {
            turns: vec![turn(1, (0.0, 0.0)), turn(1, (0.0, 0.0))],
        };
        assert!(repeats.validate().is_err());
    }

    #[test]
    fn decide_picks_the_higher_score() {
        let t = MatchTelemetry {
            turns: vec![turn(1, (0.0, 0.0)), turn(2, (2.0, 1.0))],
        };
        let outcome = MatchOutcome::decide(&team("a"), &team("b"), &t);
        assert_eq!(outcome.winner.as_ref().map(|t| t.id.as_str()), Some("a"));
        assert_eq!(outcome.final_score, (2.0, 1.0));
    }

    #[test]
    fn decide_handles_negative_scores() {
        // Rewards are signed; a less-negative total still wins.
        let t = MatchTelemetry {
            turns: vec![turn(1, (-1.0, -2.0))],
        };
        let outcome = MatchOutcome::decide(&team("a"), &team("b"), &t);
        assert_eq!(outcome.winner.as_ref().map(|t| t.id.as_str()), Some("a"));
    }

    #[test]
    fn zero_turns_is_a_scoreless_draw() {
        let outcome = MatchOutcome::decide(&team("a"), &team("b"), &MatchTelemetry::default());
        assert!(outcome.winner.is_none());
        assert_eq!(outcome.final_score, (0.0, 0.0));
    }
}
