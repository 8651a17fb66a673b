//! Timeline assembly: intro frames, one play frame per sampled turn,
//! outcome frames, in that order.

use std::num::NonZeroU32;

use image::RgbImage;

use crate::broadcast::play::PlayFrame;
use crate::broadcast::{Broadcast, intro, outcome, play};
use crate::foundation::core::Fps;
use crate::foundation::error::LeagueResult;
use crate::league::{MatchOutcome, MatchTelemetry, Turn};

/// Timing parameters for one broadcast.
#[derive(Clone, Copy, Debug)]
pub struct TimelineSpec {
    pub fps: Fps,
    pub intro_secs: f64,
    pub outcome_secs: f64,
    /// Render every k-th turn to bound output size; 1 renders every turn.
    pub stride: NonZeroU32,
}

impl Default for TimelineSpec {
    fn default() -> Self {
        Self {
            fps: Fps { num: 24, den: 1 },
            intro_secs: 3.0,
            outcome_secs: 4.0,
            stride: NonZeroU32::MIN,
        }
    }
}

impl TimelineSpec {
    pub fn intro_frames(&self) -> u64 {
        self.fps.secs_to_frames_floor(self.intro_secs)
    }

    pub fn outcome_frames(&self) -> u64 {
        self.fps.secs_to_frames_floor(self.outcome_secs)
    }
}

/// The final ordered frame sequence with its frame rate.
pub struct Timeline {
    pub frames: Vec<RgbImage>,
    pub fps: Fps,
}

impl Timeline {
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn duration_secs(&self) -> f64 {
        self.fps.frames_to_secs(self.frames.len() as u64)
    }
}

/// Order-preserving every-k-th turn selection. The score carried by each
/// selected turn is its own cumulative score; nothing is interpolated across
/// skipped turns.
pub fn sampled_turns(telemetry: &MatchTelemetry, stride: NonZeroU32) -> Vec<&Turn> {
    telemetry
        .turns
        .iter()
        .step_by(stride.get() as usize)
        .collect()
}

/// Build the full frame sequence. A zero-turn telemetry still yields intro
/// and outcome segments.
pub fn assemble(
    b: &Broadcast,
    telemetry: &MatchTelemetry,
    outcome: &MatchOutcome,
    spec: &TimelineSpec,
) -> LeagueResult<Timeline> {
    telemetry.validate()?;

    let intro_total = spec.intro_frames();
    let outcome_total = spec.outcome_frames();
    let sampled = sampled_turns(telemetry, spec.stride);

    let mut frames =
        Vec::with_capacity(intro_total as usize + sampled.len() + outcome_total as usize);

    for i in 0..intro_total {
        frames.push(intro::render(b, i, intro_total));
    }
    for (ordinal, turn) in sampled.iter().enumerate() {
        frames.push(play::render(
            b,
            &PlayFrame {
                ordinal: ordinal as u64,
                turn_index: turn.index,
                game_frame: turn.game_frame.as_ref(),
                score: turn.cumulative,
            },
        ));
    }
    for i in 0..outcome_total {
        frames.push(outcome::render(b, outcome, i, outcome_total));
    }

    tracing::debug!(
        intro = intro_total,
        play = sampled.len(),
        outcome = outcome_total,
        "assembled timeline"
    );
    Ok(Timeline {
        frames,
        fps: spec.fps,
    })
}
