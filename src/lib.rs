//! Leaguecast runs scripted two-agent matches in a turn-based game and renders
//! each match into a broadcast-style vertical video.
//!
//! The pipeline is a one-way, batch flow:
//!
//! - [`league`] simulates a match and materializes a [`league::MatchTelemetry`]
//! - [`broadcast`] assembles intro / play / outcome frames into a
//!   [`broadcast::Timeline`]
//! - [`encode`] streams the timeline into a [`encode::FrameSink`] (system
//!   `ffmpeg` for MP4 output, in-memory for tests), optionally muxing a
//!   background audio track prepared by [`audio`]
#![forbid(unsafe_code)]

pub mod audio;
pub mod broadcast;
pub mod encode;
mod foundation;
pub mod league;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod theme;

pub use foundation::core::{CanvasSize, Fps, FrameIndex};
pub use foundation::error::{LeagueError, LeagueResult};

pub use broadcast::timeline::{Timeline, TimelineSpec};
pub use encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
pub use encode::sink::{AudioInputConfig, FrameSink, InMemorySink, SinkConfig};
pub use league::{MatchOutcome, MatchTelemetry, Team, Turn};
pub use output::{Clock, FixedClock, OutputNaming, SystemClock};
