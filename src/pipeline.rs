//! The compositing stage: telemetry in, encoded video out.

use std::path::{Path, PathBuf};

use crate::audio;
use crate::broadcast::timeline::{Timeline, TimelineSpec};
use crate::broadcast::{Broadcast, layout, timeline};
use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
use crate::encode::sink::{AudioInputConfig, FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{LeagueError, LeagueResult};
use crate::league::{MatchOutcome, MatchTelemetry, Team};
use crate::output::OutputNaming;
use crate::render::FontBook;

/// Default background-audio asset location.
pub const BACKGROUND_AUDIO: &str = "assets/audio/background.mp3";

/// Knobs for one video production.
#[derive(Clone, Debug)]
pub struct ProduceOpts {
    pub timeline: TimelineSpec,
    /// Background audio asset; missing or unreadable degrades to silence.
    pub audio_source: PathBuf,
}

impl Default for ProduceOpts {
    fn default() -> Self {
        Self {
            timeline: TimelineSpec::default(),
            audio_source: PathBuf::from(BACKGROUND_AUDIO),
        }
    }
}

/// Stream an assembled timeline into `sink`. An empty timeline is a hard
/// error: a zero-frame video cannot be produced.
pub fn mux(
    timeline: &Timeline,
    audio: Option<AudioInputConfig>,
    sink: &mut dyn FrameSink,
) -> LeagueResult<()> {
    if timeline.is_empty() {
        return Err(LeagueError::validation("timeline has no frames"));
    }

    sink.begin(SinkConfig {
        width: layout::CANVAS_WIDTH,
        height: layout::CANVAS_HEIGHT,
        fps: timeline.fps,
        audio,
    })?;
    for (i, frame) in timeline.frames.iter().enumerate() {
        sink.push_frame(FrameIndex(i as u64), frame)?;
    }
    sink.end()
}

/// Render and encode one match broadcast into `sink` (no audio staging;
/// sinks that cannot mux audio get the frames alone).
pub fn produce_match_video(
    team1: &Team,
    team2: &Team,
    game_name: &str,
    telemetry: &MatchTelemetry,
    outcome: &MatchOutcome,
    opts: &ProduceOpts,
    sink: &mut dyn FrameSink,
) -> LeagueResult<()> {
    let fonts = FontBook::load();
    let broadcast = Broadcast::new(team1, team2, game_name, &fonts)?;
    let timeline = timeline::assemble(&broadcast, telemetry, outcome, &opts.timeline)?;
    mux(&timeline, None, sink)
}

/// Full production: assemble, fit background audio, encode through `ffmpeg`,
/// and return the timestamped output path.
#[tracing::instrument(skip_all, fields(team1 = %team1.id, team2 = %team2.id))]
pub fn produce_match_video_file(
    team1: &Team,
    team2: &Team,
    game_name: &str,
    telemetry: &MatchTelemetry,
    outcome: &MatchOutcome,
    opts: &ProduceOpts,
    naming: &OutputNaming,
) -> LeagueResult<PathBuf> {
    let fonts = FontBook::load();
    let broadcast = Broadcast::new(team1, team2, game_name, &fonts)?;
    let timeline = timeline::assemble(&broadcast, telemetry, outcome, &opts.timeline)?;

    let out_path = naming.video_path(&team1.id, &team2.id);
    let scratch = out_path.with_extension("f32le");
    let audio = audio::prepare_background_track(
        &opts.audio_source,
        timeline.len() as u64,
        timeline.fps,
        &scratch,
    );
    let had_audio = audio.is_some();

    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(out_path.clone()));
    let result = mux(&timeline, audio, &mut sink);
    remove_scratch(&scratch, had_audio);
    result?;

    tracing::info!(path = %out_path.display(), frames = timeline.len(), "wrote match video");
    Ok(out_path)
}

fn remove_scratch(scratch: &Path, existed: bool) {
    if existed && let Err(err) = std::fs::remove_file(scratch) {
        tracing::debug!(path = %scratch.display(), %err, "could not remove audio scratch file");
    }
}
