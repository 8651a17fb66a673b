//! Output-file naming behind an injectable clock, so the timestamp side
//! effect is isolated and filenames are exactly testable.

use std::path::{Path, PathBuf};

use time::OffsetDateTime;

/// Timestamp source for output filenames.
pub trait Clock {
    /// `YYYYMMDD_HHMMSS` stamp.
    fn stamp(&self) -> String;
}

/// Wall-clock stamps in UTC.
pub struct SystemClock;

impl Clock for SystemClock {
    fn stamp(&self) -> String {
        const FORMAT: &str = "[year][month][day]_[hour][minute][second]";
        let now = OffsetDateTime::now_utc();
        time::format_description::parse(FORMAT)
            .ok()
            .and_then(|fmt| now.format(&fmt).ok())
            .unwrap_or_else(|| now.unix_timestamp().to_string())
    }
}

/// Fixed stamp for deterministic tests.
pub struct FixedClock(pub String);

impl Clock for FixedClock {
    fn stamp(&self) -> String {
        self.0.clone()
    }
}

/// Produces `{team1}_vs_{team2}_{stamp}.mp4` paths under the videos
/// directory. The directory itself is created on demand at encode time.
pub struct OutputNaming {
    videos_dir: PathBuf,
    clock: Box<dyn Clock>,
}

impl OutputNaming {
    pub fn new(videos_dir: impl Into<PathBuf>, clock: Box<dyn Clock>) -> Self {
        Self {
            videos_dir: videos_dir.into(),
            clock,
        }
    }

    /// Wall-clock naming under `videos/`.
    pub fn system() -> Self {
        Self::new("videos", Box::new(SystemClock))
    }

    pub fn videos_dir(&self) -> &Path {
        &self.videos_dir
    }

    pub fn video_path(&self, team1_id: &str, team2_id: &str) -> PathBuf {
        self.videos_dir
            .join(format!("{team1_id}_vs_{team2_id}_{}.mp4", self.clock.stamp()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_yields_exact_deterministic_paths() {
        let naming = OutputNaming::new(
            "videos",
            Box::new(FixedClock("20260806_120000".into())),
        );
        assert_eq!(
            naming.video_path("la", "nyc"),
            Path::new("videos/la_vs_nyc_20260806_120000.mp4")
        );
    }

    #[test]
    fn system_clock_stamp_has_the_expected_shape() {
        let stamp = SystemClock.stamp();
        assert_eq!(stamp.len(), 15, "{stamp}");
        assert_eq!(stamp.as_bytes()[8], b'_');
        assert!(stamp[..8].bytes().all(|b| b.is_ascii_digit()));
        assert!(stamp[9..].bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn distinct_matches_never_collide() {
        let naming = OutputNaming::new("videos", Box::new(FixedClock("s".into())));
        assert_ne!(naming.video_path("a", "b"), naming.video_path("b", "a"));
    }
}
