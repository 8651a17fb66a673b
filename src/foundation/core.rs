use crate::foundation::error::{LeagueError, LeagueResult};

/// Absolute 0-based frame index in timeline space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameIndex(pub u64);

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> LeagueResult<Self> {
        if den == 0 {
            return Err(LeagueError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(LeagueError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Convert frame count to seconds.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }

    /// Convert seconds to frame count using floor semantics.
    pub fn secs_to_frames_floor(self, secs: f64) -> u64 {
        (secs * self.as_f64()).floor().max(0.0) as u64
    }
}

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fps_rejects_zero() {
        assert!(Fps::new(24, 0).is_err());
        assert!(Fps::new(0, 1).is_err());
        assert!(Fps::new(24, 1).is_ok());
    }

    #[test]
    fn fps_conversions_round_trip() {
        let fps = Fps::new(24, 1).unwrap();
        assert_eq!(fps.as_f64(), 24.0);
        assert_eq!(fps.secs_to_frames_floor(3.0), 72);
        assert_eq!(fps.frames_to_secs(72), 3.0);
    }

    #[test]
    fn rational_fps_floor_semantics() {
        // 30000/1001 ~ 29.97: one second floors to 29 whole frames.
        let fps = Fps::new(30_000, 1001).unwrap();
        assert_eq!(fps.secs_to_frames_floor(1.0), 29);
    }
}
