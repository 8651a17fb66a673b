//! Background-audio decoding and fitting.
//!
//! The source asset is decoded to stereo f32 PCM through the system `ffmpeg`,
//! fitted to the exact video duration (looped when shorter, truncated when
//! longer), attenuated, and written as a raw `.f32le` side file the encoder
//! muxes in. Everything here is best-effort: failures degrade to a silent
//! video, never to an error.

use std::path::Path;

use crate::encode::sink::AudioInputConfig;
use crate::foundation::core::Fps;
use crate::foundation::error::{LeagueError, LeagueResult};

/// Mixing sample rate used across decode/fit/encode.
pub const MIX_SAMPLE_RATE: u32 = 48_000;

/// Stereo throughout the pipeline.
pub const MIX_CHANNELS: u16 = 2;

/// Background tracks are attenuated to this fraction of original volume.
pub const BACKGROUND_GAIN: f32 = 0.3;

/// Decoded interleaved floating-point PCM.
#[derive(Clone, Debug)]
pub struct AudioPcm {
    pub sample_rate: u32,
    pub channels: u16,
    pub interleaved_f32: Vec<f32>,
}

/// Decode an audio asset to stereo interleaved `f32` PCM at `sample_rate`.
pub fn decode_audio_f32_stereo(path: &Path, sample_rate: u32) -> LeagueResult<AudioPcm> {
    let out = std::process::Command::new("ffmpeg")
        .args(["-v", "error", "-i"])
        .arg(path)
        .args([
            "-vn",
            "-f",
            "f32le",
            "-acodec",
            "pcm_f32le",
            "-ac",
            "2",
            "-ar",
            &sample_rate.to_string(),
            "pipe:1",
        ])
        .output()
        .map_err(|e| LeagueError::encode(format!("failed to run ffmpeg for audio decode: {e}")))?;

    if !out.status.success() {
        return Err(LeagueError::encode(format!(
            "ffmpeg audio decode failed for '{}': {}",
            path.display(),
            String::from_utf8_lossy(&out.stderr).trim()
        )));
    }

    if !out.stdout.len().is_multiple_of(4) {
        return Err(LeagueError::encode(
            "decoded audio byte length is not aligned to f32 samples",
        ));
    }
    let mut pcm = Vec::<f32>::with_capacity(out.stdout.len() / 4);
    for chunk in out.stdout.chunks_exact(4) {
        pcm.push(f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
    }

    Ok(AudioPcm {
        sample_rate,
        channels: MIX_CHANNELS,
        interleaved_f32: pcm,
    })
}

/// Convert a frame count to sample frames at `sample_rate`, rounding to the
/// nearest sample on rational FPS.
pub fn frames_to_sample_frames(frame_count: u64, fps: Fps, sample_rate: u32) -> u64 {
    let num = u128::from(frame_count) * u128::from(sample_rate) * u128::from(fps.den);
    let den = u128::from(fps.num);
    ((num + (den / 2)) / den) as u64
}

/// Fit interleaved PCM to exactly `target_frames` sample frames: seamless
/// repeat when the source is shorter, truncation when longer.
pub fn fit_to_sample_frames(src: &[f32], channels: u16, target_frames: u64) -> Vec<f32> {
    let target_samples = (target_frames as usize) * usize::from(channels);
    if src.is_empty() {
        return vec![0.0; target_samples];
    }
    (0..target_samples).map(|i| src[i % src.len()]).collect()
}

/// Scale samples by `gain`, clamping into `[-1, 1]`.
pub fn apply_gain(samples: &mut [f32], gain: f32) {
    for s in samples {
        *s = (*s * gain).clamp(-1.0, 1.0);
    }
}

/// Write interleaved `f32` PCM to a raw little-endian `.f32le` file.
pub fn write_f32le(samples: &[f32], out_path: &Path) -> LeagueResult<()> {
    if let Some(parent) = out_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            LeagueError::encode(format!(
                "failed to create audio scratch directory '{}': {e}",
                parent.display()
            ))
        })?;
    }

    let mut bytes = Vec::<u8>::with_capacity(samples.len() * 4);
    for &sample in samples {
        bytes.extend_from_slice(&sample.to_le_bytes());
    }
    std::fs::write(out_path, bytes).map_err(|e| {
        LeagueError::encode(format!(
            "failed to write audio scratch file '{}': {e}",
            out_path.display()
        ))
    })
}

/// Best-effort background track preparation for a video of `video_frames`
/// frames at `fps`. Any failure degrades to `None` (a silent video) with a
/// logged warning.
pub fn prepare_background_track(
    source: &Path,
    video_frames: u64,
    fps: Fps,
    scratch_path: &Path,
) -> Option<AudioInputConfig> {
    if !source.exists() {
        tracing::debug!(source = %source.display(), "no background audio asset");
        return None;
    }

    let pcm = match decode_audio_f32_stereo(source, MIX_SAMPLE_RATE) {
        Ok(pcm) => pcm,
        Err(err) => {
            tracing::warn!(source = %source.display(), %err, "background audio unusable, producing silent video");
            return None;
        }
    };
    if pcm.interleaved_f32.is_empty() {
        tracing::warn!(source = %source.display(), "background audio decoded to no samples");
        return None;
    }

    let target = frames_to_sample_frames(video_frames, fps, MIX_SAMPLE_RATE);
    let mut fitted = fit_to_sample_frames(&pcm.interleaved_f32, pcm.channels, target);
    apply_gain(&mut fitted, BACKGROUND_GAIN);

    if let Err(err) = write_f32le(&fitted, scratch_path) {
        tracing::warn!(%err, "failed to stage fitted audio, producing silent video");
        return None;
    }

    Some(AudioInputConfig {
        path: scratch_path.to_path_buf(),
        sample_rate: MIX_SAMPLE_RATE,
        channels: MIX_CHANNELS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_to_sample_uses_rational_fps() {
        // 30000/1001 ~ 29.97
        let fps = Fps {
            num: 30_000,
            den: 1001,
        };
        assert_eq!(frames_to_sample_frames(0, fps, 48_000), 0);
        assert!(frames_to_sample_frames(1, fps, 48_000) > 0);

        let fps24 = Fps { num: 24, den: 1 };
        assert_eq!(frames_to_sample_frames(24, fps24, 48_000), 48_000);
    }

    #[test]
    fn short_sources_loop_to_the_exact_target() {
        let src = vec![0.1f32, 0.2, 0.3, 0.4]; // 2 stereo frames
        let fitted = fit_to_sample_frames(&src, 2, 5);
        assert_eq!(fitted.len(), 10);
        assert_eq!(&fitted[..4], &src[..]);
        // Seamless repeat continues the pattern.
        assert_eq!(fitted[4], 0.1);
        assert_eq!(fitted[9], 0.2);
    }

    #[test]
    fn long_sources_truncate_to_the_target() {
        let src: Vec<f32> = (0..100).map(|i| i as f32).collect();
        let fitted = fit_to_sample_frames(&src, 2, 10);
        assert_eq!(fitted.len(), 20);
        assert_eq!(fitted[19], 19.0);
    }

    #[test]
    fn gain_attenuates_and_clamps() {
        let mut samples = vec![1.0f32, -1.0, 0.5, 4.0];
        apply_gain(&mut samples, 0.3);
        assert!((samples[0] - 0.3).abs() < 1e-6);
        assert!((samples[1] + 0.3).abs() < 1e-6);
        assert!((samples[3] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn missing_asset_degrades_to_none() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = prepare_background_track(
            &dir.path().join("background.mp3"),
            240,
            Fps { num: 24, den: 1 },
            &dir.path().join("scratch.f32le"),
        );
        assert!(cfg.is_none());
    }

    #[test]
    fn f32le_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mix.f32le");
        let samples = vec![0.25f32, -0.5, 0.75];
        write_f32le(&samples, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes.len(), 12);
        let back: Vec<f32> = bytes
            .chunks_exact(4)
            .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        assert_eq!(back, samples);
    }
}
