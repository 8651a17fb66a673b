pub mod track;

pub use track::{
    AudioPcm, BACKGROUND_GAIN, MIX_SAMPLE_RATE, apply_gain, decode_audio_f32_stereo,
    fit_to_sample_frames, frames_to_sample_frames, prepare_background_track, write_f32le,
};
