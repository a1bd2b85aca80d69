//! Procedural cartoon sound effects for emoji.
//!
//! Every sound is synthesized from scratch at 44100 Hz: oscillators and
//! a noise source produce raw buffers, ADSR envelopes shape them, a
//! mixer layers them, and a WAV encoder turns the result into a
//! playable mono 16-bit file. No samples are shipped or loaded.
//!
//! The high-level entry point is [`SoundMapper`], which resolves an
//! emoji glyph to one of roughly 65 fixed recipes (or a playful
//! fallback arpeggio) and memoizes the rendered buffer per session:
//!
//! ```
//! use emojifx_synth::SoundMapper;
//!
//! let mut mapper = SoundMapper::new();
//! let wav = mapper.render_wav("🔔").unwrap();
//! assert!(wav.wav_data.starts_with(b"RIFF"));
//! ```
//!
//! The lower layers are usable on their own: [`SynthEngine`] for raw
//! tone/sweep/noise buffers, [`Envelope`] for shaping, and
//! [`mixer::Mixer`] for layering with per-layer gain and delay.
//! Buffers stay unclamped `f64` throughout the pipeline; clipping
//! happens exactly once, at 16-bit PCM conversion.

pub mod engine;
pub mod envelope;
pub mod error;
pub mod mapper;
pub mod mixer;
pub mod oscillator;
pub mod recipes;
pub mod wav;

pub use engine::{SampleBuffer, SynthEngine, SAMPLE_RATE};
pub use envelope::Envelope;
pub use error::{SfxError, SfxResult};
pub use mapper::{SoundMapper, POPULAR_EMOJIS};
pub use oscillator::Waveform;
pub use wav::WavResult;

#[cfg(test)]
mod integration_tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn seeded_mapper() -> SoundMapper {
        SoundMapper::with_engine(SynthEngine::with_seed(7))
    }

    #[test]
    fn test_bell_renders_one_and_a_half_seconds() {
        let mut mapper = seeded_mapper();
        let bell = mapper.sound_for_emoji("🔔").expect("bell sound");
        assert_eq!(bell.len(), (1.5 * SAMPLE_RATE) as usize);
    }

    #[test]
    fn test_repeat_request_hits_the_cache() {
        let mut mapper = seeded_mapper();
        let first = mapper.sound_for_emoji("😂").expect("laugh sound");
        let second = mapper.sound_for_emoji("😂").expect("laugh sound");
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_cache_clear_recomputes_from_scratch() {
        let mut mapper = seeded_mapper();
        let before = mapper.sound_for_emoji("🚗").expect("car sound");
        mapper.clear_cache();
        let after = mapper.sound_for_emoji("🚗").expect("car sound");
        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(before.len(), after.len());
    }

    #[test]
    fn test_unmapped_emoji_gets_a_sound_anyway() {
        let mut mapper = seeded_mapper();
        let unicorn = mapper.sound_for_emoji("🦄").expect("fallback sound");
        assert_eq!(unicorn.len(), SAMPLE_RATE as usize);

        let again = mapper.sound_for_emoji("🦄").expect("fallback sound");
        assert!(Arc::ptr_eq(&unicorn, &again));
    }

    #[test]
    fn test_rendered_wav_round_trips_through_header() {
        let mut mapper = seeded_mapper();
        let result = mapper.render_wav("🎵").expect("music wav");

        let header = &result.wav_data;
        assert_eq!(&header[0..4], b"RIFF");
        assert_eq!(&header[8..12], b"WAVE");

        // fmt chunk: PCM, mono, 44100 Hz, 16-bit
        assert_eq!(u16::from_le_bytes([header[20], header[21]]), 1);
        assert_eq!(u16::from_le_bytes([header[22], header[23]]), 1);
        assert_eq!(
            u32::from_le_bytes([header[24], header[25], header[26], header[27]]),
            44100
        );
        assert_eq!(u16::from_le_bytes([header[34], header[35]]), 16);

        let pcm = wav::extract_pcm_data(&result.wav_data).expect("data chunk");
        assert_eq!(pcm.len(), result.num_samples * 2);
    }

    #[test]
    fn test_seeded_noise_recipes_are_reproducible() {
        let mut a = seeded_mapper();
        let mut b = seeded_mapper();
        let dice_a = a.sound_for_emoji("🎲").expect("dice sound");
        let dice_b = b.sound_for_emoji("🎲").expect("dice sound");
        assert_eq!(*dice_a, *dice_b);
    }

    #[test]
    fn test_full_popular_set_renders() {
        let mut mapper = seeded_mapper();
        for emoji in POPULAR_EMOJIS {
            let result = mapper.render_wav(emoji);
            assert!(result.is_ok(), "render failed for {emoji}");
        }
    }
}
