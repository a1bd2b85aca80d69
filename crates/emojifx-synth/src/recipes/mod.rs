//! Sound recipe library.
//!
//! Each recipe is a fixed pipeline with literal parameters: one to
//! three generator calls, an optional mix or offset overlay, and an
//! ADSR envelope. Recipes are grouped by theme purely for organization;
//! all share the same shape and the same `Option` degradation policy
//! (a generator that produces nothing makes the whole recipe produce
//! nothing).

pub mod actions;
pub mod animals;
pub mod emotions;
pub mod food;
pub mod games;
pub mod misc;
pub mod nature;
pub mod objects;
pub mod tech;
pub mod vehicles;

use crate::engine::{SampleBuffer, SynthEngine};
use crate::envelope::Envelope;
use crate::mixer::{Layer, Mixer};
use crate::oscillator::Waveform;

/// Generic playful fallback: a bouncy C5/E5/G5 arpeggio.
///
/// Used for every emoji without a dedicated recipe.
pub fn playful_fallback(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let sample_rate = engine.sample_rate();
    let mut mixer = Mixer::new((1.0 * sample_rate) as usize);

    let notes = [523.0, 659.0, 784.0];
    for (index, &freq) in notes.iter().enumerate() {
        let mut note = engine.generate_tone(freq, 0.25, Waveform::Sine)?;
        engine.apply_envelope(&mut note, Envelope::new(0.01, 0.05, 0.8, 0.19));
        mixer.add_layer(
            Layer::new(note, 0.7).with_delay_seconds(index as f64 * 0.3, sample_rate),
        );
    }

    Some(mixer.mix())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SAMPLE_RATE;

    #[test]
    fn test_fallback_fills_one_second() {
        let mut engine = SynthEngine::with_seed(42);
        let buffer = playful_fallback(&mut engine).expect("fallback sound");
        assert_eq!(buffer.len(), SAMPLE_RATE as usize);
    }

    #[test]
    fn test_fallback_notes_are_staggered() {
        let mut engine = SynthEngine::with_seed(42);
        let buffer = playful_fallback(&mut engine).expect("fallback sound");
        // Notes last 0.25s at 0.3s spacing: probe the silent gaps
        let gap1 = (0.27 * SAMPLE_RATE) as usize;
        let gap2 = (0.57 * SAMPLE_RATE) as usize;
        assert_eq!(buffer[gap1], 0.0);
        assert_eq!(buffer[gap2], 0.0);
    }
}
