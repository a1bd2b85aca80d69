//! Vehicle and transportation sound recipes.

use crate::engine::{SampleBuffer, SynthEngine};
use crate::envelope::Envelope;
use crate::mixer::combine_buffers;
use crate::oscillator::Waveform;

/// Playful car honk: square base with a sine harmonic.
pub fn car(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let base = engine.generate_tone(220.0, 0.8, Waveform::Square)?;
    let harmonic = engine.generate_tone(440.0, 0.6, Waveform::Sine)?;

    let mut honk = combine_buffers(&[base, harmonic], Some(&[0.7, 0.3]))?;
    engine.apply_envelope(&mut honk, Envelope::new(0.05, 0.1, 0.9, 0.65));
    Some(honk)
}

/// Long train whistle.
pub fn train(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut whistle = engine.generate_tone(800.0, 1.5, Waveform::Sine)?;
    engine.apply_envelope(&mut whistle, Envelope::new(0.3, 0.2, 0.8, 0.8));
    Some(whistle)
}

/// Droning engine with a slow swell.
pub fn plane(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut drone = engine.generate_tone(200.0, 2.0, Waveform::Sawtooth)?;
    engine.apply_envelope(&mut drone, Envelope::new(0.5, 0.3, 0.9, 1.2));
    Some(drone)
}

/// Chopping rotor thud.
pub fn helicopter(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut rotor = engine.generate_tone(120.0, 1.5, Waveform::Square)?;
    engine.apply_envelope(&mut rotor, Envelope::new(0.2, 0.1, 0.9, 1.2));
    Some(rotor)
}

/// Bright bicycle bell ding.
pub fn bicycle(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut bell = engine.generate_tone(1200.0, 0.5, Waveform::Sine)?;
    engine.apply_envelope(&mut bell, Envelope::new(0.01, 0.1, 0.6, 0.39));
    Some(bell)
}

pub fn scooter(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut buzz = engine.generate_tone(180.0, 1.0, Waveform::Sawtooth)?;
    engine.apply_envelope(&mut buzz, Envelope::new(0.1, 0.2, 0.8, 0.7));
    Some(buzz)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SAMPLE_RATE;

    #[test]
    fn test_car_length_matches_longest_layer() {
        let mut engine = SynthEngine::with_seed(42);
        let buffer = car(&mut engine).expect("car sound");
        assert_eq!(buffer.len(), (0.8 * SAMPLE_RATE) as usize);
    }

    #[test]
    fn test_plane_is_two_seconds() {
        let mut engine = SynthEngine::with_seed(42);
        let buffer = plane(&mut engine).expect("plane sound");
        assert_eq!(buffer.len(), (2.0 * SAMPLE_RATE) as usize);
    }
}
