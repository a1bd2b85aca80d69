//! Object and instrument sound recipes.

use crate::engine::{SampleBuffer, SynthEngine};
use crate::envelope::Envelope;
use crate::mixer::combine_buffers;
use crate::oscillator::Waveform;

/// Clear bell: fundamental plus two harmonics with a long ring-out.
///
/// The 1.5 s fundamental governs the output length; the shorter
/// harmonics fade inside it.
pub fn bell(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let fundamental = engine.generate_tone(800.0, 1.5, Waveform::Sine)?;
    let harmonic2 = engine.generate_tone(1600.0, 1.2, Waveform::Sine)?;
    let harmonic3 = engine.generate_tone(2400.0, 0.8, Waveform::Sine)?;

    let mut bell = combine_buffers(&[fundamental, harmonic2, harmonic3], Some(&[1.0, 0.5, 0.3]))?;
    engine.apply_envelope(&mut bell, Envelope::new(0.01, 0.3, 0.3, 1.2));
    Some(bell)
}

/// Double ring of a telephone.
pub fn phone(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let ring1 = engine.generate_tone(800.0, 0.5, Waveform::Sine)?;
    let ring2 = engine.generate_tone(1000.0, 0.4, Waveform::Sine)?;

    let mut combined = combine_buffers(&[ring1, ring2], Some(&[0.7, 0.5]))?;
    engine.apply_envelope(&mut combined, Envelope::new(0.01, 0.1, 0.8, 0.39));
    Some(combined)
}

/// Insistent alarm buzz.
pub fn alarm(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut alarm = engine.generate_tone(1000.0, 1.0, Waveform::Square)?;
    engine.apply_envelope(&mut alarm, Envelope::new(0.01, 0.05, 0.9, 0.94));
    Some(alarm)
}

/// C major chord (C5/E5/G5) held for a second.
pub fn music(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let c = engine.generate_tone(523.0, 1.0, Waveform::Sine)?;
    let e = engine.generate_tone(659.0, 1.0, Waveform::Sine)?;
    let g = engine.generate_tone(784.0, 1.0, Waveform::Sine)?;

    let mut chord = combine_buffers(&[c, e, g], Some(&[0.5, 0.5, 0.5]))?;
    engine.apply_envelope(&mut chord, Envelope::new(0.05, 0.2, 0.7, 0.73));
    Some(chord)
}

/// Plucked strum.
pub fn guitar(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut strum = engine.generate_tone(330.0, 1.2, Waveform::Sawtooth)?;
    engine.apply_envelope(&mut strum, Envelope::new(0.01, 0.3, 0.6, 0.89));
    Some(strum)
}

/// Kick thump with a snap of noise.
pub fn drum(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let kick = engine.generate_tone(60.0, 0.3, Waveform::Sine)?;
    let noise = engine.generate_noise(0.1, 0.3)?;

    let mut hit = combine_buffers(&[kick, noise], Some(&[0.8, 0.4]))?;
    engine.apply_envelope(&mut hit, Envelope::new(0.01, 0.05, 0.3, 0.24));
    Some(hit)
}

/// Single piano note (C5) with a slow fade.
pub fn piano(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut note = engine.generate_tone(523.0, 1.5, Waveform::Sine)?;
    engine.apply_envelope(&mut note, Envelope::new(0.01, 0.3, 0.5, 1.19));
    Some(note)
}

pub fn megaphone(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut voice = engine.generate_tone(400.0, 0.8, Waveform::Square)?;
    engine.apply_envelope(&mut voice, Envelope::new(0.05, 0.1, 0.9, 0.65));
    Some(voice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SAMPLE_RATE;

    #[test]
    fn test_bell_length_follows_fundamental() {
        let mut engine = SynthEngine::with_seed(42);
        let buffer = bell(&mut engine).expect("bell sound");
        assert_eq!(buffer.len(), (1.5 * SAMPLE_RATE) as usize);
    }

    #[test]
    fn test_bell_starts_silent_under_attack() {
        let mut engine = SynthEngine::with_seed(42);
        let buffer = bell(&mut engine).expect("bell sound");
        assert_eq!(buffer[0], 0.0);
    }

    #[test]
    fn test_drum_mix_is_bounded_by_gains() {
        let mut engine = SynthEngine::with_seed(42);
        let buffer = drum(&mut engine).expect("drum sound");
        // 0.8 * tone + 0.4 * noise(0.3), then enveloped
        for &s in &buffer {
            assert!(s.abs() <= 0.8 + 0.4 * 0.3 + 1e-9);
        }
    }
}
