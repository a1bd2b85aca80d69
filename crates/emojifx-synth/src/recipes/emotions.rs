//! Emotion and face sound recipes.

use crate::engine::{SampleBuffer, SynthEngine};
use crate::envelope::Envelope;
use crate::mixer::{Layer, Mixer};
use crate::oscillator::Waveform;

/// Silly laughter: four quick giggles stepping up in pitch.
pub fn laugh(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let sample_rate = engine.sample_rate();
    let mut mixer = Mixer::new((1.2 * sample_rate) as usize);

    for i in 0..4 {
        let pitch = 300.0 + i as f64 * 50.0;
        let mut giggle = engine.generate_tone(pitch, 0.15, Waveform::Sine)?;
        engine.apply_envelope(&mut giggle, Envelope::new(0.01, 0.05, 0.8, 0.09));
        mixer.add_layer(Layer::new(giggle, 0.7).with_delay_seconds(i as f64 * 0.2, sample_rate));
    }

    Some(mixer.mix())
}

/// Falling sob.
pub fn cry(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut sob = engine.generate_sweep(400.0, 200.0, 1.0, Waveform::Sine)?;
    engine.apply_envelope(&mut sob, Envelope::new(0.2, 0.3, 0.8, 0.5));
    Some(sob)
}

/// Rumbling snore.
pub fn snore(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut snore = engine.generate_tone(80.0, 1.5, Waveform::Sawtooth)?;
    engine.apply_envelope(&mut snore, Envelope::new(0.3, 0.2, 0.9, 1.0));
    Some(snore)
}

/// Short noise burst of a sneeze.
pub fn sneeze(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut burst = engine.generate_noise(0.3, 0.8)?;
    engine.apply_envelope(&mut burst, Envelope::new(0.01, 0.05, 0.8, 0.24));
    Some(burst)
}

/// Rising sawtooth shriek.
pub fn scream(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut shriek = engine.generate_sweep(800.0, 1200.0, 0.8, Waveform::Sawtooth)?;
    engine.apply_envelope(&mut shriek, Envelope::new(0.01, 0.1, 0.9, 0.69));
    Some(shriek)
}

/// Long slow yawn on a falling sweep.
pub fn yawn(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut yawn = engine.generate_sweep(300.0, 150.0, 1.5, Waveform::Sine)?;
    engine.apply_envelope(&mut yawn, Envelope::new(0.3, 0.5, 0.8, 0.7));
    Some(yawn)
}

pub fn yum(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut yum = engine.generate_tone(500.0, 0.6, Waveform::Sine)?;
    engine.apply_envelope(&mut yum, Envelope::new(0.05, 0.1, 0.8, 0.45));
    Some(yum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SAMPLE_RATE;

    #[test]
    fn test_laugh_fills_a_1_2_second_window() {
        let mut engine = SynthEngine::with_seed(42);
        let buffer = laugh(&mut engine).expect("laugh sound");
        assert_eq!(buffer.len(), (1.2 * SAMPLE_RATE) as usize);
    }

    #[test]
    fn test_laugh_giggles_do_not_overlap() {
        let mut engine = SynthEngine::with_seed(42);
        let buffer = laugh(&mut engine).expect("laugh sound");
        // Each giggle lasts 0.15s at 0.2s spacing; probe the gap
        let gap = (0.17 * SAMPLE_RATE) as usize;
        assert_eq!(buffer[gap], 0.0);
    }

    #[test]
    fn test_sneeze_is_noise_shaped() {
        let mut engine = SynthEngine::with_seed(42);
        let buffer = sneeze(&mut engine).expect("sneeze sound");
        assert_eq!(buffer.len(), (0.3 * SAMPLE_RATE) as usize);
        for &s in &buffer {
            assert!(s.abs() <= 0.8);
        }
    }
}
