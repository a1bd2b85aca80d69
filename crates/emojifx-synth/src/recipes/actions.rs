//! Action and effect sound recipes.

use crate::engine::{SampleBuffer, SynthEngine};
use crate::envelope::Envelope;
use crate::mixer::{combine_buffers, Layer, Mixer};
use crate::oscillator::Waveform;

/// Cartoon boom: low thump plus a noise burst.
pub fn boom(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let thump = engine.generate_tone(80.0, 0.5, Waveform::Sine)?;
    let burst = engine.generate_noise(0.3, 0.4)?;

    let mut boom = combine_buffers(&[thump, burst], Some(&[0.8, 0.6]))?;
    engine.apply_envelope(&mut boom, Envelope::new(0.01, 0.2, 0.3, 0.29));
    Some(boom)
}

/// Sparkling chimes: four staggered notes of a C6 arpeggio.
pub fn sparkle(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let sample_rate = engine.sample_rate();
    let mut mixer = Mixer::new((1.5 * sample_rate) as usize);

    // C6, E6, G6, Bb6
    let frequencies = [1047.0, 1319.0, 1568.0, 1865.0];
    for (index, &freq) in frequencies.iter().enumerate() {
        let mut chime = engine.generate_tone(freq, 0.6, Waveform::Sine)?;
        engine.apply_envelope(&mut chime, Envelope::new(0.01, 0.2, 0.4, 0.39));
        mixer.add_layer(
            Layer::new(chime, 0.6).with_delay_seconds(index as f64 * 0.1, sample_rate),
        );
    }

    Some(mixer.mix())
}

/// Rising twinkle.
pub fn twinkle(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut twinkle = engine.generate_sweep(1500.0, 2500.0, 0.8, Waveform::Sine)?;
    engine.apply_envelope(&mut twinkle, Envelope::new(0.01, 0.2, 0.5, 0.59));
    Some(twinkle)
}

/// Party horn on a rising sawtooth.
pub fn celebration(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut horn = engine.generate_sweep(400.0, 800.0, 1.0, Waveform::Sawtooth)?;
    engine.apply_envelope(&mut horn, Envelope::new(0.01, 0.1, 0.8, 0.89));
    Some(horn)
}

/// Sharp clap of noise.
pub fn clap(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut clap = engine.generate_noise(0.1, 0.8)?;
    engine.apply_envelope(&mut clap, Envelope::new(0.01, 0.02, 0.5, 0.07));
    Some(clap)
}

pub fn dance(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut beat = engine.generate_tone(120.0, 1.0, Waveform::Square)?;
    engine.apply_envelope(&mut beat, Envelope::new(0.01, 0.1, 0.8, 0.89));
    Some(beat)
}

pub fn running(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut steps = engine.generate_noise(0.8, 0.3)?;
    engine.apply_envelope(&mut steps, Envelope::new(0.05, 0.1, 0.7, 0.65));
    Some(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SAMPLE_RATE;

    #[test]
    fn test_boom_length_follows_thump() {
        let mut engine = SynthEngine::with_seed(42);
        let buffer = boom(&mut engine).expect("boom sound");
        assert_eq!(buffer.len(), (0.5 * SAMPLE_RATE) as usize);
    }

    #[test]
    fn test_sparkle_window_is_1_5_seconds() {
        let mut engine = SynthEngine::with_seed(42);
        let buffer = sparkle(&mut engine).expect("sparkle sound");
        assert_eq!(buffer.len(), (1.5 * SAMPLE_RATE) as usize);
        // Last chime starts at 0.3s and lasts 0.6s; past 0.9s is silence
        let tail = (1.0 * SAMPLE_RATE) as usize;
        assert_eq!(buffer[tail], 0.0);
    }
}
