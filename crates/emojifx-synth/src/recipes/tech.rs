//! Technology sound recipes.

use crate::engine::{SampleBuffer, SynthEngine};
use crate::envelope::Envelope;
use crate::oscillator::Waveform;

/// Single key click.
pub fn typing(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut click = engine.generate_tone(1200.0, 0.05, Waveform::Square)?;
    engine.apply_envelope(&mut click, Envelope::new(0.01, 0.01, 0.8, 0.03));
    Some(click)
}

/// Notification ding.
pub fn notification(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut ding = engine.generate_tone(1000.0, 0.3, Waveform::Sine)?;
    engine.apply_envelope(&mut ding, Envelope::new(0.01, 0.05, 0.7, 0.24));
    Some(ding)
}

/// Camera shutter snap.
pub fn camera(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut shutter = engine.generate_noise(0.1, 0.5)?;
    engine.apply_envelope(&mut shutter, Envelope::new(0.01, 0.02, 0.8, 0.07));
    Some(shutter)
}

pub fn printer(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut buzz = engine.generate_tone(300.0, 1.0, Waveform::Square)?;
    engine.apply_envelope(&mut buzz, Envelope::new(0.1, 0.1, 0.8, 0.8));
    Some(buzz)
}

/// Electric zap of bright noise.
pub fn electric(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut zap = engine.generate_noise(0.2, 0.8)?;
    engine.apply_envelope(&mut zap, Envelope::new(0.01, 0.03, 0.7, 0.16));
    Some(zap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SAMPLE_RATE;

    #[test]
    fn test_typing_click_is_very_short() {
        let mut engine = SynthEngine::with_seed(42);
        let buffer = typing(&mut engine).expect("typing sound");
        assert_eq!(buffer.len(), (0.05 * SAMPLE_RATE) as usize);
    }

    #[test]
    fn test_electric_zap_length() {
        let mut engine = SynthEngine::with_seed(42);
        let buffer = electric(&mut engine).expect("electric sound");
        assert_eq!(buffer.len(), (0.2 * SAMPLE_RATE) as usize);
    }
}
