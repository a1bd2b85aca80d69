//! Game and sport sound recipes.

use crate::engine::{SampleBuffer, SynthEngine};
use crate::envelope::Envelope;
use crate::oscillator::Waveform;

/// Dull thud of a kicked ball.
pub fn kick(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut thud = engine.generate_tone(80.0, 0.3, Waveform::Sine)?;
    engine.apply_envelope(&mut thud, Envelope::new(0.01, 0.05, 0.6, 0.24));
    Some(thud)
}

/// Basketball bounce on a falling sweep.
pub fn bounce(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut bounce = engine.generate_sweep(400.0, 200.0, 0.3, Waveform::Sine)?;
    engine.apply_envelope(&mut bounce, Envelope::new(0.01, 0.05, 0.7, 0.24));
    Some(bounce)
}

/// Bullseye ping.
pub fn target(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut ping = engine.generate_tone(1500.0, 0.2, Waveform::Sine)?;
    engine.apply_envelope(&mut ping, Envelope::new(0.01, 0.03, 0.8, 0.16));
    Some(ping)
}

/// Dice rattling in a cup.
pub fn dice(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut rattle = engine.generate_noise(0.5, 0.4)?;
    engine.apply_envelope(&mut rattle, Envelope::new(0.05, 0.1, 0.7, 0.35));
    Some(rattle)
}

pub fn card(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut flip = engine.generate_noise(0.1, 0.3)?;
    engine.apply_envelope(&mut flip, Envelope::new(0.01, 0.02, 0.8, 0.07));
    Some(flip)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SAMPLE_RATE;

    #[test]
    fn test_bounce_length() {
        let mut engine = SynthEngine::with_seed(42);
        let buffer = bounce(&mut engine).expect("bounce sound");
        assert_eq!(buffer.len(), (0.3 * SAMPLE_RATE) as usize);
    }
}
