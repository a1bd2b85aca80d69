//! Nature and weather sound recipes.

use crate::engine::{SampleBuffer, SynthEngine};
use crate::envelope::Envelope;
use crate::oscillator::Waveform;

/// Long thunder rumble of near-full-scale noise.
pub fn thunder(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut rumble = engine.generate_noise(2.0, 0.9)?;
    engine.apply_envelope(&mut rumble, Envelope::new(0.01, 0.5, 0.7, 1.49));
    Some(rumble)
}

/// Steady rain hiss fading in and out.
pub fn rain(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut hiss = engine.generate_noise(2.0, 0.3)?;
    engine.apply_envelope(&mut hiss, Envelope::new(0.5, 0.2, 0.9, 1.3));
    Some(hiss)
}

pub fn wind(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut gust = engine.generate_noise(1.5, 0.5)?;
    engine.apply_envelope(&mut gust, Envelope::new(0.3, 0.2, 0.8, 1.0));
    Some(gust)
}

/// Slow rolling wave.
pub fn wave(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut swell = engine.generate_sweep(200.0, 100.0, 2.0, Waveform::Sine)?;
    engine.apply_envelope(&mut swell, Envelope::new(0.3, 0.5, 0.8, 1.2));
    Some(swell)
}

/// Crackling fire.
pub fn fire(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut crackle = engine.generate_noise(1.5, 0.4)?;
    engine.apply_envelope(&mut crackle, Envelope::new(0.2, 0.3, 0.8, 1.0));
    Some(crackle)
}

/// Glassy high tinkle.
pub fn ice(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut tinkle = engine.generate_tone(2000.0, 0.8, Waveform::Sine)?;
    engine.apply_envelope(&mut tinkle, Envelope::new(0.01, 0.2, 0.4, 0.59));
    Some(tinkle)
}
