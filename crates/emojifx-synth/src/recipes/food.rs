//! Food and drink sound recipes.

use crate::engine::{SampleBuffer, SynthEngine};
use crate::envelope::Envelope;
use crate::oscillator::Waveform;

/// Crunchy bite of noise.
pub fn crunch(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut crunch = engine.generate_noise(0.4, 0.6)?;
    engine.apply_envelope(&mut crunch, Envelope::new(0.01, 0.08, 0.6, 0.31));
    Some(crunch)
}

/// Straw slurp on a falling sawtooth.
pub fn slurp(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut slurp = engine.generate_sweep(300.0, 150.0, 0.8, Waveform::Sawtooth)?;
    engine.apply_envelope(&mut slurp, Envelope::new(0.05, 0.2, 0.8, 0.55));
    Some(slurp)
}

pub fn nom(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut nom = engine.generate_tone(250.0, 0.3, Waveform::Square)?;
    engine.apply_envelope(&mut nom, Envelope::new(0.01, 0.05, 0.8, 0.24));
    Some(nom)
}

/// Slow sticky stretch on a rising sweep.
pub fn sticky(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut sticky = engine.generate_sweep(150.0, 300.0, 0.6, Waveform::Sine)?;
    engine.apply_envelope(&mut sticky, Envelope::new(0.1, 0.2, 0.8, 0.3));
    Some(sticky)
}

pub fn gulp(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut gulp = engine.generate_sweep(400.0, 200.0, 0.5, Waveform::Sine)?;
    engine.apply_envelope(&mut gulp, Envelope::new(0.05, 0.1, 0.7, 0.35));
    Some(gulp)
}

/// Tiny popcorn pop.
pub fn pop(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut pop = engine.generate_tone(800.0, 0.1, Waveform::Square)?;
    engine.apply_envelope(&mut pop, Envelope::new(0.01, 0.02, 0.8, 0.07));
    Some(pop)
}
