//! Miscellaneous sound recipes.

use crate::engine::{SampleBuffer, SynthEngine};
use crate::envelope::Envelope;
use crate::oscillator::Waveform;

/// Puzzle piece click.
pub fn puzzle(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut click = engine.generate_tone(800.0, 0.2, Waveform::Sine)?;
    engine.apply_envelope(&mut click, Envelope::new(0.01, 0.03, 0.7, 0.16));
    Some(click)
}

/// Rustle of wrapping paper.
pub fn unwrap(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut rustle = engine.generate_noise(0.8, 0.4)?;
    engine.apply_envelope(&mut rustle, Envelope::new(0.05, 0.2, 0.7, 0.55));
    Some(rustle)
}

/// Jingling keys.
pub fn key(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut jingle = engine.generate_tone(1200.0, 0.4, Waveform::Sine)?;
    engine.apply_envelope(&mut jingle, Envelope::new(0.01, 0.05, 0.6, 0.34));
    Some(jingle)
}

/// Creak of an old lock.
pub fn old_key(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut creak = engine.generate_tone(200.0, 0.8, Waveform::Sawtooth)?;
    engine.apply_envelope(&mut creak, Envelope::new(0.05, 0.2, 0.8, 0.55));
    Some(creak)
}

/// Shiny rising bling.
pub fn bling(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut shine = engine.generate_sweep(1500.0, 3000.0, 0.6, Waveform::Sine)?;
    engine.apply_envelope(&mut shine, Envelope::new(0.01, 0.1, 0.5, 0.49));
    Some(shine)
}

/// Stately fanfare note (C5).
pub fn regal(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut fanfare = engine.generate_tone(523.0, 1.0, Waveform::Sine)?;
    engine.apply_envelope(&mut fanfare, Envelope::new(0.1, 0.2, 0.8, 0.7));
    Some(fanfare)
}
