//! Animal sound recipes.

use crate::engine::{SampleBuffer, SynthEngine};
use crate::envelope::Envelope;
use crate::mixer::{Layer, Mixer};
use crate::oscillator::Waveform;

/// Soft meow: a rising sweep answered by a falling one.
pub fn cat(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let meow1 = engine.generate_sweep(300.0, 600.0, 0.4, Waveform::Sine)?;
    let meow2 = engine.generate_sweep(600.0, 400.0, 0.6, Waveform::Sine)?;

    let sample_rate = engine.sample_rate();
    let mut mixer = Mixer::new((1.0 * sample_rate) as usize);
    mixer.add_layer(Layer::new(meow1, 0.8));
    mixer.add_layer(Layer::new(meow2, 0.8).with_delay_seconds(0.4, sample_rate));

    let mut combined = mixer.mix();
    engine.apply_envelope(&mut combined, Envelope::new(0.05, 0.1, 0.7, 0.35));
    Some(combined)
}

/// Squeaky lizard chirp.
pub fn lizard(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut chirp = engine.generate_sweep(1200.0, 1800.0, 0.3, Waveform::Sine)?;
    engine.apply_envelope(&mut chirp, Envelope::new(0.01, 0.05, 0.6, 0.24));
    Some(chirp)
}

/// Low croak on a falling square sweep.
pub fn frog(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut croak = engine.generate_sweep(200.0, 150.0, 0.4, Waveform::Square)?;
    engine.apply_envelope(&mut croak, Envelope::new(0.05, 0.1, 0.8, 0.25));
    Some(croak)
}

/// Two quick high chirps, the second delayed.
pub fn bird(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let chirp1 = engine.generate_sweep(2000.0, 3000.0, 0.2, Waveform::Sine)?;
    let chirp2 = engine.generate_sweep(2500.0, 3500.0, 0.15, Waveform::Sine)?;

    let sample_rate = engine.sample_rate();
    let mut mixer = Mixer::new((0.8 * sample_rate) as usize);
    mixer.add_layer(Layer::new(chirp1, 0.6));
    mixer.add_layer(Layer::new(chirp2, 0.6).with_delay_seconds(0.3, sample_rate));
    Some(mixer.mix())
}

/// Sustained sawtooth buzz.
pub fn bee(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut buzz = engine.generate_tone(350.0, 1.0, Waveform::Sawtooth)?;
    engine.apply_envelope(&mut buzz, Envelope::new(0.1, 0.2, 0.9, 0.7));
    Some(buzz)
}

/// Long low moo.
pub fn moo(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut moo = engine.generate_sweep(150.0, 100.0, 1.2, Waveform::Square)?;
    engine.apply_envelope(&mut moo, Envelope::new(0.2, 0.3, 0.8, 0.7));
    Some(moo)
}

pub fn oink(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut oink = engine.generate_tone(400.0, 0.3, Waveform::Square)?;
    engine.apply_envelope(&mut oink, Envelope::new(0.01, 0.05, 0.9, 0.24));
    Some(oink)
}

/// Tiny mouse squeak.
pub fn squeak(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut squeak = engine.generate_sweep(1500.0, 2000.0, 0.2, Waveform::Sine)?;
    engine.apply_envelope(&mut squeak, Envelope::new(0.01, 0.02, 0.8, 0.17));
    Some(squeak)
}

pub fn quack(engine: &mut SynthEngine) -> Option<SampleBuffer> {
    let mut quack = engine.generate_tone(300.0, 0.4, Waveform::Square)?;
    engine.apply_envelope(&mut quack, Envelope::new(0.02, 0.08, 0.7, 0.3));
    Some(quack)
}
