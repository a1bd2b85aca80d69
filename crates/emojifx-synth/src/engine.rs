//! Synthesis engine context.
//!
//! [`SynthEngine`] owns the fixed sample rate and the noise RNG, and
//! produces raw sample buffers for tones, frequency sweeps, and white
//! noise. It holds no other state, so independent engines can coexist
//! (one per test, one per session).
//!
//! The generators are permissive by design: a non-positive duration
//! yields `None` ("no sound produced") rather than an error, and callers
//! propagate `None` upward instead of failing.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::envelope::Envelope;
use crate::oscillator::{self, Waveform, TWO_PI};

/// Fixed output sample rate in Hz.
pub const SAMPLE_RATE: f64 = 44100.0;

/// A single-channel buffer of floating-point samples at [`SAMPLE_RATE`].
///
/// Amplitudes are nominally in [-1, 1] but are not clamped until WAV
/// encoding; mixed buffers may exceed the range in between.
pub type SampleBuffer = Vec<f64>;

/// Waveform generator with a fixed sample rate and an owned noise RNG.
#[derive(Debug)]
pub struct SynthEngine {
    sample_rate: f64,
    rng: Pcg32,
}

impl SynthEngine {
    /// Creates an engine whose noise generator is seeded from OS entropy.
    ///
    /// Noise-based output is therefore not reproducible across engines;
    /// use [`SynthEngine::with_seed`] when determinism matters.
    pub fn new() -> Self {
        Self {
            sample_rate: SAMPLE_RATE,
            rng: Pcg32::from_entropy(),
        }
    }

    /// Creates an engine with a deterministic noise seed.
    pub fn with_seed(seed: u32) -> Self {
        // Expand 32-bit seed to 64-bit for PCG32 state
        let seed64 = (seed as u64) | ((seed as u64) << 32);
        Self {
            sample_rate: SAMPLE_RATE,
            rng: Pcg32::seed_from_u64(seed64),
        }
    }

    /// Returns the engine's sample rate in Hz.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Generates a constant-frequency tone.
    ///
    /// # Arguments
    /// * `frequency` - Tone frequency in Hz (must be positive)
    /// * `duration` - Length in seconds
    /// * `waveform` - Waveform to evaluate per sample
    ///
    /// # Returns
    /// A buffer of `floor(duration * sample_rate)` samples, or `None`
    /// for a non-positive duration.
    pub fn generate_tone(
        &self,
        frequency: f64,
        duration: f64,
        waveform: Waveform,
    ) -> Option<SampleBuffer> {
        if duration <= 0.0 {
            return None;
        }

        let num_samples = (duration * self.sample_rate).floor() as usize;
        let mut buffer = Vec::with_capacity(num_samples);

        for i in 0..num_samples {
            let time = i as f64 / self.sample_rate;
            let angle = TWO_PI * frequency * time;
            buffer.push(oscillator::sample(waveform, angle));
        }

        Some(buffer)
    }

    /// Generates a tone whose frequency moves linearly from `start_freq`
    /// to `end_freq` over the duration.
    ///
    /// The instantaneous frequency is interpolated per sample; this is
    /// not a phase-continuous chirp, which is audible only on long
    /// sweeps and acceptable for short effects.
    ///
    /// Known gap: `Waveform::Triangle` has no sweep branch and produces
    /// silence. No recipe sweeps a triangle, so this has never mattered.
    pub fn generate_sweep(
        &self,
        start_freq: f64,
        end_freq: f64,
        duration: f64,
        waveform: Waveform,
    ) -> Option<SampleBuffer> {
        if duration <= 0.0 {
            return None;
        }

        let num_samples = (duration * self.sample_rate).floor() as usize;
        let mut buffer = Vec::with_capacity(num_samples);

        for i in 0..num_samples {
            let time = i as f64 / self.sample_rate;
            let progress = time / duration;
            let frequency = start_freq + (end_freq - start_freq) * progress;
            let angle = TWO_PI * frequency * time;

            let sample = match waveform {
                Waveform::Sine => oscillator::sine(angle),
                Waveform::Square => oscillator::square(angle),
                Waveform::Sawtooth => oscillator::sawtooth(angle),
                // Triangle sweeps are unsupported, see the doc above
                Waveform::Triangle => 0.0,
            };
            buffer.push(sample);
        }

        Some(buffer)
    }

    /// Generates uniform white noise scaled to `[-intensity, intensity]`.
    ///
    /// Draws from the engine's RNG, so two calls never produce the same
    /// buffer unless the engine was built with [`SynthEngine::with_seed`]
    /// and reset between calls.
    pub fn generate_noise(&mut self, duration: f64, intensity: f64) -> Option<SampleBuffer> {
        if duration <= 0.0 {
            return None;
        }

        let num_samples = (duration * self.sample_rate).floor() as usize;
        let mut buffer = Vec::with_capacity(num_samples);

        for _ in 0..num_samples {
            let sample: f64 = self.rng.gen::<f64>() * 2.0 - 1.0;
            buffer.push(sample * intensity);
        }

        Some(buffer)
    }

    /// Shapes a buffer in place with a four-stage ADSR envelope.
    pub fn apply_envelope(&self, buffer: &mut SampleBuffer, envelope: Envelope) {
        envelope.apply(buffer, self.sample_rate);
    }
}

impl Default for SynthEngine {
    fn default() -> Self {
        Self::new()
    }
}
