//! ADSR envelope shaping.
//!
//! The envelope is applied in place over a fixed-length buffer: the
//! attack, decay, and release durations are converted to sample counts
//! and whatever remains in the middle becomes the sustain hold.

/// Attack-decay-sustain-release envelope parameters.
///
/// Attack, decay, and release are durations in seconds; sustain is an
/// amplitude fraction in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    /// Attack time in seconds.
    pub attack: f64,
    /// Decay time in seconds.
    pub decay: f64,
    /// Sustain level (0.0 to 1.0).
    pub sustain: f64,
    /// Release time in seconds.
    pub release: f64,
}

impl Default for Envelope {
    fn default() -> Self {
        Self {
            attack: 0.01,
            decay: 0.1,
            sustain: 0.7,
            release: 0.2,
        }
    }
}

impl Envelope {
    /// Creates new envelope parameters.
    pub fn new(attack: f64, decay: f64, sustain: f64, release: f64) -> Self {
        Self {
            attack: attack.max(0.0),
            decay: decay.max(0.0),
            sustain: sustain.clamp(0.0, 1.0),
            release: release.max(0.0),
        }
    }

    /// Applies the envelope to `samples` in place.
    ///
    /// The buffer is segmented into attack, decay, sustain, and release
    /// regions; each sample is multiplied by its region's linear gain.
    /// Re-applying an envelope compounds with the first application; the
    /// result is not re-normalized.
    ///
    /// Edge case: when the attack, decay, and release sample counts
    /// together exceed the buffer length, the sustain window is negative
    /// and the release region takes over straight after the decay with
    /// its progress already above zero, so the gain drops discontinuously
    /// below the sustain level. Several short recipes rely on this exact
    /// shape, so it is deliberate behavior rather than a bug to fix.
    pub fn apply(&self, samples: &mut [f64], sample_rate: f64) {
        let length = samples.len() as i64;
        let attack_samples = (self.attack * sample_rate).floor() as i64;
        let decay_samples = (self.decay * sample_rate).floor() as i64;
        let release_samples = (self.release * sample_rate).floor() as i64;
        // May be negative for short buffers with long envelope parameters
        let sustain_samples = length - attack_samples - decay_samples - release_samples;

        for i in 0..length {
            let gain = if i < attack_samples {
                i as f64 / attack_samples as f64
            } else if i < attack_samples + decay_samples {
                let progress = (i - attack_samples) as f64 / decay_samples as f64;
                1.0 - progress * (1.0 - self.sustain)
            } else if i < attack_samples + decay_samples + sustain_samples {
                self.sustain
            } else {
                let progress = (i - attack_samples - decay_samples - sustain_samples) as f64
                    / release_samples as f64;
                self.sustain * (1.0 - progress)
            };

            samples[i as usize] *= gain;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATE: f64 = 1000.0;

    #[test]
    fn test_new_clamps_sustain() {
        let env = Envelope::new(0.1, 0.1, 1.5, 0.1);
        assert_eq!(env.sustain, 1.0);
        let env = Envelope::new(0.1, 0.1, -0.5, 0.1);
        assert_eq!(env.sustain, 0.0);
    }

    #[test]
    fn test_full_sustain_is_identity() {
        let env = Envelope::new(0.0, 0.0, 1.0, 0.0);
        let mut samples = vec![1.0; 500];
        env.apply(&mut samples, RATE);
        assert!(samples.iter().all(|&s| s == 1.0));
    }

    #[test]
    fn test_attack_starts_at_zero_and_ramps() {
        let env = Envelope::new(0.1, 0.0, 1.0, 0.0);
        let mut samples = vec![1.0; 500];
        env.apply(&mut samples, RATE);

        assert_eq!(samples[0], 0.0);
        // Monotonic ramp through the 100-sample attack region
        for i in 1..100 {
            assert!(samples[i] > samples[i - 1]);
        }
        assert_eq!(samples[100], 1.0);
    }

    #[test]
    fn test_decay_reaches_sustain_level() {
        let env = Envelope::new(0.0, 0.1, 0.5, 0.0);
        let mut samples = vec![1.0; 500];
        env.apply(&mut samples, RATE);

        // After the 100-sample decay, gain holds at the sustain level
        assert!((samples[100] - 0.5).abs() < 1e-9);
        assert!((samples[300] - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_release_ends_near_zero() {
        let env = Envelope::new(0.0, 0.0, 0.8, 0.1);
        let mut samples = vec![1.0; 500];
        env.apply(&mut samples, RATE);

        assert!((samples[399] - 0.8).abs() < 1e-9);
        assert!(samples[499].abs() < 0.01);
    }

    #[test]
    fn test_reapplication_compounds() {
        let env = Envelope::new(0.0, 0.0, 0.5, 0.0);
        let mut samples = vec![1.0; 100];
        env.apply(&mut samples, RATE);
        env.apply(&mut samples, RATE);
        assert!((samples[50] - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_oversized_envelope_releases_early() {
        // attack + decay + release exceed the buffer: the sustain window
        // is negative, so the release region begins right after the decay
        // with progress already at 0.75, well below the sustain level
        let env = Envelope::new(0.1, 0.1, 0.5, 0.4);
        let mut samples = vec![1.0; 300];
        env.apply(&mut samples, RATE);

        assert!((samples[199] - 0.5).abs() < 0.01);
        assert!((samples[200] - 0.125).abs() < 0.01);
        assert!(samples[299] >= 0.0 && samples[299] < 0.01);
    }
}
