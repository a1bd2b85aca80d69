//! Buffer mixing with per-layer gain and time offsets.
//!
//! Layers are summed additively into a fixed-length output buffer. No
//! clipping or normalization happens here; a mix may exceed [-1, 1] and
//! is only clamped at WAV-encode time.

use crate::engine::SampleBuffer;

/// A source buffer with mixing parameters.
#[derive(Debug, Clone)]
pub struct Layer {
    /// Audio samples.
    pub samples: SampleBuffer,
    /// Gain multiplier applied to every sample.
    pub gain: f64,
    /// Delay in samples before this layer starts.
    pub delay_samples: usize,
}

impl Layer {
    /// Creates a new layer starting at offset zero.
    pub fn new(samples: SampleBuffer, gain: f64) -> Self {
        Self {
            samples,
            gain,
            delay_samples: 0,
        }
    }

    /// Sets the start offset in samples.
    pub fn with_delay(mut self, delay_samples: usize) -> Self {
        self.delay_samples = delay_samples;
        self
    }

    /// Sets the start offset in seconds.
    pub fn with_delay_seconds(mut self, delay_seconds: f64, sample_rate: f64) -> Self {
        self.delay_samples = (delay_seconds * sample_rate).floor() as usize;
        self
    }
}

/// Additive mixer with a fixed output length.
///
/// Samples that would land past the output end are silently truncated;
/// the output buffer is never resized.
#[derive(Debug)]
pub struct Mixer {
    num_samples: usize,
    layers: Vec<Layer>,
}

impl Mixer {
    /// Creates a mixer producing `num_samples` output samples.
    pub fn new(num_samples: usize) -> Self {
        Self {
            num_samples,
            layers: Vec::new(),
        }
    }

    /// Adds a layer to the mix.
    pub fn add_layer(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    /// Returns the number of output samples.
    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    /// Sums all layers into a new output buffer.
    pub fn mix(&self) -> SampleBuffer {
        let mut output = vec![0.0; self.num_samples];

        for layer in &self.layers {
            let start = layer.delay_samples;

            for (i, &sample) in layer.samples.iter().enumerate() {
                let output_idx = start + i;
                if output_idx < self.num_samples {
                    output[output_idx] += sample * layer.gain;
                }
            }
        }

        output
    }
}

/// Sums buffers elementwise into a new buffer sized to the longest input.
///
/// Each buffer contributes `sample * gain`; a missing gain defaults to
/// 1.0, and a buffer contributes nothing past its own length.
///
/// # Returns
/// The combined buffer, or `None` when `buffers` is empty.
pub fn combine_buffers(buffers: &[SampleBuffer], gains: Option<&[f64]>) -> Option<SampleBuffer> {
    if buffers.is_empty() {
        return None;
    }

    let max_length = buffers.iter().map(|b| b.len()).max().unwrap_or(0);
    let mut combined = vec![0.0; max_length];

    for (index, buffer) in buffers.iter().enumerate() {
        let gain = gains
            .and_then(|g| g.get(index))
            .copied()
            .unwrap_or(1.0);

        for (i, &sample) in buffer.iter().enumerate() {
            combined[i] += sample * gain;
        }
    }

    Some(combined)
}
