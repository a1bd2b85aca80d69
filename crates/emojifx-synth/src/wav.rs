//! 16-bit PCM WAV encoding.
//!
//! Serializes a mono sample buffer behind a canonical 44-byte header.
//! This is the only place in the pipeline where samples are clamped to
//! [-1, 1]; an upstream mix that overflowed the range is clipped here.

use std::io::{self, Write};
use std::path::Path;

use crate::error::SfxResult;

/// WAV format parameters for mono 16-bit PCM output.
#[derive(Debug, Clone, Copy)]
pub struct WavFormat {
    /// Number of channels (always 1).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (always 16).
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a mono WAV format.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
        }
    }

    /// Calculates block align (bytes per sample frame).
    fn block_align(&self) -> u16 {
        self.channels * self.bits_per_sample / 8
    }

    /// Calculates byte rate (bytes per second).
    fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }
}

/// Writes a complete WAV file to a writer.
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = pcm_data.len() as u32;
    let file_size = 36 + data_size; // Total file size minus 8 bytes for RIFF header

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // Chunk size (16 for PCM)
    writer.write_all(&1u16.to_le_bytes())?; // Audio format (1 = PCM)
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a WAV file to a byte vector.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(44 + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data).expect("writing to Vec should not fail");
    buffer
}

/// Converts f64 samples to 16-bit PCM bytes.
///
/// Each sample is clamped to [-1.0, 1.0], scaled by 32767, and rounded
/// to a little-endian signed 16-bit integer.
pub fn samples_to_pcm16(samples: &[f64]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);

    for &sample in samples {
        let clipped = sample.clamp(-1.0, 1.0);
        let pcm_value = (clipped * 32767.0).round() as i16;
        pcm.extend_from_slice(&pcm_value.to_le_bytes());
    }

    pcm
}

/// Encodes a mono sample buffer as a complete WAV byte stream.
pub fn encode(samples: &[f64], sample_rate: u32) -> Vec<u8> {
    let pcm = samples_to_pcm16(samples);
    write_wav_to_vec(&WavFormat::mono(sample_rate), &pcm)
}

/// Result of WAV encoding, with a content hash for verification.
#[derive(Debug)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM data only (header excluded).
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples.
    pub num_samples: usize,
}

impl WavResult {
    /// Encodes a mono sample buffer.
    pub fn from_samples(samples: &[f64], sample_rate: u32) -> Self {
        let pcm = samples_to_pcm16(samples);
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();
        let wav_data = write_wav_to_vec(&WavFormat::mono(sample_rate), &pcm);

        Self {
            wav_data,
            pcm_hash,
            sample_rate,
            num_samples: samples.len(),
        }
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }

    /// Writes the WAV bytes to a file.
    pub fn write_to(&self, path: &Path) -> SfxResult<()> {
        std::fs::write(path, &self.wav_data)?;
        Ok(())
    }
}

/// Extracts the PCM payload from a WAV byte stream.
///
/// # Returns
/// The PCM bytes, or `None` if the stream is not a valid RIFF/WAVE file
/// or holds no data chunk.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < 44 {
        return None;
    }

    if &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }

    // Walk chunks looking for "data"
    let mut pos = 12;
    while pos + 8 <= wav_data.len() {
        let chunk_id = &wav_data[pos..pos + 4];
        let chunk_size = u32::from_le_bytes([
            wav_data[pos + 4],
            wav_data[pos + 5],
            wav_data[pos + 6],
            wav_data[pos + 7],
        ]) as usize;

        if chunk_id == b"data" {
            let data_start = pos + 8;
            let data_end = data_start + chunk_size;
            if data_end <= wav_data.len() {
                return Some(&wav_data[data_start..data_end]);
            }
        }

        pos += 8 + chunk_size;
        // Align to word boundary
        if chunk_size % 2 != 0 {
            pos += 1;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wav_format() {
        let format = WavFormat::mono(44100);
        assert_eq!(format.channels, 1);
        assert_eq!(format.sample_rate, 44100);
        assert_eq!(format.byte_rate(), 88200);
        assert_eq!(format.block_align(), 2);
    }

    #[test]
    fn test_samples_to_pcm16() {
        let samples = vec![0.0, 1.0, -1.0];
        let pcm = samples_to_pcm16(&samples);

        assert_eq!(pcm.len(), 6);
        assert_eq!(i16::from_le_bytes([pcm[0], pcm[1]]), 0);
        assert_eq!(i16::from_le_bytes([pcm[2], pcm[3]]), 32767);
        assert_eq!(i16::from_le_bytes([pcm[4], pcm[5]]), -32767);
    }

    #[test]
    fn test_clipping_happens_at_encode() {
        let samples = vec![2.0, -2.0]; // overflowed upstream mix
        let pcm = samples_to_pcm16(&samples);

        assert_eq!(i16::from_le_bytes([pcm[0], pcm[1]]), 32767);
        assert_eq!(i16::from_le_bytes([pcm[2], pcm[3]]), -32767);
    }

    #[test]
    fn test_header_layout() {
        let samples = vec![0.0; 100];
        let wav = encode(&samples, 44100);

        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(&wav[12..16], b"fmt ");
        assert_eq!(&wav[36..40], b"data");

        // fmt fields: PCM tag, mono, 44100 Hz, 16 bits
        assert_eq!(u16::from_le_bytes([wav[20], wav[21]]), 1);
        assert_eq!(u16::from_le_bytes([wav[22], wav[23]]), 1);
        assert_eq!(u32::from_le_bytes([wav[24], wav[25], wav[26], wav[27]]), 44100);
        assert_eq!(u32::from_le_bytes([wav[28], wav[29], wav[30], wav[31]]), 88200);
        assert_eq!(u16::from_le_bytes([wav[32], wav[33]]), 2);
        assert_eq!(u16::from_le_bytes([wav[34], wav[35]]), 16);

        // data chunk holds 2 bytes per sample
        let data_size = u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]);
        assert_eq!(data_size, 200);
    }

    #[test]
    fn test_extract_pcm_round_trip() {
        let samples = vec![0.5; 128];
        let wav = encode(&samples, 44100);

        let pcm = extract_pcm_data(&wav).expect("should extract PCM");
        assert_eq!(pcm.len(), 2 * samples.len());
        assert_eq!(pcm, &samples_to_pcm16(&samples)[..]);
    }

    #[test]
    fn test_extract_rejects_garbage() {
        assert!(extract_pcm_data(b"not a wav").is_none());
        assert!(extract_pcm_data(&[0u8; 64]).is_none());
    }

    #[test]
    fn test_wav_result() {
        let samples = vec![0.5, -0.5, 0.3, -0.3];
        let result = WavResult::from_samples(&samples, 44100);

        assert_eq!(result.num_samples, 4);
        assert_eq!(result.sample_rate, 44100);
        assert_eq!(result.pcm_hash.len(), 64);
        assert!((result.duration_seconds() - 4.0 / 44100.0).abs() < 1e-12);
    }

    #[test]
    fn test_pcm_hash_determinism() {
        let samples = vec![0.5, -0.5, 0.3];
        let a = WavResult::from_samples(&samples, 44100);
        let b = WavResult::from_samples(&samples, 44100);
        assert_eq!(a.pcm_hash, b.pcm_hash);
    }
}
