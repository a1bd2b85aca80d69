//! Render command implementation
//!
//! Synthesizes one emoji's sound and writes it as a mono 16-bit WAV.

use anyhow::{Context, Result};
use colored::Colorize;
use emojifx_synth::{WavResult, SAMPLE_RATE};
use std::path::PathBuf;
use std::process::ExitCode;

use super::{build_mapper, default_filename};

/// Run the render command
///
/// # Arguments
/// * `emoji` - Glyph to synthesize (unmapped glyphs use the fallback)
/// * `output` - Output WAV path (default: `emoji-{glyph}-sound.wav`)
/// * `seed` - Noise seed for reproducible output
/// * `gain` - Master gain applied before encoding
pub fn run(emoji: &str, output: Option<&str>, seed: Option<u32>, gain: f64) -> Result<ExitCode> {
    let mut mapper = build_mapper(seed);

    let buffer = mapper
        .sound_for_emoji(emoji)
        .with_context(|| format!("no sound could be generated for {emoji}"))?;

    let samples: Vec<f64> = buffer.iter().map(|s| s * gain).collect();
    let result = WavResult::from_samples(&samples, SAMPLE_RATE as u32);

    let path = output
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default_filename(emoji)));
    result
        .write_to(&path)
        .with_context(|| format!("failed to write {}", path.display()))?;

    if !mapper.is_mapped(emoji) {
        println!(
            "{} {} has no dedicated sound, using the fallback",
            "note:".yellow().bold(),
            emoji
        );
    }

    println!(
        "{} {} -> {}",
        "Rendered".green().bold(),
        emoji,
        path.display()
    );
    println!(
        "  {} {:.3}s ({} samples at {} Hz)",
        "duration:".dimmed(),
        result.duration_seconds(),
        result.num_samples,
        result.sample_rate
    );
    println!("  {} {}", "pcm blake3:".dimmed(), result.pcm_hash);

    Ok(ExitCode::SUCCESS)
}
