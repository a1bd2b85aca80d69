//! Render-all command implementation
//!
//! Renders every mapped emoji into a directory of WAV files and prints
//! a summary line per sound.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use super::{build_mapper, default_filename};

/// Run the render-all command
pub fn run(out_dir: &str, seed: Option<u32>, gain: f64) -> Result<ExitCode> {
    let mut mapper = build_mapper(seed);
    let out_dir = Path::new(out_dir);
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let emojis = mapper.mapped_emojis();
    println!(
        "{} {} sounds into {}",
        "Rendering".cyan().bold(),
        emojis.len(),
        out_dir.display()
    );

    let mut rendered = 0usize;
    let mut failed = 0usize;

    for emoji in emojis {
        match render_one(&mut mapper, emoji, out_dir, gain) {
            Ok(filename) => {
                rendered += 1;
                println!("  {} {} -> {}", "ok".green(), emoji, filename);
            }
            Err(e) => {
                failed += 1;
                eprintln!("  {} {}: {}", "failed".red(), emoji, e);
            }
        }
    }

    println!();
    if failed == 0 {
        println!("{} {} sounds rendered", "Done:".green().bold(), rendered);
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "{} {} rendered, {} failed",
            "Done:".yellow().bold(),
            rendered,
            failed
        );
        Ok(ExitCode::from(1))
    }
}

fn render_one(
    mapper: &mut emojifx_synth::SoundMapper,
    emoji: &str,
    out_dir: &Path,
    gain: f64,
) -> Result<String> {
    let buffer = mapper
        .sound_for_emoji(emoji)
        .with_context(|| format!("no sound could be generated for {emoji}"))?;

    let samples: Vec<f64> = buffer.iter().map(|s| s * gain).collect();
    let result = emojifx_synth::WavResult::from_samples(&samples, emojifx_synth::SAMPLE_RATE as u32);

    let filename = default_filename(emoji);
    result
        .write_to(&out_dir.join(&filename))
        .with_context(|| format!("failed to write {filename}"))?;
    Ok(filename)
}
