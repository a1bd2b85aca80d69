//! emojifx CLI - Command-line interface for emoji sound synthesis
//!
//! This binary renders procedurally synthesized cartoon sound effects
//! for emoji glyphs as mono 16-bit WAV files.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

mod commands;

/// emojifx - Procedural emoji sound effects
#[derive(Parser)]
#[command(name = "emojifx")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the emojis that have sounds
    List {
        /// Also list every mapped emoji, not just the popular set
        #[arg(long)]
        all: bool,
    },

    /// Synthesize one emoji's sound and write it as a WAV file
    Render {
        /// Emoji glyph to render
        emoji: String,

        /// Output WAV path (default: emoji-{glyph}-sound.wav)
        #[arg(short, long)]
        output: Option<String>,

        /// Seed for the noise source (default: random)
        #[arg(long)]
        seed: Option<u32>,

        /// Master gain applied before 16-bit conversion
        #[arg(long, default_value_t = 1.0)]
        gain: f64,
    },

    /// Synthesize every mapped emoji into a directory of WAV files
    RenderAll {
        /// Output directory
        #[arg(short, long, default_value = "sounds")]
        out_dir: String,

        /// Seed for the noise source (default: random)
        #[arg(long)]
        seed: Option<u32>,

        /// Master gain applied before 16-bit conversion
        #[arg(long, default_value_t = 1.0)]
        gain: f64,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List { all } => commands::list::run(all),
        Commands::Render {
            emoji,
            output,
            seed,
            gain,
        } => commands::render::run(&emoji, output.as_deref(), seed, gain),
        Commands::RenderAll {
            out_dir,
            seed,
            gain,
        } => commands::render_all::run(&out_dir, seed, gain),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
