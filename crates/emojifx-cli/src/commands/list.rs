//! List command implementation

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use super::build_mapper;

/// Run the list command
///
/// Prints the curated popular set first, then every mapped emoji.
pub fn run(all: bool) -> Result<ExitCode> {
    let mapper = build_mapper(None);

    println!("{}", "Popular emojis:".cyan().bold());
    print_grid(mapper.popular_emojis());

    if all {
        let mapped = mapper.mapped_emojis();
        println!();
        println!(
            "{} ({} sounds):",
            "All mapped emojis".cyan().bold(),
            mapped.len()
        );
        print_grid(&mapped);
    }

    println!();
    println!(
        "{}",
        "Any other emoji falls back to a playful arpeggio.".dimmed()
    );

    Ok(ExitCode::SUCCESS)
}

fn print_grid(emojis: &[&str]) {
    for row in emojis.chunks(8) {
        println!("  {}", row.join("  "));
    }
}
