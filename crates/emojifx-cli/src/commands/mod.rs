//! CLI command implementations

pub mod list;
pub mod render;
pub mod render_all;

use emojifx_synth::{SoundMapper, SynthEngine};

/// Builds a mapper, seeding the noise source when a seed is given.
pub(crate) fn build_mapper(seed: Option<u32>) -> SoundMapper {
    match seed {
        Some(seed) => SoundMapper::with_engine(SynthEngine::with_seed(seed)),
        None => SoundMapper::new(),
    }
}

/// Default output filename for an emoji's rendered WAV.
pub(crate) fn default_filename(emoji: &str) -> String {
    format!("emoji-{emoji}-sound.wav")
}
