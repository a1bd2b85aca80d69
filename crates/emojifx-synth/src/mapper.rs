//! Emoji to sound mapping with a per-session cache.
//!
//! The mapping table is fixed at construction. Lookups are memoized per
//! glyph, including lookups that produced no sound, so a failing recipe
//! is never retried until [`SoundMapper::clear_cache`].

use std::collections::HashMap;
use std::sync::Arc;

use crate::engine::{SampleBuffer, SynthEngine};
use crate::error::{SfxError, SfxResult};
use crate::recipes;
use crate::wav::WavResult;

/// A sound recipe: a pure composition of generator, mixer, and envelope
/// calls producing one buffer (or nothing).
pub type Recipe = fn(&mut SynthEngine) -> Option<SampleBuffer>;

/// Curated emoji subset for UI presentation, in display order.
pub const POPULAR_EMOJIS: [&str; 24] = [
    "🔔", "😂", "🚗", "🦎", "🐱", "✨", "💥", "🎉",
    "🐶", "🎵", "⚡", "🌊", "👏", "🍎", "📱", "⚽",
    "🚂", "🎸", "💨", "🔥", "🎯", "🦆", "📞", "🥁",
];

/// The emoji to recipe registrations, in source order.
///
/// `⚡` appears twice (thunder under Nature, electric zap under
/// Technology); registration order makes the later entry win, so the
/// glyph resolves to the electric zap. Documented quirk, kept rather
/// than silently reassigned.
const MAPPING_TABLE: &[(&str, Recipe)] = &[
    // Animals
    ("🐱", recipes::animals::cat),
    ("🐶", recipes::playful_fallback), // Bark
    ("🦎", recipes::animals::lizard),
    ("🐸", recipes::animals::frog),
    ("🐦", recipes::animals::bird),
    ("🐝", recipes::animals::bee),
    ("🐄", recipes::animals::moo),
    ("🐷", recipes::animals::oink),
    ("🐭", recipes::animals::squeak),
    ("🦆", recipes::animals::quack),
    // Vehicles & Transportation
    ("🚗", recipes::vehicles::car),
    ("🚂", recipes::vehicles::train),
    ("✈️", recipes::vehicles::plane),
    ("🚁", recipes::vehicles::helicopter),
    ("🚴", recipes::vehicles::bicycle),
    ("🛵", recipes::vehicles::scooter),
    // Objects & Tools
    ("🔔", recipes::objects::bell),
    ("📞", recipes::objects::phone),
    ("⏰", recipes::objects::alarm),
    ("🎵", recipes::objects::music),
    ("🎸", recipes::objects::guitar),
    ("🥁", recipes::objects::drum),
    ("🎹", recipes::objects::piano),
    ("📢", recipes::objects::megaphone),
    // Emotions & Faces
    ("😂", recipes::emotions::laugh),
    ("😭", recipes::emotions::cry),
    ("😴", recipes::emotions::snore),
    ("🤧", recipes::emotions::sneeze),
    ("😱", recipes::emotions::scream),
    ("🥱", recipes::emotions::yawn),
    ("😋", recipes::emotions::yum),
    // Nature & Weather
    ("⚡", recipes::nature::thunder),
    ("🌧️", recipes::nature::rain),
    ("💨", recipes::nature::wind),
    ("🌊", recipes::nature::wave),
    ("🔥", recipes::nature::fire),
    ("❄️", recipes::nature::ice),
    // Actions & Effects
    ("💥", recipes::actions::boom),
    ("✨", recipes::actions::sparkle),
    ("💫", recipes::actions::twinkle),
    ("🎉", recipes::actions::celebration),
    ("👏", recipes::actions::clap),
    ("💃", recipes::actions::dance),
    ("🏃", recipes::actions::running),
    // Food & Drinks
    ("🍎", recipes::food::crunch),
    ("🥤", recipes::food::slurp),
    ("🍕", recipes::food::nom),
    ("🍯", recipes::food::sticky),
    ("🥛", recipes::food::gulp),
    ("🍿", recipes::food::pop),
    // Technology
    ("💻", recipes::tech::typing),
    ("📱", recipes::tech::notification),
    ("📷", recipes::tech::camera),
    ("🖨️", recipes::tech::printer),
    ("⚡", recipes::tech::electric),
    // Games & Sports
    ("⚽", recipes::games::kick),
    ("🏀", recipes::games::bounce),
    ("🎯", recipes::games::target),
    ("🎲", recipes::games::dice),
    ("🃏", recipes::games::card),
    // Miscellaneous
    ("🧩", recipes::misc::puzzle),
    ("🎁", recipes::misc::unwrap),
    ("🔑", recipes::misc::key),
    ("🗝️", recipes::misc::old_key),
    ("💍", recipes::misc::bling),
    ("👑", recipes::misc::regal),
];

/// Maps emoji glyphs to synthesized sounds, memoizing per glyph.
#[derive(Debug)]
pub struct SoundMapper {
    engine: SynthEngine,
    mappings: HashMap<&'static str, Recipe>,
    cache: HashMap<String, Option<Arc<SampleBuffer>>>,
}

impl SoundMapper {
    /// Creates a mapper with an entropy-seeded engine.
    pub fn new() -> Self {
        Self::with_engine(SynthEngine::new())
    }

    /// Creates a mapper around an existing engine (e.g. a seeded one).
    pub fn with_engine(engine: SynthEngine) -> Self {
        let mut mappings = HashMap::with_capacity(MAPPING_TABLE.len());
        for &(emoji, recipe) in MAPPING_TABLE {
            // Last registration wins for duplicate keys
            mappings.insert(emoji, recipe);
        }

        Self {
            engine,
            mappings,
            cache: HashMap::new(),
        }
    }

    /// Returns the sound for an emoji, computing it on first request.
    ///
    /// Unmapped glyphs resolve to the generic playful fallback. The
    /// result is cached per glyph before returning, including a `None`
    /// result: a recipe that produced nothing is remembered as "no
    /// sound for this emoji" and not retried. This is deliberate (it
    /// avoids repeated failed recomputation), at the cost of making a
    /// transient failure permanent until [`SoundMapper::clear_cache`].
    pub fn sound_for_emoji(&mut self, emoji: &str) -> Option<Arc<SampleBuffer>> {
        if let Some(cached) = self.cache.get(emoji) {
            return cached.clone();
        }

        let recipe = self
            .mappings
            .get(emoji)
            .copied()
            .unwrap_or(recipes::playful_fallback as Recipe);
        let buffer = recipe(&mut self.engine).map(Arc::new);

        self.cache.insert(emoji.to_string(), buffer.clone());
        buffer
    }

    /// Returns true when the emoji has a dedicated recipe.
    pub fn is_mapped(&self, emoji: &str) -> bool {
        self.mappings.contains_key(emoji)
    }

    /// Returns every mapped glyph in registration order, deduplicated.
    pub fn mapped_emojis(&self) -> Vec<&'static str> {
        let mut seen = HashMap::new();
        let mut emojis = Vec::with_capacity(MAPPING_TABLE.len());
        for &(emoji, _) in MAPPING_TABLE {
            if seen.insert(emoji, ()).is_none() {
                emojis.push(emoji);
            }
        }
        emojis
    }

    /// Returns the curated popular-emoji list in display order.
    pub fn popular_emojis(&self) -> &'static [&'static str] {
        &POPULAR_EMOJIS
    }

    /// Empties the sound cache unconditionally.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Synthesizes an emoji's sound and encodes it as a WAV stream.
    ///
    /// # Errors
    /// [`SfxError::NoSound`] when the recipe produced no audio.
    pub fn render_wav(&mut self, emoji: &str) -> SfxResult<WavResult> {
        let buffer = self
            .sound_for_emoji(emoji)
            .ok_or_else(|| SfxError::no_sound(emoji))?;
        Ok(WavResult::from_samples(&buffer, crate::engine::SAMPLE_RATE as u32))
    }
}

impl Default for SoundMapper {
    fn default() -> Self {
        Self::new()
    }
}
