//! Preview the puzzles a word would produce
//!
//! One-shot inspection used for checking word-set additions: renders the
//! scramble and blanks views a round of each mode would show.

use crate::core::{WordEntry, make_blanks, scramble};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Puzzle renderings for one word
#[derive(Debug, Clone)]
pub struct PreviewResult {
    /// The word previewed (normalized lowercase)
    pub word: String,
    /// Scramble-mode rendering
    pub scrambled: String,
    /// Blanks-mode rendering
    pub blanks: String,
    /// Seed used, when one was given
    pub seed: Option<u64>,
}

/// Render the scramble and blanks puzzles for a word
///
/// A seed makes the output reproducible; without one the renderings differ
/// per run just as rounds do.
///
/// # Errors
/// Returns an error message if the word is not valid practice material
/// (empty or non-alphabetic).
pub fn preview_word(word: &str, seed: Option<u64>) -> Result<PreviewResult, String> {
    let entry = WordEntry::new(word, "preview").map_err(|e| e.to_string())?;

    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    Ok(PreviewResult {
        word: entry.word().to_string(),
        scrambled: scramble(entry.word(), &mut rng),
        blanks: make_blanks(entry.word(), &mut rng),
        seed,
    })
}
