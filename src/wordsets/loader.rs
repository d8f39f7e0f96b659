//! Word set loading utilities
//!
//! Builds `WordSet`s from embedded pair slices or from `word|hint` files on
//! disk. Malformed lines and invalid words are skipped rather than failing
//! the whole load.

use crate::core::WordSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load a word set from a `word|hint` file
///
/// One entry per line, `#` lines and blank lines ignored. The set is named
/// after the file stem. Lines without a `|`, and lines whose word fails
/// validation, are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use spellsprout::wordsets::loader::load_from_file;
///
/// let set = load_from_file("data/starter.txt").unwrap();
/// println!("Loaded {}", set);
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordSet> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let name = path
        .file_stem()
        .map_or_else(|| "custom".to_string(), |s| s.to_string_lossy().into_owned());

    let pairs: Vec<(&str, &str)> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('|'))
        .collect();

    Ok(WordSet::from_pairs(name, &pairs))
}

/// Convert an embedded pair slice to a named `WordSet`
///
/// # Examples
/// ```
/// use spellsprout::wordsets::{STARTER, loader::set_from_pairs};
///
/// let set = set_from_pairs("starter", STARTER);
/// assert_eq!(set.len(), STARTER.len());
/// ```
#[must_use]
pub fn set_from_pairs(name: &str, pairs: &[(&str, &str)]) -> WordSet {
    WordSet::from_pairs(name, pairs)
}
