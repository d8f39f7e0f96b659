//! Built-in word sets
//!
//! Provides embedded word sets compiled into the binary plus a lookup
//! registry keyed by set name.

mod embedded;
pub mod loader;

pub use embedded::{
    ANIMALS, ANIMALS_COUNT, EVERYDAY, EVERYDAY_COUNT, STARTER, STARTER_COUNT,
};

/// Keys of the built-in sets, in menu order
pub const BUILTIN_KEYS: &[&str] = &["starter", "animals", "everyday"];

/// Look up a built-in set's pairs by key
#[must_use]
pub fn builtin(key: &str) -> Option<&'static [(&'static str, &'static str)]> {
    match key {
        "starter" => Some(STARTER),
        "animals" => Some(ANIMALS),
        "everyday" => Some(EVERYDAY),
        _ => None,
    }
}

/// Build all built-in sets as `WordSet`s, in menu order
#[must_use]
pub fn builtin_sets() -> Vec<crate::core::WordSet> {
    BUILTIN_KEYS
        .iter()
        .filter_map(|&key| builtin(key).map(|pairs| loader::set_from_pairs(key, pairs)))
        .collect()
}
