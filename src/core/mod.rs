//! Core domain types for spelling practice
//!
//! The fundamental pieces with no UI concerns: validated word entries, named
//! word sets, puzzle generation, and answer evaluation. Everything here is
//! pure and deterministic given an injected random source.

mod entry;
mod evaluate;
mod puzzle;
mod set;

pub use entry::{EntryError, WordEntry};
pub use evaluate::{MAX_ATTEMPTS, Verdict, evaluate};
pub use puzzle::{BLANK, PuzzleView, make_blanks, scramble};
pub use set::WordSet;
