//! Spellsprout
//!
//! A spelling practice game for early readers: hear or see a word, then type
//! it back. Three modes (listen-and-spell, unscramble, fill-in-the-blanks),
//! three tries per word, and word sets with child-friendly hints.
//!
//! # Quick Start
//!
//! ```rust
//! use spellsprout::core::WordSet;
//! use spellsprout::session::{GameMode, GameSession};
//!
//! let set = WordSet::from_pairs("starter", &[("pram", "A small carriage for a baby")]);
//! let mut session = GameSession::new(vec![set]).unwrap();
//!
//! let plan = session.start_game(GameMode::Scramble).unwrap();
//! println!("Unscramble this: {}", plan.view.display_text());
//! ```

// Core domain types
pub mod core;

// Game session state machine
pub mod session;

// Speech / audio / recognition collaborators
pub mod adapters;

// Built-in word sets
pub mod wordsets;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
