//! Collaborator adapters
//!
//! Narrow interfaces to the subsystems the game core deliberately knows
//! nothing about: speech synthesis, result cues, and handwriting
//! recognition. Every implementation must degrade to silence on failure;
//! nothing here is allowed to throw into the state machine.

mod speech;

pub use speech::CommandSpeech;

/// Text-to-speech collaborator
///
/// `speak` is fire-and-forget; `cancel` stops any ongoing utterance and must
/// be called before a result cue plays so the two never overlap.
pub trait Speech {
    fn speak(&self, text: &str);
    fn cancel(&self);
}

/// Result/welcome sound cues
///
/// Any of these may fail (missing asset, blocked audio device); failures are
/// logged by the implementation and never surface to the caller.
pub trait CuePlayer {
    fn correct(&self);
    fn wrong(&self);
    fn welcome(&self);
}

/// Handwriting recognition collaborator
///
/// Returns the recognized text, or `None` when nothing legible was captured.
/// An empty result is the session's `Unrecognized` outcome, not an attempt.
pub trait Recognizer {
    fn recognize(&mut self) -> Option<String>;
}

/// Speech that goes nowhere
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSpeech;

impl Speech for NullSpeech {
    fn speak(&self, _text: &str) {}
    fn cancel(&self) {}
}

/// Cues that play nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NullCues;

impl CuePlayer for NullCues {
    fn correct(&self) {}
    fn wrong(&self) {}
    fn welcome(&self) {}
}

/// Recognizer that never recognizes anything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRecognizer;

impl Recognizer for NullRecognizer {
    fn recognize(&mut self) -> Option<String> {
        None
    }
}
