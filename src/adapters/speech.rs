//! Subprocess-backed speech synthesis
//!
//! Drives a system text-to-speech binary (`say` on macOS, `espeak` or
//! `spd-say` elsewhere). Spawn failures are logged and swallowed so a
//! machine without a synthesizer still gets a playable, silent game.

use crate::adapters::Speech;
use std::env;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::sync::Mutex;
use tracing::warn;

/// Candidate binaries, tried in order
const CANDIDATES: &[&str] = &["say", "espeak", "spd-say"];

/// Speech synthesis through a spawned system command
pub struct CommandSpeech {
    program: String,
    // Last spawned utterance, kept so cancel() can kill it
    child: Mutex<Option<Child>>,
}

impl CommandSpeech {
    /// Use an explicit program (one argument: the text to speak)
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            child: Mutex::new(None),
        }
    }

    /// Probe `PATH` for a known synthesizer
    ///
    /// Returns `None` when no candidate is installed; callers fall back to
    /// [`super::NullSpeech`].
    #[must_use]
    pub fn detect() -> Option<Self> {
        CANDIDATES
            .iter()
            .find(|&&candidate| find_in_path(candidate).is_some())
            .map(|&program| Self::new(program))
    }

    /// The program this adapter spawns
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    fn reap(&self) {
        if let Ok(mut slot) = self.child.lock()
            && let Some(mut child) = slot.take()
        {
            child.kill().ok();
            child.wait().ok();
        }
    }
}

impl Speech for CommandSpeech {
    fn speak(&self, text: &str) {
        // Never let two utterances overlap
        self.reap();

        match Command::new(&self.program)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => {
                if let Ok(mut slot) = self.child.lock() {
                    *slot = Some(child);
                }
            }
            Err(err) => {
                warn!(program = %self.program, %err, "speech synthesis unavailable");
            }
        }
    }

    fn cancel(&self) {
        self.reap();
    }
}

fn find_in_path(program: &str) -> Option<PathBuf> {
    let path = env::var_os("PATH")?;
    env::split_paths(&path)
        .map(|dir| dir.join(program))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_in_path_locates_common_binaries() {
        // `sh` exists on any unix PATH this test runs on
        assert!(find_in_path("sh").is_some());
        assert!(find_in_path("definitely-not-a-binary-zzz").is_none());
    }

    #[test]
    fn speak_with_missing_program_is_silent() {
        let speech = CommandSpeech::new("definitely-not-a-binary-zzz");
        // Must log and continue, not panic
        speech.speak("pram");
        speech.cancel();
    }

    #[test]
    fn cancel_kills_running_utterance() {
        // Stand in for a long utterance with a sleep
        let speech = CommandSpeech::new("sleep");
        speech.speak("30");
        speech.cancel();
        assert!(speech.child.lock().unwrap().is_none());
    }
}
