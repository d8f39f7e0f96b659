//! Game session orchestration
//!
//! `GameSession` owns the state machine: Welcome -> Playing -> Welcome, with
//! per-round AwaitingAnswer -> (Correct | Exhausted) transitions driven by
//! the front-end. The session performs no I/O and owns no timers; it issues
//! tokens that front-end timers must present back, so a stale timer callback
//! from a finished round is detected here and discarded.

use crate::core::{
    MAX_ATTEMPTS, PuzzleView, WordEntry, WordSet, evaluate, make_blanks, scramble,
};
use crate::session::state::{GameMode, GameState, Phase};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::time::Duration;

/// Delay before the next round after a decided one, all modes
pub const ADVANCE_DELAY: Duration = Duration::from_millis(4000);

/// Spelling mode: silence before the word is spoken again
pub const REPEAT_DELAY: Duration = Duration::from_millis(5000);

/// Handle tying a repeat-word timer to the round that armed it
///
/// Stale tokens (from a round that has since ended) are rejected by
/// [`GameSession::repeat_cue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundToken(u64);

/// Handle authorizing exactly one delayed round transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceToken(u64);

/// Errors for operations attempted in the wrong phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Operation is only valid on the welcome screen
    NotAtWelcome,
    /// No round is currently awaiting an answer
    NoActiveRound,
    /// The requested word set does not exist
    UnknownSet(String),
    /// No non-empty word set was provided
    NoWords,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAtWelcome => write!(f, "Only available from the welcome screen"),
            Self::NoActiveRound => write!(f, "No round is awaiting an answer"),
            Self::UnknownSet(name) => write!(f, "No word set named '{name}'"),
            Self::NoWords => write!(f, "No usable word sets were provided"),
        }
    }
}

impl std::error::Error for SessionError {}

/// Everything a front-end needs to present one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundPlan {
    /// Mode the round is played in
    pub mode: GameMode,
    /// Derived rendering of the word
    pub view: PuzzleView,
    /// Hint text for the word
    pub hint: String,
    /// Length of the answer, for input sizing
    pub word_len: usize,
    /// Text to hand to the speech collaborator, if any
    pub speak: Option<String>,
    /// When to fire the repeat-word cue, if the mode uses one
    pub repeat_after: Option<Duration>,
    /// Token the repeat timer must present back
    pub token: RoundToken,
}

/// Result of one submitted answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Right answer: score and round counters already updated
    Correct {
        /// Token unlocking the delayed next-round transition
        advance: AdvanceToken,
        /// How long to wait before presenting it
        delay: Duration,
    },
    /// Wrong answer with budget left
    Incorrect {
        /// Attempts still available this round
        attempts_remaining: u32,
    },
    /// Attempt budget spent: the answer is revealed and the round ends
    Exhausted {
        /// The word the player was trying to spell
        answer: String,
        /// Token unlocking the delayed next-round transition
        advance: AdvanceToken,
        /// How long to wait before presenting it
        delay: Duration,
    },
    /// Empty or unreadable input: costs nothing, ask the player to try again
    Unrecognized,
}

/// The spelling-practice state machine
///
/// Generic over the random source so tests can seed exact puzzles; the
/// default construction draws OS entropy.
#[derive(Debug)]
pub struct GameSession<R: Rng = StdRng> {
    state: GameState,
    sets: Vec<WordSet>,
    current: Option<WordEntry>,
    rng: R,
    // Timer-token generation counter. Bumped on every round boundary, which
    // is what invalidates outstanding tokens.
    epoch: u64,
    pending_advance: Option<u64>,
    repeat_armed: Option<u64>,
}

impl GameSession<StdRng> {
    /// Create a session over the given word sets
    ///
    /// The first set is active initially.
    ///
    /// # Errors
    /// Returns [`SessionError::NoWords`] if no set contains a word.
    pub fn new(sets: Vec<WordSet>) -> Result<Self, SessionError> {
        Self::with_rng(sets, StdRng::from_os_rng())
    }
}

impl<R: Rng> GameSession<R> {
    /// Create a session with an explicit random source
    ///
    /// # Errors
    /// Returns [`SessionError::NoWords`] if no set contains a word.
    pub fn with_rng(sets: Vec<WordSet>, rng: R) -> Result<Self, SessionError> {
        let sets: Vec<WordSet> = sets.into_iter().filter(|s| !s.is_empty()).collect();
        if sets.is_empty() {
            return Err(SessionError::NoWords);
        }

        Ok(Self {
            state: GameState::new(),
            sets,
            current: None,
            rng,
            epoch: 0,
            pending_advance: None,
            repeat_armed: None,
        })
    }

    /// Read-only view of the session counters
    #[inline]
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// All word sets known to the session
    #[inline]
    #[must_use]
    pub fn sets(&self) -> &[WordSet] {
        &self.sets
    }

    /// The set rounds are currently drawn from
    #[must_use]
    pub fn active_set(&self) -> &WordSet {
        &self.sets[self.state.active_set]
    }

    /// The word in play, if a round is live
    #[inline]
    #[must_use]
    pub const fn current_entry(&self) -> Option<&WordEntry> {
        self.current.as_ref()
    }

    /// Start playing in the given mode
    ///
    /// # Errors
    /// Returns [`SessionError::NotAtWelcome`] if a game is already running.
    pub fn start_game(&mut self, mode: GameMode) -> Result<RoundPlan, SessionError> {
        if self.state.phase != Phase::Welcome {
            return Err(SessionError::NotAtWelcome);
        }

        self.state.mode = mode;
        Ok(self.setup_round())
    }

    /// Judge a submitted answer for the live round
    ///
    /// Empty (after trimming) input is reported as
    /// [`AnswerOutcome::Unrecognized`] and consumes no attempt; it is also
    /// how an empty handwriting-recognition result arrives here.
    ///
    /// # Errors
    /// Returns [`SessionError::NoActiveRound`] outside `AwaitingAnswer`.
    pub fn submit_answer(&mut self, raw_input: &str) -> Result<AnswerOutcome, SessionError> {
        if self.state.phase != Phase::AwaitingAnswer {
            return Err(SessionError::NoActiveRound);
        }
        let Some(entry) = self.current.clone() else {
            return Err(SessionError::NoActiveRound);
        };

        // Submitting stops the repeat-word timer whatever the verdict.
        self.repeat_armed = None;

        if raw_input.trim().is_empty() {
            return Ok(AnswerOutcome::Unrecognized);
        }

        let verdict = evaluate(raw_input, entry.word(), self.state.attempts, MAX_ATTEMPTS);

        if verdict.correct {
            self.state.score += 1;
            let (advance, delay) = self.end_round();
            Ok(AnswerOutcome::Correct { advance, delay })
        } else if verdict.exhausted {
            let (advance, delay) = self.end_round();
            Ok(AnswerOutcome::Exhausted {
                answer: entry.word().to_string(),
                advance,
                delay,
            })
        } else {
            self.state.attempts = MAX_ATTEMPTS - verdict.attempts_remaining;
            Ok(AnswerOutcome::Incorrect {
                attempts_remaining: verdict.attempts_remaining,
            })
        }
    }

    /// Feed a handwriting-recognition result into the round
    ///
    /// `None` (nothing recognized) maps to [`AnswerOutcome::Unrecognized`].
    ///
    /// # Errors
    /// Returns [`SessionError::NoActiveRound`] outside `AwaitingAnswer`.
    pub fn submit_recognition(
        &mut self,
        recognized: Option<&str>,
    ) -> Result<AnswerOutcome, SessionError> {
        match recognized {
            Some(text) => self.submit_answer(text),
            None => {
                if self.state.phase == Phase::AwaitingAnswer {
                    Ok(AnswerOutcome::Unrecognized)
                } else {
                    Err(SessionError::NoActiveRound)
                }
            }
        }
    }

    /// Run the delayed next-round transition
    ///
    /// Only the token from the most recent terminal outcome unlocks this;
    /// stale or already-consumed tokens return `None` and change nothing, so
    /// at most one setup can ever be pending.
    pub fn advance(&mut self, token: AdvanceToken) -> Option<RoundPlan> {
        if self.state.phase == Phase::RoundOver && self.pending_advance == Some(token.0) {
            Some(self.setup_round())
        } else {
            None
        }
    }

    /// Repeat-word timer callback for spelling mode
    ///
    /// Returns the word to speak again, once, iff the token is still the
    /// live round's and no input activity has cancelled it.
    pub fn repeat_cue(&mut self, token: RoundToken) -> Option<&str> {
        if self.state.phase == Phase::AwaitingAnswer && self.repeat_armed == Some(token.0) {
            self.repeat_armed = None;
            self.current.as_ref().map(WordEntry::word)
        } else {
            None
        }
    }

    /// Player asked to hear the word again (spelling mode only)
    #[must_use]
    pub fn hear_again(&mut self) -> Option<String> {
        if self.state.phase == Phase::AwaitingAnswer && self.state.mode == GameMode::Spelling {
            // An explicit replay stands in for the automatic one.
            self.repeat_armed = None;
            self.current.as_ref().map(|e| e.word().to_string())
        } else {
            None
        }
    }

    /// The player started typing: cancel the pending repeat-word cue
    pub fn note_input_activity(&mut self) {
        self.repeat_armed = None;
    }

    /// Leave the game screen, zeroing all counters
    ///
    /// The word cursor is deliberately kept, so coming back continues the
    /// cycle instead of replaying the same opening words.
    pub fn return_to_welcome(&mut self) {
        self.state.phase = Phase::Welcome;
        self.state.score = 0;
        self.state.total_rounds = 0;
        self.state.attempts = 0;
        self.current = None;
        self.epoch += 1;
        self.pending_advance = None;
        self.repeat_armed = None;
    }

    /// Switch the active word set by name
    ///
    /// Resets the word cursor to the start of the new set.
    ///
    /// # Errors
    /// Returns [`SessionError::NotAtWelcome`] mid-game (switching sets while
    /// a round is live is not allowed) and [`SessionError::UnknownSet`] for
    /// names the session does not know.
    pub fn switch_word_set(&mut self, key: &str) -> Result<(), SessionError> {
        if self.state.phase != Phase::Welcome {
            return Err(SessionError::NotAtWelcome);
        }

        let position = self
            .sets
            .iter()
            .position(|s| s.name() == key)
            .ok_or_else(|| SessionError::UnknownSet(key.to_string()))?;

        self.state.active_set = position;
        self.state.word_cursor = 0;
        Ok(())
    }

    /// Decide the live round and arm the advance timer
    fn end_round(&mut self) -> (AdvanceToken, Duration) {
        self.state.total_rounds += 1;
        self.state.attempts = 0;
        self.state.phase = Phase::RoundOver;
        self.epoch += 1;
        self.pending_advance = Some(self.epoch);
        (AdvanceToken(self.epoch), ADVANCE_DELAY)
    }

    /// Pick the next word and derive its puzzle
    fn setup_round(&mut self) -> RoundPlan {
        let set = &self.sets[self.state.active_set];
        let index = self.state.word_cursor % set.len();
        let entry = set
            .get(index)
            .cloned()
            .expect("cursor is taken modulo a non-empty set");
        self.state.word_cursor = (index + 1) % set.len();

        self.state.attempts = 0;
        self.state.phase = Phase::AwaitingAnswer;
        self.epoch += 1;
        self.pending_advance = None;
        let token = RoundToken(self.epoch);

        let (view, speak, repeat_after) = match self.state.mode {
            GameMode::Spelling => (
                PuzzleView::Listen,
                Some(entry.word().to_string()),
                Some(REPEAT_DELAY),
            ),
            GameMode::Scramble => (
                PuzzleView::Scrambled(scramble(entry.word(), &mut self.rng)),
                None,
                None,
            ),
            GameMode::Blanks => (
                PuzzleView::Blanks(make_blanks(entry.word(), &mut self.rng)),
                None,
                None,
            ),
        };

        self.repeat_armed = repeat_after.is_some().then_some(self.epoch);

        let plan = RoundPlan {
            mode: self.state.mode,
            view,
            hint: entry.hint().to_string(),
            word_len: entry.len(),
            speak,
            repeat_after,
            token,
        };
        self.current = Some(entry);
        plan
    }
}
