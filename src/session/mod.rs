//! Game session state machine
//!
//! Owns all mutable game state and the round lifecycle; front-ends drive it
//! and run its timers.

mod session;
mod state;

pub use session::{
    ADVANCE_DELAY, AdvanceToken, AnswerOutcome, GameSession, REPEAT_DELAY, RoundPlan, RoundToken,
    SessionError,
};
pub use state::{GameMode, GameState, Phase};
