//! Answer evaluation
//!
//! Decides whether a submitted answer matches the target word and tracks the
//! bounded-retry budget. Pure: the verdict carries everything the caller
//! needs, scoring and presentation stay outside.

/// Maximum wrong answers allowed per round
pub const MAX_ATTEMPTS: u32 = 3;

/// Outcome of judging one submitted answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    /// Whether the answer matched the target word
    pub correct: bool,
    /// Attempts left after this submission (full budget again on a match)
    pub attempts_remaining: u32,
    /// Whether the attempt budget is spent without a match
    pub exhausted: bool,
}

/// Judge a raw answer against the target word
///
/// Input is trimmed and case-folded, then compared for exact equality with
/// the lowercase target; no fuzzy matching and no partial credit. A mismatch
/// consumes one attempt; reaching `max_attempts` marks the round exhausted.
///
/// # Examples
/// ```
/// use spellsprout::core::evaluate;
///
/// let verdict = evaluate("  CAT ", "cat", 0, 3);
/// assert!(verdict.correct);
/// assert_eq!(verdict.attempts_remaining, 3);
/// ```
#[must_use]
pub fn evaluate(raw_input: &str, target: &str, attempts_so_far: u32, max_attempts: u32) -> Verdict {
    let normalized = raw_input.trim().to_lowercase();

    if normalized == target.to_lowercase() {
        return Verdict {
            correct: true,
            attempts_remaining: max_attempts,
            exhausted: false,
        };
    }

    let used = (attempts_so_far + 1).min(max_attempts);
    Verdict {
        correct: false,
        attempts_remaining: max_attempts - used,
        exhausted: used >= max_attempts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_first_try() {
        let verdict = evaluate("CAT", "cat", 0, 3);
        assert_eq!(
            verdict,
            Verdict {
                correct: true,
                attempts_remaining: 3,
                exhausted: false,
            }
        );
    }

    #[test]
    fn wrong_final_attempt_exhausts() {
        let verdict = evaluate("dog", "cat", 2, 3);
        assert_eq!(
            verdict,
            Verdict {
                correct: false,
                attempts_remaining: 0,
                exhausted: true,
            }
        );
    }

    #[test]
    fn wrong_first_attempt() {
        let verdict = evaluate("dog", "cat", 0, 3);
        assert_eq!(
            verdict,
            Verdict {
                correct: false,
                attempts_remaining: 2,
                exhausted: false,
            }
        );
    }

    #[test]
    fn normalization_trims_and_folds() {
        assert!(evaluate("  cat  ", "cat", 0, 3).correct);
        assert!(evaluate("\tCaT\n", "cat", 0, 3).correct);
    }

    #[test]
    fn no_fuzzy_matching() {
        assert!(!evaluate("cats", "cat", 0, 3).correct);
        assert!(!evaluate("ca", "cat", 0, 3).correct);
        assert!(!evaluate("kat", "cat", 0, 3).correct);
    }

    #[test]
    fn correct_on_last_attempt_still_wins() {
        let verdict = evaluate("cat", "cat", 2, 3);
        assert!(verdict.correct);
        assert!(!verdict.exhausted);
        assert_eq!(verdict.attempts_remaining, 3);
    }

    #[test]
    fn attempts_never_go_negative() {
        // Callers reset after exhaustion, but an over-count must not underflow
        let verdict = evaluate("dog", "cat", 5, 3);
        assert_eq!(verdict.attempts_remaining, 0);
        assert!(verdict.exhausted);
    }
}
