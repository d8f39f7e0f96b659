//! Formatting utilities for terminal output

use crate::core::MAX_ATTEMPTS;

/// Format the score counter line
#[must_use]
pub fn score_line(score: u32, total_rounds: u32) -> String {
    format!("Score: {score} / {total_rounds}")
}

/// Render the remaining attempt budget as hearts
///
/// Full hearts for attempts still available, empty ones for those spent.
#[must_use]
pub fn attempt_hearts(attempts_used: u32) -> String {
    let used = attempts_used.min(MAX_ATTEMPTS) as usize;
    let left = MAX_ATTEMPTS as usize - used;

    let mut hearts = String::new();
    for i in 0..MAX_ATTEMPTS as usize {
        if i > 0 {
            hearts.push(' ');
        }
        hearts.push(if i < left { '\u{2665}' } else { '\u{2661}' });
    }
    hearts
}

/// Spread letters for display: a scramble `"MARP"` becomes `"M A R P"`
#[must_use]
pub fn spaced_letters(text: &str) -> String {
    let mut spaced = String::with_capacity(text.len() * 2);
    for (i, c) in text.chars().enumerate() {
        if i > 0 {
            spaced.push(' ');
        }
        spaced.push(c);
    }
    spaced
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_line_format() {
        assert_eq!(score_line(3, 5), "Score: 3 / 5");
        assert_eq!(score_line(0, 0), "Score: 0 / 0");
    }

    #[test]
    fn hearts_full_budget() {
        assert_eq!(attempt_hearts(0), "♥ ♥ ♥");
    }

    #[test]
    fn hearts_partial_budget() {
        assert_eq!(attempt_hearts(1), "♥ ♥ ♡");
        assert_eq!(attempt_hearts(2), "♥ ♡ ♡");
    }

    #[test]
    fn hearts_spent_budget() {
        assert_eq!(attempt_hearts(3), "♡ ♡ ♡");
        // Over-count clamps instead of panicking
        assert_eq!(attempt_hearts(9), "♡ ♡ ♡");
    }

    #[test]
    fn spaced_letters_spreads_word() {
        assert_eq!(spaced_letters("MARP"), "M A R P");
        assert_eq!(spaced_letters(""), "");
        assert_eq!(spaced_letters("A"), "A");
    }
}
