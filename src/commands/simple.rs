//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI. The repeat-word timer is a TUI-only
//! capability; here the `again` command replays the word instead.

use crate::adapters::{CuePlayer, Speech};
use crate::core::PuzzleView;
use crate::output::formatters::{attempt_hearts, score_line, spaced_letters};
use crate::session::{AnswerOutcome, GameMode, GameSession, Phase};
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};
use std::thread;

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the
/// session rejects a transition it should have allowed.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple<R: Rng>(
    session: &mut GameSession<R>,
    speech: &dyn Speech,
    cues: &dyn CuePlayer,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Spellsprout - Spelling Practice                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    cues.welcome();

    'welcome: loop {
        debug_assert_eq!(session.state().phase(), Phase::Welcome);

        println!("Pick a game:\n");
        println!("  1. {}", GameMode::Spelling.title());
        println!("  2. {}", GameMode::Scramble.title());
        println!("  3. {}", GameMode::Blanks.title());
        println!(
            "\nWord set: {} — switch with 'set <name>', list with 'sets'",
            session.active_set().name().bright_yellow()
        );
        println!("Type 'quit' to leave.\n");

        let mode = loop {
            let choice = get_user_input("Choose")?.to_lowercase();

            match choice.as_str() {
                "1" | "spelling" => break GameMode::Spelling,
                "2" | "scramble" => break GameMode::Scramble,
                "3" | "blanks" => break GameMode::Blanks,
                "quit" | "q" | "exit" => {
                    println!("\n\u{1f44b} See you next time!\n");
                    return Ok(());
                }
                "sets" => {
                    for set in session.sets() {
                        println!("  • {set}");
                    }
                    println!();
                }
                _ => {
                    if let Some(name) = choice.strip_prefix("set ") {
                        match session.switch_word_set(name.trim()) {
                            Ok(()) => println!(
                                "\n✓ Now practicing '{}'\n",
                                session.active_set().name().bright_yellow()
                            ),
                            Err(err) => println!("\n❌ {err}\n"),
                        }
                    } else {
                        println!("❌ Pick 1, 2 or 3 (or 'sets', 'set <name>', 'quit')\n");
                    }
                }
            }
        };

        let mut plan = session.start_game(mode).map_err(|e| e.to_string())?;

        loop {
            println!("\n────────────────────────────────────────────────────────────");
            println!("{}   {}", plan.mode.title(), score_line(
                session.state().score(),
                session.state().total_rounds(),
            ));
            println!("────────────────────────────────────────────────────────────\n");

            match &plan.view {
                PuzzleView::Listen => {
                    println!("  \u{1f442} Listen and type what you hear.");
                    println!("  (type 'again' to hear the word once more)\n");
                }
                PuzzleView::Scrambled(text) => {
                    println!("  \u{1f3b2} {}\n", spaced_letters(text).bright_white().bold());
                    println!("  Hint: {}\n", plan.hint);
                }
                PuzzleView::Blanks(text) => {
                    println!("  \u{1f3af} {}\n", text.bright_white().bold());
                    println!("  Hint: {}\n", plan.hint);
                }
            }

            if let Some(text) = &plan.speak {
                speech.speak(text);
            }

            // Collect answers until the round is decided
            let (advance, delay) = loop {
                println!("  Tries: {}", attempt_hearts(session.state().attempts()));
                let input = get_user_input("Your answer")?;

                match input.to_lowercase().as_str() {
                    "quit" | "q" | "exit" => {
                        speech.cancel();
                        println!("\n\u{1f44b} See you next time!\n");
                        return Ok(());
                    }
                    "menu" | "m" => {
                        speech.cancel();
                        session.return_to_welcome();
                        println!("\n\u{1f504} Back to the menu!\n");
                        continue 'welcome;
                    }
                    "again" | "a" => {
                        if let Some(word) = session.hear_again() {
                            speech.speak(&word);
                        } else {
                            println!("  (nothing to repeat in this mode)\n");
                        }
                        continue;
                    }
                    _ => {}
                }

                match session.submit_answer(&input).map_err(|e| e.to_string())? {
                    AnswerOutcome::Correct { advance, delay } => {
                        speech.cancel();
                        cues.correct();
                        println!(
                            "\n  {}",
                            "\u{1f389} Fantastic! You got it right!".bright_green().bold()
                        );
                        break (advance, delay);
                    }
                    AnswerOutcome::Exhausted { answer, advance, delay } => {
                        speech.cancel();
                        cues.wrong();
                        println!(
                            "\n  {}",
                            format!("Sorry, the correct word was: {}", answer.to_uppercase())
                                .bright_red()
                        );
                        break (advance, delay);
                    }
                    AnswerOutcome::Incorrect { attempts_remaining } => {
                        cues.wrong();
                        let tries = if attempts_remaining == 1 { "try" } else { "tries" };
                        println!(
                            "\n  {}\n",
                            format!("Not quite — have another go! ({attempts_remaining} {tries} left)")
                                .yellow()
                        );
                    }
                    AnswerOutcome::Unrecognized => {
                        println!("\n  Please type the word first!\n");
                    }
                }
            };

            println!(
                "  {}\n",
                score_line(session.state().score(), session.state().total_rounds()).bright_cyan()
            );

            // Same breather the timed front-end gives before the next word
            thread::sleep(delay);

            plan = session
                .advance(advance)
                .ok_or("round transition was lost")?;
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
