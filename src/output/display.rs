//! Display functions for command results

use crate::commands::PreviewResult;
use crate::core::WordSet;
use crate::output::formatters::spaced_letters;
use colored::Colorize;

/// Print the puzzle renderings for a previewed word
pub fn print_preview_result(result: &PreviewResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Puzzles for: {}",
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!(
        "\n  \u{1f3b2} Scramble:  {}",
        spaced_letters(&result.scrambled).bright_white().bold()
    );
    println!(
        "  \u{1f3af} Blanks:    {}",
        result.blanks.bright_white().bold()
    );

    if let Some(seed) = result.seed {
        println!("\n  (seeded with {seed}, rerun with --seed {seed} to reproduce)");
    }
    println!();
}

/// Print the word-set listing
pub fn print_set_list(sets: &[WordSet]) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Available word sets");
    println!("{}", "─".repeat(60).cyan());

    for set in sets {
        let sample: Vec<&str> = set.iter().take(3).map(|e| e.word()).collect();
        println!(
            "\n  {} — {} words ({}, ...)",
            set.name().bright_yellow().bold(),
            set.len(),
            sample.join(", ")
        );
    }
    println!();
}
