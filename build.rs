//! Build script to generate embedded word sets
//!
//! Reads `word|hint` set files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_set(
        "data/starter.txt",
        &Path::new(&out_dir).join("starter.rs"),
        "STARTER",
        "Starter practice words with hints",
    );

    generate_word_set(
        "data/animals.txt",
        &Path::new(&out_dir).join("animals.rs"),
        "ANIMALS",
        "Animal words with hints",
    );

    generate_word_set(
        "data/everyday.txt",
        &Path::new(&out_dir).join("everyday.rs"),
        "EVERYDAY",
        "Everyday-object words with hints",
    );

    // Rebuild if set files change
    println!("cargo:rerun-if-changed=data/starter.txt");
    println!("cargo:rerun-if-changed=data/animals.txt");
    println!("cargo:rerun-if-changed=data/everyday.txt");
}

fn generate_word_set(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let pairs: Vec<(&str, &str)> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            line.split_once('|')
                .unwrap_or_else(|| panic!("Malformed line in {input_path}: {line:?}"))
        })
        .map(|(word, hint)| (word.trim(), hint.trim()))
        .collect();

    let count = pairs.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word set").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, &str)] = &[").unwrap();
    for (word, hint) in &pairs {
        writeln!(output, "    ({word:?}, {hint:?}),").unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in `{const_name}`").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
