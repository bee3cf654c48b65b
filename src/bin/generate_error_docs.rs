//! Generate the build-error and outcome reference from the enums themselves.
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from `BuildError` via its `code()`, `description()`, `details()`,
//! and `help()` methods, and the notification text of every validation
//! outcome via `Outcome::message()`.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use wordsearch::catalog::TargetWord;
use wordsearch::errors::BuildError;
use wordsearch::grid::Cell;
use wordsearch::validator::Outcome;

/// Helper to create all `BuildError` variants for documentation
fn all_build_error_variants() -> Vec<BuildError> {
    vec![
        BuildError::GridTooSmall { size: 1 },
        BuildError::WrongRowCount { expected: 12, actual: 11 },
        BuildError::WrongRowLength { row: 4, expected: 12, actual: 11 },
        BuildError::InvalidGridChar { row: 2, col: 7, invalid_char: '3' },
        BuildError::EmptyCatalog,
        BuildError::WordTooShort { word: "Y".to_string() },
        BuildError::InvalidWordChars { word: "buena fe".to_string(), invalid_char: ' ' },
        BuildError::DuplicateWord { word: "Pasión".to_string(), normalized: "PASION".to_string() },
        BuildError::CellOutOfRange { index: 144, size: 12 },
    ]
}

/// Helper to create one of each `Outcome` for documentation
fn all_outcomes() -> Vec<Outcome> {
    let word = TargetWord {
        display: "Respeto".to_string(),
        plain: "RESPETO".to_string(),
    };
    vec![
        Outcome::TooShort,
        Outcome::NotAStraightLine,
        Outcome::NotContiguous,
        Outcome::NoWordMatch,
        Outcome::AlreadyFound { word: word.clone() },
        Outcome::NewMatch { word, path: (1..=7).map(|x| Cell::new(x, 0)).collect() },
    ]
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n");

    println!("## Build Errors\n");
    println!("Building a grid or a word list is the only operation that can fail.\n");
    for error in all_build_error_variants() {
        println!("### {}: {}\n", error.code(), error.description());
        println!("**Details:** {}\n", error.details());

        if let Some(help_text) = error.help() {
            println!("**How to fix:**");
            println!("```");
            println!("{}", help_text);
            println!("```\n");
        }

        println!("**Detailed format:**");
        println!("```");
        println!("{}", error.display_detailed());
        println!("```\n");

        println!("---\n");
    }

    println!("## Validation Outcomes\n");
    println!("Validating a selection never fails; it reports one of these outcomes.\n");
    println!("| kind | notification |");
    println!("|------|--------------|");
    for outcome in all_outcomes() {
        println!("| `{}` | {} |", outcome.kind(), outcome.message());
    }
}
