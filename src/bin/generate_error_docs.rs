//! Generate error code documentation from the source of truth (error enums).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from the error enums via their `code()`, `description()`,
//! `details()`, and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use crossprint::errors::{BindError, ClueError, GridError};
use crossprint::puzzle::{PuzzleError, PuzzleInput};
use crossprint::render::RenderError;
use crossprint::word::{Direction, Position};

/// Macro to generate error documentation for any error type
/// with `code()`, `description()`, `details()`, `help()`, and `display_detailed()` methods
macro_rules! generate_error_docs {
    ($errors:expr) => {
        for error in $errors {
            println!("### {}: {}\n", error.code(), error.description());
            println!("**Details:** {}\n", error.details());

            if let Some(help_text) = error.help() {
                println!("**How to fix:**");
                println!("```");
                println!("{}", help_text);
                println!("```\n");
            }

            println!("**Example error message:**");
            println!("```");
            println!("{}", error);
            println!("```\n");

            println!("**Detailed format:**");
            println!("```");
            println!("{}", error.display_detailed());
            println!("```\n");

            println!("---\n");
        }
    };
}

fn all_grid_error_variants() -> Vec<GridError> {
    vec![
        GridError::Empty,
        GridError::InvalidCharacter { ch: '7', position: Position::new(1, 2) },
        GridError::NoLetters,
        GridError::NoWords,
        GridError::NumberedCellStartsNoWord { letter: 'C', position: Position::new(1, 1) },
        GridError::UnnumberedWordStart {
            direction: Direction::Horizontal,
            position: Position::new(2, 0),
            solution: "cd".to_string(),
        },
    ]
}

fn all_clue_error_variants() -> Vec<ClueError> {
    vec![
        ClueError::MissingSeparator { line_number: 2, line: "Gnagare".to_string() },
        ClueError::EmptyPrefix { line_number: 1, line: ":Stjärna".to_string() },
        ClueError::DuplicatePrefix { prefix: "S".to_string(), first_line: 1, line_number: 3 },
    ]
}

fn all_bind_error_variants() -> Vec<BindError> {
    vec![
        BindError::AmbiguousClue {
            direction: Direction::Horizontal,
            number: 3,
            prefixes: vec!["M".to_string(), "Mu".to_string()],
        },
        BindError::AmbiguousPrefix {
            direction: Direction::Vertical,
            prefix: "S".to_string(),
            numbers: vec![1, 4],
        },
        BindError::DirectionMismatch {
            expected: Direction::Horizontal,
            found: Direction::Vertical,
            number: 1,
        },
    ]
}

fn all_render_error_variants() -> Vec<RenderError> {
    let mut registry = handlebars::Handlebars::new();
    let mut errors = Vec::new();
    // Template--register a template with an unclosed block
    if let Err(e) = registry.register_template_string("broken", "{{#if a}}") {
        errors.push(RenderError::Template { name: "broken", source: Box::new(e) });
    }
    // Render--render a template that was never registered
    if let Err(e) = registry.render("missing", &()) {
        errors.push(RenderError::Render(e));
    }
    errors.push(RenderError::Format(std::fmt::Error));
    errors
}

fn all_puzzle_error_variants() -> Vec<PuzzleError> {
    let mut errors = vec![PuzzleError::Io {
        path: "puzzles/missing.toml".into(),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
    }];
    // Input--parse a document lacking the required keys
    if let Err(e) = PuzzleInput::parse_from_str("title = \"Korsord\"") {
        errors.push(e);
    }
    errors.push(PuzzleError::Grid(GridError::NoWords));
    errors.push(PuzzleError::Clue {
        direction: Direction::Vertical,
        source: ClueError::MissingSeparator { line_number: 2, line: "Gnagare".to_string() },
    });
    errors.push(PuzzleError::Bind(BindError::AmbiguousPrefix {
        direction: Direction::Horizontal,
        prefix: "S".to_string(),
        numbers: vec![1, 2],
    }));
    errors.push(PuzzleError::Render(RenderError::Format(std::fmt::Error)));
    errors
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n");

    println!("## Table of Contents\n");
    println!("- [Puzzle Errors (P001–P006)](#puzzle-errors)");
    println!("- [Grid Errors (G001–G006)](#grid-errors)");
    println!("- [Clue Errors (C001–C003)](#clue-errors)");
    println!("- [Binding Errors (B001–B003)](#binding-errors)");
    println!("- [Render Errors (R001–R003)](#render-errors)");
    println!("- [Warnings](#warnings)\n");

    println!("## Puzzle Errors\n");
    println!("Top-level errors for one input file. These wrap the lower-level errors below. A failing input never stops the other inputs of a batch.\n");
    generate_error_docs!(all_puzzle_error_variants());

    println!("## Grid Errors\n");
    println!("Errors found while parsing the grid and deriving its numbered words.\n");
    generate_error_docs!(all_grid_error_variants());

    println!("## Clue Errors\n");
    println!("Errors in the `prefix:clue` lines of a clue list.\n");
    generate_error_docs!(all_clue_error_variants());

    println!("## Binding Errors\n");
    println!("Errors while pairing words with clues by prefix.\n");
    generate_error_docs!(all_bind_error_variants());

    println!("## Render Errors\n");
    println!("Internal errors while producing HTML or SVG.\n");
    generate_error_docs!(all_render_error_variants());

    println!("## Warnings\n");
    println!("These do not stop rendering and have no code:\n");
    println!("- a word without a matching clue is rendered with its length only;");
    println!("- a clue whose prefix matches no word is reported and left out.\n");
}
