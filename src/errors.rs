//! Error types for grid analysis, clue parsing and clue binding, with error
//! codes and helpful messages.
//!
//! # Error Codes
//!
//! - G001: `GridError::Empty` (Grid has no rows)
//! - G002: `GridError::InvalidCharacter` (Character other than a letter, `.` or space)
//! - G003: `GridError::NoLetters` (Grid has no letter cells)
//! - G004: `GridError::NoWords` (No run of two or more letters)
//! - G005: `GridError::NumberedCellStartsNoWord` (Uppercase letter starts no word)
//! - G006: `GridError::UnnumberedWordStart` (Word starts on a lowercase letter)
//! - C001: `ClueError::MissingSeparator` (Clue line without `:`)
//! - C002: `ClueError::EmptyPrefix` (Clue prefix empty or only accents)
//! - C003: `ClueError::DuplicatePrefix` (Same prefix twice in one list)
//! - B001: `BindError::AmbiguousClue` (Several clues match one word)
//! - B002: `BindError::AmbiguousPrefix` (One clue matches several words)
//! - B003: `BindError::DirectionMismatch` (Word bound against the other direction's list)
//!
//! # Examples
//!
//! ```
//! use crossprint::analyzer::analyze;
//! use crossprint::errors::GridError;
//!
//! match analyze("ab\n1c") {
//!     Err(e @ GridError::InvalidCharacter { .. }) => {
//!         assert_eq!(e.code(), "G002");
//!         println!("{}", e.display_detailed());
//!     }
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

use crate::word::{Direction, Position};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("Grid is empty")]
    Empty,

    #[error("Invalid character {ch:?} at {position}")]
    InvalidCharacter { ch: char, position: Position },

    #[error("Grid contains no letters")]
    NoLetters,

    #[error("Grid contains no words (no run of two or more letters)")]
    NoWords,

    #[error("Numbered letter '{letter}' at {position} does not start any word")]
    NumberedCellStartsNoWord { letter: char, position: Position },

    #[error("The {direction} word \"{solution}\" at {position} starts on a lowercase letter")]
    UnnumberedWordStart {
        direction: Direction,
        position: Position,
        solution: String,
    },
}

impl GridError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            GridError::Empty => "G001",
            GridError::InvalidCharacter { .. } => "G002",
            GridError::NoLetters => "G003",
            GridError::NoWords => "G004",
            GridError::NumberedCellStartsNoWord { .. } => "G005",
            GridError::UnnumberedWordStart { .. } => "G006",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            GridError::Empty => "Grid has no rows",
            GridError::InvalidCharacter { .. } => "Character other than a letter, '.' or space",
            GridError::NoLetters => "Grid has no letter cells",
            GridError::NoWords => "No run of two or more letters in any direction",
            GridError::NumberedCellStartsNoWord { .. } => "Uppercase letter that starts no word",
            GridError::UnnumberedWordStart { .. } => "Word that starts on a lowercase letter",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            GridError::Empty => "The grid string is empty or only contains blank lines.",
            GridError::InvalidCharacter { .. } => "Each grid character must be a letter (a cell of the solution), '.' (a blocked cell) or a space (a cell outside the grid). Digits, punctuation and tabs are rejected rather than guessed at.",
            GridError::NoLetters => "The grid has blocked and empty cells only, so there is nothing to number or clue.",
            GridError::NoWords => "Every letter is isolated in both directions. A word needs at least two adjacent letters in a row or column.",
            GridError::NumberedCellStartsNoWord { .. } => "Uppercase letters mark cells that get a number. This one is not the first letter of any horizontal or vertical word of length two or more.",
            GridError::UnnumberedWordStart { .. } => "Adjacent letters form a word, but its first letter is lowercase, so the word would be left without a number.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            GridError::Empty => Some("Example: grid = \"\"\"\nSoL\nö.å\nMus\n\"\"\""),
            GridError::InvalidCharacter { .. } => Some("Use letters for cells, '.' for blocked cells and spaces outside the grid"),
            GridError::NoLetters => Some("Add the solution letters to the grid"),
            GridError::NoWords => Some("Place at least two letters next to each other"),
            GridError::NumberedCellStartsNoWord { .. } => Some("Write the letter in lowercase, or check the neighbouring cells"),
            GridError::UnnumberedWordStart { .. } => Some("Write the first letter of the word in uppercase"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClueError {
    #[error("Clue on line {line_number} has no ':' separator: \"{line}\"")]
    MissingSeparator { line_number: usize, line: String },

    #[error("Clue on line {line_number} has an empty prefix: \"{line}\"")]
    EmptyPrefix { line_number: usize, line: String },

    #[error("Prefix \"{prefix}\" on line {line_number} repeats the prefix on line {first_line}")]
    DuplicatePrefix {
        prefix: String,
        first_line: usize,
        line_number: usize,
    },
}

impl ClueError {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ClueError::MissingSeparator { .. } => "C001",
            ClueError::EmptyPrefix { .. } => "C002",
            ClueError::DuplicatePrefix { .. } => "C003",
        }
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            ClueError::MissingSeparator { .. } => "Clue line without ':'",
            ClueError::EmptyPrefix { .. } => "Clue prefix is empty",
            ClueError::DuplicatePrefix { .. } => "Same prefix twice in one clue list",
        }
    }

    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            ClueError::MissingSeparator { .. } => "Every clue line has the form <prefix>:<clue text>. The prefix selects the word the clue belongs to.",
            ClueError::EmptyPrefix { .. } => "Nothing is left of the prefix once case and accents are ignored, either because the line starts with ':' or because the prefix holds only combining marks. An empty prefix would match every word in the direction.",
            ClueError::DuplicatePrefix { .. } => "Prefixes are compared ignoring case and accents, and must be unique within the horizontal list and within the vertical list.",
        }
    }

    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ClueError::MissingSeparator { .. } | ClueError::EmptyPrefix { .. } => Some("Example: 'S:Lyser på dagen'"),
            ClueError::DuplicatePrefix { .. } => Some("Use longer prefixes to tell the words apart (e.g., 'SO:' and 'SA:')"),
        }
    }

    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    #[error("The {direction} word {number} is matched by several clues: \"{}\"", .prefixes.join("\", \""))]
    AmbiguousClue {
        direction: Direction,
        number: u32,
        prefixes: Vec<String>,
    },

    #[error("The {direction} clue \"{prefix}\" matches several words: {}", join_numbers(.numbers))]
    AmbiguousPrefix {
        direction: Direction,
        prefix: String,
        numbers: Vec<u32>,
    },

    #[error("Word {number} is {found} but was bound against the {expected} clues")]
    DirectionMismatch {
        expected: Direction,
        found: Direction,
        number: u32,
    },
}

fn join_numbers(numbers: &[u32]) -> String {
    numbers.iter().map(u32::to_string).collect::<Vec<_>>().join(", ")
}

impl BindError {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            BindError::AmbiguousClue { .. } => "B001",
            BindError::AmbiguousPrefix { .. } => "B002",
            BindError::DirectionMismatch { .. } => "B003",
        }
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            BindError::AmbiguousClue { .. } => "Several clues match one word",
            BindError::AmbiguousPrefix { .. } => "One clue matches several words",
            BindError::DirectionMismatch { .. } => "Word bound against the other direction's clues",
        }
    }

    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            BindError::AmbiguousClue { .. } => "Each word takes the single clue whose prefix starts its solution. Two or more prefixes start this word, so the clue cannot be chosen.",
            BindError::AmbiguousPrefix { .. } => "A prefix must identify exactly one word of its direction. This prefix starts more than one word.",
            BindError::DirectionMismatch { .. } => "Horizontal words are only bound against horizontal clues, and vertical words against vertical clues. This is an internal error.",
        }
    }

    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            BindError::AmbiguousClue { .. } | BindError::AmbiguousPrefix { .. } => Some("Consider using longer prefixes for the clues involved"),
            BindError::DirectionMismatch { .. } => None,
        }
    }

    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
