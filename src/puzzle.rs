//! Load a crossword description and bind it into a [`Puzzle`].
//!
//! The input is a TOML document with these keys:
//!
//! ```toml
//! title = "Korsord 1"
//! grid = """
//! SoL
//! ö.å
//! Mus
//! """
//! clues_horizontal = """
//! S:Stjärna
//! M:Gnagare
//! """
//! clues_vertical = """
//! S:Kan vara sicksack
//! L:Stänger dörren
//! """
//! extra_text = "Lösning på sidan 12"   # optional
//! ```
//!
//! Parsing from a string is separate from reading a file, so callers holding
//! the text in memory never touch the filesystem.
//!
//! # Error Codes
//!
//! - P001: `Io` (Input file could not be read)
//! - P002: `Input` (Input is not a valid puzzle TOML document)
//! - P003: `Grid` (wraps [`GridError`])
//! - P004: `Clue` (wraps [`ClueError`])
//! - P005: `Bind` (wraps [`BindError`])
//! - P006: `Render` (wraps [`RenderError`])

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::analyzer::analyze;
use crate::binder::{bind, BoundWord};
use crate::clues::{parse_clue_lines, ClueEntry};
use crate::errors::{format_error_with_code_and_help, BindError, ClueError, GridError};
use crate::grid::Grid;
use crate::render::RenderError;
use crate::word::Direction;

/// The raw input record of one puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PuzzleInput {
    pub title: String,
    pub grid: String,
    pub clues_horizontal: String,
    pub clues_vertical: String,
    #[serde(default)]
    pub extra_text: String,
}

impl PuzzleInput {
    /// Parse a puzzle description from TOML text.
    ///
    /// # Errors
    ///
    /// `PuzzleError::Input` when the text is not TOML or lacks a required key.
    pub fn parse_from_str(contents: &str) -> Result<PuzzleInput, PuzzleError> {
        Ok(toml::from_str(contents)?)
    }

    /// Read and parse a puzzle description file.
    ///
    /// # Errors
    ///
    /// `PuzzleError::Io` if the file cannot be read, otherwise as
    /// [`PuzzleInput::parse_from_str`].
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<PuzzleInput, PuzzleError> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|source| PuzzleError::Io {
            path: path_ref.to_path_buf(),
            source,
        })?;
        Self::parse_from_str(&data)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmatchedWord {
    pub direction: Direction,
    pub number: u32,
    pub solution: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrphanClue {
    pub direction: Direction,
    pub entry: ClueEntry,
}

/// Non-fatal findings from binding. The puzzle still renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    pub unmatched: Vec<UnmatchedWord>,
    pub orphans: Vec<OrphanClue>,
}

impl Diagnostics {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.unmatched.is_empty() && self.orphans.is_empty()
    }

    /// One human readable line per finding.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        let unmatched = self.unmatched.iter().map(|u| {
            format!("{} word {} ({}) has no clue", u.direction, u.number, u.solution.to_uppercase())
        });
        let orphans = self.orphans.iter().map(|o| {
            format!(
                "{} clue \"{}:{}\" (line {}) matches no word",
                o.direction, o.entry.prefix, o.entry.body, o.entry.line_number
            )
        });
        unmatched.chain(orphans).collect()
    }
}

/// A fully analyzed and bound puzzle, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub title: String,
    pub grid: Grid,
    pub horizontal: Vec<BoundWord>,
    pub vertical: Vec<BoundWord>,
    pub extra_text: String,
    pub diagnostics: Diagnostics,
}

impl Puzzle {
    /// Analyze the grid and bind both clue lists.
    ///
    /// # Errors
    ///
    /// Any grid, clue-list or binding error; unmatched words and orphan clues
    /// end up in [`Puzzle::diagnostics`] instead.
    pub fn build(input: &PuzzleInput) -> Result<Puzzle, PuzzleError> {
        let analysis = analyze(&input.grid)?;
        log::debug!(
            "Analyzed \"{}\": {}x{} grid, {} horizontal and {} vertical words",
            input.title,
            analysis.grid.width(),
            analysis.grid.height(),
            analysis.horizontal.len(),
            analysis.vertical.len()
        );

        let mut diagnostics = Diagnostics::default();
        let mut bound = Vec::with_capacity(2);
        for direction in Direction::ALL {
            let text = match direction {
                Direction::Horizontal => &input.clues_horizontal,
                Direction::Vertical => &input.clues_vertical,
            };
            let clues = parse_clue_lines(text).map_err(|source| PuzzleError::Clue { direction, source })?;
            let binding = bind(direction, analysis.words(direction), &clues)?;

            for number in &binding.unmatched {
                if let Some(b) = binding.words.iter().find(|b| b.word.number == *number) {
                    diagnostics.unmatched.push(UnmatchedWord {
                        direction,
                        number: *number,
                        solution: b.word.solution.clone(),
                    });
                }
            }
            diagnostics
                .orphans
                .extend(binding.orphans.into_iter().map(|entry| OrphanClue { direction, entry }));
            bound.push(binding.words);
        }

        let vertical = bound.pop().unwrap_or_default();
        let horizontal = bound.pop().unwrap_or_default();

        Ok(Puzzle {
            title: input.title.clone(),
            grid: analysis.grid,
            horizontal,
            vertical,
            extra_text: input.extra_text.clone(),
            diagnostics,
        })
    }

    #[must_use]
    pub fn words(&self, direction: Direction) -> &[BoundWord] {
        match direction {
            Direction::Horizontal => &self.horizontal,
            Direction::Vertical => &self.vertical,
        }
    }
}

/// Everything that can make one puzzle input fail.
///
/// Wraps the lower level errors so the batch driver and CLI handle a single
/// `Result<_, PuzzleError>` per input.
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid puzzle description: {0}")]
    Input(#[from] toml::de::Error),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("{direction} clues: {source}")]
    Clue {
        direction: Direction,
        #[source]
        source: ClueError,
    },

    #[error("clue binding error: {0}")]
    Bind(#[from] BindError),

    #[error("render error: {0}")]
    Render(#[from] RenderError),
}

impl PuzzleError {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            PuzzleError::Io { .. } => "P001",
            PuzzleError::Input(_) => "P002",
            PuzzleError::Grid(_) => "P003",
            PuzzleError::Clue { .. } => "P004",
            PuzzleError::Bind(_) => "P005",
            PuzzleError::Render(_) => "P006",
        }
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            PuzzleError::Io { .. } => "Input file could not be read",
            PuzzleError::Input(_) => "Input is not a valid puzzle description",
            PuzzleError::Grid(_) => "Grid analysis failed",
            PuzzleError::Clue { .. } => "Clue list could not be parsed",
            PuzzleError::Bind(_) => "Clues could not be bound to words",
            PuzzleError::Render(_) => "Output could not be rendered",
        }
    }

    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            PuzzleError::Io { .. } => "The file does not exist, is not readable or is not valid UTF-8.",
            PuzzleError::Input(_) => "The input must be a TOML document with the string keys title, grid, clues_horizontal and clues_vertical, and optionally extra_text.",
            PuzzleError::Grid(_) => "This wraps an underlying GridError (see Grid Errors section for specific error codes).",
            PuzzleError::Clue { .. } => "This wraps an underlying ClueError (see Clue Errors section for specific error codes).",
            PuzzleError::Bind(_) => "This wraps an underlying BindError (see Binding Errors section for specific error codes).",
            PuzzleError::Render(_) => "This wraps an underlying RenderError (see Render Errors section for specific error codes).",
        }
    }

    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            PuzzleError::Io { .. } => Some("Check the path and the file permissions"),
            PuzzleError::Input(_) => Some("Multi-line values are written between triple quotes: grid = \"\"\"...\"\"\""),
            // wrapped errors carry their own help
            _ => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            PuzzleError::Grid(e) => format!("{}\n  caused by: {}", self.code(), e.display_detailed()),
            PuzzleError::Clue { direction, source } => {
                format!("{} ({direction} clues)\n  caused by: {}", self.code(), source.display_detailed())
            }
            PuzzleError::Bind(e) => format!("{}\n  caused by: {}", self.code(), e.display_detailed()),
            PuzzleError::Render(e) => format!("{}\n  caused by: {}", self.code(), e.display_detailed()),
            _ => format_error_with_code_and_help(&self.to_string(), self.code(), self.help()),
        }
    }
}
