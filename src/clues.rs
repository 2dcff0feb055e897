//! Clue list parsing.
//!
//! A clue list is one clue per line, `<prefix>:<clue text>`. The prefix is
//! every character before the first `:`, taken verbatim; the text after it
//! may contain further colons.

use nom::bytes::complete::take_till;
use nom::character::complete::char;
use nom::combinator::rest;
use nom::sequence::separated_pair;
use nom::{IResult, Parser};

use crate::errors::ClueError;
use crate::letter::fold;

pub const PREFIX_SEPARATOR: char = ':';

/// One `prefix:body` line of a clue list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueEntry {
    /// The prefix exactly as written.
    pub prefix: String,
    pub body: String,
    /// One-based line within its clue list.
    pub line_number: usize,
    folded_prefix: String,
}

impl ClueEntry {
    #[must_use]
    pub fn new(prefix: &str, body: &str, line_number: usize) -> Self {
        ClueEntry {
            prefix: prefix.to_string(),
            body: body.to_string(),
            line_number,
            folded_prefix: fold(prefix),
        }
    }

    /// Whether this clue's prefix starts `folded_solution`.
    ///
    /// The argument must already be passed through [`fold`]; the prefix was
    /// folded the same way when the entry was built.
    #[must_use]
    pub fn matches(&self, folded_solution: &str) -> bool {
        folded_solution.starts_with(&self.folded_prefix)
    }

    #[must_use]
    pub fn folded_prefix(&self) -> &str {
        &self.folded_prefix
    }
}

fn clue_line(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(take_till(|c: char| c == PREFIX_SEPARATOR), char(PREFIX_SEPARATOR), rest).parse(input)
}

/// Parse a clue list into entries, skipping blank lines.
///
/// # Errors
///
/// `MissingSeparator` for a line without `:`, `EmptyPrefix` for a line
/// whose prefix is empty once folded (nothing before `:`, or only
/// combining marks), and `DuplicatePrefix` when two prefixes fold to the
/// same string.
pub fn parse_clue_lines(text: &str) -> Result<Vec<ClueEntry>, ClueError> {
    let mut entries: Vec<ClueEntry> = Vec::new();

    for (idx, raw_line) in text.lines().enumerate() {
        let line_number = idx + 1;
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        let (prefix, body) = match clue_line(line) {
            Ok((_, parts)) => parts,
            Err(_) => {
                return Err(ClueError::MissingSeparator { line_number, line: line.to_string() });
            }
        };
        let entry = ClueEntry::new(prefix, body.trim(), line_number);
        // an empty folded prefix would match every word
        if entry.folded_prefix.is_empty() {
            return Err(ClueError::EmptyPrefix { line_number, line: line.to_string() });
        }
        if let Some(first) = entries.iter().find(|e| e.folded_prefix == entry.folded_prefix) {
            return Err(ClueError::DuplicatePrefix {
                prefix: entry.prefix,
                first_line: first.line_number,
                line_number,
            });
        }
        entries.push(entry);
    }

    Ok(entries)
}
