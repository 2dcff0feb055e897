//! Clue binding: attach each word to the clue whose prefix starts it.
//!
//! A clue entry is a candidate for a word when its folded prefix is a prefix of
//! the word's folded solution (see [`crate::letter::fold`]). Binding runs one
//! direction at a time against that direction's clue list only.
//!
//! Outcomes per word and per clue:
//! - exactly one candidate: the word is bound to it,
//! - no candidate: the word is unmatched (reported, not fatal),
//! - several candidates: [`BindError::AmbiguousClue`],
//! - a clue that is a candidate for no word: orphan (reported, not fatal),
//! - a clue that is a candidate for several words: [`BindError::AmbiguousPrefix`].

use crate::clues::ClueEntry;
use crate::errors::BindError;
use crate::letter::fold;
use crate::word::{Direction, Word};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundWord {
    pub word: Word,
    pub clue: Option<ClueEntry>,
}

/// The words of one direction with their clues, plus what could not be paired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub direction: Direction,
    /// Same order as the input words.
    pub words: Vec<BoundWord>,
    /// Numbers of the words without a clue.
    pub unmatched: Vec<u32>,
    /// Clue entries that match no word.
    pub orphans: Vec<ClueEntry>,
}

/// Bind `words` of `direction` against `clues`.
///
/// # Errors
///
/// `DirectionMismatch` if a word is not of `direction`, `AmbiguousClue` when
/// several clues match one word, `AmbiguousPrefix` when one clue matches
/// several words.
pub fn bind(direction: Direction, words: &[Word], clues: &[ClueEntry]) -> Result<Binding, BindError> {
    if let Some(word) = words.iter().find(|w| w.direction != direction) {
        return Err(BindError::DirectionMismatch {
            expected: direction,
            found: word.direction,
            number: word.number,
        });
    }

    let folded: Vec<String> = words.iter().map(|w| fold(&w.solution)).collect();

    // candidates[i] = indices of the clues matching word i
    let candidates: Vec<Vec<usize>> = folded
        .iter()
        .map(|solution| {
            clues.iter().enumerate().filter(|(_, c)| c.matches(solution)).map(|(j, _)| j).collect()
        })
        .collect();

    for (word, matching) in words.iter().zip(&candidates) {
        if matching.len() > 1 {
            return Err(BindError::AmbiguousClue {
                direction,
                number: word.number,
                prefixes: matching.iter().map(|&j| clues[j].prefix.clone()).collect(),
            });
        }
    }

    let mut orphans = Vec::new();
    for (j, clue) in clues.iter().enumerate() {
        let numbers: Vec<u32> = words
            .iter()
            .zip(&candidates)
            .filter(|(_, matching)| matching.contains(&j))
            .map(|(w, _)| w.number)
            .collect();
        match numbers.len() {
            0 => {
                log::debug!(
                    "{direction} clue \"{}:{}\" (line {}) matches no word",
                    clue.prefix,
                    clue.body,
                    clue.line_number
                );
                orphans.push(clue.clone());
            }
            1 => {}
            _ => {
                return Err(BindError::AmbiguousPrefix {
                    direction,
                    prefix: clue.prefix.clone(),
                    numbers,
                });
            }
        }
    }

    let mut unmatched = Vec::new();
    let bound = words
        .iter()
        .zip(&candidates)
        .map(|(word, matching)| {
            let clue = matching.first().map(|&j| clues[j].clone());
            if clue.is_none() {
                log::debug!("{direction} word {} ({}) has no clue", word.number, word.solution.to_uppercase());
                unmatched.push(word.number);
            }
            BoundWord { word: word.clone(), clue }
        })
        .collect();

    Ok(Binding { direction, words: bound, unmatched, orphans })
}
