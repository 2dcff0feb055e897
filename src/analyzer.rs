//! Grid analysis: derive the numbered words of a grid.
//!
//! Words are found geometrically. A horizontal word starts at a letter whose
//! left neighbour is not a letter (or is the edge) and whose right neighbour
//! is a letter, and runs right while the cells hold letters. Vertical words
//! are the same, scanning down the columns.
//!
//! Numbers are not inferred from geometry. The author marks each numbered
//! cell with an uppercase letter; the analyzer walks the cells in row-major
//! order and gives each marked cell the next number, starting at 1. A cell
//! starting both a horizontal and a vertical word gets one number for both.
//!
//! Two checks keep numbering and geometry consistent:
//! - every marked cell must start at least one word,
//! - every word must start on a marked cell.
//!
//! # Example
//!
//! ```
//! use crossprint::analyzer::analyze;
//!
//! let analysis = analyze("SoL\nö.å\nMus")?;
//! let horizontal: Vec<_> = analysis.horizontal.iter().map(|w| (w.number, w.solution.as_str())).collect();
//! let vertical: Vec<_> = analysis.vertical.iter().map(|w| (w.number, w.solution.as_str())).collect();
//! assert_eq!(horizontal, vec![(1, "sol"), (3, "mus")]);
//! assert_eq!(vertical, vec![(1, "söm"), (2, "lås")]);
//! # Ok::<(), crossprint::errors::GridError>(())
//! ```

use std::collections::{HashMap, HashSet};

use crate::errors::GridError;
use crate::grid::Grid;
use crate::word::{Direction, Position, Word};

/// Result of analyzing one grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    /// The grid, with `number` set on every numbered cell.
    pub grid: Grid,
    /// Ordered by (row, column) of the first cell.
    pub horizontal: Vec<Word>,
    /// Ordered by (column, row) of the first cell.
    pub vertical: Vec<Word>,
}

impl Analysis {
    #[must_use]
    pub fn words(&self, direction: Direction) -> &[Word] {
        match direction {
            Direction::Horizontal => &self.horizontal,
            Direction::Vertical => &self.vertical,
        }
    }
}

/// Hands out start numbers for one grid. Never shared between grids.
#[derive(Debug)]
struct NumberCounter {
    next: u32,
}

impl NumberCounter {
    fn new() -> Self {
        NumberCounter { next: 1 }
    }

    fn take(&mut self) -> u32 {
        let n = self.next;
        self.next += 1;
        n
    }
}

/// Parse `grid_text` and derive its numbered words in both directions.
///
/// # Errors
///
/// Any `GridError` from [`Grid::parse`], plus `NoWords`,
/// `NumberedCellStartsNoWord` and `UnnumberedWordStart`.
pub fn analyze(grid_text: &str) -> Result<Analysis, GridError> {
    let mut grid = Grid::parse(grid_text)?;

    let horizontal_runs = find_runs(&grid, Direction::Horizontal);
    let vertical_runs = find_runs(&grid, Direction::Vertical);
    log::debug!(
        "Found {} horizontal and {} vertical letter runs",
        horizontal_runs.len(),
        vertical_runs.len()
    );

    if horizontal_runs.is_empty() && vertical_runs.is_empty() {
        return Err(GridError::NoWords);
    }

    let numbers = assign_numbers(&grid, &horizontal_runs, &vertical_runs)?;
    for (&position, &number) in &numbers {
        if let Some(cell) = grid.cell_mut(position) {
            cell.number = Some(number);
        }
    }

    let horizontal = build_words(&grid, Direction::Horizontal, horizontal_runs, &numbers)?;
    let vertical = build_words(&grid, Direction::Vertical, vertical_runs, &numbers)?;

    Ok(Analysis { grid, horizontal, vertical })
}

/// Maximal runs of two or more letters in `direction`, in reading order.
fn find_runs(grid: &Grid, direction: Direction) -> Vec<Vec<Position>> {
    let mut runs = Vec::new();

    for start in grid.reading_order(direction) {
        let continues_previous = start
            .prev(direction)
            .is_some_and(|prev| grid.is_letter(prev));
        if !grid.is_letter(start) || continues_previous || !grid.is_letter(start.next(direction)) {
            continue;
        }

        let mut run = vec![start];
        let mut position = start.next(direction);
        while grid.is_letter(position) {
            run.push(position);
            position = position.next(direction);
        }
        runs.push(run);
    }

    runs
}

/// Walk the cells row-major and number every marked cell.
fn assign_numbers(
    grid: &Grid,
    horizontal_runs: &[Vec<Position>],
    vertical_runs: &[Vec<Position>],
) -> Result<HashMap<Position, u32>, GridError> {
    let word_starts: HashSet<Position> = horizontal_runs
        .iter()
        .chain(vertical_runs)
        .map(|run| run[0])
        .collect();

    let mut counter = NumberCounter::new();
    let mut numbers = HashMap::new();

    for (position, cell) in grid.cells() {
        if !cell.starts_number {
            continue;
        }
        if !word_starts.contains(&position) {
            return Err(GridError::NumberedCellStartsNoWord {
                letter: cell.letter().map_or('?', |c| c.to_uppercase().next().unwrap_or(c)),
                position,
            });
        }
        numbers.entry(position).or_insert_with(|| counter.take());
    }

    Ok(numbers)
}

fn build_words(
    grid: &Grid,
    direction: Direction,
    runs: Vec<Vec<Position>>,
    numbers: &HashMap<Position, u32>,
) -> Result<Vec<Word>, GridError> {
    runs.into_iter()
        .map(|cells| {
            let solution: String = cells.iter().filter_map(|&p| grid.letter(p)).collect();
            let start = cells[0];
            match numbers.get(&start) {
                Some(&number) => Ok(Word { direction, number, cells, solution }),
                None => Err(GridError::UnnumberedWordStart { direction, position: start, solution }),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(words: &[Word]) -> Vec<(u32, String)> {
        words.iter().map(|w| (w.number, w.solution.clone())).collect()
    }

    #[test]
    fn test_decomposed_grid_matches_precomposed() {
        let decomposed = analyze("SoL\no\u{308}.a\u{30a}\nMus").unwrap();
        let precomposed = analyze("SoL\nö.å\nMus").unwrap();
        assert_eq!(decomposed, precomposed);
        assert_eq!(summary(&decomposed.vertical), vec![(1, "söm".to_string()), (2, "lås".to_string())]);
    }

    #[test]
    fn test_sample_grid() {
        let analysis = analyze("SoL\nö.å\nMus").unwrap();

        assert_eq!(summary(&analysis.horizontal), vec![(1, "sol".to_string()), (3, "mus".to_string())]);
        assert_eq!(summary(&analysis.vertical), vec![(1, "söm".to_string()), (2, "lås".to_string())]);

        let sol = &analysis.horizontal[0];
        assert_eq!(sol.cells, vec![Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)]);
        let las = &analysis.vertical[1];
        assert_eq!(las.cells, vec![Position::new(0, 2), Position::new(1, 2), Position::new(2, 2)]);
    }

    #[test]
    fn test_numbers_written_to_cells() {
        let analysis = analyze("SoL\nö.å\nMus").unwrap();
        let numbered: Vec<(Position, u32)> = analysis
            .grid
            .cells()
            .filter_map(|(p, c)| c.number.map(|n| (p, n)))
            .collect();
        assert_eq!(
            numbered,
            vec![(Position::new(0, 0), 1), (Position::new(0, 2), 2), (Position::new(2, 0), 3)]
        );
    }

    #[test]
    fn test_shared_number_for_both_directions() {
        let analysis = analyze("Ab\nc.").unwrap();
        assert_eq!(analysis.horizontal.len(), 1);
        assert_eq!(analysis.vertical.len(), 1);
        assert_eq!(analysis.horizontal[0].number, 1);
        assert_eq!(analysis.vertical[0].number, 1);
        assert_eq!(analysis.horizontal[0].start(), analysis.vertical[0].start());
    }

    #[test]
    fn test_single_letters_are_not_words() {
        // middle column holds "o", ".", "u": no vertical word there
        let analysis = analyze("SoL\nö.å\nMus").unwrap();
        assert!(analysis.vertical.iter().all(|w| w.start().is_some_and(|p| p.col != 1)));

        // isolated letter in both directions, beside real words
        let analysis = analyze("Ab.c\nd...").unwrap();
        assert_eq!(summary(&analysis.horizontal), vec![(1, "ab".to_string())]);
        assert_eq!(summary(&analysis.vertical), vec![(1, "ad".to_string())]);
    }

    #[test]
    fn test_words_are_contiguous_letters_of_length_two_or_more() {
        let analysis = analyze("HeJ.DU\na.OK.a\nR.Ni..").unwrap();
        assert_eq!(analysis.horizontal.len(), 4);
        assert_eq!(analysis.vertical.len(), 4);
        for word in analysis.horizontal.iter().chain(&analysis.vertical) {
            assert!(word.len() >= 2, "{word} too short");
            for pair in word.cells.windows(2) {
                assert_eq!(pair[0].next(word.direction), pair[1]);
            }
            for &p in &word.cells {
                assert!(analysis.grid.is_letter(p));
            }
        }
    }

    #[test]
    fn test_vertical_words_in_column_order() {
        // column 0 word starts lower than column 2 word, but comes first
        let analysis = analyze("..B\nA.c\nd..").unwrap();
        let starts: Vec<Position> = analysis.vertical.iter().map(|w| w.start().unwrap()).collect();
        assert_eq!(starts, vec![Position::new(1, 0), Position::new(0, 2)]);
        // row-major numbering: B (0,2) before A (1,0)
        assert_eq!(analysis.vertical[0].number, 2);
        assert_eq!(analysis.vertical[1].number, 1);
    }

    #[test]
    fn test_numbering_is_consecutive_row_major() {
        let analysis = analyze("AbC\nd.e\nFgh").unwrap();
        let mut numbered: Vec<(Position, u32)> = analysis
            .grid
            .cells()
            .filter_map(|(p, c)| c.number.map(|n| (p, n)))
            .collect();
        numbered.sort();
        let numbers: Vec<u32> = numbered.iter().map(|&(_, n)| n).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_numbered_cell_starting_no_word() {
        let err = analyze("Ab\n.C").unwrap_err();
        assert_eq!(
            err,
            GridError::NumberedCellStartsNoWord { letter: 'C', position: Position::new(1, 1) }
        );
    }

    #[test]
    fn test_numbered_cell_inside_a_word() {
        let err = analyze("aBc").unwrap_err();
        assert!(matches!(err, GridError::NumberedCellStartsNoWord { letter: 'B', .. }));
    }

    #[test]
    fn test_unnumbered_word_start() {
        let err = analyze("Ab\n..\ncd").unwrap_err();
        assert_eq!(
            err,
            GridError::UnnumberedWordStart {
                direction: Direction::Horizontal,
                position: Position::new(2, 0),
                solution: "cd".to_string(),
            }
        );
    }

    #[test]
    fn test_no_words() {
        assert_eq!(analyze("a.b\n.c.").unwrap_err(), GridError::NoWords);
    }

    #[test]
    fn test_counters_do_not_leak_between_grids() {
        let first = analyze("AbC\nd.e").unwrap();
        let second = analyze("AbC\nd.e").unwrap();
        assert_eq!(first, second);
        assert_eq!(second.horizontal[0].number, 1);
    }
}
