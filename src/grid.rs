//! Cell matrix parsed from the raw grid text.
//!
//! Each source character becomes one cell:
//! - `.` is a blocked (black) cell,
//! - a space is an empty cell outside the puzzle,
//! - a letter is a solution letter, stored lower-cased; an uppercase letter
//!   also marks the cell as the start of a numbered word.
//!
//! Rows shorter than the longest one are padded with empty cells, so the grid
//! is always rectangular.

use unicode_normalization::UnicodeNormalization;

use crate::errors::GridError;
use crate::letter::GridChar;
use crate::word::{Direction, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    Blocked,
    Letter(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub kind: CellKind,
    pub starts_number: bool,
    /// Set by the analyzer on every `starts_number` cell.
    pub number: Option<u32>,
}

impl Cell {
    pub const EMPTY: Cell = Cell { kind: CellKind::Empty, starts_number: false, number: None };

    fn from_char(c: char, position: Position) -> Result<Cell, GridError> {
        let cell = if c.is_empty_marker() {
            Cell::EMPTY
        } else if c.is_blocked_marker() {
            Cell { kind: CellKind::Blocked, starts_number: false, number: None }
        } else if c.is_grid_letter() {
            Cell {
                kind: CellKind::Letter(c.to_cell_letter()),
                starts_number: c.is_number_marker(),
                number: None,
            }
        } else {
            return Err(GridError::InvalidCharacter { ch: c, position });
        };
        Ok(cell)
    }

    #[must_use]
    pub fn letter(&self) -> Option<char> {
        match self.kind {
            CellKind::Letter(c) => Some(c),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_letter(&self) -> bool {
        matches!(self.kind, CellKind::Letter(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
    width: usize,
}

impl Grid {
    /// Parse the raw grid text into a rectangular cell matrix.
    ///
    /// The text is NFC-normalized first, so a letter written as base letter
    /// plus combining mark is one cell. Trailing blank lines are dropped,
    /// since a TOML multi-line string normally ends with a newline before
    /// the closing quotes.
    ///
    /// # Errors
    ///
    /// `GridError::Empty` when no row is left, `GridError::InvalidCharacter`
    /// for anything other than a letter, `.` or a space, and
    /// `GridError::NoLetters` when no cell holds a letter.
    pub fn parse(text: &str) -> Result<Grid, GridError> {
        let text: String = text.nfc().collect();
        let mut lines: Vec<&str> = text.lines().collect();
        while lines.last().is_some_and(|line| line.trim().is_empty()) {
            lines.pop();
        }
        if lines.is_empty() {
            return Err(GridError::Empty);
        }

        let width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);

        let mut rows = Vec::with_capacity(lines.len());
        for (row, line) in lines.iter().enumerate() {
            let mut cells = line
                .chars()
                .enumerate()
                .map(|(col, c)| Cell::from_char(c, Position::new(row, col)))
                .collect::<Result<Vec<_>, _>>()?;
            cells.resize(width, Cell::EMPTY);
            rows.push(cells);
        }

        let grid = Grid { rows, width };
        if !grid.cells().any(|(_, cell)| cell.is_letter()) {
            return Err(GridError::NoLetters);
        }
        Ok(grid)
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    #[must_use]
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.rows.get(position.row).and_then(|row| row.get(position.col))
    }

    pub(crate) fn cell_mut(&mut self, position: Position) -> Option<&mut Cell> {
        self.rows.get_mut(position.row).and_then(|row| row.get_mut(position.col))
    }

    /// Letter cell check; positions outside the grid are not letters.
    #[must_use]
    pub fn is_letter(&self, position: Position) -> bool {
        self.cell(position).is_some_and(Cell::is_letter)
    }

    /// The letter at `position`, if that cell holds one.
    #[must_use]
    pub fn letter(&self, position: Position) -> Option<char> {
        self.cell(position).and_then(Cell::letter)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, &Cell)> {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().map(move |(col, cell)| (Position::new(row, col), cell))
        })
    }

    /// Every position in reading order for `direction`:
    /// row-major for horizontal, column-major for vertical.
    #[must_use]
    pub fn reading_order(&self, direction: Direction) -> Vec<Position> {
        let (height, width) = (self.height(), self.width());
        match direction {
            Direction::Horizontal => (0..height)
                .flat_map(|row| (0..width).map(move |col| Position::new(row, col)))
                .collect(),
            Direction::Vertical => (0..width)
                .flat_map(|col| (0..height).map(move |row| Position::new(row, col)))
                .collect(),
        }
    }
}
