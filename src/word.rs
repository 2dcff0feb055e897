use std::fmt;
use std::fmt::{Display, Formatter};

/// Zero-based cell coordinate. Ordering is row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// The next cell in `direction` (no bounds check on the far side).
    #[must_use]
    pub fn next(self, direction: Direction) -> Position {
        match direction {
            Direction::Horizontal => Position::new(self.row, self.col + 1),
            Direction::Vertical => Position::new(self.row + 1, self.col),
        }
    }

    /// The previous cell in `direction`, or `None` at the grid edge.
    #[must_use]
    pub fn prev(self, direction: Direction) -> Option<Position> {
        match direction {
            Direction::Horizontal => self.col.checked_sub(1).map(|col| Position::new(self.row, col)),
            Direction::Vertical => self.row.checked_sub(1).map(|row| Position::new(row, self.col)),
        }
    }
}

/// Shown one-based, the way an author counts lines in the input file.
impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.row + 1, self.col + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Horizontal, Direction::Vertical];
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Horizontal => write!(f, "horizontal"),
            Direction::Vertical => write!(f, "vertical"),
        }
    }
}

/// A numbered word derived from the grid.
///
/// `cells` holds at least two contiguous letter positions in `direction`;
/// `solution` is their letters (lower-cased) in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub direction: Direction,
    pub number: u32,
    pub cells: Vec<Position>,
    pub solution: String,
}

impl Word {
    /// First cell, or `None` for a word without cells.
    #[must_use]
    pub fn start(&self) -> Option<Position> {
        self.cells.first().copied()
    }

    /// Number of letters (not bytes) in the word.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.number, self.direction, self.solution.to_uppercase())
    }
}
