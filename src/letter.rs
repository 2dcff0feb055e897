use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

// Grid character constants
pub const BLOCKED_CHAR: char = '.';
pub const EMPTY_CHAR: char = ' ';

/// Classification of a single grid source character.
pub trait GridChar {
    fn is_blocked_marker(&self) -> bool;
    fn is_empty_marker(&self) -> bool;
    fn is_grid_letter(&self) -> bool;
    /// An uppercase letter marks the start of a numbered word.
    fn is_number_marker(&self) -> bool;
    /// The letter as stored in a cell (lower-cased).
    fn to_cell_letter(&self) -> char;
}

impl GridChar for char {
    fn is_blocked_marker(&self) -> bool {
        *self == BLOCKED_CHAR
    }
    fn is_empty_marker(&self) -> bool {
        *self == EMPTY_CHAR
    }
    fn is_grid_letter(&self) -> bool {
        self.is_alphabetic()
    }
    fn is_number_marker(&self) -> bool {
        self.is_alphabetic() && self.is_uppercase()
    }
    fn to_cell_letter(&self) -> char {
        // Multi-char lowercase mappings (e.g. 'İ') keep their first char
        self.to_lowercase().next().unwrap_or(*self)
    }
}

/// Normalize a string for clue matching.
///
/// Applies canonical decomposition (NFD), drops combining marks and lower-cases
/// what is left, so `"Öga"`, `"öga"` and `"oga"` all fold to `"oga"`.
/// Both clue prefixes and word solutions go through this exact function.
#[must_use]
pub fn fold(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
