// Reusable library API; the CLI in main.rs is a thin driver over it
pub mod analyzer;
pub mod batch;
pub mod binder;
pub mod clues;
pub mod errors;
pub mod grid;
pub mod letter;
pub mod log;
pub mod puzzle;
pub mod render;
pub mod word;

pub use analyzer::{analyze, Analysis};
pub use binder::{bind, Binding, BoundWord};
pub use puzzle::{Puzzle, PuzzleError, PuzzleInput};
