//! Batch processing of several puzzle inputs.
//!
//! Inputs are independent: each one is loaded, analyzed, bound and rendered
//! on its own, in parallel on the rayon pool. A fatal error in one input is
//! kept in that input's outcome and never stops the others. Results come back
//! in input order, so page numbers and output order follow the command line.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::puzzle::{Diagnostics, Puzzle, PuzzleError, PuzzleInput};
use crate::render::{RenderError, RenderOptions, Renderer};

/// A successfully rendered puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPuzzle {
    pub artifact: String,
    pub diagnostics: Diagnostics,
}

#[derive(Debug)]
pub struct BatchOutcome {
    pub path: PathBuf,
    pub result: Result<RenderedPuzzle, PuzzleError>,
}

impl BatchOutcome {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Build and render one puzzle from its TOML text. `index` is the puzzle's
/// position in the batch and selects its page numbers.
///
/// # Errors
///
/// The first `PuzzleError` hit while parsing, analyzing, binding or rendering.
pub fn process_source(
    index: usize,
    source: &str,
    renderer: &Renderer,
    options: &RenderOptions,
) -> Result<RenderedPuzzle, PuzzleError> {
    let input = PuzzleInput::parse_from_str(source)?;
    render_input(index, &input, renderer, options)
}

fn render_input(
    index: usize,
    input: &PuzzleInput,
    renderer: &Renderer,
    options: &RenderOptions,
) -> Result<RenderedPuzzle, PuzzleError> {
    let puzzle = Puzzle::build(input)?;
    log::debug!("Grid of \"{}\":\n{}", puzzle.title, crate::render::text::format_grid(&puzzle.grid));

    let artifact = renderer.render(&puzzle, options.format, options.page_for(index), options.solution)?;
    Ok(RenderedPuzzle { artifact, diagnostics: puzzle.diagnostics })
}

/// Process every file in `paths`, in parallel.
///
/// # Errors
///
/// Only fails if the page templates cannot be compiled; per-input failures are
/// reported in the returned outcomes.
pub fn render_batch<P: AsRef<Path> + Sync>(
    paths: &[P],
    options: &RenderOptions,
) -> Result<Vec<BatchOutcome>, RenderError> {
    let renderer = Renderer::new()?;
    log::info!(
        "Rendering {} puzzle(s) as {} on {} thread(s)",
        paths.len(),
        options.format,
        rayon::current_num_threads()
    );

    let outcomes = paths
        .par_iter()
        .enumerate()
        .map(|(index, path)| {
            let path = path.as_ref();
            let result = PuzzleInput::load_from_path(path)
                .and_then(|input| render_input(index, &input, &renderer, options));
            match &result {
                Ok(rendered) => {
                    for message in rendered.diagnostics.messages() {
                        log::warn!("{}: {message}", path.display());
                    }
                }
                // reported once, through `failure_report`
                Err(e) => log::debug!("{}: {e}", path.display()),
            }
            BatchOutcome { path: path.to_path_buf(), result }
        })
        .collect();

    Ok(outcomes)
}

/// One detailed message per failed input, in input order.
#[must_use]
pub fn failure_report(outcomes: &[BatchOutcome]) -> Vec<String> {
    outcomes
        .iter()
        .filter_map(|outcome| {
            outcome
                .result
                .as_ref()
                .err()
                .map(|e| format!("Error in {}: {}", outcome.path.display(), e.display_detailed()))
        })
        .collect()
}
