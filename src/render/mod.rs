//! Output rendering: HTML pages (A4, A5 two-page) and standalone SVG grids.
//!
//! # Error Codes
//!
//! - R001: `Template` (A page template failed to compile)
//! - R002: `Render` (Template rendering failed)
//! - R003: `Format` (Writing the SVG markup failed)

pub mod html;
pub mod svg;
pub mod text;

use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use handlebars::Handlebars;

use crate::errors::format_error_with_code_and_help;
use crate::puzzle::Puzzle;

/// Page layout of the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// One A4 sheet: title, grid, clues.
    A4,
    /// Two facing A5 sheets: clues on the even page, grid on the odd page.
    A5Two,
    /// The bare grid as a standalone SVG document.
    Svg,
}

impl Format {
    /// Page numbers consumed by one puzzle.
    #[must_use]
    pub fn pages_per_puzzle(self) -> u32 {
        match self {
            Format::A4 => 1,
            Format::A5Two => 2,
            Format::Svg => 0,
        }
    }

    /// Output file name used when none is given.
    #[must_use]
    pub fn default_output(self) -> &'static str {
        match self {
            Format::Svg => "out.svg",
            Format::A4 | Format::A5Two => "out.html",
        }
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Format::A4 => write!(f, "a4"),
            Format::A5Two => write!(f, "a5two"),
            Format::Svg => write!(f, "svg"),
        }
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "a4" => Ok(Format::A4),
            "a5two" => Ok(Format::A5Two),
            "svg" => Ok(Format::Svg),
            other => Err(format!("unknown format '{other}' (expected a4, a5two or svg)")),
        }
    }
}

/// Settings shared by every puzzle of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: Format,
    /// Number printed on the first page; `None` leaves the footers blank.
    pub first_page: Option<u32>,
    /// Fill in the solution letters.
    pub solution: bool,
}

impl RenderOptions {
    /// First page number of the puzzle at `index` in the batch.
    #[must_use]
    pub fn page_for(&self, index: usize) -> Option<u32> {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.first_page
            .map(|first| first.saturating_add(index.saturating_mul(self.format.pages_per_puzzle())))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("invalid page template '{name}': {source}")]
    Template {
        name: &'static str,
        #[source]
        source: Box<handlebars::TemplateError>,
    },

    #[error("failed to render page: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("failed to write markup: {0}")]
    Format(#[from] fmt::Error),
}

impl RenderError {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            RenderError::Template { .. } => "R001",
            RenderError::Render(_) => "R002",
            RenderError::Format(_) => "R003",
        }
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            RenderError::Template { .. } => "A page template failed to compile",
            RenderError::Render(_) => "Template rendering failed",
            RenderError::Format(_) => "Writing the SVG markup failed",
        }
    }

    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            RenderError::Template { .. } => "The built-in page templates are compiled once at startup. A failure here is an internal error.",
            RenderError::Render(_) => "The page template could not be filled in with the puzzle data. This is an internal error.",
            RenderError::Format(_) => "Formatting the grid markup into memory failed. This is an internal error.",
        }
    }

    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        None
    }

    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Renders bound puzzles. Holds the compiled page templates; build it once
/// and share it between puzzles (it is `Sync`).
pub struct Renderer {
    registry: Handlebars<'static>,
}

impl Renderer {
    /// Compile the page templates.
    ///
    /// # Errors
    ///
    /// `RenderError::Template` if a built-in template does not compile.
    pub fn new() -> Result<Self, RenderError> {
        let mut registry = Handlebars::new();
        html::register_templates(&mut registry)?;
        Ok(Renderer { registry })
    }

    /// Render `puzzle` in `format`. `page_num` is the number of the first page
    /// the puzzle occupies (ignored for SVG).
    ///
    /// # Errors
    ///
    /// `RenderError::Render` or `RenderError::Format` if the markup cannot be produced.
    pub fn render(
        &self,
        puzzle: &Puzzle,
        format: Format,
        page_num: Option<u32>,
        solution: bool,
    ) -> Result<String, RenderError> {
        match format {
            Format::A4 => html::render_a4(&self.registry, puzzle, page_num, solution),
            Format::A5Two => html::render_a5_two(&self.registry, puzzle, page_num, solution),
            Format::Svg => Ok(svg::svg_grid(&puzzle.grid, solution, true)?),
        }
    }
}
