use std::fmt;
use std::fmt::Write;

use crate::grid::{CellKind, Grid};

/// Side of one cell in SVG user units.
pub const CELL_SIDE: f64 = 20.0;
/// Printed width of one grid column when embedded in a page.
const COLUMN_WIDTH_CM: f64 = 0.9;

/// Draw the grid as SVG.
///
/// Blocked cells are black squares, letter cells white squares, empty cells
/// are left out. Numbered cells get their number in the top-left corner; the
/// solution letters are drawn only when `with_solution` is set.
///
/// A `standalone` document starts with an XML declaration; otherwise a small
/// style block fixes the printed width of the grid.
///
/// # Errors
///
/// Propagates a formatting failure from the underlying writer.
pub fn svg_grid(grid: &Grid, with_solution: bool, standalone: bool) -> Result<String, fmt::Error> {
    let mut svg = String::new();
    write_svg(&mut svg, grid, with_solution, standalone)?;
    Ok(svg)
}

fn write_svg(out: &mut String, grid: &Grid, with_solution: bool, standalone: bool) -> fmt::Result {
    let (width, height) = (grid.width() as f64, grid.height() as f64);

    if standalone {
        writeln!(out, r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#)?;
    } else {
        write!(out, "<style>.grid {{ width: {:.2}cm; }} </style>", width * COLUMN_WIDTH_CM)?;
    }
    // viewBox is in cell units; the page decides the final size
    writeln!(
        out,
        r#"<svg viewBox="0 0 {} {}" xmlns="http://www.w3.org/2000/svg" class="grid">"#,
        CELL_SIDE * width,
        CELL_SIDE * height
    )?;
    write!(out, "<defs>")?;
    writeln!(
        out,
        r##"<rect id="blocked" width="{CELL_SIDE}" height="{CELL_SIDE}" stroke-width="0.5" stroke="#000000" fill="#000000" />"##
    )?;
    writeln!(
        out,
        r##"<rect id="letter" width="{CELL_SIDE}" height="{CELL_SIDE}" stroke-width="0.5" stroke="#000000" fill="#ffffff" />"##
    )?;
    write!(out, "</defs>")?;

    for (position, cell) in grid.cells() {
        let x = position.col as f64 * CELL_SIDE;
        let y = position.row as f64 * CELL_SIDE;
        match cell.kind {
            CellKind::Empty => {}
            CellKind::Blocked => {
                writeln!(out, r##"<use href="#blocked" x="{x}" y="{y}" />"##)?;
            }
            CellKind::Letter(letter) => {
                writeln!(out, r##"<use href="#letter" x="{x}" y="{y}" />"##)?;
                if with_solution {
                    let upper: String = letter.to_uppercase().collect();
                    writeln!(
                        out,
                        r##"<text x="{}" y="{}" text-anchor="middle" font-size="16" font-family="sans-serif" color="#000000">{upper}</text>"##,
                        x + CELL_SIDE / 2.0,
                        y + 16.0
                    )?;
                }
                if let Some(number) = cell.number {
                    writeln!(
                        out,
                        r##"<text x="{}" y="{}" font-size="5" font-family="sans-serif" color="#000000">{number}</text>"##,
                        x + 1.5,
                        y + 5.5
                    )?;
                }
            }
        }
    }
    write!(out, "</svg>")
}
