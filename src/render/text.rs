use crate::grid::{CellKind, Grid};

/// Plain-text dump of an analyzed grid, three columns per cell.
///
/// ```text
///  1S  O 2L
///   Ö  #  Å
///  3M  U  S
/// ```
#[must_use]
pub fn format_grid(grid: &Grid) -> String {
    grid.rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| match cell.kind {
                    CellKind::Empty => "   ".to_string(),
                    CellKind::Blocked => "  #".to_string(),
                    CellKind::Letter(letter) => {
                        let upper: String = letter.to_uppercase().collect();
                        match cell.number {
                            Some(number) => format!("{number:>2}{upper}"),
                            None => format!("  {upper}"),
                        }
                    }
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
