//! Integration tests for crossprint.
//!
//! These tests run the whole pipeline from a TOML puzzle description through
//! grid analysis and clue binding to the rendered HTML or SVG, using the
//! fixtures in `tests/fixtures`.

use std::path::PathBuf;

use crossprint::analyzer::analyze;
use crossprint::batch::{process_source, render_batch};
use crossprint::binder::bind;
use crossprint::clues::parse_clue_lines;
use crossprint::errors::{BindError, GridError};
use crossprint::puzzle::{Puzzle, PuzzleError, PuzzleInput};
use crossprint::render::{Format, RenderOptions, Renderer};
use crossprint::word::Direction;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn load_puzzle(name: &str) -> Puzzle {
    let input = PuzzleInput::load_from_path(fixture(name)).expect("Failed to load fixture");
    Puzzle::build(&input).expect("Failed to build puzzle")
}

/// Helper to list (number, clue body or "") for one direction
fn clue_bodies(puzzle: &Puzzle, direction: Direction) -> Vec<(u32, String)> {
    puzzle
        .words(direction)
        .iter()
        .map(|b| (b.word.number, b.clue.as_ref().map(|c| c.body.clone()).unwrap_or_default()))
        .collect()
}

fn options(format: Format, first_page: Option<u32>, solution: bool) -> RenderOptions {
    RenderOptions { format, first_page, solution }
}

#[cfg(test)]
mod analysis {
    use super::*;

    #[test]
    fn test_sample_words_and_numbers() {
        let puzzle = load_puzzle("sample.toml");

        let horizontal: Vec<_> = puzzle.horizontal.iter().map(|b| (b.word.number, b.word.solution.as_str())).collect();
        let vertical: Vec<_> = puzzle.vertical.iter().map(|b| (b.word.number, b.word.solution.as_str())).collect();
        assert_eq!(horizontal, vec![(1, "sol"), (3, "mus")]);
        assert_eq!(vertical, vec![(1, "söm"), (2, "lås")]);
    }

    #[test]
    fn test_every_letter_belongs_to_a_word() {
        let analysis = analyze("SoL\nö.å\nMus").unwrap();
        for (position, cell) in analysis.grid.cells() {
            if !cell.is_letter() {
                continue;
            }
            let covered = analysis
                .horizontal
                .iter()
                .chain(&analysis.vertical)
                .any(|w| w.cells.contains(&position));
            assert!(covered, "letter at {position} is in no word");
        }
    }

    #[test]
    fn test_numbers_are_dense_and_row_major() {
        let analysis = analyze("AbC\nd.e\nFgh").unwrap();
        let mut numbered: Vec<_> = analysis.grid.cells().filter_map(|(p, c)| c.number.map(|n| (p, n))).collect();
        numbered.sort();
        let numbers: Vec<u32> = numbered.iter().map(|(_, n)| *n).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_analysis_is_repeatable() {
        let first = analyze("SoL\nö.å\nMus").unwrap();
        let second = analyze("SoL\nö.å\nMus").unwrap();
        assert_eq!(first, second);
    }
}

#[cfg(test)]
mod binding {
    use super::*;

    #[test]
    fn test_sample_binding() {
        let puzzle = load_puzzle("sample.toml");

        assert_eq!(
            clue_bodies(&puzzle, Direction::Horizontal),
            vec![(1, "Stjärna".to_string()), (3, "Gnagare".to_string())]
        );
        assert_eq!(
            clue_bodies(&puzzle, Direction::Vertical),
            vec![(1, "Kan vara sicksack".to_string()), (2, "Stänger dörren".to_string())]
        );
        assert!(puzzle.diagnostics.is_empty());
    }

    #[test]
    fn test_orphan_clue_and_unmatched_word() {
        let puzzle = load_puzzle("orphan.toml");

        assert_eq!(puzzle.diagnostics.orphans.len(), 1);
        let orphan = &puzzle.diagnostics.orphans[0];
        assert_eq!(orphan.direction, Direction::Vertical);
        assert_eq!(orphan.entry.prefix, "X");
        assert_eq!(orphan.entry.body, "Finns inte");

        assert_eq!(puzzle.diagnostics.unmatched.len(), 1);
        assert_eq!(puzzle.diagnostics.unmatched[0].number, 2);
        assert_eq!(puzzle.diagnostics.messages().len(), 2);

        // the orphan never shows up on a word
        assert!(puzzle.vertical.iter().all(|b| b.clue.as_ref().map_or(true, |c| c.prefix != "X")));
    }

    #[test]
    fn test_directions_are_bound_independently() {
        // "L" only exists among the vertical words
        let analysis = analyze("SoL\nö.å\nMus").unwrap();
        let clues = parse_clue_lines("L:Stänger dörren").unwrap();

        let horizontal = bind(Direction::Horizontal, &analysis.horizontal, &clues).unwrap();
        assert_eq!(horizontal.orphans.len(), 1);
        assert_eq!(horizontal.unmatched, vec![1, 3]);

        let vertical = bind(Direction::Vertical, &analysis.vertical, &clues).unwrap();
        assert!(vertical.orphans.is_empty());
        assert_eq!(vertical.unmatched, vec![1]);
    }

    #[test]
    fn test_prefix_ignores_case_and_diacritics() {
        let analysis = analyze("SoL\nö.å\nMus").unwrap();
        let clues = parse_clue_lines("s:Kan vara sicksack\nla:Stänger dörren").unwrap();
        let vertical = bind(Direction::Vertical, &analysis.vertical, &clues).unwrap();
        assert!(vertical.words.iter().all(|b| b.clue.is_some()));
    }

    #[test]
    fn test_ambiguous_prefix_is_fatal() {
        let input = PuzzleInput {
            title: "Tvetydig".to_string(),
            grid: "SoL\nö.å\nMus".to_string(),
            clues_horizontal: String::new(),
            clues_vertical: "Lå:Stänger dörren\nS:Båda?\nSö:Sy".to_string(),
            extra_text: String::new(),
        };
        // "S" and "Sö" both match SÖM
        let err = Puzzle::build(&input).unwrap_err();
        assert!(matches!(err, PuzzleError::Bind(BindError::AmbiguousClue { number: 1, .. })));
        assert_eq!(err.code(), "P005");
    }
}

#[cfg(test)]
mod rendering {
    use super::*;

    #[test]
    fn test_a4_page() {
        let puzzle = load_puzzle("sample.toml");
        let html = Renderer::new().unwrap().render(&puzzle, Format::A4, Some(3), false).unwrap();

        assert!(html.contains("<h1>Korsord 1</h1>"));
        assert!(html.contains(r#"<li value="1">Stjärna (3)</li>"#));
        assert!(html.contains(r#"<li value="3">Gnagare (3)</li>"#));
        assert!(html.contains(r#"<li value="2">Stänger dörren (3)</li>"#));
        assert!(html.contains("Lösning på sidan 12"));
        assert!(html.contains(r#"<div class="footer odd">3</div>"#));
    }

    #[test]
    fn test_horizontal_list_comes_first() {
        let puzzle = load_puzzle("sample.toml");
        let html = Renderer::new().unwrap().render(&puzzle, Format::A5Two, None, false).unwrap();
        let horizontal = html.find("Vågrätt").unwrap();
        let vertical = html.find("Lodrätt").unwrap();
        assert!(horizontal < vertical);
    }

    #[test]
    fn test_unmatched_word_keeps_its_slot() {
        let puzzle = load_puzzle("orphan.toml");
        let html = Renderer::new().unwrap().render(&puzzle, Format::A4, None, false).unwrap();
        assert!(html.contains(r#"<li value="2">(3)</li>"#));
        assert!(!html.contains("Finns inte"));
    }

    #[test]
    fn test_solution_round_trip() {
        // the letters drawn with --solution spell out the words of the grid
        let puzzle = load_puzzle("sample.toml");
        let svg = Renderer::new().unwrap().render(&puzzle, Format::Svg, None, true).unwrap();
        let drawn: String = svg
            .lines()
            .filter(|line| line.contains(r#"font-size="16""#))
            .filter_map(|line| line.split('>').nth(1))
            .filter_map(|text| text.split('<').next())
            .collect();
        assert_eq!(drawn, "SOLÖÅMUS");
    }

    #[test]
    fn test_blank_grid_without_solution() {
        let puzzle = load_puzzle("sample.toml");
        let svg = Renderer::new().unwrap().render(&puzzle, Format::Svg, None, false).unwrap();
        assert!(!svg.contains(">S</text>"));
        assert!(svg.contains(">1</text>"));
    }
}

#[cfg(test)]
mod batch_processing {
    use super::*;

    #[test]
    fn test_failure_does_not_stop_other_inputs() {
        let paths = vec![fixture("broken_grid.toml"), fixture("sample.toml"), fixture("orphan.toml")];
        let outcomes = render_batch(&paths, &options(Format::A4, Some(1), false)).unwrap();

        assert_eq!(outcomes.len(), 3);
        assert!(matches!(outcomes[0].result, Err(PuzzleError::Grid(GridError::NumberedCellStartsNoWord { .. }))));
        assert!(outcomes[1].is_ok());
        assert!(outcomes[2].is_ok());

        // pages are counted by input position, failed inputs included
        let second = &outcomes[1].result.as_ref().unwrap().artifact;
        assert!(second.contains(r#"<div class="footer odd">2</div>"#));
        let third = outcomes[2].result.as_ref().unwrap();
        assert!(third.artifact.contains(r#"<div class="footer odd">3</div>"#));
        assert_eq!(third.diagnostics.orphans.len(), 1);
    }

    #[test]
    fn test_outcomes_keep_input_order() {
        let paths: Vec<PathBuf> = (0..8)
            .map(|i| if i % 2 == 0 { fixture("sample.toml") } else { fixture("orphan.toml") })
            .collect();
        let outcomes = render_batch(&paths, &options(Format::Svg, None, false)).unwrap();
        let returned: Vec<_> = outcomes.iter().map(|o| o.path.clone()).collect();
        assert_eq!(returned, paths);
    }

    #[test]
    fn test_missing_file() {
        let outcomes = render_batch(&[fixture("does_not_exist.toml")], &options(Format::A4, None, false)).unwrap();
        let err = outcomes[0].result.as_ref().unwrap_err();
        assert_eq!(err.code(), "P001");
        assert!(err.display_detailed().contains("does_not_exist.toml"));
    }

    #[test]
    fn test_invalid_toml() {
        let renderer = Renderer::new().unwrap();
        let err = process_source(0, "title = ", &renderer, &options(Format::A4, None, false)).unwrap_err();
        assert_eq!(err.code(), "P002");
    }
}
