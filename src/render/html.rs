//! HTML page layouts, filled in with handlebars.
//!
//! Every value taken from the puzzle goes through `{{ }}` and is escaped by
//! the template engine; only the generated grid SVG is inserted raw.

use handlebars::Handlebars;
use serde::Serialize;

use super::svg::svg_grid;
use super::RenderError;
use crate::binder::BoundWord;
use crate::puzzle::Puzzle;
use crate::word::Direction;

const GENERATOR: &str = concat!(
    env!("CARGO_PKG_NAME"),
    " ",
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    ")"
);

const STYLE_PARTIAL: &str = r#"
<!-- Generated using {{generator}} -->
<link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/paper-css/0.3.0/paper.css">
<style>
@page { size: {{page_size}}; }
.grid { margin: 20px; }
.grid-container {
    text-align: center;
}
.grid-container.vertical-center {
    display: flex;
    justify-content: center;
    flex-direction: row;
    position: absolute;
    top: 0; left: 0;
    right: 0; bottom: 0;
}
li { margin-bottom: 5px; }
body {
    font-family: serif;
}

body.A4 { font-size: 12pt; }
.A4 h1 { font-size: 18pt; }
.A4 h2 { font-size: 16pt; }

body.A5 { font-size: 10pt; }
.A5 h1 { font-size: 16pt; }
.A5 h2 { font-size: 12pt; }

.footer {
    position: absolute;
    bottom: 0.5cm;
}
.footer.odd {
    right: 0.8cm;
}
.footer.even {
    left: 0.8cm;
}
/* More padding towards the middle of the book */
.sheet.odd {
    padding: 10mm;
    padding-left: 20mm;
}
.sheet.even {
    padding: 10mm;
    padding-right: 20mm;
}
.grid-container.vertical-center.odd {
   padding-left: 5mm;
}
</style>
"#;

const CLUES_PARTIAL: &str = r#"<div><h2>{{heading}}</h2><div><ol>{{#each entries}}<li value="{{number}}">{{#if text}}{{text}} {{/if}}({{length}})</li>{{/each}}</ol></div></div>"#;

const A4_TEMPLATE: &str = r#"{{> style}}
<title>{{title}}</title>
<body class="A4">
<section class="sheet padding-10mm">
    <h1>{{title}}</h1>
    <div class="grid-container">{{{grid_svg}}}</div>
    {{#with horizontal}}{{> clues}}{{/with}}
    {{#with vertical}}{{> clues}}{{/with}}
    <div>{{extra_text}}</div>
    <div class="footer odd">{{page_num}}</div>
</section>
</body>
"#;

const A5_TWO_TEMPLATE: &str = r#"{{> style}}
<title>{{title}}</title>
<body class="A5">
<section class="sheet even">
    <h1>{{title}}</h1>
    {{#with horizontal}}{{> clues}}{{/with}}
    {{#with vertical}}{{> clues}}{{/with}}
    <div>{{extra_text}}</div>
    <div class="footer even">{{page_num}}</div>
</section>
<section class="sheet odd">
    <!-- Pad down to content height -->
    <h1>&nbsp;</h1>
    <div class="grid-container odd">
        {{{grid_svg}}}
    </div>
    <div class="footer odd">{{page_num_odd}}</div>
</section>
</body>
"#;

pub const A4_NAME: &str = "a4";
pub const A5_TWO_NAME: &str = "a5two";

pub const HORIZONTAL_HEADING: &str = "Vågrätt";
pub const VERTICAL_HEADING: &str = "Lodrätt";

pub(crate) fn register_templates(registry: &mut Handlebars<'static>) -> Result<(), RenderError> {
    let templates = [
        ("style", STYLE_PARTIAL, true),
        ("clues", CLUES_PARTIAL, true),
        (A4_NAME, A4_TEMPLATE, false),
        (A5_TWO_NAME, A5_TWO_TEMPLATE, false),
    ];
    for (name, source, is_partial) in templates {
        let registered = if is_partial {
            registry.register_partial(name, source)
        } else {
            registry.register_template_string(name, source)
        };
        registered.map_err(|e| RenderError::Template { name, source: Box::new(e) })?;
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct ClueItem<'a> {
    number: u32,
    text: &'a str,
    length: usize,
}

#[derive(Debug, Serialize)]
struct ClueList<'a> {
    heading: &'static str,
    entries: Vec<ClueItem<'a>>,
}

impl<'a> ClueList<'a> {
    fn of(direction: Direction, words: &'a [BoundWord]) -> Self {
        let heading = match direction {
            Direction::Horizontal => HORIZONTAL_HEADING,
            Direction::Vertical => VERTICAL_HEADING,
        };
        let entries = words
            .iter()
            .map(|b| ClueItem {
                number: b.word.number,
                // unmatched words keep their slot, with the length only
                text: b.clue.as_ref().map_or("", |c| c.body.as_str()),
                length: b.word.len(),
            })
            .collect();
        ClueList { heading, entries }
    }
}

#[derive(Debug, Serialize)]
struct PageContext<'a> {
    generator: &'static str,
    page_size: &'static str,
    title: &'a str,
    grid_svg: String,
    horizontal: ClueList<'a>,
    vertical: ClueList<'a>,
    extra_text: &'a str,
    page_num: Option<u32>,
    page_num_odd: Option<u32>,
}

impl<'a> PageContext<'a> {
    fn new(puzzle: &'a Puzzle, page_size: &'static str, page_num: Option<u32>, solution: bool) -> Result<Self, RenderError> {
        Ok(PageContext {
            generator: GENERATOR,
            page_size,
            title: &puzzle.title,
            grid_svg: svg_grid(&puzzle.grid, solution, false)?,
            horizontal: ClueList::of(Direction::Horizontal, &puzzle.horizontal),
            vertical: ClueList::of(Direction::Vertical, &puzzle.vertical),
            extra_text: &puzzle.extra_text,
            page_num,
            page_num_odd: page_num.map(|n| n.saturating_add(1)),
        })
    }
}

/// One A4 sheet: title, grid, both clue lists, extra text and footer.
///
/// # Errors
///
/// `RenderError` if the grid or the template cannot be rendered.
pub fn render_a4(
    registry: &Handlebars<'static>,
    puzzle: &Puzzle,
    page_num: Option<u32>,
    solution: bool,
) -> Result<String, RenderError> {
    let context = PageContext::new(puzzle, "A4", page_num, solution)?;
    Ok(registry.render(A4_NAME, &context)?)
}

/// Two A5 sheets: clues on the even page `page_num`, grid on the odd page
/// `page_num + 1`.
///
/// # Errors
///
/// `RenderError` if the grid or the template cannot be rendered.
pub fn render_a5_two(
    registry: &Handlebars<'static>,
    puzzle: &Puzzle,
    page_num: Option<u32>,
    solution: bool,
) -> Result<String, RenderError> {
    let context = PageContext::new(puzzle, "A5", page_num, solution)?;
    Ok(registry.render(A5_TWO_NAME, &context)?)
}
