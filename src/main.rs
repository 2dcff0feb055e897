use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crossprint::batch;
use crossprint::render::{Format, RenderOptions};

/// Render plain-text crosswords to printable HTML pages or SVG grids
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print debug information (including each analyzed grid)
    #[arg(short = 'D', long)]
    debug: bool,

    /// Page format: a4, a5two or svg
    #[arg(short, long, default_value_t = Format::A4)]
    format: Format,

    /// Number the pages starting at the given number
    #[arg(long)]
    page_num: Option<u32>,

    /// Output the solution (fill in the boxes)
    #[arg(long)]
    solution: bool,

    /// Name of the output file [default: out.html, or out.svg for svg]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of worker threads (defaults to one per CPU)
    #[arg(short, long)]
    jobs: Option<usize>,

    /// Input files (TOML crossword descriptions)
    #[arg(required = true, value_name = "CROSSWORD")]
    crosswords: Vec<PathBuf>,
}

/// Entry point of the crossprint CLI.
///
/// Delegates to [`try_main`], printing any error before exiting with code 1.
fn main() -> ExitCode {
    let cli = Cli::parse();

    let debug_enabled = cli.debug || std::env::var(crossprint::log::DEBUG_ENV_VAR).is_ok();
    crossprint::log::init_logger(debug_enabled);

    match try_main(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Core application logic.
///
/// Steps:
/// 1. Size the worker pool if `--jobs` was given.
/// 2. Load, analyze, bind and render every input in parallel.
/// 3. Write the successful artifacts, in input order, to the output file.
/// 4. Report failed inputs on stderr.
///
/// Returns the exit code: failure if any input failed, even though the others
/// were still written.
fn try_main(cli: &Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    if let Some(jobs) = cli.jobs {
        rayon::ThreadPoolBuilder::new().num_threads(jobs).build_global()?;
    }

    let options = RenderOptions {
        format: cli.format,
        first_page: cli.page_num,
        solution: cli.solution,
    };

    let outcomes = batch::render_batch(&cli.crosswords, &options)?;

    let output: String = outcomes
        .iter()
        .filter_map(|outcome| outcome.result.as_ref().ok())
        .map(|rendered| rendered.artifact.as_str())
        .collect();

    let report = batch::failure_report(&outcomes);
    for message in &report {
        eprintln!("{message}");
    }
    let failures = report.len();

    let output_path = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(options.format.default_output()));

    let rendered = outcomes.len() - failures;
    if rendered > 0 {
        std::fs::write(&output_path, output).map_err(|e| {
            std::io::Error::new(e.kind(), format!("failed to write '{}': {e}", output_path.display()))
        })?;
        log::info!("Wrote {rendered} puzzle(s) to {}", output_path.display());
    }

    if failures > 0 {
        eprintln!("✗ {failures} of {} input(s) failed", outcomes.len());
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsed_from_command_line() {
        let cli = Cli::try_parse_from(["crossprint", "--format", "a5two", "korsord.toml"]).unwrap();
        assert_eq!(cli.format, Format::A5Two);

        let cli = Cli::try_parse_from(["crossprint", "-f", "SVG", "korsord.toml"]).unwrap();
        assert_eq!(cli.format, Format::Svg);
    }

    #[test]
    fn test_format_defaults_to_a4() {
        let cli = Cli::try_parse_from(["crossprint", "korsord.toml"]).unwrap();
        assert_eq!(cli.format, Format::A4);
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["crossprint", "--format", "pdf", "korsord.toml"]).is_err());
    }
}
