use clap::Parser;
use std::process::ExitCode;

use wordsearch::catalog::WordCatalog;
use wordsearch::errors::BuildError;
use wordsearch::grid::{Cell, Grid};
use wordsearch::presets;
use wordsearch::selection::Selection;
use wordsearch::session::{Session, SessionConfig};

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

/// Word-search validator: apply selections to a puzzle and report each result
#[derive(Parser, Debug)]
#[command(author, version, long_version = LONG_VERSION, about, long_about = None)]
struct Cli {
    /// Selections to validate in order; each is a comma-separated list of
    /// cell indices (e.g. "1,2,3") or x:y pairs (e.g. "1:0,2:0,3:0")
    selections: Vec<String>,

    /// Built-in puzzle to play, or to take the grid and words from
    #[arg(short, long, default_value = "values-12")]
    builtin: String,

    /// Preset file (one row per line); defaults to the built-in puzzle's grid
    #[arg(short, long)]
    preset: Option<String>,

    /// Target word (repeatable); defaults to the built-in puzzle's words
    #[arg(short, long = "word")]
    words: Vec<String>,

    /// Message revealed when every word has been found
    #[arg(short, long)]
    secret: Option<String>,

    /// Print the grid and target words before validating
    #[arg(short = 'g', long)]
    print_grid: bool,
}

/// Entry point of the word-search CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    let debug_enabled = std::env::var("WORDSEARCH_DEBUG").is_ok();
    wordsearch::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        if let Some(build_err) = e.downcast_ref::<BuildError>() {
            eprintln!("Error: {}", build_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Parse one selection argument into a set of cells; a cell listed twice
/// is selected once.
fn parse_selection(arg: &str, grid: &Grid) -> Result<Selection, String> {
    arg.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            if let Some((x, y)) = part.split_once(':') {
                let x: usize =
                    x.trim().parse().map_err(|e| format!("bad column in '{part}': {e}"))?;
                let y: usize = y.trim().parse().map_err(|e| format!("bad row in '{part}': {e}"))?;
                grid.index_of(Cell::new(x, y))
                    .ok_or_else(|| format!("cell {part} is outside the {0}x{0} grid", grid.size()))
            } else {
                part.parse().map_err(|e| format!("bad cell index '{part}': {e}"))
            }
        })
        .collect()
}

/// Core application logic for the CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Build the session from the preset file and words, or the built-in puzzle.
/// 3. Toggle and validate each selection, printing the outcome.
/// 4. Print progress, and the secret message if the puzzle was completed.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let default = presets::by_name(&cli.builtin).ok_or_else(|| {
        let names: Vec<&str> = presets::ALL.iter().map(|p| p.name).collect();
        format!("unknown built-in puzzle '{}' (available: {})", cli.builtin, names.join(", "))
    })?;

    let grid = match &cli.preset {
        Some(path) => Grid::load_from_path(path)?,
        None => Grid::from_rows(default.rows)?,
    };
    let catalog = if cli.words.is_empty() {
        WordCatalog::new(default.words)?
    } else {
        WordCatalog::new(cli.words.as_slice())?
    };
    let secret_message = cli.secret.clone().or_else(|| {
        (cli.preset.is_none() && cli.words.is_empty()).then(|| default.secret_message.to_string())
    });
    let config = SessionConfig { secret_message, ..SessionConfig::default() };
    let mut session = Session::from_parts(grid, catalog, config);

    if cli.print_grid {
        print!("{}", session.grid());
        let words: Vec<&str> = session.catalog().iter().map(|w| w.display.as_str()).collect();
        println!("Words: {}", words.join(", "));
    }

    for arg in &cli.selections {
        let cells = parse_selection(arg, session.grid())?;
        for idx in cells.iter() {
            session.toggle_cell(idx)?;
        }
        let report = session.validate();
        println!("{arg}: {} ({})", report.outcome.message(), report.outcome.kind());
        if report.completed {
            if let Some(secret) = &report.secret_message {
                println!("Secret message: {secret}");
            }
        }
    }

    let found: Vec<&str> = session.found_words().map(|w| w.display.as_str()).collect();
    eprintln!("{} [{}]", session.progress(), found.join(", "));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selection_indices_and_pairs() {
        let grid = Grid::from_rows(presets::VALUES_12.rows).unwrap();
        assert_eq!(parse_selection("1,2,3", &grid), Ok([1, 2, 3].into_iter().collect()));
        assert_eq!(parse_selection("1:0, 2:0,3:1", &grid), Ok([1, 2, 15].into_iter().collect()));
        assert!(parse_selection("12:0", &grid).is_err());
        assert!(parse_selection("a,b", &grid).is_err());
    }

    #[test]
    fn test_parse_selection_repeated_cell_counts_once() {
        let grid = Grid::from_rows(presets::VALUES_12.rows).unwrap();
        let selection = parse_selection("1,2,1,1:0", &grid).unwrap();
        assert_eq!(selection.iter().collect::<Vec<_>>(), vec![1, 2]);

        let mut session = presets::VALUES_12.session().unwrap();
        for idx in parse_selection("1,2,3,4,5,6,7,3", session.grid()).unwrap().iter() {
            session.toggle_cell(idx).unwrap();
        }
        assert_eq!(session.validate().outcome.word().map(|w| w.plain.as_str()), Some("RESPETO"));
    }
}
