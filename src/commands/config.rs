//! Config command implementations.
//!
//! Handles `mgrid config init|path|validate` against the resolved config path.

use move_grid::config::{default, ConfigLoader, LogConfig};
use move_grid::layout::{Grid, Selection};
use move_grid::logging;
use std::path::Path;
use std::process::ExitCode;

/// Writes the commented default template to `path`.
pub(crate) fn run_config_init(path: &Path, force: bool) -> ExitCode {
    logging::init(LogConfig::default().level);
    match default::create_default_config_at(path, force) {
        Ok(path) => {
            println!("Created configuration at {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Config error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Prints the resolved configuration path.
pub(crate) fn run_config_path(path: &Path) -> ExitCode {
    println!("{}", path.display());
    ExitCode::SUCCESS
}

/// Parses the file at `path` and checks every stored area string for
/// unknown labels and rows of different lengths.
///
/// Unlike the edit commands, a missing file is an error here.
pub(crate) fn run_config_validate(path: &Path) -> ExitCode {
    let config = match ConfigLoader::load_from_path(path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Config error: {e}");
            return ExitCode::FAILURE;
        }
    };
    logging::init(config.log.level);

    let invalid: Vec<Selection> = config
        .move_layout
        .layouts
        .iter()
        .filter(|(_, layout)| !Grid::parse_area(&layout.area).is_valid())
        .map(|(selection, _)| *selection)
        .collect();

    if !invalid.is_empty() {
        for selection in invalid {
            eprintln!("Config error: [move.layouts.{selection}] area is not a valid grid");
        }
        return ExitCode::FAILURE;
    }

    println!("Configuration is valid");
    println!("{config:#?}");
    ExitCode::SUCCESS
}
