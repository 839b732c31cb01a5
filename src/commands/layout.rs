//! Layout command implementations.
//!
//! Every edit follows the same path: load the config (or defaults), run one
//! action, save, and print the new area string.

use move_grid::config::{Config, ConfigLoader};
use move_grid::layout::{Grid, LayoutError};
use move_grid::logging;
use move_grid::widgets::{enabled_widgets, widgets_in_area, WidgetId};
use std::fmt::Write as _;
use std::path::Path;
use std::process::ExitCode;

/// Loads the config at `path` and starts logging at its level.
///
/// Prints the error and returns `None` when the file cannot be loaded.
fn load(path: &Path) -> Option<Config> {
    match ConfigLoader::load_or_default(path) {
        Ok(config) => {
            logging::init(config.log.level);
            Some(config)
        }
        Err(e) => {
            eprintln!("Config error: {e}");
            None
        }
    }
}

/// Prints the active layout.
pub(crate) fn run_show(path: &Path) -> ExitCode {
    let Some(config) = load(path) else {
        return ExitCode::FAILURE;
    };
    print!("{}", render_layout(&config));
    ExitCode::SUCCESS
}

/// Prints every widget with its on/off state.
pub(crate) fn run_widgets(path: &Path) -> ExitCode {
    let Some(config) = load(path) else {
        return ExitCode::FAILURE;
    };
    print!("{}", render_widgets(&config));
    ExitCode::SUCCESS
}

/// Applies `edit` to the config at `path`, saves it and prints the new area.
pub(crate) fn run_edit<F>(path: &Path, edit: F) -> ExitCode
where
    F: FnOnce(&mut Config) -> Result<(), LayoutError>,
{
    let Some(mut config) = load(path) else {
        return ExitCode::FAILURE;
    };

    if let Err(e) = edit(&mut config) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    if let Err(e) = ConfigLoader::save_to_path(&config, path) {
        eprintln!("Config error: {e}");
        return ExitCode::FAILURE;
    }

    tracing::info!("Updated {}", path.display());
    println!("{}", config.move_layout.active_layout().area);
    ExitCode::SUCCESS
}

/// Selection, area string, the grid as a table and alignment overrides.
pub(crate) fn render_layout(config: &Config) -> String {
    let layout = config.move_layout.active_layout();
    let outcome = Grid::parse_area(&layout.area);
    let grid = outcome.grid();

    let mut out = String::new();
    let _ = writeln!(out, "selection: {}", config.move_layout.selection);
    let _ = writeln!(out, "area: {}", layout.area);
    if !outcome.is_valid() {
        let _ = writeln!(out, "warning: area is not a valid grid");
    }

    if !grid.is_empty() {
        let widths = column_widths(grid);
        out.push('\n');
        for row in grid.rows() {
            let cells: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(x, cell)| format!("{:<width$}", cell.to_string(), width = widths[x]))
                .collect();
            let _ = writeln!(out, "  {}", cells.join("  ").trim_end());
        }
    }

    if !layout.items.is_empty() {
        out.push_str("\nitems:\n");
        for (id, alignment) in &layout.items {
            let _ = writeln!(out, "  {id} = {alignment}");
        }
    }
    out
}

/// One line per widget, in priority order.
pub(crate) fn render_widgets(config: &Config) -> String {
    let enabled = enabled_widgets(&config.widgets);
    let placed = widgets_in_area(&config.move_layout.active_layout().area);

    let mut out = String::new();
    for id in WidgetId::PRIORITY {
        let state = if enabled.contains(&id) { "on" } else { "off" };
        let mut line = format!("{:<12}{state}", id.as_str());
        if id == WidgetId::Notes && config.widgets.notes.is_none() {
            line.push_str("  (no [widgets.notes] section)");
        } else if enabled.contains(&id) != placed.contains(&id) {
            line.push_str("  (layout out of date, run `mgrid reset`)");
        }
        let _ = writeln!(out, "{line}");
    }
    out
}

/// Widest label per column, ragged rows included.
fn column_widths(grid: &Grid) -> Vec<usize> {
    let mut widths = Vec::new();
    for row in grid.rows() {
        for (x, cell) in row.iter().enumerate() {
            let len = cell.to_string().len();
            if x >= widths.len() {
                widths.push(len);
            } else if len > widths[x] {
                widths[x] = len;
            }
        }
    }
    widths
}
