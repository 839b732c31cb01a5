//! move-grid - CLI entry point
//!
//! Loads the layout configuration, runs one edit against the active layout
//! and writes the configuration back.

mod commands;

#[cfg(test)]
mod cli_tests;

use clap::{Parser, Subcommand, ValueEnum};
use move_grid::config::xdg;
use move_grid::layout::{actions, Alignment, Selection, SpanIntent};
use move_grid::widgets::WidgetId;
use std::path::PathBuf;
use std::process::ExitCode;

/// Widget grid layout editor
#[derive(Parser)]
#[command(name = "mgrid")]
#[command(version, about = "Edit the widget grid of a start page")]
struct Cli {
    /// Configuration file [default: $XDG_CONFIG_HOME/move-grid/config.toml]
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the mgrid CLI
#[derive(Subcommand)]
enum Commands {
    /// Print the active layout
    Show,

    /// List widgets and whether they are on
    Widgets,

    /// Switch widgets on and add their rows
    Enable {
        /// Widgets to enable (time, main, quicklinks, notes, quotes, searchbar)
        #[arg(required = true)]
        widgets: Vec<WidgetId>,
    },

    /// Switch widgets off and remove their rows
    Disable {
        /// Widgets to disable
        #[arg(required = true)]
        widgets: Vec<WidgetId>,
    },

    /// Toggle a widget's span along a row or a column
    Span {
        /// Widget to span
        widget: WidgetId,
        /// Direction of the span
        #[arg(long, value_enum)]
        axis: Axis,
    },

    /// Remove every span of a widget
    Unspan {
        /// Widget to shrink back to one cell
        widget: WidgetId,
    },

    /// Set a widget's alignment (clears it when both sides are empty)
    Align {
        /// Widget to align
        widget: WidgetId,
        /// Placement of the widget box in its cell
        #[arg(long = "box", value_name = "BOX")]
        box_align: Option<String>,
        /// Alignment of the text inside the widget
        #[arg(long)]
        text: Option<String>,
    },

    /// Switch the layout template
    Select {
        /// single, double or triple
        selection: Selection,
    },

    /// Rebuild the active layout from the enabled widgets
    Reset,

    /// Manage configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Actions for the `config` subcommand.
#[derive(Subcommand)]
enum ConfigAction {
    /// Create default configuration file
    Init {
        /// Overwrite existing configuration (creates backup)
        #[arg(long)]
        force: bool,
    },
    /// Show configuration file path
    Path,
    /// Validate configuration file
    Validate,
}

/// Span direction accepted by `mgrid span`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Axis {
    /// Across the columns of the widget's row
    Row,
    /// Down the rows of the widget's column
    Column,
}

impl From<Axis> for SpanIntent {
    fn from(axis: Axis) -> Self {
        match axis {
            Axis::Row => SpanIntent::ToggleRow,
            Axis::Column => SpanIntent::ToggleColumn,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let path = cli.config.unwrap_or_else(xdg::config_path);

    match cli.command {
        Commands::Show => commands::run_show(&path),
        Commands::Widgets => commands::run_widgets(&path),
        Commands::Enable { widgets } => commands::run_edit(&path, |config| {
            let states: Vec<_> = widgets.iter().map(|id| (*id, true)).collect();
            actions::toggle_widgets(config, &states);
            Ok(())
        }),
        Commands::Disable { widgets } => commands::run_edit(&path, |config| {
            let states: Vec<_> = widgets.iter().map(|id| (*id, false)).collect();
            actions::toggle_widgets(config, &states);
            Ok(())
        }),
        Commands::Span { widget, axis } => commands::run_edit(&path, |config| {
            actions::toggle_span(config, widget, axis.into())
        }),
        Commands::Unspan { widget } => commands::run_edit(&path, |config| {
            actions::toggle_span(config, widget, SpanIntent::ForceRemove)
        }),
        Commands::Align {
            widget,
            box_align,
            text,
        } => commands::run_edit(&path, |config| {
            let alignment = Alignment::new(box_align.unwrap_or_default(), text.unwrap_or_default());
            actions::set_alignment(config, widget, alignment);
            Ok(())
        }),
        Commands::Select { selection } => commands::run_edit(&path, |config| {
            actions::select(config, selection);
            Ok(())
        }),
        Commands::Reset => commands::run_edit(&path, |config| {
            actions::reset(config);
            Ok(())
        }),
        Commands::Config { action } => match action {
            ConfigAction::Init { force } => commands::run_config_init(&path, force),
            ConfigAction::Path => commands::run_config_path(&path),
            ConfigAction::Validate => commands::run_config_validate(&path),
        },
    }
}
