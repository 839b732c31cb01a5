//! CLI argument parsing tests.

use crate::{Axis, Cli, Commands, ConfigAction};
use clap::{CommandFactory, Parser};
use move_grid::layout::{Selection, SpanIntent};
use move_grid::widgets::WidgetId;
use std::path::PathBuf;

#[test]
fn verify_cli() {
    // Verify the CLI configuration is valid
    Cli::command().debug_assert();
}

#[test]
fn test_missing_subcommand_fails() {
    let result = Cli::try_parse_from(["mgrid"]);
    assert!(result.is_err());
}

#[test]
fn test_unknown_subcommand_fails() {
    let result = Cli::try_parse_from(["mgrid", "unknown"]);
    assert!(result.is_err());
}

#[test]
fn test_config_defaults_to_none() {
    let cli = Cli::try_parse_from(["mgrid", "show"]).unwrap();
    assert!(cli.config.is_none());
    assert!(matches!(cli.command, Commands::Show));
}

#[test]
fn test_config_flag_after_subcommand() {
    // --config is global, so it may follow the subcommand
    let cli = Cli::try_parse_from(["mgrid", "reset", "--config", "/tmp/layout.toml"]).unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("/tmp/layout.toml")));
    assert!(matches!(cli.command, Commands::Reset));
}

#[test]
fn test_enable_takes_several_widgets() {
    let cli = Cli::try_parse_from(["mgrid", "enable", "quotes", "notes"]).unwrap();
    match cli.command {
        Commands::Enable { widgets } => {
            assert_eq!(widgets, vec![WidgetId::Quotes, WidgetId::Notes]);
        }
        _ => panic!("unexpected command variant"),
    }
}

#[test]
fn test_enable_requires_a_widget() {
    let result = Cli::try_parse_from(["mgrid", "enable"]);
    assert!(result.is_err());
}

#[test]
fn test_disable_rejects_unknown_widget() {
    let result = Cli::try_parse_from(["mgrid", "disable", "clock"]);
    assert!(result.is_err());
}

#[test]
fn test_span_axis() {
    let cli = Cli::try_parse_from(["mgrid", "span", "main", "--axis", "column"]).unwrap();
    match cli.command {
        Commands::Span { widget, axis } => {
            assert_eq!(widget, WidgetId::Main);
            assert_eq!(axis, Axis::Column);
            assert_eq!(SpanIntent::from(axis), SpanIntent::ToggleColumn);
        }
        _ => panic!("unexpected command variant"),
    }
    assert_eq!(SpanIntent::from(Axis::Row), SpanIntent::ToggleRow);
}

#[test]
fn test_span_requires_axis() {
    let result = Cli::try_parse_from(["mgrid", "span", "main"]);
    assert!(result.is_err());
}

#[test]
fn test_span_rejects_unknown_axis() {
    let result = Cli::try_parse_from(["mgrid", "span", "main", "--axis", "diagonal"]);
    assert!(result.is_err());
}

#[test]
fn test_align_sides_are_optional() {
    let cli = Cli::try_parse_from(["mgrid", "align", "time"]).unwrap();
    match cli.command {
        Commands::Align {
            widget,
            box_align,
            text,
        } => {
            assert_eq!(widget, WidgetId::Time);
            assert!(box_align.is_none());
            assert!(text.is_none());
        }
        _ => panic!("unexpected command variant"),
    }
}

#[test]
fn test_align_box_and_text() {
    let cli = Cli::try_parse_from([
        "mgrid", "align", "quotes", "--box", "center", "--text", "right",
    ])
    .unwrap();
    match cli.command {
        Commands::Align {
            box_align, text, ..
        } => {
            assert_eq!(box_align.as_deref(), Some("center"));
            assert_eq!(text.as_deref(), Some("right"));
        }
        _ => panic!("unexpected command variant"),
    }
}

#[test]
fn test_select_is_case_insensitive() {
    let cli = Cli::try_parse_from(["mgrid", "select", "Triple"]).unwrap();
    match cli.command {
        Commands::Select { selection } => assert_eq!(selection, Selection::Triple),
        _ => panic!("unexpected command variant"),
    }
}

#[test]
fn test_select_rejects_unknown_template() {
    let result = Cli::try_parse_from(["mgrid", "select", "quad"]);
    assert!(result.is_err());
}

#[test]
fn test_config_init_force_flag() {
    let cli = Cli::try_parse_from(["mgrid", "config", "init", "--force"]).unwrap();
    match cli.command {
        Commands::Config {
            action: ConfigAction::Init { force },
        } => assert!(force),
        _ => panic!("unexpected command variant"),
    }
}

#[test]
fn test_config_without_action_fails() {
    let result = Cli::try_parse_from(["mgrid", "config"]);
    assert!(result.is_err());
}

#[test]
fn test_config_subcommand_help_lists_actions() {
    let cmd = Cli::command();
    let config_cmd = cmd
        .get_subcommands()
        .find(|sc| sc.get_name() == "config")
        .expect("config subcommand should exist");
    for name in ["init", "path", "validate"] {
        assert!(
            config_cmd.get_subcommands().any(|sc| sc.get_name() == name),
            "config {name} should exist"
        );
    }
}
