//! Output formatting tests for `show` and `widgets`.

use crate::commands::layout::{render_layout, render_widgets};
use move_grid::config::{Config, WidgetSwitch};
use move_grid::layout::{actions, Alignment, MoveLayout, Selection, SpanIntent};
use move_grid::widgets::WidgetId;

#[test]
fn test_show_default_layout() {
    let out = render_layout(&Config::default());
    assert_eq!(
        out,
        "selection: single\narea: 'time' 'main' 'quicklinks'\n\n  time\n  main\n  quicklinks\n"
    );
}

#[test]
fn test_show_pads_columns_and_lists_items() {
    let mut config = Config::default();
    actions::select(&mut config, Selection::Double);
    actions::toggle_span(&mut config, WidgetId::Main, SpanIntent::ToggleRow).unwrap();
    actions::set_alignment(&mut config, WidgetId::Main, Alignment::new("center", "left"));

    let out = render_layout(&config);
    assert!(out.starts_with("selection: double\n"));
    assert!(out.contains("\n  time        .\n"), "{out}");
    assert!(out.contains("\n  main        main\n"), "{out}");
    assert!(out.ends_with("items:\n  main = center & left\n"), "{out}");
}

#[test]
fn test_show_flags_unrecognized_cells() {
    let mut config = Config::default();
    config.move_layout.set_active_layout(MoveLayout {
        area: "'time clock'".to_string(),
        items: Default::default(),
    });
    let out = render_layout(&config);
    assert!(out.contains("warning: area is not a valid grid"));
}

#[test]
fn test_show_flags_ragged_rows() {
    let mut config = Config::default();
    config.move_layout.set_active_layout(MoveLayout {
        area: "'main' '. time'".to_string(),
        items: Default::default(),
    });
    let out = render_layout(&config);
    assert!(out.contains("warning: area is not a valid grid"));
    assert!(out.contains("\n  main\n  .     time\n"), "{out}");
}

#[test]
fn test_show_empty_area_has_no_table() {
    let mut config = Config::default();
    config.move_layout.set_active_layout(MoveLayout::default());
    assert_eq!(render_layout(&config), "selection: single\narea: \n");
}

#[test]
fn test_widgets_default_states() {
    let out = render_widgets(&Config::default());
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "time        on");
    assert_eq!(lines[2], "notes       off  (no [widgets.notes] section)");
    assert_eq!(lines[5], "quotes      off");
}

#[test]
fn test_widgets_flags_stale_layout() {
    let mut config = Config::default();
    config.widgets.quotes = Some(WidgetSwitch { on: true });
    let out = render_widgets(&config);
    assert!(out.contains("quotes      on  (layout out of date"), "{out}");
}
