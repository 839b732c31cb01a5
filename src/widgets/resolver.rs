//! Enabled-widget resolution.
//!
//! Bridges the on/off flags in the `[widgets]` configuration section and the
//! widgets present in an area string.

use crate::config::schema::{WidgetSwitch, WidgetsConfig};
use crate::layout::grid::{ALTERNATE_QUOTE, CANONICAL_QUOTE, EMPTY_MARKER};
use crate::widgets::WidgetId;

/// Enabled widgets in [`WidgetId::PRIORITY`] order.
///
/// A missing `notes`, `searchbar` or `quotes` sub-section counts as off.
pub fn enabled_widgets(config: &WidgetsConfig) -> Vec<WidgetId> {
    WidgetId::PRIORITY
        .into_iter()
        .filter(|id| is_enabled(config, *id))
        .collect()
}

fn is_enabled(config: &WidgetsConfig, id: WidgetId) -> bool {
    let switch_on = |switch: &Option<WidgetSwitch>| switch.as_ref().is_some_and(|s| s.on);
    match id {
        WidgetId::Time => config.time,
        WidgetId::Main => config.main,
        WidgetId::Quicklinks => config.quicklinks,
        WidgetId::Notes => switch_on(&config.notes),
        WidgetId::Searchbar => switch_on(&config.searchbar),
        WidgetId::Quotes => switch_on(&config.quotes),
    }
}

/// Applies `(widget, on)` pairs to `config`.
///
/// `quotes` and `searchbar` sections are created when missing. `notes` is
/// only updated when its section already exists; otherwise the toggle is
/// skipped.
pub fn apply_toggles(states: &[(WidgetId, bool)], mut config: WidgetsConfig) -> WidgetsConfig {
    for &(id, on) in states {
        match id {
            WidgetId::Time => config.time = on,
            WidgetId::Main => config.main = on,
            WidgetId::Quicklinks => config.quicklinks = on,
            WidgetId::Quotes => config.quotes.get_or_insert_with(WidgetSwitch::default).on = on,
            WidgetId::Searchbar => {
                config.searchbar.get_or_insert_with(WidgetSwitch::default).on = on
            }
            WidgetId::Notes => match config.notes.as_mut() {
                Some(notes) => notes.on = on,
                None => tracing::debug!("notes toggle skipped: no [widgets.notes] section"),
            },
        }
    }
    config
}

/// Widgets appearing in `area`, in first-occurrence order, without repeats.
///
/// Tokens outside the vocabulary are skipped.
pub fn widgets_in_area(area: &str) -> Vec<WidgetId> {
    let stripped = area
        .replace([CANONICAL_QUOTE, ALTERNATE_QUOTE], " ")
        .replace(EMPTY_MARKER, " ");

    let mut widgets = Vec::new();
    for id in stripped.split_whitespace().filter_map(|t| t.parse::<WidgetId>().ok()) {
        if !widgets.contains(&id) {
            widgets.push(id);
        }
    }
    widgets
}
