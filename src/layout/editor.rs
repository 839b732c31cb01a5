//! Row-level editing of area strings.
//!
//! Enabling a widget adds a row for it; disabling removes its rows. These
//! edits work on the quoted rows directly, since where a row goes depends
//! only on which rows are next to it.

use crate::layout::grid::{split_rows, CANONICAL_QUOTE};
use crate::layout::presets::Selection;
use crate::widgets::{widgets_in_area, WidgetId};

/// Inserts a row for `id` into `area`.
///
/// ```
/// use move_grid::layout::{add_widget_row, Selection};
/// use move_grid::widgets::WidgetId;
///
/// let area = add_widget_row("", WidgetId::Time, Selection::Single);
/// assert_eq!(area, "'time'");
/// let area = add_widget_row(&area, WidgetId::Main, Selection::Single);
/// assert_eq!(area, "'time' 'main'");
/// ```
pub fn add_widget_row(area: &str, id: WidgetId, selection: Selection) -> String {
    let new_row = selection.row_for(id);
    let mut rows: Vec<String> = split_rows(area, CANONICAL_QUOTE).map(str::to_string).collect();

    if rows.is_empty() {
        return quote_row(&new_row);
    }

    let index = insertion_index(&rows, id).min(rows.len());
    rows.insert(index, new_row);
    join_rows(&rows)
}

/// Removes every row holding `id`.
pub fn remove_widget_row(area: &str, id: WidgetId) -> String {
    let rows: Vec<&str> = split_rows(area, CANONICAL_QUOTE)
        .filter(|row| !row_holds(row, id))
        .collect();
    join_rows(&rows)
}

/// Brings `area` in line with `enabled`.
///
/// Rows of widgets that are no longer enabled are removed first, then rows
/// for newly enabled widgets are added in priority order.
pub fn reconcile(area: &str, enabled: &[WidgetId], selection: Selection) -> String {
    let present = widgets_in_area(area);
    let mut area = area.to_string();

    for id in present.iter().filter(|id| !enabled.contains(id)) {
        tracing::debug!("removing row of disabled widget {id}");
        area = remove_widget_row(&area, *id);
    }

    for id in WidgetId::PRIORITY
        .into_iter()
        .filter(|id| enabled.contains(id) && !present.contains(id))
    {
        tracing::debug!("adding row for enabled widget {id}");
        area = add_widget_row(&area, id, selection);
    }

    area
}

/// Area holding one row per enabled widget, built from scratch.
pub fn build_area(enabled: &[WidgetId], selection: Selection) -> String {
    reconcile("", enabled, selection)
}

/// Where a new row for `id` goes among `rows`.
fn insertion_index<S: AsRef<str>>(rows: &[S], id: WidgetId) -> usize {
    let first_is_time = rows
        .first()
        .is_some_and(|row| row_holds(row.as_ref(), WidgetId::Time));
    let last_is_quotes = rows
        .last()
        .is_some_and(|row| row_holds(row.as_ref(), WidgetId::Quotes));

    match id {
        WidgetId::Time => 0,
        WidgetId::Main if first_is_time => 1,
        WidgetId::Main => 0,
        WidgetId::Notes | WidgetId::Searchbar if rows.len() == 1 => 1,
        WidgetId::Notes | WidgetId::Searchbar => 2,
        WidgetId::Quicklinks if last_is_quotes => rows.len() - 1,
        WidgetId::Quicklinks | WidgetId::Quotes => rows.len(),
    }
}

/// Token match on a row body.
fn row_holds(row: &str, id: WidgetId) -> bool {
    row.split_whitespace().any(|token| token == id.as_str())
}

fn quote_row(row: &str) -> String {
    format!("{CANONICAL_QUOTE}{row}{CANONICAL_QUOTE}")
}

fn join_rows<S: AsRef<str>>(rows: &[S]) -> String {
    rows.iter()
        .map(|row| quote_row(row.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}
