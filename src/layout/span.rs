//! Row and column spanning.
//!
//! A widget spans when it occupies a contiguous run of cells along one row or
//! one column. Toggling a span expands the widget over the empty cells next
//! to it, stopping at the first cell owned by another widget; toggling again
//! collapses the run back to its first cell.

use serde::{Deserialize, Serialize};

use crate::layout::grid::{Cell, Grid};
use crate::widgets::WidgetId;

/// Axis along which a widget currently spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanDirection {
    /// Single cell, or not placed at all.
    None,
    /// The first two occurrences share a row.
    Rows,
    /// The first two occurrences are on different rows, i.e. the widget runs
    /// down one column.
    Columns,
}

/// What [`apply`] should do to a widget's span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpanIntent {
    /// Expand across the anchor's row, or collapse if already spanned there.
    ToggleRow,
    /// Expand down the anchor's column, or collapse if already spanned there.
    ToggleColumn,
    /// Collapse both the row and column spans.
    ForceRemove,
}

/// Classifies how `id` currently spans in `grid`.
pub fn span_direction(grid: &Grid, id: WidgetId) -> SpanDirection {
    let positions = grid.find(id);
    match positions.as_slice() {
        [(_, first), (_, second), ..] if first != second => SpanDirection::Columns,
        [_, _, ..] => SpanDirection::Rows,
        _ => SpanDirection::None,
    }
}

/// True when `id` occurs more than once in `cells`.
pub fn has_duplicate(cells: &[Cell], id: WidgetId) -> bool {
    cells.iter().filter(|cell| cell.is(id)).count() > 1
}

/// True when row `index` holds no widget of its own.
///
/// A row counts as empty when every cell is `.` or belongs to a widget that
/// spans down its column, so removing the row would only shorten those
/// vertical spans. A missing row is not empty.
pub fn is_row_empty(grid: &Grid, index: usize) -> bool {
    if index >= grid.height() {
        return false;
    }

    grid.row(index).iter().all(|cell| match cell {
        Cell::Empty => true,
        Cell::Widget(id) => span_direction(grid, *id) == SpanDirection::Columns,
        Cell::Unknown(_) => false,
    })
}

/// Applies `intent` to `id` and returns the resulting grid.
///
/// The input is left untouched. When `id` is not in the grid, or the rows
/// differ in length, the result is an unchanged copy.
pub fn apply(grid: &Grid, id: WidgetId, intent: SpanIntent) -> Grid {
    let mut result = grid.clone();

    if !grid.is_rectangular() {
        tracing::warn!("span {intent:?} skipped: rows differ in length in {grid}");
        return result;
    }

    let Some((x, y)) = grid.position(id) else {
        tracing::debug!("span {intent:?} skipped: {id} is not placed");
        return result;
    };

    let mut column = grid.column(x);
    let mut row = grid.row(y);

    match intent {
        SpanIntent::ForceRemove => {
            collapse(&mut column, id);
            collapse(&mut row, id);
        }
        SpanIntent::ToggleColumn => toggle(&mut column, y, id),
        SpanIntent::ToggleRow => toggle(&mut row, x, id),
    }

    // Both vectors still hold `id` at the anchor, so the write order is free.
    result.set_column(x, &column);
    result.set_row(y, &row);
    result
}

fn toggle(cells: &mut [Cell], anchor: usize, id: WidgetId) {
    if has_duplicate(cells, id) {
        collapse(cells, id);
    } else {
        expand(cells, anchor, id);
    }
}

/// Keeps the first occurrence of `id` and empties the rest.
fn collapse(cells: &mut [Cell], id: WidgetId) {
    let mut seen = false;
    for cell in cells.iter_mut().filter(|cell| cell.is(id)) {
        if seen {
            *cell = Cell::Empty;
        }
        seen = true;
    }
}

/// Fills empty cells on both sides of `anchor` with `id`, one step at a
/// time, until each side meets a non-empty cell or the edge.
fn expand(cells: &mut [Cell], anchor: usize, id: WidgetId) {
    let mut forward_open = true;
    let mut backward_open = true;

    for step in 1..cells.len() {
        if forward_open {
            forward_open = claim(cells, anchor.checked_add(step), id);
        }
        if backward_open {
            backward_open = claim(cells, anchor.checked_sub(step), id);
        }
        if !forward_open && !backward_open {
            break;
        }
    }
}

/// Claims `cells[index]` for `id` if empty. Returns whether expansion may
/// continue past it.
fn claim(cells: &mut [Cell], index: Option<usize>, id: WidgetId) -> bool {
    match index.and_then(|i| cells.get_mut(i)) {
        Some(cell) if cell.is_empty() => {
            *cell = Cell::Widget(id);
            true
        }
        Some(_) => false,
        // Past the edge: nothing further in this direction either.
        None => false,
    }
}
