//! End-to-end layout operations over a [`Config`].
//!
//! Each action reads the active layout, runs one engine step and stores the
//! result back, so the caller only has to load and save the file.

use crate::config::Config;
use crate::layout::editor::{build_area, reconcile};
use crate::layout::grid::Grid;
use crate::layout::presets::{MoveLayout, Selection};
use crate::layout::span::{self, SpanIntent};
use crate::layout::{Alignment, LayoutError};
use crate::widgets::{apply_toggles, enabled_widgets, WidgetId};

/// Switches widgets on or off and updates the active area to match.
pub fn toggle_widgets(config: &mut Config, states: &[(WidgetId, bool)]) {
    config.widgets = apply_toggles(states, config.widgets.clone());
    reconcile_active(config);
}

/// Toggles or removes the span of `id` in the active layout.
pub fn toggle_span(config: &mut Config, id: WidgetId, intent: SpanIntent) -> Result<(), LayoutError> {
    let mut layout = config.move_layout.active_layout();
    let grid = Grid::parse(&layout.area);

    if !grid.is_rectangular() {
        return Err(LayoutError::RaggedArea {
            selection: config.move_layout.selection,
        });
    }

    if grid.position(id).is_none() {
        return Err(LayoutError::WidgetNotPlaced {
            widget: id,
            selection: config.move_layout.selection,
        });
    }

    layout.area = span::apply(&grid, id, intent).to_area();
    tracing::debug!("span {intent:?} on {id}: {}", layout.area);
    config.move_layout.set_active_layout(layout);
    Ok(())
}

/// Stores the alignment override of `id`, or clears it when `alignment` is
/// empty.
pub fn set_alignment(config: &mut Config, id: WidgetId, alignment: Alignment) {
    let mut layout = config.move_layout.active_layout();
    if alignment.is_empty() {
        layout.items.remove(&id);
    } else {
        layout.items.insert(id, alignment);
    }
    config.move_layout.set_active_layout(layout);
}

/// Makes `selection` active and brings its area in line with the enabled
/// widgets.
pub fn select(config: &mut Config, selection: Selection) {
    config.move_layout.selection = selection;
    reconcile_active(config);
}

/// Rebuilds the active layout from the enabled widgets, dropping alignment
/// overrides.
pub fn reset(config: &mut Config) {
    let selection = config.move_layout.selection;
    let enabled = enabled_widgets(&config.widgets);
    config.move_layout.set_active_layout(MoveLayout {
        area: build_area(&enabled, selection),
        items: Default::default(),
    });
}

fn reconcile_active(config: &mut Config) {
    let selection = config.move_layout.selection;
    let enabled = enabled_widgets(&config.widgets);
    let mut layout = config.move_layout.active_layout();
    layout.area = reconcile(&layout.area, &enabled, selection);
    config.move_layout.set_active_layout(layout);
}
