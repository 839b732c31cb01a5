//! Layout engine for the movable widget page.
//!
//! An area string such as `'time .' 'main main'` places widgets on a grid,
//! one quoted string per row. The engine parses it into a [`Grid`], lets
//! widgets span rows or columns, edits rows when widgets are switched on or
//! off, and writes the grid back in canonical form. [`actions`] chains these
//! steps into the operations the CLI performs on a [`Config`](crate::config::Config).

pub mod actions;
mod align;
mod editor;
pub(crate) mod grid;
mod presets;
pub mod span;

pub use align::Alignment;
pub use editor::{add_widget_row, build_area, reconcile, remove_widget_row};
pub use grid::{Cell, Grid, ParseOutcome};
pub use presets::{MoveConfig, MoveLayout, ParseSelectionError, Selection};
pub use span::{SpanDirection, SpanIntent};

use thiserror::Error;

use crate::widgets::{ParseWidgetIdError, WidgetId};

/// Errors surfaced by layout actions.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// A span was requested for a widget with no cell in the active layout.
    #[error("widget `{widget}` is not placed in the {selection} layout")]
    WidgetNotPlaced {
        widget: WidgetId,
        selection: Selection,
    },

    /// The active area has rows of different lengths, so spans cannot be
    /// computed. `mgrid reset` rebuilds it.
    #[error("the {selection} layout has rows of different lengths")]
    RaggedArea { selection: Selection },

    /// A widget name outside the vocabulary.
    #[error(transparent)]
    UnknownWidget(#[from] ParseWidgetIdError),

    /// A selection name other than single, double or triple.
    #[error(transparent)]
    UnknownSelection(#[from] ParseSelectionError),
}
