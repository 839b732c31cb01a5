//! Built-in layout selections and stored layouts.
//!
//! Three column templates are available:
//! - **single**: one column, widgets stacked
//! - **double**: widgets in the first column, the second left as filler
//! - **triple**: widgets centered in the middle column
//!
//! Each selection keeps its own stored layout. When nothing is stored for a
//! selection, its default grid is used.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::layout::align::Alignment;
use crate::layout::grid::{Grid, EMPTY_MARKER};
use crate::widgets::WidgetId;

/// Column-count layout template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Selection {
    /// One column.
    #[default]
    Single,
    /// Two columns, the second one filler.
    Double,
    /// Three columns, widgets in the middle.
    Triple,
}

impl Selection {
    pub const ALL: [Selection; 3] = [Selection::Single, Selection::Double, Selection::Triple];

    pub fn as_str(self) -> &'static str {
        match self {
            Selection::Single => "single",
            Selection::Double => "double",
            Selection::Triple => "triple",
        }
    }

    /// Number of grid columns.
    pub fn columns(self) -> usize {
        match self {
            Selection::Single => 1,
            Selection::Double => 2,
            Selection::Triple => 3,
        }
    }

    /// Body of a new row holding `id`, padded for this template.
    pub fn row_for(self, id: WidgetId) -> String {
        match self {
            Selection::Single => id.to_string(),
            Selection::Double => format!("{id} {EMPTY_MARKER}"),
            Selection::Triple => format!("{EMPTY_MARKER} {id} {EMPTY_MARKER}"),
        }
    }

    /// Default grid: time, main and quicklinks, one per row.
    pub fn default_grid(self) -> Grid {
        let rows = [WidgetId::Time, WidgetId::Main, WidgetId::Quicklinks]
            .into_iter()
            .map(|id| format!("'{}'", self.row_for(id)))
            .collect::<Vec<_>>()
            .join(" ");
        Grid::parse(&rows)
    }

    /// Default layout: the default grid with no alignment overrides.
    pub fn default_layout(self) -> MoveLayout {
        MoveLayout {
            area: self.default_grid().to_area(),
            items: BTreeMap::new(),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for parsing a [`Selection`] from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSelectionError(pub String);

impl fmt::Display for ParseSelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid selection: {} (expected single, double or triple)", self.0)
    }
}

impl std::error::Error for ParseSelectionError {}

impl FromStr for Selection {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single" => Ok(Selection::Single),
            "double" => Ok(Selection::Double),
            "triple" => Ok(Selection::Triple),
            _ => Err(ParseSelectionError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Selection {
    type Error = ParseSelectionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Selection> for String {
    fn from(selection: Selection) -> Self {
        selection.as_str().to_string()
    }
}

/// A stored layout: where widgets sit and how they are aligned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoveLayout {
    /// Canonical area string.
    pub area: String,
    /// Alignment overrides, independent of placement.
    pub items: BTreeMap<WidgetId, Alignment>,
}

/// The `[move]` configuration section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoveConfig {
    /// Active template.
    pub selection: Selection,
    /// Stored layouts keyed by template. Missing entries fall back to
    /// [`Selection::default_layout`].
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub layouts: BTreeMap<Selection, MoveLayout>,
}

impl MoveConfig {
    /// Layout for `selection`, or for the active selection when `None`.
    pub fn layout(&self, selection: Option<Selection>) -> MoveLayout {
        let selection = selection.unwrap_or(self.selection);
        self.layouts
            .get(&selection)
            .cloned()
            .unwrap_or_else(|| selection.default_layout())
    }

    /// Layout for the active selection.
    pub fn active_layout(&self) -> MoveLayout {
        self.layout(None)
    }

    /// Stores `layout` for the active selection.
    pub fn set_active_layout(&mut self, layout: MoveLayout) {
        self.layouts.insert(self.selection, layout);
    }
}
