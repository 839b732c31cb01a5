//! Widget vocabulary for the movable page layout.
//!
//! The set of placeable widgets is closed: six identifiers, each appearing
//! verbatim as a cell label in area strings. [`WidgetId::PRIORITY`] is the
//! single source of truth for the order in which enabled widgets are
//! resolved and inserted into a fresh layout.
//!
//! # Example
//!
//! ```
//! use move_grid::widgets::WidgetId;
//!
//! let id: WidgetId = "quicklinks".parse().expect("known widget");
//! assert_eq!(id, WidgetId::Quicklinks);
//! assert_eq!(id.to_string(), "quicklinks");
//! assert!("clock".parse::<WidgetId>().is_err());
//! ```

pub mod resolver;

pub use resolver::{apply_toggles, enabled_widgets, widgets_in_area};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a placeable page widget.
///
/// Serialized as its lowercase label (`"time"`, `"searchbar"`, ...), both as
/// a TOML value and as a TOML table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum WidgetId {
    /// Clock and date.
    Time,
    /// Main content block (greeting, weather).
    Main,
    /// Quick-links grid.
    Quicklinks,
    /// Free-text notes.
    Notes,
    /// Quotes banner.
    Quotes,
    /// Search bar.
    Searchbar,
}

impl WidgetId {
    /// Every widget, in vocabulary order.
    pub const ALL: [WidgetId; 6] = [
        WidgetId::Time,
        WidgetId::Main,
        WidgetId::Quicklinks,
        WidgetId::Notes,
        WidgetId::Quotes,
        WidgetId::Searchbar,
    ];

    /// Resolution order for enabled widgets.
    ///
    /// `time` and `main` come first: the row insertion rules for `notes`,
    /// `searchbar`, `quicklinks` and `quotes` assume those two rows already
    /// exist when a layout is rebuilt from scratch. Reordering this changes
    /// the geometry of every reset layout.
    pub const PRIORITY: [WidgetId; 6] = [
        WidgetId::Time,
        WidgetId::Main,
        WidgetId::Notes,
        WidgetId::Searchbar,
        WidgetId::Quicklinks,
        WidgetId::Quotes,
    ];

    /// Cell label used in area strings.
    pub fn as_str(self) -> &'static str {
        match self {
            WidgetId::Time => "time",
            WidgetId::Main => "main",
            WidgetId::Quicklinks => "quicklinks",
            WidgetId::Notes => "notes",
            WidgetId::Quotes => "quotes",
            WidgetId::Searchbar => "searchbar",
        }
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for parsing a [`WidgetId`] from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWidgetIdError(pub String);

impl fmt::Display for ParseWidgetIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown widget: {}", self.0)
    }
}

impl std::error::Error for ParseWidgetIdError {}

impl FromStr for WidgetId {
    type Err = ParseWidgetIdError;

    /// Labels are matched exactly; area strings are case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WidgetId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ParseWidgetIdError(s.to_string()))
    }
}

impl TryFrom<String> for WidgetId {
    type Error = ParseWidgetIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WidgetId> for String {
    fn from(id: WidgetId) -> Self {
        id.as_str().to_string()
    }
}
