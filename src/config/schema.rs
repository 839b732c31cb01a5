//! TOML configuration schema types for move-grid.
//!
//! All structs derive `Deserialize` and `Serialize` with sensible defaults via
//! `#[serde(default)]`, so a partial file fills the rest from defaults and
//! unknown keys are ignored.

use serde::{Deserialize, Serialize};

use crate::layout::MoveConfig;

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

/// Root configuration encompassing all sections.
///
/// Corresponds to the full TOML file structure:
/// ```toml
/// [widgets]
/// [move]
/// [log]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Which widgets are shown.
    pub widgets: WidgetsConfig,
    /// Active selection and stored layouts.
    #[serde(rename = "move")]
    pub move_layout: MoveConfig,
    /// Logging settings.
    pub log: LogConfig,
}

// ---------------------------------------------------------------------------
// Widgets
// ---------------------------------------------------------------------------

/// Widget on/off flags.
///
/// `time`, `main` and `quicklinks` are plain flags. `notes`, `searchbar` and
/// `quotes` live in their own sub-sections; a missing sub-section means the
/// widget is off. `notes` has no section by default and must be added to the
/// file before it can be toggled.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct WidgetsConfig {
    pub time: bool,
    pub main: bool,
    pub quicklinks: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<WidgetSwitch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub searchbar: Option<WidgetSwitch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quotes: Option<WidgetSwitch>,
}

impl Default for WidgetsConfig {
    fn default() -> Self {
        Self {
            time: true,
            main: true,
            quicklinks: true,
            notes: None,
            searchbar: Some(WidgetSwitch::default()),
            quotes: Some(WidgetSwitch::default()),
        }
    }
}

/// On/off sub-section of a widget (`[widgets.quotes]`, ...).
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct WidgetSwitch {
    pub on: bool,
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// The `[log]` section.
///
/// The `MGRID_LOG` environment variable takes precedence over `level`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Logging verbosity.
    pub level: LogLevel,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
        }
    }
}

/// Log verbosity levels (kebab-case in TOML).
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings (default).
    Warn,
    /// Informational messages.
    Info,
    /// Debug-level detail.
    Debug,
    /// Full trace output.
    Trace,
}

impl LogLevel {
    /// Filter directive understood by `tracing_subscriber::EnvFilter`.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
