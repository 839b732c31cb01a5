//! Move-grid library
//!
//! Layout engine for a start page whose widgets sit on a CSS-style grid.
//! Layouts are stored as area strings (`'time .' 'main main'`); this crate
//! parses them, lets widgets span rows or columns, adds and removes rows as
//! widgets are switched on and off, and keeps the result in a TOML
//! configuration file.
//!
//! # Modules
//!
//! - [`widgets`]: the widget vocabulary and enabled-widget resolution
//! - [`layout`]: grid codec, span engine, row editor and end-to-end actions
//! - [`config`]: TOML schema, loading, saving and the default template
//! - [`logging`]: `tracing` subscriber setup for the `mgrid` binary
//!
//! # Example
//!
//! ```
//! use move_grid::config::Config;
//! use move_grid::layout::{actions, Selection, SpanIntent};
//! use move_grid::widgets::WidgetId;
//!
//! let mut config = Config::default();
//! actions::select(&mut config, Selection::Double);
//! actions::toggle_span(&mut config, WidgetId::Main, SpanIntent::ToggleRow)
//!     .expect("main is placed by default");
//! assert_eq!(
//!     config.move_layout.active_layout().area,
//!     "'time .' 'main main' 'quicklinks .'"
//! );
//! ```

pub mod config;
pub mod layout;
pub mod logging;
pub mod widgets;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod tests;
