//! Command implementations for the mgrid CLI.
//!
//! This module contains all command handler functions, organized by domain:
//! - `config` - Configuration file management (init, path, validate)
//! - `layout` - Layout inspection and edits

pub(crate) mod config;
pub(crate) mod layout;

pub(crate) use config::*;
pub(crate) use layout::*;
