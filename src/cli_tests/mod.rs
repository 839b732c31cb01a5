//! Tests for the mgrid CLI binary.
//!
//! Tests are organized by domain:
//! - `cli` - CLI argument parsing tests
//! - `render` - `show` and `widgets` output tests

mod cli;
mod render;
