//! Cross-module tests for the layout engine.
//!
//! Tests are organized by kind:
//! - `properties` - exhaustive checks over small grids and widget subsets
//! - `scenarios` - worked examples and config-level flows
