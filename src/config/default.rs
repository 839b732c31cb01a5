//! Default configuration template and file creation utilities.
//!
//! Provides a well-commented TOML template that matches `Config::default()`
//! and writes it to the path `mgrid config init` resolved.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::error::ConfigError;
use crate::config::xdg;

// ---------------------------------------------------------------------------
// Default TOML template
// ---------------------------------------------------------------------------

/// A well-commented TOML template with all default values.
///
/// Every value here must match `Config::default()` from `schema.rs`.
/// Sections: `[widgets]`, `[move]`, `[log]`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# move-grid configuration
#
# This file was auto-generated with default values.
# All values shown below are the built-in defaults.
#
# Location: $XDG_CONFIG_HOME/move-grid/config.toml
#
# Note: `mgrid` rewrites this file after every edit command; comments
# are not preserved.

# ==============================================================================
# Widgets
# ==============================================================================

[widgets]

# Clock and date.
time = true

# Main content block (greeting, weather).
main = true

# Quick-links grid.
quicklinks = true

# Notes have no section by default. Uncomment to make them toggleable;
# `mgrid enable notes` is ignored while this section is missing.
# [widgets.notes]
# on = false

[widgets.searchbar]
on = false

[widgets.quotes]
on = false

# ==============================================================================
# Layout
# ==============================================================================

[move]

# Active column template.
# Options: "single", "double", "triple"
#   single - one column
#   double - widgets in the first column, second column left empty
#   triple - widgets centered in the middle column
selection = "single"

# Stored layouts, one per template. A template without an entry uses its
# default grid (time, main, quicklinks, one per row).
#
# [move.layouts.double]
# area = "'time .' 'main main' 'quicklinks .'"
#
# [move.layouts.double.items]
# main = "center & left"

# ==============================================================================
# Logging
# ==============================================================================

[log]

# Logging verbosity level. The MGRID_LOG environment variable overrides it.
# Options: "error", "warn", "info", "debug", "trace"
level = "warn"
"#;

// ---------------------------------------------------------------------------
// File creation functions
// ---------------------------------------------------------------------------

/// Creates (or force-overwrites) the default config file at `path`.
///
/// - If the file exists and `force` is `false`, returns `ConfigError::AlreadyExists`.
/// - If the file exists and `force` is `true`, backs it up to `.toml.backup` first.
/// - Returns the path where the config was written.
pub fn create_default_config_at(path: &Path, force: bool) -> Result<PathBuf, ConfigError> {
    if path.exists() {
        if !force {
            return Err(ConfigError::AlreadyExists {
                path: path.to_path_buf(),
            });
        }
        // Back up existing file
        let backup_path = path.with_extension("toml.backup");
        fs::rename(path, &backup_path).map_err(|e| ConfigError::WriteError {
            path: backup_path.clone(),
            source: e,
        })?;
        tracing::info!("Backed up existing config to {}", backup_path.display());
    }

    write_default_config(path)?;
    Ok(path.to_path_buf())
}

/// Writes the default template to `path`, creating parent dirs and setting 0600 permissions.
fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    xdg::ensure_parent_dir(path).map_err(|e| ConfigError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })?;

    fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(|e| ConfigError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(|e| {
            ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            }
        })?;
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::Config;

    // -- Template validity --------------------------------------------------

    #[test]
    fn template_values_match_config_default() {
        let from_template: Config =
            toml::from_str(DEFAULT_CONFIG_TEMPLATE).expect("template should parse");
        assert_eq!(from_template, Config::default());
    }

    #[test]
    fn template_contains_all_section_headers() {
        for header in ["[widgets]", "[move]", "[log]"] {
            assert!(
                DEFAULT_CONFIG_TEMPLATE.contains(header),
                "missing {header} section"
            );
        }
    }

    #[test]
    fn template_leaves_notes_section_commented() {
        assert!(DEFAULT_CONFIG_TEMPLATE.contains("# [widgets.notes]"));
        let config: Config = toml::from_str(DEFAULT_CONFIG_TEMPLATE).expect("template should parse");
        assert!(config.widgets.notes.is_none());
    }

    #[test]
    fn template_is_commented() {
        let comment_lines = DEFAULT_CONFIG_TEMPLATE
            .lines()
            .filter(|l| l.trim_start().starts_with('#'))
            .count();
        assert!(
            comment_lines > 20,
            "expected >20 comment lines, got {comment_lines}"
        );
    }

    // -- create_default_config_at -------------------------------------------

    #[test]
    fn create_makes_missing_parent_dirs() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let path = tmp.path().join("move-grid/nested/config.toml");
        let written = create_default_config_at(&path, false).expect("should succeed");
        assert_eq!(written, path);
        let content = fs::read_to_string(&path).expect("should read");
        assert_eq!(content, DEFAULT_CONFIG_TEMPLATE);
    }

    #[test]
    fn create_without_force_returns_already_exists() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let path = tmp.path().join("config.toml");
        create_default_config_at(&path, false).expect("first call should succeed");
        let err = create_default_config_at(&path, false).expect_err("should fail");
        match err {
            ConfigError::AlreadyExists { path: p } => assert_eq!(p, path),
            other => panic!("expected AlreadyExists, got: {other:?}"),
        }
    }

    #[test]
    fn create_with_force_creates_backup() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let path = tmp.path().join("config.toml");
        fs::write(&path, "# custom content\n").expect("write custom file");

        let new_path = create_default_config_at(&path, true).expect("force should succeed");
        assert_eq!(new_path, path);

        let backup = path.with_extension("toml.backup");
        let backup_content = fs::read_to_string(&backup).expect("read backup");
        assert_eq!(backup_content, "# custom content\n");

        let content = fs::read_to_string(&path).expect("read new");
        assert_eq!(content, DEFAULT_CONFIG_TEMPLATE);
    }

    // -- Permissions --------------------------------------------------------

    #[cfg(unix)]
    #[test]
    fn file_permissions_are_0600() {
        use std::os::unix::fs::PermissionsExt;
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let path = tmp.path().join("sub/config.toml");
        create_default_config_at(&path, false).expect("should succeed");
        let mode = fs::metadata(&path).expect("metadata").permissions().mode();
        assert_eq!(mode & 0o777, 0o600, "file should be owner-only read/write");
    }
}
