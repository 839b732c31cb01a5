//! Platform-aware path resolution for move-grid.
//!
//! On **Linux**, follows the XDG Base Directory Specification:
//! `$XDG_CONFIG_HOME/move-grid` or `~/.config/move-grid`.
//!
//! On **macOS**, uses Apple conventions with the XDG env var as override:
//! `$XDG_CONFIG_HOME/move-grid` or `~/Library/Application Support/move-grid`.

use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "move-grid";

/// Returns the configuration directory for move-grid.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/move-grid` (if env var set, any platform)
/// 2. Platform default:
///    - Linux: `~/.config/move-grid`
///    - macOS: `~/Library/Application Support/move-grid`
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join(APP_NAME);
    }
    platform_config_dir().join(APP_NAME)
}

/// Platform-native config base directory (without XDG override).
///
/// Falls back to the current directory when no home directory can be
/// determined.
fn platform_config_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        // ~/Library/Application Support
        dirs::config_dir().unwrap_or_else(|| PathBuf::from("."))
    }
    #[cfg(not(target_os = "macos"))]
    {
        // ~/.config (XDG default on Linux)
        dirs::home_dir()
            .map(|home| home.join(".config"))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Returns the path to the main configuration file.
///
/// Resolves to `config_dir()/config.toml`.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Creates a directory and all parent directories with mode 0700.
///
/// Equivalent to `mkdir -p` with restricted permissions.
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o700))?;
    }
    Ok(())
}

/// Creates the parent directory of `file` if it has one.
pub fn ensure_parent_dir(file: &Path) -> std::io::Result<()> {
    match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => ensure_dir(parent),
        _ => Ok(()),
    }
}
