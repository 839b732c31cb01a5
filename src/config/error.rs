//! Errors from reading, parsing and saving the mgrid config file.
//!
//! Every variant names the file involved, so the CLI can print the error as
//! is after a `Config error:` prefix.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read mgrid config {path}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax error, or a value the schema rejects such as an unknown
    /// `selection`. `line` and `column` are one-based, or 0 when toml gave
    /// no span.
    #[error("Invalid mgrid config at {path}:{line}:{column}: {message}")]
    ParseError {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// Only `config validate` treats a missing file as an error; edit
    /// commands start from the defaults instead.
    #[error("mgrid config not found: {path} (run `mgrid config init`)")]
    NotFound { path: PathBuf },

    #[error("mgrid config already exists: {path} (pass --force to replace it)")]
    AlreadyExists { path: PathBuf },

    /// Saving an edited layout, writing the init template or moving the old
    /// file to its `.toml.backup` failed.
    #[error("Cannot write mgrid config {path}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot encode config as TOML: {message}")]
    SerializeError { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn unknown_selection_points_at_move_table() {
        let err = ConfigError::ParseError {
            path: PathBuf::from("move-grid/config.toml"),
            line: 2,
            column: 13,
            message: "invalid selection: quad (expected single, double or triple)".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid mgrid config at move-grid/config.toml:2:13: \
             invalid selection: quad (expected single, double or triple)"
        );
    }

    #[test]
    fn parse_error_without_span_reports_zero_position() {
        let err = ConfigError::ParseError {
            path: PathBuf::from("layouts.toml"),
            line: 0,
            column: 0,
            message: "missing field `area`".to_string(),
        };
        assert!(err.to_string().contains("layouts.toml:0:0: missing field `area`"));
    }

    #[test]
    fn not_found_suggests_init() {
        let err = ConfigError::NotFound {
            path: PathBuf::from("/home/ana/.config/move-grid/config.toml"),
        };
        let msg = err.to_string();
        assert!(msg.contains("not found: /home/ana/.config/move-grid/config.toml"));
        assert!(msg.contains("mgrid config init"));
    }

    #[test]
    fn already_exists_suggests_force() {
        let err = ConfigError::AlreadyExists {
            path: PathBuf::from("move-grid/config.toml"),
        };
        let msg = err.to_string();
        assert!(msg.contains("already exists: move-grid/config.toml"));
        assert!(msg.contains("--force"));
    }

    #[test]
    fn failed_backup_names_backup_file_and_keeps_cause() {
        let err = ConfigError::WriteError {
            path: PathBuf::from("move-grid/config.toml.backup"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only dir"),
        };
        assert_eq!(
            err.to_string(),
            "Cannot write mgrid config move-grid/config.toml.backup"
        );
        let cause = err.source().expect("io error is chained");
        assert_eq!(cause.to_string(), "read-only dir");
    }

    #[test]
    fn unreadable_file_keeps_cause() {
        let err = ConfigError::ReadError {
            path: PathBuf::from("move-grid/config.toml"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "mode 000"),
        };
        assert!(err.to_string().starts_with("Cannot read mgrid config"));
        assert!(err.source().is_some());
    }

    #[test]
    fn serialize_error_carries_toml_message() {
        let err = ConfigError::SerializeError {
            message: "values must be emitted before tables".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Cannot encode config as TOML: values must be emitted before tables"
        );
    }
}
