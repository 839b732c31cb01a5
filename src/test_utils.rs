//! Shared test utilities.
//!
//! Helpers that touch process environment must only be used from tests
//! marked `#[serial]`.

#![cfg(test)]

use crate::config::Config;
use crate::config::WidgetSwitch;

/// Puts env vars back to their saved values when dropped, so a failing
/// assertion inside [`with_env`] cannot leak `MGRID_LOG` or
/// `XDG_CONFIG_HOME` into the next serial test.
struct EnvRestore {
    originals: Vec<(String, Option<String>)>,
}

impl Drop for EnvRestore {
    fn drop(&mut self) {
        for (key, original) in &self.originals {
            match original {
                Some(val) => std::env::set_var(key, val),
                None => std::env::remove_var(key),
            }
        }
    }
}

/// Runs `f` with env vars temporarily set (or removed), then restores them,
/// even when `f` panics.
pub fn with_env<F: FnOnce()>(vars: &[(&str, Option<&str>)], f: F) {
    let _restore = EnvRestore {
        originals: vars
            .iter()
            .map(|(k, _)| (k.to_string(), std::env::var(k).ok()))
            .collect(),
    };

    for (k, v) in vars {
        match v {
            Some(val) => std::env::set_var(k, val),
            None => std::env::remove_var(k),
        }
    }

    f();
}

/// Default config with every widget section present and switched on.
pub fn config_all_on() -> Config {
    let mut config = Config::default();
    config.widgets.notes = Some(WidgetSwitch { on: true });
    config.widgets.searchbar = Some(WidgetSwitch { on: true });
    config.widgets.quotes = Some(WidgetSwitch { on: true });
    config
}

mod tests {
    use super::*;
    use serial_test::serial;
    use std::panic;

    #[test]
    #[serial]
    fn with_env_restores_after_panic() {
        let key = "MGRID_LOG";
        let before = std::env::var(key).ok();

        let result = panic::catch_unwind(|| {
            with_env(&[(key, Some("trace"))], || {
                assert_eq!(std::env::var(key).as_deref(), Ok("trace"));
                panic!("assertion failed inside env scope");
            });
        });

        assert!(result.is_err());
        assert_eq!(std::env::var(key).ok(), before);
    }

    #[test]
    #[serial]
    fn with_env_restores_removed_var() {
        let key = "XDG_CONFIG_HOME";
        let before = std::env::var(key).ok();
        with_env(&[(key, Some("/tmp/mgrid-outer"))], || {
            with_env(&[(key, None)], || {
                assert!(std::env::var(key).is_err());
            });
            assert_eq!(std::env::var(key).as_deref(), Ok("/tmp/mgrid-outer"));
        });
        assert_eq!(std::env::var(key).ok(), before);
    }
}
