//! Config for the driver behaviors
//!
//! This module provides configuration options that are independent of the problem being driven.
//!
//! Configuration can be created programmatically using [`Configuration::new()`] or by reading
//! environment variables using [`Configuration::from_env()`].
//!
//! # Environment Variables
//!
//! The following environment variables can be used to override configuration values. All
//! values are optional, and case-insensitive. Set the value to `"true"` to enable a flag.
//!
//! - `DRIVER_LOG`: Enable tracing output (default: `false`)
//! - `DRIVER_LOG_DIR`: Directory receiving the log file. Logs go to stderr when unset
//! - `DRIVER_FAIL_ON_TRUNCATION`: Exit with an error when input lines are missing (default: `false`)
//! - `DRIVER_VERBOSE_ERRORS`: Print the full error chain on stderr before a failing exit (default: `true`)
//!
//! Standard output is never used for anything but the answer.

use std::path::PathBuf;

/// Configuration for driver behaviors.
#[derive(Debug, Clone)]
pub struct Configuration {
    pub(crate) log: bool,
    pub(crate) log_dir: Option<PathBuf>,
    pub(crate) fail_on_truncation: bool,
    pub(crate) verbose_errors: bool,
}

impl Configuration {
    /// Create a new configuration with default parameters.
    ///
    /// By default:
    /// - Logging is disabled.
    /// - Missing input lines end the run silently, with no output and a success status.
    /// - Fatal errors are described on stderr.
    pub fn new() -> Self {
        Self {
            log: false,
            log_dir: None,
            fail_on_truncation: false,
            verbose_errors: true,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// The following environment variables are recognized:
    /// - `DRIVER_LOG`: if set to `"true"`, enables logging (default: `false`)
    /// - `DRIVER_LOG_DIR`: directory of the log file (default: none, logs go to stderr)
    /// - `DRIVER_FAIL_ON_TRUNCATION`: if set to `"true"`, missing lines are an error (default: `false`)
    /// - `DRIVER_VERBOSE_ERRORS`: if set to `"true"`, fatal errors are printed (default: `true`)
    ///
    /// Any other value (including unset) will result in using the default value for each field.
    pub fn from_env() -> Self {
        fn get_env_flag(var: &str, default: bool) -> bool {
            match std::env::var(var) {
                Ok(val) => val.eq_ignore_ascii_case("true"),
                Err(_) => default,
            }
        }

        Self {
            log: get_env_flag("DRIVER_LOG", false),
            log_dir: std::env::var_os("DRIVER_LOG_DIR").map(PathBuf::from),
            fail_on_truncation: get_env_flag("DRIVER_FAIL_ON_TRUNCATION", false),
            verbose_errors: get_env_flag("DRIVER_VERBOSE_ERRORS", true),
        }
    }

    /// Enable or disable logging.
    pub fn with_log(mut self, value: bool) -> Self {
        self.log = value;
        self
    }

    /// Write logs to a timestamped file inside `dir` instead of stderr.
    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    /// Turn missing input lines into an error instead of a silent, successful exit.
    pub fn with_fail_on_truncation(mut self, value: bool) -> Self {
        self.fail_on_truncation = value;
        self
    }

    /// Enable or disable printing fatal errors on stderr.
    pub fn with_verbose_errors(mut self, value: bool) -> Self {
        self.verbose_errors = value;
        self
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}
