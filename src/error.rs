//! Error types for configuration parsing and saving.
//!
//! ## Error Categories
//!
//! - **Unknown options**: a name that is not in the catalog and was not
//!   accepted by the unknown-option callback
//! - **Bad arguments**: a known option whose value does not fit its grammar
//! - **File errors**: a config file that cannot be opened, or whose declared
//!   encoding cannot be resolved
//! - **I/O errors**: failures while writing a saved configuration
//!
//! Unknown options and bad arguments never abort a file parse. They are
//! recorded on the session and the parse carries on with the next line.
//!
//! ```rust
//! use tidy_config::Error;
//!
//! let err = Error::bad_argument("wrap");
//! assert_eq!(err.to_string(), "invalid argument for option \"wrap\"");
//! ```

use std::fmt;
use thiserror::Error;

/// Everything that can go wrong while reading or writing options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Option name not present in the catalog
    #[error("unknown option \"{name}\"")]
    UnknownOption { name: String },

    /// Value does not fit the option's grammar
    #[error("invalid argument for option \"{option}\"")]
    BadArgument { option: String },

    /// Config file could not be opened
    #[error("can't open configuration file \"{path}\": {reason}")]
    FileOpen { path: String, reason: String },

    /// IO error while writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an unknown-option error.
    ///
    /// ```rust
    /// use tidy_config::Error;
    ///
    /// let err = Error::unknown_option("foo-bar");
    /// assert!(err.to_string().contains("foo-bar"));
    /// ```
    pub fn unknown_option(name: &str) -> Self {
        Error::UnknownOption {
            name: name.to_string(),
        }
    }

    /// Creates a bad-argument error naming the option.
    pub fn bad_argument(option: &str) -> Self {
        Error::BadArgument {
            option: option.to_string(),
        }
    }

    /// Creates a file-open error.
    pub fn file_open(path: &str, reason: &str) -> Self {
        Error::FileOpen {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// True for the errors that are recorded and skipped during a file parse.
    #[must_use]
    pub fn is_option_error(&self) -> bool {
        matches!(self, Error::UnknownOption { .. } | Error::BadArgument { .. })
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::unknown_option("foo").to_string(),
            "unknown option \"foo\""
        );
        assert!(Error::file_open("/x", "missing")
            .to_string()
            .contains("can't open configuration file \"/x\""));
    }

    #[test]
    fn test_option_error_classification() {
        assert!(Error::bad_argument("wrap").is_option_error());
        assert!(!Error::io("disk full").is_option_error());
    }
}
