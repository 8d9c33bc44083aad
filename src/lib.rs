//! # tidy_config
//!
//! The configuration subsystem of an HTML tidying tool: a fixed catalog of
//! named options, a per-session value store with snapshots, a line-oriented
//! config file reader and writer, and the rules that keep related options
//! consistent.
//!
//! ## Key Features
//!
//! - **Fixed catalog**: 98 options with stable ids, value kinds, defaults and
//!   accepted spellings, see [`options`]
//! - **Forgiving parser**: unknown names and bad values are recorded and the
//!   rest of the file is still read
//! - **Snapshots**: save and restore a session's values, with declared tags
//!   following along
//! - **Minimal output**: saved files hold only the options that differ from
//!   their defaults
//!
//! ## Quick Start
//!
//! ```rust
//! use tidy_config::{Config, OptionId, TriState};
//!
//! let mut config = Config::new();
//! let warned = config.parse_str(
//!     "indent: auto\n\
//!      indent-spaces: 4\n\
//!      wrap: 0\n\
//!      new-inline-tags: foo, bar\n",
//! );
//! assert!(!warned);
//!
//! assert_eq!(config.get_auto_bool(OptionId::IndentContent), TriState::Auto);
//! assert_eq!(config.get_int(OptionId::IndentSpaces), 4);
//! assert_eq!(config.get_int(OptionId::WrapLen), u64::MAX);
//! assert_eq!(config.get_str(OptionId::InlineTags), Some("foo, bar"));
//! ```
//!
//! ### Setting Options One at a Time
//!
//! ```rust
//! use tidy_config::{Config, Error, OptionId};
//!
//! let mut config = Config::new();
//! assert!(config.set_option("output-xhtml", "yes"));
//! assert!(!config.set_option("output-xhtml", "maybe"));
//! assert_eq!(config.option_errors(), &[Error::bad_argument("output-xhtml")]);
//!
//! // Dependent options follow once the session is normalized.
//! config.adjust();
//! assert!(config.get_bool(OptionId::XmlOut));
//! ```
//!
//! ### Saving
//!
//! ```rust
//! use tidy_config::tidy_config;
//!
//! let config = tidy_config! {
//!     "newline" => "lf",
//!     "char-encoding" => "mac",
//! };
//! let text = tidy_config::to_string(&config).unwrap();
//! assert!(text.contains("input-encoding: mac\n"));
//! assert!(text.contains("output-encoding: ascii\n"));
//! ```
//!
//! ## Collaborators
//!
//! A session declares user tags into a [`TagRegistry`], resolves encoding
//! names with an [`EncodingResolver`] and reports option errors to a
//! [`Diagnostics`] sink. The defaults are [`DeclaredTags`],
//! [`BuiltinEncodings`] and [`LogDiagnostics`], which logs through the
//! `log` facade.
//!
//! ## Modules
//!
//! - [`config`]: the session and its value store
//! - [`de`]: value grammars and config file reading
//! - [`ser`]: config file writing
//! - [`adjust`]: rules between related options
//! - [`options`]: the option catalog
//! - [`format`]: the config file format

pub mod adjust;
pub mod config;
pub mod cursor;
pub mod de;
pub mod diagnostics;
pub mod encoding;
pub mod error;
pub mod format;
pub mod macros;
pub mod options;
pub mod picklist;
pub mod ser;
pub mod tags;
pub mod value;

pub use config::{Config, UnknownOptionCallback};
pub use de::{file_exists, is_css1_selector};
pub use diagnostics::{Diagnostics, LogDiagnostics};
pub use encoding::{BuiltinEncodings, Encoding, EncodingResolver};
pub use error::{Error, Result};
pub use options::{lookup_by_id, lookup_by_name, OptionDescriptor, OptionId, ValueKind};
pub use picklist::{
    AttributeCase, CustomTags, DoctypeMode, DuplicateAttrs, Newline, SortAttributes, TriState,
};
pub use ser::Serializer;
pub use tags::{DeclaredTags, TagKind, TagKinds, TagRegistry};
pub use value::{OptionValue, StringValue};

use std::io;
use std::path::Path;

/// Reads config text into a fresh session.
///
/// Option errors do not fail the call; they are available from
/// [`Config::option_errors`].
///
/// # Examples
///
/// ```rust
/// use tidy_config::{from_str, OptionId};
///
/// let config = from_str("tab-size: 4\nbogus: 1\n");
/// assert_eq!(config.get_int(OptionId::TabSize), 4);
/// assert_eq!(config.option_errors().len(), 1);
/// ```
#[must_use]
pub fn from_str(text: &str) -> Config {
    let mut config = Config::new();
    config.parse_str(text);
    config
}

/// Reads a config file into a fresh session.
///
/// # Errors
///
/// Returns [`Error::FileOpen`] if the file cannot be read.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
    let mut config = Config::new();
    config.parse_file(path)?;
    Ok(config)
}

/// Writes the options of `config` that differ from their defaults.
///
/// # Errors
///
/// Returns an error if an option holds a value its picklist has no label for.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T: TagRegistry>(config: &Config<T>) -> Result<String> {
    config.to_config_string()
}

/// Writes the options of `config` that differ from their defaults to a
/// writer, encoded with `output-encoding`.
///
/// # Examples
///
/// ```rust
/// use tidy_config::{to_writer, Config};
///
/// let mut config = Config::new();
/// config.set_option("quiet", "yes");
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &config).unwrap();
/// assert!(String::from_utf8(buffer).unwrap().starts_with("quiet: yes"));
/// ```
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn to_writer<W, T>(writer: W, config: &Config<T>) -> Result<()>
where
    W: io::Write,
    T: TagRegistry,
{
    config.save_to_writer(writer)
}
