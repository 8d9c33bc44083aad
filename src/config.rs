//! The per-session value store.
//!
//! A [`Config`] owns one [`OptionValue`] per catalog entry (`values`), a
//! parallel `snapshot` written only by [`Config::take_snapshot`], and the
//! set of tag kinds that have user declarations. It also holds the
//! collaborators the options drive: the tag registry, the encoding resolver
//! and the diagnostics sink.
//!
//! ```rust
//! use tidy_config::{Config, OptionId};
//!
//! let mut config = Config::new();
//! assert_eq!(config.get_int(OptionId::WrapLen), 68);
//!
//! config.take_snapshot();
//! config.set_int(OptionId::WrapLen, 100);
//! assert!(config.diff_against_snapshot());
//!
//! config.restore_from_snapshot();
//! assert_eq!(config.get_int(OptionId::WrapLen), 68);
//! ```

use crate::diagnostics::{Diagnostics, LogDiagnostics};
use crate::encoding::{BuiltinEncodings, Encoding, EncodingResolver};
use crate::error::Error;
use crate::options::{options, OptionId, ValueKind, OPTION_DEFS};
use crate::picklist::{DoctypeMode, Newline, TriState};
use crate::tags::{DeclaredTags, TagKind, TagKinds, TagRegistry};
use crate::value::{OptionValue, StringValue};
use indexmap::IndexMap;
use log::debug;
use std::fmt;

/// Handler for option names missing from the catalog. It receives the name
/// and the value text and returns whether it accepted them.
pub type UnknownOptionCallback = Box<dyn FnMut(&str, &str) -> bool>;

/// Tag-list options and the kind each one declares.
pub(crate) const TAG_LIST_OPTIONS: [(OptionId, TagKind); 4] = [
    (OptionId::InlineTags, TagKind::Inline),
    (OptionId::BlockTags, TagKind::Block),
    (OptionId::EmptyTags, TagKind::Empty),
    (OptionId::PreTags, TagKind::Pre),
];

/// One session's configuration.
pub struct Config<T: TagRegistry = DeclaredTags> {
    values: Vec<OptionValue>,
    snapshot: Vec<OptionValue>,
    defined_tags: TagKinds,
    pub(crate) tags: T,
    pub(crate) encodings: Box<dyn EncodingResolver>,
    pub(crate) diagnostics: Box<dyn Diagnostics>,
    pub(crate) unknown_option: Option<UnknownOptionCallback>,
    errors: Vec<Error>,
}

impl Config<DeclaredTags> {
    /// Session with every option at its default and an empty tag table.
    #[must_use]
    pub fn new() -> Self {
        Self::with_tag_registry(DeclaredTags::new())
    }
}

impl Default for Config<DeclaredTags> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TagRegistry> Config<T> {
    /// Session declaring user tags into `tags`.
    pub fn with_tag_registry(tags: T) -> Self {
        let values: Vec<OptionValue> = OPTION_DEFS.iter().map(OptionValue::default_for).collect();
        let mut config = Config {
            snapshot: values.clone(),
            values,
            defined_tags: TagKinds::empty(),
            tags,
            encodings: Box::new(BuiltinEncodings),
            diagnostics: Box::new(LogDiagnostics),
            unknown_option: None,
            errors: Vec::new(),
        };
        config.tags.clear_all_tags();
        config
    }

    /// Replaces the encoding-name resolver.
    #[must_use]
    pub fn with_encoding_resolver<R>(mut self, resolver: R) -> Self
    where
        R: EncodingResolver + 'static,
    {
        self.encodings = Box::new(resolver);
        self
    }

    /// Replaces the diagnostics sink.
    #[must_use]
    pub fn with_diagnostics<D>(mut self, diagnostics: D) -> Self
    where
        D: Diagnostics + 'static,
    {
        self.diagnostics = Box::new(diagnostics);
        self
    }

    /// Installs a handler for names that are not in the catalog.
    pub fn set_unknown_option_callback<F>(&mut self, callback: F)
    where
        F: FnMut(&str, &str) -> bool + 'static,
    {
        self.unknown_option = Some(Box::new(callback));
    }

    pub fn tags(&self) -> &T {
        &self.tags
    }

    pub fn tags_mut(&mut self) -> &mut T {
        &mut self.tags
    }

    /// Tag kinds that received user declarations.
    pub fn defined_tags(&self) -> TagKinds {
        self.defined_tags
    }

    pub(crate) fn mark_defined(&mut self, kind: TagKind) {
        self.defined_tags.insert(kind);
    }

    /// Option errors recorded so far, oldest first.
    pub fn option_errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn clear_option_errors(&mut self) {
        self.errors.clear();
    }

    pub(crate) fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub(crate) fn report(&mut self, err: Error) {
        match &err {
            Error::UnknownOption { name } => self.diagnostics.report_unknown_option(name),
            Error::BadArgument { option } => self.diagnostics.report_bad_argument(option),
            Error::FileOpen { path, .. } => self.diagnostics.report_file_open_failure(path),
            _ => {}
        }
        self.errors.push(err);
    }

    // Accessors

    /// Current value of an option.
    pub fn value(&self, id: OptionId) -> &OptionValue {
        &self.values[id.index()]
    }

    /// Value recorded by the last snapshot.
    pub fn snapshot_value(&self, id: OptionId) -> &OptionValue {
        &self.snapshot[id.index()]
    }

    /// Integer or boolean value as a word; string options read as 0.
    pub fn get_int(&self, id: OptionId) -> u64 {
        self.value(id).as_word().unwrap_or(0)
    }

    pub fn get_bool(&self, id: OptionId) -> bool {
        self.value(id).as_bool().unwrap_or(false)
    }

    /// Value of a yes/no/auto option.
    pub fn get_auto_bool(&self, id: OptionId) -> TriState {
        TriState::from_word(self.get_int(id)).unwrap_or(TriState::No)
    }

    pub fn get_str(&self, id: OptionId) -> Option<&str> {
        self.value(id).as_str()
    }

    /// Value of one of the encoding options.
    pub fn get_encoding(&self, id: OptionId) -> Option<Encoding> {
        Encoding::from_word(self.get_int(id))
    }

    pub fn get_newline(&self) -> Newline {
        Newline::from_word(self.get_int(OptionId::Newline)).unwrap_or(Newline::PLATFORM)
    }

    pub fn get_doctype_mode(&self) -> DoctypeMode {
        DoctypeMode::from_word(self.get_int(OptionId::DoctypeMode)).unwrap_or(DoctypeMode::Auto)
    }

    // Setters

    /// Stores an integer. Fails when the option is not an integer option.
    pub fn set_int(&mut self, id: OptionId, value: u64) -> bool {
        let opt = id.descriptor();
        if opt.kind != ValueKind::Integer {
            debug!("{} is not an integer option", opt.name);
            return false;
        }
        self.values[id.index()] = OptionValue::Integer(value);
        true
    }

    /// Stores a boolean. Fails when the option is not a boolean option.
    pub fn set_bool(&mut self, id: OptionId, value: bool) -> bool {
        let opt = id.descriptor();
        if opt.kind != ValueKind::Boolean {
            debug!("{} is not a boolean option", opt.name);
            return false;
        }
        self.values[id.index()] = OptionValue::Boolean(value);
        true
    }

    /// Stores a copy of `text`. Empty text leaves the slot empty rather than
    /// holding an empty string.
    pub fn set_string(&mut self, id: OptionId, text: &str) -> bool {
        let opt = id.descriptor();
        if opt.kind != ValueKind::String {
            debug!("{} is not a string option", opt.name);
            return false;
        }
        self.values[id.index()] = OptionValue::String(StringValue::from_text(text));
        true
    }

    /// Puts an option back to its static default. The placeholder id fails.
    pub fn reset_to_default(&mut self, id: OptionId) -> bool {
        if id == OptionId::Unknown {
            return false;
        }
        self.values[id.index()] = OptionValue::default_for(id.descriptor());
        true
    }

    /// Puts every option back to its default and drops all user tags.
    pub fn reset_all_to_default(&mut self) {
        for opt in OPTION_DEFS.iter() {
            self.values[opt.id.index()] = OptionValue::default_for(opt);
        }
        self.defined_tags.clear();
        self.tags.clear_all_tags();
        debug!("configuration reset to defaults");
    }

    // Snapshots

    /// Normalizes the current values, then records them as the snapshot.
    pub fn take_snapshot(&mut self) {
        self.adjust();
        self.snapshot.clone_from(&self.values);
    }

    /// Restores the values recorded by [`Config::take_snapshot`].
    ///
    /// Tag-list options whose text differs are re-declared so the tag
    /// registry, which is not part of the snapshot, follows the values.
    pub fn restore_from_snapshot(&mut self) {
        let changed = changed_tag_kinds(&self.values, &self.snapshot);
        self.values.clone_from(&self.snapshot);
        self.reparse_tag_decls(changed);
    }

    /// Copies every value from `other`.
    ///
    /// The previous values become this session's snapshot, tag lists that
    /// changed are re-declared, and the result is normalized.
    pub fn copy_from(&mut self, other: &Config<T>) {
        let changed = changed_tag_kinds(&self.values, &other.values);
        self.take_snapshot();
        self.values.clone_from(&other.values);
        self.reparse_tag_decls(changed);
        self.adjust();
    }

    /// True when any option's value differs from the snapshot.
    pub fn diff_against_snapshot(&self) -> bool {
        self.values
            .iter()
            .zip(&self.snapshot)
            .any(|(cur, snap)| !cur.same_as(snap))
    }

    /// True when any option no longer holds its static default.
    pub fn diff_against_default(&self) -> bool {
        options().any(|opt| !self.values[opt.id.index()].is_default_for(opt))
    }

    /// Every option with a value grammar and its current value, in catalog
    /// order. The map serializes with serde for hosts that export settings.
    pub fn resolved_values(&self) -> IndexMap<&'static str, &OptionValue> {
        options()
            .filter(|opt| opt.is_settable())
            .map(|opt| (opt.name, &self.values[opt.id.index()]))
            .collect()
    }

    /// True when the option still holds its static default.
    pub fn is_default(&self, id: OptionId) -> bool {
        self.value(id).is_default_for(id.descriptor())
    }

    fn reparse_tag_decls(&mut self, changed: TagKinds) {
        for (id, kind) in TAG_LIST_OPTIONS {
            if !changed.contains(kind) {
                continue;
            }
            self.tags.clear_tags_of_kind(kind);
            if let Some(text) = self.get_str(id).map(str::to_owned) {
                debug!("re-declaring {} tags from {}", kind, id.name());
                self.parse_value(id, &text);
            }
        }
    }
}

fn changed_tag_kinds(current: &[OptionValue], new: &[OptionValue]) -> TagKinds {
    TAG_LIST_OPTIONS
        .iter()
        .filter(|(id, _)| !current[id.index()].same_as(&new[id.index()]))
        .map(|(_, kind)| *kind)
        .collect()
}

impl<T: TagRegistry + fmt::Debug> fmt::Debug for Config<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("values", &self.values)
            .field("defined_tags", &self.defined_tags)
            .field("tags", &self.tags)
            .field("errors", &self.errors)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_holds_defaults() {
        let config = Config::new();
        assert!(!config.diff_against_default());
        assert_eq!(config.get_int(OptionId::IndentSpaces), 2);
        assert!(config.get_bool(OptionId::Mark));
        assert_eq!(config.get_auto_bool(OptionId::MergeDivs), TriState::Auto);
        assert_eq!(config.get_encoding(OptionId::CharEncoding), Some(Encoding::Utf8));
        assert_eq!(config.get_doctype_mode(), DoctypeMode::Auto);
        assert_eq!(config.get_newline(), Newline::PLATFORM);
    }

    #[test]
    fn test_set_string_empty_stores_null() {
        let mut config = Config::new();
        assert!(config.set_string(OptionId::AltText, "logo"));
        assert_eq!(config.get_str(OptionId::AltText), Some("logo"));
        assert!(config.set_string(OptionId::AltText, ""));
        assert_eq!(
            config.value(OptionId::AltText),
            &OptionValue::String(StringValue::Null)
        );
    }

    #[test]
    fn test_setters_reject_wrong_kind() {
        let mut config = Config::new();
        assert!(!config.set_int(OptionId::Quiet, 1));
        assert!(!config.set_bool(OptionId::WrapLen, true));
        assert!(!config.set_string(OptionId::TabSize, "4"));
        assert!(!config.set_int(OptionId::AltText, 0));
        assert!(!config.diff_against_default());
        assert!(config.option_errors().is_empty());
    }

    #[test]
    fn test_reset_every_option() {
        let mut config = Config::new();
        config.set_int(OptionId::WrapLen, 10);
        config.set_bool(OptionId::Quiet, true);
        config.set_string(OptionId::ErrFile, "errs.txt");
        for opt in options() {
            assert!(config.reset_to_default(opt.id));
            assert!(config.is_default(opt.id), "{}", opt.name);
        }
        assert!(!config.reset_to_default(OptionId::Unknown));
        assert!(!config.diff_against_default());
    }

    #[test]
    fn test_reset_all_drops_tags() {
        let mut config = Config::new();
        assert!(config.set_option("new-pre-tags", "listing"));
        assert!(config.defined_tags().contains(TagKind::Pre));
        config.reset_all_to_default();
        assert!(config.defined_tags().is_empty());
        assert!(config.tags().is_empty());
    }

    #[test]
    fn test_snapshot_restore() {
        let mut config = Config::new();
        config.set_int(OptionId::TabSize, 4);
        config.take_snapshot();
        assert!(!config.diff_against_snapshot());

        config.set_int(OptionId::TabSize, 2);
        config.set_string(OptionId::OutFile, "out.html");
        assert!(config.diff_against_snapshot());

        config.restore_from_snapshot();
        assert!(!config.diff_against_snapshot());
        assert_eq!(config.get_int(OptionId::TabSize), 4);
        assert_eq!(config.get_str(OptionId::OutFile), None);
    }

    #[test]
    fn test_restore_redeclares_changed_tag_lists() {
        let mut config = Config::new();
        config.set_option("new-inline-tags", "foo, bar");
        config.set_option("new-empty-tags", "spacer");
        config.take_snapshot();

        config.set_option("new-inline-tags", "baz");
        assert_eq!(config.tags().declared(TagKind::Inline), vec!["baz"]);

        config.restore_from_snapshot();
        assert_eq!(config.tags().declared(TagKind::Inline), vec!["foo", "bar"]);
        assert_eq!(config.tags().declared(TagKind::Empty), vec!["spacer"]);
        assert_eq!(config.get_str(OptionId::InlineTags), Some("foo, bar"));
    }

    #[test]
    fn test_diff_against_default_uses_origin_not_content() {
        let mut config = Config::new();
        config.set_int(OptionId::WrapLen, 68);
        assert!(!config.diff_against_default());
        config.set_string(OptionId::AltText, "x");
        assert!(config.diff_against_default());
    }

    #[test]
    fn test_copy_from() {
        let mut source = Config::new();
        source.set_option("new-blocklevel-tags", "section2");
        source.set_option("wrap", "0");
        source.set_option("indent", "auto");

        let mut target = Config::new();
        target.set_int(OptionId::TabSize, 3);
        target.copy_from(&source);

        assert_eq!(target.get_int(OptionId::WrapLen), u64::MAX);
        assert_eq!(target.get_auto_bool(OptionId::IndentContent), TriState::Auto);
        assert_eq!(target.tags().declared(TagKind::Block), vec!["section2"]);
        assert_eq!(target.snapshot_value(OptionId::TabSize), &OptionValue::Integer(3));
    }
}
