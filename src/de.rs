//! Configuration parsing.
//!
//! This module reads option assignments into a [`Config`], either from a
//! config file, from in-memory text, or one `name`/`value` pair at a time.
//!
//! ## Overview
//!
//! - **Line oriented**: one `name: value` property per line; lines starting
//!   with `#` or `/` are comments
//! - **Continuation lines**: lines that start with whitespace belong to the
//!   property above them
//! - **Per-option grammars**: each option names the [`ParserKind`] its value
//!   is read with
//! - **Error recovery**: unknown names and bad values are recorded and the
//!   parse moves on to the next property
//!
//! ## Usage
//!
//! ```rust
//! use tidy_config::{Config, OptionId};
//!
//! let mut config = Config::new();
//! let warned = config.parse_str("indent: auto\nwrap: 72\n");
//! assert!(!warned);
//! assert_eq!(config.get_int(OptionId::WrapLen), 72);
//!
//! assert!(config.set_option("tab-size", "4"));
//! assert!(!config.set_option("tab-size", "four"));
//! ```

use crate::config::Config;
use crate::cursor::{is_newline, is_white, CharCursor};
use crate::error::{Error, Result};
use crate::options::{lookup_by_name, OptionDescriptor, OptionId, ParserKind, ValueKind};
use crate::picklist::{match_token, CustomTags, DoctypeMode, PickListItem};
use crate::tags::{TagKind, TagRegistry};
use log::{debug, info, trace};
use std::path::{Path, PathBuf};

/// Longest option name read from a file.
const MAX_OPTION_NAME: usize = 63;
/// Longest picklist token.
const MAX_PICK_TOKEN: usize = 16;
/// Longest encoding name.
const MAX_ENCODING_NAME: usize = 62;
/// Longest CSS class prefix.
const MAX_CSS_PREFIX: usize = 254;
/// Longest name value and longest single tag name.
const MAX_NAME: usize = 1022;
/// Longest free-text value.
const MAX_STRING: usize = 8190;

impl<T: TagRegistry> Config<T> {
    /// Reads a config file, assuming ASCII content.
    ///
    /// Returns `Ok(true)` when the file produced option errors, which are
    /// available from [`Config::option_errors`].
    pub fn parse_file<P: AsRef<Path>>(&mut self, path: P) -> Result<bool> {
        self.parse_file_with_encoding(path, "ascii")
    }

    /// Reads a config file whose content is in the named encoding.
    ///
    /// A leading `~/` in the path is replaced by the home directory. The
    /// values are normalized with [`Config::adjust`] once the file is read.
    pub fn parse_file_with_encoding<P: AsRef<Path>>(
        &mut self,
        path: P,
        encoding: &str,
    ) -> Result<bool> {
        let path = expand_tilde(path.as_ref());
        let display = path.display().to_string();

        let Some(enc) = self.encodings.resolve(&encoding.to_ascii_lowercase()) else {
            self.diagnostics.report_file_open_failure(&display);
            return Err(Error::file_open(
                &display,
                &format!("unknown encoding \"{}\"", encoding),
            ));
        };
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) => {
                self.diagnostics.report_file_open_failure(&display);
                return Err(Error::file_open(&display, &err.to_string()));
            }
        };

        info!("reading configuration from {} as {}", display, enc.opt_name());
        let mut cur = CharCursor::from_string(enc.decode(&bytes));
        Ok(self.parse_config_text(&mut cur))
    }

    /// Reads config-file text held in memory. Returns true when the text
    /// produced option errors.
    pub fn parse_str(&mut self, text: &str) -> bool {
        let mut cur = CharCursor::from_str(text);
        self.parse_config_text(&mut cur)
    }

    fn parse_config_text(&mut self, cur: &mut CharCursor<'_>) -> bool {
        let errors_before = self.error_count();
        self.parse_properties(cur);
        self.adjust();
        self.error_count() > errors_before
    }

    fn parse_properties(&mut self, cur: &mut CharCursor<'_>) {
        let mut c = cur.skip_white();
        while let Some(first) = c {
            if first == '#' || first == '/' {
                c = cur.next_property();
                continue;
            }

            let mut name = String::new();
            let mut len = 0;
            let mut next = Some(first);
            while let Some(ch) = next {
                if len >= MAX_OPTION_NAME || ch == '\n' || ch == ':' {
                    break;
                }
                name.push(ch);
                len += 1;
                next = cur.advance();
            }

            if next == Some(':') {
                cur.advance();
                match lookup_by_name(&name) {
                    Some(opt) => {
                        trace!("parsing value of {}", opt.name);
                        self.parse_option_value(opt, cur);
                    }
                    None => {
                        let value = read_collapsed_string(cur);
                        self.unknown_option_found(&name, &value);
                    }
                }
            }

            c = cur.next_property();
        }
    }

    /// Sets an option by name from its textual value.
    ///
    /// Names missing from the catalog go to the unknown-option callback with
    /// the raw value. Unlike a file parse, no normalization runs afterwards.
    pub fn set_option(&mut self, name: &str, value: &str) -> bool {
        match lookup_by_name(name) {
            Some(opt) => self.parse_value(opt.id, value),
            None => self.unknown_option_found(name, value),
        }
    }

    /// Parses `value` with the grammar of option `id`.
    pub fn parse_value(&mut self, id: OptionId, value: &str) -> bool {
        let mut cur = CharCursor::from_str(value);
        self.parse_option_value(id.descriptor(), &mut cur)
    }

    fn unknown_option_found(&mut self, name: &str, value: &str) -> bool {
        let accepted = match self.unknown_option.as_mut() {
            Some(callback) => callback(name, value),
            None => false,
        };
        if accepted {
            debug!("unknown option {} accepted by callback", name);
        } else {
            self.report(Error::unknown_option(name));
        }
        accepted
    }

    fn bad_argument(&mut self, opt: &OptionDescriptor) -> bool {
        self.report(Error::bad_argument(opt.name));
        false
    }

    fn parse_option_value(
        &mut self,
        opt: &'static OptionDescriptor,
        cur: &mut CharCursor<'_>,
    ) -> bool {
        let Some(parser) = opt.parser else {
            return self.bad_argument(opt);
        };
        match parser {
            ParserKind::Int => self.parse_int(opt, cur),
            ParserKind::Name => self.parse_name(opt, cur),
            ParserKind::Css1Selector => self.parse_css1_selector(opt, cur),
            ParserKind::String => self.parse_string(opt, cur),
            ParserKind::TagNames => self.parse_tag_names(opt, cur),
            ParserKind::CharEncoding => self.parse_char_encoding(opt, cur),
            ParserKind::Doctype => self.parse_doctype(opt, cur),
            ParserKind::Tabs => self.parse_tabs(opt, cur),
            ParserKind::PickList => self.parse_pick_list(opt, cur),
        }
    }

    fn parse_int(&mut self, opt: &OptionDescriptor, cur: &mut CharCursor<'_>) -> bool {
        let mut c = cur.skip_white();
        let mut number: u64 = 0;
        let mut digits = false;
        while let Some(d) = c.and_then(|ch| ch.to_digit(10)) {
            number = number.wrapping_mul(10).wrapping_add(u64::from(d));
            digits = true;
            c = cur.advance();
        }
        if !digits {
            return self.bad_argument(opt);
        }
        self.set_int(opt.id, number)
    }

    fn parse_name(&mut self, opt: &OptionDescriptor, cur: &mut CharCursor<'_>) -> bool {
        cur.skip_white();
        let name = read_token(cur, MAX_NAME, is_white);
        if name.is_empty() {
            return self.bad_argument(opt);
        }
        self.set_string(opt.id, &name)
    }

    fn parse_css1_selector(&mut self, opt: &OptionDescriptor, cur: &mut CharCursor<'_>) -> bool {
        cur.skip_white();
        let mut prefix = read_token(cur, MAX_CSS_PREFIX, is_white);
        if prefix.is_empty() || !is_css1_selector(&prefix) {
            return self.bad_argument(opt);
        }
        prefix.push('-');
        self.set_string(opt.id, &prefix)
    }

    fn parse_string(&mut self, opt: &OptionDescriptor, cur: &mut CharCursor<'_>) -> bool {
        let text = read_collapsed_string(cur);
        self.set_string(opt.id, &text)
    }

    /// Reads a picklist token and matches it against the option's list.
    fn pick_list_value(
        &mut self,
        opt: &OptionDescriptor,
        cur: &mut CharCursor<'_>,
    ) -> Option<&'static PickListItem> {
        cur.skip_white();
        let token = read_token(cur, MAX_PICK_TOKEN, is_white);
        let item = opt.picklist.and_then(|list| match_token(list, &token));
        if item.is_none() {
            self.bad_argument(opt);
        }
        item
    }

    fn parse_pick_list(&mut self, opt: &OptionDescriptor, cur: &mut CharCursor<'_>) -> bool {
        let Some(item) = self.pick_list_value(opt, cur) else {
            return false;
        };
        match opt.kind {
            ValueKind::Boolean => self.set_bool(opt.id, item.value != 0),
            ValueKind::Integer => self.set_int(opt.id, item.value),
            ValueKind::String => self.bad_argument(opt),
        }
    }

    fn parse_tabs(&mut self, opt: &OptionDescriptor, cur: &mut CharCursor<'_>) -> bool {
        let Some(item) = self.pick_list_value(opt, cur) else {
            return false;
        };
        let tabs = item.value != 0;
        self.set_bool(opt.id, tabs);
        if tabs {
            self.set_int(OptionId::IndentSpaces, 1);
        }
        true
    }

    fn parse_tag_names(&mut self, opt: &OptionDescriptor, cur: &mut CharCursor<'_>) -> bool {
        let kind = match opt.id {
            OptionId::InlineTags => TagKind::Inline,
            OptionId::BlockTags => TagKind::Block,
            OptionId::EmptyTags => TagKind::Empty,
            OptionId::PreTags => TagKind::Pre,
            OptionId::CustomTags => self.custom_tag_kind(),
            _ => return self.bad_argument(opt),
        };

        self.set_string(opt.id, "");
        self.tags.clear_tags_of_kind(kind);
        self.mark_defined(kind);

        let mut declared = 0;
        let mut c = cur.skip_white();
        while let Some(ch) = c {
            if ch == ',' || (is_white(ch) && !is_newline(ch)) {
                c = cur.advance();
                continue;
            }

            if is_newline(ch) {
                let after = cur.advance();
                c = if ch == '\r' && after == Some('\n') {
                    cur.advance()
                } else {
                    after
                };
                // A line that does not start with whitespace is the next
                // property; hand it back to the property loop.
                match c {
                    Some(next) if is_white(next) => {}
                    Some(next) => {
                        cur.unget(next);
                        cur.unget('\n');
                        break;
                    }
                    None => break,
                }
            }

            let name = read_token(cur, MAX_NAME, |ch| is_white(ch) || ch == ',');
            c = cur.current();
            if name.is_empty() {
                continue;
            }
            self.declare_user_tag(opt.id, kind, &name);
            declared += 1;
        }

        if declared == 0 {
            return self.bad_argument(opt);
        }
        true
    }

    /// Kind that `new-custom-tags` declares into, taken from `custom-tags`.
    fn custom_tag_kind(&self) -> TagKind {
        match CustomTags::from_word(self.get_int(OptionId::UseCustomTags)) {
            Some(CustomTags::Blocklevel) => TagKind::Block,
            Some(CustomTags::Empty) => TagKind::Empty,
            Some(CustomTags::Pre) => TagKind::Pre,
            Some(CustomTags::Inline) | Some(CustomTags::No) | None => TagKind::Inline,
        }
    }

    fn declare_user_tag(&mut self, id: OptionId, kind: TagKind, name: &str) {
        let list = match self.get_str(id) {
            Some(prev) => format!("{}, {}", prev, name),
            None => name.to_string(),
        };
        self.tags.define_tag(kind, name);
        self.set_string(id, &list);
    }

    fn parse_char_encoding(&mut self, opt: &OptionDescriptor, cur: &mut CharCursor<'_>) -> bool {
        cur.skip_white();
        let name = read_token(cur, MAX_ENCODING_NAME, is_white).to_ascii_lowercase();
        let Some(enc) = self.encodings.resolve(&name) else {
            return self.bad_argument(opt);
        };
        self.set_int(opt.id, enc as u64);
        if opt.id == OptionId::CharEncoding {
            self.adjust_char_encoding(enc);
        }
        true
    }

    fn parse_doctype(&mut self, opt: &OptionDescriptor, cur: &mut CharCursor<'_>) -> bool {
        let c = cur.skip_white();
        if c == Some('"') || c == Some('\'') {
            self.parse_string(opt, cur);
            return self.set_int(OptionId::DoctypeMode, DoctypeMode::User as u64);
        }
        match self.pick_list_value(opt, cur) {
            Some(item) => self.set_int(OptionId::DoctypeMode, item.value),
            None => false,
        }
    }
}

/// Reads characters until `stop` matches, the stream ends or `max`
/// characters are taken. The stopping character stays current.
fn read_token(cur: &mut CharCursor<'_>, max: usize, stop: impl Fn(char) -> bool) -> String {
    let mut token = String::new();
    let mut len = 0;
    let mut c = cur.current();
    while let Some(ch) = c {
        if len >= max || stop(ch) {
            break;
        }
        token.push(ch);
        len += 1;
        c = cur.advance();
    }
    token
}

/// Reads a free-text value.
///
/// The value may be wrapped in `'` or `"`; otherwise it runs to the end of
/// the line. Runs of whitespace collapse to one space and leading
/// whitespace is dropped.
fn read_collapsed_string(cur: &mut CharCursor<'_>) -> String {
    let mut c = cur.skip_white();
    let mut delim = None;
    if let Some(q @ ('"' | '\'')) = c {
        delim = Some(q);
        c = cur.advance();
    }

    let mut text = String::new();
    let mut len = 0;
    let mut was_white = true;
    while let Some(ch) = c {
        if len >= MAX_STRING || is_newline(ch) || Some(ch) == delim {
            break;
        }
        if is_white(ch) {
            if !was_white {
                text.push(' ');
                len += 1;
                was_white = true;
            }
        } else {
            text.push(ch);
            len += 1;
            was_white = false;
        }
        c = cur.advance();
    }
    text
}

/// True when `text` is a valid CSS1 class selector.
///
/// Letters, digits, `-` and characters above U+00A0 are allowed. A digit
/// may not come first unless escaped, a `-` may not come first, and an
/// escape covers at most four following digits.
pub fn is_css1_selector(text: &str) -> bool {
    let mut esc_len = 0;
    for (pos, c) in text.chars().enumerate() {
        let valid = if c == '\\' {
            esc_len = 1;
            true
        } else if c.is_ascii_digit() {
            if esc_len > 0 {
                esc_len += 1;
                if esc_len >= 6 {
                    return false;
                }
            }
            pos > 0 || esc_len > 0
        } else {
            let ok = esc_len > 0
                || (pos > 0 && c == '-')
                || c.is_ascii_alphabetic()
                || u32::from(c) >= 161;
            esc_len = 0;
            ok
        };
        if !valid {
            return false;
        }
    }
    true
}

/// Replaces a leading `~/` with the value of `$HOME`.
pub fn expand_tilde(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), std::env::var_os("HOME")) {
        (Ok(rest), Some(home)) if path.to_str().map_or(true, |s| s.starts_with("~/")) => {
            PathBuf::from(home).join(rest)
        }
        _ => path.to_path_buf(),
    }
}

/// True when `path` (after `~/` expansion) names an existing file.
pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
    expand_tilde(path.as_ref()).is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::Encoding;
    use crate::picklist::TriState;
    use crate::Config;

    #[test]
    fn test_parse_int() {
        let mut config = Config::new();
        assert!(config.set_option("wrap", "  72"));
        assert_eq!(config.get_int(OptionId::WrapLen), 72);
        assert!(config.set_option("tab-size", "8 spaces"));
        assert_eq!(config.get_int(OptionId::TabSize), 8);
        assert!(!config.set_option("tab-size", "eight"));
        assert_eq!(config.get_int(OptionId::TabSize), 8);
        assert_eq!(config.option_errors(), &[Error::bad_argument("tab-size")]);
    }

    #[test]
    fn test_parse_name() {
        let mut config = Config::new();
        let opt = OptionId::OutFile.descriptor();
        let mut cur = CharCursor::from_str(" out.html trailing");
        assert!(config.parse_name(opt, &mut cur));
        assert_eq!(config.get_str(OptionId::OutFile), Some("out.html"));
        assert_eq!(cur.current(), Some(' '));

        let mut cur = CharCursor::from_str("   ");
        assert!(!config.parse_name(opt, &mut cur));
        assert_eq!(config.option_errors(), &[Error::bad_argument("output-file")]);
    }

    #[test]
    fn test_parse_css_prefix() {
        let mut config = Config::new();
        assert!(config.set_option("css-prefix", "c"));
        assert_eq!(config.get_str(OptionId::CssPrefix), Some("c-"));
        assert!(!config.set_option("css-prefix", "9lives"));
        assert!(!config.set_option("css-prefix", ""));
        assert_eq!(config.get_str(OptionId::CssPrefix), Some("c-"));
    }

    #[test]
    fn test_css1_selector_rules() {
        assert!(is_css1_selector("main"));
        assert!(is_css1_selector("a-b9"));
        assert!(is_css1_selector("\\31x"));
        assert!(!is_css1_selector("-x"));
        assert!(!is_css1_selector("1x"));
        assert!(!is_css1_selector("a_b"));
        assert!(!is_css1_selector("\\12345"));
    }

    #[test]
    fn test_parse_string_collapses_whitespace() {
        let mut config = Config::new();
        config.set_option("alt-text", "   a  picture\tof   me ");
        assert_eq!(config.get_str(OptionId::AltText), Some("a picture of me "));

        config.set_option("alt-text", "'quoted  text' ignored");
        assert_eq!(config.get_str(OptionId::AltText), Some("quoted text"));

        config.set_option("alt-text", "");
        assert_eq!(config.get_str(OptionId::AltText), None);
    }

    #[test]
    fn test_parse_pick_list() {
        let mut config = Config::new();
        for (word, expected) in [("y", true), ("TRUE", true), ("0", false), ("no", false)] {
            assert!(config.set_option("quiet", word), "{}", word);
            assert_eq!(config.get_bool(OptionId::Quiet), expected);
        }
        assert!(config.set_option("indent", "auto"));
        assert_eq!(config.get_auto_bool(OptionId::IndentContent), TriState::Auto);
        assert!(!config.set_option("indent", "maybe"));
        assert_eq!(config.get_auto_bool(OptionId::IndentContent), TriState::Auto);
        assert_eq!(config.option_errors().len(), 1);
    }

    #[test]
    fn test_parse_tabs_sets_indent_spaces() {
        let mut config = Config::new();
        assert!(config.set_option("indent-with-tabs", "yes"));
        assert!(config.get_bool(OptionId::PPrintTabs));
        assert_eq!(config.get_int(OptionId::IndentSpaces), 1);
    }

    #[test]
    fn test_parse_tag_names() {
        let mut config = Config::new();
        assert!(config.set_option("new-inline-tags", "foo, bar,,baz\tqux"));
        assert_eq!(
            config.get_str(OptionId::InlineTags),
            Some("foo, bar, baz, qux")
        );
        assert_eq!(
            config.tags().declared(TagKind::Inline),
            vec!["foo", "bar", "baz", "qux"]
        );
        assert!(config.defined_tags().contains(TagKind::Inline));

        assert!(!config.set_option("new-inline-tags", " , "));
        assert_eq!(config.get_str(OptionId::InlineTags), None);
    }

    #[test]
    fn test_custom_tags_follow_custom_tags_mode() {
        let mut config = Config::new();
        config.set_option("custom-tags", "pre");
        assert!(config.set_option("new-custom-tags", "x-code"));
        assert_eq!(config.tags().declared(TagKind::Pre), vec!["x-code"]);
    }

    #[test]
    fn test_parse_char_encoding() {
        let mut config = Config::new();
        assert!(config.set_option("output-encoding", "LATIN1"));
        assert_eq!(config.get_encoding(OptionId::OutCharEncoding), Some(Encoding::Latin1));
        assert_eq!(config.get_encoding(OptionId::CharEncoding), Some(Encoding::Utf8));

        assert!(config.set_option("char-encoding", "win1252"));
        assert_eq!(config.get_encoding(OptionId::InCharEncoding), Some(Encoding::Win1252));
        assert_eq!(config.get_encoding(OptionId::OutCharEncoding), Some(Encoding::Ascii));

        assert!(!config.set_option("char-encoding", "klingon"));
    }

    #[test]
    fn test_parse_doctype() {
        let mut config = Config::new();
        assert!(config.set_option("doctype", "strict"));
        assert_eq!(config.get_doctype_mode(), DoctypeMode::Strict);

        assert!(config.set_option("doctype", "\"-//W3C//DTD XHTML 1.1//EN\""));
        assert_eq!(config.get_doctype_mode(), DoctypeMode::User);
        assert_eq!(
            config.get_str(OptionId::Doctype),
            Some("-//W3C//DTD XHTML 1.1//EN")
        );

        assert!(!config.set_option("doctype", "sloppy"));
        assert_eq!(config.get_doctype_mode(), DoctypeMode::User);
    }

    #[test]
    fn test_internal_option_has_no_parser() {
        let mut config = Config::new();
        assert!(!config.set_option("doctype-mode", "strict"));
        assert_eq!(config.option_errors(), &[Error::bad_argument("doctype-mode")]);
    }

    #[test]
    fn test_unknown_option_callback() {
        let mut config = Config::new();
        config.set_unknown_option_callback(|name, _| name.starts_with("x-"));
        assert!(config.set_option("x-extra", "1"));
        assert!(!config.set_option("y-extra", "1"));
        assert_eq!(config.option_errors(), &[Error::unknown_option("y-extra")]);
    }

    #[test]
    fn test_file_grammar() {
        let mut config = Config::new();
        let text = "# comment\n// another\n  wrap: 80\nindent: yes\n   continued\nquiet:yes";
        assert!(!config.parse_str(text));
        assert_eq!(config.get_int(OptionId::WrapLen), 80);
        assert_eq!(config.get_auto_bool(OptionId::IndentContent), TriState::Yes);
        assert!(config.get_bool(OptionId::Quiet));
    }

    #[test]
    fn test_line_without_colon_is_ignored() {
        let mut config = Config::new();
        assert!(!config.parse_str("just some words\nwrap: 10\n"));
        assert_eq!(config.get_int(OptionId::WrapLen), 10);
    }

    #[test]
    fn test_tag_list_spans_continuation_lines() {
        let mut config = Config::new();
        let text = "new-blocklevel-tags: a, b\n  c\r\n\td\nwrap: 5\n";
        assert!(!config.parse_str(text));
        assert_eq!(
            config.tags().declared(TagKind::Block),
            vec!["a", "b", "c", "d"]
        );
        assert_eq!(config.get_int(OptionId::WrapLen), 5);
    }

    #[test]
    fn test_tag_list_form_feed_separates_names() {
        let mut config = Config::new();
        assert!(config.set_option("new-inline-tags", "foo\u{000C}bar"));
        assert_eq!(config.tags().declared(TagKind::Inline), vec!["foo", "bar"]);

        let mut config = Config::new();
        let text = "new-pre-tags: a\u{000C}b,\n\u{000C}c\nwrap: 7\n";
        assert!(!config.parse_str(text));
        assert_eq!(config.tags().declared(TagKind::Pre), vec!["a", "b", "c"]);
        assert_eq!(config.get_int(OptionId::WrapLen), 7);
    }

    #[test]
    fn test_unknown_option_in_file_gets_collapsed_value() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut config = Config::new();
        config.set_unknown_option_callback(move |name, value| {
            sink.borrow_mut().push((name.to_string(), value.to_string()));
            true
        });
        assert!(!config.parse_str("my-flag:   \"a   b\"\n"));
        assert_eq!(
            seen.borrow().as_slice(),
            &[("my-flag".to_string(), "a b".to_string())]
        );
    }

    #[test]
    fn test_expand_tilde() {
        if let Some(home) = std::env::var_os("HOME") {
            assert_eq!(
                expand_tilde(Path::new("~/tidyrc")),
                PathBuf::from(home).join("tidyrc")
            );
        }
        assert_eq!(expand_tilde(Path::new("~user/x")), PathBuf::from("~user/x"));
        assert_eq!(expand_tilde(Path::new("/etc/tidyrc")), PathBuf::from("/etc/tidyrc"));
    }
}
