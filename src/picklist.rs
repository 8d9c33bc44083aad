//! Picklists for enumerated options.
//!
//! A picklist is an ordered table of [`PickListItem`]s. Each item carries the
//! label written back when a configuration is saved, the word stored in the
//! value slot, and the spellings accepted on input. Matching is
//! case-insensitive and walks the table in order, so the first item that
//! accepts a spelling wins.
//!
//! The typed enumerations in this module ([`TriState`], [`DoctypeMode`],
//! [`Newline`] and friends) are the decoded form of those stored words.
//!
//! ```rust
//! use tidy_config::picklist::{match_token, AUTO_BOOL_PICKS, TriState};
//!
//! let item = match_token(AUTO_BOOL_PICKS, "AUTO").unwrap();
//! assert_eq!(item.value, TriState::Auto as u64);
//! assert_eq!(item.label, "auto");
//! ```

use crate::encoding::Encoding;
use serde::{Deserialize, Serialize};

/// One entry of a picklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickListItem {
    /// Label used when the value is serialized.
    pub label: &'static str,
    /// Word stored in the option slot when this item is selected.
    pub value: u64,
    /// Accepted input spellings, compared case-insensitively.
    pub inputs: &'static [&'static str],
}

/// A static picklist table.
pub type PickList = &'static [PickListItem];

const fn item(
    label: &'static str,
    value: u64,
    inputs: &'static [&'static str],
) -> PickListItem {
    PickListItem {
        label,
        value,
        inputs,
    }
}

/// Finds the first item accepting `token`, ignoring ASCII case.
pub fn match_token(list: PickList, token: &str) -> Option<&'static PickListItem> {
    list.iter().find(|item| {
        item.inputs
            .iter()
            .any(|input| input.eq_ignore_ascii_case(token))
    })
}

/// Finds the label bound to a stored word.
pub fn label_for(list: PickList, value: u64) -> Option<&'static str> {
    list.iter()
        .find(|item| item.value == value)
        .map(|item| item.label)
}

macro_rules! word_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($(#[$vmeta:meta])* $variant:ident = $value:expr),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($(#[$vmeta])* $variant = $value),+
        }

        impl $name {
            /// Decodes a stored option word.
            #[must_use]
            pub fn from_word(word: u64) -> Option<Self> {
                match word {
                    $(w if w == $value => Some($name::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

word_enum! {
    /// Three-state switch used by `indent`, `merge-divs`, `output-bom` and others.
    pub enum TriState {
        No = 0,
        Yes = 1,
        Auto = 2,
    }
}

word_enum! {
    /// Which occurrence of a repeated attribute survives.
    pub enum DuplicateAttrs {
        KeepFirst = 0,
        KeepLast = 1,
    }
}

word_enum! {
    /// Line terminator used for written output, including saved config files.
    pub enum Newline {
        Lf = 0,
        Crlf = 1,
        Cr = 2,
    }
}

impl Newline {
    /// Newline style native to the build target.
    #[cfg(windows)]
    pub const PLATFORM: Newline = Newline::Crlf;
    /// Newline style native to the build target.
    #[cfg(not(windows))]
    pub const PLATFORM: Newline = Newline::Lf;

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Newline::Lf => "\n",
            Newline::Crlf => "\r\n",
            Newline::Cr => "\r",
        }
    }
}

word_enum! {
    /// Resolved doctype handling, stored in the internal `doctype-mode` option.
    pub enum DoctypeMode {
        Html5 = 0,
        Omit = 1,
        Auto = 2,
        Strict = 3,
        Loose = 4,
        /// A user-supplied formal public identifier is stored in `doctype`.
        User = 5,
    }
}

word_enum! {
    /// Attribute sort order.
    pub enum SortAttributes {
        None = 0,
        Alpha = 1,
    }
}

word_enum! {
    /// Kind assigned to names listed in `new-custom-tags`.
    pub enum CustomTags {
        No = 0,
        Blocklevel = 1,
        Empty = 2,
        Inline = 3,
        Pre = 4,
    }
}

word_enum! {
    /// Attribute name casing on output.
    pub enum AttributeCase {
        No = 0,
        Yes = 1,
        Preserve = 2,
    }
}

pub const BOOL_PICKS: PickList = &[
    item("no", 0, &["0", "n", "f", "no", "false"]),
    item("yes", 1, &["1", "y", "t", "yes", "true"]),
];

pub const AUTO_BOOL_PICKS: PickList = &[
    item("no", TriState::No as u64, &["0", "n", "f", "no", "false"]),
    item("yes", TriState::Yes as u64, &["1", "y", "t", "yes", "true"]),
    item("auto", TriState::Auto as u64, &["auto"]),
];

pub const REPEAT_ATTR_PICKS: PickList = &[
    item("keep-first", DuplicateAttrs::KeepFirst as u64, &["keep-first"]),
    item("keep-last", DuplicateAttrs::KeepLast as u64, &["keep-last"]),
];

pub const ACCESS_PICKS: PickList = &[
    item("0 (Tidy Classic)", 0, &["0", "0 (Tidy Classic)"]),
    item("1 (Priority 1 Checks)", 1, &["1", "1 (Priority 1 Checks)"]),
    item("2 (Priority 2 Checks)", 2, &["2", "2 (Priority 2 Checks)"]),
    item("3 (Priority 3 Checks)", 3, &["3", "3 (Priority 3 Checks)"]),
];

pub const CHAR_ENC_PICKS: PickList = &[
    item("raw", Encoding::Raw as u64, &["raw"]),
    item("ascii", Encoding::Ascii as u64, &["ascii"]),
    item("latin0", Encoding::Latin0 as u64, &["latin0"]),
    item("latin1", Encoding::Latin1 as u64, &["latin1"]),
    item("utf8", Encoding::Utf8 as u64, &["utf8"]),
    item("iso2022", Encoding::Iso2022 as u64, &["iso2022"]),
    item("mac", Encoding::MacRoman as u64, &["mac"]),
    item("win1252", Encoding::Win1252 as u64, &["win1252"]),
    item("ibm858", Encoding::Ibm858 as u64, &["ibm858"]),
    item("utf16le", Encoding::Utf16Le as u64, &["utf16le"]),
    item("utf16be", Encoding::Utf16Be as u64, &["utf16be"]),
    item("utf16", Encoding::Utf16 as u64, &["utf16"]),
    item("big5", Encoding::Big5 as u64, &["big5"]),
    item("shiftjis", Encoding::ShiftJis as u64, &["shiftjis"]),
];

pub const NEWLINE_PICKS: PickList = &[
    item("LF", Newline::Lf as u64, &["lf"]),
    item("CRLF", Newline::Crlf as u64, &["crlf"]),
    item("CR", Newline::Cr as u64, &["cr"]),
];

pub const DOCTYPE_PICKS: PickList = &[
    item("html5", DoctypeMode::Html5 as u64, &["html5"]),
    item("omit", DoctypeMode::Omit as u64, &["omit"]),
    item("auto", DoctypeMode::Auto as u64, &["auto"]),
    item("strict", DoctypeMode::Strict as u64, &["strict"]),
    item(
        "transitional",
        DoctypeMode::Loose as u64,
        &["loose", "transitional"],
    ),
    item("user", DoctypeMode::User as u64, &["user"]),
];

pub const SORTER_PICKS: PickList = &[
    item("none", SortAttributes::None as u64, &["none"]),
    item("alpha", SortAttributes::Alpha as u64, &["alpha"]),
];

pub const CUSTOM_TAGS_PICKS: PickList = &[
    item("no", CustomTags::No as u64, &["no", "n"]),
    item("blocklevel", CustomTags::Blocklevel as u64, &["blocklevel"]),
    item("empty", CustomTags::Empty as u64, &["empty"]),
    item("inline", CustomTags::Inline as u64, &["inline", "y", "yes"]),
    item("pre", CustomTags::Pre as u64, &["pre"]),
];

pub const ATTRIBUTE_CASE_PICKS: PickList = &[
    item("no", AttributeCase::No as u64, &["0", "n", "f", "no", "false"]),
    item("yes", AttributeCase::Yes as u64, &["1", "y", "t", "yes", "true"]),
    item("preserve", AttributeCase::Preserve as u64, &["preserve"]),
];
