//! The option catalog.
//!
//! Every configurable setting is described by one static
//! [`OptionDescriptor`] in [`OPTION_DEFS`]. The table is ordered so that the
//! descriptor at position `i` has id `i`; [`OptionId`] discriminants are
//! those positions, which keeps [`lookup_by_id`] a plain index. Position 0
//! holds the `unknown!` placeholder and is never reachable through lookups.
//!
//! ## Examples
//!
//! ```rust
//! use tidy_config::options::{lookup_by_name, OptionId, ValueKind};
//!
//! let wrap = lookup_by_name("WRAP").unwrap();
//! assert_eq!(wrap.id, OptionId::WrapLen);
//! assert_eq!(wrap.kind, ValueKind::Integer);
//! ```

use crate::encoding::Encoding;
use crate::picklist::{
    AttributeCase, CustomTags, DoctypeMode, DuplicateAttrs, Newline, PickList, SortAttributes,
    TriState, ACCESS_PICKS, ATTRIBUTE_CASE_PICKS, AUTO_BOOL_PICKS, BOOL_PICKS, CHAR_ENC_PICKS,
    CUSTOM_TAGS_PICKS, DOCTYPE_PICKS, NEWLINE_PICKS, REPEAT_ATTR_PICKS, SORTER_PICKS,
};
use serde::Serialize;

/// Documentation grouping of an option. Nothing branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Markup,
    Diagnostics,
    PrettyPrint,
    Encoding,
    Miscellaneous,
    Internal,
}

/// Storage kind of an option value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValueKind {
    Integer,
    /// An integer restricted to 0 and 1.
    Boolean,
    String,
}

/// Static default of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    /// Integer and boolean defaults.
    Word(u64),
    /// String defaults; `None` means the slot starts empty.
    Str(Option<&'static str>),
}

/// Value grammar used to read an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserKind {
    /// Unsigned decimal integer.
    Int,
    /// Single whitespace-delimited token.
    Name,
    /// CSS1 class-name prefix.
    Css1Selector,
    /// Free text, optionally quoted, with whitespace runs collapsed.
    String,
    /// Comma or space separated element names.
    TagNames,
    /// Encoding name resolved through the encoding resolver.
    CharEncoding,
    /// Quoted FPI or one of the doctype keywords.
    Doctype,
    /// Boolean picklist that also pins `indent-spaces`.
    Tabs,
    /// Token matched against the option's picklist.
    PickList,
}

/// Option identifiers. Each discriminant is the option's position in
/// [`OPTION_DEFS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[repr(usize)]
pub enum OptionId {
    Unknown,
    AccessibilityCheckLevel,
    AltText,
    AnchorAsName,
    AsciiChars,
    BlockTags,
    BodyOnly,
    BreakBeforeBR,
    CharEncoding,
    CoerceEndTags,
    CssPrefix,
    CustomTags,
    DecorateInferredUL,
    Doctype,
    DoctypeMode,
    DropEmptyElems,
    DropEmptyParas,
    DropPropAttrs,
    DuplicateAttrs,
    Emacs,
    EmacsFile,
    EmptyTags,
    EncloseBlockText,
    EncloseBodyText,
    ErrFile,
    EscapeCdata,
    EscapeScripts,
    FixBackslash,
    FixComments,
    FixUri,
    ForceOutput,
    GDocClean,
    HideComments,
    HtmlOut,
    InCharEncoding,
    IndentAttributes,
    IndentCdata,
    IndentContent,
    IndentSpaces,
    InlineTags,
    JoinClasses,
    JoinStyles,
    KeepFileTimes,
    LiteralAttribs,
    LogicalEmphasis,
    LowerLiterals,
    MakeBare,
    MakeClean,
    Mark,
    MergeDivs,
    MergeEmphasis,
    MergeSpans,
    MetaCharset,
    Ncr,
    Newline,
    NumEntities,
    OmitOptionalTags,
    OutCharEncoding,
    OutFile,
    OutputBom,
    PPrintTabs,
    PreserveEntities,
    PreTags,
    PunctWrap,
    Quiet,
    QuoteAmpersand,
    QuoteMarks,
    QuoteNbsp,
    ReplaceColor,
    ShowErrors,
    ShowInfo,
    ShowMarkup,
    ShowMetaChange,
    ShowWarnings,
    SkipNested,
    SortAttributes,
    StrictTagsAttr,
    StyleTags,
    TabSize,
    UpperCaseAttrs,
    UpperCaseTags,
    UseCustomTags,
    VertSpace,
    WarnPropAttrs,
    Word2000,
    WrapAsp,
    WrapAttVals,
    WrapJste,
    WrapLen,
    WrapPhp,
    WrapScriptlets,
    WrapSection,
    WriteBack,
    XhtmlOut,
    XmlDecl,
    XmlOut,
    XmlPis,
    XmlSpace,
    XmlTags,
}

impl OptionId {
    /// Position of this option in [`OPTION_DEFS`].
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Descriptor for this id.
    #[inline]
    #[must_use]
    pub fn descriptor(self) -> &'static OptionDescriptor {
        &OPTION_DEFS[self.index()]
    }

    /// Canonical option name.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.descriptor().name
    }
}

/// Static description of one option.
#[derive(Debug, Clone, Copy)]
pub struct OptionDescriptor {
    pub id: OptionId,
    pub category: Category,
    pub name: &'static str,
    pub kind: ValueKind,
    pub default: DefaultValue,
    /// `None` marks an internal option that cannot be set from text.
    pub parser: Option<ParserKind>,
    pub picklist: Option<PickList>,
}

impl OptionDescriptor {
    /// Labels of the option's picklist, in table order.
    pub fn pick_labels(&self) -> impl Iterator<Item = &'static str> {
        self.picklist
            .unwrap_or(&[])
            .iter()
            .map(|item| item.label)
    }

    /// Integer or boolean default word. String options report 0.
    #[must_use]
    pub fn default_word(&self) -> u64 {
        match self.default {
            DefaultValue::Word(w) => w,
            DefaultValue::Str(_) => 0,
        }
    }

    /// True when the option can be set from config text.
    #[must_use]
    pub fn is_settable(&self) -> bool {
        self.parser.is_some()
    }
}

const fn opt(
    id: OptionId,
    category: Category,
    name: &'static str,
    kind: ValueKind,
    default: DefaultValue,
    parser: Option<ParserKind>,
    picklist: Option<PickList>,
) -> OptionDescriptor {
    OptionDescriptor {
        id,
        category,
        name,
        kind,
        default,
        parser,
        picklist,
    }
}

/// Number of catalog entries, including the placeholder at position 0.
pub const N_OPTIONS: usize = OptionId::XmlTags as usize + 1;

#[rustfmt::skip]
pub static OPTION_DEFS: [OptionDescriptor; N_OPTIONS] = [
    opt(OptionId::Unknown, Category::Miscellaneous, "unknown!", ValueKind::Integer, DefaultValue::Word(0), None, None),
    opt(OptionId::AccessibilityCheckLevel, Category::Diagnostics, "accessibility-check", ValueKind::Integer, DefaultValue::Word(0), Some(ParserKind::PickList), Some(ACCESS_PICKS)),
    opt(OptionId::AltText, Category::Markup, "alt-text", ValueKind::String, DefaultValue::Str(None), Some(ParserKind::String), None),
    opt(OptionId::AnchorAsName, Category::Markup, "anchor-as-name", ValueKind::Boolean, DefaultValue::Word(1), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::AsciiChars, Category::Encoding, "ascii-chars", ValueKind::Boolean, DefaultValue::Word(0), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::BlockTags, Category::Markup, "new-blocklevel-tags", ValueKind::String, DefaultValue::Str(None), Some(ParserKind::TagNames), None),
    opt(OptionId::BodyOnly, Category::Markup, "show-body-only", ValueKind::Integer, DefaultValue::Word(0), Some(ParserKind::PickList), Some(AUTO_BOOL_PICKS)),
    opt(OptionId::BreakBeforeBR, Category::PrettyPrint, "break-before-br", ValueKind::Boolean, DefaultValue::Word(0), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::CharEncoding, Category::Encoding, "char-encoding", ValueKind::Integer, DefaultValue::Word(Encoding::Utf8 as u64), Some(ParserKind::CharEncoding), Some(CHAR_ENC_PICKS)),
    opt(OptionId::CoerceEndTags, Category::Markup, "coerce-endtags", ValueKind::Boolean, DefaultValue::Word(1), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::CssPrefix, Category::Markup, "css-prefix", ValueKind::String, DefaultValue::Str(None), Some(ParserKind::Css1Selector), None),
    opt(OptionId::CustomTags, Category::Internal, "new-custom-tags", ValueKind::String, DefaultValue::Str(None), Some(ParserKind::TagNames), None),
    opt(OptionId::DecorateInferredUL, Category::Markup, "decorate-inferred-ul", ValueKind::Boolean, DefaultValue::Word(0), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::Doctype, Category::Markup, "doctype", ValueKind::String, DefaultValue::Str(None), Some(ParserKind::Doctype), Some(DOCTYPE_PICKS)),
    opt(OptionId::DoctypeMode, Category::Internal, "doctype-mode", ValueKind::Integer, DefaultValue::Word(DoctypeMode::Auto as u64), None, Some(DOCTYPE_PICKS)),
    opt(OptionId::DropEmptyElems, Category::Markup, "drop-empty-elements", ValueKind::Boolean, DefaultValue::Word(1), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::DropEmptyParas, Category::Markup, "drop-empty-paras", ValueKind::Boolean, DefaultValue::Word(1), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::DropPropAttrs, Category::Markup, "drop-proprietary-attributes", ValueKind::Boolean, DefaultValue::Word(0), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::DuplicateAttrs, Category::Markup, "repeated-attributes", ValueKind::Integer, DefaultValue::Word(DuplicateAttrs::KeepLast as u64), Some(ParserKind::PickList), Some(REPEAT_ATTR_PICKS)),
    opt(OptionId::Emacs, Category::Miscellaneous, "gnu-emacs", ValueKind::Boolean, DefaultValue::Word(0), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::EmacsFile, Category::Internal, "gnu-emacs-file", ValueKind::String, DefaultValue::Str(None), Some(ParserKind::String), None),
    opt(OptionId::EmptyTags, Category::Markup, "new-empty-tags", ValueKind::String, DefaultValue::Str(None), Some(ParserKind::TagNames), None),
    opt(OptionId::EncloseBlockText, Category::Markup, "enclose-block-text", ValueKind::Boolean, DefaultValue::Word(0), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::EncloseBodyText, Category::Markup, "enclose-text", ValueKind::Boolean, DefaultValue::Word(0), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::ErrFile, Category::Miscellaneous, "error-file", ValueKind::String, DefaultValue::Str(None), Some(ParserKind::String), None),
    opt(OptionId::EscapeCdata, Category::Markup, "escape-cdata", ValueKind::Boolean, DefaultValue::Word(0), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::EscapeScripts, Category::PrettyPrint, "escape-scripts", ValueKind::Boolean, DefaultValue::Word(1), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::FixBackslash, Category::Markup, "fix-backslash", ValueKind::Boolean, DefaultValue::Word(1), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::FixComments, Category::Markup, "fix-bad-comments", ValueKind::Boolean, DefaultValue::Word(1), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::FixUri, Category::Markup, "fix-uri", ValueKind::Boolean, DefaultValue::Word(1), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::ForceOutput, Category::Miscellaneous, "force-output", ValueKind::Boolean, DefaultValue::Word(0), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::GDocClean, Category::Markup, "gdoc", ValueKind::Boolean, DefaultValue::Word(0), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::HideComments, Category::Markup, "hide-comments", ValueKind::Boolean, DefaultValue::Word(0), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::HtmlOut, Category::Markup, "output-html", ValueKind::Boolean, DefaultValue::Word(0), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::InCharEncoding, Category::Encoding, "input-encoding", ValueKind::Integer, DefaultValue::Word(Encoding::Utf8 as u64), Some(ParserKind::CharEncoding), Some(CHAR_ENC_PICKS)),
    opt(OptionId::IndentAttributes, Category::PrettyPrint, "indent-attributes", ValueKind::Boolean, DefaultValue::Word(0), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::IndentCdata, Category::Markup, "indent-cdata", ValueKind::Boolean, DefaultValue::Word(0), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::IndentContent, Category::PrettyPrint, "indent", ValueKind::Integer, DefaultValue::Word(TriState::No as u64), Some(ParserKind::PickList), Some(AUTO_BOOL_PICKS)),
    opt(OptionId::IndentSpaces, Category::PrettyPrint, "indent-spaces", ValueKind::Integer, DefaultValue::Word(2), Some(ParserKind::Int), None),
    opt(OptionId::InlineTags, Category::Markup, "new-inline-tags", ValueKind::String, DefaultValue::Str(None), Some(ParserKind::TagNames), None),
    opt(OptionId::JoinClasses, Category::Markup, "join-classes", ValueKind::Boolean, DefaultValue::Word(0), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::JoinStyles, Category::Markup, "join-styles", ValueKind::Boolean, DefaultValue::Word(1), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::KeepFileTimes, Category::Miscellaneous, "keep-time", ValueKind::Boolean, DefaultValue::Word(0), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::LiteralAttribs, Category::Markup, "literal-attributes", ValueKind::Boolean, DefaultValue::Word(0), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::LogicalEmphasis, Category::Markup, "logical-emphasis", ValueKind::Boolean, DefaultValue::Word(0), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::LowerLiterals, Category::Markup, "lower-literals", ValueKind::Boolean, DefaultValue::Word(1), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::MakeBare, Category::Markup, "bare", ValueKind::Boolean, DefaultValue::Word(0), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::MakeClean, Category::Markup, "clean", ValueKind::Boolean, DefaultValue::Word(0), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::Mark, Category::Miscellaneous, "tidy-mark", ValueKind::Boolean, DefaultValue::Word(1), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::MergeDivs, Category::Markup, "merge-divs", ValueKind::Integer, DefaultValue::Word(TriState::Auto as u64), Some(ParserKind::PickList), Some(AUTO_BOOL_PICKS)),
    opt(OptionId::MergeEmphasis, Category::Markup, "merge-emphasis", ValueKind::Boolean, DefaultValue::Word(1), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::MergeSpans, Category::Markup, "merge-spans", ValueKind::Integer, DefaultValue::Word(TriState::Auto as u64), Some(ParserKind::PickList), Some(AUTO_BOOL_PICKS)),
    opt(OptionId::MetaCharset, Category::Miscellaneous, "add-meta-charset", ValueKind::Boolean, DefaultValue::Word(0), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::Ncr, Category::Markup, "ncr", ValueKind::Boolean, DefaultValue::Word(1), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::Newline, Category::Encoding, "newline", ValueKind::Integer, DefaultValue::Word(Newline::PLATFORM as u64), Some(ParserKind::PickList), Some(NEWLINE_PICKS)),
    opt(OptionId::NumEntities, Category::Markup, "numeric-entities", ValueKind::Boolean, DefaultValue::Word(0), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::OmitOptionalTags, Category::Markup, "omit-optional-tags", ValueKind::Boolean, DefaultValue::Word(0), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::OutCharEncoding, Category::Encoding, "output-encoding", ValueKind::Integer, DefaultValue::Word(Encoding::Utf8 as u64), Some(ParserKind::CharEncoding), Some(CHAR_ENC_PICKS)),
    opt(OptionId::OutFile, Category::Miscellaneous, "output-file", ValueKind::String, DefaultValue::Str(None), Some(ParserKind::String), None),
    opt(OptionId::OutputBom, Category::Encoding, "output-bom", ValueKind::Integer, DefaultValue::Word(TriState::Auto as u64), Some(ParserKind::PickList), Some(AUTO_BOOL_PICKS)),
    opt(OptionId::PPrintTabs, Category::PrettyPrint, "indent-with-tabs", ValueKind::Boolean, DefaultValue::Word(0), Some(ParserKind::Tabs), Some(BOOL_PICKS)),
    opt(OptionId::PreserveEntities, Category::Markup, "preserve-entities", ValueKind::Boolean, DefaultValue::Word(0), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::PreTags, Category::Markup, "new-pre-tags", ValueKind::String, DefaultValue::Str(None), Some(ParserKind::TagNames), None),
    opt(OptionId::PunctWrap, Category::PrettyPrint, "punctuation-wrap", ValueKind::Boolean, DefaultValue::Word(0), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::Quiet, Category::Miscellaneous, "quiet", ValueKind::Boolean, DefaultValue::Word(0), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::QuoteAmpersand, Category::Markup, "quote-ampersand", ValueKind::Boolean, DefaultValue::Word(1), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::QuoteMarks, Category::Markup, "quote-marks", ValueKind::Boolean, DefaultValue::Word(0), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::QuoteNbsp, Category::Markup, "quote-nbsp", ValueKind::Boolean, DefaultValue::Word(1), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::ReplaceColor, Category::Markup, "replace-color", ValueKind::Boolean, DefaultValue::Word(0), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::ShowErrors, Category::Diagnostics, "show-errors", ValueKind::Integer, DefaultValue::Word(6), Some(ParserKind::Int), None),
    opt(OptionId::ShowInfo, Category::Diagnostics, "show-info", ValueKind::Boolean, DefaultValue::Word(1), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::ShowMarkup, Category::PrettyPrint, "markup", ValueKind::Boolean, DefaultValue::Word(1), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::ShowMetaChange, Category::Miscellaneous, "show-meta-change", ValueKind::Boolean, DefaultValue::Word(0), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::ShowWarnings, Category::Diagnostics, "show-warnings", ValueKind::Boolean, DefaultValue::Word(1), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::SkipNested, Category::Markup, "skip-nested", ValueKind::Boolean, DefaultValue::Word(1), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::SortAttributes, Category::PrettyPrint, "sort-attributes", ValueKind::Integer, DefaultValue::Word(SortAttributes::None as u64), Some(ParserKind::PickList), Some(SORTER_PICKS)),
    opt(OptionId::StrictTagsAttr, Category::Markup, "strict-tags-attributes", ValueKind::Boolean, DefaultValue::Word(0), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::StyleTags, Category::Markup, "fix-style-tags", ValueKind::Boolean, DefaultValue::Word(1), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::TabSize, Category::PrettyPrint, "tab-size", ValueKind::Integer, DefaultValue::Word(8), Some(ParserKind::Int), None),
    opt(OptionId::UpperCaseAttrs, Category::Markup, "uppercase-attributes", ValueKind::Integer, DefaultValue::Word(AttributeCase::No as u64), Some(ParserKind::PickList), Some(ATTRIBUTE_CASE_PICKS)),
    opt(OptionId::UpperCaseTags, Category::Markup, "uppercase-tags", ValueKind::Boolean, DefaultValue::Word(0), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::UseCustomTags, Category::Markup, "custom-tags", ValueKind::Integer, DefaultValue::Word(CustomTags::No as u64), Some(ParserKind::PickList), Some(CUSTOM_TAGS_PICKS)),
    opt(OptionId::VertSpace, Category::PrettyPrint, "vertical-space", ValueKind::Integer, DefaultValue::Word(0), Some(ParserKind::PickList), Some(AUTO_BOOL_PICKS)),
    opt(OptionId::WarnPropAttrs, Category::Markup, "warn-proprietary-attributes", ValueKind::Boolean, DefaultValue::Word(1), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::Word2000, Category::Markup, "word-2000", ValueKind::Boolean, DefaultValue::Word(0), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::WrapAsp, Category::PrettyPrint, "wrap-asp", ValueKind::Boolean, DefaultValue::Word(1), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::WrapAttVals, Category::PrettyPrint, "wrap-attributes", ValueKind::Boolean, DefaultValue::Word(0), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::WrapJste, Category::PrettyPrint, "wrap-jste", ValueKind::Boolean, DefaultValue::Word(1), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::WrapLen, Category::PrettyPrint, "wrap", ValueKind::Integer, DefaultValue::Word(68), Some(ParserKind::Int), None),
    opt(OptionId::WrapPhp, Category::PrettyPrint, "wrap-php", ValueKind::Boolean, DefaultValue::Word(1), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::WrapScriptlets, Category::PrettyPrint, "wrap-script-literals", ValueKind::Boolean, DefaultValue::Word(0), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::WrapSection, Category::PrettyPrint, "wrap-sections", ValueKind::Boolean, DefaultValue::Word(1), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::WriteBack, Category::Miscellaneous, "write-back", ValueKind::Boolean, DefaultValue::Word(0), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::XhtmlOut, Category::Markup, "output-xhtml", ValueKind::Boolean, DefaultValue::Word(0), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::XmlDecl, Category::Markup, "add-xml-decl", ValueKind::Boolean, DefaultValue::Word(0), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::XmlOut, Category::Markup, "output-xml", ValueKind::Boolean, DefaultValue::Word(0), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::XmlPis, Category::Markup, "assume-xml-procins", ValueKind::Boolean, DefaultValue::Word(0), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::XmlSpace, Category::Markup, "add-xml-space", ValueKind::Boolean, DefaultValue::Word(0), Some(ParserKind::PickList), Some(BOOL_PICKS)),
    opt(OptionId::XmlTags, Category::Markup, "input-xml", ValueKind::Boolean, DefaultValue::Word(0), Some(ParserKind::PickList), Some(BOOL_PICKS)),
];

/// Finds an option by name, ignoring ASCII case.
///
/// The placeholder entry is never returned.
#[must_use]
pub fn lookup_by_name(name: &str) -> Option<&'static OptionDescriptor> {
    options().find(|opt| opt.name.eq_ignore_ascii_case(name))
}

/// Finds an option by numeric id. Out-of-range ids and the placeholder
/// position return `None`.
#[must_use]
pub fn lookup_by_id(id: usize) -> Option<&'static OptionDescriptor> {
    if id == OptionId::Unknown.index() {
        return None;
    }
    OPTION_DEFS.get(id)
}

/// Iterates every real option in id order, skipping the placeholder.
pub fn options() -> impl Iterator<Item = &'static OptionDescriptor> {
    OPTION_DEFS.iter().skip(1)
}
