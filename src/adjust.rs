//! Cross-option consistency rules.
//!
//! Some options imply others: XHTML output is XML output, XML input rules
//! out XHTML output, and so on. [`Config::adjust`] applies those rules in a
//! fixed order after a file parse, a copy and a snapshot. Running it twice
//! gives the same result as running it once.

use crate::config::Config;
use crate::encoding::Encoding;
use crate::options::OptionId;
use crate::picklist::{AttributeCase, TriState};
use crate::tags::{TagKind, TagRegistry};
use log::debug;

/// Inline tag declared for Word 2000 cleanup.
const WORD_2000_INLINE_TAG: &str = "o:p";

impl<T: TagRegistry> Config<T> {
    /// Brings dependent options in line with the options they follow.
    pub fn adjust(&mut self) {
        if self.get_bool(OptionId::EncloseBlockText) {
            self.set_bool(OptionId::EncloseBodyText, true);
        }

        if self.get_auto_bool(OptionId::IndentContent) == TriState::No {
            self.set_int(OptionId::IndentSpaces, 0);
        }

        // Zero means "do not wrap".
        if self.get_int(OptionId::WrapLen) == 0 {
            self.set_int(OptionId::WrapLen, u64::MAX);
        }

        if self.get_bool(OptionId::Word2000) {
            self.mark_defined(TagKind::Inline);
            self.tags.define_tag(TagKind::Inline, WORD_2000_INLINE_TAG);
        }

        if self.get_bool(OptionId::XmlTags) {
            self.set_bool(OptionId::XhtmlOut, false);
        }

        if self.get_bool(OptionId::XhtmlOut) {
            self.set_bool(OptionId::XmlOut, true);
            self.set_bool(OptionId::UpperCaseTags, false);
            self.set_int(OptionId::UpperCaseAttrs, AttributeCase::No as u64);
        }

        if self.get_bool(OptionId::XmlTags) {
            self.set_bool(OptionId::XmlOut, true);
            self.set_bool(OptionId::XmlPis, true);
        }

        let out = self.get_encoding(OptionId::OutCharEncoding);

        // Only encodings XML parsers must detect on their own can go
        // without a declaration.
        if self.get_bool(OptionId::XmlOut) && !out.map_or(false, declaration_optional) {
            self.set_bool(OptionId::XmlDecl, true);
        }

        if self.get_bool(OptionId::XmlOut) {
            if out.map_or(false, Encoding::is_utf16) {
                self.set_int(OptionId::OutputBom, TriState::Yes as u64);
            }
            self.set_bool(OptionId::QuoteAmpersand, true);
            self.set_bool(OptionId::OmitOptionalTags, false);
        }

        debug!("configuration adjusted");
    }

    /// Applies a `char-encoding` value to the input and output encodings.
    ///
    /// Legacy single-byte encodings are read as themselves and written as
    /// ASCII; `ascii` reads Latin-1 and writes ASCII; every other encoding
    /// is used for both directions.
    pub fn adjust_char_encoding(&mut self, encoding: Encoding) {
        let (input, output) = match encoding {
            Encoding::MacRoman | Encoding::Win1252 | Encoding::Ibm858 | Encoding::Latin0 => {
                (encoding, Encoding::Ascii)
            }
            Encoding::Ascii => (Encoding::Latin1, Encoding::Ascii),
            Encoding::Raw
            | Encoding::Latin1
            | Encoding::Utf8
            | Encoding::Iso2022
            | Encoding::Utf16Le
            | Encoding::Utf16Be
            | Encoding::Utf16
            | Encoding::ShiftJis
            | Encoding::Big5 => (encoding, encoding),
        };

        debug!(
            "char-encoding {} reads {} and writes {}",
            encoding.opt_name(),
            input.opt_name(),
            output.opt_name()
        );
        self.set_int(OptionId::CharEncoding, encoding as u64);
        self.set_int(OptionId::InCharEncoding, input as u64);
        self.set_int(OptionId::OutCharEncoding, output as u64);
    }
}

fn declaration_optional(enc: Encoding) -> bool {
    matches!(enc, Encoding::Ascii | Encoding::Utf8 | Encoding::Raw) || enc.is_utf16()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_zero_means_unlimited() {
        let mut config = crate::Config::new();
        config.set_int(OptionId::WrapLen, 0);
        config.adjust();
        assert_eq!(config.get_int(OptionId::WrapLen), u64::MAX);
    }

    #[test]
    fn test_indent_no_clears_indent_spaces() {
        let mut config = crate::Config::new();
        config.set_int(OptionId::IndentSpaces, 4);
        config.adjust();
        assert_eq!(config.get_int(OptionId::IndentSpaces), 0);

        config.set_int(OptionId::IndentContent, TriState::Auto as u64);
        config.set_int(OptionId::IndentSpaces, 4);
        config.adjust();
        assert_eq!(config.get_int(OptionId::IndentSpaces), 4);
    }

    #[test]
    fn test_xhtml_implies_xml() {
        let mut config = crate::Config::new();
        config.set_bool(OptionId::XhtmlOut, true);
        config.set_bool(OptionId::UpperCaseTags, true);
        config.set_bool(OptionId::OmitOptionalTags, true);
        config.adjust();
        assert!(config.get_bool(OptionId::XmlOut));
        assert!(!config.get_bool(OptionId::UpperCaseTags));
        assert!(config.get_bool(OptionId::QuoteAmpersand));
        assert!(!config.get_bool(OptionId::OmitOptionalTags));
        assert!(!config.get_bool(OptionId::XmlDecl));
    }

    #[test]
    fn test_xml_input_disables_xhtml() {
        let mut config = crate::Config::new();
        config.set_bool(OptionId::XmlTags, true);
        config.set_bool(OptionId::XhtmlOut, true);
        config.adjust();
        assert!(!config.get_bool(OptionId::XhtmlOut));
        assert!(config.get_bool(OptionId::XmlOut));
        assert!(config.get_bool(OptionId::XmlPis));
    }

    #[test]
    fn test_xml_declaration_for_legacy_output() {
        let mut config = crate::Config::new();
        config.set_bool(OptionId::XmlOut, true);
        config.set_int(OptionId::OutCharEncoding, Encoding::Latin1 as u64);
        config.adjust();
        assert!(config.get_bool(OptionId::XmlDecl));
    }

    #[test]
    fn test_utf16_xml_output_gets_bom() {
        let mut config = crate::Config::new();
        config.set_bool(OptionId::XmlOut, true);
        config.set_int(OptionId::OutCharEncoding, Encoding::Utf16Be as u64);
        config.adjust();
        assert_eq!(config.get_auto_bool(OptionId::OutputBom), TriState::Yes);
        assert!(!config.get_bool(OptionId::XmlDecl));
    }

    #[test]
    fn test_word_2000_declares_inline_tag() {
        let mut config = crate::Config::new();
        config.set_bool(OptionId::Word2000, true);
        config.adjust();
        config.adjust();
        assert_eq!(config.tags().declared(TagKind::Inline), vec!["o:p"]);
        assert!(config.defined_tags().contains(TagKind::Inline));
    }

    #[test]
    fn test_char_encoding_pairs() {
        let cases = [
            (Encoding::MacRoman, Encoding::MacRoman, Encoding::Ascii),
            (Encoding::Latin0, Encoding::Latin0, Encoding::Ascii),
            (Encoding::Ascii, Encoding::Latin1, Encoding::Ascii),
            (Encoding::ShiftJis, Encoding::ShiftJis, Encoding::ShiftJis),
            (Encoding::Utf16Le, Encoding::Utf16Le, Encoding::Utf16Le),
        ];
        for (enc, input, output) in cases {
            let mut config = crate::Config::new();
            config.adjust_char_encoding(enc);
            assert_eq!(config.get_encoding(OptionId::CharEncoding), Some(enc));
            assert_eq!(config.get_encoding(OptionId::InCharEncoding), Some(input));
            assert_eq!(config.get_encoding(OptionId::OutCharEncoding), Some(output));
        }
    }
}
