//! Character encodings known to the configuration layer.
//!
//! The layer never converts document text itself. It needs encodings for
//! three things: resolving option values such as `char-encoding: utf8`
//! through an [`EncodingResolver`], decoding config files read with a
//! declared encoding, and encoding the text of saved config files.

use encoding_rs::EncoderResult;
use serde::{Deserialize, Serialize};

/// Encoding identifiers. The discriminants are the words stored in the
/// `char-encoding`, `input-encoding` and `output-encoding` slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    Raw = 0,
    Ascii = 1,
    Latin0 = 2,
    Latin1 = 3,
    Utf8 = 4,
    Iso2022 = 5,
    MacRoman = 6,
    Win1252 = 7,
    Ibm858 = 8,
    Utf16Le = 9,
    Utf16Be = 10,
    Utf16 = 11,
    Big5 = 12,
    ShiftJis = 13,
}

impl Encoding {
    pub const ALL: [Encoding; 14] = [
        Encoding::Raw,
        Encoding::Ascii,
        Encoding::Latin0,
        Encoding::Latin1,
        Encoding::Utf8,
        Encoding::Iso2022,
        Encoding::MacRoman,
        Encoding::Win1252,
        Encoding::Ibm858,
        Encoding::Utf16Le,
        Encoding::Utf16Be,
        Encoding::Utf16,
        Encoding::Big5,
        Encoding::ShiftJis,
    ];

    /// Decodes a stored option word.
    #[must_use]
    pub fn from_word(word: u64) -> Option<Self> {
        usize::try_from(word)
            .ok()
            .and_then(|ix| Self::ALL.get(ix).copied())
    }

    /// Name accepted in config files for this encoding.
    #[must_use]
    pub const fn opt_name(self) -> &'static str {
        match self {
            Encoding::Raw => "raw",
            Encoding::Ascii => "ascii",
            Encoding::Latin0 => "latin0",
            Encoding::Latin1 => "latin1",
            Encoding::Utf8 => "utf8",
            Encoding::Iso2022 => "iso2022",
            Encoding::MacRoman => "mac",
            Encoding::Win1252 => "win1252",
            Encoding::Ibm858 => "ibm858",
            Encoding::Utf16Le => "utf16le",
            Encoding::Utf16Be => "utf16be",
            Encoding::Utf16 => "utf16",
            Encoding::Big5 => "big5",
            Encoding::ShiftJis => "shiftjis",
        }
    }

    #[must_use]
    pub const fn is_utf16(self) -> bool {
        matches!(
            self,
            Encoding::Utf16 | Encoding::Utf16Le | Encoding::Utf16Be
        )
    }

    /// The `encoding_rs` codec behind this encoding, when it has one.
    ///
    /// Raw, ASCII, Latin-1 and IBM-858 are mapped byte by byte here instead;
    /// `encoding_rs` reads the `latin1` label as Windows-1252.
    #[must_use]
    pub fn codec(self) -> Option<&'static encoding_rs::Encoding> {
        match self {
            Encoding::Raw | Encoding::Ascii | Encoding::Latin1 | Encoding::Ibm858 => None,
            Encoding::Latin0 => Some(encoding_rs::ISO_8859_15),
            Encoding::Utf8 => Some(encoding_rs::UTF_8),
            Encoding::Iso2022 => Some(encoding_rs::ISO_2022_JP),
            Encoding::MacRoman => Some(encoding_rs::MACINTOSH),
            Encoding::Win1252 => Some(encoding_rs::WINDOWS_1252),
            Encoding::Utf16Le => Some(encoding_rs::UTF_16LE),
            Encoding::Utf16Be | Encoding::Utf16 => Some(encoding_rs::UTF_16BE),
            Encoding::Big5 => Some(encoding_rs::BIG5),
            Encoding::ShiftJis => Some(encoding_rs::SHIFT_JIS),
        }
    }

    /// Encodes text for a written config file.
    ///
    /// Characters the encoding cannot represent are written as `?`.
    #[must_use]
    pub fn encode(self, text: &str) -> Vec<u8> {
        match self {
            Encoding::Raw => text.as_bytes().to_vec(),
            Encoding::Ascii => text
                .chars()
                .map(|c| if c.is_ascii() { c as u8 } else { b'?' })
                .collect(),
            Encoding::Latin1 => text
                .chars()
                .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
                .collect(),
            Encoding::Ibm858 => text.chars().map(ibm858_byte).collect(),
            // encoding_rs only decodes UTF-16.
            Encoding::Utf16Le => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
            Encoding::Utf16Be | Encoding::Utf16 => {
                text.encode_utf16().flat_map(u16::to_be_bytes).collect()
            }
            _ => match self.codec() {
                Some(codec) => encode_with(codec, text),
                None => text.as_bytes().to_vec(),
            },
        }
    }

    /// Decodes the bytes of a config file read with this encoding.
    ///
    /// Malformed input decodes to U+FFFD. `utf8` and `utf16` honor a byte
    /// order mark; the fixed-endian UTF-16 variants keep it as text.
    #[must_use]
    pub fn decode(self, bytes: &[u8]) -> String {
        match self {
            Encoding::Raw | Encoding::Ascii | Encoding::Latin1 => {
                bytes.iter().map(|&b| char::from(b)).collect()
            }
            Encoding::Ibm858 => bytes.iter().map(|&b| ibm858_char(b)).collect(),
            Encoding::Utf8 | Encoding::Utf16 => match self.codec() {
                Some(codec) => codec.decode(bytes).0.into_owned(),
                None => String::from_utf8_lossy(bytes).into_owned(),
            },
            _ => match self.codec() {
                Some(codec) => codec.decode_without_bom_handling(bytes).0.into_owned(),
                None => String::from_utf8_lossy(bytes).into_owned(),
            },
        }
    }
}

fn encode_with(codec: &'static encoding_rs::Encoding, text: &str) -> Vec<u8> {
    let mut encoder = codec.new_encoder();
    let mut out = Vec::new();
    let mut rest = text;
    loop {
        let needed = encoder
            .max_buffer_length_from_utf8_without_replacement(rest.len())
            .unwrap_or(rest.len() * 4 + 16);
        out.reserve(needed);
        let (result, read) =
            encoder.encode_from_utf8_to_vec_without_replacement(rest, &mut out, true);
        rest = &rest[read..];
        match result {
            EncoderResult::InputEmpty => break,
            EncoderResult::OutputFull => {}
            EncoderResult::Unmappable(_) => out.push(b'?'),
        }
    }
    out
}

/// IBM-858 upper half: code page 850 with the euro sign at 0xD5.
const IBM858_HIGH: [char; 128] = [
    '\u{00C7}', '\u{00FC}', '\u{00E9}', '\u{00E2}', '\u{00E4}', '\u{00E0}', '\u{00E5}', '\u{00E7}',
    '\u{00EA}', '\u{00EB}', '\u{00E8}', '\u{00EF}', '\u{00EE}', '\u{00EC}', '\u{00C4}', '\u{00C5}',
    '\u{00C9}', '\u{00E6}', '\u{00C6}', '\u{00F4}', '\u{00F6}', '\u{00F2}', '\u{00FB}', '\u{00F9}',
    '\u{00FF}', '\u{00D6}', '\u{00DC}', '\u{00F8}', '\u{00A3}', '\u{00D8}', '\u{00D7}', '\u{0192}',
    '\u{00E1}', '\u{00ED}', '\u{00F3}', '\u{00FA}', '\u{00F1}', '\u{00D1}', '\u{00AA}', '\u{00BA}',
    '\u{00BF}', '\u{00AE}', '\u{00AC}', '\u{00BD}', '\u{00BC}', '\u{00A1}', '\u{00AB}', '\u{00BB}',
    '\u{2591}', '\u{2592}', '\u{2593}', '\u{2502}', '\u{2524}', '\u{00C1}', '\u{00C2}', '\u{00C0}',
    '\u{00A9}', '\u{2563}', '\u{2551}', '\u{2557}', '\u{255D}', '\u{00A2}', '\u{00A5}', '\u{2510}',
    '\u{2514}', '\u{2534}', '\u{252C}', '\u{251C}', '\u{2500}', '\u{253C}', '\u{00E3}', '\u{00C3}',
    '\u{255A}', '\u{2554}', '\u{2569}', '\u{2566}', '\u{2560}', '\u{2550}', '\u{256C}', '\u{00A4}',
    '\u{00F0}', '\u{00D0}', '\u{00CA}', '\u{00CB}', '\u{00C8}', '\u{20AC}', '\u{00CD}', '\u{00CE}',
    '\u{00CF}', '\u{2518}', '\u{250C}', '\u{2588}', '\u{2584}', '\u{00A6}', '\u{00CC}', '\u{2580}',
    '\u{00D3}', '\u{00DF}', '\u{00D4}', '\u{00D2}', '\u{00F5}', '\u{00D5}', '\u{00B5}', '\u{00FE}',
    '\u{00DE}', '\u{00DA}', '\u{00DB}', '\u{00D9}', '\u{00FD}', '\u{00DD}', '\u{00AF}', '\u{00B4}',
    '\u{00AD}', '\u{00B1}', '\u{2017}', '\u{00BE}', '\u{00B6}', '\u{00A7}', '\u{00F7}', '\u{00B8}',
    '\u{00B0}', '\u{00A8}', '\u{00B7}', '\u{00B9}', '\u{00B3}', '\u{00B2}', '\u{25A0}', '\u{00A0}',
];

fn ibm858_char(b: u8) -> char {
    match b.checked_sub(0x80) {
        Some(ix) => IBM858_HIGH[usize::from(ix)],
        None => char::from(b),
    }
}

fn ibm858_byte(c: char) -> u8 {
    if c.is_ascii() {
        return c as u8;
    }
    IBM858_HIGH
        .iter()
        .position(|&high| high == c)
        .and_then(|ix| u8::try_from(ix + 0x80).ok())
        .unwrap_or(b'?')
}

/// Resolves encoding names appearing in option values.
pub trait EncodingResolver {
    /// Returns the encoding for an already lower-cased name.
    fn resolve(&self, name: &str) -> Option<Encoding>;
}

/// Resolver for the built-in option names (`utf8`, `mac`, `latin1`, ...).
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinEncodings;

impl EncodingResolver for BuiltinEncodings {
    fn resolve(&self, name: &str) -> Option<Encoding> {
        Encoding::ALL
            .iter()
            .copied()
            .find(|enc| enc.opt_name().eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_builtin_names() {
        let resolver = BuiltinEncodings;
        assert_eq!(resolver.resolve("mac"), Some(Encoding::MacRoman));
        assert_eq!(resolver.resolve("utf16le"), Some(Encoding::Utf16Le));
        assert_eq!(resolver.resolve("ebcdic"), None);
    }

    #[test]
    fn test_ids_are_positional() {
        for (ix, enc) in Encoding::ALL.iter().enumerate() {
            assert_eq!(*enc as usize, ix);
            assert_eq!(Encoding::from_word(ix as u64), Some(*enc));
        }
        assert_eq!(Encoding::from_word(14), None);
    }

    #[test]
    fn test_encode_single_byte() {
        assert_eq!(Encoding::Ascii.encode("a\u{e9}"), b"a?".to_vec());
        assert_eq!(Encoding::Latin1.encode("a\u{e9}"), vec![b'a', 0xE9]);
        assert_eq!(Encoding::Utf16Le.encode("a"), vec![b'a', 0]);
        assert_eq!(Encoding::Utf16Be.encode("a"), vec![0, b'a']);
    }

    #[test]
    fn test_decode() {
        assert_eq!(Encoding::Latin1.decode(&[b'a', 0xE9]), "a\u{e9}");
        assert_eq!(Encoding::Utf16.decode(&[0xFF, 0xFE, b'x', 0]), "x");
        assert_eq!(Encoding::Utf8.decode("wrap: 0".as_bytes()), "wrap: 0");
    }

    #[test]
    fn test_legacy_code_pages() {
        assert_eq!(Encoding::Win1252.decode(&[b'a', 0x80]), "a\u{20AC}");
        assert_eq!(Encoding::Win1252.encode("\u{20AC}5"), vec![0x80, b'5']);
        assert_eq!(Encoding::Latin0.encode("\u{20AC}"), vec![0xA4]);
        assert_eq!(Encoding::Latin0.decode(&[0xA4]), "\u{20AC}");
        assert_eq!(Encoding::MacRoman.encode("caf\u{e9}"), b"caf\x8E".to_vec());
        assert_eq!(Encoding::MacRoman.decode(b"caf\x8E"), "caf\u{e9}");
    }

    #[test]
    fn test_ibm858() {
        assert_eq!(Encoding::Ibm858.encode("\u{e9}\u{20AC}x"), vec![0x82, 0xD5, b'x']);
        assert_eq!(Encoding::Ibm858.decode(&[0x82, 0xD5, b'x']), "\u{e9}\u{20AC}x");
        assert_eq!(Encoding::Ibm858.encode("\u{0131}"), b"?".to_vec());
        for b in 0x80..=0xFFu8 {
            assert_eq!(ibm858_byte(ibm858_char(b)), b);
        }
    }

    #[test]
    fn test_asian_encodings() {
        assert_eq!(Encoding::ShiftJis.encode("\u{3042}"), vec![0x82, 0xA0]);
        assert_eq!(Encoding::ShiftJis.decode(&[0x82, 0xA0]), "\u{3042}");
        assert_eq!(Encoding::Big5.encode("\u{4E2D}"), vec![0xA4, 0xA4]);
        assert_eq!(Encoding::Big5.decode(&[0xA4, 0xA4]), "\u{4E2D}");
        let jis = Encoding::Iso2022.encode("x\u{3042}");
        assert_eq!(jis, b"x\x1B$B$\"\x1B(B".to_vec());
        assert_eq!(Encoding::Iso2022.decode(&jis), "x\u{3042}");
    }

    #[test]
    fn test_unmappable_characters_become_question_marks() {
        assert_eq!(Encoding::Win1252.encode("a\u{3042}b"), b"a?b".to_vec());
        assert_eq!(Encoding::ShiftJis.encode("\u{AC00}"), b"?".to_vec());
    }
}
