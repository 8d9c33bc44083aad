//! Single-character lookahead over config text.
//!
//! [`CharCursor`] keeps the current character in `c`, with `None` standing
//! for end of stream. Characters pushed back with [`CharCursor::unget`] are
//! returned by later reads before the underlying source is consulted again;
//! the tag-list grammar needs two of them to hand a line break and the first
//! character of the next line back to the property loop.
//!
//! ```rust
//! use tidy_config::cursor::CharCursor;
//!
//! let mut cur = CharCursor::from_str("  wrap: 72");
//! assert_eq!(cur.skip_white(), Some('w'));
//! ```

/// True for space, tab, form feed and line-break characters.
#[inline]
pub fn is_white(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\u{000C}')
}

#[inline]
pub fn is_newline(c: char) -> bool {
    c == '\r' || c == '\n'
}

/// Character reader owned by exactly one parse operation.
pub struct CharCursor<'a> {
    source: Box<dyn Iterator<Item = char> + 'a>,
    pushback: Vec<char>,
    c: Option<char>,
}

impl<'a> CharCursor<'a> {
    /// Wraps a character source and primes the lookahead with its first
    /// character.
    pub fn new<I>(source: I) -> Self
    where
        I: Iterator<Item = char> + 'a,
    {
        let mut cursor = CharCursor {
            source: Box::new(source),
            pushback: Vec::new(),
            c: None,
        };
        cursor.c = cursor.read();
        cursor
    }

    /// Cursor over borrowed text.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &'a str) -> Self {
        Self::new(text.chars())
    }

    /// Cursor over owned text, such as a decoded file.
    pub fn from_string(text: String) -> CharCursor<'static> {
        let chars: Vec<char> = text.chars().collect();
        CharCursor::new(chars.into_iter())
    }

    fn read(&mut self) -> Option<char> {
        self.pushback.pop().or_else(|| self.source.next())
    }

    /// The current lookahead character.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.c
    }

    /// True once the lookahead has reached the end of the source.
    #[inline]
    pub fn at_end(&self) -> bool {
        self.c.is_none()
    }

    /// Moves to the next character. End of stream is sticky.
    pub fn advance(&mut self) -> Option<char> {
        if self.c.is_some() {
            self.c = self.read();
        }
        self.c
    }

    /// Skips spaces and tabs, stopping at a line break or end of stream.
    pub fn skip_white(&mut self) -> Option<char> {
        while let Some(c) = self.c {
            if is_white(c) && !is_newline(c) {
                self.c = self.read();
            } else {
                break;
            }
        }
        self.c
    }

    /// Pushes `c` back so the next read returns it. Pushes are read back in
    /// reverse order. The current lookahead is left untouched.
    pub fn unget(&mut self, c: char) {
        self.pushback.push(c);
    }

    /// Moves to the start of the next property.
    ///
    /// Skips the rest of the current line and its terminator (`\r`, `\n` or
    /// `\r\n`). A following line that starts with whitespace continues the
    /// gap between properties and is skipped the same way.
    pub fn next_property(&mut self) -> Option<char> {
        loop {
            while let Some(c) = self.c {
                if is_newline(c) {
                    break;
                }
                self.c = self.read();
            }

            if self.c == Some('\r') {
                self.c = self.read();
            }
            if self.c == Some('\n') {
                self.c = self.read();
            }

            match self.c {
                Some(c) if is_white(c) => continue,
                other => return other,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_of_stream_is_sticky() {
        let mut cur = CharCursor::from_str("a");
        assert_eq!(cur.current(), Some('a'));
        assert_eq!(cur.advance(), None);
        assert_eq!(cur.advance(), None);
        assert!(cur.at_end());
    }

    #[test]
    fn test_skip_white_stops_at_newline() {
        let mut cur = CharCursor::from_str(" \t\nx");
        assert_eq!(cur.skip_white(), Some('\n'));
    }

    #[test]
    fn test_next_property_handles_all_line_ends() {
        for text in ["a\nb", "a\rb", "a\r\nb"] {
            let mut cur = CharCursor::from_str(text);
            assert_eq!(cur.next_property(), Some('b'), "{:?}", text);
        }
    }

    #[test]
    fn test_next_property_absorbs_continuation_lines() {
        let mut cur = CharCursor::from_str("a: 1\n   more\n\t\n\nb: 2");
        assert_eq!(cur.next_property(), Some('b'));
    }

    #[test]
    fn test_next_property_at_end() {
        let mut cur = CharCursor::from_str("last line");
        assert_eq!(cur.next_property(), None);
    }

    #[test]
    fn test_unget_replays_in_reverse_order() {
        let mut cur = CharCursor::from_str("xyz");
        cur.advance();
        cur.unget('b');
        cur.unget('\n');
        assert_eq!(cur.current(), Some('y'));
        assert_eq!(cur.advance(), Some('\n'));
        assert_eq!(cur.advance(), Some('b'));
        assert_eq!(cur.advance(), Some('z'));
    }

    #[test]
    fn test_pushback_feeds_next_property() {
        // A tag list hands "\n" and the next line's first character back.
        let mut cur = CharCursor::from_str("x");
        cur.unget('d');
        cur.unget('\n');
        assert_eq!(cur.next_property(), Some('d'));
    }

    #[test]
    fn test_owned_source() {
        let mut cur = CharCursor::from_string("ab".to_string());
        assert_eq!(cur.current(), Some('a'));
        assert_eq!(cur.advance(), Some('b'));
        assert_eq!(cur.advance(), None);
        assert!(cur.at_end());
    }
}
