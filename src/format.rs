//! Config File Format
//!
//! This module documents the configuration file format read by
//! [`Config::parse_file`](crate::Config::parse_file) and written by
//! [`Config::save_to_file`](crate::Config::save_to_file).
//!
//! # Overview
//!
//! A config file is a sequence of properties, one per line:
//!
//! ```text
//! // Lines starting with '/' or '#' are comments
//! # so is this one
//! indent: auto
//! indent-spaces: 4
//! wrap: 0
//! new-inline-tags: foo, bar
//! doctype: "-//W3C//DTD XHTML 1.1//EN"
//! ```
//!
//! **Rules**:
//! - The name runs up to the first `:` and is matched ignoring ASCII case.
//!   Whitespace around the name is not trimmed, so `wrap :` names `"wrap "`
//! - A line without `:` is skipped
//! - Lines that start with whitespace continue the previous property and
//!   are otherwise ignored, except by tag lists (below)
//! - Lines may end with `\n`, `\r\n` or a lone `\r`
//! - Names longer than 63 characters are cut at 63
//!
//! # Values
//!
//! Each option reads its value with one grammar. Leading spaces and tabs
//! are skipped by every grammar.
//!
//! | Grammar | Accepts | Example |
//! |---------|---------|---------|
//! | Integer | decimal digits; anything after them is ignored | `wrap: 72` |
//! | Picklist | one of the option's spellings, any case | `indent: auto` |
//! | String | rest of line, or text inside `'...'` / `"..."` | `alt-text: a picture` |
//! | Tag list | names separated by commas or whitespace | `new-pre-tags: listing, xmp` |
//! | Encoding | an encoding name | `char-encoding: latin1` |
//! | CSS prefix | a CSS1 class name; a `-` is appended | `css-prefix: tidy` |
//! | Doctype | a doctype keyword or a quoted public identifier | `doctype: strict` |
//!
//! ## Booleans
//!
//! Boolean options accept `yes`, `y`, `true`, `t`, `1` and `no`, `n`,
//! `false`, `f`, `0`. Yes/no/auto options also accept `auto`.
//!
//! ## Strings
//!
//! Runs of whitespace inside a string collapse to one space and leading
//! whitespace is dropped. A quoted value ends at its closing quote and the
//! rest of the line is ignored:
//!
//! ```text
//! alt-text:   a    picture      (stored as "a picture ")
//! alt-text: "a picture" ignored (stored as "a picture")
//! ```
//!
//! An empty string leaves the option without a value.
//!
//! ## Tag lists
//!
//! A tag list may continue on following lines as long as they start with
//! whitespace:
//!
//! ```text
//! new-blocklevel-tags: article, aside,
//!     details summary
//!     figure
//! wrap: 80
//! ```
//!
//! Each list replaces the tags previously declared for its kind.
//! `new-custom-tags` declares into the kind chosen by `custom-tags`.
//!
//! ## Encodings
//!
//! | Name | Encoding |
//! |------|----------|
//! | `raw` | bytes passed through |
//! | `ascii` | US-ASCII |
//! | `latin0` | ISO-8859-15 |
//! | `latin1` | ISO-8859-1 |
//! | `utf8` | UTF-8 |
//! | `iso2022` | ISO-2022 |
//! | `mac` | Mac Roman |
//! | `win1252` | Windows-1252 |
//! | `ibm858` | IBM-858 |
//! | `utf16le`, `utf16be`, `utf16` | UTF-16 |
//! | `big5` | Big5 |
//! | `shiftjis` | Shift_JIS |
//!
//! `char-encoding` sets both directions: the legacy single-byte encodings
//! (`mac`, `win1252`, `ibm858`, `latin0`) read as themselves and write
//! ASCII, `ascii` reads Latin-1 and writes ASCII, and everything else reads
//! and writes the same encoding.
//!
//! # Normalization
//!
//! After a file is read, dependent options are brought in line:
//!
//! - `enclose-block-text: yes` turns on `enclose-text`
//! - `indent: no` sets `indent-spaces` to 0
//! - `wrap: 0` disables wrapping
//! - `word-2000: yes` declares the inline tag `o:p`
//! - `input-xml: yes` turns off `output-xhtml` and turns on `output-xml`
//!   and `assume-xml-procins`
//! - `output-xhtml: yes` turns on `output-xml` and turns off upper-case
//!   tags and attributes
//! - `output-xml: yes` adds an XML declaration for output encodings other
//!   than ASCII, UTF-8, UTF-16 and raw; asks for a BOM with UTF-16 output;
//!   quotes ampersands; keeps optional tags
//!
//! # Saved Files
//!
//! Saving writes one `name: value` line per option that differs from its
//! default, in catalog order. Picklist options are written with their
//! canonical label, and a user doctype is written quoted:
//!
//! ```text
//! char-encoding: mac
//! doctype: "-//W3C//DTD HTML 4.01//EN"
//! input-encoding: mac
//! indent: auto
//! output-encoding: ascii
//! ```
//!
//! A free-text value that starts with a quote character is written inside
//! the other quote character, so it reads back unchanged.
//!
//! Lines end with the sequence chosen by `newline` and the file is encoded
//! with `output-encoding`. Characters that encoding cannot represent are
//! written as `?`.
