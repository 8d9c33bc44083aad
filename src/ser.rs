//! Configuration saving.
//!
//! This module provides the [`Serializer`] that writes a [`Config`] back out
//! in config-file form.
//!
//! ## Overview
//!
//! - **Only changes**: options still at their default are left out, so a
//!   saved file holds exactly what differs from a fresh session
//! - **Labels, not numbers**: picklist options are written with their
//!   canonical label (`auto`, `keep-last`, `mac`)
//! - **Reparseable**: reading the output into a fresh session gives the same
//!   values back
//!
//! Lines end with the `newline` option's sequence and the text is encoded
//! with `output-encoding`.
//!
//! ## Usage
//!
//! ```rust
//! use tidy_config::Config;
//!
//! let mut config = Config::new();
//! config.set_option("indent", "auto");
//! config.set_option("newline", "lf");
//! let text = config.to_config_string().unwrap();
//! assert!(text.starts_with("indent: auto\n"));
//! ```

use crate::config::Config;
use crate::de::expand_tilde;
use crate::encoding::Encoding;
use crate::error::{Error, Result};
use crate::options::{options, OptionDescriptor, OptionId, ParserKind, ValueKind};
use crate::picklist::{label_for, DoctypeMode, DOCTYPE_PICKS};
use crate::tags::TagRegistry;
use crate::value::OptionValue;
use log::info;
use std::borrow::Cow;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Writes the changed options of one session.
pub struct Serializer<'a, T: TagRegistry> {
    config: &'a Config<T>,
    output: String,
    newline: &'static str,
}

impl<'a, T: TagRegistry> Serializer<'a, T> {
    pub fn new(config: &'a Config<T>) -> Self {
        Serializer {
            config,
            output: String::new(),
            newline: config.get_newline().as_str(),
        }
    }

    /// The text written so far.
    pub fn into_inner(self) -> String {
        self.output
    }

    /// Writes every option that differs from its default.
    pub fn serialize(&mut self) -> Result<()> {
        for opt in options() {
            if opt.parser.is_none() {
                continue;
            }
            let value = self.config.value(opt.id);
            if opt.id == OptionId::Doctype {
                self.write_doctype(opt, value)?;
            } else if !value.is_default_for(opt) {
                self.write_value(opt, value)?;
            }
        }
        Ok(())
    }

    fn write_doctype(&mut self, opt: &OptionDescriptor, value: &OptionValue) -> Result<()> {
        let mode = self.config.get_int(OptionId::DoctypeMode);
        if mode == DoctypeMode::User as u64 {
            let fpi = value.as_str().unwrap_or("");
            self.write_option(opt.name, &format!("\"{}\"", fpi));
        } else if mode != OptionId::DoctypeMode.descriptor().default_word() {
            let label = label_for(DOCTYPE_PICKS, mode).ok_or_else(|| no_label(opt, mode))?;
            self.write_option(opt.name, label);
        }
        Ok(())
    }

    fn write_value(&mut self, opt: &OptionDescriptor, value: &OptionValue) -> Result<()> {
        if let Some(list) = opt.picklist {
            let word = value.as_word().unwrap_or(0);
            let label = label_for(list, word).ok_or_else(|| no_label(opt, word))?;
            self.write_option(opt.name, label);
            return Ok(());
        }
        match opt.kind {
            ValueKind::String => {
                let text = value.as_str().unwrap_or("");
                if matches!(opt.parser, Some(ParserKind::String)) {
                    self.write_option(opt.name, &quote_leading_quote(text));
                } else {
                    self.write_option(opt.name, text);
                }
            }
            ValueKind::Integer | ValueKind::Boolean => {
                self.write_option(opt.name, &value.to_string())
            }
        }
        Ok(())
    }

    fn write_option(&mut self, name: &str, value: &str) {
        self.output.push_str(name);
        self.output.push_str(": ");
        self.output.push_str(value);
        self.output.push_str(self.newline);
    }
}

/// Wraps text that opens with a quote character in the other quote, so
/// reading it back does not strip the first quoted run. Text holding both
/// quote characters is written as is.
fn quote_leading_quote(text: &str) -> Cow<'_, str> {
    if !text.starts_with(|c: char| c == '"' || c == '\'') {
        return Cow::Borrowed(text);
    }
    match ['\'', '"'].into_iter().find(|&q| !text.contains(q)) {
        Some(q) => Cow::Owned(format!("{}{}{}", q, text, q)),
        None => Cow::Borrowed(text),
    }
}

fn no_label(opt: &OptionDescriptor, word: u64) -> Error {
    Error::custom(format!("no label for value {} of option \"{}\"", word, opt.name))
}

impl<T: TagRegistry> Config<T> {
    /// The changed options in config-file form.
    pub fn to_config_string(&self) -> Result<String> {
        let mut serializer = Serializer::new(self);
        serializer.serialize()?;
        Ok(serializer.into_inner())
    }

    /// Writes the changed options, encoded with `output-encoding`.
    pub fn save_to_writer<W: Write>(&self, mut writer: W) -> Result<()> {
        let text = self.to_config_string()?;
        let enc = self
            .get_encoding(OptionId::OutCharEncoding)
            .unwrap_or(Encoding::Utf8);
        writer.write_all(&enc.encode(&text))?;
        writer.flush()?;
        Ok(())
    }

    /// Writes the changed options to a file, replacing its contents.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = expand_tilde(path.as_ref());
        let file = File::create(&path).map_err(|err| {
            Error::file_open(&path.display().to_string(), &err.to_string())
        })?;
        info!("saving configuration to {}", path.display());
        self.save_to_writer(io::BufWriter::new(file))
    }
}
