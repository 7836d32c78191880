//! # JSON Output Formatting
//!
//! Byte-level JSON layout expected by the downstream training scripts:
//! records and their embedded strings use `, ` and `: ` separators with every
//! non-ASCII character escaped as `\uXXXX` (UTF-16, lowercase hex), while
//! `meta.json` is indented by four spaces and keeps UTF-8 as-is.

use std::io;

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};

use crate::error::Result;

/// Single-line formatter with spaced separators and ASCII-only output.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiFormatter;

impl Formatter for AsciiFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        for c in fragment.chars() {
            if matches!(c, ' '..='~') {
                writer.write_all(&[c as u8])?;
            } else {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

/// Serialize with [`AsciiFormatter`].
pub fn to_ascii_string<T: ?Sized + Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    value.serialize(&mut Serializer::with_formatter(&mut buf, AsciiFormatter))?;
    // Formatter output is pure ASCII.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Serialize pretty-printed with a four-space indent.
pub fn to_indented_string<T: ?Sized + Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    value.serialize(&mut Serializer::with_formatter(&mut buf, formatter))?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
