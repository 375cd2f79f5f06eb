// SPDX-FileCopyrightText: 2026 Plexus Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reader and writer for the line-oriented `.properties` key/value format.
//!
//! Input bytes are ISO-8859-1: every byte maps to the char with the same code
//! point. Characters outside that range travel as `\uXXXX` UTF-16 escapes.
//!
//! Grammar summary:
//! - a logical line is `key=value`, `key: value` or `key value`;
//! - blank lines and lines starting with `#` or `!` are skipped;
//! - a line ending in an odd number of backslashes continues on the next one;
//! - `\t`, `\n`, `\r`, `\f` and `\uXXXX` are escapes, any other `\c` is `c`;
//! - later duplicates of a key replace earlier ones.

use std::collections::HashMap;
use std::io::{self, Write};

use thiserror::Error;

/// Unordered key/value mapping produced by the parser.
pub type PropertyMap = HashMap<String, String>;

/// Content-level errors. I/O errors are reported by the caller's reader.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PropertiesError {
    #[error("line {line}: malformed \\uXXXX escape")]
    MalformedUnicodeEscape { line: usize },

    #[error("line {line}: unpaired UTF-16 surrogate {unit:#06x}")]
    UnpairedSurrogate { line: usize, unit: u16 },
}

/// Decode ISO-8859-1 bytes. Infallible: every byte is a valid code point.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Parse already-decoded properties text.
pub fn parse_properties(text: &str) -> Result<PropertyMap, PropertiesError> {
    let mut map = PropertyMap::new();
    for (line_no, line) in logical_lines(text) {
        let (key, value) = split_key_value(&line);
        let key = unescape(key, line_no)?;
        let value = unescape(value, line_no)?;
        map.insert(key, value);
    }
    Ok(map)
}

/// Write `map` in properties format, one `key=value` line per entry.
///
/// Keys are sorted so output is deterministic. Everything outside printable
/// ASCII is written as `\uXXXX`, so the output is valid ISO-8859-1.
pub fn write_properties<W: Write>(map: &PropertyMap, mut writer: W) -> io::Result<()> {
    let mut keys: Vec<&String> = map.keys().collect();
    keys.sort();

    for key in keys {
        let mut line = String::new();
        escape_into(&mut line, key, true);
        line.push('=');
        escape_into(&mut line, &map[key], false);
        line.push('\n');
        writer.write_all(line.as_bytes())?;
    }
    writer.flush()
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

/// Split text into physical lines on `\n`, `\r` or `\r\n`.
fn physical_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                start = i + 1;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Join continuation lines and drop blanks and comments.
///
/// Each item carries the 1-based physical line number where it started.
/// Escapes other than the line-continuation backslash are left in place.
fn logical_lines(text: &str) -> Vec<(usize, Vec<char>)> {
    let mut out = Vec::new();
    let mut current: Vec<char> = Vec::new();
    let mut start_line = 0;
    let mut continuing = false;

    for (idx, raw) in physical_lines(text).into_iter().enumerate() {
        let line = raw.trim_start_matches(is_blank);

        if continuing {
            if line.is_empty() {
                // continuation into a blank line ends the logical line
                if !current.is_empty() {
                    out.push((start_line, std::mem::take(&mut current)));
                }
                continuing = false;
                continue;
            }
        } else {
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            start_line = idx + 1;
        }

        let trailing = line.chars().rev().take_while(|&c| c == '\\').count();
        if trailing % 2 == 1 {
            current.extend(line[..line.len() - 1].chars());
            continuing = true;
        } else {
            current.extend(line.chars());
            out.push((start_line, std::mem::take(&mut current)));
            continuing = false;
        }
    }

    if continuing && !current.is_empty() {
        out.push((start_line, current));
    }
    out
}

/// Split a logical line into raw (still escaped) key and value.
fn split_key_value(line: &[char]) -> (&[char], &[char]) {
    let len = line.len();
    let mut key_len = 0;
    let mut value_start = len;
    let mut has_separator = false;
    let mut preceding_backslash = false;

    while key_len < len {
        let c = line[key_len];
        if !preceding_backslash {
            if c == '=' || c == ':' {
                value_start = key_len + 1;
                has_separator = true;
                break;
            }
            if is_blank(c) {
                value_start = key_len + 1;
                break;
            }
        }
        preceding_backslash = c == '\\' && !preceding_backslash;
        key_len += 1;
    }

    while value_start < len {
        let c = line[value_start];
        if !is_blank(c) {
            if !has_separator && (c == '=' || c == ':') {
                has_separator = true;
            } else {
                break;
            }
        }
        value_start += 1;
    }

    (&line[..key_len], &line[value_start.min(len)..])
}

fn unescape(raw: &[char], line: usize) -> Result<String, PropertiesError> {
    let mut out = String::with_capacity(raw.len());
    let mut pending_high: Option<u16> = None;
    let mut chars = raw.iter().copied();

    while let Some(c) = chars.next() {
        let decoded = if c == '\\' {
            match chars.next() {
                Some('u') => {
                    let mut unit: u16 = 0;
                    for _ in 0..4 {
                        let digit = chars
                            .next()
                            .and_then(|d| d.to_digit(16))
                            .ok_or(PropertiesError::MalformedUnicodeEscape { line })?;
                        unit = (unit << 4) | digit as u16;
                    }
                    Unit::Utf16(unit)
                }
                Some('t') => Unit::Char('\t'),
                Some('n') => Unit::Char('\n'),
                Some('r') => Unit::Char('\r'),
                Some('f') => Unit::Char('\x0c'),
                Some(other) => Unit::Char(other),
                None => break,
            }
        } else {
            Unit::Char(c)
        };

        match decoded {
            Unit::Utf16(unit) if (0xD800..0xDC00).contains(&unit) => {
                if let Some(high) = pending_high {
                    return Err(PropertiesError::UnpairedSurrogate { line, unit: high });
                }
                pending_high = Some(unit);
            }
            Unit::Utf16(unit) if (0xDC00..0xE000).contains(&unit) => {
                let high = pending_high
                    .take()
                    .ok_or(PropertiesError::UnpairedSurrogate { line, unit })?;
                let code =
                    0x10000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(unit) - 0xDC00);
                // both halves were range-checked, so the code point is valid
                out.extend(char::from_u32(code));
            }
            other => {
                if let Some(high) = pending_high {
                    return Err(PropertiesError::UnpairedSurrogate { line, unit: high });
                }
                match other {
                    Unit::Char(ch) => out.push(ch),
                    Unit::Utf16(unit) => out.extend(char::from_u32(u32::from(unit))),
                }
            }
        }
    }

    if let Some(high) = pending_high {
        return Err(PropertiesError::UnpairedSurrogate { line, unit: high });
    }
    Ok(out)
}

enum Unit {
    Char(char),
    Utf16(u16),
}

fn escape_into(out: &mut String, s: &str, is_key: bool) {
    for (i, c) in s.chars().enumerate() {
        match c {
            '\\' => out.push_str("\\\\"),
            ' ' if i == 0 || is_key => out.push_str("\\ "),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\x0c' => out.push_str("\\f"),
            '=' | ':' | '#' | '!' => {
                out.push('\\');
                out.push(c);
            }
            ' '..='~' => out.push(c),
            _ => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    out.push_str(&format!("\\u{:04X}", unit));
                }
            }
        }
    }
}
