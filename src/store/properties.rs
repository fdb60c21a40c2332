// SPDX-License-Identifier: MPL-2.0
//! Reader and writer for the properties-style `.lng` format.
//!
//! One `key=value` entry per logical line. Characters outside printable
//! ASCII are written as `\uXXXX` escapes so the files stay 7-bit clean;
//! on input both escaped text and raw UTF-8 are accepted.
//!
//! # Format
//!
//! - `#` and `!` start a comment line.
//! - The key ends at the first unescaped `=`, `:` or whitespace.
//! - A line ending in an odd number of backslashes continues on the next.
//! - `\t`, `\n`, `\r`, `\f` and `\uXXXX` are escapes; any other `\c` is `c`.

use crate::error::{Error, Result};
use crate::i18n::TranslationMap;
use std::fmt::Write as _;

/// Decodes raw file bytes: UTF-8 when valid, ISO-8859-1 otherwise.
pub fn decode_bytes(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}

/// Parses properties text into an ordered map.
///
/// Later duplicates overwrite earlier values. `source` names the file in
/// error messages.
pub fn parse(text: &str, source: &str) -> Result<TranslationMap> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut map = TranslationMap::new();
    let mut lines = split_lines(text).enumerate();

    while let Some((index, line)) = lines.next() {
        let first = line.trim_start_matches(is_blank);
        if first.is_empty() || first.starts_with('#') || first.starts_with('!') {
            continue;
        }

        let mut logical = String::from(first);
        while ends_with_continuation(&logical) {
            logical.pop();
            match lines.next() {
                Some((_, next)) => logical.push_str(next.trim_start_matches(is_blank)),
                None => break,
            }
        }

        let (key, value) = split_entry(&logical);
        let key = unescape(key).map_err(|msg| malformed(source, index, msg))?;
        let value = unescape(value).map_err(|msg| malformed(source, index, msg))?;
        map.insert(key, value);
    }

    Ok(map)
}

/// Serializes a map, preceded by a timestamp comment.
pub fn render(map: &TranslationMap) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "#{}",
        chrono::Utc::now().format("%a %b %d %H:%M:%S UTC %Y")
    );
    for (key, value) in map.iter() {
        escape_into(&mut out, key, true);
        out.push('=');
        escape_into(&mut out, value, false);
        out.push('\n');
    }
    out
}

/// Natural lines, terminated by `\n`, `\r\n` or a bare `\r`.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\n', '\r']) {
            Some(end) => {
                let line = &rest[..end];
                let skip = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + skip..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{c}')
}

fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

fn malformed(source: &str, index: usize, msg: String) -> Error {
    Error::Malformed(format!("{} line {}: {}", source, index + 1, msg))
}

/// Splits a logical line into its raw (still escaped) key and value.
fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '=' || c == ':' || is_blank(c) {
            key_end = i;
            break;
        }
    }

    let key = &line[..key_end];
    let mut rest = line[key_end..].trim_start_matches(is_blank);
    if let Some(stripped) = rest.strip_prefix(['=', ':']) {
        rest = stripped.trim_start_matches(is_blank);
    }
    (key, rest)
}

fn unescape(raw: &str) -> std::result::Result<String, String> {
    let mut out = String::with_capacity(raw.len());
    let mut units: Vec<u16> = Vec::new();
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            flush_units(&mut units, &mut out);
            out.push(c);
            continue;
        }
        let Some(escape) = chars.next() else {
            break;
        };
        if escape == 'u' {
            let hex: String = chars.by_ref().take(4).collect();
            if hex.len() != 4 {
                return Err(format!("truncated \\u escape '\\u{}'", hex));
            }
            if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(format!("malformed \\uxxxx encoding '\\u{}'", hex));
            }
            let unit = u16::from_str_radix(&hex, 16)
                .map_err(|_| format!("malformed \\uxxxx encoding '\\u{}'", hex))?;
            units.push(unit);
            continue;
        }
        flush_units(&mut units, &mut out);
        out.push(match escape {
            't' => '\t',
            'n' => '\n',
            'r' => '\r',
            'f' => '\u{c}',
            other => other,
        });
    }
    flush_units(&mut units, &mut out);
    Ok(out)
}

/// Combines pending UTF-16 units; lone surrogates become U+FFFD.
fn flush_units(units: &mut Vec<u16>, out: &mut String) {
    if units.is_empty() {
        return;
    }
    out.extend(
        char::decode_utf16(units.drain(..)).map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER)),
    );
}

fn escape_into(out: &mut String, text: &str, is_key: bool) {
    for (i, c) in text.chars().enumerate() {
        match c {
            ' ' if is_key || i == 0 => out.push_str("\\ "),
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{c}' => out.push_str("\\f"),
            '=' | ':' | '#' | '!' => {
                out.push('\\');
                out.push(c);
            }
            ' '..='~' => out.push(c),
            _ => {
                let mut buf = [0u16; 2];
                for unit in c.encode_utf16(&mut buf) {
                    let _ = write!(out, "\\u{:04X}", unit);
                }
            }
        }
    }
}
