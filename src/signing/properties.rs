// variant-rs: Android Build Variant Resolver
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Java `.properties` parser.
//!
//! ```text
//! bytes --ISO-8859-1--> text --> logical lines --> key/value --> unescape
//!                                 (# ! comments,    (= : ws)     (\t \n \r \f
//!                                  \ continuation)               \uXXXX \c)
//! ```
//!
//! Mirrors `java.util.Properties.load(InputStream)`, with stricter rules for
//! input that Java would silently accept: keys without a separator, empty
//! keys, duplicate keys, bad `\u` escapes and a continuation on the last line
//! are all rejected.

use std::collections::BTreeMap;

use thiserror::Error;

/// A syntax error with its 1-based line number.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("line {line}: {message}")]
pub struct PropertiesError {
    pub line: usize,
    pub message: String,
}

impl PropertiesError {
    fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    value: String,
    line: usize,
}

/// Parsed key-value pairs, sorted by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: BTreeMap<String, Entry>,
}

impl Properties {
    /// Parse raw file bytes. The file is read as ISO-8859-1, like
    /// `Properties.load(InputStream)` does.
    ///
    /// # Errors
    ///
    /// Returns a [`PropertiesError`] for the first malformed line.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PropertiesError> {
        Self::parse(&decode_latin1(bytes))
    }

    /// Parse already-decoded text.
    ///
    /// # Errors
    ///
    /// Returns a [`PropertiesError`] for the first malformed line.
    pub fn parse(content: &str) -> Result<Self, PropertiesError> {
        let normalized = content.replace("\r\n", "\n").replace('\r', "\n");
        let mut lines = normalized.lines().enumerate();
        let mut entries: BTreeMap<String, Entry> = BTreeMap::new();

        while let Some((index, raw)) = lines.next() {
            let line_no = index + 1;
            let trimmed = raw.trim_start_matches(is_whitespace);
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
                continue;
            }

            let mut logical = trimmed.to_string();
            while ends_with_continuation(&logical) {
                logical.pop();
                let Some((_, next)) = lines.next() else {
                    return Err(PropertiesError::new(
                        line_no,
                        "line continuation at end of file",
                    ));
                };
                logical.push_str(next.trim_start_matches(is_whitespace));
            }

            let (key, value) = split_entry(&logical, line_no)?;
            if let Some(previous) = entries.get(&key) {
                return Err(PropertiesError::new(
                    line_no,
                    format!(
                        "duplicate key '{key}' (first defined on line {})",
                        previous.line
                    ),
                ));
            }
            entries.insert(
                key,
                Entry {
                    value,
                    line: line_no,
                },
            );
        }

        Ok(Self { entries })
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|entry| entry.value.as_str())
    }

    /// Line on which `key` was defined.
    #[must_use]
    pub fn line_of(&self, key: &str) -> Option<usize> {
        self.entries.get(key).map(|entry| entry.line)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Every byte maps to the code point of the same value.
#[must_use]
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

const fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

fn split_entry(line: &str, line_no: usize) -> Result<(String, String), PropertiesError> {
    let chars: Vec<char> = line.chars().collect();
    let len = chars.len();

    let mut key_end = 0;
    while key_end < len {
        match chars[key_end] {
            '\\' => key_end += 2,
            '=' | ':' => break,
            c if is_whitespace(c) => break,
            _ => key_end += 1,
        }
    }
    let key_end = key_end.min(len);

    let mut value_start = key_end;
    while value_start < len && is_whitespace(chars[value_start]) {
        value_start += 1;
    }
    let has_separator_char = value_start < len && matches!(chars[value_start], '=' | ':');
    if has_separator_char {
        value_start += 1;
        while value_start < len && is_whitespace(chars[value_start]) {
            value_start += 1;
        }
    }

    let key = unescape(&chars[..key_end], line_no)?;
    if key.is_empty() {
        return Err(PropertiesError::new(line_no, "empty key"));
    }
    if !has_separator_char && value_start == len {
        return Err(PropertiesError::new(
            line_no,
            format!("missing separator after key '{key}'"),
        ));
    }

    let value = unescape(&chars[value_start..], line_no)?;
    Ok((key, value))
}

fn unescape(chars: &[char], line_no: usize) -> Result<String, PropertiesError> {
    let mut out = String::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        i += 1;
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(&escaped) = chars.get(i) else {
            break;
        };
        i += 1;
        match escaped {
            't' => out.push('\t'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            'f' => out.push('\x0c'),
            'u' => {
                let unit = read_hex4(chars, i, line_no)?;
                i += 4;
                if (0xD800..0xDC00).contains(&unit) {
                    let low = if chars.get(i) == Some(&'\\') && chars.get(i + 1) == Some(&'u') {
                        read_hex4(chars, i + 2, line_no)?
                    } else {
                        0
                    };
                    if !(0xDC00..0xE000).contains(&low) {
                        return Err(PropertiesError::new(
                            line_no,
                            format!("unpaired surrogate \\u{unit:04X}"),
                        ));
                    }
                    i += 6;
                    let code = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
                    out.push(char::from_u32(code).ok_or_else(|| {
                        PropertiesError::new(line_no, "invalid surrogate pair")
                    })?);
                } else {
                    out.push(char::from_u32(unit).ok_or_else(|| {
                        PropertiesError::new(line_no, format!("unpaired surrogate \\u{unit:04X}"))
                    })?);
                }
            }
            other => out.push(other),
        }
    }
    Ok(out)
}

fn read_hex4(chars: &[char], start: usize, line_no: usize) -> Result<u32, PropertiesError> {
    let digits: String = chars.iter().skip(start).take(4).collect();
    if digits.chars().count() != 4 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(PropertiesError::new(
            line_no,
            format!("malformed \\uXXXX escape '\\u{digits}'"),
        ));
    }
    u32::from_str_radix(&digits, 16)
        .map_err(|e| PropertiesError::new(line_no, format!("malformed \\uXXXX escape: {e}")))
}
