// src/codec/line.rs
//
// Delimited line format shared by every codec.
//
// Text fields are backslash-escaped so a value may contain the delimiter:
//   \  -> \\      ,  -> \,      LF -> \n      CR -> \r
// A line without backslashes is plain comma-separated text, which is what
// files written before escaping existed look like.

use std::borrow::Cow;
use std::str::FromStr;

use super::DecodeError;

pub const DELIMITER: char = ',';
const ESCAPE: char = '\\';

/// Placeholder some writers used for absent optional text.
const NULL_LITERAL: &str = "null";

pub fn escape_field(value: &str) -> Cow<'_, str> {
    if !value.contains(|c: char| matches!(c, ESCAPE | DELIMITER | '\n' | '\r')) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 4);
    for ch in value.chars() {
        match ch {
            ESCAPE => escaped.push_str("\\\\"),
            DELIMITER => escaped.push_str("\\,"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

/// Split on unescaped delimiters, unescaping as we go.
///
/// Trailing empty fields are kept: `"a,b,"` yields three fields.
/// Unknown escape sequences are kept literally.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars();

    while let Some(ch) = chars.next() {
        match ch {
            ESCAPE => match chars.next() {
                Some(DELIMITER) => current.push(DELIMITER),
                Some(ESCAPE) => current.push(ESCAPE),
                Some('n') => current.push('\n'),
                Some('r') => current.push('\r'),
                Some(other) => {
                    current.push(ESCAPE);
                    current.push(other);
                }
                None => current.push(ESCAPE),
            },
            DELIMITER => fields.push(std::mem::take(&mut current)),
            other => current.push(other),
        }
    }

    fields.push(current);
    fields
}

pub fn join_fields<I, S>(fields: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut line = String::new();
    for (index, field) in fields.into_iter().enumerate() {
        if index > 0 {
            line.push(DELIMITER);
        }
        line.push_str(&escape_field(field.as_ref()));
    }
    line
}

/// Positional view over one decoded line.
#[derive(Debug, Clone)]
pub struct Fields {
    values: Vec<String>,
    trim: bool,
}

impl Fields {
    pub fn parse(line: &str) -> Self {
        Self {
            values: split_fields(line),
            trim: false,
        }
    }

    /// Same as `parse`, but every accessor trims surrounding whitespace.
    pub fn parse_trimmed(line: &str) -> Self {
        Self {
            values: split_fields(line),
            trim: true,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Raw text at `index`, or `""` past the end.
    pub fn text(&self, index: usize) -> &str {
        let value = self.values.get(index).map(String::as_str).unwrap_or("");
        if self.trim {
            value.trim()
        } else {
            value
        }
    }

    /// Optional text: the `null` placeholder decodes as empty.
    pub fn optional(&self, index: usize) -> String {
        let value = self.text(index);
        if value == NULL_LITERAL {
            String::new()
        } else {
            value.to_string()
        }
    }

    pub fn required(&self, index: usize, field: &'static str) -> Result<String, DecodeError> {
        let value = self.text(index);
        if value.trim().is_empty() || value == NULL_LITERAL {
            return Err(DecodeError::MissingField(field));
        }
        Ok(value.to_string())
    }

    pub fn number<T: FromStr>(&self, index: usize, field: &'static str) -> Result<T, DecodeError> {
        let raw = self.text(index);
        raw.trim().parse::<T>().map_err(|_| DecodeError::InvalidNumber {
            field,
            value: raw.to_string(),
        })
    }
}
