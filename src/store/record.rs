// src/store/record.rs

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// A stored entity: one identity field plus queryable named properties.
pub trait Record: Clone + Send + Sync + 'static {
    /// The identity field. Compared exactly, never trimmed or case-folded.
    fn id(&self) -> &str;

    /// Whether the property named `property` matches `value`.
    ///
    /// `property` arrives lowercased. Unknown names return `false`.
    fn matches_property(&self, property: &str, value: &FieldValue) -> bool;
}

/// Scalar used in property queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl FieldValue {
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Text(text) => Cow::Borrowed(text),
            other => Cow::Owned(other.to_string()),
        }
    }

    /// Integer view; text is parsed after trimming.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(n) => Some(*n),
            FieldValue::Float(f) if f.fract() == 0.0 => Some(*f as i64),
            FieldValue::Text(text) => text.trim().parse().ok(),
            _ => None,
        }
    }

    /// Float view; text is parsed after trimming.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(n) => Some(*n as f64),
            FieldValue::Float(f) => Some(*f),
            FieldValue::Text(text) => text.trim().parse().ok(),
            FieldValue::Bool(_) => None,
        }
    }

    /// Boolean view. Text is true only for a case-insensitive "true".
    pub fn as_bool(&self) -> bool {
        match self {
            FieldValue::Bool(b) => *b,
            FieldValue::Text(text) => text.trim().eq_ignore_ascii_case("true"),
            FieldValue::Integer(_) | FieldValue::Float(_) => false,
        }
    }

    /// Case-insensitive substring match against `haystack`.
    pub fn found_in(&self, haystack: &str) -> bool {
        contains_ignore_case(haystack, &self.as_text())
    }

    /// Exact textual equality, used for identity-like properties.
    pub fn equals_exactly(&self, text: &str) -> bool {
        self.as_text() == text
    }

    pub fn equals_ignore_case(&self, text: &str) -> bool {
        self.as_text().trim().eq_ignore_ascii_case(text.trim())
    }

    pub fn equals_integer(&self, n: i64) -> bool {
        self.as_i64() == Some(n)
    }

    pub fn equals_float(&self, f: f64) -> bool {
        self.as_f64() == Some(f)
    }

    pub fn equals_bool(&self, b: bool) -> bool {
        self.as_bool() == b
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Integer(n) => write!(f, "{n}"),
            FieldValue::Float(x) => write!(f, "{x}"),
            FieldValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Normalized free-text search term, or `None` when the query is absent or
/// blank (meaning "everything").
pub fn search_term(query: Option<&str>) -> Option<String> {
    query
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase)
}
