use serde::{Deserialize, Serialize};
use std::fmt;

/// A single typed table cell.
///
/// Each cell is coerced on its own: two cells of the same column can end up
/// with different variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Cell text was an optionally signed decimal integer (e.g., "0025", "-7").
    Integer(i64),
    /// Any other cell text, with surrounding whitespace removed.
    Text(String),
}

impl CellValue {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            CellValue::Integer(n) => Some(*n),
            CellValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Integer(_) => None,
            CellValue::Text(s) => Some(s),
        }
    }
}

/// Integers render as bare decimal digits (sign kept), text renders as-is.
impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Integer(n) => write!(f, "{n}"),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Integer(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

/// Decide whether `s` is an integer literal with an optional leading sign.
///
/// Strings opening with a mixed double sign (`"+-"` or `"-+"`) are rejected
/// outright. Otherwise at most one leading `+`/`-` is stripped and the rest
/// must be one or more ASCII digits. Whitespace is not tolerated.
pub fn is_integer_text(s: &str) -> bool {
    if s.starts_with("+-") || s.starts_with("-+") {
        return false;
    }

    let digits = s
        .strip_prefix('-')
        .or_else(|| s.strip_prefix('+'))
        .unwrap_or(s);

    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Turn one cell's raw text into a [`CellValue`].
///
/// The classifier sees the untrimmed text; only the string fallback is
/// trimmed. Digit runs too large for `i64` stay text.
pub fn resolve_cell_text(raw: &str) -> CellValue {
    if is_integer_text(raw) {
        if let Ok(n) = raw.parse::<i64>() {
            return CellValue::Integer(n);
        }
    }
    CellValue::Text(raw.trim().to_string())
}
