//! Error types for calendar mapping.

use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Which symbol table a lookup was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    /// One of the 10 heavenly stems.
    Stem,
    /// One of the 12 earthly branches.
    Branch,
    /// A two-character stem-branch pair.
    Pair,
}

impl Display for SymbolKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stem => f.write_str("stem"),
            Self::Branch => f.write_str("branch"),
            Self::Pair => f.write_str("stem-branch pair"),
        }
    }
}

/// Errors from date parsing, hour validation, or symbol lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// Date text did not match `YYYY-MM-DD`.
    #[error("date format error: expected YYYY-MM-DD, got {0:?}")]
    Format(String),
    /// Hour outside 0..=23.
    #[error("hour out of range: {0} (expected 0-23)")]
    HourOutOfRange(u32),
    /// Symbol not present in the stem or branch table.
    #[error("invalid {kind} symbol: {symbol:?}")]
    InvalidSymbol { kind: SymbolKind, symbol: String },
}

impl CalendarError {
    pub(crate) fn invalid(kind: SymbolKind, symbol: impl Into<String>) -> Self {
        Self::InvalidSymbol {
            kind,
            symbol: symbol.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            CalendarError::HourOutOfRange(24).to_string(),
            "hour out of range: 24 (expected 0-23)"
        );
        assert_eq!(
            CalendarError::invalid(SymbolKind::Stem, "X").to_string(),
            "invalid stem symbol: \"X\""
        );
        assert!(
            CalendarError::Format("2024/01/01".into())
                .to_string()
                .contains("2024/01/01")
        );
    }
}
