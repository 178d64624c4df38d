//! Error types for acupoint selection.

use linggui_calendar::CalendarError;
use thiserror::Error;

/// Errors from acupoint selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AcupointError {
    /// Error from stem-branch parsing or calendar mapping.
    #[error("calendar error: {0}")]
    Calendar(#[from] CalendarError),
    /// Remainder outside the 1..=9 acupoint table.
    #[error("remainder {0} has no acupoint (expected 1-9)")]
    RemainderOutOfRange(u8),
}
