//! Unified error type for the convenience API.

use linggui_acupoint::AcupointError;
use linggui_calendar::CalendarError;
use thiserror::Error;

/// Errors from any step of a reading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LingGuiError {
    /// Date parsing, hour range, or symbol lookup failed.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
    /// Acupoint selection failed.
    #[error(transparent)]
    Acupoint(#[from] AcupointError),
}

impl LingGuiError {
    /// The underlying calendar error, whichever layer reported it.
    pub fn as_calendar(&self) -> Option<&CalendarError> {
        match self {
            Self::Calendar(e) | Self::Acupoint(AcupointError::Calendar(e)) => Some(e),
            _ => None,
        }
    }
}
