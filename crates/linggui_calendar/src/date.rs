//! Date input normalization.
//!
//! Callers may name a day as "today", as a structured [`NaiveDate`], or as
//! `YYYY-MM-DD` text. [`DateInput::resolve`] is the single entry point that
//! turns each of these into a `NaiveDate` before any cycle arithmetic.

use chrono::{Local, NaiveDate};

use crate::error::CalendarError;

/// Format accepted for date text.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A caller-supplied day.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DateInput {
    /// The current local date, read when resolved.
    #[default]
    Today,
    /// An already structured date.
    Date(NaiveDate),
    /// Text in `YYYY-MM-DD` form.
    Text(String),
}

impl DateInput {
    /// Normalize to a structured date.
    pub fn resolve(&self) -> Result<NaiveDate, CalendarError> {
        match self {
            Self::Today => Ok(Local::now().date_naive()),
            Self::Date(d) => Ok(*d),
            Self::Text(s) => parse_date(s),
        }
    }
}

impl From<NaiveDate> for DateInput {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

impl From<&str> for DateInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for DateInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Option<NaiveDate>> for DateInput {
    fn from(d: Option<NaiveDate>) -> Self {
        d.map_or(Self::Today, Self::Date)
    }
}

/// Parse `YYYY-MM-DD` text.
///
/// The year must be exactly four digits; chrono's `%Y` alone would also take
/// short or signed years.
pub fn parse_date(s: &str) -> Result<NaiveDate, CalendarError> {
    let format_err = || CalendarError::Format(s.to_owned());
    match s.as_bytes().get(..5) {
        Some([y0, y1, y2, y3, b'-']) if [y0, y1, y2, y3].iter().all(|b| b.is_ascii_digit()) => {}
        _ => return Err(format_err()),
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| format_err())
}
