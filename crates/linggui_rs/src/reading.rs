//! Request and result types for a full reading.

use chrono::{Local, NaiveDate, Timelike};
use linggui_acupoint::AcupointResult;
use linggui_calendar::{DateInput, Pillars};

use crate::error::LingGuiError;

/// What to compute: a day and a clock hour.
///
/// `Default` is today at the current local hour, read once when resolved.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReadingRequest {
    /// The day; [`DateInput::Today`] reads the local clock.
    pub date: DateInput,
    /// Clock hour 0..=23; `None` reads the local clock.
    pub hour: Option<u32>,
}

impl ReadingRequest {
    pub fn new(date: impl Into<DateInput>, hour: u32) -> Self {
        Self {
            date: date.into(),
            hour: Some(hour),
        }
    }

    /// Resolve defaults against the local clock.
    pub fn resolve(&self) -> Result<(NaiveDate, u32), LingGuiError> {
        let now = Local::now();
        let date = match &self.date {
            DateInput::Today => now.date_naive(),
            other => other.resolve()?,
        };
        Ok((date, self.hour.unwrap_or_else(|| now.hour())))
    }
}

/// Both stem-branch pairs and the acupoint for one moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading {
    pub date: NaiveDate,
    pub hour: u32,
    pub pillars: Pillars,
    pub result: AcupointResult,
}
