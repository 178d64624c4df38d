//! Sexagenary (stem-branch) calendar mapping.
//!
//! This crate provides:
//! - The 10 heavenly stems and 12 earthly branches as closed enums
//! - Stem-branch pairs and their position in the 60-step cycle
//! - Day stem-branch from a Gregorian date (epoch 2024-01-01 = 甲子)
//! - Double-hour slots and the hour stem-branch for a day stem
//!
//! All functions are pure lookups over constant tables.

pub mod branch;
pub mod date;
pub mod day;
pub mod error;
pub mod hour;
pub mod stem;
pub mod stem_branch;

use chrono::NaiveDate;

pub use branch::{ALL_BRANCHES, BRANCH_COUNT, Branch};
pub use date::{DATE_FORMAT, DateInput, parse_date};
pub use day::{
    EPOCH_DAYS_FROM_CE, EPOCH_YMD, day_stem_branch, day_stem_branch_for, days_since_epoch,
};
pub use error::{CalendarError, SymbolKind};
pub use hour::{DoubleHour, hour_stem_branch, hour_stem_branch_for_symbol, zi_hour_stem_base};
pub use stem::{ALL_STEMS, STEM_COUNT, Stem};
pub use stem_branch::{CYCLE_LEN, StemBranch};

/// Day and hour stem-branch pairs for one moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillars {
    /// Day stem-branch (日干支).
    pub day: StemBranch,
    /// Hour stem-branch (时干支).
    pub hour: StemBranch,
}

/// Day and hour pairs for a structured date and a clock hour in 0..=23.
pub fn pillars(date: NaiveDate, hour: u32) -> Result<Pillars, CalendarError> {
    let day = day_stem_branch(date);
    let hour = hour_stem_branch(day.stem, hour)?;
    Ok(Pillars { day, hour })
}

/// Day and hour pairs for any date input.
pub fn pillars_for(input: &DateInput, hour: u32) -> Result<Pillars, CalendarError> {
    pillars(input.resolve()?, hour)
}
