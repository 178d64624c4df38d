//! Day stem-branch (日干支) from a Gregorian date.
//!
//! The epoch is 2024-01-01 = 甲子 (stem 0, branch 0). Every other day is a
//! whole-day offset from it; offsets before the epoch wrap with `rem_euclid`.

use chrono::{Datelike, NaiveDate};
use tracing::trace;

use crate::date::DateInput;
use crate::error::CalendarError;
use crate::stem_branch::StemBranch;

/// Reference epoch as (year, month, day): 2024-01-01.
pub const EPOCH_YMD: (i32, u32, u32) = (2024, 1, 1);

/// `num_days_from_ce` of the epoch date (0001-01-01 is day 1).
pub const EPOCH_DAYS_FROM_CE: i32 = 738_886;

/// Signed whole days from the epoch to `date`.
pub fn days_since_epoch(date: NaiveDate) -> i64 {
    date.num_days_from_ce() as i64 - EPOCH_DAYS_FROM_CE as i64
}

/// Day stem-branch for a structured date.
pub fn day_stem_branch(date: NaiveDate) -> StemBranch {
    let days = days_since_epoch(date);
    let sb = StemBranch::from_indices(days, days);
    trace!(
        %date,
        days,
        pair = %sb,
        stem = sb.stem.name(),
        branch = sb.branch.name(),
        "day stem-branch"
    );
    sb
}

/// Day stem-branch for any date input; text that fails to parse is an error.
pub fn day_stem_branch_for(input: &DateInput) -> Result<StemBranch, CalendarError> {
    Ok(day_stem_branch(input.resolve()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::Branch;
    use crate::stem::Stem;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn epoch_constant_matches_date() {
        let (y, m, d) = EPOCH_YMD;
        assert_eq!(ymd(y, m, d).num_days_from_ce(), EPOCH_DAYS_FROM_CE);
    }

    #[test]
    fn epoch_is_jiazi() {
        let sb = day_stem_branch(ymd(2024, 1, 1));
        assert_eq!(sb, StemBranch::new(Stem::Jia, Branch::Zi));
    }

    #[test]
    fn day_before_epoch_is_guihai() {
        assert_eq!(days_since_epoch(ymd(2023, 12, 31)), -1);
        assert_eq!(day_stem_branch(ymd(2023, 12, 31)).to_string(), "癸亥");
    }

    #[test]
    fn text_input() {
        let sb = day_stem_branch_for(&DateInput::from("2024-01-11")).unwrap();
        assert_eq!(sb.to_string(), "甲戌");
    }

    #[test]
    fn bad_text_is_format_error() {
        let err = day_stem_branch_for(&DateInput::from("2024-1-1x")).unwrap_err();
        assert!(matches!(err, CalendarError::Format(_)));
    }
}
