//! Double hours (时辰) and the hour stem-branch (时干支).
//!
//! A day has 12 double hours. The Zi double hour straddles midnight
//! (23:00-00:59), so clock hours 23 and 0 both fall in slot 0. The stem of the
//! Zi hour is fixed by the day stem (甲己 start at 甲, 乙庚 at 丙, 丙辛 at 戊,
//! 丁壬 at 庚, 戊癸 at 壬) and advances one stem per double hour.

use tracing::trace;

use crate::branch::Branch;
use crate::error::CalendarError;
use crate::stem::Stem;
use crate::stem_branch::StemBranch;

/// One of the 12 two-hour periods of a day (0 = Zi hour, 11 = Hai hour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DoubleHour(u8);

impl DoubleHour {
    /// Slot for a clock hour in 0..=23.
    pub fn from_hour(hour: u32) -> Result<Self, CalendarError> {
        if hour > 23 {
            return Err(CalendarError::HourOutOfRange(hour));
        }
        let slot = if hour == 23 || hour == 0 {
            0
        } else {
            ((hour + 1) % 24) / 2
        };
        Ok(Self(slot as u8))
    }

    /// 0-based slot index.
    pub const fn slot(self) -> u8 {
        self.0
    }

    /// The branch naming this double hour; its index equals the slot.
    pub fn branch(self) -> Branch {
        Branch::from_index(self.0 as i64)
    }
}

/// Stem index of the Zi hour on a day with the given stem.
pub const fn zi_hour_stem_base(day_stem: Stem) -> u8 {
    match day_stem {
        Stem::Jia | Stem::Ji => 0,
        Stem::Yi | Stem::Geng => 2,
        Stem::Bing | Stem::Xin => 4,
        Stem::Ding | Stem::Ren => 6,
        Stem::Wu | Stem::Gui => 8,
    }
}

/// Hour stem-branch for a day stem and a clock hour in 0..=23.
pub fn hour_stem_branch(day_stem: Stem, hour: u32) -> Result<StemBranch, CalendarError> {
    let dh = DoubleHour::from_hour(hour)?;
    let base = zi_hour_stem_base(day_stem);
    let sb = StemBranch::new(
        Stem::from_index(base as i64 + dh.slot() as i64),
        dh.branch(),
    );
    trace!(
        %day_stem,
        hour,
        slot = dh.slot(),
        base,
        pair = %sb,
        double_hour = dh.branch().name(),
        "hour stem-branch"
    );
    Ok(sb)
}

/// Like [`hour_stem_branch`] but with the day stem given as text.
pub fn hour_stem_branch_for_symbol(
    day_stem: &str,
    hour: u32,
) -> Result<StemBranch, CalendarError> {
    hour_stem_branch(day_stem.parse()?, hour)
}
