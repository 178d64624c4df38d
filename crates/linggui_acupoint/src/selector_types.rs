//! Types for acupoint selection results.

use linggui_calendar::StemBranch;

use crate::acupoint::Acupoint;
use crate::polarity::Polarity;

/// Itemized outcome of one acupoint calculation.
///
/// Every intermediate value is kept so a caller can show the working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AcupointResult {
    /// Day stem-branch the calculation started from.
    pub day: StemBranch,
    /// Hour stem-branch the calculation started from.
    pub hour: StemBranch,
    /// Weight of the day stem (日干数).
    pub day_stem_weight: u8,
    /// Weight of the day branch (日支数).
    pub day_branch_weight: u8,
    /// Weight of the hour stem (时干数).
    pub hour_stem_weight: u8,
    /// Weight of the hour branch (时支数).
    pub hour_branch_weight: u8,
    /// Sum of the four weights.
    pub total: u8,
    /// Yang or yin day.
    pub polarity: Polarity,
    /// 9 on yang days, 6 on yin days.
    pub divisor: u8,
    /// `total mod divisor`, with 0 replaced by `divisor` (always 1..=divisor).
    pub remainder: u8,
    /// The selected point.
    pub acupoint: Acupoint,
}
