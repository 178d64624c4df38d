//! Acupoint selection (灵龟八法开穴).
//!
//! Sum the day weights of the day pair and the hour weights of the hour pair,
//! divide by 9 on a yang day or 6 on a yin day, and read the remainder
//! (0 counts as the divisor) from the acupoint table.

use linggui_calendar::StemBranch;
use tracing::debug;

use crate::acupoint::REMAINDER_TABLE;
use crate::error::AcupointError;
use crate::polarity::Polarity;
use crate::selector_types::AcupointResult;
use crate::weights::{WeightContext, pair_weights};

/// `total` modulo the polarity's divisor, mapped into 1..=divisor.
pub const fn normalized_remainder(total: u8, polarity: Polarity) -> u8 {
    let divisor = polarity.divisor();
    match total % divisor {
        0 => divisor,
        r => r,
    }
}

/// Select the acupoint for a day pair and an hour pair.
pub fn calculate_acupoint(day: StemBranch, hour: StemBranch) -> AcupointResult {
    let (day_stem_weight, day_branch_weight) = pair_weights(day, WeightContext::Day);
    let (hour_stem_weight, hour_branch_weight) = pair_weights(hour, WeightContext::Hour);
    let total = day_stem_weight + day_branch_weight + hour_stem_weight + hour_branch_weight;

    let polarity = Polarity::of_day_stem(day.stem);
    let divisor = polarity.divisor();
    let remainder = normalized_remainder(total, polarity);
    // remainder is in 1..=divisor and divisor <= 9
    let acupoint = REMAINDER_TABLE[(remainder - 1) as usize];

    debug!(
        %day,
        %hour,
        total,
        polarity = polarity.name(),
        divisor,
        remainder,
        acupoint = acupoint.pinyin(),
        "acupoint selected"
    );

    AcupointResult {
        day,
        hour,
        day_stem_weight,
        day_branch_weight,
        hour_stem_weight,
        hour_branch_weight,
        total,
        polarity,
        divisor,
        remainder,
        acupoint,
    }
}

/// Like [`calculate_acupoint`] with both pairs given in two-character form.
pub fn calculate_acupoint_from_text(
    day: &str,
    hour: &str,
) -> Result<AcupointResult, AcupointError> {
    let day: StemBranch = day.parse()?;
    let hour: StemBranch = hour.parse()?;
    Ok(calculate_acupoint(day, hour))
}
