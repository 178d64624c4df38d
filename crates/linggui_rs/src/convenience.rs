use linggui_acupoint::{AcupointResult, calculate_acupoint};
use linggui_calendar::{DateInput, Pillars, StemBranch, pillars, pillars_for};
use tracing::debug;

use crate::error::LingGuiError;
use crate::reading::{Reading, ReadingRequest};

/// Day and hour stem-branch pairs for a date and a clock hour in 0..=23.
pub fn get_stem_branch(date: &DateInput, hour: u32) -> Result<Pillars, LingGuiError> {
    Ok(pillars_for(date, hour)?)
}

/// Acupoint for a day pair and an hour pair.
pub fn get_acupoint(day: StemBranch, hour: StemBranch) -> AcupointResult {
    calculate_acupoint(day, hour)
}

/// Acupoint for pairs given in two-character form (e.g. `"甲子"`).
///
/// A bad symbol comes back as [`LingGuiError::Calendar`], as from every other
/// entry point.
pub fn get_acupoint_from_text(day: &str, hour: &str) -> Result<AcupointResult, LingGuiError> {
    let day: StemBranch = day.parse()?;
    let hour: StemBranch = hour.parse()?;
    Ok(calculate_acupoint(day, hour))
}

/// Compute both pairs, then the acupoint, for one request.
pub fn reading(request: &ReadingRequest) -> Result<Reading, LingGuiError> {
    let (date, hour) = request.resolve()?;
    let p = pillars(date, hour)?;
    let result = calculate_acupoint(p.day, p.hour);
    debug!(
        %date,
        hour,
        day = %p.day,
        hour_pair = %p.hour,
        acupoint = result.acupoint.pinyin(),
        "reading"
    );
    Ok(Reading {
        date,
        hour,
        pillars: p,
        result,
    })
}
