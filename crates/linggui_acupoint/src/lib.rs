//! Ling Gui Ba Fa (灵龟八法, "Mystical Turtle Eight Methods") acupoint selection.
//!
//! This crate provides:
//! - The four day/hour weight tables for stems and branches
//! - Yang/yin day classification and its divisor
//! - The remainder → acupoint table
//! - [`calculate_acupoint`], which combines them into an itemized result
//!
//! Inputs are the day and hour stem-branch pairs from `linggui_calendar`.

pub mod acupoint;
pub mod error;
pub mod polarity;
pub mod selector;
pub mod selector_types;
pub mod weights;

pub use acupoint::{ALL_ACUPOINTS, Acupoint, REMAINDER_TABLE};
pub use error::AcupointError;
pub use polarity::Polarity;
pub use selector::{calculate_acupoint, calculate_acupoint_from_text, normalized_remainder};
pub use selector_types::AcupointResult;
pub use weights::{
    WeightContext, branch_weight, day_branch_weight, day_stem_weight, hour_branch_weight,
    hour_stem_weight, pair_weights, stem_weight,
};
