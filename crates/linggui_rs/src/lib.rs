//! Convenience wrapper for the Ling Gui Ba Fa engine.
//!
//! Exposes the two operations a presentation layer needs: the day/hour
//! stem-branch pairs for a moment, and the acupoint for a pair of pairs.
//! Nothing is cached; every call is a pure function of its arguments.
//!
//! # Quick start
//!
//! ```rust
//! use linggui_rs::*;
//!
//! let pillars = get_stem_branch(&DateInput::from("2024-01-01"), 0).unwrap();
//! assert_eq!(pillars.day.to_string(), "甲子");
//!
//! let result = get_acupoint(pillars.day, pillars.hour);
//! assert_eq!(result.acupoint.name(), "内关");
//! ```

pub mod convenience;
pub mod error;
pub mod reading;

pub use convenience::{get_acupoint, get_acupoint_from_text, get_stem_branch, reading};
pub use error::LingGuiError;
pub use reading::{Reading, ReadingRequest};

// Re-export engine types so callers don't need to depend on the inner crates.
pub use linggui_acupoint::{
    ALL_ACUPOINTS, Acupoint, AcupointError, AcupointResult, Polarity, WeightContext,
    branch_weight, stem_weight,
};
pub use linggui_calendar::{
    ALL_BRANCHES, ALL_STEMS, Branch, CalendarError, DateInput, DoubleHour, Pillars, Stem,
    StemBranch, SymbolKind,
};
