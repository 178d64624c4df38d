//! Integration tests for the linggui_rs convenience API.

use chrono::NaiveDate;
use linggui_rs::*;

#[test]
fn stem_branch_from_text_date() {
    let p = get_stem_branch(&DateInput::from("2024-01-01"), 0).unwrap();
    assert_eq!(p.day, StemBranch::new(Stem::Jia, Branch::Zi));
    assert_eq!(p.hour, StemBranch::new(Stem::Jia, Branch::Zi));
}

#[test]
fn stem_branch_from_structured_date() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
    let p = get_stem_branch(&DateInput::from(date), 23).unwrap();
    // 丙寅 day; 丙 → Zi hour stem 戊
    assert_eq!(p.day.to_string(), "丙寅");
    assert_eq!(p.hour.to_string(), "戊子");
}

#[test]
fn format_error_surfaces() {
    let err = get_stem_branch(&DateInput::from("2024-01-01T00:00"), 0).unwrap_err();
    assert!(matches!(err, LingGuiError::Calendar(CalendarError::Format(_))));
}

#[test]
fn range_error_surfaces() {
    let err = get_stem_branch(&DateInput::from("2024-01-01"), 24).unwrap_err();
    assert_eq!(err, LingGuiError::Calendar(CalendarError::HourOutOfRange(24)));
}

#[test]
fn invalid_symbol_surfaces() {
    let err = get_acupoint_from_text("甲子", "午午").unwrap_err();
    assert_eq!(
        err.as_calendar(),
        Some(&CalendarError::InvalidSymbol {
            kind: SymbolKind::Stem,
            symbol: "午".into()
        })
    );
}

#[test]
fn calendar_errors_share_one_variant() {
    let from_text = get_acupoint_from_text("甲X", "甲子").unwrap_err();
    assert_eq!(
        from_text,
        LingGuiError::Calendar(CalendarError::InvalidSymbol {
            kind: SymbolKind::Branch,
            symbol: "X".into()
        })
    );
    let from_date = get_stem_branch(&DateInput::from("24-01-01"), 0).unwrap_err();
    assert!(matches!(from_date, LingGuiError::Calendar(CalendarError::Format(_))));
}

#[test]
fn acupoint_for_epoch_midnight() {
    let p = get_stem_branch(&DateInput::from("2024-01-01"), 0).unwrap();
    let r = get_acupoint(p.day, p.hour);
    assert_eq!(r.total, 35);
    assert_eq!(r.polarity, Polarity::Yang);
    assert_eq!(r.divisor, 9);
    assert_eq!(r.remainder, 8);
    assert_eq!(r.acupoint, Acupoint::Neiguan);
}

#[test]
fn reading_combines_both_steps() {
    let req = ReadingRequest::new("2024-01-01", 0);
    let reading = reading(&req).unwrap();
    assert_eq!(reading.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    assert_eq!(reading.hour, 0);
    assert_eq!(reading.result.acupoint.name(), "内关");
    assert_eq!(reading.result.day, reading.pillars.day);
    assert_eq!(reading.result.hour, reading.pillars.hour);
}

#[test]
fn reading_pre_epoch() {
    // 2023-12-31 → 癸亥 day (7 + 7); 癸 → Zi stem 壬; 10:00 → slot 5 → 丁巳 (6 + 4)
    // total 24, yin → 24 % 6 = 0 → 6 → 公孙
    let r = reading(&ReadingRequest::new("2023-12-31", 10)).unwrap();
    assert_eq!(r.pillars.day.to_string(), "癸亥");
    assert_eq!(r.pillars.hour.to_string(), "丁巳");
    assert_eq!(r.result.total, 24);
    assert_eq!(r.result.remainder, 6);
    assert_eq!(r.result.acupoint, Acupoint::Gongsun);
}

#[test]
fn reading_with_defaults() {
    let r = reading(&ReadingRequest::default()).unwrap();
    assert!(r.hour < 24);
    assert!((1..=r.result.divisor).contains(&r.result.remainder));
}

#[test]
fn repeated_calls_agree() {
    let req = ReadingRequest::new("2025-07-04", 15);
    assert_eq!(reading(&req).unwrap(), reading(&req).unwrap());
}
