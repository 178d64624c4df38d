//! Plain-text rendering for terminal output.

use std::fmt::Write;

use linggui_rs::{
    ALL_BRANCHES, ALL_STEMS, AcupointResult, Pillars, WeightContext, branch_weight, stem_weight,
};

pub fn pillars(p: &Pillars) -> String {
    format!("日干支：{}\n时干支：{}\n", p.day, p.hour)
}

/// The itemized working behind an acupoint, one step per line.
pub fn working(r: &AcupointResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "灵龟八法：应开穴位 - {}", r.acupoint);
    let _ = writeln!(out, "计算过程：");
    let _ = writeln!(out, "日干（{}）：{}", r.day.stem, r.day_stem_weight);
    let _ = writeln!(out, "日支（{}）：{}", r.day.branch, r.day_branch_weight);
    let _ = writeln!(out, "时干（{}）：{}", r.hour.stem, r.hour_stem_weight);
    let _ = writeln!(out, "时支（{}）：{}", r.hour.branch, r.hour_branch_weight);
    let _ = writeln!(out, "总和：{}", r.total);
    let _ = writeln!(
        out,
        "{}日，除以{}，余数为{}",
        r.polarity.label(),
        r.divisor,
        r.remainder
    );
    let _ = writeln!(out, "对应穴位：{}", r.acupoint);
    out
}

pub fn weight_tables() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "干\t日\t时");
    for s in ALL_STEMS {
        let _ = writeln!(
            out,
            "{s}\t{}\t{}",
            stem_weight(s, WeightContext::Day),
            stem_weight(s, WeightContext::Hour)
        );
    }
    let _ = writeln!(out, "支\t日\t时");
    for b in ALL_BRANCHES {
        let _ = writeln!(
            out,
            "{b}\t{}\t{}",
            branch_weight(b, WeightContext::Day),
            branch_weight(b, WeightContext::Hour)
        );
    }
    out
}
