//! Numerological weights (干支数) for stems and branches.
//!
//! A symbol's weight depends on whether it names the day or the hour, so there
//! are four tables. The values are traditional and follow no formula.

use linggui_calendar::{Branch, Stem, StemBranch};

/// Whether a symbol is read as part of the day pair or the hour pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeightContext {
    Day,
    Hour,
}

/// Day-stem weight: 甲己 10, 乙庚 9, 丁壬 8, 丙辛戊癸 7.
pub const fn day_stem_weight(stem: Stem) -> u8 {
    match stem {
        Stem::Jia | Stem::Ji => 10,
        Stem::Yi | Stem::Geng => 9,
        Stem::Ding | Stem::Ren => 8,
        Stem::Wu | Stem::Gui | Stem::Bing | Stem::Xin => 7,
    }
}

/// Day-branch weight: 辰戌丑未 10, 申酉 9, 寅卯 8, 巳午亥子 7.
pub const fn day_branch_weight(branch: Branch) -> u8 {
    match branch {
        Branch::Chen | Branch::Xu | Branch::Chou | Branch::Wei => 10,
        Branch::Shen | Branch::You => 9,
        Branch::Yin | Branch::Mao => 8,
        Branch::Si | Branch::Wu | Branch::Hai | Branch::Zi => 7,
    }
}

/// Hour-stem weight: 甲己 9, 乙庚 8, 丙辛 7, 丁壬 6, 戊癸 5.
pub const fn hour_stem_weight(stem: Stem) -> u8 {
    match stem {
        Stem::Jia | Stem::Ji => 9,
        Stem::Yi | Stem::Geng => 8,
        Stem::Bing | Stem::Xin => 7,
        Stem::Ding | Stem::Ren => 6,
        Stem::Wu | Stem::Gui => 5,
    }
}

/// Hour-branch weight: 子午 9, 丑未 8, 寅申 7, 卯酉 6, 辰戌 5, 巳亥 4.
pub const fn hour_branch_weight(branch: Branch) -> u8 {
    match branch {
        Branch::Zi | Branch::Wu => 9,
        Branch::Chou | Branch::Wei => 8,
        Branch::Yin | Branch::Shen => 7,
        Branch::Mao | Branch::You => 6,
        Branch::Chen | Branch::Xu => 5,
        Branch::Si | Branch::Hai => 4,
    }
}

/// Stem weight in the given context.
pub const fn stem_weight(stem: Stem, ctx: WeightContext) -> u8 {
    match ctx {
        WeightContext::Day => day_stem_weight(stem),
        WeightContext::Hour => hour_stem_weight(stem),
    }
}

/// Branch weight in the given context.
pub const fn branch_weight(branch: Branch, ctx: WeightContext) -> u8 {
    match ctx {
        WeightContext::Day => day_branch_weight(branch),
        WeightContext::Hour => hour_branch_weight(branch),
    }
}

/// (stem weight, branch weight) of a pair in the given context.
pub const fn pair_weights(sb: StemBranch, ctx: WeightContext) -> (u8, u8) {
    (stem_weight(sb.stem, ctx), branch_weight(sb.branch, ctx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use linggui_calendar::{ALL_BRANCHES, ALL_STEMS};

    #[test]
    fn day_stem_table() {
        let expected = [10, 9, 7, 8, 7, 10, 9, 7, 8, 7];
        for (s, w) in ALL_STEMS.iter().zip(expected) {
            assert_eq!(day_stem_weight(*s), w, "stem {s}");
        }
    }

    #[test]
    fn day_branch_table() {
        let expected = [7, 10, 8, 8, 10, 7, 7, 10, 9, 9, 10, 7];
        for (b, w) in ALL_BRANCHES.iter().zip(expected) {
            assert_eq!(day_branch_weight(*b), w, "branch {b}");
        }
    }

    #[test]
    fn hour_stem_table() {
        let expected = [9, 8, 7, 6, 5, 9, 8, 7, 6, 5];
        for (s, w) in ALL_STEMS.iter().zip(expected) {
            assert_eq!(hour_stem_weight(*s), w, "stem {s}");
        }
    }

    #[test]
    fn hour_branch_table() {
        let expected = [9, 8, 7, 6, 5, 4, 9, 8, 7, 6, 5, 4];
        for (b, w) in ALL_BRANCHES.iter().zip(expected) {
            assert_eq!(hour_branch_weight(*b), w, "branch {b}");
        }
    }

    #[test]
    fn bing_and_xin_agree_in_both_contexts() {
        assert_eq!(day_stem_weight(Stem::Bing), day_stem_weight(Stem::Xin));
        assert_eq!(hour_stem_weight(Stem::Bing), hour_stem_weight(Stem::Xin));
    }

    #[test]
    fn day_and_hour_tables_differ() {
        assert_ne!(
            stem_weight(Stem::Jia, WeightContext::Day),
            stem_weight(Stem::Jia, WeightContext::Hour)
        );
        assert_eq!(
            pair_weights(StemBranch::new(Stem::Jia, Branch::Zi), WeightContext::Day),
            (10, 7)
        );
        assert_eq!(
            pair_weights(StemBranch::new(Stem::Jia, Branch::Zi), WeightContext::Hour),
            (9, 9)
        );
    }
}
