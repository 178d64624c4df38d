//! Yang/yin day classification and the divisor it selects.

use linggui_calendar::Stem;

/// Day polarity from the parity of the day stem's index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// Even stem index (甲丙戊庚壬).
    Yang,
    /// Odd stem index (乙丁己辛癸).
    Yin,
}

impl Polarity {
    pub const fn of_day_stem(stem: Stem) -> Self {
        if stem.is_yang() { Self::Yang } else { Self::Yin }
    }

    /// Divisor for the remainder rule: 9 on yang days, 6 on yin days.
    pub const fn divisor(self) -> u8 {
        match self {
            Self::Yang => 9,
            Self::Yin => 6,
        }
    }

    /// Single-character label (阳 / 阴).
    pub const fn label(self) -> &'static str {
        match self {
            Self::Yang => "阳",
            Self::Yin => "阴",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "Yang",
            Self::Yin => "Yin",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linggui_calendar::ALL_STEMS;

    #[test]
    fn alternates_through_stems() {
        for s in ALL_STEMS {
            let p = Polarity::of_day_stem(s);
            if s.index() % 2 == 0 {
                assert_eq!(p, Polarity::Yang, "stem {s}");
            } else {
                assert_eq!(p, Polarity::Yin, "stem {s}");
            }
        }
    }

    #[test]
    fn divisors() {
        assert_eq!(Polarity::Yang.divisor(), 9);
        assert_eq!(Polarity::Yin.divisor(), 6);
    }
}
