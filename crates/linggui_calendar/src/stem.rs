//! Heavenly stems (天干), the 10-element sub-cycle.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::{CalendarError, SymbolKind};

/// The 10 heavenly stems starting from Jia (甲).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in cycle order (0 = Jia, 9 = Gui).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

/// Length of the stem cycle.
pub const STEM_COUNT: u8 = 10;

impl Stem {
    /// 0-based position in the stem cycle.
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Stem at any integer offset, reduced modulo 10 (negative offsets wrap).
    pub fn from_index(index: i64) -> Self {
        ALL_STEMS[index.rem_euclid(STEM_COUNT as i64) as usize]
    }

    /// The stem's character.
    pub const fn symbol(self) -> char {
        match self {
            Self::Jia => '甲',
            Self::Yi => '乙',
            Self::Bing => '丙',
            Self::Ding => '丁',
            Self::Wu => '戊',
            Self::Ji => '己',
            Self::Geng => '庚',
            Self::Xin => '辛',
            Self::Ren => '壬',
            Self::Gui => '癸',
        }
    }

    /// Pinyin name without tone marks.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "Jia",
            Self::Yi => "Yi",
            Self::Bing => "Bing",
            Self::Ding => "Ding",
            Self::Wu => "Wu",
            Self::Ji => "Ji",
            Self::Geng => "Geng",
            Self::Xin => "Xin",
            Self::Ren => "Ren",
            Self::Gui => "Gui",
        }
    }

    /// Look up a stem by its character.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        ALL_STEMS.iter().copied().find(|s| s.symbol() == symbol)
    }

    /// Even-indexed stems are yang.
    pub const fn is_yang(self) -> bool {
        self.index() % 2 == 0
    }
}

impl Display for Stem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Stem {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Self::from_symbol(c).ok_or_else(|| CalendarError::invalid(SymbolKind::Stem, s))
            }
            _ => Err(CalendarError::invalid(SymbolKind::Stem, s)),
        }
    }
}
