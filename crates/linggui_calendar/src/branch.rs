//! Earthly branches (地支), the 12-element sub-cycle.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::{CalendarError, SymbolKind};

/// The 12 earthly branches starting from Zi (子).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in cycle order (0 = Zi, 11 = Hai).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

/// Length of the branch cycle.
pub const BRANCH_COUNT: u8 = 12;

impl Branch {
    /// 0-based position in the branch cycle.
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Branch at any integer offset, reduced modulo 12 (negative offsets wrap).
    pub fn from_index(index: i64) -> Self {
        ALL_BRANCHES[index.rem_euclid(BRANCH_COUNT as i64) as usize]
    }

    /// The branch's character.
    pub const fn symbol(self) -> char {
        match self {
            Self::Zi => '子',
            Self::Chou => '丑',
            Self::Yin => '寅',
            Self::Mao => '卯',
            Self::Chen => '辰',
            Self::Si => '巳',
            Self::Wu => '午',
            Self::Wei => '未',
            Self::Shen => '申',
            Self::You => '酉',
            Self::Xu => '戌',
            Self::Hai => '亥',
        }
    }

    /// Pinyin name without tone marks.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// Look up a branch by its character.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        ALL_BRANCHES.iter().copied().find(|b| b.symbol() == symbol)
    }
}

impl Display for Branch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Branch {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_symbol(c)
                .ok_or_else(|| CalendarError::invalid(SymbolKind::Branch, s)),
            _ => Err(CalendarError::invalid(SymbolKind::Branch, s)),
        }
    }
}
