//! Stem-branch pairs (干支), one position of the 60-step sexagenary cycle.
//!
//! The stem and branch sub-cycles advance together and realign every 60 steps.
//! Only pairs whose stem and branch indices share parity occur in the cycle;
//! other combinations are still representable so externally supplied pairs
//! can be fed to lookups, but they have no cycle position.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::branch::Branch;
use crate::error::{CalendarError, SymbolKind};
use crate::stem::Stem;

/// Length of the sexagenary cycle.
pub const CYCLE_LEN: u8 = 60;

/// A (stem, branch) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StemBranch {
    pub stem: Stem,
    pub branch: Branch,
}

impl StemBranch {
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Pair at independent stem and branch offsets, each reduced modulo its cycle.
    pub fn from_indices(stem_index: i64, branch_index: i64) -> Self {
        Self {
            stem: Stem::from_index(stem_index),
            branch: Branch::from_index(branch_index),
        }
    }

    /// Pair at a position in the 60-step cycle (0 = 甲子, 59 = 癸亥).
    pub fn from_cycle_index(n: i64) -> Self {
        Self::from_indices(n, n)
    }

    /// 0-based position in the 60-step cycle, or `None` for a pair that never
    /// occurs (stem and branch of opposite parity, e.g. 甲丑).
    pub const fn cycle_index(self) -> Option<u8> {
        let s = self.stem.index() as i32;
        let b = self.branch.index() as i32;
        if (s - b) % 2 != 0 {
            return None;
        }
        // n ≡ s (mod 10), n ≡ b (mod 12)
        Some((6 * s - 5 * b).rem_euclid(CYCLE_LEN as i32) as u8)
    }
}

impl Display for StemBranch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.symbol(), self.branch.symbol())
    }
}

impl FromStr for StemBranch {
    type Err = CalendarError;

    /// Parse the two-character form, e.g. `"甲子"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(sc), Some(bc), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(CalendarError::invalid(SymbolKind::Pair, s));
        };
        let stem =
            Stem::from_symbol(sc).ok_or_else(|| CalendarError::invalid(SymbolKind::Stem, sc))?;
        let branch = Branch::from_symbol(bc)
            .ok_or_else(|| CalendarError::invalid(SymbolKind::Branch, bc))?;
        Ok(Self { stem, branch })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_index_round_trip() {
        for n in 0..CYCLE_LEN {
            let sb = StemBranch::from_cycle_index(n as i64);
            assert_eq!(sb.cycle_index(), Some(n), "pair {sb}");
        }
    }

    #[test]
    fn cycle_endpoints() {
        assert_eq!(StemBranch::from_cycle_index(0).to_string(), "甲子");
        assert_eq!(StemBranch::from_cycle_index(59).to_string(), "癸亥");
        assert_eq!(StemBranch::from_cycle_index(60).to_string(), "甲子");
        assert_eq!(StemBranch::from_cycle_index(-1).to_string(), "癸亥");
    }

    #[test]
    fn mismatched_parity_has_no_position() {
        let sb = StemBranch::new(Stem::Jia, Branch::Chou);
        assert_eq!(sb.cycle_index(), None);
    }

    #[test]
    fn parse_pair() {
        let sb: StemBranch = "丙寅".parse().unwrap();
        assert_eq!(sb, StemBranch::new(Stem::Bing, Branch::Yin));
        assert_eq!(sb.cycle_index(), Some(2));
    }

    #[test]
    fn parse_reports_offending_symbol() {
        assert_eq!(
            "甲甲".parse::<StemBranch>(),
            Err(CalendarError::InvalidSymbol {
                kind: SymbolKind::Branch,
                symbol: "甲".into()
            })
        );
        assert_eq!(
            "子子".parse::<StemBranch>(),
            Err(CalendarError::InvalidSymbol {
                kind: SymbolKind::Stem,
                symbol: "子".into()
            })
        );
        assert!(matches!(
            "甲子丑".parse::<StemBranch>(),
            Err(CalendarError::InvalidSymbol {
                kind: SymbolKind::Pair,
                ..
            })
        ));
    }
}
