//! The eight confluent acupoints (八脉交会穴) and the remainder table.
//!
//! Remainders 1..=9 select a point. Two remainders (2 and 5) both select
//! Zhaohai, so the nine-entry table names eight distinct points.

use std::fmt::{Display, Formatter};

use crate::error::AcupointError;

/// The eight acupoints opened by the method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Acupoint {
    /// 申脉 (BL62).
    Shenmai,
    /// 照海 (KI6).
    Zhaohai,
    /// 外关 (TE5).
    Waiguan,
    /// 临泣 (GB41).
    Linqi,
    /// 公孙 (SP4).
    Gongsun,
    /// 后溪 (SI3).
    Houxi,
    /// 内关 (PC6).
    Neiguan,
    /// 列缺 (LU7).
    Lieque,
}

/// All eight acupoints.
pub const ALL_ACUPOINTS: [Acupoint; 8] = [
    Acupoint::Shenmai,
    Acupoint::Zhaohai,
    Acupoint::Waiguan,
    Acupoint::Linqi,
    Acupoint::Gongsun,
    Acupoint::Houxi,
    Acupoint::Neiguan,
    Acupoint::Lieque,
];

/// Acupoint by remainder; entry `i` is remainder `i + 1`.
pub const REMAINDER_TABLE: [Acupoint; 9] = [
    Acupoint::Shenmai,
    Acupoint::Zhaohai,
    Acupoint::Waiguan,
    Acupoint::Linqi,
    Acupoint::Zhaohai,
    Acupoint::Gongsun,
    Acupoint::Houxi,
    Acupoint::Neiguan,
    Acupoint::Lieque,
];

impl Acupoint {
    /// Chinese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shenmai => "申脉",
            Self::Zhaohai => "照海",
            Self::Waiguan => "外关",
            Self::Linqi => "临泣",
            Self::Gongsun => "公孙",
            Self::Houxi => "后溪",
            Self::Neiguan => "内关",
            Self::Lieque => "列缺",
        }
    }

    /// Pinyin name without tone marks.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Shenmai => "Shenmai",
            Self::Zhaohai => "Zhaohai",
            Self::Waiguan => "Waiguan",
            Self::Linqi => "Linqi",
            Self::Gongsun => "Gongsun",
            Self::Houxi => "Houxi",
            Self::Neiguan => "Neiguan",
            Self::Lieque => "Lieque",
        }
    }

    /// Acupoint for a remainder in 1..=9.
    pub fn from_remainder(remainder: u8) -> Result<Self, AcupointError> {
        match remainder {
            1..=9 => Ok(REMAINDER_TABLE[(remainder - 1) as usize]),
            _ => Err(AcupointError::RemainderOutOfRange(remainder)),
        }
    }
}

impl Display for Acupoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
