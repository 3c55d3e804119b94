use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use std::fmt;

/// SMPP v3.4 Numbering Plan Indicator (Section 5.2.6)
///
/// Only `Unknown` and `IsdnTelephone` are ever produced by address
/// classification. The other values are listed so that a wire byte read
/// from a PDU can still be represented.
#[derive(TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NumberingPlanIndicator {
    #[default]
    Unknown = 0b00000000,
    /// ISDN (E163/E164)
    IsdnTelephone = 0b00000001,
    /// Data (X.121)
    Data = 0b00000011,
    /// Telex (F.69)
    Telex = 0b00000100,
    /// Land Mobile (E.212)
    LandMobile = 0b00000110,
    National = 0b00001000,
    Private = 0b00001001,
    Ermes = 0b00001010,
    Internet = 0b00001110,
    WapClientId = 0b00010010,
}

impl NumberingPlanIndicator {
    pub fn name(&self) -> &'static str {
        match self {
            NumberingPlanIndicator::Unknown => "unknown",
            NumberingPlanIndicator::IsdnTelephone => "ISDN/telephone",
            NumberingPlanIndicator::Data => "data",
            NumberingPlanIndicator::Telex => "telex",
            NumberingPlanIndicator::LandMobile => "land mobile",
            NumberingPlanIndicator::National => "national",
            NumberingPlanIndicator::Private => "private",
            NumberingPlanIndicator::Ermes => "ERMES",
            NumberingPlanIndicator::Internet => "internet (IP)",
            NumberingPlanIndicator::WapClientId => "WAP client id",
        }
    }
}

impl fmt::Display for NumberingPlanIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), u8::from(*self))
    }
}
