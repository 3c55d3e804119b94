use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use std::fmt;

/// SMPP v3.4 Type of Number (Section 5.2.5)
///
/// Carried in the `source_addr_ton` / `dest_addr_ton` fields. Carriers route
/// on this value rather than on the literal address, so it has to agree with
/// the shape of the address.
#[derive(TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TypeOfNumber {
    #[default]
    Unknown = 0b00000000,
    International = 0b00000001,
    National = 0b00000010,
    NetworkSpecific = 0b00000011,
    SubscriberNumber = 0b00000100,
    Alphanumeric = 0b00000101,
    Abbreviated = 0b00000110,
}

impl TypeOfNumber {
    /// Human-readable name, as used in logs
    pub fn name(&self) -> &'static str {
        match self {
            TypeOfNumber::Unknown => "unknown",
            TypeOfNumber::International => "international",
            TypeOfNumber::National => "national",
            TypeOfNumber::NetworkSpecific => "network specific",
            TypeOfNumber::SubscriberNumber => "subscriber number",
            TypeOfNumber::Alphanumeric => "alphanumeric",
            TypeOfNumber::Abbreviated => "abbreviated",
        }
    }
}

impl fmt::Display for TypeOfNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), u8::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ton_wire_values() {
        assert_eq!(u8::from(TypeOfNumber::Unknown), 0);
        assert_eq!(u8::from(TypeOfNumber::International), 1);
        assert_eq!(u8::from(TypeOfNumber::NetworkSpecific), 3);
        assert_eq!(u8::from(TypeOfNumber::Alphanumeric), 5);
        assert_eq!(u8::from(TypeOfNumber::Abbreviated), 6);
    }

    #[test]
    fn test_ton_from_wire() {
        assert_eq!(TypeOfNumber::try_from(1u8).ok(), Some(TypeOfNumber::International));
        assert_eq!(TypeOfNumber::try_from(5u8).ok(), Some(TypeOfNumber::Alphanumeric));
        assert!(TypeOfNumber::try_from(7u8).is_err());
    }

    #[test]
    fn test_ton_display() {
        assert_eq!(TypeOfNumber::Alphanumeric.to_string(), "alphanumeric (5)");
        assert_eq!(TypeOfNumber::default(), TypeOfNumber::Unknown);
    }
}
