// ABOUTME: Phone number value types and TON/NPI address classification for SMPP source and destination fields
// ABOUTME: Exposes the rule set profiles and the classifier that applies them in fixed priority order

mod classifier;
mod rules;

pub use classifier::{AddressClassifier, classify_address};
pub use rules::{DEFAULT_SHORT_CODE_MAX_LENGTH, RuleSet};

use crate::datatypes::{NumberingPlanIndicator, TypeOfNumber};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A raw phone number as supplied by the caller
///
/// The value may be absent or empty. It is never reformatted: whatever the
/// caller wrote is what ends up in the addressed result.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneNumber {
    number: Option<String>,
}

impl PhoneNumber {
    /// Create a phone number holding `number`
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: Some(number.into()),
        }
    }

    /// Create a phone number with no value
    pub fn empty() -> Self {
        Self { number: None }
    }

    /// The raw value, if any
    pub fn number(&self) -> Option<&str> {
        self.number.as_deref()
    }

    /// Returns true if there is no value or the value is the empty string
    pub fn is_empty(&self) -> bool {
        self.number.as_deref().is_none_or(str::is_empty)
    }
}

impl From<&str> for PhoneNumber {
    fn from(number: &str) -> Self {
        Self::new(number)
    }
}

impl From<String> for PhoneNumber {
    fn from(number: String) -> Self {
        Self::new(number)
    }
}

impl From<Option<String>> for PhoneNumber {
    fn from(number: Option<String>) -> Self {
        Self { number }
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.number {
            Some(number) => write!(f, "{number}"),
            None => write!(f, "<none>"),
        }
    }
}

/// A phone number together with the TON/NPI pair a submit operation needs
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddressedPhoneNumber {
    number: Option<String>,
    ton: TypeOfNumber,
    npi: NumberingPlanIndicator,
}

impl AddressedPhoneNumber {
    /// Create a result from its three fields
    pub fn new(number: Option<String>, ton: TypeOfNumber, npi: NumberingPlanIndicator) -> Self {
        Self { number, ton, npi }
    }

    /// Result used for an empty value: no number, unknown TON, ISDN plan
    pub fn unaddressed() -> Self {
        Self::new(None, TypeOfNumber::Unknown, NumberingPlanIndicator::IsdnTelephone)
    }

    /// The number exactly as the caller supplied it
    pub fn number(&self) -> Option<&str> {
        self.number.as_deref()
    }

    /// Type of Number for the `*_addr_ton` field
    pub fn ton(&self) -> TypeOfNumber {
        self.ton
    }

    /// Numbering Plan Indicator for the `*_addr_npi` field
    pub fn npi(&self) -> NumberingPlanIndicator {
        self.npi
    }

    /// Consume the result and return the number for the PDU address field
    pub fn into_number(self) -> Option<String> {
        self.number
    }
}

impl fmt::Display for AddressedPhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.number {
            Some(number) => write!(f, "{number}")?,
            None => write!(f, "<none>")?,
        }
        write!(f, " [TON: {}, NPI: {}]", self.ton, self.npi)
    }
}
