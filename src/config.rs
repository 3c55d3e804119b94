// ABOUTME: Addressing configuration holding the sender and recipient rule sets
// ABOUTME: Loaded from JSON with every switch optional; missing switches keep their profile defaults

use crate::address::{AddressClassifier, PhoneNumber, RuleSet};
use crate::error::ClassifyResult;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Rule sets and default numbers used when addressing an outgoing message
///
/// # Example
///
/// ```rust
/// use smpp_addressing::AddressingConfig;
///
/// let config = AddressingConfig::from_json(r#"{
///     "sender": { "alphanumeric": false },
///     "recipient": { "short_code": true, "short_code_max_length": 6 },
///     "default_from": "ACME"
/// }"#)?;
///
/// assert!(!config.sender.alphanumeric);
/// assert!(config.sender.short_code);
/// assert!(config.recipient.short_code);
/// assert!(!config.recipient.alphanumeric);
/// assert_eq!(config.default_from.as_ref().and_then(|p| p.number()), Some("ACME"));
/// assert!(config.default_to.is_none());
/// # Ok::<(), smpp_addressing::ClassifyError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawAddressingConfig")]
pub struct AddressingConfig {
    /// Rules for the source address (default: [`RuleSet::sender`])
    pub sender: RuleSet,

    /// Rules for destination addresses (default: [`RuleSet::recipient`])
    pub recipient: RuleSet,

    /// Sender used when a message does not name one
    pub default_from: Option<PhoneNumber>,

    /// Recipient used when a message has no recipients
    pub default_to: Option<PhoneNumber>,
}

impl AddressingConfig {
    /// Configuration with the given rule sets and no default numbers
    pub fn new(sender: RuleSet, recipient: RuleSet) -> Self {
        Self {
            sender,
            recipient,
            default_from: None,
            default_to: None,
        }
    }

    pub fn with_default_from(mut self, from: impl Into<PhoneNumber>) -> Self {
        self.default_from = Some(from.into());
        self
    }

    pub fn with_default_to(mut self, to: impl Into<PhoneNumber>) -> Self {
        self.default_to = Some(to.into());
        self
    }

    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> ClassifyResult<Self> {
        let config: AddressingConfig = serde_json::from_str(json)?;
        config.validate()?;

        debug!(
            "Loaded addressing configuration: sender {:?}, recipient {:?}",
            config.sender, config.recipient
        );

        Ok(config)
    }

    /// Validate both rule sets
    pub fn validate(&self) -> ClassifyResult<()> {
        self.sender.validate()?;
        self.recipient.validate()?;
        Ok(())
    }

    pub fn sender_classifier(&self) -> AddressClassifier {
        AddressClassifier::new(self.sender)
    }

    pub fn recipient_classifier(&self) -> AddressClassifier {
        AddressClassifier::new(self.recipient)
    }
}

impl Default for AddressingConfig {
    fn default() -> Self {
        Self::new(RuleSet::sender(), RuleSet::recipient())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawAddressingConfig {
    sender: RuleSetOverrides,
    recipient: RuleSetOverrides,
    default_from: Option<PhoneNumber>,
    default_to: Option<PhoneNumber>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RuleSetOverrides {
    alphanumeric: Option<bool>,
    short_code: Option<bool>,
    international: Option<bool>,
    short_code_max_length: Option<usize>,
}

impl RuleSetOverrides {
    fn apply(self, base: RuleSet) -> RuleSet {
        RuleSet {
            alphanumeric: self.alphanumeric.unwrap_or(base.alphanumeric),
            short_code: self.short_code.unwrap_or(base.short_code),
            international: self.international.unwrap_or(base.international),
            short_code_max_length: self
                .short_code_max_length
                .unwrap_or(base.short_code_max_length),
        }
    }
}

impl From<RawAddressingConfig> for AddressingConfig {
    fn from(raw: RawAddressingConfig) -> Self {
        Self {
            sender: raw.sender.apply(RuleSet::sender()),
            recipient: raw.recipient.apply(RuleSet::recipient()),
            default_from: raw.default_from,
            default_to: raw.default_to,
        }
    }
}
