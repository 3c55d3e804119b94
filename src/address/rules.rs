// ABOUTME: Rule set deciding which address detectors run, with sender and recipient profiles
// ABOUTME: Deserializable from configuration; each rule is toggled independently and the order is fixed

use crate::error::{ClassifyError, ClassifyResult};
use serde::{Deserialize, Serialize};

/// Numbers with at most this many digits are treated as short codes
pub const DEFAULT_SHORT_CODE_MAX_LENGTH: usize = 5;

/// Enabled address rules and the short code length limit
///
/// The rules always run in the same order (alphanumeric, short code,
/// international) whatever the configuration says; the flags only switch
/// individual rules on or off.
///
/// # Example
///
/// ```rust
/// use smpp_addressing::address::RuleSet;
///
/// // Originator: alphanumeric sender ids and short codes are common
/// let sender = RuleSet::sender();
///
/// // Recipient: only genuine subscriber numbers are expected
/// let recipient = RuleSet::recipient();
///
/// // Custom rules
/// let custom = RuleSet::disabled()
///     .with_short_code(true)
///     .with_short_code_max_length(6);
///
/// assert!(sender.alphanumeric && !recipient.alphanumeric);
/// assert_eq!(custom.short_code_max_length, 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    /// Addresses containing anything but digits (after an optional `+`)
    /// become TON 5 / NPI 0
    pub alphanumeric: bool,

    /// All-digit addresses up to `short_code_max_length` digits become
    /// TON 3 / NPI 0
    pub short_code: bool,

    /// `+` followed by digits becomes TON 1 / NPI 1
    pub international: bool,

    /// Maximum digit count of a short code (default: 5)
    pub short_code_max_length: usize,
}

impl RuleSet {
    /// Profile for source addresses: every rule enabled
    pub fn sender() -> Self {
        Self {
            alphanumeric: true,
            short_code: true,
            international: true,
            short_code_max_length: DEFAULT_SHORT_CODE_MAX_LENGTH,
        }
    }

    /// Profile for destination addresses: only the international rule
    pub fn recipient() -> Self {
        Self {
            alphanumeric: false,
            short_code: false,
            international: true,
            short_code_max_length: DEFAULT_SHORT_CODE_MAX_LENGTH,
        }
    }

    /// No rule enabled; every non-empty address falls back to TON 0 / NPI 1
    pub fn disabled() -> Self {
        Self {
            alphanumeric: false,
            short_code: false,
            international: false,
            short_code_max_length: DEFAULT_SHORT_CODE_MAX_LENGTH,
        }
    }

    pub fn with_alphanumeric(mut self, enabled: bool) -> Self {
        self.alphanumeric = enabled;
        self
    }

    pub fn with_short_code(mut self, enabled: bool) -> Self {
        self.short_code = enabled;
        self
    }

    pub fn with_international(mut self, enabled: bool) -> Self {
        self.international = enabled;
        self
    }

    pub fn with_short_code_max_length(mut self, max_length: usize) -> Self {
        self.short_code_max_length = max_length;
        self
    }

    /// Check the rule set is usable
    ///
    /// A zero short code length would make the short code rule unreachable
    /// while still enabled, which is a configuration mistake.
    pub fn validate(&self) -> ClassifyResult<()> {
        if self.short_code && self.short_code_max_length == 0 {
            return Err(ClassifyError::InvalidConfig(
                "short_code_max_length must be at least 1 when the short code rule is enabled"
                    .to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::sender()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_set_profiles() {
        let sender = RuleSet::sender();
        assert!(sender.alphanumeric);
        assert!(sender.short_code);
        assert!(sender.international);
        assert_eq!(sender.short_code_max_length, 5);

        let recipient = RuleSet::recipient();
        assert!(!recipient.alphanumeric);
        assert!(!recipient.short_code);
        assert!(recipient.international);
    }

    #[test]
    fn test_rule_set_builder() {
        let rules = RuleSet::disabled()
            .with_alphanumeric(true)
            .with_short_code_max_length(8);

        assert!(rules.alphanumeric);
        assert!(!rules.short_code);
        assert!(!rules.international);
        assert_eq!(rules.short_code_max_length, 8);
    }

    #[test]
    fn test_rule_set_validation() {
        assert!(RuleSet::sender().validate().is_ok());
        assert!(
            RuleSet::sender()
                .with_short_code_max_length(0)
                .validate()
                .is_err()
        );
        // Unreachable length is harmless while the rule is off
        assert!(
            RuleSet::recipient()
                .with_short_code_max_length(0)
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn test_rule_set_partial_config() {
        let rules: RuleSet = serde_json::from_str(r#"{"short_code": false}"#).unwrap();
        assert_eq!(rules, RuleSet::sender().with_short_code(false));
    }
}
