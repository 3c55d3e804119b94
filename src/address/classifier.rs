// ABOUTME: TON/NPI classification of raw phone numbers using a fixed-priority rule chain
// ABOUTME: Alphanumeric beats short code, short code beats international, anything left falls back to TON 0 / NPI 1

use super::{AddressedPhoneNumber, PhoneNumber, RuleSet};
use crate::datatypes::{NumberingPlanIndicator, TypeOfNumber};
use crate::error::{ClassifyError, ClassifyResult};
use tracing::{debug, trace, warn};

/// Classify a phone number into the TON/NPI pair for an SMPP address field
///
/// `phone_number` must be supplied; `None` is a caller bug and is reported
/// as [`ClassifyError::MissingPhoneNumber`] rather than being defaulted. A
/// phone number holding no value (or an empty string) yields
/// [`AddressedPhoneNumber::unaddressed`].
///
/// Rules are evaluated in this order, skipping disabled ones, and the first
/// match wins:
///
/// 1. alphanumeric: after stripping one leading `+`, nothing is left or
///    something other than an ASCII digit is present → `Alphanumeric` / `Unknown`
/// 2. short code: after stripping one leading `+`, at most
///    `short_code_max_length` digits → `NetworkSpecific` / `Unknown`
/// 3. international: `+` then digits → `International` / `IsdnTelephone`
///
/// Otherwise the result is `Unknown` / `IsdnTelephone`. The number is always
/// carried over verbatim.
///
/// ```rust
/// use smpp_addressing::address::{PhoneNumber, RuleSet, classify_address};
/// use smpp_addressing::datatypes::{NumberingPlanIndicator, TypeOfNumber};
///
/// let addressed = classify_address(Some(&PhoneNumber::new("+618")), &RuleSet::sender())?;
/// assert_eq!(addressed.ton(), TypeOfNumber::NetworkSpecific);
/// assert_eq!(addressed.npi(), NumberingPlanIndicator::Unknown);
/// # Ok::<(), smpp_addressing::ClassifyError>(())
/// ```
pub fn classify_address(
    phone_number: Option<&PhoneNumber>,
    rules: &RuleSet,
) -> ClassifyResult<AddressedPhoneNumber> {
    let Some(phone_number) = phone_number else {
        warn!("Rejecting address classification without a phone number");
        return Err(ClassifyError::MissingPhoneNumber);
    };

    let number = match phone_number.number() {
        Some(number) if !number.is_empty() => number,
        _ => {
            trace!("Empty phone number, using default addressing");
            return Ok(AddressedPhoneNumber::unaddressed());
        }
    };

    let (ton, npi) = detect(number, rules);
    debug!("Classified {:?} as TON {}, NPI {}", number, ton, npi);

    Ok(AddressedPhoneNumber::new(Some(number.to_string()), ton, npi))
}

fn detect(number: &str, rules: &RuleSet) -> (TypeOfNumber, NumberingPlanIndicator) {
    let digits = number.strip_prefix('+').unwrap_or(number);
    let all_digits = !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit());

    if rules.alphanumeric {
        trace!("Checking alphanumeric rule");
        if !all_digits {
            return (TypeOfNumber::Alphanumeric, NumberingPlanIndicator::Unknown);
        }
    }

    if rules.short_code {
        trace!(
            "Checking short code rule (max {} digits)",
            rules.short_code_max_length
        );
        if all_digits && digits.len() <= rules.short_code_max_length {
            return (TypeOfNumber::NetworkSpecific, NumberingPlanIndicator::Unknown);
        }
    }

    if rules.international {
        trace!("Checking international rule");
        if all_digits && number.starts_with('+') {
            return (
                TypeOfNumber::International,
                NumberingPlanIndicator::IsdnTelephone,
            );
        }
    }

    (TypeOfNumber::Unknown, NumberingPlanIndicator::IsdnTelephone)
}

/// Address classifier bound to one rule set
///
/// Holds its [`RuleSet`] by value and never changes it; to reconfigure,
/// build a new classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressClassifier {
    rules: RuleSet,
}

impl AddressClassifier {
    /// Create a classifier applying `rules`
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Classifier for source addresses
    pub fn sender() -> Self {
        Self::new(RuleSet::sender())
    }

    /// Classifier for destination addresses
    pub fn recipient() -> Self {
        Self::new(RuleSet::recipient())
    }

    /// The rule set this classifier applies
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Classify `phone_number` with this classifier's rules, see [`classify_address`]
    pub fn classify(
        &self,
        phone_number: Option<&PhoneNumber>,
    ) -> ClassifyResult<AddressedPhoneNumber> {
        classify_address(phone_number, &self.rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sender(number: &str) -> AddressedPhoneNumber {
        AddressClassifier::sender()
            .classify(Some(&PhoneNumber::new(number)))
            .unwrap()
    }

    fn assert_addressed(
        result: &AddressedPhoneNumber,
        number: &str,
        ton: TypeOfNumber,
        npi: NumberingPlanIndicator,
    ) {
        assert_eq!(result.number(), Some(number));
        assert_eq!(result.ton(), ton);
        assert_eq!(result.npi(), npi);
    }

    #[test]
    fn test_missing_phone_number_is_rejected() {
        let result = AddressClassifier::sender().classify(None);
        assert!(matches!(result, Err(ClassifyError::MissingPhoneNumber)));
    }

    #[test]
    fn test_no_number() {
        let result = AddressClassifier::sender()
            .classify(Some(&PhoneNumber::empty()))
            .unwrap();
        assert_eq!(result.number(), None);
        assert_eq!(result.ton(), TypeOfNumber::Unknown);
        assert_eq!(result.npi(), NumberingPlanIndicator::IsdnTelephone);

        let result = AddressClassifier::sender()
            .classify(Some(&PhoneNumber::new("")))
            .unwrap();
        assert_eq!(result, AddressedPhoneNumber::unaddressed());
    }

    #[test]
    fn test_pure_alpha() {
        let result = sender("number");
        assert_addressed(
            &result,
            "number",
            TypeOfNumber::Alphanumeric,
            NumberingPlanIndicator::Unknown,
        );
    }

    #[test]
    fn test_alphanumeric() {
        let result = sender("0123456789b");
        assert_addressed(
            &result,
            "0123456789b",
            TypeOfNumber::Alphanumeric,
            NumberingPlanIndicator::Unknown,
        );
    }

    #[test]
    fn test_seems_international_but_alpha() {
        let result = sender("+number");
        assert_addressed(
            &result,
            "+number",
            TypeOfNumber::Alphanumeric,
            NumberingPlanIndicator::Unknown,
        );
    }

    #[test]
    fn test_seems_short_code_but_alpha() {
        let result = sender("TOTO");
        assert_addressed(
            &result,
            "TOTO",
            TypeOfNumber::Alphanumeric,
            NumberingPlanIndicator::Unknown,
        );
    }

    #[test]
    fn test_lone_plus_is_alphanumeric() {
        let result = sender("+");
        assert_addressed(
            &result,
            "+",
            TypeOfNumber::Alphanumeric,
            NumberingPlanIndicator::Unknown,
        );
        // Only one `+` is stripped
        assert_eq!(sender("++33618160160").ton(), TypeOfNumber::Alphanumeric);
    }

    #[test]
    fn test_formatting_characters_are_alphanumeric() {
        assert_eq!(sender("+33 6 18 16 01 60").ton(), TypeOfNumber::Alphanumeric);
        assert_eq!(sender("06-18-16-01-60").ton(), TypeOfNumber::Alphanumeric);
        // Non-ASCII digits are not digits here
        assert_eq!(sender("\u{0661}\u{0662}\u{0663}").ton(), TypeOfNumber::Alphanumeric);
    }

    #[test]
    fn test_international() {
        let result = sender("+33618160160");
        assert_addressed(
            &result,
            "+33618160160",
            TypeOfNumber::International,
            NumberingPlanIndicator::IsdnTelephone,
        );
    }

    #[test]
    fn test_short_code() {
        let result = sender("6184");
        assert_addressed(
            &result,
            "6184",
            TypeOfNumber::NetworkSpecific,
            NumberingPlanIndicator::Unknown,
        );
    }

    #[test]
    fn test_short_code_max() {
        let result = sender("61845");
        assert_addressed(
            &result,
            "61845",
            TypeOfNumber::NetworkSpecific,
            NumberingPlanIndicator::Unknown,
        );
        assert_eq!(sender("618450").ton(), TypeOfNumber::Unknown);
    }

    #[test]
    fn test_seems_international_but_short_code() {
        let result = sender("+618");
        assert_addressed(
            &result,
            "+618",
            TypeOfNumber::NetworkSpecific,
            NumberingPlanIndicator::Unknown,
        );
        assert_eq!(sender("+618450").ton(), TypeOfNumber::International);
    }

    #[test]
    fn test_seems_international_but_no_plus() {
        let result = sender("33618160160");
        assert_addressed(
            &result,
            "33618160160",
            TypeOfNumber::Unknown,
            NumberingPlanIndicator::IsdnTelephone,
        );
    }

    #[test]
    fn test_custom_short_code_length() {
        let classifier = AddressClassifier::new(RuleSet::sender().with_short_code_max_length(8));
        let result = classifier
            .classify(Some(&PhoneNumber::new("12345678")))
            .unwrap();
        assert_eq!(result.ton(), TypeOfNumber::NetworkSpecific);

        let result = classifier
            .classify(Some(&PhoneNumber::new("+123456789")))
            .unwrap();
        assert_eq!(result.ton(), TypeOfNumber::International);
    }

    #[test]
    fn test_recipient_profile() {
        let classifier = AddressClassifier::recipient();

        let result = classifier
            .classify(Some(&PhoneNumber::new("+618")))
            .unwrap();
        assert_addressed(
            &result,
            "+618",
            TypeOfNumber::International,
            NumberingPlanIndicator::IsdnTelephone,
        );

        // Alphanumeric and short code rules are off: both fall through
        for number in ["TOTO", "6184"] {
            let result = classifier.classify(Some(&PhoneNumber::new(number))).unwrap();
            assert_addressed(
                &result,
                number,
                TypeOfNumber::Unknown,
                NumberingPlanIndicator::IsdnTelephone,
            );
        }

        // International rule still requires digits only
        let result = classifier
            .classify(Some(&PhoneNumber::new("+number")))
            .unwrap();
        assert_eq!(result.ton(), TypeOfNumber::Unknown);
    }

    #[test]
    fn test_all_rules_disabled() {
        let classifier = AddressClassifier::new(RuleSet::disabled());
        for number in ["+33618160160", "6184", "TOTO", "+"] {
            let result = classifier.classify(Some(&PhoneNumber::new(number))).unwrap();
            assert_addressed(
                &result,
                number,
                TypeOfNumber::Unknown,
                NumberingPlanIndicator::IsdnTelephone,
            );
        }
    }

    #[test]
    fn test_short_code_without_alphanumeric_rule() {
        let classifier = AddressClassifier::new(RuleSet::sender().with_alphanumeric(false));

        // A lone `+` has no digits, so it is not a short code either
        let result = classifier.classify(Some(&PhoneNumber::new("+"))).unwrap();
        assert_eq!(result.ton(), TypeOfNumber::Unknown);

        let result = classifier.classify(Some(&PhoneNumber::new("61a"))).unwrap();
        assert_eq!(result.ton(), TypeOfNumber::Unknown);

        let result = classifier.classify(Some(&PhoneNumber::new("618"))).unwrap();
        assert_eq!(result.ton(), TypeOfNumber::NetworkSpecific);
    }

    #[test]
    fn test_free_function_matches_classifier() {
        let phone = PhoneNumber::new("+33618160160");
        assert_eq!(
            classify_address(Some(&phone), &RuleSet::sender()).unwrap(),
            AddressClassifier::sender().classify(Some(&phone)).unwrap()
        );
    }
}
