//! Address and encoding classification for SMPP submit operations.
//!
//! Given the raw strings of an outgoing SMS, this crate derives the fields a
//! `submit_sm` needs: Type of Number and Numbering Plan Indicator for the
//! source and destination addresses, and the data coding (GSM 7-bit default
//! alphabet or UCS-2) for the body. Everything here is pure computation;
//! framing and sending the PDU is left to the transport layer.
//!
//! # Examples
//!
//! ## Classifying an address
//!
//! ```rust
//! use smpp_addressing::address::{PhoneNumber, RuleSet, classify_address};
//! use smpp_addressing::datatypes::{NumberingPlanIndicator, TypeOfNumber};
//!
//! let phone_number = PhoneNumber::new("+33618160160");
//! let sender = classify_address(Some(&phone_number), &RuleSet::sender())?;
//! assert_eq!(sender.ton(), TypeOfNumber::International);
//! assert_eq!(sender.npi(), NumberingPlanIndicator::IsdnTelephone);
//! assert_eq!(sender.number(), Some("+33618160160"));
//! # Ok::<(), smpp_addressing::ClassifyError>(())
//! ```
//!
//! ## Choosing the body encoding
//!
//! ```rust
//! use smpp_addressing::encoding::{SmsEncoding, classify_encoding};
//!
//! let encoding = classify_encoding("Hello {world}");
//! assert_eq!(encoding, SmsEncoding::Gsm7);
//! assert_eq!(encoding.data_coding(), 0x00);
//! assert_eq!(encoding.max_single_segment_length(), 160);
//! ```
//!
//! ## Addressing a whole message
//!
//! ```rust
//! use smpp_addressing::{AddressingConfig, PhoneNumber, SmsEnvelope};
//!
//! let envelope = SmsEnvelope::address(
//!     &AddressingConfig::default(),
//!     Some(&PhoneNumber::new("ACME")),
//!     &[PhoneNumber::new("+33618160160")],
//!     "Your code is 1234",
//! )?;
//! assert_eq!(envelope.source().ton().to_string(), "alphanumeric (5)");
//! # Ok::<(), smpp_addressing::ClassifyError>(())
//! ```

pub mod address;
pub mod config;
pub mod datatypes;
pub mod encoding;
pub mod envelope;
pub mod error;


pub use address::{
    AddressClassifier, AddressedPhoneNumber, PhoneNumber, RuleSet, classify_address,
};
pub use config::AddressingConfig;
pub use datatypes::{NumberingPlanIndicator, TypeOfNumber};
pub use encoding::{SmsEncoding, classify_encoding};
pub use envelope::SmsEnvelope;
pub use error::{ClassifyError, ClassifyResult};
