// ABOUTME: Outgoing message envelope carrying classified addresses and the encoded body
// ABOUTME: Built once per send attempt and handed to the transport layer as plain values

use crate::address::{AddressedPhoneNumber, PhoneNumber};
use crate::config::AddressingConfig;
use crate::encoding::{SmsEncoding, encode_message};
use crate::error::ClassifyResult;
use bytes::Bytes;
use tracing::debug;

/// Everything a submit operation needs from the engine for one message
///
/// Holds the source address, one addressed destination per recipient (in
/// the order given), the body encoding and the encoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsEnvelope {
    source: AddressedPhoneNumber,
    destinations: Vec<AddressedPhoneNumber>,
    encoding: SmsEncoding,
    payload: Bytes,
}

impl SmsEnvelope {
    /// Classify the sender and every recipient, then encode `text`
    ///
    /// The sender goes through `config.sender`, recipients through
    /// `config.recipient`. Without `from` the sender is
    /// `config.default_from`; with no recipients in `to` the recipient is
    /// `config.default_to`, if set. A sender missing from both is an error,
    /// exactly as for [`classify_address`](crate::address::classify_address).
    pub fn address(
        config: &AddressingConfig,
        from: Option<&PhoneNumber>,
        to: &[PhoneNumber],
        text: &str,
    ) -> ClassifyResult<Self> {
        let from = from.or(config.default_from.as_ref());
        let source = config.sender_classifier().classify(from)?;

        let to = if to.is_empty() {
            config.default_to.as_slice()
        } else {
            to
        };

        let recipient_classifier = config.recipient_classifier();
        let destinations = to
            .iter()
            .map(|phone_number| recipient_classifier.classify(Some(phone_number)))
            .collect::<ClassifyResult<Vec<_>>>()?;

        let (encoding, payload) = encode_message(text)?;

        debug!(
            "Addressed message from {} to {} recipient(s) using {}",
            source,
            destinations.len(),
            encoding
        );

        Ok(Self {
            source,
            destinations,
            encoding,
            payload,
        })
    }

    pub fn source(&self) -> &AddressedPhoneNumber {
        &self.source
    }

    pub fn destinations(&self) -> &[AddressedPhoneNumber] {
        &self.destinations
    }

    pub fn encoding(&self) -> SmsEncoding {
        self.encoding
    }

    /// SMPP `data_coding` for the body
    pub fn data_coding(&self) -> u8 {
        self.encoding.data_coding()
    }

    /// Encoded body, ready for `short_message` or `message_payload`
    pub fn payload(&self) -> &Bytes {
        &self.payload
    }

    /// Returns true if the body fits a single unconcatenated segment
    pub fn fits_single_segment(&self) -> bool {
        let units = match self.encoding {
            SmsEncoding::Gsm7 => self.payload.len(),
            SmsEncoding::Unicode => self.payload.len() / 2,
        };
        units <= self.encoding.max_single_segment_length()
    }
}
