// ABOUTME: Converts message text into short_message bytes for the selected encoding
// ABOUTME: GSM 7-bit is emitted unpacked (one septet per octet, ESC before extension characters), Unicode as UCS-2 big-endian

use super::{SmsEncoding, classify_encoding, gsm7};
use crate::error::{ClassifyError, ClassifyResult};
use bytes::{BufMut, Bytes, BytesMut};
use tracing::trace;

/// Encode `text` as `encoding`
///
/// Fails with [`ClassifyError::Unrepresentable`] if GSM 7-bit is requested
/// for text that contains a character outside both GSM tables. Unicode
/// encoding always succeeds.
pub fn encode(text: &str, encoding: SmsEncoding) -> ClassifyResult<Bytes> {
    match encoding {
        SmsEncoding::Gsm7 => encode_gsm7(text),
        SmsEncoding::Unicode => Ok(encode_ucs2(text)),
    }
}

/// Classify `text` and encode it with the encoding it needs
pub fn encode_message(text: &str) -> ClassifyResult<(SmsEncoding, Bytes)> {
    let encoding = classify_encoding(text);
    let payload = encode(text, encoding)?;
    trace!(
        "Encoded {} chars as {} ({} bytes)",
        text.chars().count(),
        encoding,
        payload.len()
    );
    Ok((encoding, payload))
}

fn encode_gsm7(text: &str) -> ClassifyResult<Bytes> {
    let mut buf = BytesMut::with_capacity(
        SmsEncoding::Gsm7
            .message_length(text)
            .unwrap_or(text.len()),
    );

    for (position, character) in text.chars().enumerate() {
        if let Some(septet) = gsm7::septet(character) {
            buf.put_u8(septet);
        } else if let Some(septet) = gsm7::extension_septet(character) {
            buf.put_u8(gsm7::ESCAPE);
            buf.put_u8(septet);
        } else {
            return Err(ClassifyError::Unrepresentable {
                character,
                position,
            });
        }
    }

    Ok(buf.freeze())
}

fn encode_ucs2(text: &str) -> Bytes {
    let mut buf = BytesMut::with_capacity(text.len() * 2);
    for unit in text.encode_utf16() {
        buf.put_u16(unit);
    }
    buf.freeze()
}
