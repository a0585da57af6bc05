//! Minimal decoder for consensus-serialized Clarity values.
//!
//! The read-only call endpoint returns results as hex strings in the Clarity
//! consensus wire format. This app only ever reads integer counters, so the
//! decoder covers signed/unsigned integers and the `(ok ...)` response
//! wrapper a read-only function may return them in.

use thiserror::Error;

/// Type tags from the Clarity consensus serialization.
const TAG_INT: u8 = 0x00;
const TAG_UINT: u8 = 0x01;
const TAG_RESPONSE_OK: u8 = 0x07;

#[derive(Debug, Error)]
pub enum ClarityError {
    #[error("empty value")]
    Empty,

    #[error("invalid hex encoding: {0}")]
    InvalidHex(String),

    #[error("unsupported clarity type tag 0x{0:02x}")]
    UnsupportedType(u8),

    #[error("truncated value: expected {expected} payload bytes, found {found}")]
    Truncated { expected: usize, found: usize },

    #[error("{0} trailing bytes after value")]
    TrailingBytes(usize),
}

/// A decoded Clarity value, limited to the shapes the app reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClarityValue {
    Int(i128),
    UInt(u128),
    ResponseOk(Box<ClarityValue>),
}

impl ClarityValue {
    /// Decodes a hex-serialized value, with or without a `0x` prefix.
    pub fn decode_hex(serialized: &str) -> Result<Self, ClarityError> {
        let hex = serialized.strip_prefix("0x").unwrap_or(serialized);
        let bytes = decode_hex_bytes(hex)?;
        let (value, rest) = Self::decode_bytes(&bytes)?;
        if !rest.is_empty() {
            return Err(ClarityError::TrailingBytes(rest.len()));
        }
        Ok(value)
    }

    fn decode_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), ClarityError> {
        let (&tag, rest) = bytes.split_first().ok_or(ClarityError::Empty)?;
        match tag {
            TAG_INT => {
                let (payload, rest) = take_16(rest)?;
                Ok((ClarityValue::Int(i128::from_be_bytes(payload)), rest))
            }
            TAG_UINT => {
                let (payload, rest) = take_16(rest)?;
                Ok((ClarityValue::UInt(u128::from_be_bytes(payload)), rest))
            }
            TAG_RESPONSE_OK => {
                let (inner, rest) = Self::decode_bytes(rest)?;
                Ok((ClarityValue::ResponseOk(Box::new(inner)), rest))
            }
            other => Err(ClarityError::UnsupportedType(other)),
        }
    }

    /// Native unsigned view of the value, unwrapping `(ok ...)`.
    ///
    /// Negative integers have no unsigned view and yield `None`.
    pub fn as_u128(&self) -> Option<u128> {
        match self {
            ClarityValue::UInt(value) => Some(*value),
            ClarityValue::Int(value) => u128::try_from(*value).ok(),
            ClarityValue::ResponseOk(inner) => inner.as_u128(),
        }
    }
}

fn take_16(bytes: &[u8]) -> Result<([u8; 16], &[u8]), ClarityError> {
    if bytes.len() < 16 {
        return Err(ClarityError::Truncated {
            expected: 16,
            found: bytes.len(),
        });
    }
    let (payload, rest) = bytes.split_at(16);
    let mut array = [0u8; 16];
    array.copy_from_slice(payload);
    Ok((array, rest))
}

fn decode_hex_bytes(hex: &str) -> Result<Vec<u8>, ClarityError> {
    if !hex.is_ascii() {
        return Err(ClarityError::InvalidHex("non-ascii input".to_string()));
    }
    if hex.len() % 2 != 0 {
        return Err(ClarityError::InvalidHex("odd number of digits".to_string()));
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| ClarityError::InvalidHex(hex[i..i + 2].to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uint_hex(value: u128) -> String {
        let mut hex = String::from("0x01");
        for byte in value.to_be_bytes() {
            hex.push_str(&format!("{:02x}", byte));
        }
        hex
    }

    #[test]
    fn decodes_uint() {
        let value = ClarityValue::decode_hex(&uint_hex(42)).unwrap();
        assert_eq!(value, ClarityValue::UInt(42));
        assert_eq!(value.as_u128(), Some(42));
    }

    #[test]
    fn decodes_without_prefix() {
        let hex = uint_hex(7);
        let value = ClarityValue::decode_hex(hex.trim_start_matches("0x")).unwrap();
        assert_eq!(value.as_u128(), Some(7));
    }

    #[test]
    fn decodes_int() {
        let mut hex = String::from("0x00");
        for byte in (-5i128).to_be_bytes() {
            hex.push_str(&format!("{:02x}", byte));
        }
        let value = ClarityValue::decode_hex(&hex).unwrap();
        assert_eq!(value, ClarityValue::Int(-5));
        assert_eq!(value.as_u128(), None);
    }

    #[test]
    fn decodes_ok_wrapped_uint() {
        let inner = uint_hex(1234);
        let hex = format!("0x07{}", inner.trim_start_matches("0x"));
        let value = ClarityValue::decode_hex(&hex).unwrap();
        assert_eq!(value.as_u128(), Some(1234));
    }

    #[test]
    fn rejects_unknown_tag() {
        // 0x0c is a tuple; not something a counter read should produce
        let err = ClarityValue::decode_hex("0x0c00000000").unwrap_err();
        assert!(matches!(err, ClarityError::UnsupportedType(0x0c)));
    }

    #[test]
    fn rejects_truncated_payload() {
        let err = ClarityValue::decode_hex("0x01ff").unwrap_err();
        assert!(matches!(err, ClarityError::Truncated { .. }));
    }

    #[test]
    fn rejects_trailing_bytes() {
        let hex = format!("{}ff", uint_hex(1));
        let err = ClarityValue::decode_hex(&hex).unwrap_err();
        assert!(matches!(err, ClarityError::TrailingBytes(1)));
    }

    #[test]
    fn rejects_bad_hex() {
        assert!(matches!(
            ClarityValue::decode_hex("0xzz"),
            Err(ClarityError::InvalidHex(_))
        ));
        assert!(matches!(
            ClarityValue::decode_hex("0x012"),
            Err(ClarityError::InvalidHex(_))
        ));
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            ClarityValue::decode_hex("0x"),
            Err(ClarityError::Empty)
        ));
    }
}
