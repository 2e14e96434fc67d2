//! Fingerprint types shared by the text and image producers.
//!
//! Fingerprints are immutable values with no link back to the content they
//! were derived from. Both kinds serialize to their hexadecimal form so
//! callers can persist them and compare later.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{validate_hex, FingerprintError, MalformedReason};

/// Which producer a fingerprint came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FingerprintKind {
    Text,
    Image,
}

impl fmt::Display for FingerprintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FingerprintKind::Text => f.write_str("text"),
            FingerprintKind::Image => f.write_str("image"),
        }
    }
}

/// 64-bit text SimHash. Bit 0 is the least significant bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TextFingerprint(u64);

impl TextFingerprint {
    /// Width of every text fingerprint in bits.
    pub const BITS: u32 = 64;
    /// Length of the hexadecimal rendering.
    pub const HEX_LEN: usize = 16;
    /// Fingerprint of text with no retained words.
    pub const ZERO: TextFingerprint = TextFingerprint(0);

    pub const fn from_bits(bits: u64) -> Self {
        TextFingerprint(bits)
    }

    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Whether bit `i` (0 = least significant) is set.
    pub fn bit(self, i: u32) -> bool {
        i < Self::BITS && (self.0 >> i) & 1 == 1
    }

    /// 16 lowercase hex digits, zero padded.
    pub fn to_hex(self) -> String {
        format!("{:016x}", self.0)
    }

    /// Parse a stored fingerprint. Accepts upper or lower case; the string
    /// must be exactly 16 hex digits.
    pub fn from_hex(raw: &str) -> Result<Self, FingerprintError> {
        validate_hex(raw)?;
        if raw.len() != Self::HEX_LEN {
            return Err(MalformedReason::Length {
                expected: Self::HEX_LEN,
                actual: raw.len(),
            }
            .into());
        }
        u64::from_str_radix(raw, 16)
            .map(TextFingerprint)
            .map_err(|_| {
                MalformedReason::Length {
                    expected: Self::HEX_LEN,
                    actual: raw.len(),
                }
                .into()
            })
    }
}

impl fmt::Display for TextFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl TryFrom<String> for TextFingerprint {
    type Error = FingerprintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TextFingerprint::from_hex(&value)
    }
}

impl From<TextFingerprint> for String {
    fn from(value: TextFingerprint) -> Self {
        value.to_hex()
    }
}

/// Perceptual image hash produced by an external hashing capability.
///
/// Stored exactly as received: comparison is per character, so `"A"` and
/// `"a"` count as different digits. The length is whatever the external
/// hasher emits (64 hex digits for a 256-bit hash); nothing here assumes it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImageFingerprint(String);

impl ImageFingerprint {
    /// Validate and wrap an external hash string.
    ///
    /// Fails with [`FingerprintError::Malformed`] when `raw` is empty or
    /// contains characters outside `[0-9a-fA-F]`. Case is accepted either
    /// way and kept as-is.
    pub fn wrap(raw: &str) -> Result<Self, FingerprintError> {
        validate_hex(raw)?;
        Ok(ImageFingerprint(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of hex digits. Comparison and scoring treat this as the width.
    pub fn width(&self) -> u32 {
        u32::try_from(self.0.len()).unwrap_or(u32::MAX)
    }
}

impl fmt::Display for ImageFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ImageFingerprint {
    type Error = FingerprintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ImageFingerprint::wrap(&value)
    }
}

impl From<ImageFingerprint> for String {
    fn from(value: ImageFingerprint) -> Self {
        value.0
    }
}

/// The unit of comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Fingerprint {
    Text(TextFingerprint),
    Image(ImageFingerprint),
}

impl Fingerprint {
    pub fn kind(&self) -> FingerprintKind {
        match self {
            Fingerprint::Text(_) => FingerprintKind::Text,
            Fingerprint::Image(_) => FingerprintKind::Image,
        }
    }

    /// Bit width for text, character length for image.
    pub fn width(&self) -> u32 {
        match self {
            Fingerprint::Text(_) => TextFingerprint::BITS,
            Fingerprint::Image(fp) => fp.width(),
        }
    }
}

impl From<TextFingerprint> for Fingerprint {
    fn from(value: TextFingerprint) -> Self {
        Fingerprint::Text(value)
    }
}

impl From<ImageFingerprint> for Fingerprint {
    fn from(value: ImageFingerprint) -> Self {
        Fingerprint::Image(value)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fingerprint::Text(fp) => write!(f, "text:{fp}"),
            Fingerprint::Image(fp) => write!(f, "image:{fp}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_hex_is_zero_padded() {
        assert_eq!(TextFingerprint::ZERO.to_hex(), "0000000000000000");
        assert_eq!(TextFingerprint::from_bits(0xab).to_hex(), "00000000000000ab");
        assert_eq!(TextFingerprint::from_bits(u64::MAX).to_string(), "ffffffffffffffff");
    }

    #[test]
    fn text_from_hex_accepts_upper_case() {
        let fp = TextFingerprint::from_hex("4F9F2CAB4F9F2CAB").unwrap();
        assert_eq!(fp.bits(), 0x4f9f_2cab_4f9f_2cab);
    }

    #[test]
    fn text_from_hex_rejects_wrong_length() {
        assert_eq!(
            TextFingerprint::from_hex("abc"),
            Err(FingerprintError::Malformed {
                reason: MalformedReason::Length {
                    expected: 16,
                    actual: 3
                }
            })
        );
    }

    #[test]
    fn text_from_hex_rejects_non_hex() {
        assert!(matches!(
            TextFingerprint::from_hex("000000000000000g"),
            Err(FingerprintError::Malformed {
                reason: MalformedReason::NonHex { ch: 'g', index: 15 }
            })
        ));
    }

    #[test]
    fn text_bit_accessor() {
        let fp = TextFingerprint::from_bits(0b101);
        assert!(fp.bit(0));
        assert!(!fp.bit(1));
        assert!(fp.bit(2));
        assert!(!fp.bit(64));
    }

    #[test]
    fn image_wrap_keeps_input_verbatim() {
        let fp = ImageFingerprint::wrap("ABcd09").unwrap();
        assert_eq!(fp.as_str(), "ABcd09");
        assert_eq!(fp.to_string(), "ABcd09");
        assert_eq!(fp.width(), 6);
    }

    #[test]
    fn image_serde_keeps_case() {
        let fp = Fingerprint::Image(ImageFingerprint::wrap("00FF").unwrap());
        let json = serde_json::to_string(&fp).unwrap();
        assert_eq!(json, r#"{"kind":"image","value":"00FF"}"#);
    }

    #[test]
    fn image_wrap_rejects_empty_and_non_hex() {
        assert!(matches!(
            ImageFingerprint::wrap(""),
            Err(FingerprintError::Malformed {
                reason: MalformedReason::Empty
            })
        ));
        assert!(matches!(
            ImageFingerprint::wrap("zz"),
            Err(FingerprintError::Malformed { .. })
        ));
    }

    #[test]
    fn fingerprint_kind_and_width() {
        let text: Fingerprint = TextFingerprint::ZERO.into();
        let image: Fingerprint = ImageFingerprint::wrap(&"f".repeat(64)).unwrap().into();
        assert_eq!(text.kind(), FingerprintKind::Text);
        assert_eq!(text.width(), 64);
        assert_eq!(image.kind(), FingerprintKind::Image);
        assert_eq!(image.width(), 64);
    }

    #[test]
    fn fingerprint_serde_uses_hex() {
        let fp = Fingerprint::Text(TextFingerprint::from_bits(0x1f));
        let json = serde_json::to_string(&fp).unwrap();
        assert_eq!(json, r#"{"kind":"text","value":"000000000000001f"}"#);
        let back: Fingerprint = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fp);
    }

    #[test]
    fn image_serde_rejects_malformed() {
        let res: Result<Fingerprint, _> =
            serde_json::from_str(r#"{"kind":"image","value":"xyz"}"#);
        assert!(res.is_err());
    }
}
