use thiserror::Error;

/// Errors returned when a fingerprint cannot be constructed from its textual
/// form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FingerprintError {
    /// The hash string is not a usable fingerprint. Callers should treat the
    /// submission as unfingerprintable.
    #[error("malformed fingerprint: {reason}")]
    Malformed { reason: MalformedReason },
}

/// Why a fingerprint string was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    #[error("hash string is empty")]
    Empty,

    #[error("non-hexadecimal character {ch:?} at index {index}")]
    NonHex { ch: char, index: usize },

    #[error("expected {expected} hex digits, got {actual}")]
    Length { expected: usize, actual: usize },
}

impl From<MalformedReason> for FingerprintError {
    fn from(reason: MalformedReason) -> Self {
        FingerprintError::Malformed { reason }
    }
}

/// Reject empty strings and anything outside `[0-9a-fA-F]`.
pub(crate) fn validate_hex(raw: &str) -> Result<(), FingerprintError> {
    if raw.is_empty() {
        return Err(MalformedReason::Empty.into());
    }
    if let Some((index, ch)) = raw.chars().enumerate().find(|(_, ch)| !ch.is_ascii_hexdigit()) {
        return Err(MalformedReason::NonHex { ch, index }.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_hex_accepts_mixed_case() {
        assert!(validate_hex("09afAF").is_ok());
    }

    #[test]
    fn validate_hex_reports_first_offender() {
        assert_eq!(
            validate_hex("ab-z"),
            Err(FingerprintError::Malformed {
                reason: MalformedReason::NonHex { ch: '-', index: 2 }
            })
        );
    }

    #[test]
    fn error_display_mentions_kind() {
        let err: FingerprintError = MalformedReason::Empty.into();
        assert!(err.to_string().contains("malformed fingerprint"));
        assert!(err.to_string().contains("empty"));
    }
}
