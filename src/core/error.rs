use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why an identifier did not validate.
///
/// Carried as plain data inside [`ValidationResult`](super::ValidationResult);
/// validation itself never fails with an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorReason {
    /// No country rule matched the structure of the input.
    InvalidFormat,
    /// A country rule matched but its check digits are inconsistent.
    ChecksumFailed,
}

impl std::fmt::Display for ErrorReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat => f.write_str("no country format matches"),
            Self::ChecksumFailed => f.write_str("check digits do not match"),
        }
    }
}

/// Errors returned by the `Result`-based parsing API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum VatIdError {
    /// The input does not have the structure of any supported VAT ID.
    #[error("invalid VAT ID '{value}': no country format matches")]
    InvalidFormat {
        /// The normalized input value.
        value: String,
    },

    /// The input looks like a VAT ID of `country` but its check digits are wrong.
    #[error("invalid VAT ID '{value}': check digits do not match for {country}")]
    ChecksumFailed {
        /// The normalized input value.
        value: String,
        /// Country code of the rule that matched.
        country: String,
    },
}

impl VatIdError {
    /// The [`ErrorReason`] this error corresponds to.
    pub fn reason(&self) -> ErrorReason {
        match self {
            Self::InvalidFormat { .. } => ErrorReason::InvalidFormat,
            Self::ChecksumFailed { .. } => ErrorReason::ChecksumFailed,
        }
    }

    /// The offending input, trimmed and upper-cased.
    pub fn value(&self) -> &str {
        match self {
            Self::InvalidFormat { value } | Self::ChecksumFailed { value, .. } => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_display() {
        assert_eq!(
            ErrorReason::InvalidFormat.to_string(),
            "no country format matches"
        );
        assert_eq!(
            ErrorReason::ChecksumFailed.to_string(),
            "check digits do not match"
        );
    }

    #[test]
    fn error_maps_back_to_reason() {
        let err = VatIdError::ChecksumFailed {
            value: "LU12345614".into(),
            country: "LU".into(),
        };
        assert_eq!(err.reason(), ErrorReason::ChecksumFailed);
        assert_eq!(err.value(), "LU12345614");

        let err = VatIdError::InvalidFormat {
            value: "XX1".into(),
        };
        assert_eq!(err.reason(), ErrorReason::InvalidFormat);
    }

    #[test]
    fn error_display_names_country() {
        let err = VatIdError::ChecksumFailed {
            value: "DE136695977".into(),
            country: "DE".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid VAT ID 'DE136695977': check digits do not match for DE"
        );
    }
}
