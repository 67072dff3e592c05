use serde::{Deserialize, Serialize};

use super::error::{ErrorReason, VatIdError};

/// Outcome of validating one identifier.
///
/// Serializes with camelCase keys:
/// `{"valid":true,"countryCode":"LU","localNumber":"12345613","reason":null}`.
///
/// - `valid == true`: exactly one rule matched and its check digits agree.
/// - `valid == false` with a country code: a rule matched, the checksum failed.
/// - no country code: no rule matched structurally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Whether the identifier is structurally and arithmetically valid.
    pub valid: bool,
    /// Country code of the matching rule (`GB` for unprefixed numbers).
    pub country_code: Option<String>,
    /// Everything after the country prefix.
    pub local_number: Option<String>,
    /// Why validation failed, `None` when valid.
    pub reason: Option<ErrorReason>,
}

impl ValidationResult {
    /// Result for input that matched no rule.
    pub fn invalid_format() -> Self {
        Self {
            valid: false,
            country_code: None,
            local_number: None,
            reason: Some(ErrorReason::InvalidFormat),
        }
    }

    /// Result for input that matched the rule for `country_code`.
    pub fn checked(
        country_code: impl Into<String>,
        local_number: impl Into<String>,
        valid: bool,
    ) -> Self {
        Self {
            valid,
            country_code: Some(country_code.into()),
            local_number: Some(local_number.into()),
            reason: (!valid).then_some(ErrorReason::ChecksumFailed),
        }
    }

    /// Shorthand for `self.valid`.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Convert into a `Result`, using `value` (the normalized input) in the error.
    pub fn into_result(self, value: impl Into<String>) -> Result<VatId, VatIdError> {
        match (self.valid, self.country_code, self.local_number) {
            (true, Some(country_code), Some(local_number)) => Ok(VatId {
                country_code,
                local_number,
            }),
            (false, Some(country), _) => Err(VatIdError::ChecksumFailed {
                value: value.into(),
                country,
            }),
            _ => Err(VatIdError::InvalidFormat {
                value: value.into(),
            }),
        }
    }
}

/// A VAT identifier that passed validation.
///
/// Parse with [`str::parse`] or [`Validator::parse`](crate::vat::Validator::parse).
///
/// ```
/// use vatid::VatId;
///
/// let id: VatId = " lu12345613 ".parse().unwrap();
/// assert_eq!(id.country_code, "LU");
/// assert_eq!(id.to_string(), "LU12345613");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VatId {
    /// Country code of the matching rule.
    pub country_code: String,
    /// Everything after the country prefix.
    pub local_number: String,
}

impl std::fmt::Display for VatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.country_code, self.local_number)
    }
}

impl std::str::FromStr for VatId {
    type Err = VatIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::vat::Validator::default().parse(s)
    }
}
