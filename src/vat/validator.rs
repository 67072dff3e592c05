//! Dispatch from a raw identifier to the first matching country rule.

use crate::core::{ValidationResult, VatId, VatIdError};

use super::config::ValidatorConfig;
use super::rules::{COMPILED, CountryRule, rules};

/// Country reported for identifiers without a prefix.
pub const DEFAULT_COUNTRY: &str = "GB";

/// Trim surrounding whitespace and upper-case ASCII letters.
///
/// Only ASCII is case-folded, so non-ASCII letters can never turn into
/// characters a pattern accepts.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

/// Validate with the default configuration.
///
/// ```
/// let result = vatid::validate("LU12345613");
/// assert!(result.valid);
/// assert_eq!(result.country_code.as_deref(), Some("LU"));
///
/// let result = vatid::validate("LU12345614");
/// assert!(!result.valid);
/// assert_eq!(result.reason, Some(vatid::ErrorReason::ChecksumFailed));
/// ```
pub fn validate(raw: &str) -> ValidationResult {
    Validator::default().validate(raw)
}

/// A configured VAT identifier validator.
///
/// Stateless apart from its configuration; the rule table is shared and
/// compiled once, so validators are cheap to create and safe to share
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Rules in scope, in priority order.
    pub fn rules(&self) -> impl Iterator<Item = &'static CountryRule> + '_ {
        rules()
            .iter()
            .filter(move |rule| self.config.scope.includes(rule))
    }

    /// Validate one identifier. Never fails: malformed input yields
    /// `InvalidFormat`, a bad check digit `ChecksumFailed`.
    pub fn validate(&self, raw: &str) -> ValidationResult {
        self.validate_normalized(&normalize(raw))
    }

    /// Validate a country code and number supplied separately.
    pub fn validate_parts(&self, country_code: &str, number: &str) -> ValidationResult {
        self.validate(&format!("{}{}", country_code.trim(), number.trim()))
    }

    /// Validate and return the identifier, or the reason it was rejected.
    pub fn parse(&self, raw: &str) -> Result<VatId, VatIdError> {
        let normalized = normalize(raw);
        self.validate_normalized(&normalized).into_result(normalized)
    }

    fn validate_normalized(&self, id: &str) -> ValidationResult {
        if id.len() > self.config.max_input_len {
            tracing::debug!(
                len = id.len(),
                max = self.config.max_input_len,
                "VAT ID rejected: input too long"
            );
            return ValidationResult::invalid_format();
        }

        let in_scope = COMPILED
            .iter()
            .filter(|compiled| self.config.scope.includes(compiled.rule));
        for compiled in in_scope {
            let Some(caps) = compiled.regex.captures(id) else {
                continue;
            };
            let prefix = caps.get(1);
            if prefix.is_none() && !self.config.allow_unprefixed {
                continue;
            }
            let Some(body) = caps.get(2) else {
                continue;
            };

            let country = prefix.map_or(DEFAULT_COUNTRY, |m| m.as_str());
            let local = id.get(prefix.map_or(0, |m| m.end())..).unwrap_or_default();
            tracing::trace!(country, rule = compiled.rule.description, "VAT ID matched rule");

            let valid = compiled.rule.checksum.verify(body.as_str());
            tracing::debug!(country, valid, "VAT ID validated");
            return ValidationResult::checked(country, local, valid);
        }

        tracing::debug!("VAT ID matched no country rule");
        ValidationResult::invalid_format()
    }
}
