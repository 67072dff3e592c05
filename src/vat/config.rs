use serde::{Deserialize, Serialize};

use crate::core::jurisdiction;

use super::rules::CountryRule;

/// Longest trimmed input considered for matching by default.
pub const DEFAULT_MAX_INPUT_LEN: usize = 32;

/// Which jurisdictions a [`Validator`](super::Validator) recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Scope {
    /// Every rule in the table, including GB, CHE, NO and RS.
    #[default]
    All,
    /// EU member states and the EU OSS scheme only.
    EuOnly,
}

impl Scope {
    /// Whether `rule` is part of this scope.
    pub fn includes(self, rule: &CountryRule) -> bool {
        match self {
            Self::All => true,
            Self::EuOnly => {
                jurisdiction(rule.country_code).is_some_and(|j| j.membership.is_eu())
            }
        }
    }
}

/// Validator settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidatorConfig {
    /// Jurisdictions to recognise.
    pub scope: Scope,
    /// Accept bare numbers as domestic (GB) identifiers.
    pub allow_unprefixed: bool,
    /// Trimmed inputs longer than this are rejected as `InvalidFormat`.
    pub max_input_len: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            scope: Scope::All,
            allow_unprefixed: true,
            max_input_len: DEFAULT_MAX_INPUT_LEN,
        }
    }
}

/// Builder for [`ValidatorConfig`].
///
/// # Example
///
/// ```
/// use vatid::vat::{Scope, ValidatorConfigBuilder};
///
/// let config = ValidatorConfigBuilder::new()
///     .scope(Scope::EuOnly)
///     .allow_unprefixed(false)
///     .build();
/// assert_eq!(config.max_input_len, 32);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValidatorConfigBuilder {
    config: ValidatorConfig,
}

impl ValidatorConfigBuilder {
    /// Start from the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the recognised jurisdictions.
    pub fn scope(mut self, scope: Scope) -> Self {
        self.config.scope = scope;
        self
    }

    /// Accept or reject numbers without a country prefix.
    pub fn allow_unprefixed(mut self, allow: bool) -> Self {
        self.config.allow_unprefixed = allow;
        self
    }

    /// Set the input length limit.
    pub fn max_input_len(mut self, len: usize) -> Self {
        self.config.max_input_len = len;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ValidatorConfig {
        self.config
    }
}
