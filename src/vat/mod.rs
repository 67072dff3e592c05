//! VAT identifier validation: the country rule table, check-digit
//! strategies and the validator that ties them together.
//!
//! Format and check digits only; nothing here performs a network lookup.
//!
//! # Example
//!
//! ```
//! use vatid::vat::*;
//!
//! // Default validator: every jurisdiction, bare numbers read as GB
//! assert!(validate("DE136695976").valid);
//! assert_eq!(validate("980780684").country_code.as_deref(), Some("GB"));
//!
//! // EU-only validator that insists on a prefix
//! let validator = Validator::new(
//!     ValidatorConfigBuilder::new()
//!         .scope(Scope::EuOnly)
//!         .allow_unprefixed(false)
//!         .build(),
//! );
//! assert!(!validator.validate("NO974760673").valid);
//! ```

mod checksum;
mod config;
mod rules;
mod validator;

pub use checksum::Checksum;
pub use config::{DEFAULT_MAX_INPUT_LEN, Scope, ValidatorConfig, ValidatorConfigBuilder};
pub use rules::{CountryRule, rules};
pub use validator::{DEFAULT_COUNTRY, Validator, normalize, validate};
