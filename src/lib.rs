//! # vatid
//!
//! Offline validation of EU and EFTA VAT identifiers: which jurisdiction's
//! format an identifier has, and whether its check digits are consistent.
//!
//! Validation never fails. Every input, however malformed, produces a
//! [`ValidationResult`]; [`Validator::parse`](vat::Validator::parse) and
//! [`VatId`]'s `FromStr` offer the same outcome as a `Result`.
//!
//! ## Quick Start
//!
//! ```rust
//! use vatid::{ErrorReason, VatId, validate};
//!
//! let result = validate("MT12345634");
//! assert!(result.valid);
//! assert_eq!(result.local_number.as_deref(), Some("12345634"));
//!
//! assert_eq!(validate("NOTAVATNUMBER").reason, Some(ErrorReason::InvalidFormat));
//!
//! let id: VatId = "fr40303265045".parse().unwrap();
//! assert_eq!(id.country_code, "FR");
//! ```
//!
//! Large numbers (French and Slovak identifiers) are reduced with the
//! chunked [`mod_large`] helper instead of native integer arithmetic.

pub mod core;
pub mod vat;

pub use crate::core::*;
pub use crate::vat::{Validator, ValidatorConfig, validate};
