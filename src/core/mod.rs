//! Result and error types, jurisdiction metadata, and the large-number
//! modulus helper shared by the checksum strategies.

mod countries;
mod error;
mod modulus;
mod types;

pub use countries::{Jurisdiction, Membership, jurisdiction};
pub use error::*;
pub use modulus::{DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE, mod_large, mod_large_chunked};
pub use types::*;
