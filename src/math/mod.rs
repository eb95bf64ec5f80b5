//! Mathematical primitives for Ledger-FL.
//!
//! - [`norms`] — distance computations between weight vectors
//! - [`digest`] — SHA-256 hex digests shared by the ledger and registry

pub mod digest;
pub mod norms;

pub use digest::{sha256_hex, unix_timestamp};
pub use norms::linf_distance;
