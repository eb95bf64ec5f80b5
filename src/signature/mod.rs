//! Signature primitive used to mint participant credentials.
//!
//! - [`eddsa`] — Ed25519 Schnorr signing with fresh nonces

pub mod eddsa;

pub use eddsa::{verify, KeyPair, PublicKey, Signature};
