//! # Ledger-FL: Ledger-Backed Federated Learning
//!
//! Coordinates federated training among untrusted participants with a
//! tamper-evident ledger as the single source of truth for model updates,
//! participant credentials and aggregation history.
//!
//! ## Components
//!
//! - [`signature`] - Ed25519 Schnorr signatures used to mint credentials
//! - [`registry`] - Digital twins, authentication and credential issuance
//! - [`ledger`] - Append-only, digest-linked chain of model updates
//! - [`verification`] - Chain validation and aggregation audit log
//! - [`aggregators`] - Ledger-wide averaging and drift benchmarking
//!
//! ## High-Level API
//!
//! Use [`Federation`] for a context object that owns all of the above and
//! serialises ledger writers.
//!
//! ```rust
//! use ledger_fl::{Federation, FederationConfig};
//!
//! let fed = Federation::bootstrap(FederationConfig::default()).unwrap();
//! assert!(fed.authenticate("Alice"));
//! assert!(!fed.authenticate("Alice"));
//!
//! assert!(!fed.submit("Bob", vec![0.1; 10]));
//! assert!(fed.submit("Alice", vec![0.5; 10]));
//! assert_eq!(fed.ledger_len(), 2);
//! assert!(fed.validate());
//! ```

#![deny(missing_docs)]

pub mod aggregators;
pub mod config;
pub mod error;
pub mod federation;
pub mod ledger;
pub mod math;
pub mod model;
pub mod registry;
pub mod signature;
pub mod simulation;
pub mod verification;

// Re-exports
pub use aggregators::{aggregate, benchmark, Denominator};
pub use config::FederationConfig;
pub use error::LedgerFlError;
pub use federation::{Federation, RoundOutcome};
pub use ledger::{Block, ChainPolicy, DigestPolicy, Ledger, ProofPolicy};
pub use model::GlobalModel;
pub use registry::{Credential, CredentialRegistry, DigitalTwin};
pub use signature::{KeyPair, PublicKey, Signature};
pub use verification::{validate, validate_chain, ChainStatus};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
