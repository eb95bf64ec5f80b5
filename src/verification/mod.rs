//! Ledger integrity checks and aggregation history.
//!
//! - [`validator`] — Digest linkage and proof predicate audit
//! - [`audit`] — Append-only aggregation audit log

pub mod audit;
pub mod validator;

pub use audit::{AggregationAuditEntry, AuditLog};
pub use validator::{validate, validate_chain, ChainStatus};
