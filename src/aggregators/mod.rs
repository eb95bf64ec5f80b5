//! Aggregation of ledger payloads into a new global model.
//!
//! - [`fedavg`] — coordinate-wise sum of every payload over a [`Denominator`]
//! - [`benchmark`] — per-weight drift gate against the previous model

pub mod benchmark;
pub mod fedavg;

pub use benchmark::{benchmark, max_drift, DEFAULT_DRIFT_TOLERANCE};
pub use fedavg::aggregate;

use serde::{Deserialize, Serialize};

/// What the coordinate sums are divided by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Denominator {
    /// Total ledger length, genesis and payload-free blocks included (default)
    #[default]
    LedgerLength,
    /// Number of payload-bearing blocks
    PayloadCount,
}
