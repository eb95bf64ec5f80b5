//! Federation configuration.
//!
//! Every field has a default, so an empty TOML document is a valid config:
//!
//! ```toml
//! model_dim = 10
//! drift_tolerance = 0.1
//! denominator = "ledger_length"
//!
//! [chain]
//! digest = "exclude_payload"
//! proof = { mode = "mined", difficulty = 4 }
//! ```

use serde::{Deserialize, Serialize};

use crate::aggregators::{Denominator, DEFAULT_DRIFT_TOLERANCE};
use crate::error::{LedgerFlError, Result};
use crate::ledger::{ChainPolicy, MAX_DIFFICULTY};

/// Default number of global model weights.
pub const DEFAULT_MODEL_DIM: usize = 10;

/// Settings fixed for the lifetime of a [`Federation`](crate::Federation).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FederationConfig {
    /// Number of global model weights
    pub model_dim: usize,
    /// Per-weight drift allowed by the benchmark gate
    pub drift_tolerance: f32,
    /// Aggregation denominator
    pub denominator: Denominator,
    /// Digest and proof rules for the ledger
    pub chain: ChainPolicy,
}

impl Default for FederationConfig {
    fn default() -> Self {
        Self {
            model_dim: DEFAULT_MODEL_DIM,
            drift_tolerance: DEFAULT_DRIFT_TOLERANCE,
            denominator: Denominator::default(),
            chain: ChainPolicy::default(),
        }
    }
}

impl FederationConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the federation cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.model_dim == 0 {
            return Err(LedgerFlError::EmptyModel);
        }
        if !self.drift_tolerance.is_finite() || self.drift_tolerance < 0.0 {
            return Err(LedgerFlError::InvalidTolerance(self.drift_tolerance));
        }
        let difficulty = self.chain.proof.difficulty();
        if difficulty > MAX_DIFFICULTY {
            return Err(LedgerFlError::InvalidDifficulty(difficulty));
        }
        Ok(())
    }
}
