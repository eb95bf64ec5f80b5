//! Block and payload types.

use serde::{Deserialize, Serialize};

/// `details` tag carried by the genesis block.
pub const GENESIS_DETAILS: &str = "Genesis block";

/// `details` tag carried by every submitted model update.
pub const UPDATE_DETAILS: &str = "Model update";

/// `preceding_digest` of the genesis block.
pub const GENESIS_PRECEDING_DIGEST: &str = "0";

/// A participant's model update as recorded on the ledger.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    /// Submitting participant
    pub participant_id: String,
    /// Opaque local-training contribution, one value per model weight
    pub model_update: Vec<f32>,
}

/// One entry of the ledger. Immutable once appended.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Position in the chain; genesis is 0
    pub index: u64,
    /// Creation time, fractional seconds since the Unix epoch
    pub timestamp: f64,
    /// Digest of the previous block
    pub preceding_digest: String,
    /// Proof material checked by the chain validator
    pub credential: String,
    /// Model update, absent on genesis
    pub payload: Option<Payload>,
    /// Free-text tag
    pub details: String,
}

impl Block {
    /// The fixed first block of every ledger.
    pub fn genesis(timestamp: f64) -> Self {
        Self {
            index: 0,
            timestamp,
            preceding_digest: GENESIS_PRECEDING_DIGEST.to_string(),
            credential: String::new(),
            payload: None,
            details: GENESIS_DETAILS.to_string(),
        }
    }

    /// Whether this block has the genesis shape.
    pub fn is_genesis(&self) -> bool {
        self.index == 0
            && self.preceding_digest == GENESIS_PRECEDING_DIGEST
            && self.payload.is_none()
            && self.details == GENESIS_DETAILS
    }

    /// The carried model update, if any.
    pub fn model_update(&self) -> Option<&[f32]> {
        self.payload.as_ref().map(|p| p.model_update.as_slice())
    }
}
