//! Block digests used for chain linkage.
//!
//! The default digest covers only `(timestamp, preceding_digest, details)`,
//! which leaves the model-update payload outside the chain linkage: a payload
//! can be rewritten without breaking the next block's `preceding_digest`.
//! [`DigestPolicy::IncludePayload`] closes that gap.

use serde::{Deserialize, Serialize};

use super::block::Block;
use crate::math::sha256_hex;

/// Which block fields feed the linkage digest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DigestPolicy {
    /// `timestamp || preceding_digest || details` only
    #[default]
    ExcludePayload,
    /// Also the length-prefixed participant id and weight vector
    IncludePayload,
}

/// Deterministic SHA-256 hex digest of `block` under `policy`.
pub fn digest_of(block: &Block, policy: DigestPolicy) -> String {
    let mut record = format!(
        "{}{}{}",
        block.timestamp, block.preceding_digest, block.details
    );

    if policy == DigestPolicy::IncludePayload {
        if let Some(payload) = &block.payload {
            // Fixed-width length prefixes keep id and weight bytes from
            // being shifted across the field boundary.
            record.push_str(&format!("{:016x}", payload.participant_id.len()));
            record.push_str(&payload.participant_id);
            record.push_str(&format!("{:016x}", payload.model_update.len()));
            for weight in &payload.model_update {
                record.push_str(&hex::encode(weight.to_le_bytes()));
            }
        }
    }

    sha256_hex(record)
}
