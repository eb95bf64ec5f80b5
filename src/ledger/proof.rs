//! Proof-of-work-style admission predicate for block credentials.
//!
//! A block is admitted when `SHA-256(current.credential || base.credential)`
//! starts with `difficulty` hex zeros, where `base` is the preceding block.
//! Under [`ProofPolicy::Mined`] the ledger searches for such a credential at
//! submission time; under [`ProofPolicy::Placeholder`] credentials stay empty
//! and the predicate is checked against `SHA-256("")`, which never passes.

use serde::{Deserialize, Serialize};

use crate::math::sha256_hex;

/// Number of leading hex zeros required by default.
pub const DEFAULT_DIFFICULTY: usize = 4;

/// Highest difficulty accepted: each extra zero multiplies the expected
/// search by 16, and 8 zeros already needs ~4.3e9 candidates.
pub const MAX_DIFFICULTY: usize = 8;

/// How block credentials are produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ProofPolicy {
    /// Search for a credential satisfying the predicate on every append
    Mined {
        /// Leading hex zeros required
        difficulty: usize,
    },
    /// Leave credentials empty
    Placeholder,
}

impl Default for ProofPolicy {
    fn default() -> Self {
        ProofPolicy::Mined {
            difficulty: DEFAULT_DIFFICULTY,
        }
    }
}

impl ProofPolicy {
    /// Leading hex zeros the validator requires.
    pub fn difficulty(&self) -> usize {
        match self {
            ProofPolicy::Mined { difficulty } => *difficulty,
            ProofPolicy::Placeholder => DEFAULT_DIFFICULTY,
        }
    }
}

/// Proof digest for `current` against its `base`.
pub fn proof_digest(current: &str, base: &str) -> String {
    sha256_hex(format!("{}{}", current, base))
}

/// Whether `current` is admitted after `base` at `difficulty`.
pub fn admits(current: &str, base: &str, difficulty: usize) -> bool {
    has_zero_prefix(&proof_digest(current, base), difficulty)
}

fn has_zero_prefix(digest: &str, difficulty: usize) -> bool {
    digest.len() >= difficulty && digest.bytes().take(difficulty).all(|b| b == b'0')
}

/// Find a credential admitted after `base`, bound to `preceding_digest`.
///
/// Candidates are `SHA-256(preceding_digest || ":" || nonce)` for nonce
/// counting up from zero. Returns the credential and the winning nonce.
pub fn mine(preceding_digest: &str, base: &str, difficulty: usize) -> (String, u64) {
    let mut nonce = 0u64;
    loop {
        let candidate = sha256_hex(format!("{}:{}", preceding_digest, nonce));
        if admits(&candidate, base, difficulty) {
            return (candidate, nonce);
        }
        nonce += 1;
    }
}
