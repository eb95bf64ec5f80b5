//! Chain validation.
//!
//! Walks the ledger once, checking digest linkage and the proof predicate
//! for every block after genesis. A failed check is a diagnostic outcome,
//! not an error: auditing routinely runs against suspect chains.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::ledger::{admits, digest_of, Block, ChainPolicy, Ledger};

/// Outcome of a chain audit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChainStatus {
    /// Every block passed both checks
    Valid,
    /// The ledger has no blocks at all
    Empty,
    /// The first block does not have the genesis shape
    MalformedGenesis,
    /// `preceding_digest` of the block at this position does not match its predecessor
    BrokenLink {
        /// Position of the offending block
        index: usize,
    },
    /// Block index is not its predecessor's plus one
    IndexGap {
        /// Position of the offending block
        index: usize,
    },
    /// The block's credential failed the proof predicate
    ProofRejected {
        /// Position of the offending block
        index: usize,
    },
}

impl ChainStatus {
    /// Whether the audit passed.
    pub fn is_valid(&self) -> bool {
        matches!(self, ChainStatus::Valid)
    }
}

/// Audit `blocks` under `policy`.
pub fn validate_chain(blocks: &[Block], policy: &ChainPolicy) -> ChainStatus {
    let Some(genesis) = blocks.first() else {
        return ChainStatus::Empty;
    };
    if !genesis.is_genesis() {
        return ChainStatus::MalformedGenesis;
    }

    let difficulty = policy.proof.difficulty();
    let mut base = genesis;

    for (i, pair) in blocks.windows(2).enumerate() {
        let (previous, current) = (&pair[0], &pair[1]);
        let position = i + 1;

        if current.preceding_digest != digest_of(previous, policy.digest) {
            return ChainStatus::BrokenLink { index: position };
        }
        if current.index != previous.index + 1 {
            return ChainStatus::IndexGap { index: position };
        }
        if !admits(&current.credential, &base.credential, difficulty) {
            return ChainStatus::ProofRejected { index: position };
        }

        base = current;
    }

    ChainStatus::Valid
}

/// Audit `ledger` under its own policy, logging any failure.
pub fn validate(ledger: &Ledger) -> bool {
    let status = validate_chain(ledger.blocks(), &ledger.policy());
    if !status.is_valid() {
        warn!(?status, len = ledger.len(), "Ledger failed validation");
    }
    status.is_valid()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{DigestPolicy, ProofPolicy};
    use crate::registry::CredentialRegistry;

    fn chain(policy: ChainPolicy, n: usize) -> Ledger {
        let mut registry = CredentialRegistry::new();
        registry.authenticate("alice");
        let mut ledger = Ledger::bootstrap(policy);
        for i in 0..n {
            ledger.submit("alice", vec![i as f32 * 0.1; 3], &registry);
        }
        ledger
    }

    fn fast_policy() -> ChainPolicy {
        ChainPolicy {
            proof: ProofPolicy::Mined { difficulty: 2 },
            ..ChainPolicy::default()
        }
    }

    #[test]
    fn test_genesis_only_is_valid() {
        let ledger = Ledger::bootstrap(ChainPolicy::default());
        assert!(validate(&ledger));
    }

    #[test]
    fn test_untouched_chain_is_valid() {
        let ledger = chain(ChainPolicy::default(), 3);
        assert_eq!(
            validate_chain(ledger.blocks(), &ledger.policy()),
            ChainStatus::Valid
        );
    }

    #[test]
    fn test_empty_is_invalid() {
        let status = validate_chain(&[], &ChainPolicy::default());
        assert_eq!(status, ChainStatus::Empty);
        assert!(!status.is_valid());
    }

    #[test]
    fn test_chain_must_start_at_genesis() {
        let ledger = chain(fast_policy(), 3);
        let truncated = ledger.blocks()[1..].to_vec();
        assert_eq!(
            validate_chain(&truncated, &ledger.policy()),
            ChainStatus::MalformedGenesis
        );

        let mut blocks = ledger.blocks().to_vec();
        blocks[0].payload = blocks[1].payload.clone();
        assert_eq!(
            validate_chain(&blocks, &ledger.policy()),
            ChainStatus::MalformedGenesis
        );
    }

    #[test]
    fn test_corrupted_digest_detected() {
        let ledger = chain(fast_policy(), 3);
        let mut blocks = ledger.blocks().to_vec();
        blocks[2].preceding_digest = "corrupted_data".to_string();
        assert_eq!(
            validate_chain(&blocks, &ledger.policy()),
            ChainStatus::BrokenLink { index: 2 }
        );
    }

    #[test]
    fn test_tampered_details_breaks_next_link() {
        let ledger = chain(fast_policy(), 3);
        let mut blocks = ledger.blocks().to_vec();
        blocks[1].details = "Forged".to_string();
        assert_eq!(
            validate_chain(&blocks, &ledger.policy()),
            ChainStatus::BrokenLink { index: 2 }
        );
    }

    #[test]
    fn test_index_gap_detected() {
        let ledger = chain(fast_policy(), 2);
        let mut blocks = ledger.blocks().to_vec();
        blocks[2].index = 7;
        assert_eq!(
            validate_chain(&blocks, &ledger.policy()),
            ChainStatus::IndexGap { index: 2 }
        );
    }

    #[test]
    fn test_forged_credential_rejected() {
        let ledger = chain(fast_policy(), 2);
        let mut blocks = ledger.blocks().to_vec();
        // SHA-256("") starts with "e3"
        blocks[1].credential = String::new();
        assert_eq!(
            validate_chain(&blocks, &ledger.policy()),
            ChainStatus::ProofRejected { index: 1 }
        );
    }

    #[test]
    fn test_placeholder_chain_fails_proof() {
        let policy = ChainPolicy {
            proof: ProofPolicy::Placeholder,
            ..ChainPolicy::default()
        };
        let ledger = chain(policy, 1);
        assert_eq!(
            validate_chain(ledger.blocks(), &policy),
            ChainStatus::ProofRejected { index: 1 }
        );
    }

    #[test]
    fn test_payload_tamper_depends_on_digest_policy() {
        let exclude = chain(fast_policy(), 2);
        let mut blocks = exclude.blocks().to_vec();
        if let Some(p) = blocks[1].payload.as_mut() {
            p.model_update = vec![9.0; 3];
        }
        assert!(validate_chain(&blocks, &exclude.policy()).is_valid());

        let include_policy = ChainPolicy {
            digest: DigestPolicy::IncludePayload,
            ..fast_policy()
        };
        let include = chain(include_policy, 2);
        let mut blocks = include.blocks().to_vec();
        if let Some(p) = blocks[1].payload.as_mut() {
            p.model_update = vec![9.0; 3];
        }
        assert_eq!(
            validate_chain(&blocks, &include_policy),
            ChainStatus::BrokenLink { index: 2 }
        );
    }
}
