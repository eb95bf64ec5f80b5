//! Append-only ledger of model updates.
//!
//! Blocks are linked by [`digest_of`] the previous block and carry proof
//! material produced according to the ledger's [`ProofPolicy`]. The only
//! mutation entry points are [`Ledger::append_genesis`] and [`Ledger::submit`].
//!
//! A ledger without its genesis block is not bootstrapped; submitting to one
//! panics.

pub mod block;
pub mod digest;
pub mod proof;

pub use block::{Block, Payload, GENESIS_DETAILS, UPDATE_DETAILS};
pub use digest::{digest_of, DigestPolicy};
pub use proof::{admits, mine, ProofPolicy, DEFAULT_DIFFICULTY, MAX_DIFFICULTY};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::math::unix_timestamp;
use crate::registry::CredentialRegistry;

/// Digest and proof rules a ledger is built and audited under.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainPolicy {
    /// Fields covered by the linkage digest
    #[serde(default)]
    pub digest: DigestPolicy,
    /// How block credentials are produced
    #[serde(default)]
    pub proof: ProofPolicy,
}

/// Ordered, append-only sequence of blocks.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Ledger {
    blocks: Vec<Block>,
    policy: ChainPolicy,
}

impl Ledger {
    /// Create an empty ledger. Call [`append_genesis`](Self::append_genesis) before use.
    ///
    /// # Panics
    ///
    /// If the mining difficulty exceeds [`MAX_DIFFICULTY`].
    pub fn new(policy: ChainPolicy) -> Self {
        assert!(
            policy.proof.difficulty() <= MAX_DIFFICULTY,
            "proof difficulty {} exceeds the mineable maximum",
            policy.proof.difficulty()
        );
        Self {
            blocks: Vec::new(),
            policy,
        }
    }

    /// Create a ledger holding only its genesis block.
    pub fn bootstrap(policy: ChainPolicy) -> Self {
        let mut ledger = Self::new(policy);
        ledger.append_genesis();
        ledger
    }

    /// Adopt an externally supplied chain, e.g. one loaded for auditing.
    ///
    /// No checks are made here; run the chain validator on the result.
    pub fn from_blocks(blocks: Vec<Block>, policy: ChainPolicy) -> Self {
        Self { blocks, policy }
    }

    /// Insert the genesis block.
    ///
    /// # Panics
    ///
    /// If the ledger already has blocks.
    pub fn append_genesis(&mut self) {
        assert!(
            self.blocks.is_empty(),
            "genesis block appended to a non-empty ledger"
        );
        let genesis = Block::genesis(unix_timestamp());
        debug!(timestamp = genesis.timestamp, "Genesis block created");
        self.blocks.push(genesis);
    }

    /// Append `model_update` from `participant_id` if the registry has
    /// authenticated them.
    ///
    /// Returns `false` (and leaves the ledger unchanged) for unauthenticated
    /// participants.
    ///
    /// # Panics
    ///
    /// If the ledger has no genesis block.
    pub fn submit(
        &mut self,
        participant_id: &str,
        model_update: Vec<f32>,
        registry: &CredentialRegistry,
    ) -> bool {
        if !registry.is_authenticated(participant_id) {
            debug!(participant_id, "Submission from unauthenticated participant rejected");
            return false;
        }

        let Some(previous) = self.blocks.last() else {
            panic!("ledger used before genesis block was appended");
        };

        let index = previous.index + 1;
        let preceding_digest = digest_of(previous, self.policy.digest);
        let credential = match self.policy.proof {
            ProofPolicy::Mined { difficulty } => {
                let (credential, nonce) = mine(&preceding_digest, &previous.credential, difficulty);
                debug!(index, nonce, "Block credential mined");
                credential
            }
            ProofPolicy::Placeholder => String::new(),
        };

        self.blocks.push(Block {
            index,
            timestamp: unix_timestamp(),
            preceding_digest,
            credential,
            payload: Some(Payload {
                participant_id: participant_id.to_string(),
                model_update,
            }),
            details: UPDATE_DETAILS.to_string(),
        });
        info!(index, participant_id, "Model update appended");
        true
    }

    /// All blocks, genesis first.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Most recent block.
    pub fn last(&self) -> Option<&Block> {
        self.blocks.last()
    }

    /// Number of blocks, genesis included.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the ledger has no blocks (not even genesis).
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Rules this ledger is built under.
    pub fn policy(&self) -> ChainPolicy {
        self.policy
    }

    /// Iterate over payload-bearing blocks.
    pub fn payloads(&self) -> impl Iterator<Item = (&Block, &Payload)> {
        self.blocks
            .iter()
            .filter_map(|b| b.payload.as_ref().map(|p| (b, p)))
    }

    /// Linkage digest of `block` under this ledger's policy.
    pub fn digest_of(&self, block: &Block) -> String {
        digest_of(block, self.policy.digest)
    }
}
