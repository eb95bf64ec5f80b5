//! Federation context.
//!
//! [`Federation`] owns the issuing key pair, the credential registry, the
//! ledger, the global model and the aggregation history. It is created fully
//! bootstrapped, so no operation can observe a ledger without genesis or a
//! missing key pair.
//!
//! All methods take `&self`; share a federation across threads with `Arc`.
//! Lock order is registry → ledger and model → audit → ledger. The ledger
//! write lock is held across index assignment, digest computation, mining
//! and append, so concurrent submitters are serialised and never produce
//! sibling blocks.

use ndarray::Array1;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::aggregators::{self, max_drift};
use crate::config::FederationConfig;
use crate::error::{LedgerFlError, Result};
use crate::ledger::Ledger;
use crate::model::GlobalModel;
use crate::registry::{self, Credential, CredentialRegistry};
use crate::signature::{KeyPair, PublicKey};
use crate::verification::{self, AggregationAuditEntry, AuditLog, ChainStatus};

/// Result of one aggregation round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// Round number (0-indexed)
    pub round: usize,
    /// The new global model
    pub model: GlobalModel,
    /// Largest per-weight change from the previous global model
    pub max_drift: f32,
    /// Whether the drift gate passed
    pub within_tolerance: bool,
}

/// Explicit context holding all federation state.
pub struct Federation {
    config: FederationConfig,
    authority: KeyPair,
    registry: RwLock<CredentialRegistry>,
    ledger: RwLock<Ledger>,
    model: RwLock<GlobalModel>,
    audit: RwLock<AuditLog>,
}

impl Federation {
    /// Validate `config`, generate the key pair, a random initial model and
    /// the genesis block.
    pub fn bootstrap(config: FederationConfig) -> Result<Self> {
        config.validate()?;
        let model = GlobalModel::random(config.model_dim)?;
        Ok(Self::with_parts(config, KeyPair::generate(), model))
    }

    /// Bootstrap with a caller-supplied key pair and initial model.
    pub fn bootstrap_with(
        config: FederationConfig,
        authority: KeyPair,
        model: GlobalModel,
    ) -> Result<Self> {
        config.validate()?;
        if model.dim() != config.model_dim {
            return Err(LedgerFlError::DimensionMismatch {
                block: 0,
                expected: config.model_dim,
                actual: model.dim(),
            });
        }
        Ok(Self::with_parts(config, authority, model))
    }

    fn with_parts(config: FederationConfig, authority: KeyPair, model: GlobalModel) -> Self {
        let ledger = Ledger::bootstrap(config.chain);
        info!(
            model_dim = config.model_dim,
            public_key = %authority.public_key().to_hex(),
            "Federation bootstrapped"
        );
        Self {
            config,
            authority,
            registry: RwLock::new(CredentialRegistry::new()),
            ledger: RwLock::new(ledger),
            model: RwLock::new(model),
            audit: RwLock::new(AuditLog::new()),
        }
    }

    /// Register `participant_id`; `false` if already registered.
    pub fn authenticate(&self, participant_id: &str) -> bool {
        self.registry.write().authenticate(participant_id)
    }

    /// Whether `participant_id` has been authenticated.
    pub fn is_authenticated(&self, participant_id: &str) -> bool {
        self.registry.read().is_authenticated(participant_id)
    }

    /// Mint a signed credential for `subject_details`.
    pub fn issue_credential(&self, subject_details: &str) -> Credential {
        self.registry
            .write()
            .issue_credential(&self.authority, subject_details)
    }

    /// Check a credential against this federation's public key.
    pub fn verify_credential(&self, credential: &Credential) -> bool {
        registry::verify_credential(&self.public_key(), credential)
    }

    /// Append a model update from an authenticated participant.
    pub fn submit(&self, participant_id: &str, model_update: Vec<f32>) -> bool {
        let registry = self.registry.read();
        let mut ledger = self.ledger.write();
        ledger.submit(participant_id, model_update, &registry)
    }

    /// Audit the ledger.
    pub fn validate(&self) -> bool {
        verification::validate(&self.ledger.read())
    }

    /// Audit the ledger, reporting where it failed.
    pub fn validation_status(&self) -> ChainStatus {
        let ledger = self.ledger.read();
        verification::validate_chain(ledger.blocks(), &ledger.policy())
    }

    /// Fold every ledger payload into a candidate model.
    pub fn aggregate(&self) -> Result<Array1<f32>> {
        aggregators::aggregate(
            &self.ledger.read(),
            self.config.model_dim,
            self.config.denominator,
        )
    }

    /// Drift gate using the configured tolerance.
    pub fn benchmark(&self, candidate: &[f32], baseline: &[f32]) -> bool {
        aggregators::benchmark(candidate, baseline, self.config.drift_tolerance)
    }

    /// Aggregate, benchmark against the current global model, record the
    /// round and replace the global model.
    ///
    /// The model is replaced even when the drift gate fails; the failure is
    /// logged and kept in the audit log.
    pub fn run_round(&self) -> Result<RoundOutcome> {
        let mut model = self.model.write();
        let mut audit = self.audit.write();

        let (candidate, ledger_len, n_payloads) = {
            let ledger = self.ledger.read();
            let candidate = aggregators::aggregate(
                &ledger,
                self.config.model_dim,
                self.config.denominator,
            )?;
            (candidate, ledger.len(), ledger.payloads().count())
        };

        let candidate = GlobalModel::from(candidate);
        let drift = max_drift(candidate.weights(), model.weights());
        let within_tolerance = self.benchmark(candidate.weights(), model.weights());
        let round = audit.len();

        audit.push(AggregationAuditEntry {
            round,
            ledger_len,
            n_payloads,
            denominator: self.config.denominator,
            max_drift: drift,
            within_tolerance,
        });

        if within_tolerance {
            info!(round, n_payloads, max_drift = drift, "Aggregation round complete");
        } else {
            warn!(round, n_payloads, max_drift = drift, "Significant model change detected");
        }

        *model = candidate.clone();
        Ok(RoundOutcome {
            round,
            model: candidate,
            max_drift: drift,
            within_tolerance,
        })
    }

    /// Copy of the current global model.
    pub fn global_model(&self) -> GlobalModel {
        self.model.read().clone()
    }

    /// Number of ledger blocks, genesis included.
    pub fn ledger_len(&self) -> usize {
        self.ledger.read().len()
    }

    /// Copy of the ledger, e.g. for export by a persistence collaborator.
    pub fn ledger_snapshot(&self) -> Ledger {
        self.ledger.read().clone()
    }

    /// Copy of the aggregation history.
    pub fn audit_log(&self) -> AuditLog {
        self.audit.read().clone()
    }

    /// Copy of the credential registry.
    pub fn registry_snapshot(&self) -> CredentialRegistry {
        self.registry.read().clone()
    }

    /// Public commitment of the issuing key pair.
    pub fn public_key(&self) -> PublicKey {
        self.authority.public_key()
    }

    /// Configuration this federation runs with.
    pub fn config(&self) -> &FederationConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{ChainPolicy, ProofPolicy};

    fn fast_config() -> FederationConfig {
        FederationConfig {
            chain: ChainPolicy {
                proof: ProofPolicy::Mined { difficulty: 2 },
                ..ChainPolicy::default()
            },
            ..FederationConfig::default()
        }
    }

    #[test]
    fn test_bootstrap_state() {
        let fed = Federation::bootstrap(FederationConfig::default()).unwrap();
        assert_eq!(fed.ledger_len(), 1);
        assert_eq!(fed.global_model().dim(), 10);
        assert!(fed.validate());
        assert!(fed.audit_log().is_empty());
    }

    #[test]
    fn test_bootstrap_rejects_bad_config() {
        let config = FederationConfig {
            model_dim: 0,
            ..FederationConfig::default()
        };
        assert!(Federation::bootstrap(config).is_err());
    }

    #[test]
    fn test_bootstrap_with_dimension_check() {
        let model = GlobalModel::from_weights(vec![0.5; 3]).unwrap();
        assert!(Federation::bootstrap_with(fast_config(), KeyPair::generate(), model).is_err());
    }

    #[test]
    fn test_credential_verifies_against_federation_key() {
        let fed = Federation::bootstrap(fast_config()).unwrap();
        let cred = fed.issue_credential("Alice");
        assert!(fed.verify_credential(&cred));
        assert!(!fed.is_authenticated("Alice"));
        assert_eq!(fed.registry_snapshot().issued().len(), 1);
    }

    #[test]
    fn test_run_round_replaces_model() {
        let model = GlobalModel::from_weights(vec![0.5; 10]).unwrap();
        let fed = Federation::bootstrap_with(fast_config(), KeyPair::generate(), model).unwrap();
        fed.authenticate("Charlie");
        fed.submit("Charlie", vec![1.0; 10]);

        // (1.0) / 2 blocks = 0.5: no drift
        let outcome = fed.run_round().unwrap();
        assert_eq!(outcome.round, 0);
        assert!(outcome.within_tolerance);
        assert_eq!(fed.global_model(), outcome.model);

        let log = fed.audit_log();
        assert_eq!(log.len(), 1);
        assert_eq!(log.entries()[0].ledger_len, 2);
        assert_eq!(log.entries()[0].n_payloads, 1);
    }

    #[test]
    fn test_run_round_flags_drift() {
        let model = GlobalModel::from_weights(vec![0.5; 10]).unwrap();
        let fed = Federation::bootstrap_with(fast_config(), KeyPair::generate(), model).unwrap();

        // Genesis only: aggregate is all zeros
        let outcome = fed.run_round().unwrap();
        assert!(!outcome.within_tolerance);
        assert!((outcome.max_drift - 0.5).abs() < 1e-6);
        assert_eq!(fed.global_model().weights(), &[0.0; 10]);
        assert_eq!(fed.audit_log().flagged().count(), 1);
    }
}
