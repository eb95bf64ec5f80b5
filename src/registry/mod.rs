//! Credential Registry: digital twins and issued credentials.
//!
//! Authentication and credential issuance are independent. A participant
//! becomes eligible to submit updates by [`CredentialRegistry::authenticate`];
//! a credential is minted for any subject by [`CredentialRegistry::issue_credential`]
//! without touching the authenticated set.
//!
//! Registry state only grows: there is no deregistration.

pub mod credential;

pub use credential::{mint, verify_credential, Credential};

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::math::unix_timestamp;
use crate::signature::KeyPair;

/// The registry's record of an authenticated participant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DigitalTwin {
    /// Unique participant identifier
    pub participant_id: String,
    /// Registration time, fractional seconds since the Unix epoch
    pub registered_at: f64,
}

/// Tracks digital twins, the authenticated set and the issuance log.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CredentialRegistry {
    twins: BTreeMap<String, DigitalTwin>,
    authenticated: BTreeSet<String>,
    issued: Vec<Credential>,
}

impl CredentialRegistry {
    /// Create a new, empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `participant_id` on first sight.
    ///
    /// Returns `true` if a new digital twin was created, `false` if the
    /// participant was already registered.
    pub fn authenticate(&mut self, participant_id: &str) -> bool {
        if self.twins.contains_key(participant_id) {
            debug!(participant_id, "Duplicate authentication rejected");
            return false;
        }

        let twin = DigitalTwin {
            participant_id: participant_id.to_string(),
            registered_at: unix_timestamp(),
        };
        self.twins.insert(participant_id.to_string(), twin);
        self.authenticated.insert(participant_id.to_string());
        info!(participant_id, "Participant authenticated");
        true
    }

    /// Whether `participant_id` may submit model updates.
    pub fn is_authenticated(&self, participant_id: &str) -> bool {
        self.authenticated.contains(participant_id)
    }

    /// Digital twin for `participant_id`, if registered.
    pub fn twin(&self, participant_id: &str) -> Option<&DigitalTwin> {
        self.twins.get(participant_id)
    }

    /// Mint a credential for `subject_details` and record it in the issuance log.
    pub fn issue_credential(&mut self, authority: &KeyPair, subject_details: &str) -> Credential {
        let credential = mint(authority, subject_details);
        info!(
            token_id = %credential.token_id,
            subject = subject_details,
            "Credential issued"
        );
        self.issued.push(credential.clone());
        credential
    }

    /// All credentials issued so far, in issue order.
    pub fn issued(&self) -> &[Credential] {
        &self.issued
    }

    /// Number of registered participants.
    pub fn len(&self) -> usize {
        self.twins.len()
    }

    /// Whether no participant has registered.
    pub fn is_empty(&self) -> bool {
        self.twins.is_empty()
    }

    /// Iterate over authenticated participant ids in sorted order.
    pub fn participants(&self) -> impl Iterator<Item = &str> {
        self.authenticated.iter().map(String::as_str)
    }
}
