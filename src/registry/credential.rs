//! NFT-like signed credentials.
//!
//! A credential attests to a subject string at a point in time. Its
//! `token_id` is the SHA-256 digest of `(subject_details, issued_at)`, and the
//! signature covers the same pair, so the two can be checked together by
//! [`verify_credential`].

use serde::{Deserialize, Serialize};

use crate::math::{sha256_hex, unix_timestamp};
use crate::signature::{verify, KeyPair, PublicKey, Signature};

/// Signed, uniquely identified attestation. Immutable once issued.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    /// 64-character lowercase hex SHA-256 digest
    pub token_id: String,
    /// Issuer's signature over the canonical message
    pub signature: Signature,
    /// Free-text description of the subject
    pub subject_details: String,
    /// Issue time, fractional seconds since the Unix epoch
    pub issued_at: f64,
}

impl Credential {
    /// Bytes covered by the issuer's signature.
    pub fn signing_message(&self) -> Vec<u8> {
        signing_message(&self.subject_details, self.issued_at)
    }
}

/// Mint a credential for `subject_details`, signed by `authority`.
pub fn mint(authority: &KeyPair, subject_details: &str) -> Credential {
    let issued_at = unix_timestamp();
    let token_id = token_id(subject_details, issued_at);
    let signature = authority.sign(&signing_message(subject_details, issued_at));

    Credential {
        token_id,
        signature,
        subject_details: subject_details.to_string(),
        issued_at,
    }
}

/// Check that `credential` was issued by `issuer` and has not been altered.
pub fn verify_credential(issuer: &PublicKey, credential: &Credential) -> bool {
    credential.token_id == token_id(&credential.subject_details, credential.issued_at)
        && verify(issuer, &credential.signing_message(), &credential.signature)
}

fn token_id(subject_details: &str, issued_at: f64) -> String {
    sha256_hex(format!("{}{}", subject_details, issued_at))
}

fn signing_message(subject_details: &str, issued_at: f64) -> Vec<u8> {
    format!("{}|{}", subject_details, issued_at).into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_token_id(s: &str) -> bool {
        s.len() == 64 && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    }

    #[test]
    fn test_mint_fields() {
        let keys = KeyPair::generate();
        let cred = mint(&keys, "Alice");
        assert_eq!(cred.subject_details, "Alice");
        assert!(is_token_id(&cred.token_id));
        assert!(cred.issued_at > 0.0);
    }

    #[test]
    fn test_verify_credential() {
        let keys = KeyPair::generate();
        let cred = mint(&keys, "Alice");
        assert!(verify_credential(&keys.public_key(), &cred));
    }

    #[test]
    fn test_altered_subject_rejected() {
        let keys = KeyPair::generate();
        let mut cred = mint(&keys, "Alice");
        cred.subject_details = "Mallory".to_string();
        assert!(!verify_credential(&keys.public_key(), &cred));
    }

    #[test]
    fn test_other_issuer_rejected() {
        let keys = KeyPair::from_seed(&[1u8; 32]);
        let other = KeyPair::from_seed(&[2u8; 32]);
        let cred = mint(&keys, "Alice");
        assert!(!verify_credential(&other.public_key(), &cred));
    }

    #[test]
    fn test_credential_serde() {
        let keys = KeyPair::generate();
        let cred = mint(&keys, "Bob");
        let json = serde_json::to_string(&cred).unwrap();
        let restored: Credential = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, cred);
        assert!(verify_credential(&keys.public_key(), &restored));
    }
}
