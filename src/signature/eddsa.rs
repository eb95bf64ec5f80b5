//! EdDSA-shaped Schnorr signatures over Ed25519.
//!
//! Keys and signatures follow the usual algebra:
//!
//! - key: `a = SHA-512(seed) mod l`, `A = a·B`
//! - sign: `R = r·B`, `c = SHA-512(R || A || m) mod l`, `S = r + c·a mod l`
//! - verify: `S·B == R + c·A`
//!
//! The nonce `r` is drawn fresh from the OS RNG on every call, so signing the
//! same message twice yields two different (both valid) signatures.

use std::fmt;

use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::scalar::Scalar;
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512};

/// Compressed public commitment `A = a·B`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicKey(pub [u8; 32]);

impl PublicKey {
    /// Hex encoding of the compressed point.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    fn decompress(&self) -> Option<EdwardsPoint> {
        CompressedEdwardsY(self.0).decompress()
    }
}

/// Signature pair `(R, S)`: compressed nonce commitment and response scalar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// Compressed nonce commitment `R = r·B`
    pub commitment: [u8; 32],
    /// Response scalar `S = r + c·a`, little-endian
    pub response: [u8; 32],
}

/// Issuing key pair.
///
/// The private scalar never leaves this type; callers only see signatures
/// and the [`PublicKey`].
#[derive(Clone)]
pub struct KeyPair {
    secret: Scalar,
    public: EdwardsPoint,
}

impl KeyPair {
    /// Generate a key pair from a fresh 256-bit OS-random seed.
    pub fn generate() -> Self {
        let mut seed = [0u8; 32];
        OsRng.fill_bytes(&mut seed);
        Self::from_seed(&seed)
    }

    /// Deterministically derive a key pair from a 256-bit seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        let secret = Scalar::from_bytes_mod_order_wide(&sha512_wide(&[seed]));
        let public = EdwardsPoint::mul_base(&secret);
        Self { secret, public }
    }

    /// The public commitment for this key pair.
    pub fn public_key(&self) -> PublicKey {
        PublicKey(self.public.compress().to_bytes())
    }

    /// Sign `message` with a fresh random nonce.
    pub fn sign(&self, message: &[u8]) -> Signature {
        let mut nonce_bytes = [0u8; 64];
        OsRng.fill_bytes(&mut nonce_bytes);
        let nonce = Scalar::from_bytes_mod_order_wide(&nonce_bytes);

        let commitment = EdwardsPoint::mul_base(&nonce).compress().to_bytes();
        let challenge = challenge(&commitment, &self.public_key(), message);
        let response = nonce + challenge * self.secret;

        Signature {
            commitment,
            response: response.to_bytes(),
        }
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public", &self.public_key().to_hex())
            .finish_non_exhaustive()
    }
}

/// Verify `signature` over `message` against `public`.
///
/// Returns `false` for any malformed input: a point that does not decompress
/// or a non-canonical response scalar.
pub fn verify(public: &PublicKey, message: &[u8], signature: &Signature) -> bool {
    let Some(public_point) = public.decompress() else {
        return false;
    };
    let Some(commitment_point) = CompressedEdwardsY(signature.commitment).decompress() else {
        return false;
    };
    let Some(response) = Option::<Scalar>::from(Scalar::from_canonical_bytes(signature.response))
    else {
        return false;
    };

    let challenge = challenge(&signature.commitment, public, message);
    EdwardsPoint::mul_base(&response) == commitment_point + public_point * challenge
}

fn challenge(commitment: &[u8; 32], public: &PublicKey, message: &[u8]) -> Scalar {
    Scalar::from_bytes_mod_order_wide(&sha512_wide(&[commitment, &public.0, message]))
}

fn sha512_wide(parts: &[&[u8]]) -> [u8; 64] {
    let mut hasher = Sha512::new();
    for part in parts {
        hasher.update(part);
    }
    let mut wide = [0u8; 64];
    wide.copy_from_slice(&hasher.finalize());
    wide
}
