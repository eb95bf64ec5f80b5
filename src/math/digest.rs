//! SHA-256 hex digests and wall-clock timestamps.

use chrono::Utc;
use sha2::{Digest, Sha256};

/// SHA-256 over `input`, as 64 lowercase hex characters.
pub fn sha256_hex(input: impl AsRef<[u8]>) -> String {
    hex::encode(Sha256::digest(input.as_ref()))
}

/// Current time as fractional seconds since the Unix epoch (microsecond resolution).
pub fn unix_timestamp() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_vector() {
        assert_eq!(
            sha256_hex(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_sha256_hex_shape() {
        let d = sha256_hex("Genesis block");
        assert_eq!(d.len(), 64);
        assert!(d.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_timestamp_is_recent() {
        // 2020-01-01T00:00:00Z
        assert!(unix_timestamp() > 1_577_836_800.0);
    }
}
