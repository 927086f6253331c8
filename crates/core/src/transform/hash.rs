use sha2::{Digest, Sha256};

use super::TransformError;

pub trait Hasher: Send + Sync {
    /// Lowercase hex digest of the message
    fn digest_hex(&self, message: &str) -> Result<String, TransformError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256Hasher;

impl Hasher for Sha256Hasher {
    fn digest_hex(&self, message: &str) -> Result<String, TransformError> {
        Ok(format!("{:x}", Sha256::digest(message.as_bytes())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_vector() {
        assert_eq!(
            Sha256Hasher.digest_hex("abc").unwrap(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_sha256_empty_message() {
        assert_eq!(
            Sha256Hasher.digest_hex("").unwrap(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
