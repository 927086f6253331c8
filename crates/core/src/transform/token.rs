use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header};
use serde::{Deserialize, Serialize};

use super::TransformError;

pub trait TokenSigner: Send + Sync {
    fn sign(&self, username: Option<&str>) -> Result<String, TransformError>;
}

/// Payload carried by issued tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Issued-at, seconds since the epoch
    pub iat: i64,
}

/// HS256 JWTs signed with a shared secret. Tokens carry no expiry.
pub struct HmacTokenSigner {
    key: EncodingKey,
}

impl HmacTokenSigner {
    pub fn new(secret: &str) -> Self {
        Self {
            key: EncodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn sign_claims(&self, claims: &Claims) -> Result<String, TransformError> {
        jsonwebtoken::encode(&Header::default(), claims, &self.key)
            .map_err(|e| TransformError::Token(e.to_string()))
    }
}

impl TokenSigner for HmacTokenSigner {
    fn sign(&self, username: Option<&str>) -> Result<String, TransformError> {
        self.sign_claims(&Claims {
            username: username.map(String::from),
            iat: Utc::now().timestamp(),
        })
    }
}
