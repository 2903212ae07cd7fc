//! API credentials and request signing for BitAsset's private endpoints
//!
//! # Signature scheme
//!
//! 1. `apiAccessKey` and `apiTimeStamp` (milliseconds) are prepended to the
//!    request's query parameters.
//! 2. The secret key is hashed with SHA-1 and hex encoded.
//! 3. The parameters are URL encoded and signed with HMAC-SHA256, keyed by
//!    the *hex text* of the SHA-1 digest (not the raw digest bytes).
//! 4. The lowercase hex signature is sent as `apiSign`.
//!
//! # Security
//!
//! The secret key is stored using the `secrecy` crate which zeroizes memory
//! on drop and keeps the value out of `Debug` output.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha1::{Digest, Sha1};
use sha2::Sha256;
use tracing::trace;

use crate::error::{AuthError, AuthResult};
use crate::query::QueryParams;

type HmacSha256 = Hmac<Sha256>;

/// Query key carrying the access key
pub const ACCESS_KEY_PARAM: &str = "apiAccessKey";
/// Query key carrying the nonce
pub const TIMESTAMP_PARAM: &str = "apiTimeStamp";
/// Query key carrying the signature
pub const SIGNATURE_PARAM: &str = "apiSign";

/// Environment variable holding the access key
pub const ACCESS_KEY_ENV: &str = "BITASSET_ACCESS_KEY";
/// Environment variable holding the secret key
pub const SECRET_KEY_ENV: &str = "BITASSET_SECRET_KEY";

/// API credentials for authenticated requests
pub struct Credentials {
    access_key: String,
    secret_key: SecretString,
}

impl Credentials {
    /// Create new credentials
    ///
    /// Both keys must be non-empty.
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> AuthResult<Self> {
        let access_key = access_key.into();
        let secret_key = secret_key.into();

        if access_key.is_empty() {
            return Err(AuthError::InvalidCredentials("access key is empty".to_string()));
        }
        if secret_key.is_empty() {
            return Err(AuthError::InvalidCredentials("secret key is empty".to_string()));
        }

        Ok(Self {
            access_key,
            secret_key: SecretString::from(secret_key),
        })
    }

    /// Create credentials from environment variables
    ///
    /// Reads `BITASSET_ACCESS_KEY` and `BITASSET_SECRET_KEY`.
    pub fn from_env() -> AuthResult<Self> {
        let access_key = std::env::var(ACCESS_KEY_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(ACCESS_KEY_ENV.to_string()))?;
        let secret_key = std::env::var(SECRET_KEY_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(SECRET_KEY_ENV.to_string()))?;

        Self::new(access_key, secret_key)
    }

    /// Get the access key
    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    /// Current time in milliseconds, as sent in `apiTimeStamp`
    pub fn generate_nonce() -> String {
        chrono::Utc::now().timestamp_millis().to_string()
    }

    /// Sign `query` with a fresh nonce
    ///
    /// Returns the full query to send: `apiAccessKey`, `apiTimeStamp` and
    /// `apiSign` followed by the caller's parameters. Caller parameters win
    /// on key collision.
    pub fn sign(&self, query: &QueryParams) -> QueryParams {
        self.sign_at(query, &Self::generate_nonce())
    }

    /// Sign `query` with an explicit nonce
    pub fn sign_at(&self, query: &QueryParams, nonce: &str) -> QueryParams {
        let mut base = QueryParams::new()
            .with(ACCESS_KEY_PARAM, &self.access_key)
            .with(TIMESTAMP_PARAM, nonce);
        base.merge(query);

        let signature = hmac_sha256_hex(&self.secret_digest(), &base.to_signing_payload());
        trace!(nonce, "Signed private request");

        let mut envelope = QueryParams::new()
            .with(ACCESS_KEY_PARAM, &self.access_key)
            .with(TIMESTAMP_PARAM, nonce)
            .with(SIGNATURE_PARAM, signature);
        envelope.merge(query);
        envelope
    }

    fn secret_digest(&self) -> String {
        sha1_hex(self.secret_key.expose_secret())
    }
}

/// Lowercase hex SHA-1 of `input`
pub fn sha1_hex(input: &str) -> String {
    hex::encode(Sha1::digest(input.as_bytes()))
}

/// Lowercase hex HMAC-SHA256 of `message` keyed by the UTF-8 bytes of `key`
pub fn hmac_sha256_hex(key: &str, message: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(key.as_bytes()).expect("HMAC can take key of any size");
    mac.update(message.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self {
            access_key: self.access_key.clone(),
            secret_key: SecretString::from(self.secret_key.expose_secret().to_owned()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let visible: String = self.access_key.chars().take(8).collect();
        f.debug_struct("Credentials")
            .field("access_key", &format!("{}...", visible))
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}
