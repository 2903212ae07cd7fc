//! Credentials and request signing for the BitAsset REST API
//!
//! Private BitAsset endpoints authenticate through the query string: the
//! access key, a millisecond timestamp and an HMAC-SHA256 signature are
//! added to the request's parameters. This crate owns that scheme and the
//! ordered [`QueryParams`] type it signs over.
//!
//! # Example
//!
//! ```no_run
//! use bitasset_auth::{Credentials, QueryParams};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let creds = Credentials::from_env()?;
//! let query = QueryParams::new().with("orderId", 12345);
//!
//! let signed = creds.sign(&query);
//! println!("?{}", signed.to_url_query());
//! # Ok(())
//! # }
//! ```

mod credentials;
mod error;
mod query;

pub use credentials::{
    hmac_sha256_hex, sha1_hex, Credentials, ACCESS_KEY_ENV, ACCESS_KEY_PARAM, SECRET_KEY_ENV,
    SIGNATURE_PARAM, TIMESTAMP_PARAM,
};
pub use error::{AuthError, AuthResult};
pub use query::QueryParams;
