//! Authentication modes and request signing.
//!
//! # Design
//! The mode is chosen once, when the client is constructed, and never changes.
//! `Authentication::suffix` is one exhaustive match over the three modes:
//! anonymous requests get nothing appended, keyed requests get `&key=`, and
//! signed requests get `&client=` plus an HMAC-SHA1 signature computed over
//! the API path and the already-rendered query.

use std::fmt;

use base64::engine::general_purpose::{STANDARD, URL_SAFE};
use base64::Engine as _;
use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::builder::API_PATH;
use crate::error::{GeocodeError, Result};

type HmacSha1 = Hmac<Sha1>;

/// Client id and decoded signing secret for signed (API-for-Work) requests.
///
/// The HMAC state is keyed once here and cloned for every signature.
#[derive(Clone)]
pub struct SigningKey {
    client_id: String,
    secret: Vec<u8>,
    mac: HmacSha1,
}

impl SigningKey {
    /// Validate the client id and decode the URL-safe base64 crypto key.
    pub fn new(client_id: impl Into<String>, crypto_key: &str) -> Result<Self> {
        let client_id = client_id.into();
        if client_id.trim().is_empty() {
            return Err(GeocodeError::invalid_argument("client_id", "must not be blank"));
        }
        if crypto_key.trim().is_empty() {
            return Err(GeocodeError::invalid_argument("crypto_key", "must not be blank"));
        }
        let standard = crypto_key.replace('-', "+").replace('_', "/");
        let secret = STANDARD
            .decode(standard.as_bytes())
            .map_err(|e| GeocodeError::invalid_argument("crypto_key", format!("not valid base64: {e}")))?;
        let mac = HmacSha1::new_from_slice(&secret)
            .map_err(|e| GeocodeError::invalid_argument("crypto_key", e.to_string()))?;
        Ok(Self {
            client_id,
            secret,
            mac,
        })
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// HMAC-SHA1 over `path_and_query`, encoded as URL-safe base64.
    pub fn sign(&self, path_and_query: &str) -> String {
        let mut mac = self.mac.clone();
        mac.update(path_and_query.as_bytes());
        URL_SAFE.encode(mac.finalize().into_bytes())
    }
}

impl PartialEq for SigningKey {
    fn eq(&self, other: &Self) -> bool {
        self.client_id == other.client_id && self.secret == other.secret
    }
}

impl Eq for SigningKey {}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("client_id", &self.client_id)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// How requests are authenticated against the geocoding service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Authentication {
    /// No credentials. The service throttles these requests and rejects
    /// post-search filters.
    #[default]
    Anonymous,
    /// Plain API key, sent as `key=`.
    ///
    /// The key is used as given. Build this variant through
    /// [`Authentication::api_key`], which rejects a blank key.
    ApiKey(String),
    /// Client id plus HMAC signature.
    Signed(SigningKey),
}

impl Authentication {
    pub fn api_key(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(GeocodeError::invalid_argument("api_key", "must not be blank"));
        }
        Ok(Self::ApiKey(key))
    }

    pub fn signed(client_id: impl Into<String>, crypto_key: &str) -> Result<Self> {
        SigningKey::new(client_id, crypto_key).map(Self::Signed)
    }

    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Self::Anonymous)
    }

    /// Short mode name, safe to log.
    pub fn mode(&self) -> &'static str {
        match self {
            Self::Anonymous => "anonymous",
            Self::ApiKey(_) => "api_key",
            Self::Signed(_) => "signed",
        }
    }

    /// Text appended after the rendered query.
    ///
    /// `query` must be the exact fragment that follows [`API_PATH`] in the
    /// final URL; the signature covers `API_PATH + query + "&client=" + id`.
    pub fn suffix(&self, query: &str) -> String {
        match self {
            Self::Anonymous => String::new(),
            Self::ApiKey(key) => format!("&key={}", urlencoding::encode(key)),
            Self::Signed(key) => {
                let client = format!("&client={}", key.client_id);
                let signature = key.sign(&format!("{API_PATH}{query}{client}"));
                format!("{client}&signature={signature}")
            }
        }
    }
}
