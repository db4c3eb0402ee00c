use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;

use super::web_id::WebId;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("HTTP client construction failed: {0}")]
    Client(#[from] reqwest::Error),
    #[error("credential is not a valid header value")]
    InvalidCredential,
}

/// An authenticated context for pod operations.
///
/// Bundles the caller's own [`WebId`] with an HTTP client that attaches
/// the caller's credential to every request. The session is read-only to
/// the pipelines built on top of it; nothing here refreshes or persists
/// credentials.
#[derive(Debug, Clone)]
pub struct Session {
    web_id: WebId,
    client: Client,
}

impl Session {
    /// Build a session from an already-issued bearer credential.
    pub fn from_bearer(web_id: WebId, token: &str) -> Result<Self, SessionError> {
        let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| SessionError::InvalidCredential)?;
        value.set_sensitive(true);
        let mut default_headers = HeaderMap::new();
        default_headers.insert(AUTHORIZATION, value);
        let client = Client::builder().default_headers(default_headers).build()?;
        Ok(Self { web_id, client })
    }

    /// A session with no credential attached.
    ///
    /// Useful against public resources and in tests; a live pod will
    /// reject writes from it.
    pub fn unauthenticated(web_id: WebId) -> Self {
        Self {
            web_id,
            client: Client::new(),
        }
    }

    /// The caller's own identity.
    pub fn web_id(&self) -> &WebId {
        &self.web_id
    }

    /// The authenticated fetch capability.
    pub fn http(&self) -> &Client {
        &self.client
    }
}
