//! Identity-provider configuration.
//!
//! Pods live under a hosting provider (e.g. `solidcommunity.net`), and a
//! caller naming another pod may pass either a full host or just the pod
//! name. The provider origin used to complete bare names is an explicit
//! configuration value threaded into the locator and the permission
//! manager, never a process-wide constant.

use url::Url;

use crate::identity::WebId;

/// The conventional community provider, used by [`PodConfig::default`].
pub const DEFAULT_PROVIDER: &str = "solidcommunity.net";

#[derive(Debug, thiserror::Error)]
pub enum PodConfigError {
    #[error("invalid pod host '{host}': {source}")]
    InvalidHost {
        host: String,
        #[source]
        source: url::ParseError,
    },
}

/// Configuration for resolving pods hosted under an identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PodConfig {
    provider: String,
}

impl PodConfig {
    /// Configuration for pods hosted under the given provider host.
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
        }
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Complete a pod name into a full host.
    ///
    /// Input that already looks like a host (contains a `.`) is taken
    /// as-is; a bare pod name is completed with the configured provider.
    pub fn pod_host(&self, other_pod: &str) -> String {
        let other_pod = other_pod.trim();
        if other_pod.contains('.') {
            other_pod.to_string()
        } else {
            format!("{}.{}", other_pod, self.provider)
        }
    }

    /// The root URL of another pod: `https://<host>/`.
    pub fn pod_root(&self, other_pod: &str) -> Result<Url, PodConfigError> {
        let host = self.pod_host(other_pod);
        Url::parse(&format!("https://{}/", host)).map_err(|source| PodConfigError::InvalidHost {
            host,
            source,
        })
    }

    /// The conventional WebID of another pod's owner:
    /// `https://<host>/profile/card#me`.
    pub fn web_id(&self, other_pod: &str) -> Result<WebId, PodConfigError> {
        let host = self.pod_host(other_pod);
        let url = Url::parse(&format!("https://{}/profile/card#me", host)).map_err(|source| {
            PodConfigError::InvalidHost { host, source }
        })?;
        Ok(WebId::new(url))
    }
}

impl Default for PodConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PROVIDER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_name_is_completed() {
        let config = PodConfig::default();
        assert_eq!(config.pod_host("bob"), "bob.solidcommunity.net");
        assert_eq!(
            config.web_id("bob").unwrap().as_str(),
            "https://bob.solidcommunity.net/profile/card#me"
        );
    }

    #[test]
    fn test_full_host_is_kept() {
        let config = PodConfig::new("example.org");
        assert_eq!(config.pod_host("bob.other.net"), "bob.other.net");
        assert_eq!(
            config.pod_root("bob.other.net").unwrap().as_str(),
            "https://bob.other.net/"
        );
    }
}
