use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum WebIdError {
    #[error("invalid WebID '{0}': {1}")]
    Parse(String, #[source] url::ParseError),
    #[error("WebID '{0}' cannot be a base URL")]
    CannotBeABase(String),
}

/// A WebID: a URL identifying an agent, resolving to a profile document.
///
/// The conventional shape is `https://<pod-host>/profile/card#me`; the
/// pod root is everything before the `profile` path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WebId(Url);

impl WebId {
    pub fn new(url: Url) -> Self {
        Self(url)
    }

    pub fn parse(input: &str) -> Result<Self, WebIdError> {
        let url = Url::parse(input)
            .map_err(|e| WebIdError::Parse(input.to_string(), e))?;
        if url.cannot_be_a_base() {
            return Err(WebIdError::CannotBeABase(input.to_string()));
        }
        Ok(Self(url))
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Derive the root URL of the pod this identity lives on.
    ///
    /// Strips the `profile` path segment and everything after it, along
    /// with any query or fragment. A WebID with no `profile` segment
    /// roots at its origin.
    pub fn pod_root(&self) -> Url {
        let mut root = self.0.clone();
        root.set_fragment(None);
        root.set_query(None);
        let kept: Vec<String> = self
            .0
            .path_segments()
            .map(|segments| {
                segments
                    .take_while(|segment| *segment != "profile")
                    .filter(|segment| !segment.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        let mut path = kept.join("/");
        path.push('/');
        root.set_path(&path);
        root
    }
}

impl std::fmt::Display for WebId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for WebId {
    type Err = WebIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<WebId> for Url {
    fn from(web_id: WebId) -> Url {
        web_id.0
    }
}
