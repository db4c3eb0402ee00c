use serde::{Deserialize, Serialize};
use url::Url;

/// Kind flag the store reports for each child of a container.
///
/// Listings carry this explicitly; nothing in the client inspects URL
/// shapes to tell files from containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Container,
    File,
}

/// One child of a container, as reported by the store's listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerItem {
    pub url: Url,
    pub kind: ResourceKind,
}

impl ContainerItem {
    pub fn file(url: Url) -> Self {
        Self {
            url,
            kind: ResourceKind::File,
        }
    }

    pub fn container(url: Url) -> Self {
        Self {
            url,
            kind: ResourceKind::Container,
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind == ResourceKind::File
    }

    pub fn is_container(&self) -> bool {
        self.kind == ResourceKind::Container
    }
}
