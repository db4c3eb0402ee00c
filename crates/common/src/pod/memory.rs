use std::collections::BTreeMap;

use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;
use url::Url;

use crate::acl::AclResource;
use crate::dataset::Dataset;
use crate::identity::{Session, WebId};

use super::backend::PodBackend;
use super::error::{PodError, Result};
use super::resource::ContainerItem;

/// In-process pod, for tests.
///
/// Enforces the store contract the live pod would: containers are
/// created idempotently and refuse deletion while non-empty, file slugs
/// are hints that get re-slugged on collision, and reads by anyone but
/// the container's creator are gated by the container's ACL resource.
/// ACL resources ride along with their target: deleting the target
/// removes them, and they never show up in listings.
#[derive(Debug, Default)]
pub struct MemBackend {
    state: Mutex<MemState>,
}

#[derive(Debug, Default)]
struct MemState {
    /// Container URL -> creating identity.
    containers: BTreeMap<String, WebId>,
    files: BTreeMap<String, StoredFile>,
    datasets: BTreeMap<String, Dataset>,
    /// Target URL -> attached ACL resource.
    acls: BTreeMap<String, AclResource>,
}

// body and content type are held but never served; retrieval hands out
// URLs, not file contents
#[derive(Debug, Clone)]
#[allow(dead_code)]
struct StoredFile {
    content_type: String,
    bytes: Bytes,
}

/// What an agent may do, per the container's ACL.
#[derive(Debug, Clone, Copy)]
enum Action {
    Read,
    Write,
    Control,
}

impl MemState {
    fn container_of(url: &Url) -> Url {
        if url.path().ends_with('/') {
            url.clone()
        } else {
            url.join(".").expect("resource URL has a parent")
        }
    }

    /// Creator of the container governing a URL, if the container exists.
    fn owner_of(&self, url: &Url) -> Option<&WebId> {
        self.containers.get(Self::container_of(url).as_str())
    }

    fn authorize(&self, session: &Session, url: &Url, action: Action) -> Result<()> {
        let container = Self::container_of(url);
        if self.owner_of(url) == Some(session.web_id()) {
            return Ok(());
        }
        let granted = self
            .acls
            .get(container.as_str())
            .and_then(|acl| acl.agent_access(session.web_id()))
            .map(|access| {
                // direct access on the container itself, inherited
                // (default) access on its children
                let modes = if url == &container {
                    access.resource
                } else {
                    access.default
                };
                match action {
                    Action::Read => modes.read,
                    Action::Write => modes.write || modes.append,
                    Action::Control => modes.control,
                }
            })
            .unwrap_or(false);
        if granted {
            Ok(())
        } else {
            Err(PodError::Unauthorized(url.clone()))
        }
    }

    /// Direct children of a container, ACL resources excluded.
    fn children(&self, container: &Url) -> Vec<ContainerItem> {
        let prefix = container.as_str();
        let mut items = Vec::new();
        for key in self.containers.keys() {
            if let Some(rest) = key.strip_prefix(prefix) {
                if !rest.is_empty() && rest.trim_end_matches('/').find('/').is_none() && rest.ends_with('/') {
                    items.push(ContainerItem::container(Url::parse(key).expect("stored key is a URL")));
                }
            }
        }
        for key in self.files.keys().chain(self.datasets.keys()) {
            if let Some(rest) = key.strip_prefix(prefix) {
                if !rest.is_empty() && !rest.contains('/') {
                    items.push(ContainerItem::file(Url::parse(key).expect("stored key is a URL")));
                }
            }
        }
        items
    }

    fn is_empty_container(&self, container: &Url) -> bool {
        let prefix = container.as_str();
        let holds = |key: &String| key.starts_with(prefix) && key.as_str() != prefix;
        !self.containers.keys().any(holds)
            && !self.files.keys().any(holds)
            && !self.datasets.keys().any(holds)
    }
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn slugify(slug: &str) -> String {
        let cleaned: String = slug
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                    c
                } else {
                    '-'
                }
            })
            .collect();
        if cleaned.is_empty() {
            "file".to_string()
        } else {
            cleaned
        }
    }

    /// First free URL for a slug hint inside a container.
    fn assign_url(state: &MemState, container: &Url, slug: &str) -> Result<Url> {
        let base = Self::slugify(slug);
        let (stem, ext) = match base.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => (stem.to_string(), format!(".{ext}")),
            _ => (base.clone(), String::new()),
        };
        let mut candidate = container.join(&base)?;
        let mut n = 0;
        while state.files.contains_key(candidate.as_str())
            || state.datasets.contains_key(candidate.as_str())
        {
            n += 1;
            candidate = container.join(&format!("{stem}-{n}{ext}"))?;
        }
        Ok(candidate)
    }
}

#[async_trait]
impl PodBackend for MemBackend {
    async fn ensure_container(&self, session: &Session, url: &Url) -> Result<()> {
        let mut state = self.state.lock();
        match state.containers.get(url.as_str()) {
            Some(owner) if owner != session.web_id() => Err(PodError::Unauthorized(url.clone())),
            Some(_) => Ok(()),
            None => {
                state
                    .containers
                    .insert(url.to_string(), session.web_id().clone());
                Ok(())
            }
        }
    }

    async fn put_file(
        &self,
        session: &Session,
        container: &Url,
        slug: &str,
        content_type: &str,
        bytes: Bytes,
    ) -> Result<Url> {
        let mut state = self.state.lock();
        if !state.containers.contains_key(container.as_str()) {
            return Err(PodError::NotFound(container.clone()));
        }
        state.authorize(session, container, Action::Write)?;
        let assigned = Self::assign_url(&state, container, slug)?;
        state.files.insert(
            assigned.to_string(),
            StoredFile {
                content_type: content_type.to_string(),
                bytes,
            },
        );
        Ok(assigned)
    }

    async fn list_container(&self, session: &Session, url: &Url) -> Result<Vec<ContainerItem>> {
        let state = self.state.lock();
        if !state.containers.contains_key(url.as_str()) {
            return Err(PodError::NotFound(url.clone()));
        }
        state.authorize(session, url, Action::Read)?;
        Ok(state.children(url))
    }

    async fn get_dataset(&self, session: &Session, url: &Url) -> Result<Dataset> {
        let state = self.state.lock();
        let dataset = state
            .datasets
            .get(url.as_str())
            .ok_or_else(|| PodError::NotFound(url.clone()))?;
        state.authorize(session, url, Action::Read)?;
        Ok(dataset.clone())
    }

    async fn save_dataset(&self, session: &Session, url: &Url, dataset: &Dataset) -> Result<()> {
        let mut state = self.state.lock();
        let container = MemState::container_of(url);
        if !state.containers.contains_key(container.as_str()) {
            return Err(PodError::NotFound(container));
        }
        state.authorize(session, url, Action::Write)?;
        state.datasets.insert(url.to_string(), dataset.clone());
        Ok(())
    }

    async fn delete_file(&self, session: &Session, url: &Url) -> Result<()> {
        let mut state = self.state.lock();
        if !state.files.contains_key(url.as_str()) && !state.datasets.contains_key(url.as_str()) {
            return Err(PodError::NotFound(url.clone()));
        }
        state.authorize(session, url, Action::Write)?;
        state.files.remove(url.as_str());
        state.datasets.remove(url.as_str());
        state.acls.remove(url.as_str());
        Ok(())
    }

    async fn delete_container(&self, session: &Session, url: &Url) -> Result<()> {
        let mut state = self.state.lock();
        if !state.containers.contains_key(url.as_str()) {
            return Err(PodError::NotFound(url.clone()));
        }
        state.authorize(session, url, Action::Write)?;
        if !state.is_empty_container(url) {
            return Err(PodError::ContainerNotEmpty(url.clone()));
        }
        state.containers.remove(url.as_str());
        state.acls.remove(url.as_str());
        Ok(())
    }

    async fn read_acl(&self, session: &Session, target: &Url) -> Result<Option<AclResource>> {
        let state = self.state.lock();
        let exists = state.containers.contains_key(target.as_str())
            || state.files.contains_key(target.as_str())
            || state.datasets.contains_key(target.as_str());
        if !exists {
            return Err(PodError::NotFound(target.clone()));
        }
        state.authorize(session, target, Action::Control)?;
        Ok(state.acls.get(target.as_str()).cloned())
    }

    async fn save_acl(&self, session: &Session, target: &Url, acl: &AclResource) -> Result<()> {
        let mut state = self.state.lock();
        let exists = state.containers.contains_key(target.as_str())
            || state.files.contains_key(target.as_str())
            || state.datasets.contains_key(target.as_str());
        if !exists {
            return Err(PodError::NotFound(target.clone()));
        }
        state.authorize(session, target, Action::Control)?;
        state.acls.insert(target.to_string(), acl.clone());
        Ok(())
    }
}
