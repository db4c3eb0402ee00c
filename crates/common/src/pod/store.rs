use std::sync::Arc;

use bytes::Bytes;
use tracing::debug;
use url::Url;

use crate::acl::AclResource;
use crate::dataset::Dataset;
use crate::identity::Session;

use super::backend::PodBackend;
use super::error::Result;
use super::http::HttpBackend;
use super::memory::MemBackend;
use super::resource::ContainerItem;

/// Client over a pod's storage and access-control resources.
///
/// A thin façade over a [`PodBackend`]; cloning shares the backend.
#[derive(Debug, Clone)]
pub struct PodStore {
    inner: Arc<dyn PodBackend>,
}

impl PodStore {
    /// Pod client over live HTTP.
    pub fn http() -> Self {
        Self::from_backend(HttpBackend::new())
    }

    /// Ephemeral in-process pod, for tests.
    pub fn memory() -> Self {
        Self::from_backend(MemBackend::new())
    }

    pub fn from_backend(backend: impl PodBackend + 'static) -> Self {
        Self {
            inner: Arc::new(backend),
        }
    }

    pub async fn ensure_container(&self, session: &Session, url: &Url) -> Result<()> {
        debug!(url = %url, "ensuring container");
        self.inner.ensure_container(session, url).await
    }

    pub async fn put_file(
        &self,
        session: &Session,
        container: &Url,
        slug: &str,
        content_type: &str,
        bytes: Bytes,
    ) -> Result<Url> {
        debug!(container = %container, slug = slug, size = bytes.len(), "placing file");
        let assigned = self
            .inner
            .put_file(session, container, slug, content_type, bytes)
            .await?;
        debug!(url = %assigned, "file placed");
        Ok(assigned)
    }

    pub async fn list_container(&self, session: &Session, url: &Url) -> Result<Vec<ContainerItem>> {
        self.inner.list_container(session, url).await
    }

    pub async fn get_dataset(&self, session: &Session, url: &Url) -> Result<Dataset> {
        self.inner.get_dataset(session, url).await
    }

    pub async fn save_dataset(&self, session: &Session, url: &Url, dataset: &Dataset) -> Result<()> {
        debug!(url = %url, things = dataset.len(), "saving dataset");
        self.inner.save_dataset(session, url, dataset).await
    }

    pub async fn delete_file(&self, session: &Session, url: &Url) -> Result<()> {
        debug!(url = %url, "deleting file");
        self.inner.delete_file(session, url).await
    }

    pub async fn delete_container(&self, session: &Session, url: &Url) -> Result<()> {
        debug!(url = %url, "deleting container");
        self.inner.delete_container(session, url).await
    }

    pub async fn read_acl(&self, session: &Session, target: &Url) -> Result<Option<AclResource>> {
        self.inner.read_acl(session, target).await
    }

    pub async fn save_acl(&self, session: &Session, target: &Url, acl: &AclResource) -> Result<()> {
        debug!(target = %target, entries = acl.len(), "saving acl");
        self.inner.save_acl(session, target, acl).await
    }
}
