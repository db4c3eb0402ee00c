use async_trait::async_trait;
use bytes::Bytes;
use url::Url;

use crate::acl::AclResource;
use crate::dataset::Dataset;
use crate::identity::Session;

use super::error::Result;
use super::resource::ContainerItem;

/// The storage capability a pod must expose.
///
/// Every operation takes the caller's [`Session`]; the backend attaches
/// no identity of its own. Implementations must uphold the store
/// contract the pipelines rely on:
///
/// - `ensure_container` is idempotent: creating a container that already
///   exists succeeds without touching it
/// - `put_file` treats the slug as a hint and re-slugs on collision; the
///   assigned URL is returned, not chosen by the caller
/// - `list_container` reports an explicit [`ContainerItem::kind`] per
///   child
/// - `delete_container` refuses while the container holds resources
/// - reads observe the caller's own completed writes
#[async_trait]
pub trait PodBackend: Send + Sync + std::fmt::Debug {
    /// Create a container at the given URL if it does not already exist.
    async fn ensure_container(&self, session: &Session, url: &Url) -> Result<()>;

    /// Place a file in a container; returns the URL the store assigned.
    async fn put_file(
        &self,
        session: &Session,
        container: &Url,
        slug: &str,
        content_type: &str,
        bytes: Bytes,
    ) -> Result<Url>;

    /// List a container's children.
    async fn list_container(&self, session: &Session, url: &Url) -> Result<Vec<ContainerItem>>;

    /// Read a dataset resource.
    async fn get_dataset(&self, session: &Session, url: &Url) -> Result<Dataset>;

    /// Write a dataset resource, replacing any previous content.
    async fn save_dataset(&self, session: &Session, url: &Url, dataset: &Dataset) -> Result<()>;

    /// Delete a non-container resource.
    async fn delete_file(&self, session: &Session, url: &Url) -> Result<()>;

    /// Delete an empty container.
    async fn delete_container(&self, session: &Session, url: &Url) -> Result<()>;

    /// Read the ACL resource attached to a target, if one exists.
    async fn read_acl(&self, session: &Session, target: &Url) -> Result<Option<AclResource>>;

    /// Write the ACL resource attached to a target.
    async fn save_acl(&self, session: &Session, target: &Url, acl: &AclResource) -> Result<()>;
}
