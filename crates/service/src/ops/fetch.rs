use tracing::debug;
use url::Url;

use common::dataset::{Dataset, Thing};
use common::docs::{container_url, DocumentType, FetchMode, LocatorError};
use common::pod::PodError;

use crate::Documents;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error(transparent)]
    Locate(#[from] LocatorError),
    /// Uniform failure for a container that could not be read.
    ///
    /// A missing container and a denied one report identically, so a
    /// cross-pod requester learns nothing about what exists where it has
    /// no access.
    #[error("documents not found or not authorized")]
    NotFoundOrUnauthorized,
}

/// Resolve the container and prove it readable; any failure past
/// resolution collapses into the uniform error.
pub(crate) async fn fetch_documents(
    docs: &Documents,
    doc_type: DocumentType,
    mode: FetchMode,
    other_pod: Option<&str>,
) -> Result<Url, FetchError> {
    let container = container_url(
        doc_type,
        mode,
        docs.session().web_id(),
        other_pod,
        docs.config(),
    )?;

    docs.store()
        .list_container(docs.session(), &container)
        .await
        .map_err(|error| {
            debug!(container = %container, %error, "fetch failed");
            FetchError::NotFoundOrUnauthorized
        })?;

    Ok(container)
}

/// The container's metadata records, in the same access regime as
/// [`fetch_documents`]. A container with no dataset yet reads as empty.
pub(crate) async fn list_documents(
    docs: &Documents,
    doc_type: DocumentType,
    mode: FetchMode,
    other_pod: Option<&str>,
) -> Result<Vec<Thing>, FetchError> {
    let container = fetch_documents(docs, doc_type, mode, other_pod).await?;
    let dataset_url = Dataset::url_in(&container);
    match docs.store().get_dataset(docs.session(), &dataset_url).await {
        Ok(dataset) => Ok(dataset.things().cloned().collect()),
        Err(PodError::NotFound(_)) => Ok(Vec::new()),
        Err(error) => {
            debug!(dataset = %dataset_url, %error, "dataset read failed");
            Err(FetchError::NotFoundOrUnauthorized)
        }
    }
}
