use futures::future::join_all;
use tracing::{debug, warn};
use url::Url;

use common::docs::{container_url, DocumentType, FetchMode, LocatorError};
use common::pod::PodError;

use crate::Documents;

#[derive(Debug, thiserror::Error)]
pub enum DeleteError {
    #[error(transparent)]
    Locate(#[from] LocatorError),
    /// Some contained resources survived phase one; the container was
    /// not touched.
    #[error("failed to delete {} of {total} contained resources", .failed.len())]
    PartialDeletion { total: usize, failed: Vec<Url> },
    #[error(transparent)]
    Pod(#[from] PodError),
}

/// Phase one of removal: delete every resource inside the type's
/// container.
///
/// The store refuses to delete a non-empty container, so the contents
/// go first. Deletes for all contained resources are issued
/// concurrently and joined; unless every one of them succeeded the
/// container is left standing and the survivors are reported.
/// Returns the container URL for [`delete_document_container`].
pub(crate) async fn delete_document_file(
    docs: &Documents,
    doc_type: DocumentType,
) -> Result<Url, DeleteError> {
    let session = docs.session();
    let container = container_url(
        doc_type,
        FetchMode::SelfFetch,
        session.web_id(),
        None,
        docs.config(),
    )?;

    let items = docs.store().list_container(session, &container).await?;
    let files: Vec<Url> = items
        .into_iter()
        .filter(|item| item.is_file())
        .map(|item| item.url)
        .collect();
    let total = files.len();

    let results = join_all(
        files
            .iter()
            .map(|url| docs.store().delete_file(session, url)),
    )
    .await;

    let failed: Vec<Url> = files
        .into_iter()
        .zip(results)
        .filter_map(|(url, result)| match result {
            Ok(()) => None,
            Err(error) => {
                warn!(url = %url, %error, "contained resource delete failed");
                Some(url)
            }
        })
        .collect();

    if !failed.is_empty() {
        return Err(DeleteError::PartialDeletion { total, failed });
    }

    debug!(container = %container, deleted = total, "container contents deleted");
    Ok(container)
}

/// Phase two of removal: delete the now-empty container.
pub(crate) async fn delete_document_container(
    docs: &Documents,
    url: &Url,
) -> Result<(), DeleteError> {
    docs.store().delete_container(docs.session(), url).await?;
    Ok(())
}
