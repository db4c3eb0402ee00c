use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use common::acl::AclResource;
use common::dataset::{Dataset, Thing};
use common::docs::{container_url, DocumentMeta, FetchMode, LocatorError};
use common::pod::PodError;

use crate::Documents;

/// A file payload and its metadata, ready to store.
#[derive(Debug, Clone)]
pub struct DocumentUpload {
    /// Original filename; used as the slug hint for the assigned URL
    /// and recorded in the metadata as the document's name.
    pub file_name: String,
    /// Explicit content type; guessed from the filename when absent.
    pub content_type: Option<String>,
    pub bytes: Bytes,
    pub meta: DocumentMeta,
}

impl DocumentUpload {
    fn content_type(&self) -> String {
        self.content_type.clone().unwrap_or_else(|| {
            mime_guess::from_path(&self.file_name)
                .first_or_octet_stream()
                .to_string()
        })
    }
}

/// Where an upload landed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadReceipt {
    /// URL the store assigned to the file.
    pub file_url: Url,
    pub container_url: Url,
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error(transparent)]
    Locate(#[from] LocatorError),
    /// File placement failed; no metadata was written for it.
    #[error("file placement failed for '{file_name}': {source}")]
    Placement {
        file_name: String,
        #[source]
        source: PodError,
    },
    #[error(transparent)]
    Pod(#[from] PodError),
}

/// Upload pipeline.
///
/// Ensures the container, places the file, then creates or merges the
/// container's metadata dataset. The owner's ACL is bootstrapped exactly
/// once, when the dataset is first created; merges never touch it.
///
/// The merge branch is a read-modify-write of the dataset with no
/// conflict token: concurrent uploaders into the same container can lose
/// records to each other, and the last write wins at the store.
pub(crate) async fn upload_document(
    docs: &Documents,
    upload: DocumentUpload,
) -> Result<UploadReceipt, UploadError> {
    let session = docs.session();
    let container = container_url(
        upload.meta.doc_type,
        FetchMode::SelfFetch,
        session.web_id(),
        None,
        docs.config(),
    )?;

    docs.store().ensure_container(session, &container).await?;

    let content_type = upload.content_type();
    let file_url = match docs
        .store()
        .put_file(
            session,
            &container,
            &upload.file_name,
            &content_type,
            upload.bytes.clone(),
        )
        .await
    {
        Ok(url) => url,
        Err(source) => {
            warn!(
                container = %container,
                file = upload.file_name,
                error = %source,
                "file placement failed, skipping metadata write"
            );
            return Err(UploadError::Placement {
                file_name: upload.file_name,
                source,
            });
        }
    };

    let items = docs.store().list_container(session, &container).await?;
    let dataset_url = Dataset::url_in(&container);
    let has_dataset = items
        .iter()
        .any(|item| item.is_file() && Dataset::is_dataset_url(&item.url));

    let thing = Thing::for_document(file_url.clone(), &upload.file_name, &upload.meta);

    if has_dataset {
        let mut dataset = docs.store().get_dataset(session, &dataset_url).await?;
        dataset.set_thing(thing);
        docs.store()
            .save_dataset(session, &dataset_url, &dataset)
            .await?;
        debug!(dataset = %dataset_url, things = dataset.len(), "merged metadata record");
    } else {
        let mut dataset = Dataset::new();
        dataset.set_thing(thing);
        docs.store()
            .save_dataset(session, &dataset_url, &dataset)
            .await?;
        let acl = AclResource::bootstrap_owner(container.clone(), session.web_id());
        docs.store().save_acl(session, &container, &acl).await?;
        debug!(container = %container, "created metadata dataset and bootstrapped owner acl");
    }

    Ok(UploadReceipt {
        file_url,
        container_url: container,
    })
}
