use url::Url;

use common::config::PodConfig;
use common::dataset::Thing;
use common::docs::{DocumentType, FetchMode};
use common::identity::Session;
use common::pod::PodStore;

use crate::ops;
use crate::ops::delete::DeleteError;
use crate::ops::fetch::FetchError;
use crate::ops::permission::{AclAction, PermissionError};
use crate::ops::upload::{DocumentUpload, UploadError, UploadReceipt};

/// The document service: the caller's session, a pod client, and the
/// identity-provider configuration, bundled behind the operations a UI
/// layer drives.
#[derive(Debug, Clone)]
pub struct Documents {
    session: Session,
    store: PodStore,
    config: PodConfig,
}

impl Documents {
    pub fn new(session: Session, store: PodStore, config: PodConfig) -> Self {
        Self {
            session,
            store,
            config,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn store(&self) -> &PodStore {
        &self.store
    }

    pub fn config(&self) -> &PodConfig {
        &self.config
    }

    /// Upload a document into its type's container on the caller's own
    /// pod, creating the container and bootstrapping its ACL as needed.
    pub async fn upload_document(&self, upload: DocumentUpload) -> Result<UploadReceipt, UploadError> {
        ops::upload::upload_document(self, upload).await
    }

    /// Resolve and validate a document container, on the caller's own
    /// pod or another one.
    ///
    /// Failures are reported uniformly as "not found or unauthorized".
    pub async fn fetch_documents(
        &self,
        doc_type: DocumentType,
        mode: FetchMode,
        other_pod: Option<&str>,
    ) -> Result<Url, FetchError> {
        ops::fetch::fetch_documents(self, doc_type, mode, other_pod).await
    }

    /// The metadata records for a document type, in the same access
    /// regime as [`Self::fetch_documents`].
    pub async fn list_documents(
        &self,
        doc_type: DocumentType,
        mode: FetchMode,
        other_pod: Option<&str>,
    ) -> Result<Vec<Thing>, FetchError> {
        ops::fetch::list_documents(self, doc_type, mode, other_pod).await
    }

    /// Phase one of removal: delete every resource inside the type's
    /// container. Returns the container URL for
    /// [`Self::delete_document_container`].
    pub async fn delete_document_file(&self, doc_type: DocumentType) -> Result<Url, DeleteError> {
        ops::delete::delete_document_file(self, doc_type).await
    }

    /// Phase two of removal: delete the now-empty container.
    pub async fn delete_document_container(&self, url: &Url) -> Result<(), DeleteError> {
        ops::delete::delete_document_container(self, url).await
    }

    /// Grant or revoke read access on a document type the caller owns,
    /// for the named pod's identity.
    pub async fn set_doc_acl_permission(
        &self,
        doc_type: DocumentType,
        action: AclAction,
        other_pod: &str,
    ) -> Result<(), PermissionError> {
        ops::permission::set_doc_acl_permission(self, doc_type, action, other_pod).await
    }
}
