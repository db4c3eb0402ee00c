use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use common::acl::AccessModes;
use common::config::PodConfigError;
use common::docs::{container_url, DocumentType, FetchMode, LocatorError};
use common::pod::PodError;

use crate::Documents;

/// Whether to grant or revoke the grantee's read access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AclAction {
    Give,
    Revoke,
}

#[derive(Debug, thiserror::Error)]
pub enum PermissionError {
    #[error(transparent)]
    Locate(#[from] LocatorError),
    #[error("invalid grantee pod: {0}")]
    Grantee(#[from] PodConfigError),
    /// The container has no ACL resource yet; it grows one on the first
    /// upload of this document type.
    #[error("no access control resource exists for {0}")]
    AclMissing(Url),
    #[error(transparent)]
    Pod(#[from] PodError),
}

/// Grant or revoke read access for another pod's identity on a document
/// type the caller owns.
///
/// Resolution is always against the caller's own pod: only the resource
/// owner manages its permissions. The grantee's access object carries
/// only the `read` flag, applied to the container and, as the default
/// policy, to everything inside it. No other entry is read or written,
/// the owner's included.
pub(crate) async fn set_doc_acl_permission(
    docs: &Documents,
    doc_type: DocumentType,
    action: AclAction,
    other_pod: &str,
) -> Result<(), PermissionError> {
    let session = docs.session();
    let container = container_url(
        doc_type,
        FetchMode::SelfFetch,
        session.web_id(),
        None,
        docs.config(),
    )?;

    let mut acl = docs
        .store()
        .read_acl(session, &container)
        .await?
        .ok_or_else(|| PermissionError::AclMissing(container.clone()))?;

    let grantee = docs.config().web_id(other_pod)?;
    let access = AccessModes::read_only(action == AclAction::Give);
    acl.set_agent_access(&grantee, access);

    docs.store().save_acl(session, &container, &acl).await?;
    debug!(container = %container, grantee = %grantee, ?action, "acl updated");
    Ok(())
}
