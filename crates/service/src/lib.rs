//! Document lifecycle and permission pipelines for PodVault.
//!
//! This crate provides the operations a UI layer drives:
//! - Upload: container creation, file placement, metadata create-or-merge,
//!   owner ACL bootstrap
//! - Fetch: container resolution and validated access, self or cross-pod
//! - Delete: two-phase removal (contained files, then the empty container)
//! - Permissions: granting and revoking read access for other identities
//!
//! Everything runs against the pod through [`common::pod::PodStore`]; the
//! service holds no durable state of its own.

mod documents;
pub mod ops;

pub use documents::Documents;
pub use ops::delete::DeleteError;
pub use ops::fetch::FetchError;
pub use ops::permission::{AclAction, PermissionError};
pub use ops::upload::{DocumentUpload, UploadError, UploadReceipt};
