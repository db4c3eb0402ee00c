//! # Access control
//!
//! An ACL resource attaches to one target resource (a container or a
//! file) and records, per agent WebID, an [`AccessModes`] object in two
//! scopes:
//!
//! - **resource**: access to the target itself
//! - **default**: the policy inherited by the target's children
//!
//! ## Trust model
//!
//! Enforcement happens at the remote store; these types only build and
//! mutate the rules. Only the owning identity may save an ACL resource
//! back to the pod.
//!
//! ## Owner bootstrap
//!
//! The owner's entry is created exactly once, when a container first
//! receives its metadata dataset, with full access in both scopes.
//! Later grants to other agents never touch the owner's entry.

mod access;
mod acl;

pub use access::AccessModes;
pub use acl::{AclResource, AgentAccess};
