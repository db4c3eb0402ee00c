//! # Pod client
//!
//! The capability this crate consumes from a remote pod: containers,
//! file resources, metadata datasets, and ACL resources, all addressed
//! by URL and reached through an authenticated [`Session`].
//!
//! [`PodStore`] is the façade the pipelines program against. It wraps a
//! [`PodBackend`]:
//!
//! - [`HttpBackend`] speaks to a live pod over HTTP
//! - [`MemBackend`] is an in-process pod for tests, enforcing the same
//!   store invariants (slug collisions re-slugged, non-empty containers
//!   refuse deletion, reads gated by the container's ACL)
//!
//! The pod is the sole source of truth: nothing here caches or persists
//! state locally, and consistency relies on the store's read-after-write
//! guarantee for the same caller.
//!
//! [`Session`]: crate::identity::Session

mod backend;
mod error;
mod http;
mod memory;
mod resource;
mod store;

pub use backend::PodBackend;
pub use error::{PodError, Result};
pub use http::HttpBackend;
pub use memory::MemBackend;
pub use resource::{ContainerItem, ResourceKind};
pub use store::PodStore;
