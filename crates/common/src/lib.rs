/**
 * Identity-provider configuration.
 *  The origin used to complete bare pod names into
 *  hosts and WebIDs.
 */
pub mod config;
/**
 * Access-control resources.
 *  Per-agent access objects with separate resource
 *  and default (inherited) scopes.
 */
pub mod acl;
/**
 * Metadata datasets.
 *  Subject-keyed records ("Things") describing the
 *  files stored in a container.
 */
pub mod dataset;
/**
 * Document categories and the resource locator.
 *  Maps a (type, fetch mode, identity) triple to a
 *  canonical container URL.
 */
pub mod docs;
/**
 * Identity types.
 *  WebIDs and the authenticated session capability.
 */
pub mod identity;
/**
 * Pod-client capability.
 *  Containers, file resources, datasets, and ACL
 *  resources on a remote pod, behind a pluggable
 *  backend.
 */
pub mod pod;

pub mod prelude {
    pub use crate::acl::{AccessModes, AclResource};
    pub use crate::config::PodConfig;
    pub use crate::dataset::{Dataset, Thing};
    pub use crate::docs::{DocumentType, FetchMode};
    pub use crate::identity::{Session, WebId};
    pub use crate::pod::{PodError, PodStore};
}
