//! # Documents
//!
//! Document categories and the resource locator.
//!
//! Every stored document belongs to one of a closed set of categories
//! ([`DocumentType`]), and each category maps deterministically to one
//! container on the owning pod: `<pod-root>/<Encoded Type>/`. The
//! locator is pure: no I/O, no side effects, just URL resolution for a
//! (type, fetch mode, identity) triple.

mod doc_type;
mod locator;
mod meta;

pub use doc_type::{DocumentType, FetchMode, UnknownDocumentType};
pub use locator::{container_url, locate, LocatorError};
pub use meta::DocumentMeta;
