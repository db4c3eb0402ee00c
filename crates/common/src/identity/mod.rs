//! # Identity
//!
//! Identities on a pod are WebIDs: URLs that identify an agent and
//! resolve to a profile document. A [`WebId`] carries the identity and
//! knows how to derive the pod root from it; a [`Session`] pairs the
//! caller's WebID with an authenticated fetch capability.
//!
//! Session *establishment* (token acquisition, OIDC flows) happens
//! outside this crate. A session only carries an already-issued
//! credential and attaches it to every request.

mod session;
mod web_id;

pub use session::{Session, SessionError};
pub use web_id::{WebId, WebIdError};
