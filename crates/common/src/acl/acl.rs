use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::identity::WebId;

use super::access::AccessModes;

/// One agent's access to a target resource, in both scopes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentAccess {
    /// Access to the target resource itself.
    pub resource: AccessModes,
    /// Default policy inherited by the target's children.
    pub default: AccessModes,
}

/// An access-control resource for one target.
///
/// Keys are stringified agent WebIDs, keeping the map JSON-serializable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AclResource {
    target: Url,
    entries: BTreeMap<String, AgentAccess>,
}

impl AclResource {
    /// Scaffold a fresh ACL resource for a target, with no entries.
    pub fn new(target: Url) -> Self {
        Self {
            target,
            entries: BTreeMap::new(),
        }
    }

    /// Scaffold an ACL granting the owner full access in both scopes.
    ///
    /// This is the shape created on a container's first metadata write;
    /// it must not be re-created on later merges.
    pub fn bootstrap_owner(target: Url, owner: &WebId) -> Self {
        let mut acl = Self::new(target);
        acl.set_agent_access(owner, AccessModes::FULL);
        acl
    }

    pub fn target(&self) -> &Url {
        &self.target
    }

    /// Set one agent's access object, in both resource and default scope.
    ///
    /// Only the named agent's entry is written; every other entry is
    /// left untouched.
    pub fn set_agent_access(&mut self, agent: &WebId, access: AccessModes) {
        self.entries.insert(
            agent.as_str().to_string(),
            AgentAccess {
                resource: access,
                default: access,
            },
        );
    }

    pub fn agent_access(&self, agent: &WebId) -> Option<&AgentAccess> {
        self.entries.get(agent.as_str())
    }

    pub fn entries(&self) -> &BTreeMap<String, AgentAccess> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The conventional location of the ACL resource for a target.
    ///
    /// Containers keep theirs inside themselves (`<container>.acl`);
    /// plain resources append the suffix to their own name.
    pub fn acl_url_for(target: &Url) -> Url {
        if target.path().ends_with('/') {
            target.join(".acl").expect("container URL is a valid base")
        } else {
            let mut acl = target.clone();
            acl.set_path(&format!("{}.acl", target.path()));
            acl
        }
    }
}
