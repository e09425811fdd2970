//! Ownership check for edit and delete.
//!
//! A single flat comparison between the verified identity and the owner
//! recorded on the resource. No roles, no delegation.

use uuid::Uuid;

use crate::backend::auth::sessions::Identity;

/// Outcome of an ownership check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

impl Decision {
    pub fn is_allowed(self) -> bool {
        matches!(self, Decision::Allow)
    }
}

/// Allow iff the identity's subject is the recorded owner
pub fn authorize(identity: &Identity, owner: Uuid) -> Decision {
    if identity.user_id() == owner {
        Decision::Allow
    } else {
        Decision::Deny
    }
}
