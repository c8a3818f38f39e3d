//! User lookup port
//!
//! The engine only needs to turn a user id into a display name. Any id the
//! event log references must be known; a miss is reported, never skipped.

use crate::entities::User;
use crate::error::{DomainError, DomainResult};
use crate::value_objects::UserId;

pub trait UserLookup {
    /// Find user by ID
    fn find_by_id(&self, id: &UserId) -> Option<&User>;

    /// Find user by ID, failing with `UserNotFound` on a miss
    fn resolve(&self, id: &UserId) -> DomainResult<&User> {
        self.find_by_id(id)
            .ok_or_else(|| DomainError::UserNotFound(id.clone()))
    }
}
