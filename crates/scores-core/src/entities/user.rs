//! User entity and the in-memory user directory

use std::collections::HashMap;

use crate::traits::UserLookup;
use crate::value_objects::UserId;

/// A chat user as listed in the workspace directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

impl User {
    /// Create a new User
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Users keyed by id
///
/// When the same id is inserted twice the later entry wins, matching a
/// directory table that is re-exported on top of an older one.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: HashMap<UserId, User>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a user, returning the entry it replaced
    pub fn insert(&mut self, user: User) -> Option<User> {
        self.users.insert(user.id.clone(), user)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl FromIterator<User> for UserDirectory {
    fn from_iter<I: IntoIterator<Item = User>>(iter: I) -> Self {
        let mut directory = Self::new();
        for user in iter {
            directory.insert(user);
        }
        directory
    }
}

impl UserLookup for UserDirectory {
    fn find_by_id(&self, id: &UserId) -> Option<&User> {
        self.users.get(id)
    }
}
