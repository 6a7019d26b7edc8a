//! Registry of users keyed by user id.

use std::collections::HashMap;

use super::profile::User;
use crate::error::{TrackerError, TrackerResult};

/// All users known to a session. User ids are unique.
#[derive(Debug, Default)]
pub struct UserRegistry {
    users: HashMap<String, User>,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new user. Fails when the id is already taken.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        user_id: impl Into<String>,
    ) -> TrackerResult<&mut User> {
        let user_id = user_id.into();
        if self.users.contains_key(&user_id) {
            return Err(TrackerError::DuplicateUserId(user_id));
        }

        let user = User::new(name, user_id.clone());
        Ok(self.users.entry(user_id).or_insert(user))
    }

    pub fn get(&self, user_id: &str) -> Option<&User> {
        self.users.get(user_id)
    }

    pub fn get_mut(&mut self, user_id: &str) -> Option<&mut User> {
        self.users.get_mut(user_id)
    }

    pub fn contains(&self, user_id: &str) -> bool {
        self.users.contains_key(user_id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
