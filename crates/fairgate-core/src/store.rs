// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! User store boundary.
//!
//! Persistence of accounts is external to the authentication core; this
//! module defines the trait the core talks to and an in-memory
//! implementation used by the standalone binary and the test suites.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::user::UserRecord;

// =============================================================================
// UserStore
// =============================================================================

/// The user store boundary.
///
/// Implementations may block or fail transiently; such failures surface as
/// [`StoreError::Unavailable`] and are never folded into credential
/// outcomes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Looks up an account by username.
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, StoreError>;

    /// Returns `true` if an account with the given username exists.
    async fn exists_by_username(&self, username: &str) -> Result<bool, StoreError>;

    /// Inserts a new account.
    ///
    /// Fails with [`StoreError::DuplicateUsername`] if the username is
    /// already present.
    async fn insert(&self, user: UserRecord) -> Result<(), StoreError>;
}

// =============================================================================
// MemoryUserStore
// =============================================================================

/// In-memory user store keyed by username.
///
/// Suitable for the standalone binary and tests. Reads and writes are
/// guarded by a single lock; no await point is held across it.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl MemoryUserStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given accounts.
    pub fn with_users(users: impl IntoIterator<Item = UserRecord>) -> Self {
        let map = users
            .into_iter()
            .map(|u| (u.username.clone(), u))
            .collect();
        Self {
            users: RwLock::new(map),
        }
    }

    /// Returns the number of stored accounts.
    pub fn len(&self) -> usize {
        self.users.read().map(|m| m.len()).unwrap_or(0)
    }

    /// Returns `true` if the store holds no accounts.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, StoreError> {
        let users = self
            .users
            .read()
            .map_err(|e| StoreError::unavailable(e.to_string()))?;
        Ok(users.get(username).cloned())
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, StoreError> {
        let users = self
            .users
            .read()
            .map_err(|e| StoreError::unavailable(e.to_string()))?;
        Ok(users.contains_key(username))
    }

    async fn insert(&self, user: UserRecord) -> Result<(), StoreError> {
        let mut users = self
            .users
            .write()
            .map_err(|e| StoreError::unavailable(e.to_string()))?;
        if users.contains_key(&user.username) {
            return Err(StoreError::duplicate(&user.username));
        }
        users.insert(user.username.clone(), user);
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
