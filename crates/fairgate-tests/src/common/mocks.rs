// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Mock store implementations.

use async_trait::async_trait;

use fairgate_core::{StoreError, UserRecord, UserStore};

/// A store whose every operation fails as if the backend were down.
///
/// Used to assert that transport failures surface as 503 and are never
/// conflated with credential errors.
#[derive(Debug, Default)]
pub struct UnavailableStore;

#[async_trait]
impl UserStore for UnavailableStore {
    async fn find_by_username(&self, _username: &str) -> Result<Option<UserRecord>, StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }

    async fn exists_by_username(&self, _username: &str) -> Result<bool, StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }

    async fn insert(&self, _user: UserRecord) -> Result<(), StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }
}
