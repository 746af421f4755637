// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Pre-built test data.

use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD, Engine as _};

use fairgate_api::auth::password::hash_password;
use fairgate_api::{ApiConfig, AppState, JwtConfig};
use fairgate_core::{MemoryUserStore, Role, UserRecord, UserStore};

/// Password of the seeded vendor account.
pub const VENDOR_PASSWORD: &str = "vendor-pass-1";
/// Password of the seeded employee account.
pub const EMPLOYEE_PASSWORD: &str = "staff-pass-1";
/// Password of the seeded admin account.
pub const ADMIN_PASSWORD: &str = "admin-pass-1";

/// Username of the seeded vendor account.
pub const VENDOR_USERNAME: &str = "vendor@fair.example";
/// Username of the seeded employee account.
pub const EMPLOYEE_USERNAME: &str = "staff@fair.example";
/// Username of the seeded admin account.
pub const ADMIN_USERNAME: &str = "admin@fair.example";

/// Returns a valid base64-encoded signing secret for tests.
pub fn test_secret() -> String {
    STANDARD.encode("fairgate-integration-secret-0123456789")
}

/// Returns a JWT configuration with the standard test secret.
pub fn test_jwt_config() -> JwtConfig {
    JwtConfig::new(test_secret())
}

/// Returns an API configuration bound to an ephemeral port.
pub fn test_api_config() -> ApiConfig {
    ApiConfig::default()
        .with_host("127.0.0.1".parse().unwrap())
        .with_port(0)
        .with_jwt(test_jwt_config())
}

/// Returns a store seeded with one vendor, one employee and one admin.
pub fn seeded_store() -> Arc<MemoryUserStore> {
    let vendor = UserRecord::new(
        VENDOR_USERNAME,
        hash_password(VENDOR_PASSWORD).unwrap(),
        Role::Vendor,
    )
    .with_business_name("Papyrus Press");

    let employee = UserRecord::new(
        EMPLOYEE_USERNAME,
        hash_password(EMPLOYEE_PASSWORD).unwrap(),
        Role::Employee,
    );

    let admin = UserRecord::new(
        ADMIN_USERNAME,
        hash_password(ADMIN_PASSWORD).unwrap(),
        Role::Admin,
    );

    Arc::new(MemoryUserStore::with_users([vendor, employee, admin]))
}

/// Builds an application state over the given store.
pub fn test_state(store: Arc<dyn UserStore>) -> AppState {
    AppState::builder()
        .config(test_api_config())
        .store(store)
        .build()
        .expect("test state must build")
}

/// Builds an application state over a freshly seeded store.
pub fn seeded_state() -> AppState {
    test_state(seeded_store())
}
