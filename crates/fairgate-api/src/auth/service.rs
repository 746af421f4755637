// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Credential verifier.
//!
//! Validates username/password pairs against the user store and mints
//! tokens for verified principals. A missing account and a wrong password
//! are indistinguishable to callers; only debug logs tell them apart.

use std::sync::Arc;

use fairgate_core::{AuthError, Role, StoreError, UserRecord, UserStore};

use super::password;
use super::TokenCodec;
use crate::error::ApiResult;

// =============================================================================
// Inputs
// =============================================================================

/// Self-registration input for a vendor account.
#[derive(Debug, Clone)]
pub struct NewVendor {
    /// Username (an email address).
    pub username: String,
    /// Plaintext password; hashed before it reaches the store.
    pub password: String,
    /// Business name.
    pub business_name: String,
    /// Contact phone number.
    pub contact_number: Option<String>,
    /// Postal address.
    pub address: Option<String>,
}

/// Registration input for an employee account.
///
/// The employee profile fields (display name, employee ID, department)
/// belong to the out-of-scope profile store; this core accepts them but
/// persists only the account record.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    /// Username (an email address).
    pub username: String,
    /// Plaintext password; hashed before it reaches the store.
    pub password: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub contact_number: Option<String>,
    /// Requested role name; absent or unrecognized resolves to Employee.
    pub role: Option<String>,
}

/// A successful authentication: the freshly issued token and the account
/// it belongs to.
#[derive(Debug, Clone)]
pub struct Authenticated {
    /// Signed bearer token.
    pub token: String,
    /// The stored account, role already typed.
    pub user: UserRecord,
}

// =============================================================================
// AuthService
// =============================================================================

/// The credential verifier.
///
/// Holds the store boundary and the token codec; shared across requests
/// via `Arc` with no interior mutability.
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn UserStore>,
    codec: Arc<TokenCodec>,
}

impl AuthService {
    /// Creates a new verifier over the given store and codec.
    pub fn new(store: Arc<dyn UserStore>, codec: Arc<TokenCodec>) -> Self {
        Self { store, codec }
    }

    /// Authenticates a user and issues a token.
    ///
    /// Fails with [`AuthError::InvalidCredentials`] for an unknown
    /// username or a wrong password; store transport failures surface as
    /// 503, never as a credential error.
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<Authenticated> {
        let user = self.authenticate(username, password).await?;
        self.issue_for(user)
    }

    /// Authenticates a user for the employee portal.
    ///
    /// Identical to [`login`](Self::login) plus a role gate: even with a
    /// matching password, a vendor account fails with
    /// [`AuthError::AccessDenied`]. Vendor credentials must not produce an
    /// employee-portal session by being submitted to the wrong endpoint.
    pub async fn login_employee(&self, username: &str, password: &str) -> ApiResult<Authenticated> {
        let user = self.authenticate(username, password).await?;

        if !user.is_employee() {
            tracing::warn!(username = %username, "Employee login rejected for non-employee account");
            return Err(AuthError::AccessDenied.into());
        }

        self.issue_for(user)
    }

    /// Registers a vendor account and signs it in.
    pub async fn register(&self, new: NewVendor) -> ApiResult<Authenticated> {
        self.ensure_username_available(&new.username).await?;

        let hash = password::hash_password(&new.password)
            .map_err(|e| crate::error::ApiError::internal(e.to_string()))?;

        let mut user =
            UserRecord::new(&new.username, hash, Role::Vendor).with_business_name(new.business_name);
        if let Some(contact_number) = new.contact_number {
            user = user.with_contact_number(contact_number);
        }
        if let Some(address) = new.address {
            user = user.with_address(address);
        }

        self.store_and_sign_in(user).await
    }

    /// Registers an employee account and signs it in.
    ///
    /// The effective role defaults to Employee; Admin is granted only when
    /// explicitly requested (the administrator-initiated creation path is
    /// out of scope here beyond accepting the role argument).
    pub async fn register_employee(&self, new: NewEmployee) -> ApiResult<Authenticated> {
        self.ensure_username_available(&new.username).await?;

        let role = determine_employee_role(new.role.as_deref());

        let hash = password::hash_password(&new.password)
            .map_err(|e| crate::error::ApiError::internal(e.to_string()))?;

        let mut user = UserRecord::new(&new.username, hash, role).with_email(new.email);
        if let Some(contact_number) = new.contact_number {
            user = user.with_contact_number(contact_number);
        }

        self.store_and_sign_in(user).await
    }

    // =========================================================================
    // Internals
    // =========================================================================

    async fn authenticate(&self, username: &str, password: &str) -> ApiResult<UserRecord> {
        let Some(user) = self.store.find_by_username(username).await? else {
            tracing::debug!(username = %username, "Login failed: unknown username");
            return Err(AuthError::InvalidCredentials.into());
        };

        if password::verify_password(password, &user.password_hash).is_err() {
            tracing::debug!(username = %username, "Login failed: password mismatch");
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    fn issue_for(&self, user: UserRecord) -> ApiResult<Authenticated> {
        let token = self.codec.issue(&user.principal())?;
        tracing::info!(username = %user.username, role = %user.role, "User authenticated");
        Ok(Authenticated { token, user })
    }

    async fn ensure_username_available(&self, username: &str) -> ApiResult<()> {
        if self.store.exists_by_username(username).await? {
            return Err(AuthError::UsernameTaken.into());
        }
        Ok(())
    }

    async fn store_and_sign_in(&self, user: UserRecord) -> ApiResult<Authenticated> {
        match self.store.insert(user.clone()).await {
            Ok(()) => {}
            // Lost a race with a concurrent registration for the same name.
            Err(StoreError::DuplicateUsername { .. }) => {
                return Err(AuthError::UsernameTaken.into())
            }
            Err(e) => return Err(e.into()),
        }

        tracing::info!(username = %user.username, role = %user.role, "Account registered");
        self.issue_for(user)
    }
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService").finish_non_exhaustive()
    }
}

/// Resolves the effective role for employee registration.
///
/// Absent, blank, or unrecognized input resolves to Employee; Vendor is
/// never granted on this path.
fn determine_employee_role(requested: Option<&str>) -> Role {
    match requested {
        None => Role::Employee,
        Some(s) => match Role::from_str_lossy(s) {
            Role::Admin => Role::Admin,
            _ => Role::Employee,
        },
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::JwtConfig;
    use async_trait::async_trait;
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use fairgate_core::MemoryUserStore;

    // Hand-rolled failing store for transport-failure paths.
    struct UnavailableStore;

    #[async_trait]
    impl UserStore for UnavailableStore {
        async fn find_by_username(&self, _: &str) -> Result<Option<UserRecord>, StoreError> {
            Err(StoreError::unavailable("connection refused"))
        }

        async fn exists_by_username(&self, _: &str) -> Result<bool, StoreError> {
            Err(StoreError::unavailable("connection refused"))
        }

        async fn insert(&self, _: UserRecord) -> Result<(), StoreError> {
            Err(StoreError::unavailable("connection refused"))
        }
    }

    fn test_codec() -> Arc<TokenCodec> {
        let secret = STANDARD.encode("fairgate-test-secret-0123456789abcdef");
        Arc::new(TokenCodec::new(JwtConfig::new(secret)).unwrap())
    }

    fn seeded_service() -> AuthService {
        let vendor = UserRecord::new(
            "vendor@fair.example",
            password::hash_password("vendor-pass").unwrap(),
            Role::Vendor,
        );
        let employee = UserRecord::new(
            "staff@fair.example",
            password::hash_password("staff-pass").unwrap(),
            Role::Employee,
        );

        let store = Arc::new(MemoryUserStore::with_users([vendor, employee]));
        AuthService::new(store, test_codec())
    }

    fn new_vendor(username: &str) -> NewVendor {
        NewVendor {
            username: username.to_string(),
            password: "secret-pass".to_string(),
            business_name: "Papyrus Press".to_string(),
            contact_number: None,
            address: None,
        }
    }

    #[tokio::test]
    async fn test_login_success() {
        let service = seeded_service();

        let auth = service.login("vendor@fair.example", "vendor-pass").await.unwrap();
        assert_eq!(auth.user.username, "vendor@fair.example");
        assert_eq!(auth.user.role, Role::Vendor);
        assert!(!auth.token.is_empty());
    }

    #[tokio::test]
    async fn test_login_unknown_user() {
        let service = seeded_service();

        let err = service.login("nobody@fair.example", "x").await.unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let service = seeded_service();

        let err = service
            .login("vendor@fair.example", "wrong")
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_employee_login_rejects_vendor() {
        let service = seeded_service();

        // Same credentials pass the plain login...
        assert!(service
            .login("vendor@fair.example", "vendor-pass")
            .await
            .is_ok());

        // ...but not the employee portal.
        let err = service
            .login_employee("vendor@fair.example", "vendor-pass")
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_employee_login_accepts_employee() {
        let service = seeded_service();

        let auth = service
            .login_employee("staff@fair.example", "staff-pass")
            .await
            .unwrap();
        assert_eq!(auth.user.role, Role::Employee);
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let service = seeded_service();

        let auth = service.register(new_vendor("new@fair.example")).await.unwrap();
        assert_eq!(auth.user.role, Role::Vendor);
        assert_eq!(auth.user.business_name.as_deref(), Some("Papyrus Press"));

        // The freshly stored hash verifies with the original password.
        let again = service.login("new@fair.example", "secret-pass").await.unwrap();
        assert_eq!(again.user.username, "new@fair.example");
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let service = seeded_service();

        let err = service
            .register(new_vendor("vendor@fair.example"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_register_employee_default_role() {
        let service = seeded_service();

        let auth = service
            .register_employee(NewEmployee {
                username: "ops@fair.example".to_string(),
                password: "ops-pass".to_string(),
                email: "ops@fair.example".to_string(),
                contact_number: None,
                role: None,
            })
            .await
            .unwrap();
        assert_eq!(auth.user.role, Role::Employee);
    }

    #[tokio::test]
    async fn test_register_employee_explicit_admin() {
        let service = seeded_service();

        let auth = service
            .register_employee(NewEmployee {
                username: "root@fair.example".to_string(),
                password: "root-pass".to_string(),
                email: "root@fair.example".to_string(),
                contact_number: None,
                role: Some("admin".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(auth.user.role, Role::Admin);
    }

    #[tokio::test]
    async fn test_store_failure_is_not_invalid_credentials() {
        let service = AuthService::new(Arc::new(UnavailableStore), test_codec());

        let err = service.login("vendor@fair.example", "x").await.unwrap_err();
        assert_eq!(
            err.status_code(),
            axum::http::StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_determine_employee_role() {
        assert_eq!(determine_employee_role(None), Role::Employee);
        assert_eq!(determine_employee_role(Some("")), Role::Employee);
        assert_eq!(determine_employee_role(Some("vendor")), Role::Employee);
        assert_eq!(determine_employee_role(Some("bogus")), Role::Employee);
        assert_eq!(determine_employee_role(Some("EMPLOYEE")), Role::Employee);
        assert_eq!(determine_employee_role(Some("admin")), Role::Admin);
    }
}
