// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # Authentication Core Integration Tests
//!
//! Component-level tests for the token codec, the role model, the route
//! policy and the credential verifier:
//!
//! - `test_codec_*`: token issuance, verification, expiry, tampering
//! - `test_role_*`: role parsing and authority derivation
//! - `test_policy_*`: route classification ordering
//! - `test_login_*` / `test_register_*`: credential verification

use std::sync::Arc;

use axum::http::StatusCode;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};

use fairgate_api::{RouteAccess, RoutePolicy, TokenCodec, TokenError};
use fairgate_core::{Principal, Role};

use fairgate_tests::common::fixtures::{
    self, seeded_state, test_jwt_config, ADMIN_USERNAME, EMPLOYEE_PASSWORD, EMPLOYEE_USERNAME,
    VENDOR_PASSWORD, VENDOR_USERNAME,
};

// =============================================================================
// Token Codec
// =============================================================================

#[tokio::test]
async fn test_codec_round_trip_preserves_subject() {
    let codec = TokenCodec::new(test_jwt_config()).unwrap();

    for role in Role::all() {
        let principal = Principal::new(VENDOR_USERNAME, *role);
        let token = codec.issue(&principal).unwrap();

        let verified = codec.verify(&token).unwrap();
        assert_eq!(verified.subject, principal.username);
        assert_eq!(verified.role_claim, role.authority());
    }
}

#[tokio::test]
async fn test_codec_zero_ttl_expires() {
    let codec = TokenCodec::new(test_jwt_config().with_ttl_ms(0)).unwrap();
    let token = codec.issue(&Principal::new(VENDOR_USERNAME, Role::Vendor)).unwrap();

    assert_eq!(codec.verify(&token).unwrap_err(), TokenError::Expired);
}

#[tokio::test]
async fn test_codec_signature_tamper_never_verifies() {
    let codec = TokenCodec::new(test_jwt_config()).unwrap();
    let token = codec.issue(&Principal::new(VENDOR_USERNAME, Role::Vendor)).unwrap();

    let parts: Vec<&str> = token.split('.').collect();
    let sig = URL_SAFE_NO_PAD.decode(parts[2]).unwrap();

    // Flipping any single bit of the signature must yield BadSignature.
    for byte_index in [0, sig.len() / 2, sig.len() - 1] {
        for bit in 0..8 {
            let mut tampered_sig = sig.clone();
            tampered_sig[byte_index] ^= 1 << bit;
            let tampered = format!(
                "{}.{}.{}",
                parts[0],
                parts[1],
                URL_SAFE_NO_PAD.encode(&tampered_sig)
            );

            assert_eq!(
                codec.verify(&tampered).unwrap_err(),
                TokenError::BadSignature,
                "bit {} of byte {} survived tampering",
                bit,
                byte_index
            );
        }
    }
}

#[tokio::test]
async fn test_codec_payload_tamper_never_verifies() {
    let codec = TokenCodec::new(test_jwt_config()).unwrap();

    let victim = codec.issue(&Principal::new(VENDOR_USERNAME, Role::Vendor)).unwrap();
    let forged_claims = codec.issue(&Principal::new(ADMIN_USERNAME, Role::Admin)).unwrap();

    // Splice the admin payload onto the vendor signature.
    let victim_parts: Vec<&str> = victim.split('.').collect();
    let forged_parts: Vec<&str> = forged_claims.split('.').collect();
    let spliced = format!(
        "{}.{}.{}",
        victim_parts[0], forged_parts[1], victim_parts[2]
    );

    assert!(codec.verify(&spliced).is_err());
}

#[tokio::test]
async fn test_codec_username_of() {
    let codec = TokenCodec::new(test_jwt_config()).unwrap();
    let token = codec
        .issue(&Principal::new(EMPLOYEE_USERNAME, Role::Employee))
        .unwrap();

    assert_eq!(codec.username_of(&token).unwrap(), EMPLOYEE_USERNAME);
    assert!(codec.username_of("garbage").is_err());
}

// =============================================================================
// Role Model
// =============================================================================

#[tokio::test]
async fn test_role_default_safety() {
    assert_eq!(Role::from_str_lossy(""), Role::Vendor);
    assert_eq!(Role::from_str_lossy("bogus"), Role::Vendor);
    assert_eq!(Role::from_str_lossy("  "), Role::Vendor);
    assert_eq!(Role::from_str_lossy("employee "), Role::Employee);
    assert_eq!(Role::from_str_lossy("ADMIN"), Role::Admin);
}

#[tokio::test]
async fn test_role_employee_gate() {
    assert!(!Role::Vendor.is_employee());
    assert!(Role::Employee.is_employee());
    assert!(Role::Admin.is_employee());
}

// =============================================================================
// Route Policy
// =============================================================================

#[tokio::test]
async fn test_policy_public_before_protected_default() {
    let policy = RoutePolicy::default();

    assert_eq!(policy.classify("/api/auth/login"), RouteAccess::Public);
    assert_eq!(policy.classify("/api/auth/register"), RouteAccess::Public);
    assert_eq!(policy.classify("/api/auth/me"), RouteAccess::Protected);
    assert_eq!(policy.classify("/api/reservations"), RouteAccess::Protected);
}

#[tokio::test]
async fn test_policy_order_is_explicit() {
    let first_wins = RoutePolicy::new()
        .protected("/api/auth/me")
        .public("/api/auth/*");

    assert_eq!(first_wins.classify("/api/auth/me"), RouteAccess::Protected);
    assert_eq!(first_wins.classify("/api/auth/login"), RouteAccess::Public);
}

// =============================================================================
// Credential Verifier
// =============================================================================

#[tokio::test]
async fn test_login_success_and_wrong_password() {
    let state = seeded_state();

    let auth = state
        .auth()
        .login(VENDOR_USERNAME, VENDOR_PASSWORD)
        .await
        .unwrap();
    assert_eq!(auth.user.username, VENDOR_USERNAME);

    let err = state
        .auth()
        .login(VENDOR_USERNAME, "not-the-password")
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_unknown_user_is_indistinguishable() {
    let state = seeded_state();

    let unknown = state
        .auth()
        .login("nobody@fair.example", "whatever1")
        .await
        .unwrap_err();
    let wrong = state
        .auth()
        .login(VENDOR_USERNAME, "whatever1")
        .await
        .unwrap_err();

    // Same status, same user-facing message.
    assert_eq!(unknown.status_code(), wrong.status_code());
    assert_eq!(unknown.user_message(), wrong.user_message());
}

#[tokio::test]
async fn test_employee_role_gate() {
    let state = seeded_state();

    // Vendor credentials pass the ordinary login...
    assert!(state
        .auth()
        .login(VENDOR_USERNAME, VENDOR_PASSWORD)
        .await
        .is_ok());

    // ...but the employee portal rejects them with 403.
    let err = state
        .auth()
        .login_employee(VENDOR_USERNAME, VENDOR_PASSWORD)
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), StatusCode::FORBIDDEN);

    // Employee and admin accounts pass.
    assert!(state
        .auth()
        .login_employee(EMPLOYEE_USERNAME, EMPLOYEE_PASSWORD)
        .await
        .is_ok());
    assert!(state
        .auth()
        .login_employee(ADMIN_USERNAME, fixtures::ADMIN_PASSWORD)
        .await
        .is_ok());
}

#[tokio::test]
async fn test_concurrent_logins_do_not_cross() {
    let state = seeded_state();
    let codec = Arc::new(TokenCodec::new(test_jwt_config()).unwrap());

    let vendor_login = state.auth().login(VENDOR_USERNAME, VENDOR_PASSWORD);
    let employee_login = state.auth().login(EMPLOYEE_USERNAME, EMPLOYEE_PASSWORD);

    let (vendor, employee) = tokio::join!(vendor_login, employee_login);
    let vendor = vendor.unwrap();
    let employee = employee.unwrap();

    // Each caller's token resolves to its own username, never the other's.
    assert_eq!(
        codec.username_of(&vendor.token).unwrap(),
        VENDOR_USERNAME
    );
    assert_eq!(
        codec.username_of(&employee.token).unwrap(),
        EMPLOYEE_USERNAME
    );
}
