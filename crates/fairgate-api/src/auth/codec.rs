// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! JWT token codec.
//!
//! Signs and verifies the compact, self-contained tokens that carry a
//! principal between requests. The symmetric key is derived once from a
//! base64-encoded secret at startup and shared read-only afterwards.

use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine as _};
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use fairgate_core::Principal;

use super::Claims;
use crate::error::{ApiError, ApiResult};

// =============================================================================
// JwtConfig
// =============================================================================

/// JWT configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JwtConfig {
    /// Base64-encoded secret key for signing tokens.
    #[serde(skip_serializing)]
    pub secret: String,
    /// Token time-to-live in milliseconds.
    pub ttl_ms: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(), // Must be set by the operator
            ttl_ms: 3_600_000,     // 1 hour
        }
    }
}

impl JwtConfig {
    /// Creates a new configuration with the given base64-encoded secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Sets the token time-to-live in milliseconds.
    pub fn with_ttl_ms(mut self, ttl_ms: i64) -> Self {
        self.ttl_ms = ttl_ms;
        self
    }

    /// Validates the configuration and returns the decoded key material.
    pub fn decoded_secret(&self) -> ApiResult<Vec<u8>> {
        if self.secret.is_empty() {
            return Err(ApiError::internal("JWT secret is not configured"));
        }
        let key = BASE64_STANDARD
            .decode(&self.secret)
            .map_err(|e| ApiError::internal(format!("JWT secret is not valid base64: {}", e)))?;
        if key.len() < 32 {
            tracing::warn!("JWT secret is shorter than recommended (32 bytes)");
        }
        Ok(key)
    }
}

// =============================================================================
// TokenError
// =============================================================================

/// Token verification failures.
///
/// These are terminal for the verification call: crypto failures are
/// deterministic and are never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The token is not a well-formed JWT.
    #[error("Invalid JWT token")]
    Malformed,
    /// The token's expiration time has passed.
    #[error("Expired JWT token")]
    Expired,
    /// The token uses an algorithm this service does not accept.
    #[error("Unsupported JWT token")]
    Unsupported,
    /// The token carries no usable claims.
    #[error("JWT claims string is empty")]
    EmptyClaims,
    /// The signature does not match the configured key.
    #[error("Invalid JWT signature")]
    BadSignature,
}

impl TokenError {
    fn from_jwt(error: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match error.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidSignature => TokenError::BadSignature,
            ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
                TokenError::Unsupported
            }
            ErrorKind::MissingRequiredClaim(_) => TokenError::EmptyClaims,
            _ => TokenError::Malformed,
        }
    }
}

// =============================================================================
// VerifiedToken
// =============================================================================

/// The claims of a token that passed verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedToken {
    /// The username the token was issued to.
    pub subject: String,
    /// The authority snapshot embedded at issuance (e.g. `ROLE_VENDOR`).
    pub role_claim: String,
    /// Issuance time (Unix timestamp, seconds).
    pub issued_at: i64,
    /// Expiration time (Unix timestamp, seconds).
    pub expires_at: i64,
}

// =============================================================================
// TokenCodec
// =============================================================================

/// Signs and verifies authentication tokens.
///
/// The codec is created once at startup and shared via `Arc`; it holds no
/// mutable state, so concurrent use needs no synchronization.
#[derive(Clone)]
pub struct TokenCodec {
    config: Arc<JwtConfig>,
    encoding_key: Arc<EncodingKey>,
    decoding_key: Arc<DecodingKey>,
    validation: Arc<Validation>,
}

impl TokenCodec {
    /// Creates a new codec from the given configuration.
    ///
    /// The base64 secret is decoded exactly once here; construction fails
    /// if it is missing or undecodable.
    pub fn new(config: JwtConfig) -> ApiResult<Self> {
        let key = config.decoded_secret()?;

        let encoding_key = EncodingKey::from_secret(&key);
        let decoding_key = DecodingKey::from_secret(&key);

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_aud = false;
        // Expiry is checked by hand below so that exactly-expired tokens
        // fail; jsonwebtoken's exclusive comparison (and default leeway)
        // would let them through.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Ok(Self {
            config: Arc::new(config),
            encoding_key: Arc::new(encoding_key),
            decoding_key: Arc::new(decoding_key),
            validation: Arc::new(validation),
        })
    }

    /// Issues a token for the given principal.
    ///
    /// The subject is the principal's username; the role claim is the
    /// single authority string derived from its role.
    pub fn issue(&self, principal: &Principal) -> ApiResult<String> {
        let claims = Claims::new(&principal.username, principal.authority(), self.config.ttl_ms);

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding_key,
        )
        .map_err(|e| ApiError::internal(format!("Failed to sign token: {}", e)))
    }

    /// Verifies a token and returns its claims.
    ///
    /// Well-formedness and the signature are checked before any claim is
    /// trusted. Expiry is strict: a token whose expiration equals the
    /// current second fails with [`TokenError::Expired`]. No clock-skew
    /// allowance is applied.
    pub fn verify(&self, token: &str) -> Result<VerifiedToken, TokenError> {
        if token.trim().is_empty() {
            return Err(TokenError::EmptyClaims);
        }

        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(TokenError::from_jwt)?;

        let claims = data.claims;
        if claims.exp <= Utc::now().timestamp() {
            return Err(TokenError::Expired);
        }

        Ok(VerifiedToken {
            subject: claims.sub,
            role_claim: claims.role,
            issued_at: claims.iat,
            expires_at: claims.exp,
        })
    }

    /// Returns the subject of a valid token.
    ///
    /// Convenience for handlers that resolve ownership directly from a raw
    /// `Authorization` header value instead of the request context.
    pub fn username_of(&self, token: &str) -> Result<String, TokenError> {
        Ok(self.verify(token)?.subject)
    }

    /// Returns the configured token time-to-live in milliseconds.
    pub fn ttl_ms(&self) -> i64 {
        self.config.ttl_ms
    }
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("ttl_ms", &self.config.ttl_ms)
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use fairgate_core::Role;

    fn test_secret() -> String {
        BASE64_STANDARD.encode("fairgate-test-secret-0123456789abcdef")
    }

    fn test_codec() -> TokenCodec {
        TokenCodec::new(JwtConfig::new(test_secret())).unwrap()
    }

    fn vendor_principal() -> Principal {
        Principal::new("vendor@fair.example", Role::Vendor)
    }

    #[test]
    fn test_codec_rejects_missing_secret() {
        assert!(TokenCodec::new(JwtConfig::default()).is_err());
    }

    #[test]
    fn test_codec_rejects_invalid_base64() {
        assert!(TokenCodec::new(JwtConfig::new("not base64!!!")).is_err());
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let codec = test_codec();
        let token = codec.issue(&vendor_principal()).unwrap();

        // JWT tokens have 3 parts separated by dots
        assert_eq!(token.split('.').count(), 3);

        let verified = codec.verify(&token).unwrap();
        assert_eq!(verified.subject, "vendor@fair.example");
        assert_eq!(verified.role_claim, "ROLE_VENDOR");
        assert!(verified.expires_at > verified.issued_at);
    }

    #[test]
    fn test_zero_ttl_fails_expired() {
        let codec = TokenCodec::new(JwtConfig::new(test_secret()).with_ttl_ms(0)).unwrap();
        let token = codec.issue(&vendor_principal()).unwrap();

        assert_eq!(codec.verify(&token).unwrap_err(), TokenError::Expired);
    }

    #[test]
    fn test_elapsed_ttl_fails_expired() {
        let codec = TokenCodec::new(JwtConfig::new(test_secret()).with_ttl_ms(-60_000)).unwrap();
        let token = codec.issue(&vendor_principal()).unwrap();

        assert_eq!(codec.verify(&token).unwrap_err(), TokenError::Expired);
    }

    #[test]
    fn test_garbage_fails_malformed() {
        let codec = test_codec();
        assert_eq!(
            codec.verify("not.a.jwt").unwrap_err(),
            TokenError::Malformed
        );
        assert_eq!(
            codec.verify("onlyonesegment").unwrap_err(),
            TokenError::Malformed
        );
    }

    #[test]
    fn test_blank_fails_empty_claims() {
        let codec = test_codec();
        assert_eq!(codec.verify("").unwrap_err(), TokenError::EmptyClaims);
        assert_eq!(codec.verify("   ").unwrap_err(), TokenError::EmptyClaims);
    }

    #[test]
    fn test_signature_bit_flip_fails_bad_signature() {
        use base64::engine::general_purpose::URL_SAFE_NO_PAD;

        let codec = test_codec();
        let token = codec.issue(&vendor_principal()).unwrap();

        let parts: Vec<&str> = token.split('.').collect();
        let mut sig = URL_SAFE_NO_PAD.decode(parts[2]).unwrap();
        sig[0] ^= 0x01;
        let tampered = format!("{}.{}.{}", parts[0], parts[1], URL_SAFE_NO_PAD.encode(&sig));

        assert_eq!(
            codec.verify(&tampered).unwrap_err(),
            TokenError::BadSignature
        );
    }

    #[test]
    fn test_wrong_key_fails_bad_signature() {
        let codec = test_codec();
        let other = TokenCodec::new(JwtConfig::new(
            BASE64_STANDARD.encode("a-completely-different-secret-value!"),
        ))
        .unwrap();

        let token = codec.issue(&vendor_principal()).unwrap();
        assert_eq!(
            other.verify(&token).unwrap_err(),
            TokenError::BadSignature
        );
    }

    #[test]
    fn test_username_of_matches_subject() {
        let codec = test_codec();
        let token = codec.issue(&vendor_principal()).unwrap();

        assert_eq!(codec.username_of(&token).unwrap(), "vendor@fair.example");
    }

    #[test]
    fn test_username_of_rejects_invalid() {
        let codec = test_codec();
        assert!(codec.username_of("junk").is_err());
    }
}
