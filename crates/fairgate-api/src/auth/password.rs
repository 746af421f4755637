// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Password hashing.
//!
//! Argon2id hashing and verification. Verification runs the full hash
//! computation regardless of input, so it does not leak timing information
//! about the stored credential.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use thiserror::Error;

/// Minimum accepted password length, matching the registration contract.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Password processing errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PasswordError {
    /// Hashing failed.
    #[error("Password hashing failed")]
    HashingFailed,
    /// The password does not match the stored hash.
    #[error("Password verification failed")]
    VerificationFailed,
    /// The stored hash is not a valid PHC string.
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

/// Hashes a password with Argon2id and a fresh random salt.
///
/// Returns the PHC-format hash string (salt included).
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| PasswordError::HashingFailed)
}

/// Verifies a password against a stored PHC-format hash.
pub fn verify_password(password: &str, hash: &str) -> Result<(), PasswordError> {
    let parsed = PasswordHash::new(hash).map_err(|_| PasswordError::InvalidHashFormat)?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| PasswordError::VerificationFailed)
}

/// Checks the minimum password length accepted at registration.
pub fn validate_password_strength(password: &str) -> Result<(), &'static str> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err("Password must be at least 6 characters");
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("stall-reservations-2025").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("stall-reservations-2025", &hash).is_ok());
        assert_eq!(
            verify_password("wrong-password", &hash).unwrap_err(),
            PasswordError::VerificationFailed
        );
    }

    #[test]
    fn test_same_password_different_salts() {
        let hash1 = hash_password("password1").unwrap();
        let hash2 = hash_password("password1").unwrap();

        assert_ne!(hash1, hash2);
        assert!(verify_password("password1", &hash1).is_ok());
        assert!(verify_password("password1", &hash2).is_ok());
    }

    #[test]
    fn test_invalid_hash_format() {
        assert_eq!(
            verify_password("password", "not-a-phc-hash").unwrap_err(),
            PasswordError::InvalidHashFormat
        );
    }

    #[test]
    fn test_password_strength() {
        assert!(validate_password_strength("abcdef").is_ok());
        assert!(validate_password_strength("abcde").is_err());
        assert!(validate_password_strength("").is_err());
    }
}
