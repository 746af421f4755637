// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # fairgate-core
//!
//! Core domain types for the FAIRGATE authentication service.
//!
//! This crate provides the foundational types shared across all FAIRGATE
//! components:
//!
//! - **Role**: closed set of account roles and their derived authorities
//! - **Principal / UserRecord**: authenticated identities and stored accounts
//! - **Store**: the user store boundary trait and an in-memory implementation
//! - **Error**: credential and store error hierarchy
//!
//! ## Example
//!
//! ```rust
//! use fairgate_core::{Role, UserRecord};
//!
//! let role = Role::from_str_lossy("employee");
//! assert_eq!(role, Role::Employee);
//! assert_eq!(role.authority(), "ROLE_EMPLOYEE");
//!
//! let user = UserRecord::new("vendor@fair.example", "$argon2id$...", Role::Vendor);
//! assert!(user.is_vendor());
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod role;
pub mod store;
pub mod user;

pub use error::{AuthError, StoreError};
pub use role::Role;
pub use store::{MemoryUserStore, UserStore};
pub use user::{Principal, UserRecord};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
