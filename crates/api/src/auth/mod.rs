//! Authentication primitives.
//!
//! - [`password`] -- Argon2id hashing of the admin password and verification.
//! - [`basic`] -- HTTP Basic `Authorization` header parsing.

pub mod basic;
pub mod password;
