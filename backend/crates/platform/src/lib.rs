//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (secure random bytes, base64 secrets)
//! - Password hashing (Argon2id with fixed parameters)
//! - `Authorization: Bearer` header parsing

pub mod bearer;
pub mod crypto;
pub mod password;
