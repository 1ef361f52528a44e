//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations with no domain knowledge:
//! - Password hashing (Argon2id, salted, zeroized plaintext)
//! - Signed, time-limited access tokens (HS256 JWT)

pub mod password;
pub mod token;
