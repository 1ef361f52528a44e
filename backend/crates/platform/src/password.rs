//! Password Hashing and Verification
//!
//! - Argon2id hashing with a random per-password salt (PHC string output)
//! - Zeroization of plaintext and peppered buffers
//! - Optional application-wide pepper
//!
//! Hashing is CPU bound. Async callers should run [`ClearTextPassword::hash`]
//! and [`HashedPassword::verify`] on a blocking thread.

use std::fmt;

use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::SaltString,
};
use rand::rngs::OsRng;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

// ============================================================================
// Error Types
// ============================================================================

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Argon2 parameters rejected
    #[error("Invalid hashing parameters: {0}")]
    InvalidParams(String),

    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Stored value is not a PHC string
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Hashing cost
// ============================================================================

/// Argon2id cost parameters used when creating new hashes.
///
/// Verification always reads the parameters embedded in the stored hash,
/// so changing these never locks out existing accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashParams {
    /// Memory cost in KiB
    pub memory_kib: u32,
    /// Number of passes
    pub iterations: u32,
    /// Degree of parallelism
    pub parallelism: u32,
}

impl Default for HashParams {
    /// OWASP baseline: m=19456 (19 MiB), t=2, p=1
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

impl HashParams {
    /// Smallest parameters Argon2 accepts. Tests only.
    pub const fn minimal() -> Self {
        Self {
            memory_kib: 8,
            iterations: 1,
            parallelism: 1,
        }
    }

    fn argon2(&self) -> Result<Argon2<'static>, PasswordHashError> {
        let params = Params::new(self.memory_kib, self.iterations, self.parallelism, None)
            .map_err(|e| PasswordHashError::InvalidParams(e.to_string()))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password, erased from memory on drop.
///
/// No policy is applied here: the value is hashed exactly as given.
/// Callers decide whether to trim first (signup does, login does not).
///
/// ```rust
/// use platform::password::{ClearTextPassword, HashParams};
///
/// let password = ClearTextPassword::trimmed("  pw  ");
/// let hashed = password.hash(&HashParams::minimal(), None).unwrap();
/// assert!(hashed.verify(&ClearTextPassword::new("pw"), None));
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Strip leading and trailing whitespace before wrapping
    pub fn trimmed(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn peppered(&self, pepper: Option<&[u8]>) -> Zeroizing<Vec<u8>> {
        let mut bytes = Zeroizing::new(self.0.as_bytes().to_vec());
        if let Some(p) = pepper {
            bytes.extend_from_slice(p);
        }
        bytes
    }

    /// Hash with a fresh random salt
    ///
    /// ## Arguments
    /// * `params` - Argon2id cost
    /// * `pepper` - Optional application-wide secret appended before hashing
    pub fn hash(
        &self,
        params: &HashParams,
        pepper: Option<&[u8]>,
    ) -> Result<HashedPassword, PasswordHashError> {
        let password_bytes = self.peppered(pepper);
        let salt = SaltString::generate(&mut OsRng);

        let hash = params
            .argon2()?
            .hash_password(&password_bytes, &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Argon2id hash in PHC string format (algorithm, version, params, salt, hash)
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Load from storage, rejecting anything that is not a PHC string
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();

        PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;

        Ok(Self { hash })
    }

    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Constant-time verification against this hash.
    ///
    /// `pepper` must match the one used at hashing time.
    pub fn verify(&self, password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        let password_bytes = password.peppered(pepper);

        let parsed_hash = match PasswordHash::new(&self.hash) {
            Ok(h) => h,
            Err(_) => return false,
        };

        Argon2::default()
            .verify_password(&password_bytes, &parsed_hash)
            .is_ok()
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn fast() -> HashParams {
        HashParams::minimal()
    }

    #[test]
    fn test_hash_and_verify() {
        let password = ClearTextPassword::new("pw");
        let hashed = password.hash(&fast(), None).unwrap();

        assert!(hashed.verify(&password, None));
        assert!(!hashed.verify(&ClearTextPassword::new("wrong"), None));
    }

    #[test]
    fn test_hash_never_equals_plaintext() {
        let hashed = ClearTextPassword::new("pw").hash(&fast(), None).unwrap();
        assert_ne!(hashed.as_phc_string(), "pw");
        assert!(hashed.as_phc_string().starts_with("$argon2id$"));
    }

    #[test]
    fn test_same_password_gets_different_salts() {
        let password = ClearTextPassword::new("pw");
        let a = password.hash(&fast(), None).unwrap();
        let b = password.hash(&fast(), None).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_trimmed_vs_raw() {
        let hashed = ClearTextPassword::trimmed(" pw ").hash(&fast(), None).unwrap();

        assert!(hashed.verify(&ClearTextPassword::new("pw"), None));
        assert!(!hashed.verify(&ClearTextPassword::new(" pw "), None));
    }

    #[test]
    fn test_hash_with_pepper() {
        let password = ClearTextPassword::new("TestPassword123!");
        let pepper = b"my_secret_pepper";
        let hashed = password.hash(&fast(), Some(pepper)).unwrap();

        assert!(hashed.verify(&password, Some(pepper)));
        assert!(!hashed.verify(&password, None));
        assert!(!hashed.verify(&password, Some(b"wrong_pepper")));
    }

    #[test]
    fn test_params_are_embedded_in_hash() {
        let hashed = ClearTextPassword::new("pw").hash(&fast(), None).unwrap();
        assert!(hashed.as_phc_string().contains("m=8,t=1,p=1"));
    }

    #[test]
    fn test_invalid_params() {
        let params = HashParams {
            memory_kib: 0,
            iterations: 0,
            parallelism: 0,
        };
        let result = ClearTextPassword::new("pw").hash(&params, None);
        assert!(matches!(result, Err(PasswordHashError::InvalidParams(_))));
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let password = ClearTextPassword::new("pw");
        let hashed = password.hash(&fast(), None).unwrap();

        let restored = HashedPassword::from_phc_string(hashed.as_phc_string()).unwrap();
        assert!(restored.verify(&password, None));
    }

    #[test]
    fn test_invalid_phc_string() {
        assert!(HashedPassword::from_phc_string("not_a_valid_hash").is_err());
    }

    #[test]
    fn test_debug_redaction() {
        let password = ClearTextPassword::new("secret");
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));

        let hashed = password.hash(&fast(), None).unwrap();
        assert!(!format!("{:?}", hashed).contains("argon2"));
    }
}
