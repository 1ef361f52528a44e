//! Application Configuration
//!
//! Secrets and behaviour switches for the restaurant use cases.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use platform::password::HashParams;
use platform::token::TokenSigner;
use thiserror::Error;

/// How the login endpoint matches the submitted email against stored accounts.
///
/// Signup always stores the email lower-cased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginEmailMatching {
    /// Look up the email exactly as submitted. `A@B.com` will not find an
    /// account registered as `A@B.com`, because it was stored as `a@b.com`.
    #[default]
    Exact,
    /// Lower-case the submitted email before lookup.
    CaseInsensitive,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown login email matching mode: {0} (expected `exact` or `case-insensitive`)")]
pub struct ParseLoginEmailMatchingError(String);

impl FromStr for LoginEmailMatching {
    type Err = ParseLoginEmailMatchingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(LoginEmailMatching::Exact),
            "case-insensitive" | "case_insensitive" => Ok(LoginEmailMatching::CaseInsensitive),
            other => Err(ParseLoginEmailMatchingError(other.to_string())),
        }
    }
}

/// Restaurant application configuration
#[derive(Clone)]
pub struct RestaurantConfig {
    /// HMAC secret for access tokens
    pub token_secret: Vec<u8>,
    /// Access token lifetime (12 hours)
    pub token_ttl: Duration,
    /// Argon2id cost for new password hashes
    pub password_hash_params: HashParams,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
    pub login_email_matching: LoginEmailMatching,
}

impl Default for RestaurantConfig {
    fn default() -> Self {
        Self {
            token_secret: vec![0u8; 32],
            token_ttl: Duration::from_secs(12 * 3600), // 12 hours
            password_hash_params: HashParams::default(),
            password_pepper: None,
            login_email_matching: LoginEmailMatching::Exact,
        }
    }
}

impl RestaurantConfig {
    /// Config with an explicit token secret (production)
    pub fn with_secret(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            token_secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create config with a random token secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self::with_secret(secret.to_vec())
    }

    /// Create config for development. Tokens do not survive a restart.
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    pub fn token_signer(&self) -> TokenSigner {
        TokenSigner::new(&self.token_secret, self.token_ttl)
    }

    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl fmt::Debug for RestaurantConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestaurantConfig")
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("password_hash_params", &self.password_hash_params)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .field("login_email_matching", &self.login_email_matching)
            .finish()
    }
}
