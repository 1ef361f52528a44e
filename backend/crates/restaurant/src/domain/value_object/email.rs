//! Email Value Object
//!
//! Login key of an account. Stored lower-cased; no format validation is
//! applied beyond that.

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Lower-case the submitted address (whitespace is kept as-is)
    pub fn normalized(raw: &str) -> Self {
        Self(raw.to_lowercase())
    }

    /// Create from database value (assumed already normalized)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_case_normalization() {
        assert_eq!(Email::normalized("A@B.com").as_str(), "a@b.com");
        assert_eq!(Email::normalized("User@Example.COM").as_str(), "user@example.com");
    }

    #[test]
    fn test_email_non_ascii_lowercased() {
        assert_eq!(Email::normalized("ÉLODIE@Café.fr").as_str(), "élodie@café.fr");
    }

    #[test]
    fn test_email_whitespace_kept() {
        assert_eq!(Email::normalized(" a@b.com ").as_str(), " a@b.com ");
    }

    #[test]
    fn test_from_db_is_verbatim() {
        assert_eq!(Email::from_db("Mixed@Case.com").as_str(), "Mixed@Case.com");
    }
}
