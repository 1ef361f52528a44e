//! Restaurant ID Value Object
//!
//! External identifier chosen at signup and used by every restaurant-scoped
//! route. Distinct from the internal `AccountId`. Uniqueness is not enforced.

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RestaurantId(String);

impl RestaurantId {
    /// `None` for an empty string
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() { None } else { Some(Self(raw)) }
    }

    pub fn from_db(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restaurant_id_new() {
        assert_eq!(RestaurantId::new("r1").unwrap().as_str(), "r1");
        assert!(RestaurantId::new("").is_none());
    }

    #[test]
    fn test_restaurant_id_is_case_sensitive() {
        assert_ne!(RestaurantId::new("R1"), RestaurantId::new("r1"));
    }
}
