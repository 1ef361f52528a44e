//! API DTOs (Data Transfer Objects)
//!
//! Request fields are all optional at the serde level so that a missing field
//! becomes a 400 "Missing required fields" instead of a deserialization error.
//! Numbers and booleans are accepted in string fields and stored in their
//! JSON text form; objects and arrays are rejected.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::application::{LoginInput, SignUpInput, SubmitDonationInput};
use crate::domain::entity::account::{Account, ProfileUpdate};
use crate::error::{RestaurantError, RestaurantResult};

/// Absent and empty strings both count as missing
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn required(value: Option<String>) -> RestaurantResult<String> {
    present(value).ok_or(RestaurantError::MissingFields)
}

/// Read a scalar JSON value as a string (`42` -> `"42"`, `true` -> `"true"`)
fn string_like<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected a string, found {}",
            if other.is_array() { "an array" } else { "an object" }
        ))),
    }
}

// ============================================================================
// Sign Up
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    #[serde(default, deserialize_with = "string_like")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "string_like")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "string_like")]
    pub password: Option<String>,
    #[serde(default, deserialize_with = "string_like")]
    pub restaurant_id: Option<String>,
}

impl SignUpRequest {
    pub fn into_input(self) -> RestaurantResult<SignUpInput> {
        Ok(SignUpInput {
            name: required(self.name)?,
            email: required(self.email)?,
            password: required(self.password)?,
            restaurant_id: required(self.restaurant_id)?,
        })
    }
}

// ============================================================================
// Login
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "string_like")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "string_like")]
    pub password: Option<String>,
}

impl LoginRequest {
    pub fn into_input(self) -> RestaurantResult<LoginInput> {
        Ok(LoginInput {
            email: required(self.email)?,
            password: required(self.password)?,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub logged_in_restaurant_id: String,
}

// ============================================================================
// Donation
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DonationRequest {
    #[serde(default, deserialize_with = "string_like")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "string_like")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "string_like")]
    pub food: Option<String>,
}

impl DonationRequest {
    pub fn into_input(self) -> RestaurantResult<SubmitDonationInput> {
        Ok(SubmitDonationInput {
            name: required(self.name)?,
            address: required(self.address)?,
            food: required(self.food)?,
        })
    }
}

// ============================================================================
// Profile Update
// ============================================================================

/// Nothing is required: absent fields clear the stored value, empty strings
/// are stored as sent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default, deserialize_with = "string_like")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "string_like")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "string_like")]
    pub food: Option<String>,
}

impl From<UpdateProfileRequest> for ProfileUpdate {
    fn from(req: UpdateProfileRequest) -> Self {
        ProfileUpdate {
            name: req.name,
            address: req.address,
            food: req.food,
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub const fn new(message: &'static str) -> Self {
        Self { message }
    }
}

/// Stored account as returned by the restaurant lookups.
///
/// `password` carries the stored hash.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountView {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
    pub password: String,
    pub restaurant_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food: Option<String>,
}

impl From<Account> for AccountView {
    fn from(account: Account) -> Self {
        Self {
            id: account.account_id.to_string(),
            name: account.name,
            email: account.email.into_inner(),
            password: account.password_hash.as_phc_string().to_string(),
            restaurant_id: account.restaurant_id.as_str().to_string(),
            address: account.address,
            food: account.food,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RestaurantResponse {
    pub user: AccountView,
}

#[derive(Debug, Clone, Serialize)]
pub struct RestaurantListResponse {
    pub users: Vec<AccountView>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_counts_as_missing() {
        let req = SignUpRequest {
            name: Some("A".into()),
            email: Some("".into()),
            password: Some("pw".into()),
            restaurant_id: Some("r1".into()),
        };
        assert!(matches!(req.into_input(), Err(RestaurantError::MissingFields)));
    }

    #[test]
    fn test_signup_request_uses_camel_case() {
        let req: SignUpRequest = serde_json::from_str(
            r#"{"name":"A","email":"A@B.com","password":"pw","restaurantId":"r1"}"#,
        )
        .unwrap();
        let input = req.into_input().unwrap();
        assert_eq!(input.restaurant_id, "r1");
    }

    #[test]
    fn test_update_request_absent_fields_clear() {
        let update: ProfileUpdate =
            serde_json::from_str::<UpdateProfileRequest>(r#"{"food":"soup"}"#)
                .unwrap()
                .into();
        assert_eq!(
            update,
            ProfileUpdate {
                name: None,
                address: None,
                food: Some("soup".into()),
            }
        );
    }

    #[test]
    fn test_update_request_keeps_empty_strings() {
        let update: ProfileUpdate = serde_json::from_str::<UpdateProfileRequest>(
            r#"{"name":"","address":"","food":""}"#,
        )
        .unwrap()
        .into();
        assert_eq!(update.name.as_deref(), Some(""));
        assert_eq!(update.address.as_deref(), Some(""));
        assert_eq!(update.food.as_deref(), Some(""));
    }

    #[test]
    fn test_scalar_values_read_as_strings() {
        let req: SignUpRequest = serde_json::from_str(
            r#"{"name":"A","email":"a@b.com","password":1234,"restaurantId":42}"#,
        )
        .unwrap();
        let input = req.into_input().unwrap();
        assert_eq!(input.restaurant_id, "42");
        assert_eq!(input.password, "1234");

        let req: UpdateProfileRequest =
            serde_json::from_str(r#"{"name":null,"address":true,"food":2.5}"#).unwrap();
        assert!(req.name.is_none());
        assert_eq!(req.address.as_deref(), Some("true"));
        assert_eq!(req.food.as_deref(), Some("2.5"));
    }

    #[test]
    fn test_structured_values_rejected() {
        assert!(serde_json::from_str::<DonationRequest>(r#"{"food":["rice"]}"#).is_err());
        assert!(serde_json::from_str::<LoginRequest>(r#"{"email":{"a":1}}"#).is_err());
    }

    #[test]
    fn test_login_response_field_names() {
        let json = serde_json::to_value(LoginResponse {
            token: "t".into(),
            logged_in_restaurant_id: "r1".into(),
        })
        .unwrap();
        assert_eq!(json["loggedInRestaurantId"], "r1");
        assert_eq!(json["token"], "t");
    }
}
