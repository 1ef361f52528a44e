//! HTTP Handlers

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, header};
use serde::de::DeserializeOwned;
use std::sync::Arc;

use platform::token::TokenSigner;

use crate::application::config::RestaurantConfig;
use crate::application::{
    GetRestaurantUseCase, ListRestaurantsUseCase, LoginUseCase, SignUpUseCase,
    SubmitDonationUseCase, UpdateProfileUseCase,
};
use crate::domain::repository::{AccountRepository, DonationRepository};
use crate::error::{RestaurantError, RestaurantResult};
use crate::presentation::dto::{
    DonationRequest, LoginRequest, LoginResponse, MessageResponse, RestaurantListResponse,
    RestaurantResponse, SignUpRequest, UpdateProfileRequest,
};

/// Shared state for restaurant handlers
#[derive(Clone)]
pub struct RestaurantAppState<R>
where
    R: AccountRepository + DonationRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<RestaurantConfig>,
    pub tokens: Arc<TokenSigner>,
}

impl<R> RestaurantAppState<R>
where
    R: AccountRepository + DonationRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: R, config: RestaurantConfig) -> Self {
        let tokens = Arc::new(config.token_signer());
        Self {
            repo: Arc::new(repo),
            config: Arc::new(config),
            tokens,
        }
    }
}

/// Decode a JSON request body.
///
/// Without a JSON content type (or with an empty body) every field is treated
/// as absent, so the field checks answer with "Missing required fields".
fn read_body<T>(headers: &HeaderMap, body: &Bytes) -> RestaurantResult<T>
where
    T: DeserializeOwned + Default,
{
    let is_json = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|mime| {
            let mime = mime.trim();
            mime.eq_ignore_ascii_case("application/json") || mime.ends_with("+json")
        })
        .unwrap_or(false);

    if !is_json || body.is_empty() {
        return Ok(T::default());
    }

    serde_json::from_slice(body).map_err(|e| RestaurantError::InvalidBody(e.to_string()))
}

// ============================================================================
// Health
// ============================================================================

/// GET /
pub async fn root() -> &'static str {
    "Hello"
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /signup
pub async fn sign_up<R>(
    State(state): State<RestaurantAppState<R>>,
    headers: HeaderMap,
    body: Bytes,
) -> RestaurantResult<Json<MessageResponse>>
where
    R: AccountRepository + DonationRepository + Clone + Send + Sync + 'static,
{
    let input = read_body::<SignUpRequest>(&headers, &body)?.into_input()?;

    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone());
    use_case.execute(input).await?;

    Ok(Json(MessageResponse::new("Signup successful")))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/login
pub async fn login<R>(
    State(state): State<RestaurantAppState<R>>,
    headers: HeaderMap,
    body: Bytes,
) -> RestaurantResult<Json<LoginResponse>>
where
    R: AccountRepository + DonationRepository + Clone + Send + Sync + 'static,
{
    let input = read_body::<LoginRequest>(&headers, &body)?.into_input()?;

    let use_case = LoginUseCase::new(
        state.repo.clone(),
        state.tokens.clone(),
        state.config.clone(),
    );
    let output = use_case.execute(input).await?;

    Ok(Json(LoginResponse {
        token: output.token,
        logged_in_restaurant_id: output.restaurant_id,
    }))
}

// ============================================================================
// Restaurants
// ============================================================================

/// GET /api/restaurants/{restaurant_id}
pub async fn get_restaurant<R>(
    State(state): State<RestaurantAppState<R>>,
    Path(restaurant_id): Path<String>,
) -> RestaurantResult<Json<RestaurantResponse>>
where
    R: AccountRepository + DonationRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetRestaurantUseCase::new(state.repo.clone());
    let account = use_case.execute(&restaurant_id).await?;

    Ok(Json(RestaurantResponse {
        user: account.into(),
    }))
}

/// GET /api/restaurants
pub async fn list_restaurants<R>(
    State(state): State<RestaurantAppState<R>>,
) -> RestaurantResult<Json<RestaurantListResponse>>
where
    R: AccountRepository + DonationRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListRestaurantsUseCase::new(state.repo.clone());
    let accounts = use_case.execute().await?;

    Ok(Json(RestaurantListResponse {
        users: accounts.into_iter().map(Into::into).collect(),
    }))
}

/// PUT /api/restaurants/{restaurant_id}
///
/// Any caller may update any restaurant; no token is required.
pub async fn update_profile<R>(
    State(state): State<RestaurantAppState<R>>,
    Path(restaurant_id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> RestaurantResult<Json<MessageResponse>>
where
    R: AccountRepository + DonationRepository + Clone + Send + Sync + 'static,
{
    let update = read_body::<UpdateProfileRequest>(&headers, &body)?;

    let use_case = UpdateProfileUseCase::new(state.repo.clone());
    use_case.execute(&restaurant_id, update.into()).await?;

    Ok(Json(MessageResponse::new("Document updated successfully")))
}

// ============================================================================
// NGO Donations
// ============================================================================

/// POST /api/ngo
pub async fn submit_donation<R>(
    State(state): State<RestaurantAppState<R>>,
    headers: HeaderMap,
    body: Bytes,
) -> RestaurantResult<Json<MessageResponse>>
where
    R: AccountRepository + DonationRepository + Clone + Send + Sync + 'static,
{
    let input = read_body::<DonationRequest>(&headers, &body)?.into_input()?;

    let use_case = SubmitDonationUseCase::new(state.repo.clone());
    use_case.execute(input).await?;

    Ok(Json(MessageResponse::new(
        "Food donation received successfully",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn json_headers(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_read_body_without_content_type_is_empty() {
        let body = Bytes::from_static(br#"{"food":"soup"}"#);
        let req: UpdateProfileRequest = read_body(&HeaderMap::new(), &body).unwrap();
        assert!(req.food.is_none());
    }

    #[test]
    fn test_read_body_with_charset() {
        let body = Bytes::from_static(br#"{"food":"soup"}"#);
        let req: UpdateProfileRequest =
            read_body(&json_headers("application/json; charset=utf-8"), &body).unwrap();
        assert_eq!(req.food.as_deref(), Some("soup"));
    }

    #[test]
    fn test_read_body_malformed() {
        let body = Bytes::from_static(b"{not json");
        let result: RestaurantResult<UpdateProfileRequest> =
            read_body(&json_headers("application/json"), &body);
        assert!(matches!(result, Err(RestaurantError::InvalidBody(_))));
    }

    #[test]
    fn test_read_body_empty_json_body() {
        let req: LoginRequest =
            read_body(&json_headers("application/json"), &Bytes::new()).unwrap();
        assert!(req.email.is_none());
    }
}
