//! Restaurant Router

use axum::{
    Router,
    body::Body,
    http::Request,
    response::Response,
    routing::{get, post},
};
use tower::ServiceExt;

use crate::application::config::RestaurantConfig;
use crate::domain::repository::{AccountRepository, DonationRepository};
use crate::infra::postgres::PgRestaurantRepository;
use crate::presentation::handlers::{self, RestaurantAppState};

/// Create the restaurant router with the PostgreSQL repository
pub fn restaurant_router(repo: PgRestaurantRepository, config: RestaurantConfig) -> Router {
    restaurant_router_generic(repo, config)
}

/// Create the restaurant router for any repository implementation
pub fn restaurant_router_generic<R>(repo: R, config: RestaurantConfig) -> Router
where
    R: AccountRepository + DonationRepository + Clone + Send + Sync + 'static,
{
    let state = RestaurantAppState::new(repo, config);

    Router::new()
        .route("/", get(handlers::root))
        .route("/signup", post(handlers::sign_up::<R>))
        .route("/api/login", post(handlers::login::<R>))
        .route("/api/restaurants", get(handlers::list_restaurants::<R>))
        .route(
            "/api/restaurants/{restaurant_id}",
            get(handlers::get_restaurant::<R>).put(handlers::update_profile::<R>),
        )
        .route("/api/ngo", post(handlers::submit_donation::<R>))
        .with_state(state)
}

/// Serve exactly one request without binding a socket.
///
/// Builds the same router as the standalone server, for invocation-per-request
/// hosts.
pub async fn dispatch<R>(repo: R, config: RestaurantConfig, request: Request<Body>) -> Response
where
    R: AccountRepository + DonationRepository + Clone + Send + Sync + 'static,
{
    match restaurant_router_generic(repo, config).oneshot(request).await {
        Ok(response) => response,
        Err(never) => match never {},
    }
}
