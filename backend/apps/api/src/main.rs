//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `restaurant::RestaurantError`.

use anyhow::Context;
use axum::{
    http,
    http::{Method, header},
};
use restaurant::{LoginEmailMatching, PgRestaurantRepository, RestaurantConfig, restaurant_router};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::{IpAddr, SocketAddr};
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,restaurant=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url =
        env::var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;
    let max_connections = env_or("DATABASE_MAX_CONNECTIONS", 5u32)?;

    let pool = match PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(&database_url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, "Database connection failed");
            return Err(e.into());
        }
    };

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    let restaurant_config = load_restaurant_config()?;
    tracing::info!(
        login_email_matching = ?restaurant_config.login_email_matching,
        pepper = restaurant_config.password_pepper.is_some(),
        "Restaurant configuration loaded"
    );

    // CORS configuration
    let cors = match env::var("FRONTEND_ORIGINS") {
        Ok(frontend_origins) => {
            let allowed_origins: Vec<http::HeaderValue> = frontend_origins
                .split(',')
                .filter_map(|origin| origin.trim().parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods(AllowMethods::list([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::OPTIONS,
                ]))
                .allow_headers(AllowHeaders::list([
                    header::CONTENT_TYPE,
                    header::AUTHORIZATION,
                    header::ACCEPT,
                ]))
        }
        // No origin list: accept any origin
        Err(_) => CorsLayer::permissive(),
    };

    // Build router
    let app = restaurant_router(PgRestaurantRepository::new(pool), restaurant_config)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let bind_addr: IpAddr = env_or("BIND_ADDR", IpAddr::from([0, 0, 0, 0]))?;
    let port: u16 = env_or("PORT", 3000)?;
    let addr = SocketAddr::new(bind_addr, port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Read an optional variable, falling back to `default` when unset
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}

fn load_restaurant_config() -> anyhow::Result<RestaurantConfig> {
    let mut config = match env::var("JWT_SECRET_KEY") {
        Ok(secret) if !secret.is_empty() => RestaurantConfig::with_secret(secret.into_bytes()),
        _ if cfg!(debug_assertions) => {
            tracing::warn!("JWT_SECRET_KEY not set, using a random development secret");
            RestaurantConfig::development()
        }
        _ => anyhow::bail!("JWT_SECRET_KEY must be set in production"),
    };

    config.login_email_matching = env_or("LOGIN_EMAIL_MATCHING", LoginEmailMatching::Exact)?;
    config.password_pepper = env::var("PASSWORD_PEPPER")
        .ok()
        .filter(|p| !p.is_empty())
        .map(String::into_bytes);

    Ok(config)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
