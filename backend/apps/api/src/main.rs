//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors go through
//! the domain crates' error types.

use axum::{
    Json, Router, http,
    http::{Method, header},
    routing::get,
};
use intake::{IntakeConfig, PgIntakeRepository, intake_router};
use portfolio::portfolio_router;
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// GET /api/
async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Emergent Labs API" }))
}

/// CORS from the `CORS_ORIGINS` environment variable
///
/// Comma-separated explicit origins (with credentials); unset or blank
/// means any origin, in which case credentials must stay off.
fn cors_layer() -> CorsLayer {
    match env::var("CORS_ORIGINS") {
        Ok(origins) if !origins.trim().is_empty() => {
            let allowed: Vec<http::HeaderValue> = origins
                .split(',')
                .filter_map(|origin| origin.trim().parse().ok())
                .collect();

            // Wildcards cannot be combined with credentials, so list
            // methods and headers explicitly on this branch.
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(allowed))
                .allow_methods(AllowMethods::list([Method::GET, Method::POST, Method::OPTIONS]))
                .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]))
                .allow_credentials(true)
        }
        _ => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,intake=info,portfolio=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    let repo = PgIntakeRepository::new(pool.clone());

    // All routes live under /api
    let api_routes = Router::new()
        .route("/", get(root))
        .merge(portfolio_router())
        .merge(intake_router(repo, IntakeConfig::default()));

    let app = Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], 8001));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
