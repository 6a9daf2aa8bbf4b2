//! Intake Router

use crate::application::config::IntakeConfig;
use crate::domain::repository::{ContactRepository, StatusCheckRepository};
use crate::infra::postgres::PgIntakeRepository;
use crate::presentation::handlers::{self, IntakeAppState};
use axum::{
    Router,
    routing::post,
};
use std::sync::Arc;

/// Create the intake router with PostgreSQL repository
pub fn intake_router(repo: PgIntakeRepository, config: IntakeConfig) -> Router {
    intake_router_generic(repo, config)
}

/// Create a generic intake router for any repository implementation
pub fn intake_router_generic<R>(repo: R, config: IntakeConfig) -> Router
where
    R: ContactRepository + StatusCheckRepository + Clone + Send + Sync + 'static,
{
    let state = IntakeAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/contact",
            post(handlers::submit_contact::<R>).get(handlers::list_contacts::<R>),
        )
        .route(
            "/status",
            post(handlers::record_status::<R>).get(handlers::list_status_checks::<R>),
        )
        .with_state(state)
}
