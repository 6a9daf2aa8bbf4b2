//! Portfolio Router

use crate::content::PortfolioCatalog;
use crate::presentation::handlers::{self, PortfolioAppState};
use axum::{Router, routing::get};
use std::sync::Arc;

/// Create the portfolio router over the static catalog
pub fn portfolio_router() -> Router {
    let state = PortfolioAppState {
        catalog: Arc::new(PortfolioCatalog::new()),
    };

    Router::new()
        .route("/portfolio", get(handlers::get_portfolio))
        .route("/portfolio/{section_id}", get(handlers::get_portfolio_section))
        .with_state(state)
}
