//! HTTP Handlers

use crate::content::{PortfolioCatalog, PortfolioSection};
use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Shared state for portfolio handlers
#[derive(Clone)]
pub struct PortfolioAppState {
    pub catalog: Arc<PortfolioCatalog>,
}

/// GET /api/portfolio
pub async fn get_portfolio(
    State(state): State<PortfolioAppState>,
) -> Json<BTreeMap<&'static str, PortfolioSection>> {
    Json(state.catalog.sections().clone())
}

/// GET /api/portfolio/{section_id}
///
/// Unknown ids answer 200 with `{"error": "Section not found"}` instead of
/// a 404. The deployed frontend consumes exactly this shape, so the status
/// code stays as observed.
pub async fn get_portfolio_section(
    State(state): State<PortfolioAppState>,
    Path(section_id): Path<String>,
) -> Response {
    match state.catalog.get(&section_id) {
        Some(section) => Json(*section).into_response(),
        None => {
            tracing::debug!(section_id = %section_id, "Unknown portfolio section requested");
            Json(serde_json::json!({ "error": "Section not found" })).into_response()
        }
    }
}
