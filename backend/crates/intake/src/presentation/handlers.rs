//! HTTP Handlers

use crate::application::config::IntakeConfig;
use crate::application::contact::{
    ListContactSubmissionsUseCase, SubmitContactInput, SubmitContactUseCase,
};
use crate::application::status::{
    ListStatusChecksUseCase, RecordStatusInput, RecordStatusUseCase,
};
use crate::domain::repository::{ContactRepository, StatusCheckRepository};
use crate::error::IntakeResult;
use crate::presentation::dto::{
    ContactCreateRequest, ContactSubmissionResponse, StatusCheckCreateRequest,
    StatusCheckResponse,
};
use axum::Json;
use axum::extract::State;
use std::sync::Arc;

/// Shared state for intake handlers
#[derive(Clone)]
pub struct IntakeAppState<R>
where
    R: ContactRepository + StatusCheckRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<IntakeConfig>,
}

/// POST /api/contact
pub async fn submit_contact<R>(
    State(state): State<IntakeAppState<R>>,
    Json(req): Json<ContactCreateRequest>,
) -> IntakeResult<Json<ContactSubmissionResponse>>
where
    R: ContactRepository + StatusCheckRepository + Clone + Send + Sync + 'static,
{
    let use_case = SubmitContactUseCase::new(state.repo.clone());

    let input = SubmitContactInput {
        name: req.name,
        email: req.email,
        message: req.message,
    };

    let submission = use_case.execute(input).await?;

    Ok(Json(submission.into()))
}

/// GET /api/contact
pub async fn list_contacts<R>(
    State(state): State<IntakeAppState<R>>,
) -> IntakeResult<Json<Vec<ContactSubmissionResponse>>>
where
    R: ContactRepository + StatusCheckRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListContactSubmissionsUseCase::new(state.repo.clone(), state.config.clone());

    let submissions = use_case.execute().await?;

    Ok(Json(submissions.into_iter().map(Into::into).collect()))
}

/// POST /api/status
pub async fn record_status<R>(
    State(state): State<IntakeAppState<R>>,
    Json(req): Json<StatusCheckCreateRequest>,
) -> IntakeResult<Json<StatusCheckResponse>>
where
    R: ContactRepository + StatusCheckRepository + Clone + Send + Sync + 'static,
{
    let use_case = RecordStatusUseCase::new(state.repo.clone());

    let input = RecordStatusInput {
        client_name: req.client_name,
    };

    let check = use_case.execute(input).await?;

    Ok(Json(check.into()))
}

/// GET /api/status
pub async fn list_status_checks<R>(
    State(state): State<IntakeAppState<R>>,
) -> IntakeResult<Json<Vec<StatusCheckResponse>>>
where
    R: ContactRepository + StatusCheckRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListStatusChecksUseCase::new(state.repo.clone(), state.config.clone());

    let checks = use_case.execute().await?;

    Ok(Json(checks.into_iter().map(Into::into).collect()))
}
