//! Status Check Use Cases

use crate::application::config::IntakeConfig;
use crate::application::validate::require_present;
use crate::domain::entities::StatusCheck;
use crate::domain::repository::StatusCheckRepository;
use crate::error::IntakeResult;
use std::sync::Arc;

/// Input DTO for recording a status check
#[derive(Debug, Clone)]
pub struct RecordStatusInput {
    pub client_name: String,
}

/// Record Status Use Case
pub struct RecordStatusUseCase<R>
where
    R: StatusCheckRepository,
{
    repo: Arc<R>,
}

impl<R> RecordStatusUseCase<R>
where
    R: StatusCheckRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: RecordStatusInput) -> IntakeResult<StatusCheck> {
        require_present("client_name", &input.client_name)?;

        let check = StatusCheck::new(input.client_name);
        self.repo.insert(&check).await?;

        tracing::info!(status_check_id = %check.id, "Status check recorded");

        Ok(check)
    }
}

/// List Status Checks Use Case
pub struct ListStatusChecksUseCase<R>
where
    R: StatusCheckRepository,
{
    repo: Arc<R>,
    config: Arc<IntakeConfig>,
}

impl<R> ListStatusChecksUseCase<R>
where
    R: StatusCheckRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<IntakeConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self) -> IntakeResult<Vec<StatusCheck>> {
        self.repo.list(self.config.list_limit).await
    }
}
