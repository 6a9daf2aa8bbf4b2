//! Contact Submission Use Cases

use crate::application::config::IntakeConfig;
use crate::application::validate::require_present;
use crate::domain::entities::ContactSubmission;
use crate::domain::repository::ContactRepository;
use crate::error::IntakeResult;
use std::sync::Arc;

/// Input DTO for submitting a contact form
#[derive(Debug, Clone)]
pub struct SubmitContactInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Submit Contact Use Case
///
/// Validates required fields, assigns id + timestamp, persists and echoes
/// the created record back.
pub struct SubmitContactUseCase<R>
where
    R: ContactRepository,
{
    repo: Arc<R>,
}

impl<R> SubmitContactUseCase<R>
where
    R: ContactRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: SubmitContactInput) -> IntakeResult<ContactSubmission> {
        require_present("name", &input.name)?;
        require_present("email", &input.email)?;
        require_present("message", &input.message)?;

        let submission = ContactSubmission::new(input.name, input.email, input.message);
        self.repo.insert(&submission).await?;

        tracing::info!(
            contact_submission_id = %submission.id,
            "Contact submission stored"
        );

        Ok(submission)
    }
}

/// List Contact Submissions Use Case
pub struct ListContactSubmissionsUseCase<R>
where
    R: ContactRepository,
{
    repo: Arc<R>,
    config: Arc<IntakeConfig>,
}

impl<R> ListContactSubmissionsUseCase<R>
where
    R: ContactRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<IntakeConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self) -> IntakeResult<Vec<ContactSubmission>> {
        self.repo.list(self.config.list_limit).await
    }
}
