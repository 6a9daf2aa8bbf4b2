//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entities::{ContactSubmission, StatusCheck};
use crate::error::IntakeResult;

/// ContactSubmission repository trait
#[trait_variant::make(ContactRepository: Send)]
pub trait LocalContactRepository {
    /// Persist a new contact submission
    async fn insert(&self, submission: &ContactSubmission) -> IntakeResult<()>;

    /// List up to `limit` submissions in store-default order
    async fn list(&self, limit: i64) -> IntakeResult<Vec<ContactSubmission>>;
}

/// StatusCheck repository trait
#[trait_variant::make(StatusCheckRepository: Send)]
pub trait LocalStatusCheckRepository {
    /// Persist a new status check
    async fn insert(&self, check: &StatusCheck) -> IntakeResult<()>;

    /// List up to `limit` status checks in store-default order
    async fn list(&self, limit: i64) -> IntakeResult<Vec<StatusCheck>>;
}
