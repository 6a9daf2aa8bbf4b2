//! API DTOs (Data Transfer Objects)
//!
//! Field names mirror the public JSON contract, which is snake_case
//! (`client_name`, `image_url`, ...).

use crate::domain::entities::{ContactSubmission, StatusCheck};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Contact
// ============================================================================

/// Request for POST /api/contact
#[derive(Debug, Clone, Deserialize)]
pub struct ContactCreateRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Response for POST /api/contact and items of GET /api/contact
#[derive(Debug, Clone, Serialize)]
pub struct ContactSubmissionResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl From<ContactSubmission> for ContactSubmissionResponse {
    fn from(submission: ContactSubmission) -> Self {
        Self {
            id: submission.id.into_uuid(),
            name: submission.name,
            email: submission.email,
            message: submission.message,
            timestamp: submission.submitted_at,
        }
    }
}

// ============================================================================
// Status
// ============================================================================

/// Request for POST /api/status
#[derive(Debug, Clone, Deserialize)]
pub struct StatusCheckCreateRequest {
    pub client_name: String,
}

/// Response for POST /api/status and items of GET /api/status
#[derive(Debug, Clone, Serialize)]
pub struct StatusCheckResponse {
    pub id: Uuid,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

impl From<StatusCheck> for StatusCheckResponse {
    fn from(check: StatusCheck) -> Self {
        Self {
            id: check.id.into_uuid(),
            client_name: check.client_name,
            timestamp: check.submitted_at,
        }
    }
}
