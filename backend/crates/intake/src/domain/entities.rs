//! Domain Entities
//!
//! Insert-only records created from the public site. Identifiers and
//! timestamps are assigned server-side at construction; callers never
//! supply them, and nothing mutates a record after creation.

use chrono::{DateTime, Utc};
use kernel::id::{ContactSubmissionId, StatusCheckId};

/// ContactSubmission entity - one inquiry from the contact form
#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub id: ContactSubmissionId,
    pub name: String,
    pub email: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

impl ContactSubmission {
    /// Create a new submission with a fresh id and timestamp
    pub fn new(name: String, email: String, message: String) -> Self {
        Self {
            id: ContactSubmissionId::new(),
            name,
            email,
            message,
            submitted_at: Utc::now(),
        }
    }
}

/// StatusCheck entity - a lightweight heartbeat record
///
/// No business semantics beyond logging a client name and time.
#[derive(Debug, Clone)]
pub struct StatusCheck {
    pub id: StatusCheckId,
    pub client_name: String,
    pub submitted_at: DateTime<Utc>,
}

impl StatusCheck {
    /// Create a new status check with a fresh id and timestamp
    pub fn new(client_name: String) -> Self {
        Self {
            id: StatusCheckId::new(),
            client_name,
            submitted_at: Utc::now(),
        }
    }
}
