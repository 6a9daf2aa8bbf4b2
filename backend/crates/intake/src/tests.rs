//! Unit tests for the intake crate
//!
//! Router-level tests drive the real axum router in-memory through
//! `intake_router_generic` with an in-memory repository, so no database
//! is needed.

use crate::application::config::IntakeConfig;
use crate::domain::entities::{ContactSubmission, StatusCheck};
use crate::domain::repository::{ContactRepository, StatusCheckRepository};
use crate::error::{IntakeError, IntakeResult};
use crate::presentation::router::intake_router_generic;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// In-memory repository used in place of Postgres
#[derive(Clone, Default)]
struct MemoryIntakeRepository {
    contacts: Arc<Mutex<Vec<ContactSubmission>>>,
    checks: Arc<Mutex<Vec<StatusCheck>>>,
    fail_writes: bool,
}

impl MemoryIntakeRepository {
    fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    fn seed_checks(&self, count: usize) {
        let mut checks = self.checks.lock().unwrap();
        for i in 0..count {
            checks.push(StatusCheck::new(format!("client-{i}")));
        }
    }
}

impl ContactRepository for MemoryIntakeRepository {
    async fn insert(&self, submission: &ContactSubmission) -> IntakeResult<()> {
        if self.fail_writes {
            return Err(IntakeError::Database(sqlx::Error::PoolTimedOut));
        }
        self.contacts.lock().unwrap().push(submission.clone());
        Ok(())
    }

    async fn list(&self, limit: i64) -> IntakeResult<Vec<ContactSubmission>> {
        let contacts = self.contacts.lock().unwrap();
        Ok(contacts.iter().take(limit as usize).cloned().collect())
    }
}

impl StatusCheckRepository for MemoryIntakeRepository {
    async fn insert(&self, check: &StatusCheck) -> IntakeResult<()> {
        if self.fail_writes {
            return Err(IntakeError::Database(sqlx::Error::PoolTimedOut));
        }
        self.checks.lock().unwrap().push(check.clone());
        Ok(())
    }

    async fn list(&self, limit: i64) -> IntakeResult<Vec<StatusCheck>> {
        let checks = self.checks.lock().unwrap();
        Ok(checks.iter().take(limit as usize).cloned().collect())
    }
}

fn app(repo: MemoryIntakeRepository) -> Router {
    intake_router_generic(repo, IntakeConfig::default())
}

async fn request(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");

    let request = match body {
        Some(body) => builder.body(Body::from(body.to_string())).expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, json)
}

// ============================================================================
// Contact submissions
// ============================================================================

#[tokio::test]
async fn test_submit_contact_echoes_input_and_generates_id() {
    let repo = MemoryIntakeRepository::default();
    let payload = json!({
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "message": "Interested in the platform."
    });

    let (status, body) = request(app(repo.clone()), "POST", "/contact", Some(payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Ada Lovelace");
    assert_eq!(body["email"], "ada@example.com");
    assert_eq!(body["message"], "Interested in the platform.");
    assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(body["timestamp"].as_str().is_some());

    // The echoed record is the persisted one
    let stored = repo.contacts.lock().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id.to_string(), body["id"].as_str().unwrap());
}

#[tokio::test]
async fn test_consecutive_submissions_get_distinct_ids() {
    let repo = MemoryIntakeRepository::default();
    let payload = json!({
        "name": "Ada",
        "email": "ada@example.com",
        "message": "hi"
    });

    let (_, first) = request(app(repo.clone()), "POST", "/contact", Some(payload.clone())).await;
    let (_, second) = request(app(repo.clone()), "POST", "/contact", Some(payload)).await;

    assert_ne!(first["id"], second["id"]);
}

#[tokio::test]
async fn test_blank_required_field_is_rejected() {
    let repo = MemoryIntakeRepository::default();
    let payload = json!({
        "name": "   ",
        "email": "ada@example.com",
        "message": "hi"
    });

    let (status, body) = request(app(repo.clone()), "POST", "/contact", Some(payload)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().is_some_and(|d| d.contains("name")));
    assert!(repo.contacts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_required_field_is_rejected() {
    let repo = MemoryIntakeRepository::default();
    let payload = json!({ "name": "Ada" });

    let (status, _) = request(app(repo), "POST", "/contact", Some(payload)).await;

    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_email_format_is_not_validated() {
    let repo = MemoryIntakeRepository::default();
    let payload = json!({
        "name": "Ada",
        "email": "not an email at all",
        "message": "hi"
    });

    let (status, _) = request(app(repo), "POST", "/contact", Some(payload)).await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_list_contacts_returns_submitted_records() {
    let repo = MemoryIntakeRepository::default();
    for i in 0..3 {
        let payload = json!({
            "name": format!("user-{i}"),
            "email": format!("user-{i}@example.com"),
            "message": "hello"
        });
        request(app(repo.clone()), "POST", "/contact", Some(payload)).await;
    }

    let (status, body) = request(app(repo), "GET", "/contact", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn test_persistence_failure_surfaces_as_server_error() {
    let repo = MemoryIntakeRepository::failing();
    let payload = json!({
        "name": "Ada",
        "email": "ada@example.com",
        "message": "hi"
    });

    let (status, _) = request(app(repo), "POST", "/contact", Some(payload)).await;

    assert!(status.is_server_error());
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

// ============================================================================
// Status checks
// ============================================================================

#[tokio::test]
async fn test_record_status_check() {
    let repo = MemoryIntakeRepository::default();
    let payload = json!({ "client_name": "uptime-probe" });

    let (status, body) = request(app(repo), "POST", "/status", Some(payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["client_name"], "uptime-probe");
    assert!(body["id"].as_str().is_some());
    assert!(body["timestamp"].as_str().is_some());
}

#[tokio::test]
async fn test_same_client_name_produces_distinct_records() {
    let repo = MemoryIntakeRepository::default();
    let payload = json!({ "client_name": "uptime-probe" });

    let (_, first) = request(app(repo.clone()), "POST", "/status", Some(payload.clone())).await;
    let (_, second) = request(app(repo.clone()), "POST", "/status", Some(payload)).await;

    assert_ne!(first["id"], second["id"]);
    assert_eq!(repo.checks.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_blank_client_name_is_rejected() {
    let repo = MemoryIntakeRepository::default();
    let payload = json!({ "client_name": "" });

    let (status, _) = request(app(repo), "POST", "/status", Some(payload)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_list_status_checks_is_capped_at_limit() {
    let repo = MemoryIntakeRepository::default();
    repo.seed_checks(1005);

    let (status, body) = request(app(repo), "GET", "/status", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1000));
}
