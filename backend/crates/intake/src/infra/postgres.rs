//! PostgreSQL Repository Implementations

use crate::domain::entities::{ContactSubmission, StatusCheck};
use crate::domain::repository::{ContactRepository, StatusCheckRepository};
use crate::error::IntakeResult;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgIntakeRepository {
    pool: PgPool,
}

impl PgIntakeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ContactRepository for PgIntakeRepository {
    async fn insert(&self, submission: &ContactSubmission) -> IntakeResult<()> {
        sqlx::query(
            r#"
            INSERT INTO contact_submissions (
                contact_submission_id,
                name,
                email,
                message,
                submitted_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(submission.id.into_uuid())
        .bind(&submission.name)
        .bind(&submission.email)
        .bind(&submission.message)
        .bind(submission.submitted_at)
        .execute(&self.pool)
        .await?;

        tracing::info!(
            contact_submission_id = %submission.id,
            "Contact submission inserted"
        );

        Ok(())
    }

    async fn list(&self, limit: i64) -> IntakeResult<Vec<ContactSubmission>> {
        // Store-default order; no ORDER BY on purpose
        let rows = sqlx::query_as::<_, ContactRow>(
            r#"
            SELECT
                contact_submission_id,
                name,
                email,
                message,
                submitted_at
            FROM contact_submissions
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ContactRow::into_submission).collect())
    }
}

impl StatusCheckRepository for PgIntakeRepository {
    async fn insert(&self, check: &StatusCheck) -> IntakeResult<()> {
        sqlx::query(
            r#"
            INSERT INTO status_checks (
                status_check_id,
                client_name,
                submitted_at
            ) VALUES ($1, $2, $3)
            "#,
        )
        .bind(check.id.into_uuid())
        .bind(&check.client_name)
        .bind(check.submitted_at)
        .execute(&self.pool)
        .await?;

        tracing::info!(status_check_id = %check.id, "Status check inserted");

        Ok(())
    }

    async fn list(&self, limit: i64) -> IntakeResult<Vec<StatusCheck>> {
        let rows = sqlx::query_as::<_, StatusCheckRow>(
            r#"
            SELECT
                status_check_id,
                client_name,
                submitted_at
            FROM status_checks
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(StatusCheckRow::into_check).collect())
    }
}

#[derive(sqlx::FromRow)]
struct ContactRow {
    contact_submission_id: Uuid,
    name: String,
    email: String,
    message: String,
    submitted_at: DateTime<Utc>,
}

impl ContactRow {
    fn into_submission(self) -> ContactSubmission {
        ContactSubmission {
            id: self.contact_submission_id.into(),
            name: self.name,
            email: self.email,
            message: self.message,
            submitted_at: self.submitted_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct StatusCheckRow {
    status_check_id: Uuid,
    client_name: String,
    submitted_at: DateTime<Utc>,
}

impl StatusCheckRow {
    fn into_check(self) -> StatusCheck {
        StatusCheck {
            id: self.status_check_id.into(),
            client_name: self.client_name,
            submitted_at: self.submitted_at,
        }
    }
}
