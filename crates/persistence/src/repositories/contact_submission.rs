//! Contact submission repository for database operations.
//!
//! Submissions are append-and-transition only: there is no update of form
//! fields and no delete. The single status transition is new -> read.

use domain::models::{ContactSubmission, SubmissionStatus};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::ContactSubmissionEntity;
use crate::metrics::QueryTimer;

const SUBMISSION_COLUMNS: &str = "id, name, email, phone, message, status, created_at";

/// Repository for contact submission database operations.
#[derive(Clone)]
pub struct ContactSubmissionRepository {
    pool: PgPool,
}

impl ContactSubmissionRepository {
    /// Creates a new ContactSubmissionRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all submissions, newest first.
    pub async fn list(&self) -> Result<Vec<ContactSubmission>, sqlx::Error> {
        let timer = QueryTimer::new("list_contact_submissions");
        let result = sqlx::query_as::<_, ContactSubmissionEntity>(&format!(
            "SELECT {} FROM contact_submissions ORDER BY created_at DESC",
            SUBMISSION_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await;
        timer.record();

        Ok(result?.into_iter().map(to_model).collect())
    }

    /// Insert a new submission with status "new".
    pub async fn insert(
        &self,
        name: &str,
        email: &str,
        phone: Option<&str>,
        message: &str,
    ) -> Result<ContactSubmission, sqlx::Error> {
        let timer = QueryTimer::new("insert_contact_submission");
        let result = sqlx::query_as::<_, ContactSubmissionEntity>(&format!(
            r#"
            INSERT INTO contact_submissions (name, email, phone, message)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            SUBMISSION_COLUMNS
        ))
        .bind(name)
        .bind(email)
        .bind(phone)
        .bind(message)
        .fetch_one(&self.pool)
        .await;
        timer.record();

        result.map(to_model)
    }

    /// Transition a submission from "new" to "read".
    ///
    /// The guarded UPDATE only fires on a "new" row; when the submission is
    /// already read the current row is returned unchanged, so repeat calls
    /// are no-ops. Returns None if the submission does not exist.
    pub async fn mark_read(&self, id: Uuid) -> Result<Option<ContactSubmission>, sqlx::Error> {
        let timer = QueryTimer::new("mark_submission_read");
        let updated = sqlx::query_as::<_, ContactSubmissionEntity>(&format!(
            r#"
            UPDATE contact_submissions
            SET status = 'read'
            WHERE id = $1 AND status = 'new'
            RETURNING {}
            "#,
            SUBMISSION_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();

        if let Some(entity) = updated? {
            return Ok(Some(to_model(entity)));
        }

        let existing = sqlx::query_as::<_, ContactSubmissionEntity>(&format!(
            "SELECT {} FROM contact_submissions WHERE id = $1",
            SUBMISSION_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(existing.map(to_model))
    }
}

fn to_model(e: ContactSubmissionEntity) -> ContactSubmission {
    let status = match e.status.as_str() {
        "read" => SubmissionStatus::Read,
        _ => SubmissionStatus::New,
    };

    ContactSubmission {
        id: e.id,
        name: e.name,
        email: e.email,
        phone: e.phone,
        message: e.message,
        status,
        created_at: e.created_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_to_model_status_mapping() {
        let entity = ContactSubmissionEntity {
            id: Uuid::new_v4(),
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            phone: None,
            message: "I would like a quote".to_string(),
            status: "read".to_string(),
            created_at: Utc::now(),
        };
        assert_eq!(to_model(entity).status, SubmissionStatus::Read);
    }
}
