use serde::{Deserialize, Serialize};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;

use crate::models::Submission;

/// Errors that can occur when interacting with PostgreSQL
#[derive(Debug, Error)]
pub enum PostgresError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),
}

/// Row id and timestamp of a stored submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub id: i64,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}

/// Number of submissions recorded for one persona
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaCount {
    #[serde(rename = "personaName")]
    pub persona_name: String,
    pub submissions: i64,
    #[serde(rename = "lastSubmittedAt")]
    pub last_submitted_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// PostgreSQL sink for quiz submissions
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self, PostgresError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
    ) -> Result<Self, PostgresError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
            Duration::from_secs(acquire_timeout_secs.unwrap_or(5)),
        )
        .await
    }

    /// Store a quiz submission
    pub async fn insert_submission(
        &self,
        submission: &Submission,
    ) -> Result<SubmissionReceipt, PostgresError> {
        let query = r#"
            INSERT INTO quiz_submissions
                (reference, persona_name, state, full_name, email, affiliation,
                 winning_category, top_two_colors)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, submitted_at
        "#;

        let row = sqlx::query(query)
            .bind(submission.reference)
            .bind(&submission.persona_name)
            .bind(&submission.state)
            .bind(&submission.full_name)
            .bind(&submission.email)
            .bind(&submission.affiliation)
            .bind(&submission.winning_category)
            .bind(&submission.top_two_colors)
            .fetch_one(&self.pool)
            .await?;

        let receipt = SubmissionReceipt {
            id: row.get("id"),
            submitted_at: row.get("submitted_at"),
        };

        tracing::debug!(
            "Stored submission {} ({}) for persona {}",
            receipt.id,
            submission.reference,
            submission.persona_name
        );

        Ok(receipt)
    }

    /// Submission counts grouped by persona name, most frequent first
    pub async fn count_by_persona(&self) -> Result<Vec<PersonaCount>, PostgresError> {
        let query = r#"
            SELECT
                persona_name,
                COUNT(*) AS submissions,
                MAX(submitted_at) AS last_submitted_at
            FROM quiz_submissions
            GROUP BY persona_name
            ORDER BY submissions DESC, persona_name ASC
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;

        let counts = rows
            .iter()
            .map(|row| PersonaCount {
                persona_name: row.get("persona_name"),
                submissions: row.get("submissions"),
                last_submitted_at: row.get("last_submitted_at"),
            })
            .collect();

        Ok(counts)
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, PostgresError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persona_count_serialization() {
        let count = PersonaCount {
            persona_name: "Champion".to_string(),
            submissions: 3,
            last_submitted_at: None,
        };

        let json = serde_json::to_value(&count).unwrap();
        assert_eq!(json["personaName"], "Champion");
        assert_eq!(json["submissions"], 3);
    }
}
