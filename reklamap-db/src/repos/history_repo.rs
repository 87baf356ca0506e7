//! Complaint history repository (append-only)

use chrono::{DateTime, Utc};
use reklamap_core::types::ActionKind;
use sqlx::{SqliteExecutor, SqlitePool};

use crate::entities::{format_timestamp, HistoryEntity};
use crate::error::DbResult;

/// Column values for a new history row
#[derive(Debug, Clone)]
pub struct NewHistoryRow<'a> {
    pub complaint_id: i64,
    pub action: ActionKind,
    pub assigned_to: Option<&'a str>,
    pub action_datetime: DateTime<Utc>,
    pub details: &'a serde_json::Value,
}

pub struct HistoryRepo {
    pool: SqlitePool,
}

impl HistoryRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Append a row and return its `history_id`
    pub async fn insert<'e>(&self, conn: impl SqliteExecutor<'e>, row: &NewHistoryRow<'_>) -> DbResult<i64> {
        let result = sqlx::query(
            "INSERT INTO complaint_history (complaint_id, type_of_action, assigned_to, action_datetime, details) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(row.complaint_id)
        .bind(row.action.as_str())
        .bind(row.assigned_to)
        .bind(format_timestamp(row.action_datetime))
        .bind(serde_json::to_string(row.details)?)
        .execute(conn)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// All rows of a complaint, oldest first
    pub async fn list(&self, complaint_id: i64) -> DbResult<Vec<HistoryEntity>> {
        Ok(sqlx::query_as::<_, HistoryEntity>(
            "SELECT history_id, complaint_id, type_of_action, assigned_to, action_datetime, details \
             FROM complaint_history WHERE complaint_id = ? \
             ORDER BY action_datetime ASC, history_id ASC",
        )
        .bind(complaint_id)
        .fetch_all(&self.pool)
        .await?)
    }

    /// Row with the greatest timestamp; `history_id` breaks ties
    pub async fn latest(&self, complaint_id: i64) -> DbResult<Option<HistoryEntity>> {
        Ok(sqlx::query_as::<_, HistoryEntity>(
            "SELECT history_id, complaint_id, type_of_action, assigned_to, action_datetime, details \
             FROM complaint_history WHERE complaint_id = ? \
             ORDER BY action_datetime DESC, history_id DESC LIMIT 1",
        )
        .bind(complaint_id)
        .fetch_optional(&self.pool)
        .await?)
    }

    pub async fn count(&self, complaint_id: i64) -> DbResult<i64> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM complaint_history WHERE complaint_id = ?")
                .bind(complaint_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }

    /// Whether any row of the complaint names `assignee`
    pub async fn is_assigned(&self, complaint_id: i64, assignee: &str) -> DbResult<bool> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM complaint_history WHERE complaint_id = ? AND assigned_to = ?)",
        )
        .bind(complaint_id)
        .bind(assignee)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }
}
