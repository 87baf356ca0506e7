//! History entity

use reklamap_core::types::{ActionKind, HistoryEntry};
use sqlx::FromRow;

use super::parse_timestamp;
use crate::error::{DbError, DbResult};

#[derive(Debug, Clone, FromRow)]
pub struct HistoryEntity {
    pub history_id: i64,
    pub complaint_id: i64,
    pub type_of_action: String,
    pub assigned_to: Option<String>,
    pub action_datetime: String,
    pub details: String,
}

impl HistoryEntity {
    pub fn to_record(&self) -> DbResult<HistoryEntry> {
        let action = ActionKind::parse(&self.type_of_action)
            .map_err(|e| DbError::InvalidRow(e.to_string()))?;
        let details = if self.details.is_empty() {
            serde_json::Value::Object(Default::default())
        } else {
            serde_json::from_str(&self.details)?
        };

        Ok(HistoryEntry {
            history_id: self.history_id,
            complaint_id: self.complaint_id,
            action,
            assigned_to: self.assigned_to.clone(),
            action_datetime: parse_timestamp(&self.action_datetime)?,
            details,
        })
    }
}
