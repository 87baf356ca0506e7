//! Timeline Ledger Service Implementation
//!
//! Appends actions to `complaint_history` and keeps `complaints.complaint_stage`
//! in step with them. The stage read, history insert and stage update of one
//! action share a transaction.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use reklamap_core::error::LedgerError;
use reklamap_core::ledger::{Ledger, LedgerResult, QueryOptions, TimelineLedger};
use reklamap_core::types::{
    ActionDetails, ActionKind, ActionReceipt, ComplaintStage, ComplaintStatus, ComplaintSummary,
    HistoryEntry, LatestAction, NewAction, NoteDetails,
};
use reklamap_core::{classify, next_stage, ComplaintView, StageSnapshot};
use tracing::{debug, info};

use crate::error::DbError;
use crate::repos::{NewHistoryRow, ReklamapDatabase};
use crate::services::listing::ComplaintQuery;

/// Timeline Ledger Service
pub struct TimelineService {
    db: Arc<ReklamapDatabase>,
}

impl TimelineService {
    pub fn new(db: Arc<ReklamapDatabase>) -> Self {
        Self { db }
    }

    /// Mark a complaint resolved
    pub async fn resolve(
        &self,
        complaint_id: i64,
        notes: Option<String>,
    ) -> LedgerResult<ActionReceipt> {
        let details = ActionDetails::Resolved(NoteDetails {
            notes,
            ..Default::default()
        });
        self.record_action(complaint_id, NewAction::new(details)).await
    }

    /// Mark a complaint unresolved
    pub async fn mark_unresolved(
        &self,
        complaint_id: i64,
        notes: Option<String>,
    ) -> LedgerResult<ActionReceipt> {
        let details = ActionDetails::Unresolved(NoteDetails {
            notes,
            ..Default::default()
        });
        self.record_action(complaint_id, NewAction::new(details)).await
    }
}

fn storage(e: impl std::fmt::Display) -> LedgerError {
    LedgerError::Storage(e.to_string())
}

#[async_trait]
impl Ledger for TimelineService {
    fn name(&self) -> &'static str {
        "timeline"
    }

    async fn health_check(&self) -> LedgerResult<bool> {
        Ok(self.db.health_check().await?)
    }
}

#[async_trait]
impl TimelineLedger for TimelineService {
    async fn record_action(
        &self,
        complaint_id: i64,
        action: NewAction,
    ) -> LedgerResult<ActionReceipt> {
        let kind = action.kind();
        if kind == ActionKind::Submitted {
            return Err(LedgerError::validation(
                "Submitted entries are only written when a complaint is filed",
            ));
        }

        let assigned_to = action
            .assigned_to
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty());

        let mut tx = self.db.pool().begin().await.map_err(DbError::from)?;

        let (stage, status) = self
            .db
            .complaints
            .claim_stage(&mut *tx, complaint_id)
            .await?
            .ok_or_else(|| LedgerError::NotFound(format!("Complaint {} not found", complaint_id)))?;
        let current = ComplaintStage::parse(&stage).map_err(storage)?;
        let current_status = ComplaintStatus::parse(&status).map_err(storage)?;

        // Taken under the write lock, so timestamps follow commit order.
        let now = Utc::now();
        let details = action.details.with_default_deadline(now).to_json()?;
        let transition = next_stage(current, kind);

        let history_id = self
            .db
            .history
            .insert(
                &mut *tx,
                &NewHistoryRow {
                    complaint_id,
                    action: kind,
                    assigned_to,
                    action_datetime: now,
                    details: &details,
                },
            )
            .await?;
        self.db
            .complaints
            .update_stage(&mut *tx, complaint_id, transition.stage, transition.status)
            .await?;

        tx.commit().await.map_err(DbError::from)?;

        let status = transition.status.unwrap_or(current_status);
        info!(
            operation = "record_action",
            complaint_id,
            history_id,
            action = kind.as_str(),
            assigned_to = assigned_to.unwrap_or(""),
            stage = transition.stage.as_str(),
            "Action recorded"
        );

        Ok(ActionReceipt {
            complaint_id,
            history_id,
            new_stage: transition.stage,
            status,
            action_datetime: now,
        })
    }

    async fn history(&self, complaint_id: i64) -> LedgerResult<Vec<HistoryEntry>> {
        if self.db.complaints.get(complaint_id).await?.is_none() {
            return Err(LedgerError::NotFound(format!(
                "Complaint {} not found",
                complaint_id
            )));
        }

        self.db
            .history
            .list(complaint_id)
            .await?
            .iter()
            .map(|e| e.to_record().map_err(Into::into))
            .collect()
    }

    async fn stage(&self, complaint_id: i64) -> LedgerResult<StageSnapshot> {
        let complaint = self
            .db
            .complaints
            .get(complaint_id)
            .await?
            .ok_or_else(|| LedgerError::NotFound(format!("Complaint {} not found", complaint_id)))?
            .to_record()?;

        let history = self.history(complaint_id).await?;
        let actions: Vec<ActionKind> = history.iter().map(|h| h.action).collect();
        let bucket = classify(complaint.status, complaint.stage, &actions);
        let latest_action = history.last().map(|h| LatestAction {
            type_of_action: h.action.as_str().to_string(),
            assigned_to: h.assigned_to.clone(),
            action_datetime: h.action_datetime,
        });

        debug!(
            operation = "stage_lookup",
            complaint_id,
            stage = complaint.stage.as_str(),
            "Stage computed"
        );

        Ok(StageSnapshot {
            complaint_id,
            status: complaint.status,
            stage: complaint.stage,
            bucket,
            latest_action,
        })
    }

    async fn list_complaints(
        &self,
        view: &ComplaintView,
        options: QueryOptions,
    ) -> LedgerResult<Vec<ComplaintSummary>> {
        let rows = ComplaintQuery::new(view.clone())
            .with_options(options)
            .fetch(self.db.pool())
            .await?;
        debug!(
            operation = "list_complaints",
            view = %view.label(),
            count = rows.len(),
            "Complaints listed"
        );
        Ok(rows)
    }

    async fn count_complaints(&self, view: &ComplaintView) -> LedgerResult<u64> {
        Ok(ComplaintQuery::new(view.clone())
            .count(self.db.pool())
            .await?)
    }

    async fn is_assigned(&self, complaint_id: i64, name: &str) -> LedgerResult<bool> {
        Ok(self.db.history.is_assigned(complaint_id, name.trim()).await?)
    }
}
