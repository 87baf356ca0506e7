//! Timeline Ledger - action history, stage and listings

use async_trait::async_trait;

use super::{Ledger, LedgerResult, QueryOptions};
use crate::lifecycle::{ComplaintView, StageSnapshot};
use crate::types::{
    project_timeline, ActionReceipt, ComplaintSummary, HistoryEntry, NewAction, Role,
    TimelineEntry,
};

#[async_trait]
pub trait TimelineLedger: Ledger {
    /// Append an action and apply its stage transition atomically
    async fn record_action(
        &self,
        complaint_id: i64,
        action: NewAction,
    ) -> LedgerResult<ActionReceipt>;

    /// Full history, oldest first
    async fn history(&self, complaint_id: i64) -> LedgerResult<Vec<HistoryEntry>>;

    /// History projected for a role
    async fn timeline(&self, complaint_id: i64, role: Role) -> LedgerResult<Vec<TimelineEntry>> {
        let history = self.history(complaint_id).await?;
        Ok(project_timeline(&history, role))
    }

    /// Stored stage, inferred bucket and latest action
    async fn stage(&self, complaint_id: i64) -> LedgerResult<StageSnapshot>;

    /// Complaints matching a view, each with its latest action and deadlines
    async fn list_complaints(
        &self,
        view: &ComplaintView,
        options: QueryOptions,
    ) -> LedgerResult<Vec<ComplaintSummary>>;

    async fn count_complaints(&self, view: &ComplaintView) -> LedgerResult<u64>;

    /// Whether any history row of the complaint is assigned to `name`
    async fn is_assigned(&self, complaint_id: i64, name: &str) -> LedgerResult<bool>;
}
