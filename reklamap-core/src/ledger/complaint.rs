//! Complaint Ledger - typed complaint submission
//!
//! A submission creates the complaint row, its questionnaire row and the
//! initial `Submitted` history entry together, or nothing at all.

use async_trait::async_trait;

use super::{Ledger, LedgerResult, QueryOptions};
use crate::types::{
    ComplaintRecord, ComplaintSubmission, ComplaintSummary, DetailRecord, SubmissionReceipt,
};

#[async_trait]
pub trait ComplaintLedger: Ledger {
    /// Validate and file a complaint
    async fn submit_complaint(
        &self,
        submission: ComplaintSubmission,
    ) -> LedgerResult<SubmissionReceipt>;

    async fn get_complaint(&self, complaint_id: i64) -> LedgerResult<Option<ComplaintRecord>>;

    /// Questionnaire answers of a complaint
    async fn get_detail(&self, complaint_id: i64) -> LedgerResult<Option<DetailRecord>>;

    /// Complaints filed under any registration owned by `user_id`
    async fn list_for_user(
        &self,
        user_id: &str,
        options: QueryOptions,
    ) -> LedgerResult<Vec<ComplaintSummary>>;
}
