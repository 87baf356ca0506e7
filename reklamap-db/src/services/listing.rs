//! Complaint listing query builder
//!
//! Every complaint list (admin views, staff assigned/resolved, a
//! complainant's own complaints) is one SQL statement built here, so a
//! listing is a single consistent snapshot. The view predicates agree with
//! [`reklamap_core::classify`].

use reklamap_core::ledger::QueryOptions;
use reklamap_core::types::{ActionKind, ComplaintStage, ComplaintStatus, ComplaintSummary};
use reklamap_core::{Bucket, ComplaintView};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::entities::ComplaintSummaryEntity;
use crate::error::DbResult;

const SUMMARY_COLUMNS: &str = "SELECT c.complaint_id, c.type_of_complaint, c.date_received, \
     c.status, c.complaint_stage, c.priority_level, c.complainant_name, a.area_name, c.address, \
     la.type_of_action AS latest_action, la.assigned_to AS latest_assigned_to, \
     la.action_datetime AS latest_action_datetime, \
     (SELECT json_extract(h.details, '$.deadline') FROM complaint_history h \
       WHERE h.complaint_id = c.complaint_id AND h.type_of_action = 'Inspection' \
       ORDER BY h.action_datetime DESC, h.history_id DESC LIMIT 1) AS deadline, \
     (SELECT json_extract(h.details, '$.meeting_date') FROM complaint_history h \
       WHERE h.complaint_id = c.complaint_id AND h.type_of_action = 'Invitation' \
       ORDER BY h.action_datetime DESC, h.history_id DESC LIMIT 1) AS meeting_date, \
     (SELECT json_extract(h.details, '$.meeting_time') FROM complaint_history h \
       WHERE h.complaint_id = c.complaint_id AND h.type_of_action = 'Invitation' \
       ORDER BY h.action_datetime DESC, h.history_id DESC LIMIT 1) AS meeting_time \
     FROM complaints c \
     LEFT JOIN areas a ON a.area_id = c.area_id \
     LEFT JOIN complaint_history la ON la.history_id = ( \
       SELECT h.history_id FROM complaint_history h WHERE h.complaint_id = c.complaint_id \
       ORDER BY h.action_datetime DESC, h.history_id DESC LIMIT 1)";

const COUNT_COLUMNS: &str = "SELECT COUNT(*) FROM complaints c";

/// A complaint listing: view filter, optional owner and paging
#[derive(Debug, Clone)]
pub struct ComplaintQuery {
    view: ComplaintView,
    user_id: Option<String>,
    options: QueryOptions,
}

impl ComplaintQuery {
    pub fn new(view: ComplaintView) -> Self {
        Self {
            view,
            user_id: None,
            options: QueryOptions {
                order_desc: true,
                ..Default::default()
            },
        }
    }

    /// Only complaints filed under registrations of this user
    pub fn for_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_options(mut self, options: QueryOptions) -> Self {
        self.options = options;
        self
    }

    fn push_has_action(qb: &mut QueryBuilder<'_, Sqlite>, kind: ActionKind) {
        qb.push(
            "EXISTS (SELECT 1 FROM complaint_history h \
             WHERE h.complaint_id = c.complaint_id AND h.type_of_action = ",
        )
        .push_bind(kind.as_str())
        .push(")");
    }

    /// Any history row other than `Submitted`
    fn push_actioned(qb: &mut QueryBuilder<'_, Sqlite>) {
        qb.push(
            "EXISTS (SELECT 1 FROM complaint_history h \
             WHERE h.complaint_id = c.complaint_id AND h.type_of_action <> ",
        )
        .push_bind(ActionKind::Submitted.as_str())
        .push(")");
    }

    /// Inspection and Assessment rows without Invitation or Mediation rows
    fn push_inferred_unresolved(qb: &mut QueryBuilder<'_, Sqlite>) {
        qb.push("(");
        Self::push_has_action(qb, ActionKind::Inspection);
        qb.push(" AND ");
        Self::push_has_action(qb, ActionKind::Assessment);
        qb.push(" AND NOT ");
        Self::push_has_action(qb, ActionKind::Invitation);
        qb.push(" AND NOT ");
        Self::push_has_action(qb, ActionKind::Mediation);
        qb.push(")");
    }

    fn push_assigned(qb: &mut QueryBuilder<'_, Sqlite>, name: &str) {
        qb.push(
            "EXISTS (SELECT 1 FROM complaint_history h \
             WHERE h.complaint_id = c.complaint_id AND h.assigned_to = ",
        )
        .push_bind(name.to_string())
        .push(")");
    }

    fn push_stage_is(qb: &mut QueryBuilder<'_, Sqlite>, stage: ComplaintStage) {
        qb.push("c.complaint_stage = ").push_bind(stage.as_str());
    }

    fn push_stage_is_not(qb: &mut QueryBuilder<'_, Sqlite>, stage: ComplaintStage) {
        qb.push("c.complaint_stage <> ").push_bind(stage.as_str());
    }

    fn push_valid(qb: &mut QueryBuilder<'_, Sqlite>) {
        qb.push(" AND c.status = ").push_bind(ComplaintStatus::Valid.as_str());
    }

    fn push_filters(&self, qb: &mut QueryBuilder<'_, Sqlite>) {
        if self.user_id.is_some() {
            qb.push(" JOIN registration r ON r.registration_id = c.registration_id");
        }
        qb.push(" WHERE 1 = 1");
        if let Some(user_id) = &self.user_id {
            qb.push(" AND r.user_id = ").push_bind(user_id.clone());
        }

        match &self.view {
            ComplaintView::All => {}
            ComplaintView::Bucket(Bucket::Invalid) => {
                qb.push(" AND c.status = ").push_bind(ComplaintStatus::Invalid.as_str());
            }
            ComplaintView::Bucket(Bucket::Resolved) => {
                Self::push_valid(qb);
                qb.push(" AND ");
                Self::push_stage_is(qb, ComplaintStage::Resolved);
            }
            ComplaintView::Bucket(Bucket::Unresolved) => {
                Self::push_valid(qb);
                qb.push(" AND ");
                Self::push_stage_is_not(qb, ComplaintStage::Resolved);
                qb.push(" AND (");
                Self::push_stage_is(qb, ComplaintStage::Unresolved);
                qb.push(" OR ");
                Self::push_inferred_unresolved(qb);
                qb.push(")");
            }
            ComplaintView::Bucket(Bucket::Pending) => {
                Self::push_valid(qb);
                qb.push(" AND ");
                Self::push_stage_is_not(qb, ComplaintStage::Resolved);
                qb.push(" AND ");
                Self::push_stage_is_not(qb, ComplaintStage::Unresolved);
                qb.push(" AND NOT ");
                Self::push_actioned(qb);
            }
            ComplaintView::Bucket(Bucket::Ongoing) => {
                Self::push_valid(qb);
                for stage in [
                    ComplaintStage::Resolved,
                    ComplaintStage::Unresolved,
                    ComplaintStage::OutOfJurisdiction,
                ] {
                    qb.push(" AND ");
                    Self::push_stage_is_not(qb, stage);
                }
                qb.push(" AND ");
                Self::push_actioned(qb);
                qb.push(" AND NOT ");
                Self::push_inferred_unresolved(qb);
            }
            ComplaintView::AssignedTo(name) => {
                Self::push_valid(qb);
                qb.push(" AND ");
                Self::push_assigned(qb, name);
                qb.push(" AND ");
                Self::push_stage_is_not(qb, ComplaintStage::Resolved);
            }
            ComplaintView::ResolvedBy(name) => {
                Self::push_valid(qb);
                qb.push(" AND ");
                Self::push_assigned(qb, name);
                qb.push(" AND ");
                Self::push_stage_is(qb, ComplaintStage::Resolved);
            }
        }
    }

    /// Build the listing statement
    pub fn build(&self) -> QueryBuilder<'static, Sqlite> {
        let mut qb = QueryBuilder::new(SUMMARY_COLUMNS);
        self.push_filters(&mut qb);

        let direction = if self.options.order_desc { "DESC" } else { "ASC" };
        qb.push(format!(
            " ORDER BY c.date_received {dir}, c.complaint_id {dir}",
            dir = direction
        ));

        if self.options.limit.is_some() || self.options.offset.is_some() {
            // LIMIT -1 is unbounded in SQLite
            let limit = self.options.limit.map(i64::from).unwrap_or(-1);
            qb.push(" LIMIT ").push_bind(limit);
            qb.push(" OFFSET ")
                .push_bind(i64::from(self.options.offset.unwrap_or(0)));
        }
        qb
    }

    /// Build the matching COUNT statement
    pub fn build_count(&self) -> QueryBuilder<'static, Sqlite> {
        let mut qb = QueryBuilder::new(COUNT_COLUMNS);
        self.push_filters(&mut qb);
        qb
    }

    pub async fn fetch(&self, pool: &SqlitePool) -> DbResult<Vec<ComplaintSummary>> {
        let rows = self
            .build()
            .build_query_as::<ComplaintSummaryEntity>()
            .fetch_all(pool)
            .await?;
        rows.iter().map(ComplaintSummaryEntity::to_record).collect()
    }

    pub async fn count(&self, pool: &SqlitePool) -> DbResult<u64> {
        let (count,): (i64,) = self.build_count().build_query_as().fetch_one(pool).await?;
        Ok(count.max(0) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_excludes_submitted_rows() {
        let qb = ComplaintQuery::new(ComplaintView::Bucket(Bucket::Pending)).build();
        let sql = qb.sql();
        assert!(sql.contains("NOT EXISTS (SELECT 1 FROM complaint_history h"));
        assert!(sql.contains("h.type_of_action <> ?"));
    }

    #[test]
    fn test_user_filter_joins_registration() {
        let qb = ComplaintQuery::new(ComplaintView::All)
            .for_user("user-1")
            .build_count();
        let sql = qb.sql();
        assert!(sql.starts_with("SELECT COUNT(*) FROM complaints c JOIN registration r"));
        assert!(sql.contains("r.user_id = ?"));
    }

    #[test]
    fn test_paging_and_order() {
        let qb = ComplaintQuery::new(ComplaintView::All)
            .with_options(QueryOptions::page(10, 20))
            .build();
        let sql = qb.sql();
        assert!(sql.ends_with("ORDER BY c.date_received DESC, c.complaint_id DESC LIMIT ? OFFSET ?"));
    }

    #[test]
    fn test_unpaged_listing_has_no_limit() {
        let qb = ComplaintQuery::new(ComplaintView::AssignedTo("Inspector Lim".into())).build();
        let sql = qb.sql();
        assert!(!sql.contains("LIMIT ?"));
        assert!(sql.contains("h.assigned_to = ?"));
    }
}
