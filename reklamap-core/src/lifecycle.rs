//! Complaint lifecycle rules
//!
//! Two pure pieces live here:
//! - [`next_stage`], applied in the same transaction as each history insert
//! - [`classify`], the listing bucket a complaint falls into given its
//!   status, stored stage and the action types in its history
//!
//! `classify` mirrors the SQL predicates used by the listing query builder;
//! the two must agree.

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::types::{ActionKind, ComplaintStage, ComplaintStatus, LatestAction};

/// Result of applying one action to a complaint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub stage: ComplaintStage,
    /// Set when the action also changes the complaint's status
    pub status: Option<ComplaintStatus>,
}

/// Stage after recording `action` on a complaint currently at `current`.
///
/// There are no guards: any action is accepted from any stage, and only
/// `Resolved`, `Unresolved` and `Out of Jurisdiction` move a complaint
/// somewhere other than `Ongoing`.
pub fn next_stage(current: ComplaintStage, action: ActionKind) -> Transition {
    match action {
        ActionKind::Submitted => Transition {
            stage: current,
            status: None,
        },
        ActionKind::OutOfJurisdiction => Transition {
            stage: ComplaintStage::OutOfJurisdiction,
            status: Some(ComplaintStatus::Invalid),
        },
        ActionKind::Resolved => Transition {
            stage: ComplaintStage::Resolved,
            status: None,
        },
        ActionKind::Unresolved => Transition {
            stage: ComplaintStage::Unresolved,
            status: None,
        },
        _ => Transition {
            stage: ComplaintStage::Ongoing,
            status: None,
        },
    }
}

/// Listing bucket of a complaint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Pending,
    Ongoing,
    Resolved,
    Unresolved,
    Invalid,
}

impl Bucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Ongoing => "ongoing",
            Self::Resolved => "resolved",
            Self::Unresolved => "unresolved",
            Self::Invalid => "invalid",
        }
    }
}

/// Filter used by every complaint listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComplaintView {
    All,
    Bucket(Bucket),
    /// Valid, not resolved, with a history row assigned to the name
    AssignedTo(String),
    /// Valid, resolved, with a history row assigned to the name
    ResolvedBy(String),
}

impl ComplaintView {
    /// Parse the admin `view` query value
    pub fn parse(s: &str) -> LedgerResult<Self> {
        match s.to_lowercase().as_str() {
            "" | "all" => Ok(Self::All),
            "pending" => Ok(Self::Bucket(Bucket::Pending)),
            "ongoing" => Ok(Self::Bucket(Bucket::Ongoing)),
            "resolved" => Ok(Self::Bucket(Bucket::Resolved)),
            "unresolved" => Ok(Self::Bucket(Bucket::Unresolved)),
            "invalid" => Ok(Self::Bucket(Bucket::Invalid)),
            other => Err(LedgerError::validation(format!(
                "Invalid view: '{}'. Expected one of: all, pending, ongoing, resolved, unresolved, invalid",
                other
            ))),
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::All => "all".to_string(),
            Self::Bucket(b) => b.as_str().to_string(),
            Self::AssignedTo(name) => format!("assigned_to:{}", name),
            Self::ResolvedBy(name) => format!("resolved_by:{}", name),
        }
    }
}

/// True when the history shows an inspection and an assessment but the
/// parties were never invited or mediated
pub fn inferred_unresolved(actions: &[ActionKind]) -> bool {
    let has = |k: ActionKind| actions.contains(&k);
    has(ActionKind::Inspection)
        && has(ActionKind::Assessment)
        && !has(ActionKind::Invitation)
        && !has(ActionKind::Mediation)
}

/// Bucket for a complaint. A `Submitted` row does not count as an action.
pub fn classify(
    status: ComplaintStatus,
    stage: ComplaintStage,
    actions: &[ActionKind],
) -> Option<Bucket> {
    if status == ComplaintStatus::Invalid {
        return Some(Bucket::Invalid);
    }
    if stage == ComplaintStage::Resolved {
        return Some(Bucket::Resolved);
    }
    if stage == ComplaintStage::Unresolved || inferred_unresolved(actions) {
        return Some(Bucket::Unresolved);
    }
    if actions.iter().all(|a| *a == ActionKind::Submitted) {
        return Some(Bucket::Pending);
    }
    if stage == ComplaintStage::OutOfJurisdiction {
        return None;
    }
    Some(Bucket::Ongoing)
}

/// Stage lookup result for one complaint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageSnapshot {
    pub complaint_id: i64,
    pub status: ComplaintStatus,
    pub stage: ComplaintStage,
    pub bucket: Option<Bucket>,
    pub latest_action: Option<LatestAction>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_jurisdiction_invalidates() {
        let t = next_stage(ComplaintStage::Ongoing, ActionKind::OutOfJurisdiction);
        assert_eq!(t.stage, ComplaintStage::OutOfJurisdiction);
        assert_eq!(t.status, Some(ComplaintStatus::Invalid));
    }

    #[test]
    fn test_work_actions_move_to_ongoing() {
        for action in [
            ActionKind::Inspection,
            ActionKind::InspectionDone,
            ActionKind::Invitation,
            ActionKind::SentInvitation,
            ActionKind::Mediation,
            ActionKind::Assessment,
            ActionKind::TaskCompleted,
        ] {
            let t = next_stage(ComplaintStage::Pending, action);
            assert_eq!(t.stage, ComplaintStage::Ongoing, "{}", action);
            assert_eq!(t.status, None);
        }
    }

    #[test]
    fn test_no_guards_from_resolved() {
        let t = next_stage(ComplaintStage::Resolved, ActionKind::Inspection);
        assert_eq!(t.stage, ComplaintStage::Ongoing);
    }

    #[test]
    fn test_submitted_keeps_stage() {
        let t = next_stage(ComplaintStage::Pending, ActionKind::Submitted);
        assert_eq!(t.stage, ComplaintStage::Pending);
    }

    #[test]
    fn test_closing_actions() {
        assert_eq!(
            next_stage(ComplaintStage::Ongoing, ActionKind::Resolved).stage,
            ComplaintStage::Resolved
        );
        assert_eq!(
            next_stage(ComplaintStage::Ongoing, ActionKind::Unresolved).stage,
            ComplaintStage::Unresolved
        );
    }

    #[test]
    fn test_classify_pending_ignores_submitted() {
        let bucket = classify(
            ComplaintStatus::Valid,
            ComplaintStage::Pending,
            &[ActionKind::Submitted],
        );
        assert_eq!(bucket, Some(Bucket::Pending));
    }

    #[test]
    fn test_classify_inferred_unresolved() {
        let actions = [
            ActionKind::Submitted,
            ActionKind::Inspection,
            ActionKind::Assessment,
        ];
        assert_eq!(
            classify(ComplaintStatus::Valid, ComplaintStage::Ongoing, &actions),
            Some(Bucket::Unresolved)
        );

        let mediated = [
            ActionKind::Submitted,
            ActionKind::Inspection,
            ActionKind::Mediation,
            ActionKind::Assessment,
        ];
        assert_eq!(
            classify(ComplaintStatus::Valid, ComplaintStage::Ongoing, &mediated),
            Some(Bucket::Ongoing)
        );
    }

    #[test]
    fn test_classify_invalid_wins() {
        let actions = [ActionKind::Submitted, ActionKind::OutOfJurisdiction];
        assert_eq!(
            classify(
                ComplaintStatus::Invalid,
                ComplaintStage::OutOfJurisdiction,
                &actions
            ),
            Some(Bucket::Invalid)
        );
    }

    #[test]
    fn test_view_parse() {
        assert_eq!(ComplaintView::parse("").unwrap(), ComplaintView::All);
        assert_eq!(
            ComplaintView::parse("Unresolved").unwrap(),
            ComplaintView::Bucket(Bucket::Unresolved)
        );
        assert!(ComplaintView::parse("archived").is_err());
    }
}
