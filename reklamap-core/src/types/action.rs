//! Timeline action vocabulary
//!
//! Every history row carries one [`ActionKind`] and a details object whose
//! shape depends on that kind. Details are decoded into [`ActionDetails`]
//! before anything is stored, so unknown fields or mistyped values are
//! rejected at the boundary.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::complaint::{ComplaintStage, ComplaintStatus};
use crate::error::{LedgerError, LedgerResult};

/// Closed set of history action types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Submitted,
    Inspection,
    #[serde(rename = "Inspection done")]
    InspectionDone,
    Invitation,
    #[serde(rename = "Sent Invitation")]
    SentInvitation,
    Mediation,
    Assessment,
    #[serde(rename = "Task Completed")]
    TaskCompleted,
    Resolved,
    Unresolved,
    #[serde(rename = "Out of Jurisdiction")]
    OutOfJurisdiction,
}

impl ActionKind {
    pub const ALL: [ActionKind; 11] = [
        Self::Submitted,
        Self::Inspection,
        Self::InspectionDone,
        Self::Invitation,
        Self::SentInvitation,
        Self::Mediation,
        Self::Assessment,
        Self::TaskCompleted,
        Self::Resolved,
        Self::Unresolved,
        Self::OutOfJurisdiction,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Submitted => "Submitted",
            Self::Inspection => "Inspection",
            Self::InspectionDone => "Inspection done",
            Self::Invitation => "Invitation",
            Self::SentInvitation => "Sent Invitation",
            Self::Mediation => "Mediation",
            Self::Assessment => "Assessment",
            Self::TaskCompleted => "Task Completed",
            Self::Resolved => "Resolved",
            Self::Unresolved => "Unresolved",
            Self::OutOfJurisdiction => "Out of Jurisdiction",
        }
    }

    pub fn parse(s: &str) -> LedgerResult<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| LedgerError::validation(format!("Unknown action type: '{}'", s)))
    }

    /// Days added to "now" when the caller leaves `deadline` empty
    pub fn default_deadline_days(&self) -> Option<i64> {
        match self {
            Self::Inspection => Some(3),
            Self::Invitation | Self::Mediation | Self::Assessment => Some(1),
            _ => None,
        }
    }

    /// Actions staff record when finishing a task assigned to them
    pub fn is_completion(&self) -> bool {
        matches!(
            self,
            Self::InspectionDone | Self::SentInvitation | Self::TaskCompleted
        )
    }

    /// Actions that hand work to a named assignee
    pub fn is_assignment(&self) -> bool {
        matches!(self, Self::Inspection | Self::Invitation)
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubmittedDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InspectionDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inspector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InvitationDetails {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub to: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agenda: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MediationDetails {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub advisors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agenda: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assigned_personnel: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parties_involved: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssessmentDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JurisdictionDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Details for completion and closing actions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoteDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub findings: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Typed details, one variant per action kind.
///
/// Serializes to the bare details object stored in `complaint_history.details`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ActionDetails {
    Submitted(SubmittedDetails),
    Inspection(InspectionDetails),
    InspectionDone(NoteDetails),
    Invitation(InvitationDetails),
    SentInvitation(NoteDetails),
    Mediation(MediationDetails),
    Assessment(AssessmentDetails),
    TaskCompleted(NoteDetails),
    Resolved(NoteDetails),
    Unresolved(NoteDetails),
    OutOfJurisdiction(JurisdictionDetails),
}

fn decode<T: DeserializeOwned>(kind: ActionKind, value: serde_json::Value) -> LedgerResult<T> {
    serde_json::from_value(value).map_err(|e| {
        LedgerError::validation(format!("Invalid details for '{}' action: {}", kind, e))
    })
}

impl ActionDetails {
    /// Decode an untyped details payload for the given action kind
    pub fn from_parts(kind: ActionKind, value: serde_json::Value) -> LedgerResult<Self> {
        let value = match value {
            serde_json::Value::Null => serde_json::Value::Object(Default::default()),
            serde_json::Value::Object(_) => value,
            _ => {
                return Err(LedgerError::validation(format!(
                    "Details for '{}' action must be a JSON object",
                    kind
                )))
            }
        };

        Ok(match kind {
            ActionKind::Submitted => Self::Submitted(decode(kind, value)?),
            ActionKind::Inspection => Self::Inspection(decode(kind, value)?),
            ActionKind::InspectionDone => Self::InspectionDone(decode(kind, value)?),
            ActionKind::Invitation => Self::Invitation(decode(kind, value)?),
            ActionKind::SentInvitation => Self::SentInvitation(decode(kind, value)?),
            ActionKind::Mediation => Self::Mediation(decode(kind, value)?),
            ActionKind::Assessment => Self::Assessment(decode(kind, value)?),
            ActionKind::TaskCompleted => Self::TaskCompleted(decode(kind, value)?),
            ActionKind::Resolved => Self::Resolved(decode(kind, value)?),
            ActionKind::Unresolved => Self::Unresolved(decode(kind, value)?),
            ActionKind::OutOfJurisdiction => Self::OutOfJurisdiction(decode(kind, value)?),
        })
    }

    /// The `Submitted` entry written alongside every new complaint
    pub fn submitted() -> Self {
        Self::Submitted(SubmittedDetails {
            description: Some("Submitted a Valid Complaint".to_string()),
        })
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            Self::Submitted(_) => ActionKind::Submitted,
            Self::Inspection(_) => ActionKind::Inspection,
            Self::InspectionDone(_) => ActionKind::InspectionDone,
            Self::Invitation(_) => ActionKind::Invitation,
            Self::SentInvitation(_) => ActionKind::SentInvitation,
            Self::Mediation(_) => ActionKind::Mediation,
            Self::Assessment(_) => ActionKind::Assessment,
            Self::TaskCompleted(_) => ActionKind::TaskCompleted,
            Self::Resolved(_) => ActionKind::Resolved,
            Self::Unresolved(_) => ActionKind::Unresolved,
            Self::OutOfJurisdiction(_) => ActionKind::OutOfJurisdiction,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Submitted(d) => d.description.as_deref(),
            Self::Inspection(d) => d.description.as_deref(),
            Self::Invitation(d) => d.description.as_deref(),
            Self::Mediation(d) => d.description.as_deref(),
            Self::Assessment(d) => d.description.as_deref(),
            Self::OutOfJurisdiction(d) => d.description.as_deref(),
            Self::InspectionDone(d)
            | Self::SentInvitation(d)
            | Self::TaskCompleted(d)
            | Self::Resolved(d)
            | Self::Unresolved(d) => d.description.as_deref(),
        }
    }

    pub fn deadline(&self) -> Option<NaiveDate> {
        match self {
            Self::Inspection(d) => d.deadline,
            Self::Invitation(d) => d.deadline,
            Self::Mediation(d) => d.deadline,
            Self::Assessment(d) => d.deadline,
            _ => None,
        }
    }

    fn deadline_slot(&mut self) -> Option<&mut Option<NaiveDate>> {
        match self {
            Self::Inspection(d) => Some(&mut d.deadline),
            Self::Invitation(d) => Some(&mut d.deadline),
            Self::Mediation(d) => Some(&mut d.deadline),
            Self::Assessment(d) => Some(&mut d.deadline),
            _ => None,
        }
    }

    /// Fill an empty deadline with `now` plus the kind's default offset
    pub fn with_default_deadline(mut self, now: DateTime<Utc>) -> Self {
        let days = self.kind().default_deadline_days();
        if let (Some(days), Some(slot)) = (days, self.deadline_slot()) {
            if slot.is_none() {
                *slot = Some((now + Duration::days(days)).date_naive());
            }
        }
        self
    }

    pub fn to_json(&self) -> LedgerResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// An action to append to a complaint's history
#[derive(Debug, Clone, PartialEq)]
pub struct NewAction {
    pub assigned_to: Option<String>,
    pub details: ActionDetails,
}

impl NewAction {
    pub fn new(details: ActionDetails) -> Self {
        Self {
            assigned_to: None,
            details,
        }
    }

    pub fn assigned_to(mut self, name: impl Into<String>) -> Self {
        self.assigned_to = Some(name.into());
        self
    }

    pub fn kind(&self) -> ActionKind {
        self.details.kind()
    }
}

/// Outcome of appending an action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionReceipt {
    pub complaint_id: i64,
    pub history_id: i64,
    pub new_stage: ComplaintStage,
    pub status: ComplaintStatus,
    pub action_datetime: DateTime<Utc>,
}
