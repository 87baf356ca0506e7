//! Complaint history and its role-scoped timeline projection

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::action::ActionKind;
use crate::error::{LedgerError, LedgerResult};

/// One stored row of `complaint_history`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub history_id: i64,
    pub complaint_id: i64,
    pub action: ActionKind,
    pub assigned_to: Option<String>,
    pub action_datetime: DateTime<Utc>,
    pub details: serde_json::Value,
}

impl HistoryEntry {
    fn stored_description(&self) -> Option<&str> {
        self.details
            .get("description")
            .and_then(|v| v.as_str())
            .filter(|s| !s.trim().is_empty())
    }
}

/// Who is looking at a timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Staff,
    Complainant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Staff => "staff",
            Self::Complainant => "complainant",
        }
    }

    pub fn parse(s: &str) -> LedgerResult<Self> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "staff" => Ok(Self::Staff),
            "complainant" => Ok(Self::Complainant),
            other => Err(LedgerError::validation(format!(
                "Invalid role: '{}'. Expected one of: admin, staff, complainant",
                other
            ))),
        }
    }

    /// Action types this role may see. `None` means everything.
    fn allowed(&self) -> Option<&'static [ActionKind]> {
        match self {
            Self::Admin => None,
            Self::Staff => Some(&[
                ActionKind::Inspection,
                ActionKind::InspectionDone,
                ActionKind::Invitation,
                ActionKind::SentInvitation,
                ActionKind::Mediation,
                ActionKind::Assessment,
                ActionKind::TaskCompleted,
                ActionKind::Resolved,
            ]),
            Self::Complainant => Some(&[
                ActionKind::Submitted,
                ActionKind::Inspection,
                ActionKind::Invitation,
                ActionKind::Mediation,
                ActionKind::Assessment,
                ActionKind::Resolved,
                ActionKind::Unresolved,
                ActionKind::OutOfJurisdiction,
            ]),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rendered timeline line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub history_id: i64,
    pub complaint_id: i64,
    pub type_of_action: String,
    pub assigned_to: Option<String>,
    pub description: String,
    pub action_datetime: DateTime<Utc>,
    pub details: serde_json::Value,
}

/// Fallback text when a row carries no description of its own
pub fn generate_description(action: ActionKind, assigned_to: Option<&str>) -> String {
    let by = |base: &str, alone: &str| match assigned_to {
        Some(name) => format!("{} {}", base, name),
        None => alone.to_string(),
    };
    match action {
        ActionKind::Submitted => "Submitted a valid complaint".to_string(),
        ActionKind::Inspection => by("Site inspection completed by", "Site inspection completed"),
        ActionKind::InspectionDone => by("Inspection report filed by", "Inspection report filed"),
        ActionKind::Invitation => by("Invitation sent by", "Invitation sent to involved parties"),
        ActionKind::SentInvitation => by("Invitation delivered by", "Invitation delivered"),
        ActionKind::Mediation => by("Mediation session conducted by", "Mediation session conducted"),
        ActionKind::Assessment => by("Assessment completed by", "Assessment completed"),
        ActionKind::TaskCompleted => "Task completed and passed back to admin".to_string(),
        ActionKind::Resolved => "Complaint resolved".to_string(),
        ActionKind::Unresolved => "Complaint marked as unresolved".to_string(),
        ActionKind::OutOfJurisdiction => "Complaint is outside the office's jurisdiction".to_string(),
    }
}

/// Project history rows onto what `role` may see.
///
/// `history` must be ordered oldest first; the output keeps that order.
pub fn project_timeline(history: &[HistoryEntry], role: Role) -> Vec<TimelineEntry> {
    let allowed = role.allowed();
    let mut out = Vec::with_capacity(history.len());

    for entry in history {
        if let Some(allowed) = allowed {
            if !allowed.contains(&entry.action) {
                continue;
            }
        }

        match role {
            Role::Complainant => out.push(complainant_entry(entry)),
            Role::Admin | Role::Staff => {
                let assignee = entry.assigned_to.as_deref().filter(|s| !s.is_empty());
                match assignee {
                    Some(name) if entry.action.is_assignment() => {
                        let kind = entry.action.as_str();
                        out.push(TimelineEntry {
                            type_of_action: format!("Assign {}", kind),
                            description: format!("{} assigned to {}", kind, name),
                            ..base_entry(entry, kind.to_string(), String::new())
                        });
                        out.push(base_entry(
                            entry,
                            kind.to_string(),
                            format!("{} completed by {}", kind, name),
                        ));
                    }
                    _ => {
                        let description = entry
                            .stored_description()
                            .map(str::to_string)
                            .unwrap_or_else(|| generate_description(entry.action, assignee));
                        out.push(base_entry(entry, entry.action.as_str().to_string(), description));
                    }
                }
            }
        }
    }

    out
}

fn base_entry(entry: &HistoryEntry, type_of_action: String, description: String) -> TimelineEntry {
    TimelineEntry {
        history_id: entry.history_id,
        complaint_id: entry.complaint_id,
        type_of_action,
        assigned_to: entry.assigned_to.clone(),
        description,
        action_datetime: entry.action_datetime,
        details: entry.details.clone(),
    }
}

// Complainants never see staff names, and an assessment reads as the outcome.
fn complainant_entry(entry: &HistoryEntry) -> TimelineEntry {
    let (type_of_action, description) = match entry.action {
        ActionKind::Assessment => ("Resolved".to_string(), "Complaint resolved".to_string()),
        action => (
            action.as_str().to_string(),
            entry
                .stored_description()
                .map(str::to_string)
                .unwrap_or_else(|| generate_description(action, None)),
        ),
    };

    let mut details = entry.details.clone();
    if let Some(map) = details.as_object_mut() {
        for key in ["inspector", "assigned_personnel", "advisors"] {
            map.remove(key);
        }
    }

    TimelineEntry {
        assigned_to: None,
        details,
        ..base_entry(entry, type_of_action, description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn entry(id: i64, action: ActionKind, assigned_to: Option<&str>) -> HistoryEntry {
        HistoryEntry {
            history_id: id,
            complaint_id: 7,
            action,
            assigned_to: assigned_to.map(str::to_string),
            action_datetime: Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, id as u32).unwrap(),
            details: json!({}),
        }
    }

    fn sample_history() -> Vec<HistoryEntry> {
        let mut submitted = entry(1, ActionKind::Submitted, None);
        submitted.details = json!({"description": "Submitted a Valid Complaint"});
        vec![
            submitted,
            entry(2, ActionKind::Inspection, Some("Ram")),
            entry(3, ActionKind::InspectionDone, Some("Ram")),
            entry(4, ActionKind::Assessment, None),
        ]
    }

    fn kinds(entries: &[TimelineEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.type_of_action.as_str()).collect()
    }

    #[test]
    fn test_admin_sees_everything_with_assignment_expansion() {
        let timeline = project_timeline(&sample_history(), Role::Admin);
        assert_eq!(
            kinds(&timeline),
            vec!["Submitted", "Assign Inspection", "Inspection", "Inspection done", "Assessment"]
        );
        assert_eq!(timeline[0].description, "Submitted a Valid Complaint");
        assert_eq!(timeline[1].description, "Inspection assigned to Ram");
        assert_eq!(timeline[2].description, "Inspection completed by Ram");
        assert_eq!(timeline[1].history_id, timeline[2].history_id);
    }

    #[test]
    fn test_staff_hides_submission() {
        let timeline = project_timeline(&sample_history(), Role::Staff);
        assert_eq!(
            kinds(&timeline),
            vec!["Assign Inspection", "Inspection", "Inspection done", "Assessment"]
        );
    }

    #[test]
    fn test_complainant_sees_milestones_only() {
        let timeline = project_timeline(&sample_history(), Role::Complainant);
        assert_eq!(kinds(&timeline), vec!["Submitted", "Inspection", "Resolved"]);
        assert_eq!(timeline[1].description, "Site inspection completed");
        assert_eq!(timeline[2].description, "Complaint resolved");
        assert!(timeline.iter().all(|e| e.assigned_to.is_none()));
    }

    #[test]
    fn test_complainant_sees_stored_description() {
        let mut invitation = entry(2, ActionKind::Invitation, Some("Ram"));
        invitation.details = json!({"description": "Meeting set at the barangay hall"});
        let mut assessment = entry(3, ActionKind::Assessment, None);
        assessment.details = json!({"description": "Boundary re-surveyed"});

        let timeline = project_timeline(&[invitation, assessment], Role::Complainant);
        assert_eq!(timeline[0].description, "Meeting set at the barangay hall");
        assert_eq!(timeline[1].description, "Complaint resolved");

        let timeline = project_timeline(&sample_history(), Role::Complainant);
        assert_eq!(timeline[0].description, "Submitted a Valid Complaint");
    }

    #[test]
    fn test_complainant_details_drop_staff_names() {
        let mut inspection = entry(2, ActionKind::Inspection, Some("Ram"));
        inspection.details = json!({"inspector": "Ram", "location": "Block 3", "deadline": "2024-03-04"});
        let timeline = project_timeline(&[inspection], Role::Complainant);
        assert!(timeline[0].details.get("inspector").is_none());
        assert_eq!(timeline[0].details["location"], "Block 3");
    }

    #[test]
    fn test_fresh_complaint_has_single_submitted_entry() {
        let history = vec![entry(1, ActionKind::Submitted, None)];
        for role in [Role::Admin, Role::Complainant] {
            let timeline = project_timeline(&history, role);
            assert_eq!(kinds(&timeline), vec!["Submitted"]);
        }
        assert!(project_timeline(&history, Role::Staff).is_empty());
    }

    #[test]
    fn test_generated_descriptions() {
        assert_eq!(
            generate_description(ActionKind::Mediation, Some("Atty. Cruz")),
            "Mediation session conducted by Atty. Cruz"
        );
        assert_eq!(
            generate_description(ActionKind::Invitation, None),
            "Invitation sent to involved parties"
        );
    }

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("Staff").unwrap(), Role::Staff);
        assert!(Role::parse("guest").is_err());
    }
}
