//! Complaint records and their classification enums

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};

/// The five complaint forms a complainant can file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplaintType {
    #[serde(rename = "Lot Dispute")]
    LotDispute,
    #[serde(rename = "Boundary Dispute")]
    BoundaryDispute,
    #[serde(rename = "Pathway Dispute")]
    PathwayDispute,
    #[serde(rename = "Unauthorized Occupation")]
    UnauthorizedOccupation,
    #[serde(rename = "Overlapping")]
    Overlapping,
}

impl ComplaintType {
    pub const ALL: [ComplaintType; 5] = [
        Self::LotDispute,
        Self::BoundaryDispute,
        Self::PathwayDispute,
        Self::UnauthorizedOccupation,
        Self::Overlapping,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LotDispute => "Lot Dispute",
            Self::BoundaryDispute => "Boundary Dispute",
            Self::PathwayDispute => "Pathway Dispute",
            Self::UnauthorizedOccupation => "Unauthorized Occupation",
            Self::Overlapping => "Overlapping",
        }
    }

    pub fn parse(s: &str) -> LedgerResult<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                LedgerError::validation(format!("Invalid complaint type: '{}'", s))
            })
    }

    /// Priority is fixed by the complaint type
    pub fn priority(&self) -> PriorityLevel {
        match self {
            Self::LotDispute | Self::UnauthorizedOccupation => PriorityLevel::Severe,
            Self::BoundaryDispute | Self::Overlapping => PriorityLevel::Moderate,
            Self::PathwayDispute => PriorityLevel::Minor,
        }
    }
}

impl std::fmt::Display for ComplaintType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complaint validity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplaintStatus {
    Valid,
    Invalid,
}

impl ComplaintStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Valid => "Valid",
            Self::Invalid => "Invalid",
        }
    }

    pub fn parse(s: &str) -> LedgerResult<Self> {
        match s {
            "Valid" => Ok(Self::Valid),
            "Invalid" => Ok(Self::Invalid),
            other => Err(LedgerError::validation(format!(
                "Invalid complaint status: '{}'. Expected one of: Valid, Invalid",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriorityLevel {
    Severe,
    Moderate,
    Minor,
}

impl PriorityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Severe => "Severe",
            Self::Moderate => "Moderate",
            Self::Minor => "Minor",
        }
    }

    pub fn parse(s: &str) -> LedgerResult<Self> {
        match s {
            "Severe" => Ok(Self::Severe),
            "Moderate" => Ok(Self::Moderate),
            "Minor" => Ok(Self::Minor),
            other => Err(LedgerError::validation(format!(
                "Invalid priority level: '{}'. Expected one of: Severe, Moderate, Minor",
                other
            ))),
        }
    }
}

/// Coarse lifecycle bucket stored on the complaint row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplaintStage {
    Pending,
    Ongoing,
    Resolved,
    Unresolved,
    #[serde(rename = "Out of Jurisdiction")]
    OutOfJurisdiction,
}

impl ComplaintStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Ongoing => "Ongoing",
            Self::Resolved => "Resolved",
            Self::Unresolved => "Unresolved",
            Self::OutOfJurisdiction => "Out of Jurisdiction",
        }
    }

    pub fn parse(s: &str) -> LedgerResult<Self> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Ongoing" => Ok(Self::Ongoing),
            "Resolved" => Ok(Self::Resolved),
            "Unresolved" => Ok(Self::Unresolved),
            "Out of Jurisdiction" => Ok(Self::OutOfJurisdiction),
            other => Err(LedgerError::validation(format!(
                "Invalid complaint stage: '{}'",
                other
            ))),
        }
    }
}

impl std::fmt::Display for ComplaintStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complaint record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplaintRecord {
    pub complaint_id: i64,
    pub registration_id: i64,
    pub complaint_type: ComplaintType,
    pub date_received: DateTime<Utc>,
    pub status: ComplaintStatus,
    pub stage: ComplaintStage,
    pub priority: PriorityLevel,
    pub description: Option<String>,
    pub complainant_name: String,
    pub area_id: i64,
    pub address: Option<String>,
}

/// Most recent history row of a complaint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatestAction {
    pub type_of_action: String,
    pub assigned_to: Option<String>,
    pub action_datetime: DateTime<Utc>,
}

/// One row of a complaint listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplaintSummary {
    pub complaint_id: i64,
    pub date_received: DateTime<Utc>,
    pub complaint_type: ComplaintType,
    pub status: ComplaintStatus,
    pub stage: ComplaintStage,
    pub priority: PriorityLevel,
    pub complainant_name: String,
    pub area_name: Option<String>,
    pub address: Option<String>,
    pub latest_action: Option<LatestAction>,
    /// Deadline of the latest `Inspection` row
    pub deadline: Option<String>,
    /// Meeting date and time of the latest `Invitation` row
    pub meeting_date: Option<String>,
    pub meeting_time: Option<String>,
}

/// Returned to the complainant after a successful submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub complaint_id: i64,
    pub status: ComplaintStatus,
    pub stage: ComplaintStage,
    pub history_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_by_type() {
        assert_eq!(ComplaintType::LotDispute.priority(), PriorityLevel::Severe);
        assert_eq!(
            ComplaintType::UnauthorizedOccupation.priority(),
            PriorityLevel::Severe
        );
        assert_eq!(ComplaintType::Overlapping.priority(), PriorityLevel::Moderate);
        assert_eq!(
            ComplaintType::BoundaryDispute.priority(),
            PriorityLevel::Moderate
        );
        assert_eq!(ComplaintType::PathwayDispute.priority(), PriorityLevel::Minor);
    }

    #[test]
    fn test_type_strings_match_serde() {
        for t in ComplaintType::ALL {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.as_str()));
            assert_eq!(ComplaintType::parse(t.as_str()).unwrap(), t);
        }
        assert!(ComplaintType::parse("Noise").is_err());
    }

    #[test]
    fn test_stage_out_of_jurisdiction_string() {
        let stage = ComplaintStage::parse("Out of Jurisdiction").unwrap();
        assert_eq!(stage, ComplaintStage::OutOfJurisdiction);
        assert_eq!(
            serde_json::to_string(&stage).unwrap(),
            "\"Out of Jurisdiction\""
        );
    }
}
