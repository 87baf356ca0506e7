//! Questionnaire answers, one shape per complaint type
//!
//! The same structs are used for the submitted form and for the stored
//! detail row. List answers are stored as JSON arrays, scalar answers as text.

use serde::{Deserialize, Serialize};

use super::complaint::ComplaintType;

/// A block/lot pair named on a form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockLot {
    pub block: String,
    pub lot: String,
}

/// A neighbouring party named on a boundary dispute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherParty {
    pub first_name: String,
    pub last_name: String,
    pub block: String,
    pub lot: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LotClaim {
    #[serde(default)]
    pub claim: Option<String>,
    #[serde(default)]
    pub documents: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Residence {
    #[serde(default)]
    pub reside: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LotDisputeForm {
    /// Current possession of the lot
    #[serde(default)]
    pub q1: Option<String>,
    #[serde(default)]
    pub block_lot: Vec<BlockLot>,
    /// Nature of the dispute
    #[serde(default)]
    pub q2: Vec<String>,
    /// When the dispute started (YYYY-MM-DD)
    #[serde(default)]
    pub q3: Option<String>,
    #[serde(default)]
    pub q4: Vec<String>,
    /// Offices the dispute was reported to
    #[serde(default)]
    pub q5: Vec<String>,
    #[serde(default)]
    pub q6: Vec<String>,
    /// Opposing party names
    #[serde(default)]
    pub q7: Vec<String>,
    #[serde(default)]
    pub q8: Vec<String>,
    #[serde(default)]
    pub q9: LotClaim,
    #[serde(default)]
    pub q10: Residence,
    pub description: String,
    #[serde(default)]
    pub signature: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundaryDisputeForm {
    #[serde(default)]
    pub q1: Vec<String>,
    #[serde(default)]
    pub q2: Option<String>,
    #[serde(default)]
    pub q3: Option<String>,
    #[serde(default)]
    pub q4: Option<String>,
    #[serde(default)]
    pub q5: Option<String>,
    #[serde(default)]
    pub q5_1: Option<String>,
    #[serde(default)]
    pub q6: Vec<String>,
    #[serde(default)]
    pub q7: Vec<String>,
    #[serde(default)]
    pub q8: Option<String>,
    #[serde(default)]
    pub q9: Vec<String>,
    #[serde(default)]
    pub q10: Option<String>,
    #[serde(default)]
    pub q10_1: Vec<String>,
    #[serde(default)]
    pub q11: Option<String>,
    #[serde(default)]
    pub q12: Vec<String>,
    #[serde(default)]
    pub q13: Vec<String>,
    #[serde(default)]
    pub q14: Option<String>,
    #[serde(default)]
    pub q15: Option<String>,
    #[serde(default)]
    pub q15_1: Vec<String>,
    #[serde(default)]
    pub other_parties: Vec<OtherParty>,
    pub description: String,
    #[serde(default)]
    pub signature: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathwayDisputeForm {
    #[serde(default)]
    pub block_lot: Vec<BlockLot>,
    #[serde(default)]
    pub q1: Option<String>,
    #[serde(default)]
    pub q2: Option<String>,
    #[serde(default)]
    pub q3: Option<String>,
    #[serde(default)]
    pub q4: Option<String>,
    #[serde(default)]
    pub q5: Vec<String>,
    #[serde(default)]
    pub q6: Option<String>,
    #[serde(default)]
    pub q7: Option<String>,
    #[serde(default)]
    pub q8: Vec<String>,
    #[serde(default)]
    pub q9: Vec<String>,
    #[serde(default)]
    pub q10: Option<String>,
    #[serde(default)]
    pub q11: Vec<String>,
    #[serde(default)]
    pub q12: Option<String>,
    pub description: String,
    #[serde(default)]
    pub signature: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnauthorizedOccupationForm {
    #[serde(default)]
    pub block_lot: Vec<BlockLot>,
    /// Legal connection to the lot
    #[serde(default)]
    pub q1: Option<String>,
    /// Involved persons, free-form rows
    #[serde(default)]
    pub q2: Vec<serde_json::Value>,
    /// Date the occupation was noticed
    #[serde(default)]
    pub q3: Option<String>,
    #[serde(default)]
    pub q4: Vec<String>,
    #[serde(default)]
    pub q5: Option<String>,
    #[serde(default)]
    pub q5a: Vec<String>,
    #[serde(default)]
    pub q6: Option<String>,
    #[serde(default)]
    pub q6a: Vec<String>,
    #[serde(default)]
    pub q7: Vec<String>,
    #[serde(default)]
    pub q8: Option<String>,
    pub description: String,
    #[serde(default)]
    pub signature: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverlappingForm {
    /// Current status of the lot
    #[serde(default)]
    pub q1: Option<String>,
    /// Block/lot pairs involved in the overlap
    #[serde(default)]
    pub q2: Vec<BlockLot>,
    #[serde(default)]
    pub q3: Option<String>,
    #[serde(default)]
    pub q4: Vec<String>,
    #[serde(default)]
    pub q5: Vec<String>,
    #[serde(default)]
    pub q6: Option<String>,
    #[serde(default)]
    pub q7: Option<String>,
    /// Name of the involved person
    #[serde(default)]
    pub q8: Option<String>,
    #[serde(default)]
    pub q9: Vec<String>,
    #[serde(default)]
    pub q10: Option<String>,
    #[serde(default)]
    pub q11: Option<String>,
    #[serde(default)]
    pub q12: Option<String>,
    #[serde(default)]
    pub q13: Option<String>,
    pub description: String,
    #[serde(default)]
    pub signature: Option<String>,
}

/// Questionnaire answers of any complaint type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type_of_complaint", content = "answers")]
pub enum DetailRecord {
    #[serde(rename = "Lot Dispute")]
    LotDispute(LotDisputeForm),
    #[serde(rename = "Boundary Dispute")]
    BoundaryDispute(BoundaryDisputeForm),
    #[serde(rename = "Pathway Dispute")]
    PathwayDispute(PathwayDisputeForm),
    #[serde(rename = "Unauthorized Occupation")]
    UnauthorizedOccupation(UnauthorizedOccupationForm),
    #[serde(rename = "Overlapping")]
    Overlapping(OverlappingForm),
}

impl DetailRecord {
    pub fn complaint_type(&self) -> ComplaintType {
        match self {
            Self::LotDispute(_) => ComplaintType::LotDispute,
            Self::BoundaryDispute(_) => ComplaintType::BoundaryDispute,
            Self::PathwayDispute(_) => ComplaintType::PathwayDispute,
            Self::UnauthorizedOccupation(_) => ComplaintType::UnauthorizedOccupation,
            Self::Overlapping(_) => ComplaintType::Overlapping,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Self::LotDispute(f) => &f.description,
            Self::BoundaryDispute(f) => &f.description,
            Self::PathwayDispute(f) => &f.description,
            Self::UnauthorizedOccupation(f) => &f.description,
            Self::Overlapping(f) => &f.description,
        }
    }

    pub fn signature(&self) -> Option<&str> {
        match self {
            Self::LotDispute(f) => f.signature.as_deref(),
            Self::BoundaryDispute(f) => f.signature.as_deref(),
            Self::PathwayDispute(f) => f.signature.as_deref(),
            Self::UnauthorizedOccupation(f) => f.signature.as_deref(),
            Self::Overlapping(f) => f.signature.as_deref(),
        }
    }
}

/// A filled questionnaire bound to the registration it is filed under
#[derive(Debug, Clone, PartialEq)]
pub struct ComplaintSubmission {
    pub registration_id: i64,
    pub detail: DetailRecord,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lot_dispute_form_defaults() {
        let form: LotDisputeForm = serde_json::from_value(json!({
            "block_lot": [{"block": "3", "lot": "12"}],
            "q7": ["Juan Dela Cruz"],
            "description": "Neighbour fenced part of my lot"
        }))
        .unwrap();
        assert_eq!(form.block_lot[0].lot, "12");
        assert!(form.q2.is_empty());
        assert_eq!(form.q9, LotClaim::default());
    }

    #[test]
    fn test_detail_record_tagging() {
        let record = DetailRecord::PathwayDispute(PathwayDisputeForm {
            description: "Blocked alley".into(),
            ..Default::default()
        });
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["type_of_complaint"], "Pathway Dispute");
        assert_eq!(value["answers"]["description"], "Blocked alley");
        assert_eq!(record.complaint_type(), ComplaintType::PathwayDispute);
    }

    #[test]
    fn test_description_is_required() {
        let result: Result<OverlappingForm, _> = serde_json::from_value(json!({"q8": "Ana Reyes"}));
        assert!(result.is_err());
    }
}
