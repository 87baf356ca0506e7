//! Questionnaire entities, one per complaint type

use reklamap_core::types::{
    BoundaryDisputeForm, LotDisputeForm, OverlappingForm, PathwayDisputeForm,
    UnauthorizedOccupationForm,
};
use sqlx::FromRow;

use super::from_json_text;
use crate::error::DbResult;

#[derive(Debug, Clone, FromRow)]
pub struct LotDisputeEntity {
    pub complaint_id: i64,
    pub q1: Option<String>,
    pub block_lot: Option<String>,
    pub q2: Option<String>,
    pub q3: Option<String>,
    pub q4: Option<String>,
    pub q5: Option<String>,
    pub q6: Option<String>,
    pub q7: Option<String>,
    pub q8: Option<String>,
    pub q9: Option<String>,
    pub q10: Option<String>,
    pub description: Option<String>,
    pub signature: Option<String>,
}

impl LotDisputeEntity {
    pub fn to_record(&self) -> DbResult<LotDisputeForm> {
        Ok(LotDisputeForm {
            q1: self.q1.clone(),
            block_lot: from_json_text(&self.block_lot)?,
            q2: from_json_text(&self.q2)?,
            q3: self.q3.clone(),
            q4: from_json_text(&self.q4)?,
            q5: from_json_text(&self.q5)?,
            q6: from_json_text(&self.q6)?,
            q7: from_json_text(&self.q7)?,
            q8: from_json_text(&self.q8)?,
            q9: from_json_text(&self.q9)?,
            q10: from_json_text(&self.q10)?,
            description: self.description.clone().unwrap_or_default(),
            signature: self.signature.clone(),
        })
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct BoundaryDisputeEntity {
    pub complaint_id: i64,
    pub q1: Option<String>,
    pub q2: Option<String>,
    pub q3: Option<String>,
    pub q4: Option<String>,
    pub q5: Option<String>,
    pub q5_1: Option<String>,
    pub q6: Option<String>,
    pub q7: Option<String>,
    pub q8: Option<String>,
    pub q9: Option<String>,
    pub q10: Option<String>,
    pub q10_1: Option<String>,
    pub q11: Option<String>,
    pub q12: Option<String>,
    pub q13: Option<String>,
    pub q14: Option<String>,
    pub q15: Option<String>,
    pub q15_1: Option<String>,
    pub other_parties: Option<String>,
    pub description: Option<String>,
    pub signature: Option<String>,
}

impl BoundaryDisputeEntity {
    pub fn to_record(&self) -> DbResult<BoundaryDisputeForm> {
        Ok(BoundaryDisputeForm {
            q1: from_json_text(&self.q1)?,
            q2: self.q2.clone(),
            q3: self.q3.clone(),
            q4: self.q4.clone(),
            q5: self.q5.clone(),
            q5_1: self.q5_1.clone(),
            q6: from_json_text(&self.q6)?,
            q7: from_json_text(&self.q7)?,
            q8: self.q8.clone(),
            q9: from_json_text(&self.q9)?,
            q10: self.q10.clone(),
            q10_1: from_json_text(&self.q10_1)?,
            q11: self.q11.clone(),
            q12: from_json_text(&self.q12)?,
            q13: from_json_text(&self.q13)?,
            q14: self.q14.clone(),
            q15: self.q15.clone(),
            q15_1: from_json_text(&self.q15_1)?,
            other_parties: from_json_text(&self.other_parties)?,
            description: self.description.clone().unwrap_or_default(),
            signature: self.signature.clone(),
        })
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct PathwayDisputeEntity {
    pub complaint_id: i64,
    pub block_lot: Option<String>,
    pub q1: Option<String>,
    pub q2: Option<String>,
    pub q3: Option<String>,
    pub q4: Option<String>,
    pub q5: Option<String>,
    pub q6: Option<String>,
    pub q7: Option<String>,
    pub q8: Option<String>,
    pub q9: Option<String>,
    pub q10: Option<String>,
    pub q11: Option<String>,
    pub q12: Option<String>,
    pub description: Option<String>,
    pub signature: Option<String>,
}

impl PathwayDisputeEntity {
    pub fn to_record(&self) -> DbResult<PathwayDisputeForm> {
        Ok(PathwayDisputeForm {
            block_lot: from_json_text(&self.block_lot)?,
            q1: self.q1.clone(),
            q2: self.q2.clone(),
            q3: self.q3.clone(),
            q4: self.q4.clone(),
            q5: from_json_text(&self.q5)?,
            q6: self.q6.clone(),
            q7: self.q7.clone(),
            q8: from_json_text(&self.q8)?,
            q9: from_json_text(&self.q9)?,
            q10: self.q10.clone(),
            q11: from_json_text(&self.q11)?,
            q12: self.q12.clone(),
            description: self.description.clone().unwrap_or_default(),
            signature: self.signature.clone(),
        })
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct UnauthorizedOccupationEntity {
    pub complaint_id: i64,
    pub block_lot: Option<String>,
    pub q1: Option<String>,
    pub q2: Option<String>,
    pub q3: Option<String>,
    pub q4: Option<String>,
    pub q5: Option<String>,
    pub q5a: Option<String>,
    pub q6: Option<String>,
    pub q6a: Option<String>,
    pub q7: Option<String>,
    pub q8: Option<String>,
    pub description: Option<String>,
    pub signature: Option<String>,
}

impl UnauthorizedOccupationEntity {
    pub fn to_record(&self) -> DbResult<UnauthorizedOccupationForm> {
        Ok(UnauthorizedOccupationForm {
            block_lot: from_json_text(&self.block_lot)?,
            q1: self.q1.clone(),
            q2: from_json_text(&self.q2)?,
            q3: self.q3.clone(),
            q4: from_json_text(&self.q4)?,
            q5: self.q5.clone(),
            q5a: from_json_text(&self.q5a)?,
            q6: self.q6.clone(),
            q6a: from_json_text(&self.q6a)?,
            q7: from_json_text(&self.q7)?,
            q8: self.q8.clone(),
            description: self.description.clone().unwrap_or_default(),
            signature: self.signature.clone(),
        })
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct OverlappingEntity {
    pub complaint_id: i64,
    pub registration_id: i64,
    pub q1: Option<String>,
    pub q2: Option<String>,
    pub q3: Option<String>,
    pub q4: Option<String>,
    pub q5: Option<String>,
    pub q6: Option<String>,
    pub q7: Option<String>,
    pub q8: Option<String>,
    pub q9: Option<String>,
    pub q10: Option<String>,
    pub q11: Option<String>,
    pub q12: Option<String>,
    pub q13: Option<String>,
    pub description: Option<String>,
    pub signature: Option<String>,
}

impl OverlappingEntity {
    pub fn to_record(&self) -> DbResult<OverlappingForm> {
        Ok(OverlappingForm {
            q1: self.q1.clone(),
            q2: from_json_text(&self.q2)?,
            q3: self.q3.clone(),
            q4: from_json_text(&self.q4)?,
            q5: from_json_text(&self.q5)?,
            q6: self.q6.clone(),
            q7: self.q7.clone(),
            q8: self.q8.clone(),
            q9: from_json_text(&self.q9)?,
            q10: self.q10.clone(),
            q11: self.q11.clone(),
            q12: self.q12.clone(),
            q13: self.q13.clone(),
            description: self.description.clone().unwrap_or_default(),
            signature: self.signature.clone(),
        })
    }
}
