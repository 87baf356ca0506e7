//! Complaint entities

use reklamap_core::types::{
    ComplaintRecord, ComplaintStage, ComplaintStatus, ComplaintSummary, ComplaintType,
    LatestAction, PriorityLevel,
};
use sqlx::FromRow;

use super::parse_timestamp;
use crate::error::{DbError, DbResult};

fn invalid(e: impl std::fmt::Display) -> DbError {
    DbError::InvalidRow(e.to_string())
}

#[derive(Debug, Clone, FromRow)]
pub struct ComplaintEntity {
    pub complaint_id: i64,
    pub registration_id: i64,
    pub type_of_complaint: String,
    pub date_received: String,
    pub status: String,
    pub complaint_stage: String,
    pub priority_level: Option<String>,
    pub description: Option<String>,
    pub complainant_name: String,
    pub area_id: i64,
    pub address: Option<String>,
}

impl ComplaintEntity {
    pub fn to_record(&self) -> DbResult<ComplaintRecord> {
        let complaint_type = ComplaintType::parse(&self.type_of_complaint).map_err(invalid)?;
        let priority = match &self.priority_level {
            Some(p) => PriorityLevel::parse(p).map_err(invalid)?,
            None => complaint_type.priority(),
        };

        Ok(ComplaintRecord {
            complaint_id: self.complaint_id,
            registration_id: self.registration_id,
            complaint_type,
            date_received: parse_timestamp(&self.date_received)?,
            status: ComplaintStatus::parse(&self.status).map_err(invalid)?,
            stage: ComplaintStage::parse(&self.complaint_stage).map_err(invalid)?,
            priority,
            description: self.description.clone(),
            complainant_name: self.complainant_name.clone(),
            area_id: self.area_id,
            address: self.address.clone(),
        })
    }
}

/// One row of the listing query
#[derive(Debug, Clone, FromRow)]
pub struct ComplaintSummaryEntity {
    pub complaint_id: i64,
    pub type_of_complaint: String,
    pub date_received: String,
    pub status: String,
    pub complaint_stage: String,
    pub priority_level: Option<String>,
    pub complainant_name: String,
    pub area_name: Option<String>,
    pub address: Option<String>,
    pub latest_action: Option<String>,
    pub latest_assigned_to: Option<String>,
    pub latest_action_datetime: Option<String>,
    pub deadline: Option<String>,
    pub meeting_date: Option<String>,
    pub meeting_time: Option<String>,
}

impl ComplaintSummaryEntity {
    pub fn to_record(&self) -> DbResult<ComplaintSummary> {
        let complaint_type = ComplaintType::parse(&self.type_of_complaint).map_err(invalid)?;
        let priority = match &self.priority_level {
            Some(p) => PriorityLevel::parse(p).map_err(invalid)?,
            None => complaint_type.priority(),
        };

        let latest_action = match (&self.latest_action, &self.latest_action_datetime) {
            (Some(action), Some(at)) => Some(LatestAction {
                type_of_action: action.clone(),
                assigned_to: self.latest_assigned_to.clone(),
                action_datetime: parse_timestamp(at)?,
            }),
            _ => None,
        };

        Ok(ComplaintSummary {
            complaint_id: self.complaint_id,
            date_received: parse_timestamp(&self.date_received)?,
            complaint_type,
            status: ComplaintStatus::parse(&self.status).map_err(invalid)?,
            stage: ComplaintStage::parse(&self.complaint_stage).map_err(invalid)?,
            priority,
            complainant_name: self.complainant_name.clone(),
            area_name: self.area_name.clone(),
            address: self.address.clone(),
            latest_action,
            deadline: self.deadline.clone(),
            meeting_date: self.meeting_date.clone(),
            meeting_time: self.meeting_time.clone(),
        })
    }
}
