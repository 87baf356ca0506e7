//! Data Transfer Objects for API requests and responses

use chrono::{DateTime, Utc};
use reklamap_core::types::{
    ComplaintRecord, ComplaintStatus, ComplaintSummary, DetailRecord, Role, TimelineEntry,
};
use reklamap_core::StageSnapshot;
use serde::{Deserialize, Serialize};

// ============ Health DTOs ============

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

// ============ Complaint DTOs ============

/// Submit complaint request: the registration plus the questionnaire answers
/// of the endpoint's complaint type, side by side in one object
#[derive(Debug, Deserialize)]
pub struct SubmitComplaintRequest<F> {
    pub registration_id: i64,
    #[serde(flatten)]
    pub answers: F,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitComplaintResponse {
    pub success: bool,
    pub message: String,
    pub complaint_id: i64,
    pub status: ComplaintStatus,
}

/// A complaint with its questionnaire answers
#[derive(Debug, Serialize)]
pub struct ComplaintDetailResponse {
    pub success: bool,
    pub complaint: ComplaintRecord,
    pub detail: Option<DetailRecord>,
}

// ============ Action DTOs ============

/// Record action request
#[derive(Debug, Deserialize)]
pub struct RecordActionRequest {
    /// One of the action vocabulary names, e.g. `Inspection`
    pub type_of_action: String,
    pub assigned_to: Option<String>,
    /// Per-action details object
    #[serde(default)]
    pub details: serde_json::Value,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ActionResponse {
    pub success: bool,
    pub new_stage: String,
    pub history_id: i64,
    pub status: ComplaintStatus,
    pub action_datetime: DateTime<Utc>,
}

/// Resolve / mark-unresolved request
#[derive(Debug, Default, Deserialize)]
pub struct CloseComplaintRequest {
    pub notes: Option<String>,
}

// ============ Timeline DTOs ============

#[derive(Debug, Default, Deserialize)]
pub struct TimelineQuery {
    pub role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TimelineResponse {
    pub success: bool,
    pub complaint_id: i64,
    pub role: Role,
    pub timeline: Vec<TimelineEntry>,
}

#[derive(Debug, Serialize)]
pub struct StageResponse {
    pub success: bool,
    #[serde(flatten)]
    pub snapshot: StageSnapshot,
}

// ============ Listing DTOs ============

/// Paging parameters
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

/// Admin listing parameters
#[derive(Debug, Default, Deserialize)]
pub struct AdminListParams {
    pub view: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

/// Complaint listing. On a failed read `success` is false, `message` says
/// why and `complaints` is empty.
#[derive(Debug, Serialize)]
pub struct ComplaintListResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub view: String,
    pub complaints: Vec<ComplaintSummary>,
}

impl ComplaintListResponse {
    pub fn ok(view: String, complaints: Vec<ComplaintSummary>) -> Self {
        Self {
            success: true,
            message: None,
            view,
            complaints,
        }
    }

    pub fn failed(view: String, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            view,
            complaints: Vec::new(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StaffStatsResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub staff: String,
    pub assigned: u64,
    pub resolved: u64,
}
