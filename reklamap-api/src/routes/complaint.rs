//! Complaint submission and lookup endpoints

use axum::{extract::State, Json};
use reklamap_core::ledger::{ComplaintLedger, QueryOptions, RegistrationLedger};
use reklamap_core::logging::{operations, LogContext};
use reklamap_core::types::{
    BoundaryDisputeForm, ComplaintSubmission, DetailRecord, LotDisputeForm, OverlappingForm,
    PathwayDisputeForm, UnauthorizedOccupationForm,
};
use tracing::Instrument;

use super::ensure_complaint_access;
use crate::dto::{
    ComplaintDetailResponse, ComplaintListResponse, PageParams, SubmitComplaintRequest,
    SubmitComplaintResponse,
};
use crate::error::{ApiError, ApiResult};
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::middleware::{AuthContext, Permission};
use crate::state::AppState;

async fn submit(
    state: &AppState,
    ctx: &AuthContext,
    registration_id: i64,
    detail: DetailRecord,
) -> ApiResult<Json<SubmitComplaintResponse>> {
    ctx.require(Permission::ComplaintSubmit)?;

    let registration = state
        .registrations
        .get_registration(registration_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Registration {} not found", registration_id)))?;
    if !ctx.is_admin() && registration.user_id != ctx.user_id {
        return Err(ApiError::Forbidden(format!(
            "Registration {} belongs to another user",
            registration_id
        )));
    }

    let span = LogContext::new()
        .with_user(&ctx.user_id, ctx.role.as_str())
        .with_operation(operations::SUBMIT_COMPLAINT)
        .with_tag("registration_id", registration_id.to_string())
        .span();
    let receipt = state
        .complaints
        .submit_complaint(ComplaintSubmission {
            registration_id,
            detail,
        })
        .instrument(span)
        .await?;

    Ok(Json(SubmitComplaintResponse {
        success: true,
        message: "Complaint submitted successfully".to_string(),
        complaint_id: receipt.complaint_id,
        status: receipt.status,
    }))
}

pub async fn submit_lot_dispute(
    State(state): State<AppState>,
    ctx: AuthContext,
    ApiJson(req): ApiJson<SubmitComplaintRequest<LotDisputeForm>>,
) -> ApiResult<Json<SubmitComplaintResponse>> {
    submit(&state, &ctx, req.registration_id, DetailRecord::LotDispute(req.answers)).await
}

pub async fn submit_boundary_dispute(
    State(state): State<AppState>,
    ctx: AuthContext,
    ApiJson(req): ApiJson<SubmitComplaintRequest<BoundaryDisputeForm>>,
) -> ApiResult<Json<SubmitComplaintResponse>> {
    submit(&state, &ctx, req.registration_id, DetailRecord::BoundaryDispute(req.answers)).await
}

pub async fn submit_pathway_dispute(
    State(state): State<AppState>,
    ctx: AuthContext,
    ApiJson(req): ApiJson<SubmitComplaintRequest<PathwayDisputeForm>>,
) -> ApiResult<Json<SubmitComplaintResponse>> {
    submit(&state, &ctx, req.registration_id, DetailRecord::PathwayDispute(req.answers)).await
}

pub async fn submit_unauthorized_occupation(
    State(state): State<AppState>,
    ctx: AuthContext,
    ApiJson(req): ApiJson<SubmitComplaintRequest<UnauthorizedOccupationForm>>,
) -> ApiResult<Json<SubmitComplaintResponse>> {
    submit(
        &state,
        &ctx,
        req.registration_id,
        DetailRecord::UnauthorizedOccupation(req.answers),
    )
    .await
}

pub async fn submit_overlapping(
    State(state): State<AppState>,
    ctx: AuthContext,
    ApiJson(req): ApiJson<SubmitComplaintRequest<OverlappingForm>>,
) -> ApiResult<Json<SubmitComplaintResponse>> {
    submit(&state, &ctx, req.registration_id, DetailRecord::Overlapping(req.answers)).await
}

/// Complaints filed under the caller's registrations
pub async fn my_complaints(
    State(state): State<AppState>,
    ctx: AuthContext,
    ApiQuery(params): ApiQuery<PageParams>,
) -> ApiResult<Json<ComplaintListResponse>> {
    ctx.require(Permission::ComplaintListOwn)?;

    let options = QueryOptions {
        limit: params.limit,
        offset: params.offset,
        order_desc: true,
    };
    match state.complaints.list_for_user(&ctx.user_id, options).await {
        Ok(complaints) => Ok(Json(ComplaintListResponse::ok("mine".to_string(), complaints))),
        Err(e) => {
            tracing::warn!(
                operation = "list_for_user",
                user_id = %ctx.user_id,
                error = %e,
                "Complaint listing failed"
            );
            Ok(Json(ComplaintListResponse::failed(
                "mine".to_string(),
                format!("Failed to load complaints: {}", e),
            )))
        }
    }
}

/// A complaint with its questionnaire answers
pub async fn get_complaint(
    State(state): State<AppState>,
    ctx: AuthContext,
    ApiPath(complaint_id): ApiPath<i64>,
) -> ApiResult<Json<ComplaintDetailResponse>> {
    ensure_complaint_access(&state, &ctx, complaint_id).await?;

    let complaint = state
        .complaints
        .get_complaint(complaint_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Complaint {} not found", complaint_id)))?;
    let detail = state.complaints.get_detail(complaint_id).await?;

    Ok(Json(ComplaintDetailResponse {
        success: true,
        complaint,
        detail,
    }))
}
