//! Stage and timeline read endpoints

use axum::{extract::State, Json};
use reklamap_core::ledger::TimelineLedger;
use reklamap_core::logging::{operations, LogContext};
use reklamap_core::types::Role;
use tracing::Instrument;

use super::ensure_complaint_access;
use crate::dto::{StageResponse, TimelineQuery, TimelineResponse};
use crate::error::ApiResult;
use crate::extract::{ApiPath, ApiQuery};
use crate::middleware::{timeline_permission, AuthContext};
use crate::state::AppState;

/// Stored stage, inferred listing bucket and latest action
pub async fn get_stage(
    State(state): State<AppState>,
    ctx: AuthContext,
    ApiPath(complaint_id): ApiPath<i64>,
) -> ApiResult<Json<StageResponse>> {
    ensure_complaint_access(&state, &ctx, complaint_id).await?;

    let span = LogContext::new()
        .with_user(&ctx.user_id, ctx.role.as_str())
        .with_operation(operations::STAGE_LOOKUP)
        .with_complaint(complaint_id)
        .span();
    let snapshot = state.timeline.stage(complaint_id).instrument(span).await?;

    Ok(Json(StageResponse {
        success: true,
        snapshot,
    }))
}

/// Timeline projected for `?role=`, defaulting to the caller's own role
pub async fn get_timeline(
    State(state): State<AppState>,
    ctx: AuthContext,
    ApiPath(complaint_id): ApiPath<i64>,
    ApiQuery(query): ApiQuery<TimelineQuery>,
) -> ApiResult<Json<TimelineResponse>> {
    let role = match query.role.as_deref().map(str::trim).filter(|r| !r.is_empty()) {
        Some(role) => Role::parse(role)?,
        None => ctx.role,
    };
    ctx.require(timeline_permission(role))?;
    ensure_complaint_access(&state, &ctx, complaint_id).await?;

    let span = LogContext::new()
        .with_user(&ctx.user_id, ctx.role.as_str())
        .with_operation(operations::TIMELINE)
        .with_complaint(complaint_id)
        .with_tag("view_role", role.as_str())
        .span();
    let timeline = state
        .timeline
        .timeline(complaint_id, role)
        .instrument(span)
        .await?;

    Ok(Json(TimelineResponse {
        success: true,
        complaint_id,
        role,
        timeline,
    }))
}
