//! Timeline write endpoints

use axum::{extract::State, Json};
use reklamap_core::ledger::TimelineLedger;
use reklamap_core::logging::{operations, LogContext};
use reklamap_core::types::{ActionDetails, ActionKind, ActionReceipt, NewAction};
use tracing::Instrument;

use crate::dto::{ActionResponse, CloseComplaintRequest, RecordActionRequest};
use crate::error::{ApiError, ApiResult};
use crate::extract::{ApiJson, ApiPath};
use crate::middleware::{AuthContext, Permission};
use crate::state::AppState;

impl From<ActionReceipt> for ActionResponse {
    fn from(receipt: ActionReceipt) -> Self {
        Self {
            success: true,
            new_stage: receipt.new_stage.as_str().to_string(),
            history_id: receipt.history_id,
            status: receipt.status,
            action_datetime: receipt.action_datetime,
        }
    }
}

fn log_context(ctx: &AuthContext, operation: &str, complaint_id: i64) -> LogContext {
    LogContext::new()
        .with_user(&ctx.user_id, ctx.role.as_str())
        .with_operation(operation)
        .with_complaint(complaint_id)
}

/// Admins may append any action; staff only completion actions on complaints
/// assigned to them.
async fn authorize_action(
    state: &AppState,
    ctx: &AuthContext,
    complaint_id: i64,
    kind: ActionKind,
) -> ApiResult<()> {
    if ctx.has_permission(Permission::ActionRecord) {
        return Ok(());
    }

    ctx.require(Permission::ActionComplete)?;
    if !kind.is_completion() {
        return Err(ApiError::Forbidden(format!(
            "Staff may only record Inspection done, Sent Invitation or Task Completed, not {}",
            kind
        )));
    }
    if !state
        .timeline
        .is_assigned(complaint_id, ctx.assignee_name())
        .await?
    {
        return Err(ApiError::Forbidden(format!(
            "Complaint {} is not assigned to {}",
            complaint_id,
            ctx.assignee_name()
        )));
    }
    Ok(())
}

/// Append an action to a complaint's timeline
pub async fn record_action(
    State(state): State<AppState>,
    ctx: AuthContext,
    ApiPath(complaint_id): ApiPath<i64>,
    ApiJson(req): ApiJson<RecordActionRequest>,
) -> ApiResult<Json<ActionResponse>> {
    let kind = ActionKind::parse(req.type_of_action.trim())?;
    match kind {
        ActionKind::Submitted => {
            return Err(ApiError::validation(
                "Submitted entries are only written when a complaint is filed",
            ))
        }
        ActionKind::Resolved | ActionKind::Unresolved => {
            return Err(ApiError::validation(format!(
                "{} is recorded through the resolve and unresolve endpoints",
                kind
            )))
        }
        _ => {}
    }

    authorize_action(&state, &ctx, complaint_id, kind).await?;

    let details = ActionDetails::from_parts(kind, req.details)?;
    let mut action = NewAction::new(details);
    // Staff completions are attributed to the caller
    let assignee = if ctx.is_admin() {
        req.assigned_to
    } else {
        Some(ctx.assignee_name().to_string())
    };
    if let Some(name) = assignee {
        action = action.assigned_to(name);
    }

    let receipt = state
        .timeline
        .record_action(complaint_id, action)
        .instrument(log_context(&ctx, operations::RECORD_ACTION, complaint_id).span())
        .await?;

    Ok(Json(receipt.into()))
}

/// Mark a complaint resolved
pub async fn resolve(
    State(state): State<AppState>,
    ctx: AuthContext,
    ApiPath(complaint_id): ApiPath<i64>,
    body: Option<Json<CloseComplaintRequest>>,
) -> ApiResult<Json<ActionResponse>> {
    ctx.require(Permission::ComplaintResolve)?;
    let notes = body.and_then(|Json(req)| req.notes);

    let receipt = state
        .timeline
        .resolve(complaint_id, notes)
        .instrument(log_context(&ctx, operations::RESOLVE, complaint_id).span())
        .await?;

    Ok(Json(receipt.into()))
}

/// Mark a complaint unresolved
pub async fn mark_unresolved(
    State(state): State<AppState>,
    ctx: AuthContext,
    ApiPath(complaint_id): ApiPath<i64>,
    body: Option<Json<CloseComplaintRequest>>,
) -> ApiResult<Json<ActionResponse>> {
    ctx.require(Permission::ComplaintResolve)?;
    let notes = body.and_then(|Json(req)| req.notes);

    let receipt = state
        .timeline
        .mark_unresolved(complaint_id, notes)
        .instrument(log_context(&ctx, operations::MARK_UNRESOLVED, complaint_id).span())
        .await?;

    Ok(Json(receipt.into()))
}
