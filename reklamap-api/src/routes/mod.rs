//! API route handlers

pub mod action;
pub mod admin;
pub mod complaint;
pub mod health;
pub mod registration;
pub mod staff;
pub mod timeline;

use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
    Router,
};
use reklamap_core::ledger::TimelineLedger;

use crate::error::{ApiError, ApiResult};
use crate::middleware::{require_auth, require_permission, AuthContext, Permission};
use crate::state::AppState;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    let admin = Router::new()
        .route("/complaints", get(admin::list_complaints))
        .route_layer(from_fn(require_permission(Permission::ListAll)));

    let staff = Router::new()
        .route("/complaints/assigned", get(staff::assigned_complaints))
        .route("/complaints/resolved", get(staff::resolved_complaints))
        .route("/stats", get(staff::stats))
        .route_layer(from_fn(require_permission(Permission::ListAssigned)));

    let api = Router::new()
        // Registrations
        .route(
            "/registrations",
            post(registration::create_registration).get(registration::list_registrations),
        )
        .route("/registrations/:registration_id", get(registration::get_registration))
        // Submission, one endpoint per questionnaire
        .route("/complaints/lot-dispute", post(complaint::submit_lot_dispute))
        .route("/complaints/boundary-dispute", post(complaint::submit_boundary_dispute))
        .route("/complaints/pathway-dispute", post(complaint::submit_pathway_dispute))
        .route(
            "/complaints/unauthorized-occupation",
            post(complaint::submit_unauthorized_occupation),
        )
        .route("/complaints/overlapping", post(complaint::submit_overlapping))
        .route("/complaints/mine", get(complaint::my_complaints))
        .route("/complaints/:complaint_id", get(complaint::get_complaint))
        // Timeline writes
        .route("/complaints/:complaint_id/actions", post(action::record_action))
        .route("/complaints/:complaint_id/resolve", post(action::resolve))
        .route("/complaints/:complaint_id/unresolve", post(action::mark_unresolved))
        // Timeline reads
        .route("/complaints/:complaint_id/stage", get(timeline::get_stage))
        .route("/complaints/:complaint_id/timeline", get(timeline::get_timeline))
        .nest("/admin", admin)
        .nest("/staff", staff)
        .route_layer(from_fn_with_state(state.auth.clone(), require_auth));

    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .nest("/api/v1", api)
        .with_state(state)
}

/// Check the caller may read a complaint: admins always, complainants when
/// it was filed under their registration, staff when a history row of it is
/// assigned to them.
pub(crate) async fn ensure_complaint_access(
    state: &AppState,
    ctx: &AuthContext,
    complaint_id: i64,
) -> ApiResult<()> {
    if ctx.has_permission(Permission::ComplaintReadAny) {
        return Ok(());
    }

    let owner = state
        .complaints
        .owner_of(complaint_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Complaint {} not found", complaint_id)))?;

    if ctx.has_permission(Permission::ComplaintReadOwn) && owner == ctx.user_id {
        return Ok(());
    }

    if ctx.has_permission(Permission::ComplaintReadAssigned)
        && state
            .timeline
            .is_assigned(complaint_id, ctx.assignee_name())
            .await?
    {
        return Ok(());
    }

    Err(ApiError::Forbidden(format!(
        "Complaint {} is not accessible to this user",
        complaint_id
    )))
}
