//! Staff listing endpoints, always scoped to the caller's assignee name

use axum::{extract::State, Json};
use reklamap_core::ledger::{QueryOptions, TimelineLedger};
use reklamap_core::ComplaintView;

use crate::dto::{ComplaintListResponse, PageParams, StaffStatsResponse};
use crate::extract::ApiQuery;
use crate::middleware::AuthContext;
use crate::state::AppState;

async fn list_view(state: &AppState, view: ComplaintView, params: PageParams) -> ComplaintListResponse {
    let label = view.label();
    let options = QueryOptions {
        limit: params.limit,
        offset: params.offset,
        order_desc: true,
    };

    match state.timeline.list_complaints(&view, options).await {
        Ok(complaints) => ComplaintListResponse::ok(label, complaints),
        Err(e) => {
            tracing::warn!(operation = "list_complaints", view = %label, error = %e, "Staff listing failed");
            ComplaintListResponse::failed(label, format!("Failed to load complaints: {}", e))
        }
    }
}

/// Open complaints with a history row assigned to the caller
pub async fn assigned_complaints(
    State(state): State<AppState>,
    ctx: AuthContext,
    ApiQuery(params): ApiQuery<PageParams>,
) -> Json<ComplaintListResponse> {
    let view = ComplaintView::AssignedTo(ctx.assignee_name().to_string());
    Json(list_view(&state, view, params).await)
}

/// Resolved complaints the caller worked on
pub async fn resolved_complaints(
    State(state): State<AppState>,
    ctx: AuthContext,
    ApiQuery(params): ApiQuery<PageParams>,
) -> Json<ComplaintListResponse> {
    let view = ComplaintView::ResolvedBy(ctx.assignee_name().to_string());
    Json(list_view(&state, view, params).await)
}

pub async fn stats(State(state): State<AppState>, ctx: AuthContext) -> Json<StaffStatsResponse> {
    let name = ctx.assignee_name().to_string();
    let assigned = state
        .timeline
        .count_complaints(&ComplaintView::AssignedTo(name.clone()))
        .await;
    let resolved = state
        .timeline
        .count_complaints(&ComplaintView::ResolvedBy(name.clone()))
        .await;

    match (assigned, resolved) {
        (Ok(assigned), Ok(resolved)) => Json(StaffStatsResponse {
            success: true,
            message: None,
            staff: name,
            assigned,
            resolved,
        }),
        (Err(e), _) | (_, Err(e)) => {
            tracing::warn!(operation = "staff_stats", staff = %name, error = %e, "Staff statistics failed");
            Json(StaffStatsResponse {
                success: false,
                message: Some(format!("Failed to load statistics: {}", e)),
                staff: name,
                assigned: 0,
                resolved: 0,
            })
        }
    }
}
