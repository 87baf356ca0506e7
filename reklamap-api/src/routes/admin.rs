//! Admin listing endpoints

use axum::{extract::State, Json};
use reklamap_core::ledger::{QueryOptions, TimelineLedger};
use reklamap_core::ComplaintView;

use crate::dto::{AdminListParams, ComplaintListResponse};
use crate::error::ApiResult;
use crate::extract::ApiQuery;
use crate::middleware::AuthContext;
use crate::state::AppState;

/// Complaints in one view (`all`, `pending`, `ongoing`, `resolved`,
/// `unresolved`, `invalid`), newest first
pub async fn list_complaints(
    State(state): State<AppState>,
    ctx: AuthContext,
    ApiQuery(params): ApiQuery<AdminListParams>,
) -> ApiResult<Json<ComplaintListResponse>> {
    let view = ComplaintView::parse(params.view.as_deref().unwrap_or("all").trim())?;
    let label = view.label();
    let options = QueryOptions {
        limit: params.limit,
        offset: params.offset,
        order_desc: true,
    };

    match state.timeline.list_complaints(&view, options).await {
        Ok(complaints) => Ok(Json(ComplaintListResponse::ok(label, complaints))),
        Err(e) => {
            tracing::warn!(
                operation = "list_complaints",
                user_id = %ctx.user_id,
                view = %label,
                error = %e,
                "Complaint listing failed"
            );
            Ok(Json(ComplaintListResponse::failed(
                label,
                format!("Failed to load complaints: {}", e),
            )))
        }
    }
}
