//! Registration endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use reklamap_core::ledger::RegistrationLedger;
use reklamap_core::logging::{operations, LogContext};
use reklamap_core::types::{Registration, RegistrationForm};
use tracing::Instrument;

use crate::error::{ApiError, ApiResult};
use crate::extract::{ApiJson, ApiPath};
use crate::middleware::{AuthContext, Permission};
use crate::state::AppState;

/// Create a registration owned by the caller
pub async fn create_registration(
    State(state): State<AppState>,
    ctx: AuthContext,
    ApiJson(form): ApiJson<RegistrationForm>,
) -> ApiResult<(StatusCode, Json<Registration>)> {
    ctx.require(Permission::RegistrationCreate)?;

    let span = LogContext::new()
        .with_user(&ctx.user_id, ctx.role.as_str())
        .with_operation(operations::CREATE_REGISTRATION)
        .span();
    let registration = state
        .registrations
        .create_registration(&ctx.user_id, form)
        .instrument(span)
        .await?;

    Ok((StatusCode::CREATED, Json(registration)))
}

/// Get one registration; complainants only see their own
pub async fn get_registration(
    State(state): State<AppState>,
    ctx: AuthContext,
    ApiPath(registration_id): ApiPath<i64>,
) -> ApiResult<Json<Registration>> {
    ctx.require(Permission::RegistrationRead)?;

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

    Ok(Json(registration))
}

/// The caller's registrations, newest first
pub async fn list_registrations(
    State(state): State<AppState>,
    ctx: AuthContext,
) -> ApiResult<Json<Vec<Registration>>> {
    ctx.require(Permission::RegistrationRead)?;
    Ok(Json(state.registrations.list_registrations(&ctx.user_id).await?))
}
