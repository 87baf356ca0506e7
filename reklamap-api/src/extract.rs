//! Request extractors whose rejections use the API error body
//!
//! axum's own `Json`, `Path` and `Query` reject malformed input with 422 or
//! 400 and a plain-text body. These wrappers turn every rejection into
//! [`ApiError::Validation`], so a missing field is a 400 with the usual
//! `{success:false, error, code}` shape.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        FromRequest, FromRequestParts, Path, Query, Request,
    },
    http::request::Parts,
    Json,
};

use crate::error::ApiError;

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::validation(rejection.body_text())
    }
}

/// JSON request body
pub struct ApiJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

/// Path parameters
pub struct ApiPath<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    Path<T>: FromRequestParts<S, Rejection = PathRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}

/// Query string parameters
pub struct ApiQuery<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    Query<T>: FromRequestParts<S, Rejection = QueryRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode, response::IntoResponse};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct RegistrationRef {
        #[allow(dead_code)]
        registration_id: i64,
    }

    #[tokio::test]
    async fn test_missing_field_is_validation_error() {
        let req = axum::http::Request::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"description":"no id"}"#))
            .unwrap();

        let err = match ApiJson::<RegistrationRef>::from_request(req, &()).await {
            Err(err) => err,
            Ok(_) => panic!("body without registration_id was accepted"),
        };
        assert!(matches!(&err, ApiError::Validation { message, .. } if message.contains("registration_id")));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_validation_error() {
        let req = axum::http::Request::builder()
            .method("POST")
            .body(Body::from(r#"{"registration_id":1}"#))
            .unwrap();

        let result = ApiJson::<RegistrationRef>::from_request(req, &()).await;
        assert!(matches!(result, Err(ApiError::Validation { .. })));
    }
}
