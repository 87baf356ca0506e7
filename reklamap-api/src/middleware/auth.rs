//! JWT Authentication Middleware
//!
//! Validates bearer tokens and turns their claims into the request-scoped
//! [`AuthContext`] every protected handler takes.

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use reklamap_core::types::Role;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{ApiError, ErrorResponse};

/// JWT configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HS256 secret
    pub secret: String,
    pub algorithm: Algorithm,
    pub validate_exp: bool,
}

/// Error type for JWT configuration
#[derive(Debug, Clone)]
pub struct JwtConfigError {
    pub message: String,
}

impl std::fmt::Display for JwtConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JWT config error: {}", self.message)
    }
}

impl std::error::Error for JwtConfigError {}

impl JwtConfig {
    const MIN_SECRET_LENGTH: usize = 32;

    /// Create a JWT config. The secret must be at least 32 bytes.
    pub fn try_new(secret: impl Into<String>) -> Result<Self, JwtConfigError> {
        let secret = secret.into();
        if secret.len() < Self::MIN_SECRET_LENGTH {
            return Err(JwtConfigError {
                message: format!(
                    "JWT secret must be at least {} bytes. Got {} bytes.",
                    Self::MIN_SECRET_LENGTH,
                    secret.len()
                ),
            });
        }
        Ok(Self {
            secret,
            algorithm: Algorithm::HS256,
            validate_exp: true,
        })
    }

    /// Config with a short secret (FOR TESTING ONLY)
    #[cfg(test)]
    pub fn for_testing(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            algorithm: Algorithm::HS256,
            validate_exp: true,
        }
    }
}

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthClaims {
    /// User id of a complainant, or the display name staff are assigned by
    pub sub: String,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    pub role: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at (Unix timestamp)
    pub iat: u64,
}

/// Authentication error
#[derive(Debug)]
pub enum AuthError {
    MissingToken,
    InvalidTokenFormat,
    ValidationFailed(String),
    TokenExpired,
    InvalidRole(String),
    Encoding(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AuthError::MissingToken => (
                StatusCode::UNAUTHORIZED,
                "MISSING_TOKEN",
                "Authorization header is required".to_string(),
            ),
            AuthError::InvalidTokenFormat => (
                StatusCode::UNAUTHORIZED,
                "INVALID_TOKEN_FORMAT",
                "Invalid authorization header format. Expected: Bearer <token>".to_string(),
            ),
            AuthError::ValidationFailed(msg) => {
                (StatusCode::UNAUTHORIZED, "TOKEN_VALIDATION_FAILED", msg)
            }
            AuthError::TokenExpired => (
                StatusCode::UNAUTHORIZED,
                "TOKEN_EXPIRED",
                "Token has expired".to_string(),
            ),
            AuthError::InvalidRole(role) => (
                StatusCode::UNAUTHORIZED,
                "INVALID_ROLE",
                format!("Token carries an unknown role: {}", role),
            ),
            AuthError::Encoding(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "TOKEN_ENCODING", msg),
        };

        (status, Json(ErrorResponse::new(code, message))).into_response()
    }
}

/// Strip the `Bearer ` prefix
pub fn extract_token(auth_header: &str) -> Result<&str, AuthError> {
    auth_header
        .strip_prefix("Bearer ")
        .filter(|t| !t.is_empty())
        .ok_or(AuthError::InvalidTokenFormat)
}

/// Validate JWT token and extract claims
pub fn validate_token(token: &str, config: &JwtConfig) -> Result<AuthClaims, AuthError> {
    let mut validation = Validation::new(config.algorithm);
    validation.validate_exp = config.validate_exp;

    let key = DecodingKey::from_secret(config.secret.as_bytes());
    let token_data = decode::<AuthClaims>(token, &key, &validation).map_err(|e| {
        if e.kind() == &jsonwebtoken::errors::ErrorKind::ExpiredSignature {
            AuthError::TokenExpired
        } else {
            AuthError::ValidationFailed(e.to_string())
        }
    })?;

    Ok(token_data.claims)
}

/// Mint a signed token, used by the CLI `token` command and by tests
pub fn issue_token(
    config: &JwtConfig,
    sub: &str,
    name: Option<&str>,
    role: Role,
    ttl: Duration,
) -> Result<String, AuthError> {
    let now = Utc::now();
    let claims = AuthClaims {
        sub: sub.to_string(),
        name: name.map(str::to_string),
        role: role.as_str().to_string(),
        exp: (now + ttl).timestamp().max(0) as u64,
        iat: now.timestamp().max(0) as u64,
    };
    encode(
        &Header::new(config.algorithm),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| AuthError::Encoding(e.to_string()))
}

/// Authentication state for sharing config
#[derive(Clone)]
pub struct AuthState {
    pub config: Arc<JwtConfig>,
}

impl AuthState {
    pub fn new(config: JwtConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Who is calling, as established by the bearer token
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user_id: String,
    pub name: Option<String>,
    pub role: Role,
}

impl AuthContext {
    pub fn from_claims(claims: &AuthClaims) -> Result<Self, AuthError> {
        let role =
            Role::parse(&claims.role).map_err(|_| AuthError::InvalidRole(claims.role.clone()))?;
        Ok(Self {
            user_id: claims.sub.clone(),
            name: claims.name.clone().filter(|n| !n.trim().is_empty()),
            role,
        })
    }

    /// Name matched against `assigned_to` in the history
    pub fn assignee_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.user_id)
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ApiError::Unauthorized("Authentication required".to_string()))
    }
}

/// Require authentication middleware
///
/// Validates the JWT and stores the [`AuthContext`] in request extensions.
pub async fn require_auth(
    State(auth_state): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    let token = extract_token(auth_header)?;
    let claims = validate_token(token, &auth_state.config)?;
    let context = AuthContext::from_claims(&claims)?;

    request.extensions_mut().insert(context);

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-for-unit-testing-only";

    #[test]
    fn test_extract_token() {
        assert!(extract_token("Bearer abc123").is_ok());
        assert!(extract_token("Bearer ").is_err());
        assert!(extract_token("Basic abc123").is_err());
        assert!(extract_token("abc123").is_err());
    }

    #[test]
    fn test_short_secret_rejected() {
        assert!(JwtConfig::try_new("short").is_err());
        assert!(JwtConfig::try_new("x".repeat(32)).is_ok());
    }

    #[test]
    fn test_issued_token_validates() {
        let config = JwtConfig::for_testing(SECRET);
        let token = issue_token(
            &config,
            "Inspector Lim",
            Some("Inspector Lim"),
            Role::Staff,
            Duration::hours(1),
        )
        .unwrap();

        let claims = validate_token(&token, &config).unwrap();
        let ctx = AuthContext::from_claims(&claims).unwrap();
        assert_eq!(ctx.role, Role::Staff);
        assert_eq!(ctx.assignee_name(), "Inspector Lim");
    }

    #[test]
    fn test_expired_token() {
        let config = JwtConfig::for_testing(SECRET);
        let token = issue_token(&config, "user-1", None, Role::Complainant, Duration::hours(-2))
            .unwrap();

        assert!(matches!(
            validate_token(&token, &config),
            Err(AuthError::TokenExpired)
        ));
    }

    #[test]
    fn test_wrong_secret_fails() {
        let token = issue_token(
            &JwtConfig::for_testing(SECRET),
            "user-1",
            None,
            Role::Admin,
            Duration::hours(1),
        )
        .unwrap();
        let other = JwtConfig::for_testing("another-secret-for-unit-testing!");

        assert!(matches!(
            validate_token(&token, &other),
            Err(AuthError::ValidationFailed(_))
        ));
    }

    #[test]
    fn test_unknown_role_rejected() {
        let claims = AuthClaims {
            sub: "user-1".to_string(),
            name: None,
            role: "superuser".to_string(),
            exp: 0,
            iat: 0,
        };
        assert!(matches!(
            AuthContext::from_claims(&claims),
            Err(AuthError::InvalidRole(_))
        ));
    }

    #[test]
    fn test_assignee_falls_back_to_subject() {
        let ctx = AuthContext {
            user_id: "Engr. Cruz".to_string(),
            name: None,
            role: Role::Staff,
        };
        assert_eq!(ctx.assignee_name(), "Engr. Cruz");
        assert!(!ctx.is_admin());
    }
}
