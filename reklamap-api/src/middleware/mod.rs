//! Request middleware: bearer-token authentication and role permissions

pub mod auth;
pub mod rbac;

pub use auth::{
    issue_token, require_auth, AuthClaims, AuthContext, AuthError, AuthState, JwtConfig,
    JwtConfigError,
};
pub use rbac::{default_permissions, require_permission, timeline_permission, Permission};
