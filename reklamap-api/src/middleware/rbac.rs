//! RBAC (Role-Based Access Control)
//!
//! Maps each ReklaMap role to the operations it may perform. Route groups
//! that belong to a single permission are guarded by [`require_permission`];
//! handlers whose rule also depends on the complaint (ownership, assignment)
//! call [`AuthContext::require`] and then check the row.

use axum::{extract::Request, middleware::Next, response::Response};
use reklamap_core::types::Role;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::auth::AuthContext;
use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    // Registration operations
    RegistrationCreate,
    RegistrationRead,

    // Complaint operations
    ComplaintSubmit,
    ComplaintListOwn,
    /// Read a complaint filed under one of the caller's registrations
    ComplaintReadOwn,
    /// Read a complaint with a history row assigned to the caller
    ComplaintReadAssigned,
    ComplaintReadAny,

    // Timeline views
    TimelineComplainant,
    TimelineStaff,
    TimelineAdmin,

    // Action operations
    /// Append any non-terminal action
    ActionRecord,
    /// Append `Inspection done`, `Sent Invitation` or `Task Completed`
    /// to an assigned complaint
    ActionComplete,
    /// Resolve or mark unresolved
    ComplaintResolve,

    // Listings
    ListAll,
    ListAssigned,
}

/// Permissions granted to a role
pub fn default_permissions(role: Role) -> HashSet<Permission> {
    let mut perms = HashSet::new();

    match role {
        Role::Complainant => {
            perms.insert(Permission::RegistrationCreate);
            perms.insert(Permission::RegistrationRead);
            perms.insert(Permission::ComplaintSubmit);
            perms.insert(Permission::ComplaintListOwn);
            perms.insert(Permission::ComplaintReadOwn);
            perms.insert(Permission::TimelineComplainant);
        }
        Role::Staff => {
            perms.insert(Permission::ComplaintReadAssigned);
            perms.insert(Permission::TimelineComplainant);
            perms.insert(Permission::TimelineStaff);
            perms.insert(Permission::ActionComplete);
            perms.insert(Permission::ListAssigned);
        }
        Role::Admin => {
            perms.insert(Permission::RegistrationCreate);
            perms.insert(Permission::RegistrationRead);
            perms.insert(Permission::ComplaintSubmit);
            perms.insert(Permission::ComplaintListOwn);
            perms.insert(Permission::ComplaintReadOwn);
            perms.insert(Permission::ComplaintReadAssigned);
            perms.insert(Permission::ComplaintReadAny);
            perms.insert(Permission::TimelineComplainant);
            perms.insert(Permission::TimelineStaff);
            perms.insert(Permission::TimelineAdmin);
            perms.insert(Permission::ActionRecord);
            perms.insert(Permission::ActionComplete);
            perms.insert(Permission::ComplaintResolve);
            perms.insert(Permission::ListAll);
            perms.insert(Permission::ListAssigned);
        }
    }

    perms
}

/// Timeline view permission for a requested role
pub fn timeline_permission(view: Role) -> Permission {
    match view {
        Role::Admin => Permission::TimelineAdmin,
        Role::Staff => Permission::TimelineStaff,
        Role::Complainant => Permission::TimelineComplainant,
    }
}

impl AuthContext {
    pub fn has_permission(&self, permission: Permission) -> bool {
        default_permissions(self.role).contains(&permission)
    }

    pub fn require(&self, permission: Permission) -> Result<(), ApiError> {
        if self.has_permission(permission) {
            Ok(())
        } else {
            Err(forbidden(permission))
        }
    }
}

fn forbidden(permission: Permission) -> ApiError {
    ApiError::Forbidden(format!("Missing required permission: {:?}", permission))
}

/// Require permission middleware factory
///
/// Must sit inside the authentication layer, which puts the [`AuthContext`]
/// into the request extensions.
pub fn require_permission(
    permission: Permission,
) -> impl Fn(
    Request,
    Next,
) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Response, ApiError>> + Send>>
       + Clone
       + Send {
    move |request: Request, next: Next| {
        Box::pin(async move {
            let ctx = request
                .extensions()
                .get::<AuthContext>()
                .ok_or_else(|| ApiError::Unauthorized("Authentication required".to_string()))?;

            if !ctx.has_permission(permission) {
                tracing::warn!(
                    user_id = %ctx.user_id,
                    role = ctx.role.as_str(),
                    ?permission,
                    "Permission denied"
                );
                return Err(forbidden(permission));
            }

            Ok(next.run(request).await)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(role: Role) -> AuthContext {
        AuthContext {
            user_id: "u".to_string(),
            name: None,
            role,
        }
    }

    #[test]
    fn test_role_default_permissions() {
        let admin = default_permissions(Role::Admin);
        assert!(admin.contains(&Permission::ListAll));
        assert!(admin.contains(&Permission::ComplaintResolve));

        let staff = default_permissions(Role::Staff);
        assert!(staff.contains(&Permission::ActionComplete));
        assert!(!staff.contains(&Permission::ActionRecord));
        assert!(!staff.contains(&Permission::ListAll));
        assert!(!staff.contains(&Permission::TimelineAdmin));

        let complainant = default_permissions(Role::Complainant);
        assert!(complainant.contains(&Permission::ComplaintSubmit));
        assert!(!complainant.contains(&Permission::TimelineStaff));
        assert!(!complainant.contains(&Permission::ComplaintResolve));
    }

    #[test]
    fn test_admin_holds_every_other_role_permission() {
        let admin = default_permissions(Role::Admin);
        for role in [Role::Staff, Role::Complainant] {
            assert!(default_permissions(role).is_subset(&admin));
        }
    }

    #[test]
    fn test_require_reports_forbidden() {
        assert!(ctx(Role::Admin).require(Permission::ListAll).is_ok());
        assert!(matches!(
            ctx(Role::Staff).require(Permission::ListAll),
            Err(ApiError::Forbidden(_))
        ));
    }

    #[test]
    fn test_timeline_permission() {
        assert_eq!(timeline_permission(Role::Staff), Permission::TimelineStaff);
        assert!(!ctx(Role::Complainant).has_permission(timeline_permission(Role::Admin)));
    }
}
