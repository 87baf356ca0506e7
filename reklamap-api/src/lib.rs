//! ReklaMap API Server
//!
//! REST API for complaint submission, timeline actions and listings. Every
//! route under `/api/v1` requires a bearer token; see [`middleware`].
//!
//! ## Endpoints
//!
//! ### Registrations
//! - POST /api/v1/registrations - Create a registration for the caller
//! - GET /api/v1/registrations - The caller's registrations
//! - GET /api/v1/registrations/:id - Get a registration
//!
//! ### Complaints
//! - POST /api/v1/complaints/lot-dispute
//! - POST /api/v1/complaints/boundary-dispute
//! - POST /api/v1/complaints/pathway-dispute
//! - POST /api/v1/complaints/unauthorized-occupation
//! - POST /api/v1/complaints/overlapping
//! - GET /api/v1/complaints/mine - The caller's complaints
//! - GET /api/v1/complaints/:id - Complaint with its questionnaire answers
//!
//! ### Timeline
//! - POST /api/v1/complaints/:id/actions - Append an action
//! - POST /api/v1/complaints/:id/resolve - Mark resolved
//! - POST /api/v1/complaints/:id/unresolve - Mark unresolved
//! - GET /api/v1/complaints/:id/stage - Stage, bucket and latest action
//! - GET /api/v1/complaints/:id/timeline?role= - Role-filtered timeline
//!
//! ### Listings
//! - GET /api/v1/admin/complaints?view= - Admin views
//! - GET /api/v1/staff/complaints/assigned - Open work of the caller
//! - GET /api/v1/staff/complaints/resolved - Resolved work of the caller
//! - GET /api/v1/staff/stats - Counts of both

pub mod dto;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use dto::*;
pub use error::*;
pub use extract::{ApiJson, ApiPath, ApiQuery};
pub use middleware::{issue_token, AuthContext, JwtConfig, Permission};
pub use routes::*;
pub use server::*;
pub use state::*;
