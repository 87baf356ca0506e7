//! ReklaMap Core - complaint lifecycle domain
//!
//! This crate holds the types and rules shared by every ReklaMap layer:
//! - Complaint, registration and questionnaire records
//! - The closed action vocabulary with typed per-action details
//! - Stage transitions and listing classification (`lifecycle`)
//! - Role-scoped timeline projection
//! - Ledger traits implemented by the storage layer
//!
//! Nothing here performs I/O; persistence lives in `reklamap-db`.

pub mod error;
pub mod ledger;
pub mod lifecycle;
pub mod logging;
pub mod types;

pub use error::*;
pub use lifecycle::*;
pub use types::*;
