//! ReklaMap Ledger Service Implementations
//!
//! Concrete implementations of the ledger traits defined in reklamap-core,
//! backed by the SQLite repositories in this crate.

pub mod complaint_service;
pub mod listing;
pub mod registration_service;
pub mod timeline_service;

pub use complaint_service::ComplaintService;
pub use listing::ComplaintQuery;
pub use registration_service::RegistrationService;
pub use timeline_service::TimelineService;
