//! ReklaMap Database Layer
//!
//! SQLite storage for the complaint workflow, built on `sqlx`.
//!
//! - `schema` - tables and indexes, applied by [`ReklamapDatabase::init_schema`]
//! - `entities` - row types and their conversion to core records
//! - `repos` - per-table queries; writes accept any executor so they compose
//!   inside one transaction
//! - `services` - the ledger trait implementations used by the API
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use reklamap_db::{DatabaseConfig, ReklamapDatabase, TimelineService};
//!
//! async fn example() {
//!     let db = ReklamapDatabase::connect(&DatabaseConfig::in_memory()).await.unwrap();
//!     db.init_schema().await.unwrap();
//!     let timeline = TimelineService::new(Arc::new(db));
//! }
//! ```

pub mod entities;
pub mod error;
pub mod repos;
pub mod schema;
pub mod services;
pub mod validation;

// Re-export main types
pub use entities::*;
pub use error::*;
pub use repos::*;
pub use schema::SCHEMA;
pub use services::{ComplaintQuery, ComplaintService, RegistrationService, TimelineService};
