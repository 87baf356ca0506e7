//! Core type definitions for ReklaMap
//!
//! Naming conventions follow the stored columns:
//! - snake_case field names
//! - *_id suffix for keys
//! - enum string forms match the values kept in the database

mod action;
mod complaint;
mod detail;
mod registration;
mod timeline;

pub use action::*;
pub use complaint::*;
pub use detail::*;
pub use registration::*;
pub use timeline::*;
