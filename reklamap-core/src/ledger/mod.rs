//! Ledger interfaces for ReklaMap
//!
//! Three ledgers back the complaint workflow:
//! - Registration Ledger: complainant identity and lot assignment
//! - Complaint Ledger: submission of typed complaints and their answers
//! - Timeline Ledger: append-only action history, stage and listings

mod complaint;
mod registration;
mod timeline;

pub use complaint::*;
pub use registration::*;
pub use timeline::*;

pub use crate::error::LedgerResult;
use async_trait::async_trait;

/// Ledger query options
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    /// Oldest first when false
    pub order_desc: bool,
}

impl QueryOptions {
    pub fn page(limit: u32, offset: u32) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
            order_desc: true,
        }
    }
}

/// Base trait for all ledger implementations
#[async_trait]
pub trait Ledger: Send + Sync {
    /// Get the ledger name
    fn name(&self) -> &'static str;

    /// Check that the backing store answers
    async fn health_check(&self) -> LedgerResult<bool>;
}
