//! Registration Ledger - complainant identity records

use async_trait::async_trait;

use super::{Ledger, LedgerResult};
use crate::types::{Registration, RegistrationForm};

#[async_trait]
pub trait RegistrationLedger: Ledger {
    /// Store a registration owned by `user_id`
    async fn create_registration(
        &self,
        user_id: &str,
        form: RegistrationForm,
    ) -> LedgerResult<Registration>;

    async fn get_registration(&self, registration_id: i64) -> LedgerResult<Option<Registration>>;

    /// Registrations owned by a user, newest first
    async fn list_registrations(&self, user_id: &str) -> LedgerResult<Vec<Registration>>;
}
