//! Registration Ledger Service Implementation

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use reklamap_core::error::LedgerError;
use reklamap_core::ledger::{Ledger, LedgerResult, RegistrationLedger};
use reklamap_core::types::{Registration, RegistrationCategory, RegistrationForm};
use tracing::info;

use crate::repos::ReklamapDatabase;
use crate::validation::clean_field;

/// Registration Ledger Service
pub struct RegistrationService {
    db: Arc<ReklamapDatabase>,
}

impl RegistrationService {
    pub fn new(db: Arc<ReklamapDatabase>) -> Self {
        Self { db }
    }

    /// Category from the form, or from whether a beneficiary record is linked
    fn category_of(form: &RegistrationForm) -> RegistrationCategory {
        match (form.category, form.beneficiary_id) {
            (Some(category), _) => category,
            (None, Some(_)) => RegistrationCategory::HoaMember,
            (None, None) => RegistrationCategory::NonMember,
        }
    }

    fn clean_form(mut form: RegistrationForm) -> RegistrationForm {
        form.middle_name = clean_field(form.middle_name);
        form.suffix = clean_field(form.suffix);
        form.current_address = clean_field(form.current_address);
        form.hoa = clean_field(form.hoa);
        form.block_no = clean_field(form.block_no);
        form.lot_no = clean_field(form.lot_no);
        form.lot_size = clean_field(form.lot_size);
        form
    }
}

#[async_trait]
impl Ledger for RegistrationService {
    fn name(&self) -> &'static str {
        "registration"
    }

    async fn health_check(&self) -> LedgerResult<bool> {
        Ok(self.db.health_check().await?)
    }
}

#[async_trait]
impl RegistrationLedger for RegistrationService {
    async fn create_registration(
        &self,
        user_id: &str,
        form: RegistrationForm,
    ) -> LedgerResult<Registration> {
        if form.first_name.trim().is_empty() || form.last_name.trim().is_empty() {
            return Err(LedgerError::validation("First name and last name are required"));
        }

        if let Some(beneficiary_id) = form.beneficiary_id {
            if self.db.references.beneficiary_by_id(beneficiary_id).await?.is_none() {
                return Err(LedgerError::validation(format!(
                    "Beneficiary {} not found",
                    beneficiary_id
                )));
            }
        }

        let category = Self::category_of(&form);
        let form = Self::clean_form(form);
        let registration_id = self
            .db
            .registrations
            .insert(self.db.pool(), user_id, category, &form, Utc::now())
            .await?;

        info!(
            operation = "create_registration",
            registration_id,
            user_id,
            category = category.as_str(),
            "Registration created"
        );

        self.get_registration(registration_id)
            .await?
            .ok_or_else(|| LedgerError::Storage(format!("Registration {} vanished", registration_id)))
    }

    async fn get_registration(&self, registration_id: i64) -> LedgerResult<Option<Registration>> {
        match self.db.registrations.get(registration_id).await? {
            Some(entity) => Ok(Some(entity.to_record()?)),
            None => Ok(None),
        }
    }

    async fn list_registrations(&self, user_id: &str) -> LedgerResult<Vec<Registration>> {
        self.db
            .registrations
            .list_by_user(user_id)
            .await?
            .iter()
            .map(|e| e.to_record().map_err(Into::into))
            .collect()
    }
}
