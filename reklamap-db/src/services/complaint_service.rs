//! Complaint Ledger Service Implementation
//!
//! Submission runs every reference-data check first, then writes the
//! complaint row, its questionnaire row and the `Submitted` history row in
//! one transaction.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use reklamap_core::error::LedgerError;
use reklamap_core::ledger::{ComplaintLedger, Ledger, LedgerResult, QueryOptions};
use reklamap_core::types::{
    ActionDetails, ActionKind, BlockLot, ComplaintRecord, ComplaintStage, ComplaintStatus,
    ComplaintSubmission, ComplaintSummary, DetailRecord, OtherParty, OverlappingForm, Registration,
    SubmissionReceipt,
};
use reklamap_core::ComplaintView;
use tracing::{debug, info};

use crate::entities::{AreaEntity, BeneficiaryEntity};
use crate::error::DbError;
use crate::repos::{NameQuery, NewComplaintRow, NewHistoryRow, ReklamapDatabase};
use crate::services::listing::ComplaintQuery;
use crate::validation::{
    clean_detail, display_name, ensure_no_mismatches, name_query, parse_number,
    validate_description, validate_signature, ValidationRule,
};

/// Complaint Ledger Service
pub struct ComplaintService {
    db: Arc<ReklamapDatabase>,
}

impl ComplaintService {
    pub fn new(db: Arc<ReklamapDatabase>) -> Self {
        Self { db }
    }

    /// Resolve the complainant's area.
    ///
    /// Tried in order: `hoa` as an area id, `hoa` as an area code or name,
    /// the linked beneficiary, then the registration's block/lot.
    async fn resolve_area(&self, registration: &Registration) -> LedgerResult<AreaEntity> {
        if let Some(hoa) = registration.hoa.as_deref().map(str::trim).filter(|h| !h.is_empty()) {
            if let Ok(area_id) = hoa.parse::<i64>() {
                if let Some(area) = self.db.references.area_by_id(area_id).await? {
                    return Ok(area);
                }
            }
            if let Some(area) = self.db.references.area_by_label(hoa).await? {
                return Ok(area);
            }
        }

        if let Some(beneficiary_id) = registration.beneficiary_id {
            if let Some(ben) = self.db.references.beneficiary_by_id(beneficiary_id).await? {
                if let Some(area) = self.db.references.area_by_id(ben.area_id).await? {
                    return Ok(area);
                }
            }
        }

        let block = registration.block_no.as_deref().and_then(parse_number);
        let lot = registration.lot_no.as_deref().and_then(parse_number);
        if let (Some(block), Some(lot)) = (block, lot) {
            if let Some(ben) = self.db.references.beneficiary_at(None, block, lot).await? {
                if let Some(area) = self.db.references.area_by_id(ben.area_id).await? {
                    return Ok(area);
                }
            }
        }

        Err(LedgerError::mismatch(
            ValidationRule::AreaUnresolved.to_string(),
            vec!["Area Assignment".to_string()],
        ))
    }

    /// Every named block/lot must be a block of the area with an assigned lot
    async fn check_block_lots(&self, area_id: i64, pairs: &[BlockLot]) -> LedgerResult<()> {
        for pair in pairs {
            let (Some(block), Some(lot)) = (parse_number(&pair.block), parse_number(&pair.lot)) else {
                return Err(ValidationRule::BlockLotNotFound.error());
            };
            if self.db.references.block_in_area(area_id, block).await?.is_none()
                || self.db.references.beneficiary_at(Some(area_id), block, lot).await?.is_none()
            {
                return Err(ValidationRule::BlockLotNotFound.error());
            }
        }
        Ok(())
    }

    /// Mismatched fields of the closest candidate, or a name mismatch when no
    /// beneficiary carries the name
    fn closest_mismatches(
        candidates: &[BeneficiaryEntity],
        block: Option<i64>,
        lot: Option<i64>,
        area_id: i64,
    ) -> Vec<&'static str> {
        candidates
            .iter()
            .map(|ben| {
                let mut fields = Vec::new();
                if block != Some(ben.block_no) {
                    fields.push("Block Assignment");
                }
                if lot != Some(ben.lot_no) {
                    fields.push("Lot Assignment");
                }
                if ben.area_id != area_id {
                    fields.push("Area Assignment");
                }
                fields
            })
            .min_by_key(|fields| fields.len())
            .unwrap_or_else(|| vec!["Beneficiary Name"])
    }

    /// Cross-check each boundary neighbour against the beneficiary records
    async fn check_other_parties(&self, area_id: i64, parties: &[OtherParty]) -> LedgerResult<()> {
        let mut mismatches = Vec::new();

        for (index, party) in parties.iter().enumerate() {
            let query = NameQuery {
                first_name: Some(party.first_name.trim().to_string()).filter(|s| !s.is_empty()),
                last_name: Some(party.last_name.trim().to_string()).filter(|s| !s.is_empty()),
                ..Default::default()
            };
            let candidates = self.db.references.beneficiaries_named(&query).await?;
            let fields = Self::closest_mismatches(
                &candidates,
                parse_number(&party.block),
                parse_number(&party.lot),
                area_id,
            );
            mismatches.extend(fields.into_iter().map(|f| format!("Party {}: {}", index + 1, f)));
        }

        ensure_no_mismatches(mismatches)
    }

    /// Cross-check the involved person and the first overlapping block/lot
    async fn check_overlapping_party(&self, area_id: i64, form: &OverlappingForm) -> LedgerResult<()> {
        let pair = form.q2.first();
        let block = pair.and_then(|p| parse_number(&p.block));
        let lot = pair.and_then(|p| parse_number(&p.lot));

        let Some(name) = form.q8.as_deref() else {
            return match pair {
                Some(pair) => self.check_block_lots(area_id, std::slice::from_ref(pair)).await,
                None => Ok(()),
            };
        };

        let candidates = self.db.references.beneficiaries_named(&name_query(name)).await?;
        let mut fields = Self::closest_mismatches(&candidates, block, lot, area_id);
        if pair.is_none() {
            fields.retain(|f| *f != "Block Assignment" && *f != "Lot Assignment");
        }
        ensure_no_mismatches(fields.into_iter().map(String::from).collect())
    }

    /// Refuse a second open Overlapping complaint for the same registration
    async fn ensure_no_open_overlapping(&self, registration_id: i64) -> LedgerResult<()> {
        if let Some(existing) = self.db.complaints.latest_overlapping(registration_id).await? {
            let existing = existing.to_record()?;
            if existing.status == ComplaintStatus::Valid && existing.stage != ComplaintStage::Resolved
            {
                return Err(ValidationRule::DuplicateOverlapping.error());
            }
        }
        Ok(())
    }

    fn address_of(registration: &Registration, area: &AreaEntity) -> String {
        if let Some(address) = registration
            .current_address
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
        {
            return address.to_string();
        }

        let mut parts = vec![area.area_name.clone()];
        if let Some(block) = registration.block_no.as_deref() {
            parts.push(format!("Block {}", block.trim()));
        }
        if let Some(lot) = registration.lot_no.as_deref() {
            parts.push(format!("Lot {}", lot.trim()));
        }
        parts.join(", ")
    }
}

#[async_trait]
impl Ledger for ComplaintService {
    fn name(&self) -> &'static str {
        "complaint"
    }

    async fn health_check(&self) -> LedgerResult<bool> {
        Ok(self.db.health_check().await?)
    }
}

#[async_trait]
impl ComplaintLedger for ComplaintService {
    async fn submit_complaint(
        &self,
        submission: ComplaintSubmission,
    ) -> LedgerResult<SubmissionReceipt> {
        let registration_id = submission.registration_id;
        let registration = self
            .db
            .registrations
            .get(registration_id)
            .await?
            .ok_or_else(|| {
                LedgerError::NotFound(format!("Registration {} not found", registration_id))
            })?
            .to_record()?;

        let detail = clean_detail(submission.detail);
        let complaint_type = detail.complaint_type();
        debug!(
            registration_id,
            complaint_type = complaint_type.as_str(),
            "Validating complaint submission"
        );

        validate_signature(detail.signature())?;
        validate_description(detail.description())?;

        let area = self.resolve_area(&registration).await?;

        match &detail {
            DetailRecord::LotDispute(form) => self.check_block_lots(area.area_id, &form.block_lot).await?,
            DetailRecord::UnauthorizedOccupation(form) => {
                self.check_block_lots(area.area_id, &form.block_lot).await?
            }
            DetailRecord::BoundaryDispute(form) => {
                self.check_other_parties(area.area_id, &form.other_parties).await?
            }
            DetailRecord::Overlapping(form) => {
                self.check_overlapping_party(area.area_id, form).await?;
                self.ensure_no_open_overlapping(registration_id).await?;
            }
            DetailRecord::PathwayDispute(_) => {}
        }

        let now = Utc::now();
        let row = NewComplaintRow {
            registration_id,
            complaint_type,
            date_received: now,
            status: ComplaintStatus::Valid,
            stage: ComplaintStage::Pending,
            priority: complaint_type.priority(),
            description: detail.description().to_string(),
            complainant_name: display_name(
                &registration.first_name,
                registration.middle_name.as_deref(),
                &registration.last_name,
                registration.suffix.as_deref(),
            ),
            area_id: area.area_id,
            address: Some(Self::address_of(&registration, &area)),
        };
        let submitted = ActionDetails::submitted().to_json()?;

        // Dropping the transaction without commit rolls everything back.
        let mut tx = self.db.pool().begin().await.map_err(DbError::from)?;
        let complaint_id = self.db.complaints.insert(&mut *tx, &row).await?;
        self.db
            .complaints
            .insert_detail(&mut *tx, complaint_id, registration_id, &detail)
            .await?;
        let history_id = self
            .db
            .history
            .insert(
                &mut *tx,
                &NewHistoryRow {
                    complaint_id,
                    action: ActionKind::Submitted,
                    assigned_to: None,
                    action_datetime: now,
                    details: &submitted,
                },
            )
            .await?;
        tx.commit().await.map_err(DbError::from)?;

        info!(
            operation = "submit_complaint",
            complaint_id,
            registration_id,
            complaint_type = complaint_type.as_str(),
            area_id = area.area_id,
            "Complaint submitted"
        );

        Ok(SubmissionReceipt {
            complaint_id,
            status: ComplaintStatus::Valid,
            stage: ComplaintStage::Pending,
            history_id,
        })
    }

    async fn get_complaint(&self, complaint_id: i64) -> LedgerResult<Option<ComplaintRecord>> {
        match self.db.complaints.get(complaint_id).await? {
            Some(entity) => Ok(Some(entity.to_record()?)),
            None => Ok(None),
        }
    }

    async fn get_detail(&self, complaint_id: i64) -> LedgerResult<Option<DetailRecord>> {
        let Some(complaint) = self.get_complaint(complaint_id).await? else {
            return Ok(None);
        };
        Ok(self
            .db
            .complaints
            .get_detail(complaint_id, complaint.complaint_type)
            .await?)
    }

    async fn list_for_user(
        &self,
        user_id: &str,
        options: QueryOptions,
    ) -> LedgerResult<Vec<ComplaintSummary>> {
        let query = ComplaintQuery::new(ComplaintView::All)
            .for_user(user_id)
            .with_options(options);
        Ok(query.fetch(self.db.pool()).await?)
    }
}

impl ComplaintService {
    /// User owning the registration a complaint was filed under
    pub async fn owner_of(&self, complaint_id: i64) -> LedgerResult<Option<String>> {
        Ok(self.db.complaints.owner_of(complaint_id).await?)
    }
}
