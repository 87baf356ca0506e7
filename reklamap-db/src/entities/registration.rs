//! Registration and reference data entities

use reklamap_core::types::{Area, Beneficiary, Block, Registration, RegistrationCategory};
use sqlx::FromRow;

use super::parse_timestamp;
use crate::error::{DbError, DbResult};

#[derive(Debug, Clone, FromRow)]
pub struct RegistrationEntity {
    pub registration_id: i64,
    pub user_id: String,
    pub beneficiary_id: Option<i64>,
    pub category: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub suffix: Option<String>,
    pub date_of_birth: Option<String>,
    pub sex: Option<String>,
    pub citizenship: Option<String>,
    pub age: Option<i64>,
    pub phone_number: Option<String>,
    pub year_of_residence: Option<i64>,
    pub civil_status: Option<String>,
    pub current_address: Option<String>,
    pub hoa: Option<String>,
    pub block_no: Option<String>,
    pub lot_no: Option<String>,
    pub lot_size: Option<String>,
    pub recipient_of_other_housing: Option<String>,
    pub signature_path: Option<String>,
    pub created_at: String,
}

impl RegistrationEntity {
    pub fn to_record(&self) -> DbResult<Registration> {
        let category = RegistrationCategory::parse(&self.category)
            .map_err(|e| DbError::InvalidRow(e.to_string()))?;

        Ok(Registration {
            registration_id: self.registration_id,
            user_id: self.user_id.clone(),
            category,
            beneficiary_id: self.beneficiary_id,
            first_name: self.first_name.clone(),
            middle_name: self.middle_name.clone(),
            last_name: self.last_name.clone(),
            suffix: self.suffix.clone(),
            date_of_birth: self.date_of_birth.clone(),
            sex: self.sex.clone(),
            citizenship: self.citizenship.clone(),
            age: self.age,
            phone_number: self.phone_number.clone(),
            year_of_residence: self.year_of_residence,
            civil_status: self.civil_status.clone(),
            current_address: self.current_address.clone(),
            hoa: self.hoa.clone(),
            block_no: self.block_no.clone(),
            lot_no: self.lot_no.clone(),
            lot_size: self.lot_size.clone(),
            recipient_of_other_housing: self.recipient_of_other_housing.clone(),
            signature_path: self.signature_path.clone(),
            created_at: parse_timestamp(&self.created_at)?,
        })
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct AreaEntity {
    pub area_id: i64,
    pub area_code: String,
    pub area_name: String,
    pub president: Option<String>,
    pub designation: Option<String>,
    pub contact_no: Option<String>,
}

impl From<AreaEntity> for Area {
    fn from(e: AreaEntity) -> Self {
        Area {
            area_id: e.area_id,
            area_code: e.area_code,
            area_name: e.area_name,
            president: e.president,
            designation: e.designation,
            contact_no: e.contact_no,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct BlockEntity {
    pub block_id: i64,
    pub area_id: i64,
    pub block_no: i64,
}

impl From<BlockEntity> for Block {
    fn from(e: BlockEntity) -> Self {
        Block {
            block_id: e.block_id,
            area_id: e.area_id,
            block_no: e.block_no,
        }
    }
}

/// Beneficiary joined with the number of its block
#[derive(Debug, Clone, FromRow)]
pub struct BeneficiaryEntity {
    pub beneficiary_id: i64,
    pub area_id: i64,
    pub block_id: i64,
    pub block_no: i64,
    pub first_name: String,
    pub middle_initial: Option<String>,
    pub last_name: String,
    pub suffix: Option<String>,
    pub lot_no: i64,
    pub sqm: Option<f64>,
    pub co_owner: Option<String>,
}

impl BeneficiaryEntity {
    pub fn to_record(&self) -> Beneficiary {
        Beneficiary {
            beneficiary_id: self.beneficiary_id,
            area_id: self.area_id,
            block_id: self.block_id,
            first_name: self.first_name.clone(),
            middle_initial: self.middle_initial.clone(),
            last_name: self.last_name.clone(),
            suffix: self.suffix.clone(),
            lot_no: self.lot_no,
            sqm: self.sqm,
            co_owner: self.co_owner.clone(),
        }
    }
}
