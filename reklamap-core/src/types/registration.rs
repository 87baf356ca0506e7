//! Complainant registrations and the reference data they are checked against

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationCategory {
    HoaMember,
    FamilyOfMember,
    NonMember,
}

impl RegistrationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HoaMember => "hoa_member",
            Self::FamilyOfMember => "family_of_member",
            Self::NonMember => "non_member",
        }
    }

    pub fn parse(s: &str) -> LedgerResult<Self> {
        match s {
            "hoa_member" => Ok(Self::HoaMember),
            "family_of_member" => Ok(Self::FamilyOfMember),
            "non_member" => Ok(Self::NonMember),
            other => Err(LedgerError::validation(format!(
                "Invalid registration category: '{}'. Expected one of: hoa_member, family_of_member, non_member",
                other
            ))),
        }
    }
}

/// Identity and lot-assignment fields supplied by a complainant
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub category: Option<RegistrationCategory>,
    pub beneficiary_id: Option<i64>,
    pub first_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    pub last_name: String,
    #[serde(default)]
    pub suffix: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub sex: Option<String>,
    #[serde(default)]
    pub citizenship: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub year_of_residence: Option<i64>,
    #[serde(default)]
    pub civil_status: Option<String>,
    #[serde(default)]
    pub current_address: Option<String>,
    /// Area id or area name/code, as typed by the complainant
    #[serde(default)]
    pub hoa: Option<String>,
    #[serde(default)]
    pub block_no: Option<String>,
    #[serde(default)]
    pub lot_no: Option<String>,
    #[serde(default)]
    pub lot_size: Option<String>,
    #[serde(default)]
    pub recipient_of_other_housing: Option<String>,
    #[serde(default)]
    pub signature_path: Option<String>,
}

/// Stored registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    pub registration_id: i64,
    pub user_id: String,
    pub category: RegistrationCategory,
    pub beneficiary_id: Option<i64>,
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
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub area_id: i64,
    pub area_code: String,
    pub area_name: String,
    #[serde(default)]
    pub president: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub contact_no: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub block_id: i64,
    pub area_id: i64,
    pub block_no: i64,
}

/// Authoritative holder of one block/lot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beneficiary {
    pub beneficiary_id: i64,
    pub area_id: i64,
    pub block_id: i64,
    pub first_name: String,
    #[serde(default)]
    pub middle_initial: Option<String>,
    pub last_name: String,
    #[serde(default)]
    pub suffix: Option<String>,
    pub lot_no: i64,
    #[serde(default)]
    pub sqm: Option<f64>,
    #[serde(default)]
    pub co_owner: Option<String>,
}

/// Reference data bundle used by seeding
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceData {
    #[serde(default)]
    pub areas: Vec<Area>,
    #[serde(default)]
    pub blocks: Vec<Block>,
    #[serde(default)]
    pub beneficiaries: Vec<Beneficiary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_strings() {
        assert_eq!(
            RegistrationCategory::parse("family_of_member").unwrap(),
            RegistrationCategory::FamilyOfMember
        );
        assert_eq!(RegistrationCategory::NonMember.as_str(), "non_member");
        assert!(RegistrationCategory::parse("tenant").is_err());
    }

    #[test]
    fn test_reference_data_defaults() {
        let data: ReferenceData = serde_json::from_str(
            r#"{"areas":[{"area_id":1,"area_code":"SMV","area_name":"San Miguel Village"}]}"#,
        )
        .unwrap();
        assert_eq!(data.areas.len(), 1);
        assert!(data.blocks.is_empty());
        assert!(data.beneficiaries.is_empty());
    }
}
