//! Complaint Submission Validation Rules
//!
//! Pure checks and clean-up applied to a questionnaire before anything is
//! written. Checks that need reference data (area, block/lot, beneficiary
//! names) live in the complaint service and use the helpers here to build
//! their messages.
//!
//! # Rules Implemented
//!
//! 1. **Signature attachment**: filename extension must be pdf/png/jpg/jpeg
//! 2. **Description**: every complaint carries a non-empty description
//! 3. **Answer clean-up**: blank/NA answers become NULL, enumerated answers
//!    outside their allowed set become NULL
//! 4. **Cross-check messages**: all mismatches are reported together

use reklamap_core::error::{LedgerError, LedgerResult};
use reklamap_core::types::DetailRecord;

use crate::repos::NameQuery;

/// Validation rule identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationRule {
    SignatureExtension,
    EmptyDescription,
    AreaUnresolved,
    BlockLotNotFound,
    DuplicateOverlapping,
}

impl std::fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SignatureExtension => {
                write!(f, "Invalid signature file type. Allowed types: pdf, png, jpg, jpeg")
            }
            Self::EmptyDescription => write!(f, "Complaint description is required"),
            Self::AreaUnresolved => write!(
                f,
                "Cannot submit complaint: Area assignment not found from your registration."
            ),
            Self::BlockLotNotFound => write!(f, "Block or lot could not be found for your HOA."),
            Self::DuplicateOverlapping => {
                write!(f, "A complaint for this registration already exists.")
            }
        }
    }
}

impl ValidationRule {
    pub fn error(self) -> LedgerError {
        LedgerError::validation(self.to_string())
    }
}

pub const ALLOWED_SIGNATURE_EXTENSIONS: [&str; 4] = ["pdf", "png", "jpg", "jpeg"];

const YES_NO: &[&str] = &["Yes", "No"];
const YES_NO_NOT_SURE: &[&str] = &["Yes", "No", "Not sure"];

/// Validates the signature attachment filename, if one was given.
///
/// # Rule
/// Only the extension is checked, case-insensitively.
pub fn validate_signature(filename: Option<&str>) -> LedgerResult<()> {
    let Some(filename) = filename.map(str::trim).filter(|f| !f.is_empty()) else {
        return Ok(());
    };

    let allowed = filename
        .rsplit_once('.')
        .map(|(_, ext)| {
            let ext = ext.to_ascii_lowercase();
            ALLOWED_SIGNATURE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false);

    if allowed {
        Ok(())
    } else {
        Err(ValidationRule::SignatureExtension.error())
    }
}

pub fn validate_description(description: &str) -> LedgerResult<()> {
    if description.trim().is_empty() {
        return Err(ValidationRule::EmptyDescription.error());
    }
    Ok(())
}

/// Normalizes a free-text answer: blank, `na`, `n/a` and `none` become `None`
pub fn clean_field(value: Option<String>) -> Option<String> {
    let value = value?;
    let trimmed = value.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "" | "na" | "n/a" | "none" => None,
        _ => Some(trimmed.to_string()),
    }
}

/// Keeps an enumerated answer only when it is one of `allowed`
pub fn clean_choice(value: Option<String>, allowed: &[&str]) -> Option<String> {
    clean_field(value).and_then(|v| {
        allowed
            .iter()
            .find(|a| a.eq_ignore_ascii_case(&v))
            .map(|a| a.to_string())
    })
}

fn clean_list(values: Vec<String>) -> Vec<String> {
    values.into_iter().filter_map(|v| clean_field(Some(v))).collect()
}

/// Applies answer clean-up to every scalar and list answer of a questionnaire
pub fn clean_detail(detail: DetailRecord) -> DetailRecord {
    match detail {
        DetailRecord::LotDispute(mut f) => {
            f.q1 = clean_field(f.q1);
            f.q2 = clean_list(f.q2);
            f.q3 = clean_field(f.q3);
            f.q4 = clean_list(f.q4);
            f.q5 = clean_list(f.q5);
            f.q6 = clean_list(f.q6);
            f.q7 = clean_list(f.q7);
            f.q8 = clean_list(f.q8);
            f.q9.claim = clean_field(f.q9.claim);
            f.q10.reside = clean_choice(f.q10.reside, YES_NO);
            f.description = f.description.trim().to_string();
            DetailRecord::LotDispute(f)
        }
        DetailRecord::BoundaryDispute(mut f) => {
            f.q1 = clean_list(f.q1);
            f.q2 = clean_field(f.q2);
            f.q3 = clean_field(f.q3);
            f.q4 = clean_choice(f.q4, YES_NO);
            f.q5 = clean_choice(f.q5, YES_NO);
            f.q5_1 = clean_field(f.q5_1);
            f.q6 = clean_list(f.q6);
            f.q7 = clean_list(f.q7);
            f.q8 = clean_field(f.q8);
            f.q9 = clean_list(f.q9);
            f.q10 = clean_choice(f.q10, YES_NO);
            f.q10_1 = clean_list(f.q10_1);
            f.q11 = clean_choice(f.q11, YES_NO_NOT_SURE);
            f.q12 = clean_list(f.q12);
            f.q13 = clean_list(f.q13);
            f.q14 = clean_choice(f.q14, YES_NO_NOT_SURE);
            f.q15 = clean_choice(f.q15, YES_NO);
            f.q15_1 = clean_list(f.q15_1);
            f.description = f.description.trim().to_string();
            DetailRecord::BoundaryDispute(f)
        }
        DetailRecord::PathwayDispute(mut f) => {
            f.q1 = clean_field(f.q1);
            f.q2 = clean_field(f.q2);
            f.q3 = clean_field(f.q3);
            f.q4 = clean_field(f.q4);
            f.q5 = clean_list(f.q5);
            f.q6 = clean_field(f.q6);
            f.q7 = clean_field(f.q7);
            f.q8 = clean_list(f.q8);
            f.q9 = clean_list(f.q9);
            f.q10 = clean_field(f.q10);
            f.q11 = clean_list(f.q11);
            f.q12 = clean_field(f.q12);
            f.description = f.description.trim().to_string();
            DetailRecord::PathwayDispute(f)
        }
        DetailRecord::UnauthorizedOccupation(mut f) => {
            f.q1 = clean_field(f.q1);
            f.q3 = clean_field(f.q3);
            f.q4 = clean_list(f.q4);
            f.q5 = clean_field(f.q5);
            f.q5a = clean_list(f.q5a);
            f.q6 = clean_field(f.q6);
            f.q6a = clean_list(f.q6a);
            f.q7 = clean_list(f.q7);
            f.q8 = clean_field(f.q8);
            f.description = f.description.trim().to_string();
            DetailRecord::UnauthorizedOccupation(f)
        }
        DetailRecord::Overlapping(mut f) => {
            f.q1 = clean_field(f.q1);
            f.q3 = clean_field(f.q3);
            f.q4 = clean_list(f.q4);
            f.q5 = clean_list(f.q5);
            f.q6 = clean_field(f.q6);
            f.q7 = clean_field(f.q7);
            f.q8 = clean_field(f.q8);
            f.q9 = clean_list(f.q9);
            f.q10 = clean_field(f.q10);
            f.q11 = clean_field(f.q11);
            f.q12 = clean_field(f.q12);
            f.q13 = clean_field(f.q13);
            f.description = f.description.trim().to_string();
            DetailRecord::Overlapping(f)
        }
    }
}

/// Joins name parts, dropping blank and NA parts
pub fn display_name(
    first: &str,
    middle: Option<&str>,
    last: &str,
    suffix: Option<&str>,
) -> String {
    [Some(first), middle, Some(last), suffix]
        .into_iter()
        .flatten()
        .filter_map(|part| clean_field(Some(part.to_string())))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses a block or lot number typed on a form (`"3"`, `"Blk 3"`, `"Lot 12"`)
pub fn parse_number(value: &str) -> Option<i64> {
    let digits: String = value
        .trim()
        .trim_start_matches(|c: char| !c.is_ascii_digit())
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Splits a typed person name into a beneficiary search.
///
/// # Rule
/// - one word matches either the first or the last name
/// - two or more words: first word is the first name, last word the last name
/// - three words: the middle word is the middle initial
/// - four words: the second word is the middle initial, the third the suffix
pub fn name_query(name: &str) -> NameQuery {
    let parts: Vec<&str> = name.split_whitespace().collect();
    match parts.as_slice() {
        [] => NameQuery::default(),
        [only] => NameQuery {
            either_name: Some(only.to_string()),
            ..Default::default()
        },
        [first, last] => NameQuery {
            first_name: Some(first.to_string()),
            last_name: Some(last.to_string()),
            ..Default::default()
        },
        [first, middle, last] => NameQuery {
            first_name: Some(first.to_string()),
            middle_initial: Some(middle.to_string()),
            last_name: Some(last.to_string()),
            ..Default::default()
        },
        [first, middle, suffix, last] => NameQuery {
            first_name: Some(first.to_string()),
            middle_initial: Some(middle.to_string()),
            suffix: Some(suffix.to_string()),
            last_name: Some(last.to_string()),
            ..Default::default()
        },
        [first, .., last] => NameQuery {
            first_name: Some(first.to_string()),
            last_name: Some(last.to_string()),
            ..Default::default()
        },
    }
}

/// Aggregated cross-check message listing every mismatched field
pub fn mismatch_message(mismatches: &[String]) -> String {
    format!(
        "Mismatch found in the following field(s): {}. Please correct them before submitting again.",
        mismatches.join(", ")
    )
}

/// Rejects the submission when any mismatch was collected
pub fn ensure_no_mismatches(mismatches: Vec<String>) -> LedgerResult<()> {
    if mismatches.is_empty() {
        return Ok(());
    }
    Err(LedgerError::mismatch(mismatch_message(&mismatches), mismatches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reklamap_core::types::BoundaryDisputeForm;

    #[test]
    fn test_validate_signature() {
        assert!(validate_signature(None).is_ok());
        assert!(validate_signature(Some("")).is_ok());
        assert!(validate_signature(Some("sig.PNG")).is_ok());
        assert!(validate_signature(Some("scan.final.pdf")).is_ok());
        assert!(validate_signature(Some("photo.jpeg")).is_ok());

        assert!(validate_signature(Some("sig.gif")).is_err());
        assert!(validate_signature(Some("signature")).is_err());
    }

    #[test]
    fn test_clean_field() {
        assert_eq!(clean_field(Some("  ".into())), None);
        assert_eq!(clean_field(Some("N/A".into())), None);
        assert_eq!(clean_field(Some("none".into())), None);
        assert_eq!(clean_field(Some(" Juan ".into())), Some("Juan".into()));
        assert_eq!(clean_field(None), None);
    }

    #[test]
    fn test_clean_choice() {
        assert_eq!(clean_choice(Some("yes".into()), YES_NO), Some("Yes".into()));
        assert_eq!(clean_choice(Some("Maybe".into()), YES_NO), None);
        assert_eq!(
            clean_choice(Some("not sure".into()), YES_NO_NOT_SURE),
            Some("Not sure".into())
        );
    }

    #[test]
    fn test_clean_detail_boundary() {
        let detail = clean_detail(DetailRecord::BoundaryDispute(BoundaryDisputeForm {
            q4: Some("Perhaps".into()),
            q11: Some("Not sure".into()),
            q6: vec!["Fence".into(), "na".into()],
            description: "  Wall moved  ".into(),
            ..Default::default()
        }));
        let DetailRecord::BoundaryDispute(f) = detail else {
            panic!("type changed");
        };
        assert_eq!(f.q4, None);
        assert_eq!(f.q11.as_deref(), Some("Not sure"));
        assert_eq!(f.q6, vec!["Fence".to_string()]);
        assert_eq!(f.description, "Wall moved");
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("Ana", Some("NA"), "Reyes", None), "Ana Reyes");
        assert_eq!(
            display_name("Jose", Some("P."), "Rizal", Some("Jr.")),
            "Jose P. Rizal Jr."
        );
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("12"), Some(12));
        assert_eq!(parse_number("Blk 3"), Some(3));
        assert_eq!(parse_number(" lot 7a"), Some(7));
        assert_eq!(parse_number("none"), None);
    }

    #[test]
    fn test_name_query() {
        assert_eq!(name_query("Reyes").either_name.as_deref(), Some("Reyes"));

        let q = name_query("Juan Dela Cruz");
        assert_eq!(q.first_name.as_deref(), Some("Juan"));
        assert_eq!(q.middle_initial.as_deref(), Some("Dela"));
        assert_eq!(q.last_name.as_deref(), Some("Cruz"));

        let q = name_query("Jose P. Jr. Rizal");
        assert_eq!(q.suffix.as_deref(), Some("Jr."));
        assert_eq!(q.last_name.as_deref(), Some("Rizal"));

        assert!(name_query("   ").is_empty());
    }

    #[test]
    fn test_ensure_no_mismatches() {
        assert!(ensure_no_mismatches(vec![]).is_ok());
        let err = ensure_no_mismatches(vec!["Party 1: Lot Assignment".into()]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Mismatch found in the following field(s): Party 1: Lot Assignment. \
             Please correct them before submitting again."
        );
    }
}
