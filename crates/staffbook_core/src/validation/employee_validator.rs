//! Employee draft rules.
//!
//! Rules run in a fixed order and write into one field map, so a later rule
//! replaces an earlier failure on the same field (employment-before-birth wins
//! over a generic date failure on `dateOfEmployment`).

use crate::model::employee::{parse_date, Department, EmployeeDraft, Position};
use crate::store::employee_store::EmployeeLookup;
use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{3}-\d{3}-\d{4}$").expect("valid phone regex"));

/// Draft field, named by its wire key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmployeeField {
    FirstName,
    LastName,
    DateOfEmployment,
    DateOfBirth,
    PhoneNumber,
    EmailAddress,
    Department,
    Position,
}

impl EmployeeField {
    /// Fields that must be non-empty.
    pub const REQUIRED: [EmployeeField; 8] = [
        EmployeeField::FirstName,
        EmployeeField::LastName,
        EmployeeField::DateOfEmployment,
        EmployeeField::DateOfBirth,
        EmployeeField::PhoneNumber,
        EmployeeField::EmailAddress,
        EmployeeField::Department,
        EmployeeField::Position,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::DateOfEmployment => "dateOfEmployment",
            Self::DateOfBirth => "dateOfBirth",
            Self::PhoneNumber => "phoneNumber",
            Self::EmailAddress => "emailAddress",
            Self::Department => "department",
            Self::Position => "position",
        }
    }

    fn value(self, draft: &EmployeeDraft) -> &str {
        let raw = match self {
            Self::FirstName => &draft.first_name,
            Self::LastName => &draft.last_name,
            Self::DateOfEmployment => &draft.date_of_employment,
            Self::DateOfBirth => &draft.date_of_birth,
            Self::PhoneNumber => &draft.phone_number,
            Self::EmailAddress => &draft.email_address,
            Self::Department => &draft.department,
            Self::Position => &draft.position,
        };
        raw.trim()
    }
}

impl Display for EmployeeField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure reason; serialized form doubles as the translation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationCode {
    RequiredField,
    InvalidEmail,
    InvalidPhone,
    InvalidDate,
    EmploymentDateAfterBirth,
    InvalidOption,
    EmailTaken,
    PhoneTaken,
}

impl ValidationCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RequiredField => "requiredField",
            Self::InvalidEmail => "invalidEmail",
            Self::InvalidPhone => "invalidPhone",
            Self::InvalidDate => "invalidDate",
            Self::EmploymentDateAfterBirth => "employmentDateAfterBirth",
            Self::InvalidOption => "invalidOption",
            Self::EmailTaken => "emailTaken",
            Self::PhoneTaken => "phoneTaken",
        }
    }
}

impl Display for ValidationCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field to failure map. Empty means the draft is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationReport {
    errors: BTreeMap<EmployeeField, ValidationCode>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: EmployeeField) -> Option<ValidationCode> {
        self.errors.get(&field).copied()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterates failures in field order.
    pub fn iter(&self) -> impl Iterator<Item = (EmployeeField, ValidationCode)> + '_ {
        self.errors.iter().map(|(field, code)| (*field, *code))
    }

    /// Clears the failure for one field, as the form does when it is edited.
    pub fn clear(&mut self, field: EmployeeField) -> Option<ValidationCode> {
        self.errors.remove(&field)
    }

    fn set(&mut self, field: EmployeeField, code: ValidationCode) {
        self.errors.insert(field, code);
    }
}

impl Display for ValidationReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, code) in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{field}={code}")?;
            first = false;
        }
        Ok(())
    }
}

/// Validates a draft against the local current date.
pub fn validate_employee_now(
    draft: &EmployeeDraft,
    lookup: &impl EmployeeLookup,
) -> ValidationReport {
    validate_employee(draft, lookup, Local::now().date_naive())
}

/// Validates a draft.
///
/// `today` is the latest acceptable date for both date fields. Uniqueness is
/// only checked once every other rule has passed; the draft's own `id` is
/// excluded so an unchanged record can be saved.
pub fn validate_employee(
    draft: &EmployeeDraft,
    lookup: &impl EmployeeLookup,
    today: NaiveDate,
) -> ValidationReport {
    let mut report = ValidationReport::default();

    for field in EmployeeField::REQUIRED {
        if field.value(draft).is_empty() {
            report.set(field, ValidationCode::RequiredField);
        }
    }

    let email = EmployeeField::EmailAddress.value(draft);
    if !email.is_empty() && !EMAIL_RE.is_match(email) {
        report.set(EmployeeField::EmailAddress, ValidationCode::InvalidEmail);
    }

    let phone = EmployeeField::PhoneNumber.value(draft);
    if !phone.is_empty() && !PHONE_RE.is_match(phone) {
        report.set(EmployeeField::PhoneNumber, ValidationCode::InvalidPhone);
    }

    let employed = check_date(&mut report, draft, EmployeeField::DateOfEmployment, today);
    let born = check_date(&mut report, draft, EmployeeField::DateOfBirth, today);
    if let (Some(employed), Some(born)) = (employed, born) {
        if employed < born {
            report.set(
                EmployeeField::DateOfEmployment,
                ValidationCode::EmploymentDateAfterBirth,
            );
        }
    }

    let department = EmployeeField::Department.value(draft);
    if !department.is_empty() && Department::parse(department).is_none() {
        report.set(EmployeeField::Department, ValidationCode::InvalidOption);
    }
    let position = EmployeeField::Position.value(draft);
    if !position.is_empty() && Position::parse(position).is_none() {
        report.set(EmployeeField::Position, ValidationCode::InvalidOption);
    }

    if report.is_valid() {
        let exclude_id = draft.id.as_deref().filter(|id| !id.is_empty());
        if lookup.is_email_taken(email, exclude_id) {
            report.set(EmployeeField::EmailAddress, ValidationCode::EmailTaken);
        }
        if lookup.is_phone_number_taken(phone, exclude_id) {
            report.set(EmployeeField::PhoneNumber, ValidationCode::PhoneTaken);
        }
    }

    report
}

/// Parses one date field, recording `invalidDate` on failure.
///
/// A well-formed date after `today` is flagged but still returned, so the
/// ordering rule sees it. Empty input is left to the presence rule.
fn check_date(
    report: &mut ValidationReport,
    draft: &EmployeeDraft,
    field: EmployeeField,
    today: NaiveDate,
) -> Option<NaiveDate> {
    let raw = field.value(draft);
    if raw.is_empty() {
        return None;
    }
    let date = parse_date(raw);
    if date.map_or(true, |date| date > today) {
        report.set(field, ValidationCode::InvalidDate);
    }
    date
}
