//! Employee record, draft and enumerated attributes.
//!
//! # Responsibility
//! - Define the canonical record persisted in the durable slot.
//! - Convert between the typed record and the string-only form draft.
//!
//! # Invariants
//! - `id` is assigned by the store and never changes afterwards.
//! - Department and position only take values from their fixed sets.
//! - Serialized dates are plain `YYYY-MM-DD` strings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Opaque record identifier assigned by the store.
///
/// Kept as a type alias so seed ids (`emp1`) and generated UUID text share
/// one representation.
pub type EmployeeId = String;

/// Wire format for all record dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Organizational unit of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Department {
    Analytics,
    Tech,
    #[serde(rename = "HR")]
    Hr,
    Marketing,
    Sales,
}

impl Department {
    pub const ALL: [Department; 5] = [
        Department::Analytics,
        Department::Tech,
        Department::Hr,
        Department::Marketing,
        Department::Sales,
    ];

    /// Returns the stored/display value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Analytics => "Analytics",
            Self::Tech => "Tech",
            Self::Hr => "HR",
            Self::Marketing => "Marketing",
            Self::Sales => "Sales",
        }
    }

    /// Parses an exact stored value.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|department| department.as_str() == value)
    }
}

impl Display for Department {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Seniority level of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    Junior,
    Medior,
    Senior,
}

impl Position {
    pub const ALL: [Position; 3] = [Position::Junior, Position::Medior, Position::Senior];

    /// Returns the stored/display value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Junior => "Junior",
            Self::Medior => "Medior",
            Self::Senior => "Senior",
        }
    }

    /// Parses an exact stored value.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|position| position.as_str() == value)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical employee record owned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Stable identifier, unique within the collection.
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub date_of_employment: NaiveDate,
    pub date_of_birth: NaiveDate,
    /// Normalized `DDD-DDD-DDDD`; unique across the collection.
    pub phone_number: String,
    /// Unique across the collection (exact string match).
    pub email_address: String,
    pub department: Department,
    pub position: Position,
}

impl Employee {
    /// Returns the record contents without its identity.
    pub fn to_new_employee(&self) -> NewEmployee {
        NewEmployee {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            date_of_employment: self.date_of_employment,
            date_of_birth: self.date_of_birth,
            phone_number: self.phone_number.clone(),
            email_address: self.email_address.clone(),
            department: self.department,
            position: self.position,
        }
    }
}

/// Employee record before the store has assigned an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub date_of_employment: NaiveDate,
    pub date_of_birth: NaiveDate,
    pub phone_number: String,
    pub email_address: String,
    pub department: Department,
    pub position: Position,
}

impl NewEmployee {
    /// Attaches an identity, producing a full record.
    pub fn with_id(self, id: impl Into<EmployeeId>) -> Employee {
        Employee {
            id: id.into(),
            first_name: self.first_name,
            last_name: self.last_name,
            date_of_employment: self.date_of_employment,
            date_of_birth: self.date_of_birth,
            phone_number: self.phone_number,
            email_address: self.email_address,
            department: self.department,
            position: self.position,
        }
    }
}

/// Untyped form state edited by the UI.
///
/// Every field is plain text so incomplete input can be represented and
/// reported field by field. `id` is set only while editing an existing record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeDraft {
    pub id: Option<EmployeeId>,
    pub first_name: String,
    pub last_name: String,
    pub date_of_employment: String,
    pub date_of_birth: String,
    pub phone_number: String,
    pub email_address: String,
    pub department: String,
    pub position: String,
}

impl EmployeeDraft {
    /// Converts the draft into a typed record body.
    ///
    /// Callers are expected to run validation first; this only reports the
    /// first field that cannot be converted.
    pub fn to_new_employee(&self) -> Result<NewEmployee, DraftConversionError> {
        let date_of_employment = parse_date(&self.date_of_employment)
            .ok_or(DraftConversionError::InvalidField("dateOfEmployment"))?;
        let date_of_birth = parse_date(&self.date_of_birth)
            .ok_or(DraftConversionError::InvalidField("dateOfBirth"))?;
        let department = Department::parse(self.department.trim())
            .ok_or(DraftConversionError::InvalidField("department"))?;
        let position = Position::parse(self.position.trim())
            .ok_or(DraftConversionError::InvalidField("position"))?;

        Ok(NewEmployee {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            date_of_employment,
            date_of_birth,
            phone_number: self.phone_number.trim().to_string(),
            email_address: self.email_address.trim().to_string(),
            department,
            position,
        })
    }
}

impl From<&Employee> for EmployeeDraft {
    fn from(value: &Employee) -> Self {
        Self {
            id: Some(value.id.clone()),
            first_name: value.first_name.clone(),
            last_name: value.last_name.clone(),
            date_of_employment: format_date(value.date_of_employment),
            date_of_birth: format_date(value.date_of_birth),
            phone_number: value.phone_number.clone(),
            email_address: value.email_address.clone(),
            department: value.department.as_str().to_string(),
            position: value.position.as_str().to_string(),
        }
    }
}

/// Draft could not be turned into a typed record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftConversionError {
    /// Field value (named by its wire key) is not convertible.
    InvalidField(&'static str),
}

impl Display for DraftConversionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidField(field) => write!(f, "draft field `{field}` is not convertible"),
        }
    }
}

impl Error for DraftConversionError {}

/// Parses a strict `YYYY-MM-DD` calendar date.
///
/// Rejects overflowing components (`2021-02-30`) and non-padded forms.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    let bytes = trimmed.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(index, byte)| index == 4 || index == 7 || byte.is_ascii_digit());
    if !digits_ok {
        return None;
    }

    let year = trimmed[0..4].parse::<i32>().ok()?;
    let month = trimmed[5..7].parse::<u32>().ok()?;
    let day = trimmed[8..10].parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Formats a date in wire form.
pub fn format_date(value: NaiveDate) -> String {
    value.format(DATE_FORMAT).to_string()
}
