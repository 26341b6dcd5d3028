//! The "Add New Patient" form.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;
use crate::models::patient::{Patient, PatientStatus};

const MAX_AGE: u32 = 120;

/// Raw text as typed into the form. Nothing is validated until
/// [`NewPatientForm::into_patient`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct NewPatientForm {
    pub name: String,
    pub sport: String,
    pub team: String,
    pub age: String,
    pub gender: String,
    pub contact_number: String,
    pub emergency_contact: String,
}

impl NewPatientForm {
    /// Validate the form and build an active patient with a fresh id.
    pub fn into_patient(self) -> Result<Patient, CoreError> {
        let name = required("name", &self.name)?;
        let sport = required("sport", &self.sport)?;
        let team = required("team", &self.team)?;
        let age = parse_age(&self.age)?;

        Ok(Patient {
            id: Uuid::new_v4().to_string(),
            name,
            sport,
            team,
            age,
            gender: optional(&self.gender),
            contact_number: optional(&self.contact_number),
            emergency_contact: optional(&self.emergency_contact),
            status: PatientStatus::Active,
            last_visit: None,
        })
    }
}

fn required(field: &str, value: &str) -> Result<String, CoreError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CoreError::validation(field, "is required"));
    }
    Ok(value.to_string())
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn parse_age(value: &str) -> Result<Option<u32>, CoreError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    match value.parse::<u32>() {
        Ok(age) if (1..=MAX_AGE).contains(&age) => Ok(Some(age)),
        Ok(age) => Err(CoreError::validation(
            "age",
            format!("{age} is outside 1..={MAX_AGE}"),
        )),
        Err(_) => Err(CoreError::validation(
            "age",
            format!("{value:?} is not a whole number"),
        )),
    }
}
