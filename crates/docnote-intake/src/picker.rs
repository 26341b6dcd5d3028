use docnote_core::models::patient::Patient;
use tracing::debug;

use crate::error::IntakeError;

/// The "Select Patient" sheet.
///
/// Holds the directory snapshot it was opened with. A failed selection
/// leaves the sheet open and the snapshot untouched.
#[derive(Debug, Default)]
pub struct PatientPicker {
    patients: Vec<Patient>,
    open: bool,
}

impl PatientPicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open the sheet over `patients`, replacing any previous snapshot.
    pub fn present(&mut self, patients: Vec<Patient>) -> &[Patient] {
        debug!(count = patients.len(), "patient picker opened");
        self.patients = patients;
        self.open = true;
        &self.patients
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    /// Resolve `id` against the directory and close the sheet.
    pub fn select_patient(&mut self, id: &str) -> Result<Patient, IntakeError> {
        if !self.open {
            return Err(IntakeError::Validation(
                "patient picker is not open".to_string(),
            ));
        }
        let patient = self
            .patients
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| IntakeError::NotFound { id: id.to_string() })?;
        self.open = false;
        Ok(patient)
    }

    /// Close without selecting.
    pub fn dismiss(&mut self) {
        self.open = false;
    }
}
