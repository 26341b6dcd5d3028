use tokio::sync::RwLock;
use tracing::debug;

use docnote_core::models::note::SoapNote;
use docnote_core::models::patient::Patient;

use crate::error::StorageError;
use crate::repository::{BoxFuture, Repository};
use crate::seed;

#[derive(Debug, Default)]
struct Records {
    patients: Vec<Patient>,
    notes: Vec<SoapNote>,
}

/// Process-local repository. Contents are lost when it is dropped.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    records: RwLock<Records>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(patients: Vec<Patient>, notes: Vec<SoapNote>) -> Self {
        Self {
            records: RwLock::new(Records { patients, notes }),
        }
    }

    /// Loaded with the mock directory and note history.
    pub fn seeded() -> Self {
        Self::with_records(seed::patients(), seed::notes())
    }
}

impl Repository for InMemoryRepository {
    fn get_patient<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Result<Patient, StorageError>> {
        Box::pin(async move {
            let records = self.records.read().await;
            records
                .patients
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or_else(|| StorageError::patient_not_found(id))
        })
    }

    fn list_patients(&self) -> BoxFuture<'_, Result<Vec<Patient>, StorageError>> {
        Box::pin(async move { Ok(self.records.read().await.patients.clone()) })
    }

    fn add_patient(&self, patient: Patient) -> BoxFuture<'_, Result<(), StorageError>> {
        Box::pin(async move {
            let mut records = self.records.write().await;
            if records.patients.iter().any(|p| p.id == patient.id) {
                return Err(StorageError::Duplicate {
                    kind: "patient",
                    id: patient.id,
                });
            }
            debug!(patient_id = %patient.id, "patient added");
            records.patients.push(patient);
            Ok(())
        })
    }

    fn save_note(&self, note: SoapNote) -> BoxFuture<'_, Result<(), StorageError>> {
        Box::pin(async move {
            let mut records = self.records.write().await;
            if !records.patients.iter().any(|p| p.id == note.patient_id) {
                return Err(StorageError::patient_not_found(note.patient_id));
            }
            if records.notes.iter().any(|n| n.id == note.id) {
                return Err(StorageError::Duplicate {
                    kind: "note",
                    id: note.id,
                });
            }
            debug!(note_id = %note.id, patient_id = %note.patient_id, "note saved");
            records.notes.push(note);
            Ok(())
        })
    }

    fn get_note<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Result<SoapNote, StorageError>> {
        Box::pin(async move {
            let records = self.records.read().await;
            records
                .notes
                .iter()
                .find(|n| n.id == id)
                .cloned()
                .ok_or_else(|| StorageError::note_not_found(id))
        })
    }

    fn list_notes(&self) -> BoxFuture<'_, Result<Vec<SoapNote>, StorageError>> {
        Box::pin(async move { Ok(self.records.read().await.notes.clone()) })
    }

    fn notes_for_patient<'a>(
        &'a self,
        patient_id: &'a str,
    ) -> BoxFuture<'a, Result<Vec<SoapNote>, StorageError>> {
        Box::pin(async move {
            let records = self.records.read().await;
            if !records.patients.iter().any(|p| p.id == patient_id) {
                return Err(StorageError::patient_not_found(patient_id));
            }
            // Most recently saved first among notes sharing a date.
            let mut notes: Vec<SoapNote> = records
                .notes
                .iter()
                .rev()
                .filter(|n| n.patient_id == patient_id)
                .cloned()
                .collect();
            notes.sort_by(|a, b| b.date.cmp(&a.date));
            Ok(notes)
        })
    }
}
