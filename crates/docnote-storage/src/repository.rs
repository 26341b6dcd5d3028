use std::future::Future;
use std::pin::Pin;

use docnote_core::models::note::SoapNote;
use docnote_core::models::patient::Patient;

use crate::error::StorageError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Queryable collection of patients and their notes, keyed by id.
///
/// Screens and the intake workflow depend only on this trait. The in-memory
/// implementation in [`crate::memory`] backs the app and the tests.
pub trait Repository: Send + Sync {
    fn get_patient<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Result<Patient, StorageError>>;

    /// All patients in directory order.
    fn list_patients(&self) -> BoxFuture<'_, Result<Vec<Patient>, StorageError>>;

    /// Fails with `Duplicate` if the id is taken.
    fn add_patient(&self, patient: Patient) -> BoxFuture<'_, Result<(), StorageError>>;

    /// Fails with `NotFound` if the note's patient is unknown, or
    /// `Duplicate` if the note id is taken.
    fn save_note(&self, note: SoapNote) -> BoxFuture<'_, Result<(), StorageError>>;

    fn get_note<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Result<SoapNote, StorageError>>;

    /// All notes in the order they were saved.
    fn list_notes(&self) -> BoxFuture<'_, Result<Vec<SoapNote>, StorageError>>;

    /// One patient's notes, newest first. Unknown patient is `NotFound`.
    fn notes_for_patient<'a>(
        &'a self,
        patient_id: &'a str,
    ) -> BoxFuture<'a, Result<Vec<SoapNote>, StorageError>>;
}
