use std::sync::Arc;

use docnote_core::models::note::SoapPayload;
use docnote_core::models::patient::Patient;
use docnote_storage::repository::Repository;
use tracing::{info, warn};

use crate::error::IntakeError;
use crate::finalize::NoteFinalizer;
use crate::mount::Mounted;
use crate::navigation::{PatientDetailsParams, Route};
use crate::picker::PatientPicker;
use crate::session::{IntakeSession, RecordingState};
use crate::summarize::Summarizer;

/// Runs the intake workflow for one mount of the new-note screen.
///
/// The finalizer is shared across mounts so note ids stay unique for the
/// whole app session.
pub struct IntakeController {
    repo: Arc<dyn Repository>,
    summarizer: Arc<dyn Summarizer>,
    finalizer: Arc<NoteFinalizer>,
    mounted: Mounted,
    session: IntakeSession,
    picker: PatientPicker,
}

impl IntakeController {
    pub fn new(
        repo: Arc<dyn Repository>,
        summarizer: Arc<dyn Summarizer>,
        finalizer: Arc<NoteFinalizer>,
        mounted: Mounted,
    ) -> Self {
        Self {
            repo,
            summarizer,
            finalizer,
            mounted,
            session: IntakeSession::new(),
            picker: PatientPicker::new(),
        }
    }

    pub fn session(&self) -> &IntakeSession {
        &self.session
    }

    pub fn picker(&self) -> &PatientPicker {
        &self.picker
    }

    pub fn state(&self) -> RecordingState {
        self.session.state()
    }

    pub fn payload(&self) -> &SoapPayload {
        self.session.payload()
    }

    /// Start recording, or stop and summarize. Returns the new state.
    pub async fn toggle_recording(&mut self) -> Result<RecordingState, IntakeError> {
        if self.session.is_recording() {
            self.stop_recording().await?;
        } else {
            self.session.start_recording();
        }
        Ok(self.session.state())
    }

    /// Stop recording and summarize the dictation.
    ///
    /// Returns `Ok(false)` without calling the summarizer when nothing was
    /// recording. The session is `Idle` before the summarizer is awaited.
    /// If the screen unmounts first, the summary is dropped and `Cancelled`
    /// is returned. A summarizer error leaves the previous payload in place.
    pub async fn stop_recording(&mut self) -> Result<bool, IntakeError> {
        let Some(dictation) = self.session.finish_recording() else {
            return Ok(false);
        };

        let mut mounted = self.mounted.clone();
        let outcome = tokio::select! {
            biased;
            _ = mounted.unmounted() => None,
            result = self.summarizer.summarize(&dictation) => Some(result),
        };

        match outcome {
            Some(Ok(payload)) if self.mounted.is_mounted() => {
                self.session.apply_summary(payload);
                Ok(true)
            }
            Some(Ok(_)) | None => {
                info!("summary discarded, intake screen unmounted");
                Err(IntakeError::Cancelled)
            }
            Some(Err(e)) => {
                warn!(error = %e, "summarization failed");
                Err(e)
            }
        }
    }

    pub fn feed_transcript(&mut self, chunk: &str) -> Result<(), IntakeError> {
        self.session.feed_transcript(chunk)
    }

    pub fn edit_dictation(&mut self, text: impl Into<String>) -> Result<(), IntakeError> {
        self.session.edit_dictation(text)
    }

    /// Open the picker over the current directory.
    pub async fn open_picker(&mut self) -> Result<&[Patient], IntakeError> {
        let patients = self.repo.list_patients().await?;
        Ok(self.picker.present(patients))
    }

    pub fn dismiss_picker(&mut self) {
        self.picker.dismiss();
    }

    /// Pick a patient, finalize the note and return the route to the
    /// patient-detail view carrying `{ patient, newNote }`.
    pub async fn select_patient(&mut self, id: &str) -> Result<Route, IntakeError> {
        if !self.mounted.is_mounted() {
            return Err(IntakeError::Cancelled);
        }
        let patient = self.picker.select_patient(id)?;
        let note = self.finalizer.finalize(
            &patient,
            self.session.dictation(),
            self.session.payload().clone(),
        );
        self.repo.save_note(note.clone()).await?;

        info!(note_id = %note.id, patient_id = %patient.id, "soap note finalized");
        Ok(Route::PatientDetails(PatientDetailsParams::with_new_note(
            patient, note,
        )))
    }
}
