use std::sync::atomic::{AtomicI64, Ordering};

use docnote_core::models::note::{NEW_NOTE_LABEL, SoapNote, SoapPayload};
use docnote_core::models::patient::Patient;

/// Characters of dictation kept in a note's summary.
pub const SUMMARY_CHARS: usize = 100;
pub const ELLIPSIS: &str = "...";

/// Issues note ids from the wall clock in milliseconds, bumped past the
/// previous id so two notes in the same millisecond still differ.
#[derive(Debug, Default)]
pub struct NoteIdGenerator {
    last: AtomicI64,
}

impl NoteIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> String {
        let now = jiff::Timestamp::now().as_millisecond();
        let mut prev = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(prev + 1);
            match self
                .last
                .compare_exchange_weak(prev, candidate, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return candidate.to_string(),
                Err(actual) => prev = actual,
            }
        }
    }
}

/// First [`SUMMARY_CHARS`] characters of `dictation`, then [`ELLIPSIS`].
///
/// The ellipsis is appended even when nothing was cut.
pub fn summary_from(dictation: &str) -> String {
    let mut summary: String = dictation.chars().take(SUMMARY_CHARS).collect();
    summary.push_str(ELLIPSIS);
    summary
}

/// Builds notes for patients chosen in the picker.
#[derive(Debug, Default)]
pub struct NoteFinalizer {
    ids: NoteIdGenerator,
}

impl NoteFinalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finalize with today's local date.
    pub fn finalize(&self, patient: &Patient, dictation: &str, payload: SoapPayload) -> SoapNote {
        self.finalize_on(patient, dictation, payload, jiff::Zoned::now().date())
    }

    pub fn finalize_on(
        &self,
        patient: &Patient,
        dictation: &str,
        payload: SoapPayload,
        date: jiff::civil::Date,
    ) -> SoapNote {
        SoapNote {
            id: self.ids.next_id(),
            patient_id: patient.id.clone(),
            date,
            note_type: NEW_NOTE_LABEL.to_string(),
            summary: summary_from(dictation),
            soap: payload,
        }
    }
}
