//! Screens and the parameters carried to them.
//!
//! Parameters are plain values handed from one screen to the next; no
//! screen reads another's state.

use docnote_core::models::note::SoapNote;
use docnote_core::models::patient::Patient;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "screen", content = "params")]
pub enum Route {
    Home,
    Patients,
    RecentNotes,
    Analytics,
    NewSoapNote,
    PatientDetails(PatientDetailsParams),
    SoapNoteDetails { note: SoapNote },
    NewPatient,
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Patients => "Patients",
            Route::RecentNotes => "Recent",
            Route::Analytics => "Analytics",
            Route::NewSoapNote => "NewSOAPNote",
            Route::PatientDetails(_) => "PatientDetails",
            Route::SoapNoteDetails { .. } => "SOAPNoteDetails",
            Route::NewPatient => "NewPatient",
        }
    }
}

/// Bundle accepted by the patient-detail view: `{ patient, newNote }`
/// after intake, or `{ patient, highlightNoteId }` from the recent list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientDetailsParams {
    pub patient: Patient,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_note: Option<SoapNote>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight_note_id: Option<String>,
}

impl PatientDetailsParams {
    pub fn with_new_note(patient: Patient, note: SoapNote) -> Self {
        Self {
            patient,
            new_note: Some(note),
            highlight_note_id: None,
        }
    }
}

/// The front end's screen stack.
pub trait Navigator {
    fn navigate(&mut self, route: Route);

    /// Pop the current screen. Returns false at the root.
    fn go_back(&mut self) -> bool;
}
