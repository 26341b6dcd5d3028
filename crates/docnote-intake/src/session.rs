use docnote_core::models::note::SoapPayload;
use tracing::{debug, info};

use crate::error::IntakeError;
use crate::summarize::summarize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecordingState {
    #[default]
    Idle,
    Recording,
}

/// Note composer state for one mount of the intake screen.
///
/// `Idle -> Recording` clears the dictation buffer. `Recording -> Idle`
/// replaces the SOAP payload with a fresh summary. While recording, the
/// buffer only grows through [`IntakeSession::feed_transcript`]; direct
/// edits are refused.
#[derive(Debug, Default)]
pub struct IntakeSession {
    state: RecordingState,
    dictation: String,
    payload: SoapPayload,
}

impl IntakeSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RecordingState {
        self.state
    }

    pub fn is_recording(&self) -> bool {
        self.state == RecordingState::Recording
    }

    pub fn dictation(&self) -> &str {
        &self.dictation
    }

    pub fn payload(&self) -> &SoapPayload {
        &self.payload
    }

    /// Flip the recording state. Stopping summarizes synchronously with the
    /// placeholder step. Returns the new state.
    pub fn toggle_recording(&mut self) -> RecordingState {
        match self.state {
            RecordingState::Idle => self.start_recording(),
            RecordingState::Recording => {
                self.stop_recording();
            }
        }
        self.state
    }

    /// Begin a new recording, discarding any unsaved dictation.
    /// No-op if already recording.
    pub fn start_recording(&mut self) {
        if self.is_recording() {
            return;
        }
        self.dictation.clear();
        self.state = RecordingState::Recording;
        info!("recording started");
    }

    /// Stop and summarize. Returns false, without summarizing, when there
    /// was no recording to stop.
    pub fn stop_recording(&mut self) -> bool {
        match self.finish_recording() {
            Some(dictation) => {
                self.apply_summary(summarize(&dictation));
                true
            }
            None => false,
        }
    }

    /// The `Recording -> Idle` half of a stop, without summarizing.
    ///
    /// Returns a snapshot of the dictation for an async summarizer, or
    /// `None` if the session was idle.
    pub fn finish_recording(&mut self) -> Option<String> {
        if !self.is_recording() {
            return None;
        }
        self.state = RecordingState::Idle;
        info!(chars = self.dictation.chars().count(), "recording stopped");
        Some(self.dictation.clone())
    }

    /// Overwrite all four sections at once.
    pub fn apply_summary(&mut self, payload: SoapPayload) {
        debug!("soap payload replaced");
        self.payload = payload;
    }

    /// Append transcribed text. Only accepted while recording.
    pub fn feed_transcript(&mut self, chunk: &str) -> Result<(), IntakeError> {
        if !self.is_recording() {
            return Err(IntakeError::Validation(
                "transcript arrived while not recording".to_string(),
            ));
        }
        if !self.dictation.is_empty() && !chunk.is_empty() {
            self.dictation.push(' ');
        }
        self.dictation.push_str(chunk);
        Ok(())
    }

    /// Replace the dictation text. Refused while recording.
    pub fn edit_dictation(&mut self, text: impl Into<String>) -> Result<(), IntakeError> {
        if self.is_recording() {
            return Err(IntakeError::Validation(
                "dictation is read-only while recording".to_string(),
            ));
        }
        self.dictation = text.into();
        Ok(())
    }
}
