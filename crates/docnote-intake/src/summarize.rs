//! Turning raw dictation into the four SOAP sections.
//!
//! Only a placeholder exists: every section gets fixed filler text that
//! names the section. [`Summarizer`] is the seam a transcription and
//! extraction service would plug into.

use docnote_core::models::note::SoapPayload;
use docnote_storage::repository::BoxFuture;

use crate::error::IntakeError;

pub const SUBJECTIVE_PLACEHOLDER: &str = "AI would extract subjective information here";
pub const OBJECTIVE_PLACEHOLDER: &str = "AI would extract objective information here";
pub const ASSESSMENT_PLACEHOLDER: &str = "AI would extract assessment information here";
pub const PLAN_PLACEHOLDER: &str = "AI would extract plan information here";

/// Raw text in, four populated sections out. Ignores the input.
pub fn summarize(_dictation: &str) -> SoapPayload {
    SoapPayload::new(
        SUBJECTIVE_PLACEHOLDER,
        OBJECTIVE_PLACEHOLDER,
        ASSESSMENT_PLACEHOLDER,
        PLAN_PLACEHOLDER,
    )
}

/// Organizes dictation into SOAP sections.
///
/// A result is either a payload with all four sections or an
/// `Integration` error. Callers race the future against the screen's
/// unmount signal and drop it if the screen goes away.
pub trait Summarizer: Send + Sync {
    fn summarize<'a>(
        &'a self,
        dictation: &'a str,
    ) -> BoxFuture<'a, Result<SoapPayload, IntakeError>>;
}

/// Resolves immediately with [`summarize`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderSummarizer;

impl Summarizer for PlaceholderSummarizer {
    fn summarize<'a>(
        &'a self,
        dictation: &'a str,
    ) -> BoxFuture<'a, Result<SoapPayload, IntakeError>> {
        Box::pin(async move { Ok(summarize(dictation)) })
    }
}
