use docnote_intake::error::IntakeError;
use docnote_intake::session::{IntakeSession, RecordingState};
use docnote_intake::summarize::{
    ASSESSMENT_PLACEHOLDER, OBJECTIVE_PLACEHOLDER, PLAN_PLACEHOLDER, SUBJECTIVE_PLACEHOLDER,
    summarize,
};

#[test]
fn summarize_fills_every_section_for_any_input() {
    let long = "x".repeat(10_000);
    for input in ["", "Patient reports knee pain after practice", "\u{1F3C0}", long.as_str()] {
        let payload = summarize(input);
        assert!(payload.is_complete(), "incomplete for {input:?}");
        assert_eq!(payload.subjective, SUBJECTIVE_PLACEHOLDER);
        assert_eq!(payload.objective, OBJECTIVE_PLACEHOLDER);
        assert_eq!(payload.assessment, ASSESSMENT_PLACEHOLDER);
        assert_eq!(payload.plan, PLAN_PLACEHOLDER);
    }
}

#[test]
fn placeholders_name_their_section() {
    let payload = summarize("anything");
    for (section, text) in payload.sections() {
        assert!(text.contains(section.key()), "{text}");
    }
}

#[test]
fn starts_idle_and_empty() {
    let session = IntakeSession::new();
    assert_eq!(session.state(), RecordingState::Idle);
    assert_eq!(session.dictation(), "");
    assert!(session.payload().is_empty());
}

#[test]
fn start_then_stop_populates_payload() {
    let mut session = IntakeSession::new();
    assert_eq!(session.toggle_recording(), RecordingState::Recording);
    session.feed_transcript("Sore hamstring").unwrap();
    assert_eq!(session.toggle_recording(), RecordingState::Idle);
    assert!(!session.is_recording());
    assert!(session.payload().is_complete());
}

#[test]
fn starting_clears_previous_dictation() {
    let mut session = IntakeSession::new();
    session.edit_dictation("old unsaved text").unwrap();
    session.toggle_recording();
    assert_eq!(session.dictation(), "");
}

#[test]
fn dictation_is_read_only_while_recording() {
    let mut session = IntakeSession::new();
    session.start_recording();
    session.feed_transcript("first").unwrap();
    assert!(matches!(
        session.edit_dictation("overwrite"),
        Err(IntakeError::Validation(_))
    ));
    assert_eq!(session.dictation(), "first");
}

#[test]
fn transcript_chunks_accumulate() {
    let mut session = IntakeSession::new();
    session.start_recording();
    session.feed_transcript("Patient reports").unwrap();
    session.feed_transcript("knee pain").unwrap();
    assert_eq!(session.dictation(), "Patient reports knee pain");
}

#[test]
fn transcript_refused_while_idle() {
    let mut session = IntakeSession::new();
    assert!(session.feed_transcript("stray").is_err());
    assert_eq!(session.dictation(), "");
}

#[test]
fn stop_without_start_does_not_summarize() {
    let mut session = IntakeSession::new();
    assert!(!session.stop_recording());
    assert!(session.payload().is_empty());
    assert_eq!(session.finish_recording(), None);
}

#[test]
fn dictation_survives_stop() {
    let mut session = IntakeSession::new();
    session.start_recording();
    session.feed_transcript("Ankle rolled").unwrap();
    session.stop_recording();
    assert_eq!(session.dictation(), "Ankle rolled");
    session.edit_dictation("Ankle rolled on landing").unwrap();
    assert_eq!(session.dictation(), "Ankle rolled on landing");
}
