//! docnote-intake
//!
//! The SOAP note intake workflow: recording toggle, placeholder
//! summarization, patient picker, note finalization and the handoff to the
//! patient-detail view.
//!
//! [`session::IntakeSession`] is the synchronous state machine.
//! [`controller::IntakeController`] drives the same transitions against a
//! [`docnote_storage::repository::Repository`] and an async
//! [`summarize::Summarizer`], cancelling in-flight work when the screen
//! unmounts.

pub mod controller;
pub mod error;
pub mod finalize;
pub mod mount;
pub mod navigation;
pub mod picker;
pub mod session;
pub mod summarize;
