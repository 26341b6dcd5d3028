//! docnote-export
//!
//! The "Export Note" sheet on the note-detail view. Formats are offered
//! and the choice is logged; no document is produced or sent.

pub mod error;
pub mod format;
pub mod sheet;
