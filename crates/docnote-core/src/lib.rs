//! docnote-core
//!
//! Pure domain types and the read-side logic of the DocNote screens:
//! patient search, recent-note listing, analytics and the new-patient form.
//! No I/O here; storage and workflow live in their own crates.

pub mod analytics;
pub mod error;
pub mod forms;
pub mod models;
pub mod recent;
pub mod search;
