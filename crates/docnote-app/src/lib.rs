//! docnote-app library root.
//!
//! Re-exports the front end's modules so integration tests can drive the
//! screens without a terminal.

pub mod command;
pub mod config;
pub mod logging;
pub mod render;
pub mod shell;
