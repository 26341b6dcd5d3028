//! docnote-storage
//!
//! The repository interface the screens and the intake workflow read and
//! write through, plus the in-memory implementation seeded with the mock
//! patient directory and note history.

pub mod error;
pub mod memory;
pub mod repository;
pub mod seed;
