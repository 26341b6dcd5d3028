pub mod analytics;
pub mod note;
pub mod patient;
