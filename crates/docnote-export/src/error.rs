use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("unknown export format: {0}")]
    UnknownFormat(String),

    #[error("export sheet is not open")]
    SheetClosed,
}
