use docnote_core::models::note::SoapNote;
use tracing::info;

use crate::error::ExportError;
use crate::format::ExportFormat;

/// Export picker for one note.
#[derive(Debug, Default)]
pub struct ExportSheet {
    open: bool,
}

impl ExportSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open the sheet and list the formats on offer.
    pub fn present(&mut self) -> &'static [ExportFormat] {
        self.open = true;
        &ExportFormat::ALL
    }

    pub fn dismiss(&mut self) {
        self.open = false;
    }

    /// Record the chosen format for `note` and close the sheet.
    pub fn choose(&mut self, note: &SoapNote, format: ExportFormat) -> Result<(), ExportError> {
        if !self.open {
            return Err(ExportError::SheetClosed);
        }
        info!(note_id = %note.id, format = %format, "exporting note");
        self.open = false;
        Ok(())
    }
}
