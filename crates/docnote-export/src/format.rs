use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ExportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Pdf,
    Word,
    Text,
    Email,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Pdf,
        ExportFormat::Word,
        ExportFormat::Text,
        ExportFormat::Email,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Word => "word",
            ExportFormat::Text => "text",
            ExportFormat::Email => "email",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "PDF Document",
            ExportFormat::Word => "Word Document",
            ExportFormat::Text => "Plain Text",
            ExportFormat::Email => "Email",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "Export as a professional PDF document",
            ExportFormat::Word => "Export as an editable Word document",
            ExportFormat::Text => "Export as a simple text file",
            ExportFormat::Email => "Send directly via email",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ExportFormat::ALL
            .into_iter()
            .find(|f| f.id() == wanted)
            .ok_or_else(|| ExportError::UnknownFormat(s.to_string()))
    }
}
