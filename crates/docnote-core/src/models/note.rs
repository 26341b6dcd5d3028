use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Label given to notes composed through the intake workflow.
pub const NEW_NOTE_LABEL: &str = "New Note";

/// A finalized SOAP note for one patient encounter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SoapNote {
    pub id: String,
    pub patient_id: String,
    /// Calendar date only, serialized as `YYYY-MM-DD`.
    #[ts(type = "string")]
    pub date: jiff::civil::Date,
    #[serde(rename = "type")]
    pub note_type: String,
    pub summary: String,
    pub soap: SoapPayload,
}

/// The four sections of a SOAP note.
///
/// Every section is always present. A section that was never filled in is
/// the empty string, both in memory and on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default, deny_unknown_fields)]
#[ts(export)]
pub struct SoapPayload {
    pub subjective: String,
    pub objective: String,
    pub assessment: String,
    pub plan: String,
}

impl SoapPayload {
    pub fn new(
        subjective: impl Into<String>,
        objective: impl Into<String>,
        assessment: impl Into<String>,
        plan: impl Into<String>,
    ) -> Self {
        Self {
            subjective: subjective.into(),
            objective: objective.into(),
            assessment: assessment.into(),
            plan: plan.into(),
        }
    }

    pub fn get(&self, section: SoapSection) -> &str {
        match section {
            SoapSection::Subjective => &self.subjective,
            SoapSection::Objective => &self.objective,
            SoapSection::Assessment => &self.assessment,
            SoapSection::Plan => &self.plan,
        }
    }

    /// Sections in display order, paired with their text.
    pub fn sections(&self) -> [(SoapSection, &str); 4] {
        SoapSection::ALL.map(|s| (s, self.get(s)))
    }

    /// True once every section has text.
    pub fn is_complete(&self) -> bool {
        SoapSection::ALL.iter().all(|s| !self.get(*s).is_empty())
    }

    pub fn is_empty(&self) -> bool {
        SoapSection::ALL.iter().all(|s| self.get(*s).is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SoapSection {
    Subjective,
    Objective,
    Assessment,
    Plan,
}

impl SoapSection {
    pub const ALL: [SoapSection; 4] = [
        SoapSection::Subjective,
        SoapSection::Objective,
        SoapSection::Assessment,
        SoapSection::Plan,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SoapSection::Subjective => "Subjective",
            SoapSection::Objective => "Objective",
            SoapSection::Assessment => "Assessment",
            SoapSection::Plan => "Plan",
        }
    }

    /// Lowercase key, as used in the serialized payload.
    pub fn key(self) -> &'static str {
        match self {
            SoapSection::Subjective => "subjective",
            SoapSection::Objective => "objective",
            SoapSection::Assessment => "assessment",
            SoapSection::Plan => "plan",
        }
    }
}
