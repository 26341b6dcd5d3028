use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// An athlete under the trainer's care.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub sport: String,
    pub team: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub emergency_contact: Option<String>,
    #[serde(default)]
    pub status: PatientStatus,
    #[serde(default)]
    #[ts(type = "string | null")]
    pub last_visit: Option<jiff::civil::Date>,
}

impl Patient {
    /// Minimal record as listed by the intake picker.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        sport: impl Into<String>,
        team: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sport: sport.into(),
            team: team.into(),
            age: None,
            gender: None,
            contact_number: None,
            emergency_contact: None,
            status: PatientStatus::Active,
            last_visit: None,
        }
    }

    /// `"Basketball • Varsity"`, the subtitle shown under a patient's name.
    pub fn sport_and_team(&self) -> String {
        format!("{} \u{2022} {}", self.sport, self.team)
    }

    pub fn is_active(&self) -> bool {
        self.status == PatientStatus::Active
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PatientStatus {
    #[default]
    Active,
    Inactive,
}

impl std::fmt::Display for PatientStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatientStatus::Active => f.write_str("Active"),
            PatientStatus::Inactive => f.write_str("Inactive"),
        }
    }
}
