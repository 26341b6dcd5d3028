//! The recent-notes list: notes joined with their patient, filtered by
//! period and sorted by date.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::analytics::TimeRange;
use crate::models::note::SoapNote;
use crate::models::patient::Patient;

pub const UNKNOWN_PATIENT: &str = "Unknown patient";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum NoteFilter {
    #[default]
    All,
    ThisWeek,
    ThisMonth,
}

impl NoteFilter {
    pub fn label(self) -> &'static str {
        match self {
            NoteFilter::All => "All Notes",
            NoteFilter::ThisWeek => "This Week",
            NoteFilter::ThisMonth => "This Month",
        }
    }

    fn range(self) -> Option<TimeRange> {
        match self {
            NoteFilter::All => None,
            NoteFilter::ThisWeek => Some(TimeRange::Week),
            NoteFilter::ThisMonth => Some(TimeRange::Month),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum NoteSort {
    #[default]
    Latest,
    Oldest,
}

impl NoteSort {
    pub fn label(self) -> &'static str {
        match self {
            NoteSort::Latest => "Latest",
            NoteSort::Oldest => "Oldest",
        }
    }
}

/// A row on the recent-notes screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RecentNote {
    pub note: SoapNote,
    pub patient_name: String,
    pub sport: String,
}

pub fn recent_notes(
    notes: &[SoapNote],
    patients: &[Patient],
    filter: NoteFilter,
    sort: NoteSort,
    today: jiff::civil::Date,
) -> Vec<RecentNote> {
    let by_id: HashMap<&str, &Patient> = patients.iter().map(|p| (p.id.as_str(), p)).collect();

    let mut rows: Vec<RecentNote> = notes
        .iter()
        .filter(|n| filter.range().is_none_or(|r| r.contains(n.date, today)))
        .map(|n| {
            let patient = by_id.get(n.patient_id.as_str());
            RecentNote {
                note: n.clone(),
                patient_name: patient
                    .map(|p| p.name.clone())
                    .unwrap_or_else(|| UNKNOWN_PATIENT.to_string()),
                sport: patient.map(|p| p.sport.clone()).unwrap_or_default(),
            }
        })
        .collect();

    // Stable sort keeps input order for notes on the same day.
    match sort {
        NoteSort::Latest => rows.sort_by(|a, b| b.note.date.cmp(&a.note.date)),
        NoteSort::Oldest => rows.sort_by(|a, b| a.note.date.cmp(&b.note.date)),
    }
    rows
}
