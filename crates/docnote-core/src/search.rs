//! Patient list search.

use crate::models::patient::Patient;

/// Case-insensitive substring match against name, sport or team.
///
/// The query is matched as typed, spaces included. An empty query returns
/// every patient. Input order is preserved.
pub fn filter_patients<'a>(patients: &'a [Patient], query: &str) -> Vec<&'a Patient> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return patients.iter().collect();
    }

    patients
        .iter()
        .filter(|p| matches(p, &needle))
        .collect()
}

fn matches(patient: &Patient, needle: &str) -> bool {
    [&patient.name, &patient.sport, &patient.team]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}
