//! Aggregate counts for the analytics and home screens.

use std::collections::BTreeMap;

use crate::models::analytics::{AnalyticsSummary, DistributionEntry, TimeRange};
use crate::models::note::SoapNote;
use crate::models::patient::Patient;

pub fn summarize_analytics(
    patients: &[Patient],
    notes: &[SoapNote],
    range: TimeRange,
    today: jiff::civil::Date,
) -> AnalyticsSummary {
    let count_in = |r: TimeRange| notes.iter().filter(|n| r.contains(n.date, today)).count() as u32;

    let in_range: Vec<&SoapNote> = notes.iter().filter(|n| range.contains(n.date, today)).collect();

    AnalyticsSummary {
        range,
        total_patients: patients.len() as u32,
        active_patients: patients.iter().filter(|p| p.is_active()).count() as u32,
        notes_this_week: count_in(TimeRange::Week),
        notes_this_month: count_in(TimeRange::Month),
        notes_in_range: in_range.len() as u32,
        treatment_types: distribution(in_range.iter().map(|n| n.note_type.as_str())),
        sport_distribution: distribution(patients.iter().map(|p| p.sport.as_str())),
    }
}

/// Count labels, largest first; equal counts are ordered by label.
pub fn distribution<'a>(labels: impl IntoIterator<Item = &'a str>) -> Vec<DistributionEntry> {
    let mut counts: BTreeMap<&str, u32> = BTreeMap::new();
    for label in labels {
        *counts.entry(label).or_default() += 1;
    }

    let max = counts.values().copied().max().unwrap_or(0);
    let mut entries: Vec<DistributionEntry> = counts
        .into_iter()
        .map(|(label, count)| DistributionEntry {
            label: label.to_string(),
            count,
            percent_of_max: if max == 0 { 0 } else { count * 100 / max },
        })
        .collect();

    // BTreeMap already yields labels in order; the stable sort keeps that
    // order among equal counts.
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}
