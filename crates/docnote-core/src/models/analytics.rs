use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Reporting window selectable on the analytics screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TimeRange {
    #[default]
    Week,
    Month,
    Year,
}

impl TimeRange {
    pub const ALL: [TimeRange; 3] = [TimeRange::Week, TimeRange::Month, TimeRange::Year];

    pub fn label(self) -> &'static str {
        match self {
            TimeRange::Week => "Week",
            TimeRange::Month => "Month",
            TimeRange::Year => "Year",
        }
    }

    /// Whether `date` falls in the same ISO week, calendar month or calendar
    /// year as `today`.
    pub fn contains(self, date: jiff::civil::Date, today: jiff::civil::Date) -> bool {
        match self {
            TimeRange::Week => {
                let (a, b) = (date.iso_week_date(), today.iso_week_date());
                a.year() == b.year() && a.week() == b.week()
            }
            TimeRange::Month => date.year() == today.year() && date.month() == today.month(),
            TimeRange::Year => date.year() == today.year(),
        }
    }
}

/// One bar in a distribution card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DistributionEntry {
    pub label: String,
    pub count: u32,
    /// Bar length relative to the largest entry, 0..=100.
    pub percent_of_max: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AnalyticsSummary {
    pub range: TimeRange,
    pub total_patients: u32,
    pub active_patients: u32,
    pub notes_this_week: u32,
    pub notes_this_month: u32,
    pub notes_in_range: u32,
    pub treatment_types: Vec<DistributionEntry>,
    pub sport_distribution: Vec<DistributionEntry>,
}
