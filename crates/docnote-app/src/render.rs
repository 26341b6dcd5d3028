//! Plain-text renderings of each screen.

use docnote_core::forms::NewPatientForm;
use docnote_core::models::analytics::{AnalyticsSummary, DistributionEntry};
use docnote_core::models::note::SoapNote;
use docnote_core::models::patient::Patient;
use docnote_core::recent::{NoteFilter, NoteSort, RecentNote};
use docnote_export::format::ExportFormat;
use docnote_intake::session::IntakeSession;

const EMPTY_SECTION: &str = "AI will extract this section from your dictation";
const BAR_WIDTH: u32 = 20;

pub fn help() -> String {
    [
        "Commands:",
        "  home | patients [query] | recent [all|week|month] [latest|oldest]",
        "  analytics [week|month|year] | patient <id> | note <id>",
        "  new-note, then: record | say <text> | type <text> | save | pick <id> | cancel",
        "  export [pdf|word|text|email]   (on a note)",
        "  new-patient, then: set <field> <value> | submit",
        "  back | help | quit",
    ]
    .join("\n")
}

pub fn home(trainer_name: &str, summary: &AnalyticsSummary, total_notes: usize) -> String {
    let mut out = String::from("DocNote\nYour Professional Athletic Training Assistant\n\n");
    out.push_str(&format!("Welcome back, {trainer_name}.\n\n"));
    out.push_str(&format!(
        "  {:>4}  Active Patients\n  {:>4}  SOAP Notes\n\n",
        summary.active_patients, total_notes
    ));
    out.push_str("Quick Actions\n");
    out.push_str("  new-note     Create a new session note for a patient\n");
    out.push_str("  patients     View and manage your patients\n");
    out.push_str("  recent       View and manage recent session notes\n");
    out.push_str("  analytics    View patient treatment insights\n");
    out
}

pub fn patients(list: &[&Patient], query: &str) -> String {
    let mut out = String::from("Patients\n");
    if !query.is_empty() {
        out.push_str(&format!("Search: {query:?}\n"));
    }
    if list.is_empty() {
        out.push_str("  No patients found.\n");
    }
    for p in list {
        out.push_str(&format!("  [{}] {}  {}", p.id, p.name, p.sport_and_team()));
        if let Some(age) = p.age {
            out.push_str(&format!("  {age} years"));
        }
        out.push_str(&format!("  {}", p.status));
        if let Some(last) = p.last_visit {
            out.push_str(&format!("  Last visit: {last}"));
        }
        out.push('\n');
    }
    out
}

pub fn patient_details(patient: &Patient, notes: &[SoapNote], highlight: Option<&str>) -> String {
    let mut out = format!("{}\n  {}\n", patient.name, patient.sport_and_team());
    if let Some(age) = patient.age {
        out.push_str(&format!("  {age} years\n"));
    }
    out.push_str("\nSOAP Notes History\n");
    if notes.is_empty() {
        out.push_str("  No notes yet.\n");
    }
    for note in notes {
        let marker = if highlight == Some(note.id.as_str()) { "*" } else { " " };
        out.push_str(&format!(
            " {marker}[{}] {}  {}\n      {}\n",
            note.id, note.note_type, note.date, note.summary
        ));
    }
    out
}

pub fn note_details(note: &SoapNote) -> String {
    let mut out = format!("{}  {}\n{}\n\n", note.note_type, note.date, note.summary);
    for (section, text) in note.soap.sections() {
        out.push_str(&format!("{}\n  {}\n", section.label(), text));
    }
    out
}

pub fn recent(rows: &[RecentNote], filter: NoteFilter, sort: NoteSort) -> String {
    let mut out = format!("Recent Notes ({}, {})\n", filter.label(), sort.label());
    if rows.is_empty() {
        out.push_str("  No notes in this period.\n");
    }
    for row in rows {
        out.push_str(&format!(
            "  [{}] {}  {} \u{2022} {}  {}\n      {}\n",
            row.note.id,
            row.patient_name,
            row.sport,
            row.note.note_type,
            row.note.date,
            row.note.summary
        ));
    }
    out
}

pub fn analytics(summary: &AnalyticsSummary) -> String {
    let mut out = format!("Analytics ({})\n\n", summary.range.label());
    out.push_str(&format!("  Total Patients   {}\n", summary.total_patients));
    out.push_str(&format!("  Active Cases     {}\n", summary.active_patients));
    out.push_str(&format!("  Notes This Week  {}\n", summary.notes_this_week));
    out.push_str(&format!("  Monthly Notes    {}\n\n", summary.notes_this_month));
    out.push_str(&distribution("Treatment Distribution", &summary.treatment_types));
    out.push_str(&distribution("Sport Distribution", &summary.sport_distribution));
    out
}

fn distribution(title: &str, entries: &[DistributionEntry]) -> String {
    let mut out = format!("{title}\n");
    if entries.is_empty() {
        out.push_str("  (none)\n");
    }
    for e in entries {
        let filled = (e.percent_of_max * BAR_WIDTH / 100) as usize;
        out.push_str(&format!("  {:<16}{:>4}  {}\n", e.label, e.count, "#".repeat(filled)));
    }
    out.push('\n');
    out
}

pub fn intake(session: &IntakeSession, picker: Option<&[Patient]>) -> String {
    let mut out = String::from("New SOAP Note\n\n");
    if session.is_recording() {
        out.push_str("(*) Recording Session Notes   -- `record` to stop\n");
    } else {
        out.push_str("( ) Start Session Recording   -- `record` to start\n");
    }
    out.push_str(&format!("Dictation: {}\n\n", session.dictation()));
    for (section, text) in session.payload().sections() {
        let text = if text.is_empty() { EMPTY_SECTION } else { text };
        out.push_str(&format!("{}\n  {}\n", section.label(), text));
    }
    if let Some(patients) = picker {
        out.push_str("\nSelect Patient (`pick <id>`, `cancel`)\n");
        for p in patients {
            out.push_str(&format!("  [{}] {}  {}\n", p.id, p.name, p.sport_and_team()));
        }
    }
    out
}

pub fn export_sheet(formats: &[ExportFormat]) -> String {
    let mut out = String::from("Export Note\nChoose your preferred export format\n");
    for f in formats {
        out.push_str(&format!("  {:<6} {}  {}\n", f.id(), f.name(), f.description()));
    }
    out
}

pub fn new_patient(form: &NewPatientForm) -> String {
    let fields = [
        ("name", "Full Name", &form.name),
        ("sport", "Sport", &form.sport),
        ("team", "Team", &form.team),
        ("age", "Age", &form.age),
        ("gender", "Gender", &form.gender),
        ("contact", "Contact Number", &form.contact_number),
        ("emergency", "Emergency Contact", &form.emergency_contact),
    ];
    let mut out = String::from("Add New Patient\n");
    for (key, label, value) in fields {
        out.push_str(&format!("  {label:<18} {value}   (set {key} ...)\n"));
    }
    out.push_str("`submit` to save\n");
    out
}
