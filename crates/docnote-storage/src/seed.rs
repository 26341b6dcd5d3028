//! Mock patient directory and note history the app ships with.

use jiff::civil::date;

use docnote_core::models::note::{SoapNote, SoapPayload};
use docnote_core::models::patient::{Patient, PatientStatus};

struct SeedPatient {
    id: &'static str,
    name: &'static str,
    sport: &'static str,
    team: &'static str,
    age: u32,
    status: PatientStatus,
    last_visit: (i16, i8, i8),
}

const PATIENTS: &[SeedPatient] = &[
    SeedPatient {
        id: "1",
        name: "John Doe",
        sport: "Basketball",
        team: "Varsity",
        age: 22,
        status: PatientStatus::Active,
        last_visit: (2024, 2, 20),
    },
    SeedPatient {
        id: "2",
        name: "Jane Smith",
        sport: "Soccer",
        team: "Women's",
        age: 20,
        status: PatientStatus::Active,
        last_visit: (2024, 2, 19),
    },
    SeedPatient {
        id: "3",
        name: "Mike Johnson",
        sport: "Football",
        team: "Varsity",
        age: 21,
        status: PatientStatus::Inactive,
        last_visit: (2024, 2, 18),
    },
    SeedPatient {
        id: "4",
        name: "Sarah Williams",
        sport: "Volleyball",
        team: "Women's",
        age: 19,
        status: PatientStatus::Active,
        last_visit: (2024, 2, 17),
    },
    SeedPatient {
        id: "5",
        name: "Tom Brown",
        sport: "Baseball",
        team: "JV",
        age: 20,
        status: PatientStatus::Active,
        last_visit: (2024, 2, 16),
    },
];

pub fn patients() -> Vec<Patient> {
    PATIENTS
        .iter()
        .map(|s| {
            let (y, m, d) = s.last_visit;
            Patient {
                age: Some(s.age),
                status: s.status,
                last_visit: Some(date(y, m, d)),
                ..Patient::new(s.id, s.name, s.sport, s.team)
            }
        })
        .collect()
}

pub fn notes() -> Vec<SoapNote> {
    vec![
        note(
            "1",
            "1",
            date(2024, 2, 20),
            "Initial Evaluation",
            "Right ankle sprain during basketball practice",
            SoapPayload::new(
                "Patient reports rolling ankle during practice",
                "Swelling observed, limited ROM",
                "Grade 2 lateral ankle sprain",
                "RICE protocol, ankle exercises",
            ),
        ),
        note(
            "2",
            "1",
            date(2024, 2, 22),
            "Follow-up",
            "Ankle rehabilitation progress",
            SoapPayload::new(
                "Decreased pain, feeling more stable",
                "Reduced swelling, improved ROM",
                "Improving as expected",
                "Continue rehab exercises",
            ),
        ),
        note(
            "3",
            "1",
            date(2024, 3, 20),
            "Follow-up",
            "Patient showing improvement in knee mobility. Exercises adjusted.",
            SoapPayload::new(
                "Less stiffness in the knee after warm-up",
                "Knee flexion improved to 125 degrees",
                "Mobility progressing",
                "Progress to single-leg squats",
            ),
        ),
        note(
            "4",
            "2",
            date(2024, 3, 19),
            "Initial Assessment",
            "New ankle sprain assessment. Grade 2 lateral sprain.",
            SoapPayload::new(
                "Inverted ankle landing from a header",
                "Lateral swelling, positive anterior drawer",
                "Grade 2 lateral sprain",
                "Brace, crutches for 48 hours, reassess",
            ),
        ),
        note(
            "5",
            "3",
            date(2024, 3, 19),
            "Treatment",
            "Shoulder rehabilitation exercises progressing well.",
            SoapPayload::new(
                "Mild ache after overhead work",
                "Full passive ROM, 4/5 external rotation strength",
                "Rotator cuff strain, resolving",
                "Add resisted external rotation",
            ),
        ),
    ]
}

fn note(
    id: &str,
    patient_id: &str,
    on: jiff::civil::Date,
    note_type: &str,
    summary: &str,
    soap: SoapPayload,
) -> SoapNote {
    SoapNote {
        id: id.to_string(),
        patient_id: patient_id.to_string(),
        date: on,
        note_type: note_type.to_string(),
        summary: summary.to_string(),
        soap,
    }
}
