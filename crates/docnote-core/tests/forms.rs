use docnote_core::error::CoreError;
use docnote_core::forms::NewPatientForm;
use docnote_core::models::patient::PatientStatus;

fn filled() -> NewPatientForm {
    NewPatientForm {
        name: "  Sarah Williams ".to_string(),
        sport: "Volleyball".to_string(),
        team: "Women's".to_string(),
        age: "19".to_string(),
        gender: String::new(),
        contact_number: "555-0100".to_string(),
        emergency_contact: "  ".to_string(),
    }
}

#[test]
fn valid_form_builds_active_patient() {
    let patient = filled().into_patient().unwrap();
    assert_eq!(patient.name, "Sarah Williams");
    assert_eq!(patient.age, Some(19));
    assert_eq!(patient.gender, None);
    assert_eq!(patient.contact_number.as_deref(), Some("555-0100"));
    assert_eq!(patient.emergency_contact, None);
    assert_eq!(patient.status, PatientStatus::Active);
    assert!(uuid::Uuid::parse_str(&patient.id).is_ok());
}

#[test]
fn each_new_patient_gets_a_fresh_id() {
    let a = filled().into_patient().unwrap();
    let b = filled().into_patient().unwrap();
    assert_ne!(a.id, b.id);
}

#[test]
fn missing_name_is_rejected() {
    let form = NewPatientForm {
        name: "   ".to_string(),
        ..filled()
    };
    match form.into_patient() {
        Err(CoreError::Validation { field, .. }) => assert_eq!(field, "name"),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn age_must_be_a_plausible_whole_number() {
    for bad in ["abc", "0", "121", "19.5"] {
        let form = NewPatientForm {
            age: bad.to_string(),
            ..filled()
        };
        let err = form.into_patient().unwrap_err();
        assert!(err.to_string().starts_with("invalid age"), "{bad}: {err}");
    }
}

#[test]
fn blank_age_is_allowed() {
    let form = NewPatientForm {
        age: String::new(),
        ..filled()
    };
    assert_eq!(form.into_patient().unwrap().age, None);
}
