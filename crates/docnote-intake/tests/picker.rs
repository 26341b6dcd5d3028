use docnote_core::models::patient::Patient;
use docnote_intake::error::IntakeError;
use docnote_intake::picker::PatientPicker;

fn directory() -> Vec<Patient> {
    vec![
        Patient::new("1", "John Doe", "Basketball", "Varsity"),
        Patient::new("2", "Jane Smith", "Soccer", "Women's"),
        Patient::new("3", "Mike Johnson", "Football", "Varsity"),
    ]
}

#[test]
fn select_returns_patient_and_closes() {
    let mut picker = PatientPicker::new();
    assert_eq!(picker.present(directory()).len(), 3);
    assert!(picker.is_open());

    let patient = picker.select_patient("2").unwrap();
    assert_eq!(patient.name, "Jane Smith");
    assert!(!picker.is_open());
}

#[test]
fn unknown_id_keeps_picker_open() {
    let mut picker = PatientPicker::new();
    picker.present(directory());
    assert_eq!(
        picker.select_patient("9"),
        Err(IntakeError::NotFound { id: "9".to_string() })
    );
    assert!(picker.is_open());
    assert_eq!(picker.patients().len(), 3);
}

#[test]
fn selecting_while_closed_is_rejected() {
    let mut picker = PatientPicker::new();
    assert!(matches!(
        picker.select_patient("1"),
        Err(IntakeError::Validation(_))
    ));

    picker.present(directory());
    picker.dismiss();
    assert!(picker.select_patient("1").is_err());
}
