use docnote_core::models::note::{SoapNote, SoapPayload};
use docnote_core::models::patient::Patient;
use docnote_storage::error::StorageError;
use docnote_storage::memory::InMemoryRepository;
use docnote_storage::repository::Repository;
use jiff::civil::date;

fn note(id: &str, patient_id: &str, on: jiff::civil::Date) -> SoapNote {
    SoapNote {
        id: id.to_string(),
        patient_id: patient_id.to_string(),
        date: on,
        note_type: "New Note".to_string(),
        summary: "...".to_string(),
        soap: SoapPayload::default(),
    }
}

#[tokio::test]
async fn seeded_directory_lists_five_patients_in_order() {
    let repo = InMemoryRepository::seeded();
    let patients = repo.list_patients().await.unwrap();
    let names: Vec<_> = patients.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        ["John Doe", "Jane Smith", "Mike Johnson", "Sarah Williams", "Tom Brown"]
    );
}

#[tokio::test]
async fn get_patient_by_id() {
    let repo = InMemoryRepository::seeded();
    let patient = repo.get_patient("1").await.unwrap();
    assert_eq!(patient.name, "John Doe");
    assert_eq!(patient.age, Some(22));
}

#[tokio::test]
async fn unknown_patient_is_not_found() {
    let repo = InMemoryRepository::seeded();
    let err = repo.get_patient("42").await.unwrap_err();
    assert_eq!(err, StorageError::patient_not_found("42"));
    assert_eq!(err.to_string(), "patient not found: 42");
}

#[tokio::test]
async fn add_patient_rejects_duplicate_id() {
    let repo = InMemoryRepository::seeded();
    let dup = Patient::new("1", "Someone Else", "Tennis", "JV");
    assert!(matches!(
        repo.add_patient(dup).await,
        Err(StorageError::Duplicate { kind: "patient", .. })
    ));

    repo.add_patient(Patient::new("6", "Ana Lopez", "Tennis", "Varsity"))
        .await
        .unwrap();
    assert_eq!(repo.list_patients().await.unwrap().len(), 6);
}

#[tokio::test]
async fn save_note_requires_known_patient_and_unique_id() {
    let repo = InMemoryRepository::seeded();

    let orphan = note("100", "99", date(2024, 3, 21));
    assert_eq!(
        repo.save_note(orphan).await,
        Err(StorageError::patient_not_found("99"))
    );

    repo.save_note(note("100", "2", date(2024, 3, 21))).await.unwrap();
    assert!(matches!(
        repo.save_note(note("100", "2", date(2024, 3, 21))).await,
        Err(StorageError::Duplicate { kind: "note", .. })
    ));
    assert_eq!(repo.get_note("100").await.unwrap().patient_id, "2");
}

#[tokio::test]
async fn notes_for_patient_newest_first() {
    let repo = InMemoryRepository::seeded();
    repo.save_note(note("100", "1", date(2024, 3, 20))).await.unwrap();

    let ids: Vec<_> = repo
        .notes_for_patient("1")
        .await
        .unwrap()
        .into_iter()
        .map(|n| n.id)
        .collect();
    // "100" and seed note "3" share a date; the later save comes first.
    assert_eq!(ids, ["100", "3", "2", "1"]);
}

#[tokio::test]
async fn notes_for_unknown_patient_is_not_found() {
    let repo = InMemoryRepository::new();
    assert!(repo.notes_for_patient("1").await.is_err());
    assert!(repo.list_notes().await.unwrap().is_empty());
}
