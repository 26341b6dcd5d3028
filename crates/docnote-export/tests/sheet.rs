use docnote_core::models::note::{SoapNote, SoapPayload};
use docnote_export::error::ExportError;
use docnote_export::format::ExportFormat;
use docnote_export::sheet::ExportSheet;

fn note() -> SoapNote {
    SoapNote {
        id: "1".to_string(),
        patient_id: "1".to_string(),
        date: jiff::civil::date(2024, 2, 20),
        note_type: "Initial Evaluation".to_string(),
        summary: "Right ankle sprain during basketball practice".to_string(),
        soap: SoapPayload::default(),
    }
}

#[test]
fn offers_four_formats_in_order() {
    let mut sheet = ExportSheet::new();
    let ids: Vec<_> = sheet.present().iter().map(|f| f.id()).collect();
    assert_eq!(ids, ["pdf", "word", "text", "email"]);
    assert!(sheet.is_open());
}

#[test]
fn choosing_closes_the_sheet() {
    let mut sheet = ExportSheet::new();
    sheet.present();
    sheet.choose(&note(), ExportFormat::Word).unwrap();
    assert!(!sheet.is_open());
}

#[test]
fn choosing_while_closed_is_an_error() {
    let mut sheet = ExportSheet::new();
    assert_eq!(
        sheet.choose(&note(), ExportFormat::Pdf),
        Err(ExportError::SheetClosed)
    );
}

#[test]
fn parses_format_ids() {
    assert_eq!("PDF".parse::<ExportFormat>(), Ok(ExportFormat::Pdf));
    assert_eq!(" email ".parse::<ExportFormat>(), Ok(ExportFormat::Email));
    assert_eq!(
        "fax".parse::<ExportFormat>(),
        Err(ExportError::UnknownFormat("fax".to_string()))
    );
}

#[test]
fn every_format_has_a_name_and_description() {
    for format in ExportFormat::ALL {
        assert!(!format.name().is_empty());
        assert!(format.description().starts_with("Export") || format == ExportFormat::Email);
        assert_eq!(format.to_string(), format.id());
    }
}
