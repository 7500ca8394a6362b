use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use qc_core::export::{DateFormat, export_file_name, export_rows};
use qc_core::filter::FilterState;
use qc_core::seed::mock_board;
use qc_export::{workbook_bytes, write_workbook};

fn rows() -> Vec<qc_core::export::ExportRow> {
    let board = mock_board(Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap());
    export_rows(&board, &FilterState::default(), &DateFormat::default(), &Utc)
}

#[test]
fn buffer_is_a_zip_container() {
    let rows = rows();
    assert_eq!(rows.len(), 12);
    let bytes = workbook_bytes(&rows).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn empty_export_still_has_headers() {
    let bytes = workbook_bytes(&[]).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn workbook_is_written_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let date = Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap().date_naive();
    let path = dir.path().join(export_file_name(date));

    write_workbook(&rows(), &path).unwrap();

    let meta = std::fs::metadata(&path).unwrap();
    assert!(meta.len() > 0);
    assert_eq!(
        path.file_name().and_then(|name| name.to_str()),
        Some("QC_Export_2024-02-01.xlsx")
    );
}

#[test]
fn missing_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.xlsx");
    assert!(write_workbook(&rows(), &path).is_err());
}
