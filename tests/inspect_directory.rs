use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use sheet_inspect::inspect::{discover, inspect, InspectOptions, Inspector};
use sheet_inspect::types::ColumnType;

fn tmp_dir(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("sheet-inspect-{name}-{nanos}"));
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Columns `Name`, `Date`, `Count` with `rows` data rows; `Count` is 1..=rows.
fn write_people_xlsx(path: &Path, rows: u32) {
    let mut wb = Workbook::new();
    let ws = wb.add_worksheet();
    let date_fmt = Format::new().set_num_format("yyyy-mm-dd");

    ws.write_string(0, 0, "Name").unwrap();
    ws.write_string(0, 1, "Date").unwrap();
    ws.write_string(0, 2, "Count").unwrap();

    for i in 1..=rows {
        let day = ExcelDateTime::from_ymd(2024, 1, i as u8).unwrap();
        ws.write_string(i, 0, format!("person{i}")).unwrap();
        ws.write_datetime_with_format(i, 1, &day, &date_fmt).unwrap();
        ws.write_number(i, 2, i as f64).unwrap();
    }

    wb.save(path).unwrap();
}

fn write_mixed_types_xlsx(path: &Path) {
    let mut wb = Workbook::new();
    let ws = wb.add_worksheet();

    ws.write_string(0, 0, "ints").unwrap();
    ws.write_string(0, 1, "ints_with_gap").unwrap();
    ws.write_string(0, 2, "mixed").unwrap();
    ws.write_string(0, 3, "ratio").unwrap();
    ws.write_string(0, 4, "flag").unwrap();

    for i in 1..=4u32 {
        ws.write_number(i, 0, i as f64).unwrap();
        if i != 2 {
            ws.write_number(i, 1, (i * 10) as f64).unwrap();
        }
        if i % 2 == 0 {
            ws.write_string(i, 2, "text").unwrap();
        } else {
            ws.write_number(i, 2, i as f64).unwrap();
        }
        ws.write_number(i, 3, i as f64 / 4.0).unwrap();
        ws.write_boolean(i, 4, i % 2 == 0).unwrap();
    }

    wb.save(path).unwrap();
}

fn preview_counts(report: &sheet_inspect::inspect::SheetReport) -> Vec<Option<i64>> {
    report
        .preview
        .column("Count")
        .unwrap()
        .as_materialized_series()
        .i64()
        .unwrap()
        .into_iter()
        .collect()
}

#[test]
fn directory_without_workbooks_produces_no_reports() {
    let dir = tmp_dir("empty");
    fs::write(dir.join("notes.csv"), "a,b\n1,2\n").unwrap();

    let inspector = Inspector::new(&dir, InspectOptions::default());
    let mut out: Vec<u8> = Vec::new();
    let files = inspector.run(&mut out).unwrap();

    assert_eq!(files, 0);
    assert!(out.is_empty());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn discover_ignores_other_extensions_and_subdirectories() {
    let dir = tmp_dir("discover");
    write_people_xlsx(&dir.join("people.xlsx"), 1);
    fs::write(dir.join("legacy.xls"), "x").unwrap();
    fs::write(dir.join("SHOUTY.XLSX"), "x").unwrap();
    fs::write(dir.join("people.xlsx.bak"), "x").unwrap();
    fs::create_dir_all(dir.join("nested")).unwrap();
    write_people_xlsx(&dir.join("nested").join("inner.xlsx"), 1);

    let found = discover(&dir).unwrap();
    assert_eq!(found, vec![dir.join("people.xlsx")]);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn three_row_workbook_reports_every_row() {
    let dir = tmp_dir("three");
    write_people_xlsx(&dir.join("people.xlsx"), 3);

    let inspector = Inspector::new(&dir, InspectOptions::default());
    let outcomes = inspector.inspect_all().unwrap();
    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].file_name(), "people.xlsx");

    let report = outcomes[0].result.as_ref().unwrap();
    assert_eq!(report.column_names(), vec!["Name", "Date", "Count"]);
    assert_eq!(report.row_count, 3);
    assert_eq!(report.preview.height(), 3);
    assert_eq!(preview_counts(report), vec![Some(1), Some(2), Some(3)]);

    let text = outcomes[0].to_string();
    assert!(text.contains("File: people.xlsx"));
    assert!(text.contains("\nColumns:\n  1. Name\n  2. Date\n  3. Count\n"));
    assert!(text.contains("\nRows: 3\n"));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn preview_shows_only_the_first_five_rows() {
    let dir = tmp_dir("ten");
    let path = dir.join("people.xlsx");
    write_people_xlsx(&path, 10);

    let report = inspect(&path, 5).unwrap();
    assert_eq!(report.row_count, 10);
    assert_eq!(report.preview.height(), 5);
    assert_eq!(
        preview_counts(&report),
        vec![Some(1), Some(2), Some(3), Some(4), Some(5)]
    );
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn column_types_are_inferred_from_cells() {
    let dir = tmp_dir("types");
    let path = dir.join("types.xlsx");
    write_mixed_types_xlsx(&path);

    let report = inspect(&path, 5).unwrap();
    let schema = &report.schema;
    assert_eq!(schema.type_of("ints"), Some(ColumnType::Int64));
    assert_eq!(schema.type_of("ints_with_gap"), Some(ColumnType::Float64));
    assert_eq!(schema.type_of("mixed"), Some(ColumnType::Object));
    assert_eq!(schema.type_of("ratio"), Some(ColumnType::Float64));
    assert_eq!(schema.type_of("flag"), Some(ColumnType::Bool));

    let people = dir.join("people.xlsx");
    write_people_xlsx(&people, 3);
    let report = inspect(&people, 5).unwrap();
    assert_eq!(report.schema.type_of("Name"), Some(ColumnType::Object));
    assert_eq!(report.schema.type_of("Date"), Some(ColumnType::DateTime));
    assert_eq!(report.schema.type_of("Count"), Some(ColumnType::Int64));
    assert!(report.to_string().contains("Date     datetime64[ns]"));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn blank_and_repeated_headers_get_generated_names() {
    let dir = tmp_dir("headers");
    let path = dir.join("headers.xlsx");

    let mut wb = Workbook::new();
    let ws = wb.add_worksheet();
    ws.write_string(0, 0, "id").unwrap();
    ws.write_string(0, 2, "id").unwrap();
    for col in 0..3u16 {
        ws.write_number(1, col, 1.0).unwrap();
    }
    wb.save(&path).unwrap();

    let report = inspect(&path, 5).unwrap();
    assert_eq!(report.column_names(), vec!["id", "Unnamed: 1", "id.1"]);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn unreadable_workbook_is_reported_and_skipped() {
    let dir = tmp_dir("corrupt");
    fs::write(dir.join("broken.xlsx"), b"this is not a zip archive").unwrap();
    write_people_xlsx(&dir.join("people.xlsx"), 3);

    let inspector = Inspector::new(&dir, InspectOptions::default());
    let mut out: Vec<u8> = Vec::new();
    let files = inspector.run(&mut out).unwrap();
    assert_eq!(files, 2);

    let text = String::from_utf8(out).unwrap();
    let error_lines: Vec<&str> = text.lines().filter(|l| l.starts_with("Error: ")).collect();
    assert_eq!(error_lines.len(), 1);
    assert!(error_lines[0].len() > "Error: ".len());
    assert!(text.contains("File: broken.xlsx"));
    assert!(text.contains("File: people.xlsx"));
    assert!(text.contains("\nRows: 3\n"));

    let outcomes = inspector.inspect_all().unwrap();
    let broken = outcomes
        .iter()
        .find(|o| o.file_name() == "broken.xlsx")
        .unwrap();
    let err = broken.result.as_ref().unwrap_err();
    let rendered = broken.to_string();
    assert!(rendered.ends_with(&format!("\nError: {err}\n")));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn rerun_produces_identical_reports() {
    let dir = tmp_dir("rerun");
    write_people_xlsx(&dir.join("a.xlsx"), 7);
    write_mixed_types_xlsx(&dir.join("b.xlsx"));

    let inspector = Inspector::new(&dir, InspectOptions::default());
    let render = || {
        let mut reports: Vec<(String, String)> = inspector
            .inspect_all()
            .unwrap()
            .iter()
            .map(|o| (o.file_name(), o.to_string()))
            .collect();
        reports.sort();
        reports
    };

    assert_eq!(render(), render());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_directory_is_an_error() {
    let dir = tmp_dir("gone");
    fs::remove_dir_all(&dir).unwrap();

    let inspector = Inspector::new(&dir, InspectOptions::default());
    let mut out: Vec<u8> = Vec::new();
    assert!(inspector.run(&mut out).is_err());
}
