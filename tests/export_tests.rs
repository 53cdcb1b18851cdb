//! Export tests: CSV and TXT rendering of a live ledger, and writing to disk

#[macro_use]
mod storage_harness;

use pou::prelude::*;
use storage_harness::*;
use tempfile::TempDir;

const HEADER: &str = "Index,Employee,Job,Parts,Date Pulled,Time Requested,Notes,\
                      Inventory Count,Adjust Count,Stockroom Initials,Status,Fulfilled Time";

/// Split one CSV line on the `","` separators between fully quoted fields
fn quoted_fields(line: &str) -> Vec<String> {
    line.trim_start_matches('"')
        .trim_end_matches('"')
        .split("\",\"")
        .map(|f| f.replace("\"\"", "\""))
        .collect()
}

#[test]
fn test_single_fulfilled_record_csv() {
    let mut ledger = memory_ledger();
    ledger.create(alice_request()).unwrap();
    ledger
        .fulfill(
            0,
            Fulfillment::new("JS")
                .with_inventory_count("20")
                .with_adjust_count(""),
        )
        .unwrap();

    let csv = CsvExporter::default().render(&ledger.export_rows());
    let body = csv.strip_prefix('\u{FEFF}').expect("BOM prefix");
    let lines: Vec<&str> = body.lines().collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], HEADER);

    let fields = quoted_fields(lines[1]);
    assert_eq!(fields.len(), 12);
    assert_eq!(
        fields,
        vec![
            "1",
            "Alice",
            "J100",
            "P1 (Qty: 5)",
            "03/01/2024",
            "14:05:09",
            "N/A",
            "20",
            "N/A",
            "JS",
            "Fulfilled",
            "03/01/2024, 02:05:09 PM",
        ]
    );
}

#[test]
fn test_csv_escapes_embedded_quotes() {
    let csv = CsvExporter::default().render(&pou::core::views::export_rows(&sample_records()));

    assert!(csv.contains(r#""Carol ""CJ"" Jones""#));
    assert!(csv.contains(r#""J300, rev B""#));
    assert!(csv.contains(r#""HOSE 3/4"" (Qty: 2)""#));
}

#[test]
fn test_txt_has_one_block_per_record() {
    let records = sample_records();
    let txt = TxtExporter::default().render(&pou::core::views::export_rows(&records));
    let separator = format!("{}\n", "-".repeat(40));

    let blocks: Vec<&str> = txt.split(&separator).collect();
    assert_count(&blocks, records.len());
    assert!(blocks[1].contains("Employee: Bob Li\n"));
    assert!(blocks[1].contains("Adjust Count: -2\n"));
    assert!(blocks[1].contains("Status: Fulfilled\n"));
    assert!(blocks[0].contains("Notes: N/A\n"));
}

#[test]
fn test_export_of_empty_ledger_is_refused() {
    let ledger = memory_ledger();
    let dir = TempDir::new().unwrap();

    let err = write_export(&CsvExporter::default(), &ledger.export_rows(), dir.path()).unwrap_err();
    assert_eq!(err.error_code(), "EXPORT_EMPTY");
    assert_eq!(err.to_string(), "No records to export.");
}

#[test]
fn test_export_uses_configured_file_names() {
    let dir = TempDir::new().unwrap();
    let config = PouConfig::from_yaml_str(
        "export:\n  csv_file_name: shop.csv\n  txt_file_name: shop.txt\n",
    )
    .unwrap();
    let rows = pou::core::views::export_rows(&sample_records());

    let csv_path = write_export(&config.export.csv_exporter(), &rows, dir.path()).unwrap();
    let txt_path = write_export(&config.export.txt_exporter(), &rows, dir.path()).unwrap();

    assert_eq!(csv_path, dir.path().join("shop.csv"));
    assert_eq!(txt_path, dir.path().join("shop.txt"));

    let bytes = std::fs::read(csv_path).unwrap();
    assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF]);
}
