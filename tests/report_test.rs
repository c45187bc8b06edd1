use chrono::{DateTime, TimeZone, Utc};

use calorie_snap::catalog;
use calorie_snap::export::{ReportFormat, build_report, report_filename, write_report};
use calorie_snap::models::Report;
use calorie_snap::state::Ledger;

fn sample_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 26, 9, 30, 0).unwrap()
}

fn sample_ledger() -> Ledger {
    let mut ledger = Ledger::new();
    ledger.add(catalog::find_exact("Manzana").unwrap());
    ledger.add(catalog::find_exact("Huevo (unidad)").unwrap());
    ledger
}

#[test]
fn test_end_to_end_report() {
    let ledger = sample_ledger();
    let report = build_report(ledger.items(), sample_now());

    assert_eq!(report.total_kcal, 156);
    assert_eq!(report.items.len(), 2);

    assert_eq!(report.items[0].name, "Manzana");
    assert_eq!(report.items[0].grams, Some(150.0));
    assert_eq!(report.items[0].units, None);
    assert_eq!(report.items[0].kcal, 78);

    assert_eq!(report.items[1].name, "Huevo (unidad)");
    assert_eq!(report.items[1].units, Some(1.0));
    assert_eq!(report.items[1].grams, None);
    assert_eq!(report.items[1].kcal, 78);
}

#[test]
fn test_build_report_is_pure() {
    let ledger = sample_ledger();
    let first = build_report(ledger.items(), sample_now());
    let second = build_report(ledger.items(), sample_now());
    assert_eq!(first, second);
}

#[test]
fn test_json_export_roundtrip() {
    let ledger = sample_ledger();
    let report = build_report(ledger.items(), sample_now());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(report_filename(sample_now(), ReportFormat::Json));
    assert!(path.ends_with("calories-2026-08-26.json"));

    write_report(&report, &path, ReportFormat::Json).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let reloaded: Report = serde_json::from_str(&content).unwrap();
    assert_eq!(reloaded, report);

    // The absent portion field is omitted, not serialized as null.
    let raw: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert!(raw["items"][0].get("units").is_none());
    assert!(raw["items"][1].get("grams").is_none());
    assert_eq!(raw["totalKcal"], 156);
}

#[test]
fn test_csv_export_rows() {
    let ledger = sample_ledger();
    let report = build_report(ledger.items(), sample_now());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(report_filename(sample_now(), ReportFormat::Csv));
    write_report(&report, &path, ReportFormat::Csv).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines[0], "name,grams,units,kcal");
    assert_eq!(lines[1], "Manzana,150,,78");
    assert_eq!(lines[2], "Huevo (unidad),,1,78");
    assert_eq!(lines.last().unwrap(), &"TOTAL,,,156");
}
