//! Report building and export.
//!
//! A report is a pure function of the ledger items and the export
//! timestamp. Per-item calories and the total are rounded independently,
//! each from the unrounded values; the reported total is the round of the
//! raw sum, not the sum of the rounded items.

use std::fs;
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::Result;
use crate::models::{LedgerItem, Report, ReportItem};

/// Round calories to the nearest integer, halves away from zero.
#[inline]
pub fn round_kcal(value: f64) -> i64 {
    value.round() as i64
}

/// Output format for a written report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Csv,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        }
    }
}

/// Build a report snapshot of the given items at the given time.
pub fn build_report(items: &[LedgerItem], now: DateTime<Utc>) -> Report {
    let total: f64 = items.iter().map(LedgerItem::kcal).sum();

    Report {
        date: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        total_kcal: round_kcal(total),
        items: items
            .iter()
            .map(|item| ReportItem {
                name: item.name.clone(),
                grams: item.grams(),
                units: item.units(),
                kcal: round_kcal(item.kcal()),
            })
            .collect(),
    }
}

/// Conventional filename for a report: `calories-<YYYY-MM-DD>.<ext>`.
pub fn report_filename(now: DateTime<Utc>, format: ReportFormat) -> String {
    format!(
        "calories-{}.{}",
        now.format("%Y-%m-%d"),
        format.extension()
    )
}

/// Write a report to disk in the given format.
pub fn write_report(report: &Report, path: &Path, format: ReportFormat) -> Result<()> {
    match format {
        ReportFormat::Json => write_json(report, path),
        ReportFormat::Csv => write_csv(report, path),
    }
}

fn write_json(report: &Report, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    Ok(())
}

/// CSV rendition: one row per item, then a total row.
fn write_csv(report: &Report, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["name", "grams", "units", "kcal"])?;

    let portion = |value: Option<f64>| value.map(|v| format!("{}", v)).unwrap_or_default();

    for item in &report.items {
        wtr.write_record([
            item.name.clone(),
            portion(item.grams),
            portion(item.units),
            item.kcal.to_string(),
        ])?;
    }

    wtr.write_record([
        "TOTAL".to_string(),
        String::new(),
        String::new(),
        report.total_kcal.to_string(),
    ])?;

    wtr.flush()?;
    Ok(())
}
