use serde::{Deserialize, Serialize};

/// One ledger item as it appears in an exported report.
///
/// Exactly one of `grams`/`units` is present, mirroring the item's pricing
/// mode; the absent field is omitted from the JSON output entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportItem {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub grams: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<f64>,

    /// Rounded calories for this item.
    pub kcal: i64,
}

/// Exported summary of the ledger at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// ISO-8601 timestamp of the export.
    pub date: String,

    /// Rounded total, computed from the unrounded per-item calories.
    #[serde(rename = "totalKcal")]
    pub total_kcal: i64,

    pub items: Vec<ReportItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_portion_field_is_omitted() {
        let item = ReportItem {
            name: "Huevo (unidad)".to_string(),
            grams: None,
            units: Some(1.0),
            kcal: 78,
        };

        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("grams").is_none());
        assert_eq!(json["units"], 1.0);
    }

    #[test]
    fn test_report_field_names() {
        let report = Report {
            date: "2026-08-26T12:00:00.000Z".to_string(),
            total_kcal: 156,
            items: vec![],
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["totalKcal"], 156);
        assert_eq!(json["date"], "2026-08-26T12:00:00.000Z");
    }
}
