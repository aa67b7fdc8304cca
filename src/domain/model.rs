use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// What gets recorded for one checked address. A failure serializes as
/// `{"error": <message>}`, a report as the raw response body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LookupOutcome {
    Report(serde_json::Value),
    Failed { error: String },
}

impl LookupOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, LookupOutcome::Failed { .. })
    }
}

/// Target -> outcome in first-insertion order. Re-inserting a key replaces
/// its value in place.
pub type ResultMapping = IndexMap<String, LookupOutcome>;

pub fn failures(mapping: &ResultMapping) -> usize {
    mapping.values().filter(|o| o.is_failure()).count()
}

/// Four-space indent, non-ASCII left unescaped.
pub fn to_pretty_json(mapping: &ResultMapping) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    mapping.serialize(&mut ser)?;
    Ok(buf)
}

/// The few fields of a `/check` answer worth printing on the console.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub abuse_confidence_score: Option<u8>,
    pub country_code: Option<String>,
    pub total_reports: Option<u64>,
}

impl ReportSummary {
    pub fn from_response(value: &serde_json::Value) -> Option<Self> {
        value
            .get("data")
            .and_then(|data| serde_json::from_value(data.clone()).ok())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub output_path: String,
    pub targets_read: usize,
    pub checked: usize,
    pub failed: usize,
    pub skipped: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mapping_keeps_first_position_on_overwrite() {
        let mut mapping = ResultMapping::new();
        mapping.insert("1.1.1.1".to_string(), LookupOutcome::Report(json!({"n": 1})));
        mapping.insert("8.8.8.8".to_string(), LookupOutcome::Report(json!({"n": 2})));
        let previous = mapping.insert(
            "1.1.1.1".to_string(),
            LookupOutcome::Failed {
                error: "boom".to_string(),
            },
        );

        assert!(previous.is_some());
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.keys().collect::<Vec<_>>(), vec!["1.1.1.1", "8.8.8.8"]);
        assert!(mapping.get("1.1.1.1").unwrap().is_failure());
        assert_eq!(failures(&mapping), 1);
    }

    #[test]
    fn test_failed_outcome_serializes_as_error_object() {
        let outcome = LookupOutcome::Failed {
            error: "404 Client Error".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({"error": "404 Client Error"})
        );
    }

    #[test]
    fn test_report_outcome_serializes_raw_body() {
        let body = json!({"data": {"ipAddress": "8.8.8.8"}});
        assert_eq!(
            serde_json::to_value(LookupOutcome::Report(body.clone())).unwrap(),
            body
        );
    }

    #[test]
    fn test_pretty_json_uses_four_spaces_and_keeps_unicode() {
        let mut mapping = ResultMapping::new();
        mapping.insert(
            "8.8.8.8".to_string(),
            LookupOutcome::Report(json!({"isp": "Müller GmbH"})),
        );

        let text = String::from_utf8(to_pretty_json(&mapping).unwrap()).unwrap();
        assert_eq!(text, "{\n    \"8.8.8.8\": {\n        \"isp\": \"Müller GmbH\"\n    }\n}");
    }

    #[test]
    fn test_report_summary_from_response() {
        let response = json!({
            "data": {
                "ipAddress": "118.25.6.39",
                "abuseConfidenceScore": 100,
                "countryCode": "CN",
                "totalReports": 1764,
                "isWhitelisted": false
            }
        });

        let summary = ReportSummary::from_response(&response).unwrap();
        assert_eq!(summary.abuse_confidence_score, Some(100));
        assert_eq!(summary.country_code.as_deref(), Some("CN"));
        assert_eq!(summary.total_reports, Some(1764));

        assert!(ReportSummary::from_response(&json!({"errors": []})).is_none());
    }
}
