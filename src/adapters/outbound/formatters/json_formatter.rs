use crate::dependency_resolution::domain::{DependencyReport, ReportMetadata};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    project: &'a str,
    metadata: Metadata<'a>,
    #[serde(rename = "topLevel")]
    top_level: Vec<TopLevelPackage<'a>>,
    transitive: Vec<TransitivePackage<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Metadata<'a> {
    tool: &'a str,
    tool_version: &'a str,
    timestamp: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TopLevelPackage<'a> {
    id: &'a str,
    requested: &'a str,
    resolved: &'a str,
    #[serde(skip_serializing_if = "is_false")]
    lookup_failed: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TransitivePackage<'a> {
    id: &'a str,
    resolved: &'a str,
    #[serde(skip_serializing_if = "is_false")]
    lookup_failed: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// JsonFormatter adapter for the machine-readable report
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &DependencyReport, metadata: &ReportMetadata) -> Result<String> {
        let document = JsonReport {
            project: metadata.project_name(),
            metadata: Metadata {
                tool: metadata.tool_name(),
                tool_version: metadata.tool_version(),
                timestamp: metadata.timestamp(),
            },
            top_level: report
                .top_level
                .iter()
                .map(|entry| TopLevelPackage {
                    id: &entry.id,
                    requested: &entry.requested,
                    resolved: &entry.resolved,
                    lookup_failed: entry.lookup_failed,
                })
                .collect(),
            transitive: report
                .transitive
                .iter()
                .map(|entry| TransitivePackage {
                    id: &entry.id,
                    resolved: &entry.resolved,
                    lookup_failed: entry.lookup_failed,
                })
                .collect(),
        };

        let mut json = serde_json::to_string_pretty(&document)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_resolution::domain::{TopLevelEntry, TransitiveEntry};
    use serde_json::{json, Value};

    fn metadata() -> ReportMetadata {
        ReportMetadata::new(
            "MyProject".to_string(),
            "2024-01-01T00:00:00Z".to_string(),
            "nuget-deptree".to_string(),
            "0.3.0".to_string(),
        )
    }

    #[test]
    fn test_json_format_structure() {
        let report = DependencyReport {
            top_level: vec![TopLevelEntry {
                id: "A".to_string(),
                requested: "1.0".to_string(),
                resolved: "1.0".to_string(),
                lookup_failed: false,
            }],
            transitive: vec![TransitiveEntry {
                id: "B".to_string(),
                resolved: "2.0.0".to_string(),
                lookup_failed: false,
            }],
        };

        let output = JsonFormatter::new().format(&report, &metadata()).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(
            value,
            json!({
                "project": "MyProject",
                "metadata": {
                    "tool": "nuget-deptree",
                    "toolVersion": "0.3.0",
                    "timestamp": "2024-01-01T00:00:00Z"
                },
                "topLevel": [{"id": "A", "requested": "1.0", "resolved": "1.0"}],
                "transitive": [{"id": "B", "resolved": "2.0.0"}]
            })
        );
    }

    #[test]
    fn test_json_format_flags_failed_lookup() {
        let report = DependencyReport {
            top_level: vec![],
            transitive: vec![TransitiveEntry {
                id: "Gone".to_string(),
                resolved: "9.9.9".to_string(),
                lookup_failed: true,
            }],
        };

        let output = JsonFormatter::new().format(&report, &metadata()).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["transitive"][0]["lookupFailed"], json!(true));
        assert_eq!(value["topLevel"], json!([]));
    }
}
