//! JSON format report generation

use serde_json::json;

use super::{DependentsReport, ReportGenerator};
use crate::error::DotGraphError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, report: &DependentsReport) -> Result<String, DotGraphError> {
        let value = json!({
            "node": report.node,
            "known": report.known,
            "dependent_count": report.dependents.len(),
            "dependents": report.dependents,
        });

        serde_json::to_string_pretty(&value).map_err(DotGraphError::Json)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    #[test]
    fn test_json_report() {
        let report = DependentsReport {
            node: "lexer".to_string(),
            known: true,
            dependents: vec!["parser".to_string(), "linter".to_string()],
        };

        let output = JsonReportGenerator::new().generate_report(&report).unwrap();
        let parsed: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["node"], "lexer");
        assert_eq!(parsed["known"], true);
        assert_eq!(parsed["dependent_count"], 2);
        assert_eq!(parsed["dependents"][0], "parser");
        assert_eq!(parsed["dependents"][1], "linter");
    }
}
