//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use fnol_domain::Route;
use fnol_pipeline::OutputReport;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a report for stdout.
    pub fn format_report(&self, report: &OutputReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(report.to_json_pretty()?),
            OutputFormat::Table => Ok(self.format_report_table(report)),
            OutputFormat::Quiet => Ok(report.recommended_route.as_str().to_string()),
        }
    }

    /// Format a report as a field table followed by the decision.
    fn format_report_table(&self, report: &OutputReport) -> String {
        let mut out = String::new();

        if report.extracted_fields.is_empty() {
            out.push_str(&self.colorize("No fields extracted.", "yellow"));
        } else {
            let mut builder = Builder::default();
            builder.push_record(["Field", "Value"]);
            for (field, value) in report.extracted_fields.iter() {
                builder.push_record([field.display_name(), value]);
            }
            let mut table = builder.build();
            table
                .with(Style::rounded())
                .with(Modify::new(Rows::first()).with(Alignment::center()));
            out.push_str(&table.to_string());
        }
        out.push('\n');

        out.push_str(&format!("\nRoute:     {}\n", self.route(report.recommended_route)));
        out.push_str(&format!("Reasoning: {}\n", report.reasoning));

        if !report.missing_fields.is_empty() {
            let missing = report.missing_fields.join(", ");
            out.push_str(&format!("Missing:   {}\n", self.colorize(&missing, "yellow")));
        }

        if let Some(validation) = &report.validation {
            let summary = if validation.missing.is_empty() && validation.inconsistent.is_empty() {
                self.colorize("matches expected record", "green")
            } else {
                self.colorize(
                    &format!(
                        "missing [{}], inconsistent [{}]",
                        validation.missing.join(", "),
                        validation.inconsistent.join(", ")
                    ),
                    "red",
                )
            };
            out.push_str(&format!("Validation: {}\n", summary));
            if let (Some(expected), Some(matches)) = (&validation.expected_route, validation.route_matches) {
                let verdict = if matches { "match" } else { "mismatch" };
                out.push_str(&format!("Expected route: {} ({})\n", expected, verdict));
            }
        }

        if let Some(llm) = &report.llm_reasoning {
            out.push_str(&format!("LLM:       {}\n", llm));
        }

        out.trim_end().to_string()
    }

    /// Route label colored by urgency.
    pub fn route(&self, route: Route) -> String {
        let color = match route {
            Route::FastTrack => "green",
            Route::ManualReview => "yellow",
            Route::InvestigationFlag => "red",
            Route::SpecialistQueue => "cyan",
        };
        self.colorize(route.as_str(), color)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fnol_domain::{ExtractedFields, FieldName, RoutingDecision, ValidationResult};

    fn create_test_report() -> OutputReport {
        let fields: ExtractedFields = [
            (FieldName::PolicyNumber, "ABC123"),
            (FieldName::IncidentDate, "2024-01-05"),
        ]
        .into_iter()
        .collect();
        let validation = ValidationResult {
            inconsistent: vec![FieldName::PolicyNumber],
            ..ValidationResult::default()
        };
        OutputReport::new(
            fields,
            &[FieldName::ClaimantName],
            RoutingDecision::new(
                Route::ManualReview,
                "missing mandatory field(s): claimant name",
                "missing-mandatory",
            ),
            Some(&validation),
            None,
        )
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_report(&create_test_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["recommendedRoute"], "manual-review");
        assert_eq!(value["extractedFields"]["policyNumber"], "ABC123");
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_report(&create_test_report()).unwrap();
        assert_eq!(output, "manual-review");
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_report(&create_test_report()).unwrap();
        assert!(output.contains("policy number"));
        assert!(output.contains("ABC123"));
        assert!(output.contains("Route:     manual-review"));
        assert!(output.contains("Missing:   claimant name"));
        assert!(output.contains("inconsistent [policyNumber]"));
        assert!(!output.contains("LLM:"));
    }

    #[test]
    fn test_table_without_fields() {
        let report = OutputReport::new(
            ExtractedFields::new(),
            &[],
            RoutingDecision::new(Route::FastTrack, "ok", "default"),
            None,
            Some("Looks routine.".to_string()),
        );
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_report(&report).unwrap();
        assert!(output.contains("No fields extracted."));
        assert!(output.contains("LLM:       Looks routine."));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.warning("careful"), "⚠ careful");
        assert_eq!(formatter.route(Route::SpecialistQueue), "specialist-queue");
    }
}
