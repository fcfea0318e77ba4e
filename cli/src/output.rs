//! Console output formatting for deliberation results

use colored::Colorize;
use council_domain::DeliberationRecord;

/// Formats deliberation records for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete transcript: testimony per provider, then verdict
    pub fn format(record: &DeliberationRecord) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Council Results"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n\n",
            "Prompt:".cyan().bold(),
            record.prompt
        ));

        output.push_str(&Self::section_header("Testimony"));
        for provider in &record.outputs {
            output.push_str(&format!(
                "\n{}\n{}\n",
                format!("── {} ──", provider.name).yellow().bold(),
                provider.content
            ));
        }

        output.push_str(&Self::section_header("Verdict"));
        output.push_str(&format!("\n{}\n", record.verdict));

        output
    }

    /// Format only the verdict
    pub fn format_verdict_only(record: &DeliberationRecord) -> String {
        record.verdict.clone()
    }

    /// Format as JSON
    pub fn format_json(record: &DeliberationRecord) -> String {
        serde_json::to_string_pretty(record)
            .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }

    fn header(title: &str) -> String {
        format!("\n{}\n{}\n", title.bold(), "=".repeat(title.len()))
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(title.len()))
    }
}
