//! Result formatting for the delivery layer.
//!
//! The textual report is a formatting convenience over
//! [`OptimizationResult`], not part of the core contract: the echoed query
//! and schema followed by one commented line per suggestion. JSON and YAML
//! serialize the result object directly.

use colored::Colorize;

use crate::{analyzer::OptimizationResult, rules::SuggestionPriority};

/// Output format for results
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml
}

/// Output options
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format:  OutputFormat,
    pub colored: bool
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format:  OutputFormat::Text,
            colored: true
        }
    }
}

/// Format an analysis result based on output options.
pub fn format_result(result: &OptimizationResult, opts: &OutputOptions) -> String {
    match opts.format {
        OutputFormat::Json => serde_json::to_string_pretty(result).unwrap_or_default(),
        OutputFormat::Yaml => serde_yaml::to_string(result).unwrap_or_default(),
        OutputFormat::Text => format_text_report(result, opts)
    }
}

fn format_text_report(result: &OptimizationResult, opts: &OutputOptions) -> String {
    let mut report = String::new();

    report.push_str(&format!("-- Original Query:\n{}\n\n", result.original_query));
    if !result.table_definition.is_empty() {
        report.push_str(&format!("-- Table Definition:\n{}\n\n", result.table_definition));
    }

    if !result.is_valid {
        let message = result
            .error_message
            .as_deref()
            .unwrap_or("Analysis failed");
        if opts.colored {
            report.push_str(&format!("-- {}\n", message.red().bold()));
        } else {
            report.push_str(&format!("-- {message}\n"));
        }
        return report;
    }

    if result.suggestions.is_empty() {
        report.push_str("-- No optimization suggestions found.\n");
        return report;
    }

    report.push_str("-- Optimization Suggestions:\n");
    for suggestion in &result.suggestions {
        let label = format!("[{}]", suggestion.priority);
        let label = if opts.colored {
            colorize_priority(&label, suggestion.priority)
        } else {
            label
        };
        report.push_str(&format!("-- {label} {}\n", suggestion.message));
        if let Some(recommendation) = &suggestion.recommendation {
            report.push_str(&format!("--   Recommendation: {recommendation}\n"));
        }
        if let Some(example) = &suggestion.example {
            report.push_str(&format!("--   Example: {example}\n"));
        }
    }

    report.push_str(&format!(
        "\n-- {} suggestion(s), {} high priority, {} security, {} performance ({:?})\n",
        result.metrics.total_suggestions,
        result.metrics.high_priority_suggestions,
        result.metrics.security_issues,
        result.metrics.performance_issues,
        result.metrics.analysis_time
    ));

    report
}

fn colorize_priority(label: &str, priority: SuggestionPriority) -> String {
    match priority {
        SuggestionPriority::Low => label.green().to_string(),
        SuggestionPriority::Medium => label.yellow().to_string(),
        SuggestionPriority::High => label.red().to_string(),
        SuggestionPriority::Critical => label.red().bold().to_string()
    }
}
