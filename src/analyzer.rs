//! Analysis orchestration and the result model.
//!
//! [`Analyzer::analyze`] is the single entry point: it validates input,
//! normalizes the statement text once, runs the enabled rule groups in fixed
//! order, times the call, and assembles an [`OptimizationResult`]. The call
//! either completes fully or yields an internal-error result - no partial
//! state is ever observable.
//!
//! # Example
//!
//! ```
//! use sql_optimizer::{analyzer::Analyzer, options::AnalysisOptions};
//!
//! let result = Analyzer::analyze(
//!     "SELECT * FROM users WHERE name = 'x'",
//!     "CREATE TABLE users (id INT PRIMARY KEY, name VARCHAR(50))",
//!     &AnalysisOptions::default()
//! );
//!
//! assert!(result.is_valid);
//! assert!(!result.suggestions.is_empty());
//! assert_eq!(result.metrics.total_suggestions, result.suggestions.len());
//! ```

use std::{
    panic::{AssertUnwindSafe, catch_unwind},
    time::{Duration, Instant}
};

use serde::Serialize;

use crate::{
    options::AnalysisOptions,
    query,
    rules::{self, OptimizationSuggestion, RuleContext, SuggestionPriority, SuggestionType},
    schema::SchemaIndex
};

const EMPTY_QUERY_MESSAGE: &str = "SQL query cannot be empty";
const INVALID_SYNTAX_MESSAGE: &str = "Invalid SQL syntax detected";
const INTERNAL_ERROR_MESSAGE: &str = "An error occurred during analysis";

/// Complete outcome of one analysis call.
///
/// A value object: produced once, never mutated after return. An invalid
/// result carries an error message and an empty suggestion list.
#[derive(Debug, Clone, Serialize)]
pub struct OptimizationResult {
    /// Statement text exactly as supplied
    pub original_query:   String,
    /// Table definition exactly as supplied (may be empty)
    pub table_definition: String,
    /// Whether the input passed the validity gates and analysis completed
    pub is_valid:         bool,
    /// Explicit message when `is_valid` is false
    pub error_message:    Option<String>,
    /// Ordered suggestions from the enabled rule groups
    pub suggestions:      Vec<OptimizationSuggestion>,
    /// Summary counts derived from the final suggestion list
    pub metrics:          OptimizationMetrics
}

/// Summary counts over the final suggestion list.
///
/// Always recomputed from the list itself, never tracked by independent
/// counters that could drift.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OptimizationMetrics {
    pub total_suggestions:         usize,
    /// Suggestions with priority High or Critical
    pub high_priority_suggestions: usize,
    pub security_issues:           usize,
    pub performance_issues:        usize,
    /// Wall-clock duration of the analysis call
    pub analysis_time:             Duration
}

impl OptimizationMetrics {
    /// Derive summary counts from a finished suggestion list.
    pub fn from_suggestions(
        suggestions: &[OptimizationSuggestion],
        analysis_time: Duration
    ) -> Self {
        Self {
            total_suggestions:         suggestions.len(),
            high_priority_suggestions: suggestions
                .iter()
                .filter(|s| s.priority >= SuggestionPriority::High)
                .count(),
            security_issues:           suggestions
                .iter()
                .filter(|s| s.suggestion_type == SuggestionType::Security)
                .count(),
            performance_issues:        suggestions
                .iter()
                .filter(|s| s.suggestion_type == SuggestionType::Performance)
                .count(),
            analysis_time
        }
    }
}

/// Stateless analysis entry point.
pub struct Analyzer;

impl Analyzer {
    /// Analyze one SQL statement (optionally with its table DDL).
    ///
    /// Returns an invalid result for blank input or text whose first keyword
    /// is not a recognized statement opener. Any unexpected fault inside
    /// rule evaluation is caught at this boundary and surfaced as an invalid
    /// result with a generic message - it never propagates to the caller.
    ///
    /// Deterministic: identical inputs produce an identical suggestion list,
    /// content and order, excluding the elapsed-time metric.
    pub fn analyze(
        sql_text: &str,
        table_definition: &str,
        options: &AnalysisOptions
    ) -> OptimizationResult {
        let started = Instant::now();

        if sql_text.trim().is_empty() {
            return Self::invalid(sql_text, table_definition, EMPTY_QUERY_MESSAGE);
        }

        if !query::is_recognized_statement(sql_text) {
            return Self::invalid(sql_text, table_definition, INVALID_SYNTAX_MESSAGE);
        }

        let normalized = query::normalize(sql_text);
        let has_schema = !table_definition.trim().is_empty();
        let schema = SchemaIndex::parse(table_definition);

        let ctx = RuleContext {
            sql: &normalized,
            options,
            schema: &schema,
            has_schema
        };

        // Fault boundary: a panicking rule must never reach the caller.
        let outcome = catch_unwind(AssertUnwindSafe(|| rules::run_rules(&ctx)));

        match outcome {
            Ok(suggestions) => {
                let metrics = OptimizationMetrics::from_suggestions(&suggestions, started.elapsed());
                OptimizationResult {
                    original_query: sql_text.to_string(),
                    table_definition: table_definition.to_string(),
                    is_valid: true,
                    error_message: None,
                    suggestions,
                    metrics
                }
            }
            Err(_) => Self::invalid(sql_text, table_definition, INTERNAL_ERROR_MESSAGE)
        }
    }

    fn invalid(sql_text: &str, table_definition: &str, message: &str) -> OptimizationResult {
        OptimizationResult {
            original_query:   sql_text.to_string(),
            table_definition: table_definition.to_string(),
            is_valid:         false,
            error_message:    Some(message.to_string()),
            suggestions:      Vec::new(),
            metrics:          OptimizationMetrics::default()
        }
    }
}
