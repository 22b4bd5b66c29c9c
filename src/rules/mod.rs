//! Rule engine for SQL statement analysis.
//!
//! Rules are independent, stateless units that scan normalized SQL text and
//! emit zero or more [`OptimizationSuggestion`]s. Each rule self-reports its
//! category and priority through [`RuleInfo`]; nothing is recovered from
//! message text after emission.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌─────────────┐     ┌──────────────┐
//! │  Normalized  │────▶│  run_rules  │────▶│  Suggestions │
//! │  SQL + ctx   │     └─────────────┘     └──────────────┘
//! └──────────────┘            │
//!                      ┌──────┴───────┐
//!                      │  Registry    │
//!                      │  (per        │
//!                      │   category)  │
//!                      └──────────────┘
//! ```
//!
//! Categories run in a fixed order - Performance (index checks embedded when
//! a table definition was supplied), Security, BestPractice - so identical
//! inputs always produce an identical suggestion list. A rule's relative
//! position affects only suggestion ordering, never correctness.

mod best_practice;
mod performance;
mod security;
mod types;

pub use types::{OptimizationSuggestion, RuleInfo, SuggestionPriority, SuggestionType};

use crate::{options::AnalysisOptions, schema::SchemaIndex};

/// Shared, read-only context handed to every rule.
///
/// Holds the normalized statement text, the per-call options, and the
/// indexed-column set parsed from the table definition. Rules share no
/// mutable state.
pub struct RuleContext<'a> {
    /// Lower-cased, trimmed statement text
    pub sql:        &'a str,
    /// Per-call toggles and tunables
    pub options:    &'a AnalysisOptions,
    /// Indexed columns from the supplied table definition
    pub schema:     &'a SchemaIndex,
    /// Whether a non-blank table definition was supplied at all
    pub has_schema: bool
}

/// Trait for implementing analysis rules.
///
/// Rules are pure functions of the context: no interior mutability, no I/O.
///
/// # Example
///
/// ```ignore
/// impl Rule for SelectStar {
///     fn info(&self) -> RuleInfo {
///         RuleInfo {
///             name:            "SELECT * usage",
///             suggestion_type: SuggestionType::Performance,
///             priority:        SuggestionPriority::Medium
///         }
///     }
///
///     fn enabled(&self, options: &AnalysisOptions) -> bool {
///         options.performance.check_select_star
///     }
///
///     fn check(&self, ctx: &RuleContext<'_>) -> Vec<OptimizationSuggestion> {
///         vec![]
///     }
/// }
/// ```
pub trait Rule {
    /// Static metadata about this rule.
    fn info(&self) -> RuleInfo;

    /// Whether the per-rule toggle enables this rule.
    fn enabled(&self, options: &AnalysisOptions) -> bool;

    /// Scan the context and return any suggestions.
    fn check(&self, ctx: &RuleContext<'_>) -> Vec<OptimizationSuggestion>;
}

/// Performance rules in evaluation order (index-aware rules included).
fn performance_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(performance::SelectStar),
        Box::new(performance::MissingIndex),
        Box::new(performance::FunctionInWhere),
        Box::new(performance::LeadingWildcard),
        Box::new(performance::UnnecessaryDistinct),
        Box::new(performance::SubqueryOptimization),
        Box::new(performance::MissingLimit),
        Box::new(performance::BulkInsert),
    ]
}

/// Security rules in evaluation order.
fn security_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(security::SqlInjection),
        Box::new(security::DynamicSql),
        Box::new(security::SensitiveComments),
        Box::new(security::HardcodedCredentials),
    ]
}

/// Best-practice rules in evaluation order.
fn best_practice_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(best_practice::ExplicitColumns),
        Box::new(best_practice::UpdateWithoutWhere),
        Box::new(best_practice::DeleteWithoutWhere),
    ]
}

/// Run every enabled rule group against the context in fixed order.
///
/// Category toggles skip whole groups; per-rule toggles are consulted via
/// [`Rule::enabled`]. The returned order is deterministic.
pub fn run_rules(ctx: &RuleContext<'_>) -> Vec<OptimizationSuggestion> {
    let mut suggestions = Vec::new();

    if ctx.options.performance_analysis {
        run_group(&performance_rules(), ctx, &mut suggestions);
    }
    if ctx.options.security_analysis {
        run_group(&security_rules(), ctx, &mut suggestions);
    }
    if ctx.options.best_practice_analysis {
        run_group(&best_practice_rules(), ctx, &mut suggestions);
    }

    suggestions
}

fn run_group(
    rules: &[Box<dyn Rule>],
    ctx: &RuleContext<'_>,
    suggestions: &mut Vec<OptimizationSuggestion>
) {
    for rule in rules {
        if rule.enabled(ctx.options) {
            suggestions.extend(rule.check(ctx));
        }
    }
}
