//! Type definitions for the rule system.
//!
//! - [`SuggestionPriority`] - Priority levels forming a total order
//! - [`SuggestionType`] - Suggestion categories
//! - [`OptimizationSuggestion`] - Individual suggestions with context
//! - [`RuleInfo`] - Static metadata a rule reports about itself

use serde::Serialize;

/// Priority of a suggestion.
///
/// Ordered from lowest to highest so that threshold comparisons such as
/// `priority >= High` work through the derived [`Ord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum SuggestionPriority {
    Low,
    Medium,
    High,
    /// Must be addressed before the statement ships
    Critical
}

impl std::fmt::Display for SuggestionPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
            Self::Critical => write!(f, "CRITICAL")
        }
    }
}

/// Category of a suggestion for grouping and metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SuggestionType {
    Performance,
    Security,
    BestPractice,
    /// Index-aware findings emitted within the performance pass
    IndexOptimization,
    QueryStructure
}

impl std::fmt::Display for SuggestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Performance => write!(f, "Performance"),
            Self::Security => write!(f, "Security"),
            Self::BestPractice => write!(f, "BestPractice"),
            Self::IndexOptimization => write!(f, "IndexOptimization"),
            Self::QueryStructure => write!(f, "QueryStructure")
        }
    }
}

/// A single improvement suggestion emitted by a rule.
///
/// Every rule self-reports its type and priority at emission time; nothing
/// is recovered by scanning message text afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct OptimizationSuggestion {
    /// Suggestion category
    pub suggestion_type: SuggestionType,
    /// Priority level used for threshold comparisons
    pub priority:        SuggestionPriority,
    /// Human-readable description of the finding
    pub message:         String,
    /// Optional advice on how to fix the issue
    pub recommendation:  Option<String>,
    /// Optional literal corrective example
    pub example:         Option<String>
}

/// Static metadata about a rule.
#[derive(Debug, Clone)]
pub struct RuleInfo {
    /// Human-readable rule name
    pub name:            &'static str,
    /// Category the rule emits under
    pub suggestion_type: SuggestionType,
    /// Priority the rule emits at
    pub priority:        SuggestionPriority
}
