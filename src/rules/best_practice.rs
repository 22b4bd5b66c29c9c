use std::sync::LazyLock;

use regex::Regex;

use super::{OptimizationSuggestion, Rule, RuleContext, RuleInfo, SuggestionPriority, SuggestionType};
use crate::options::AnalysisOptions;

static INSERT_WITHOUT_COLUMNS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\binsert\s+into\s+\w+\s+values\b")
        .unwrap_or_else(|e| panic!("invalid insert pattern: {e}"))
});

static UPDATE_SET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bupdate\s+\w+\s+set\b")
        .unwrap_or_else(|e| panic!("invalid update pattern: {e}"))
});

static DELETE_FROM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bdelete\s+from\s+\w+\b")
        .unwrap_or_else(|e| panic!("invalid delete pattern: {e}"))
});

static WHERE_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bwhere\b").unwrap_or_else(|e| panic!("invalid where pattern: {e}"))
});

/// INSERT without a parenthesized column list
pub struct ExplicitColumns;

impl Rule for ExplicitColumns {
    fn info(&self) -> RuleInfo {
        RuleInfo {
            name:            "INSERT without column list",
            suggestion_type: SuggestionType::BestPractice,
            priority:        SuggestionPriority::Medium
        }
    }

    fn enabled(&self, options: &AnalysisOptions) -> bool {
        options.best_practice.check_explicit_column_names
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<OptimizationSuggestion> {
        if INSERT_WITHOUT_COLUMNS.is_match(ctx.sql) {
            let info = self.info();
            return vec![OptimizationSuggestion {
                suggestion_type: info.suggestion_type,
                priority:        info.priority,
                message:         "INSERT without explicit column names is unsafe".to_string(),
                recommendation:  Some(
                    "Always specify column names for clarity and safety".to_string()
                ),
                example:         Some(
                    "INSERT INTO users (name, email) VALUES ('John', 'john@example.com')"
                        .to_string()
                )
            }];
        }
        vec![]
    }
}

/// UPDATE with no WHERE anywhere in the statement affects all rows
pub struct UpdateWithoutWhere;

impl Rule for UpdateWithoutWhere {
    fn info(&self) -> RuleInfo {
        RuleInfo {
            name:            "UPDATE without WHERE",
            suggestion_type: SuggestionType::BestPractice,
            priority:        SuggestionPriority::Critical
        }
    }

    fn enabled(&self, options: &AnalysisOptions) -> bool {
        options.best_practice.check_where_clause
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<OptimizationSuggestion> {
        if UPDATE_SET.is_match(ctx.sql) && !WHERE_KEYWORD.is_match(ctx.sql) {
            let info = self.info();
            return vec![OptimizationSuggestion {
                suggestion_type: info.suggestion_type,
                priority:        info.priority,
                message:         "UPDATE without WHERE clause will affect all rows".to_string(),
                recommendation:  Some(
                    "Always add a WHERE clause to limit the scope of UPDATE statements"
                        .to_string()
                ),
                example:         Some(
                    "UPDATE users SET status = 'active' WHERE id = 123".to_string()
                )
            }];
        }
        vec![]
    }
}

/// DELETE with no WHERE anywhere in the statement removes all rows
pub struct DeleteWithoutWhere;

impl Rule for DeleteWithoutWhere {
    fn info(&self) -> RuleInfo {
        RuleInfo {
            name:            "DELETE without WHERE",
            suggestion_type: SuggestionType::BestPractice,
            priority:        SuggestionPriority::Critical
        }
    }

    fn enabled(&self, options: &AnalysisOptions) -> bool {
        options.best_practice.check_where_clause
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<OptimizationSuggestion> {
        if DELETE_FROM.is_match(ctx.sql) && !WHERE_KEYWORD.is_match(ctx.sql) {
            let info = self.info();
            return vec![OptimizationSuggestion {
                suggestion_type: info.suggestion_type,
                priority:        info.priority,
                message:         "DELETE without WHERE clause will remove all rows".to_string(),
                recommendation:  Some(
                    "Always add a WHERE clause to limit the scope of DELETE statements"
                        .to_string()
                ),
                example:         Some("DELETE FROM users WHERE id = 123".to_string())
            }];
        }
        vec![]
    }
}
