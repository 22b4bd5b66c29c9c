use std::sync::LazyLock;

use regex::Regex;

use super::{OptimizationSuggestion, Rule, RuleContext, RuleInfo, SuggestionPriority, SuggestionType};
use crate::{options::AnalysisOptions, query};

static SELECT_STAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bselect\s+\*")
        .unwrap_or_else(|e| panic!("invalid select-star pattern: {e}"))
});

static FUNCTION_IN_WHERE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bwhere\s+.*\w+\s*\(.*\)\s*[=<>]")
        .unwrap_or_else(|e| panic!("invalid function-in-where pattern: {e}"))
});

static LEADING_WILDCARD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\blike\s+['"]%"#)
        .unwrap_or_else(|e| panic!("invalid leading-wildcard pattern: {e}"))
});

static DISTINCT_COUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bselect\s+distinct\s+count\b")
        .unwrap_or_else(|e| panic!("invalid distinct-count pattern: {e}"))
});

static IN_SELECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bin\s*\(\s*select\b")
        .unwrap_or_else(|e| panic!("invalid in-select pattern: {e}"))
});

static NOT_IN_SELECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bnot\s+in\s*\(\s*select\b")
        .unwrap_or_else(|e| panic!("invalid not-in-select pattern: {e}"))
});

static SELECT_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bselect\b")
        .unwrap_or_else(|e| panic!("invalid select pattern: {e}"))
});

static LIMIT_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(limit|top|fetch)\b")
        .unwrap_or_else(|e| panic!("invalid limit pattern: {e}"))
});

static INSERT_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\binsert\b").unwrap_or_else(|e| panic!("invalid insert pattern: {e}"))
});

static VALUES_TUPLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(\s*[^)]+\s*\)")
        .unwrap_or_else(|e| panic!("invalid values-tuple pattern: {e}"))
});

/// SELECT * returns unnecessary data
pub struct SelectStar;

impl Rule for SelectStar {
    fn info(&self) -> RuleInfo {
        RuleInfo {
            name:            "SELECT * usage",
            suggestion_type: SuggestionType::Performance,
            priority:        SuggestionPriority::Medium
        }
    }

    fn enabled(&self, options: &AnalysisOptions) -> bool {
        options.performance.check_select_star
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<OptimizationSuggestion> {
        if SELECT_STAR.is_match(ctx.sql) {
            let info = self.info();
            return vec![OptimizationSuggestion {
                suggestion_type: info.suggestion_type,
                priority:        info.priority,
                message:         "Avoid SELECT *, it returns unnecessary data and slows things down"
                    .to_string(),
                recommendation:  Some("Specify only the columns you need".to_string()),
                example:         Some("SELECT id, name, email FROM users".to_string())
            }];
        }
        vec![]
    }
}

/// WHERE clause filters on columns that have no index
///
/// Fires per WHERE clause, and only when *none* of the referenced columns
/// are indexed (all-or-none semantics).
pub struct MissingIndex;

impl Rule for MissingIndex {
    fn info(&self) -> RuleInfo {
        RuleInfo {
            name:            "Missing index on WHERE columns",
            suggestion_type: SuggestionType::IndexOptimization,
            priority:        SuggestionPriority::High
        }
    }

    fn enabled(&self, options: &AnalysisOptions) -> bool {
        options.index_analysis && options.performance.check_missing_indexes
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<OptimizationSuggestion> {
        if !ctx.has_schema {
            return vec![];
        }
        let mut suggestions = Vec::new();
        for where_clause in query::extract_where_clauses(ctx.sql) {
            let columns = query::extract_where_columns(&where_clause);
            if columns.is_empty() {
                continue;
            }
            if columns.iter().any(|col| ctx.schema.is_indexed(col)) {
                continue;
            }
            let column_list = columns.join(", ");
            let index_name = columns.join("_");
            let info = self.info();
            suggestions.push(OptimizationSuggestion {
                suggestion_type: info.suggestion_type,
                priority:        info.priority,
                message:
                    "WHERE clause doesn't use indexed columns - consider adding indexes"
                        .to_string(),
                recommendation:  Some(format!("Add indexes on columns: {column_list}")),
                example:         Some(format!(
                    "CREATE INDEX idx_{index_name} ON table_name ({column_list})"
                ))
            });
        }
        suggestions
    }
}

/// Function call on a column inside WHERE prevents index usage
pub struct FunctionInWhere;

impl Rule for FunctionInWhere {
    fn info(&self) -> RuleInfo {
        RuleInfo {
            name:            "Function in WHERE clause",
            suggestion_type: SuggestionType::Performance,
            priority:        SuggestionPriority::High
        }
    }

    fn enabled(&self, options: &AnalysisOptions) -> bool {
        options.performance.check_functions_in_where
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<OptimizationSuggestion> {
        if FUNCTION_IN_WHERE.is_match(ctx.sql) {
            let info = self.info();
            return vec![OptimizationSuggestion {
                suggestion_type: info.suggestion_type,
                priority:        info.priority,
                message:         "Avoid functions in WHERE clause as they prevent index usage"
                    .to_string(),
                recommendation:  Some(
                    "Move function logic to application layer or use computed columns".to_string()
                ),
                example:         Some(
                    "Instead of WHERE UPPER(name) = 'JOHN', use WHERE name = 'John' with proper \
                     case handling"
                        .to_string()
                )
            }];
        }
        vec![]
    }
}

/// LIKE patterns starting with a wildcard prevent index usage
pub struct LeadingWildcard;

impl Rule for LeadingWildcard {
    fn info(&self) -> RuleInfo {
        RuleInfo {
            name:            "Leading wildcard in LIKE",
            suggestion_type: SuggestionType::Performance,
            priority:        SuggestionPriority::Medium
        }
    }

    fn enabled(&self, options: &AnalysisOptions) -> bool {
        options.performance.check_leading_wildcards
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<OptimizationSuggestion> {
        if LEADING_WILDCARD.is_match(ctx.sql) {
            let info = self.info();
            return vec![OptimizationSuggestion {
                suggestion_type: info.suggestion_type,
                priority:        info.priority,
                message:         "Leading wildcards in LIKE patterns prevent index usage"
                    .to_string(),
                recommendation:  Some(
                    "Avoid starting LIKE patterns with wildcards when possible".to_string()
                ),
                example:         Some(
                    "Use name LIKE 'John%' instead of name LIKE '%John%' if searching from the \
                     beginning"
                        .to_string()
                )
            }];
        }
        vec![]
    }
}

/// SELECT DISTINCT COUNT is usually redundant
pub struct UnnecessaryDistinct;

impl Rule for UnnecessaryDistinct {
    fn info(&self) -> RuleInfo {
        RuleInfo {
            name:            "DISTINCT with COUNT",
            suggestion_type: SuggestionType::QueryStructure,
            priority:        SuggestionPriority::Low
        }
    }

    fn enabled(&self, options: &AnalysisOptions) -> bool {
        options.performance.check_unnecessary_distinct
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<OptimizationSuggestion> {
        if DISTINCT_COUNT.is_match(ctx.sql) {
            let info = self.info();
            return vec![OptimizationSuggestion {
                suggestion_type: info.suggestion_type,
                priority:        info.priority,
                message:         "DISTINCT with COUNT might be unnecessary".to_string(),
                recommendation:  Some("Consider if you really need unique counts".to_string()),
                example:         Some(
                    "Use SELECT COUNT(*) unless duplicates must be excluded".to_string()
                )
            }];
        }
        vec![]
    }
}

/// IN / NOT IN with a subquery is often slower than EXISTS
///
/// The plain `IN (SELECT` shape also matches inside `NOT IN (SELECT`, so a
/// NOT IN subquery emits both suggestions.
pub struct SubqueryOptimization;

impl Rule for SubqueryOptimization {
    fn info(&self) -> RuleInfo {
        RuleInfo {
            name:            "Subquery in IN clause",
            suggestion_type: SuggestionType::QueryStructure,
            priority:        SuggestionPriority::Medium
        }
    }

    fn enabled(&self, options: &AnalysisOptions) -> bool {
        options.performance.check_subquery_optimization
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<OptimizationSuggestion> {
        let info = self.info();
        let mut suggestions = Vec::new();
        if IN_SELECT.is_match(ctx.sql) {
            suggestions.push(OptimizationSuggestion {
                suggestion_type: info.suggestion_type,
                priority:        info.priority,
                message:         "Subquery inside IN clause detected".to_string(),
                recommendation:  Some(
                    "Consider using EXISTS instead of IN for better performance with subqueries"
                        .to_string()
                ),
                example:         Some(
                    "WHERE EXISTS (SELECT 1 FROM orders o WHERE o.user_id = users.id)"
                        .to_string()
                )
            });
        }
        if NOT_IN_SELECT.is_match(ctx.sql) {
            suggestions.push(OptimizationSuggestion {
                suggestion_type: info.suggestion_type,
                priority:        info.priority,
                message:         "Subquery inside NOT IN clause detected".to_string(),
                recommendation:  Some(
                    "Consider using NOT EXISTS instead of NOT IN for better performance with \
                     subqueries"
                        .to_string()
                ),
                example:         Some(
                    "WHERE NOT EXISTS (SELECT 1 FROM orders o WHERE o.user_id = users.id)"
                        .to_string()
                )
            });
        }
        suggestions
    }
}

/// SELECT without LIMIT/TOP/FETCH can return unbounded rows
pub struct MissingLimit;

impl Rule for MissingLimit {
    fn info(&self) -> RuleInfo {
        RuleInfo {
            name:            "SELECT without row limit",
            suggestion_type: SuggestionType::QueryStructure,
            priority:        SuggestionPriority::Low
        }
    }

    fn enabled(&self, options: &AnalysisOptions) -> bool {
        options.performance.check_missing_limit
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<OptimizationSuggestion> {
        if SELECT_KEYWORD.is_match(ctx.sql) && !LIMIT_KEYWORD.is_match(ctx.sql) {
            let info = self.info();
            return vec![OptimizationSuggestion {
                suggestion_type: info.suggestion_type,
                priority:        info.priority,
                message:         "Consider adding LIMIT/TOP to prevent returning excessive rows"
                    .to_string(),
                recommendation:  Some(
                    "Bound result sets explicitly unless all rows are needed".to_string()
                ),
                example:         Some("SELECT id, name FROM users LIMIT 100".to_string())
            }];
        }
        vec![]
    }
}

/// INSERT with more VALUES tuples than the configured threshold
pub struct BulkInsert;

impl Rule for BulkInsert {
    fn info(&self) -> RuleInfo {
        RuleInfo {
            name:            "Bulk INSERT",
            suggestion_type: SuggestionType::QueryStructure,
            priority:        SuggestionPriority::Low
        }
    }

    fn enabled(&self, options: &AnalysisOptions) -> bool {
        options.performance.check_bulk_insert
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<OptimizationSuggestion> {
        if !INSERT_KEYWORD.is_match(ctx.sql) {
            return vec![];
        }
        // Tuples are counted after the VALUES keyword only, so a column list
        // never counts toward the threshold.
        let Some(values_pos) = ctx.sql.find("values") else {
            return vec![];
        };
        let tuple_count = VALUES_TUPLE.find_iter(&ctx.sql[values_pos..]).count();
        if tuple_count > ctx.options.performance.bulk_insert_threshold {
            let info = self.info();
            return vec![OptimizationSuggestion {
                suggestion_type: info.suggestion_type,
                priority:        info.priority,
                message:         "Consider using batch processing for large INSERT operations"
                    .to_string(),
                recommendation:  Some(format!(
                    "Split the statement into batches of at most {} rows",
                    ctx.options.performance.bulk_insert_threshold
                )),
                example:         Some(
                    "INSERT INTO users (id, name) VALUES (1, 'a'), (2, 'b'); -- repeat per batch"
                        .to_string()
                )
            }];
        }
        vec![]
    }
}
