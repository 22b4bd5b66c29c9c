use std::sync::LazyLock;

use regex::Regex;

use super::{OptimizationSuggestion, Rule, RuleContext, RuleInfo, SuggestionPriority, SuggestionType};
use crate::options::AnalysisOptions;

static STRING_CONCATENATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"['"]\s*\+\s*\w+\s*\+\s*['"]"#)
        .unwrap_or_else(|e| panic!("invalid concatenation pattern: {e}"))
});

static DYNAMIC_EXEC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(exec|execute)\s*\(")
        .unwrap_or_else(|e| panic!("invalid exec pattern: {e}"))
});

static HARDCODED_PASSWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\b(password|pwd)\s*=\s*['"][^'"]+['"]"#)
        .unwrap_or_else(|e| panic!("invalid credentials pattern: {e}"))
});

/// String-literal concatenation indicates injectable query construction
pub struct SqlInjection;

impl Rule for SqlInjection {
    fn info(&self) -> RuleInfo {
        RuleInfo {
            name:            "Possible SQL injection",
            suggestion_type: SuggestionType::Security,
            priority:        SuggestionPriority::Critical
        }
    }

    fn enabled(&self, options: &AnalysisOptions) -> bool {
        options.security.check_sql_injection
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<OptimizationSuggestion> {
        if STRING_CONCATENATION.is_match(ctx.sql) {
            let info = self.info();
            return vec![OptimizationSuggestion {
                suggestion_type: info.suggestion_type,
                priority:        info.priority,
                message:         "Potential SQL injection: String concatenation detected"
                    .to_string(),
                recommendation:  Some(
                    "Use parameterized queries instead of string concatenation".to_string()
                ),
                example:         Some(
                    "Use @param parameters instead of concatenating user input".to_string()
                )
            }];
        }
        vec![]
    }
}

/// EXEC()/EXECUTE() runs dynamically assembled SQL
pub struct DynamicSql;

impl Rule for DynamicSql {
    fn info(&self) -> RuleInfo {
        RuleInfo {
            name:            "Dynamic SQL execution",
            suggestion_type: SuggestionType::Security,
            priority:        SuggestionPriority::High
        }
    }

    fn enabled(&self, options: &AnalysisOptions) -> bool {
        options.security.check_dynamic_sql
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<OptimizationSuggestion> {
        if DYNAMIC_EXEC.is_match(ctx.sql) {
            let info = self.info();
            return vec![OptimizationSuggestion {
                suggestion_type: info.suggestion_type,
                priority:        info.priority,
                message:         "Dynamic SQL detected".to_string(),
                recommendation:  Some(
                    "Use stored procedures or parameterized queries for security".to_string()
                ),
                example:         Some(
                    "Replace dynamic SQL with stored procedures or ORM queries".to_string()
                )
            }];
        }
        vec![]
    }
}

/// Line comments carrying configured sensitive keywords
///
/// At most one suggestion is emitted regardless of how many keywords match.
pub struct SensitiveComments;

impl Rule for SensitiveComments {
    fn info(&self) -> RuleInfo {
        RuleInfo {
            name:            "Sensitive data in comments",
            suggestion_type: SuggestionType::Security,
            priority:        SuggestionPriority::High
        }
    }

    fn enabled(&self, options: &AnalysisOptions) -> bool {
        options.security.check_sensitive_comments
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<OptimizationSuggestion> {
        for keyword in &ctx.options.security.sensitive_keywords {
            let pattern = format!(r"--.*\b{}\b", regex::escape(&keyword.to_lowercase()));
            let Ok(comment_with_keyword) = Regex::new(&pattern) else {
                continue;
            };
            if comment_with_keyword.is_match(ctx.sql) {
                let info = self.info();
                return vec![OptimizationSuggestion {
                    suggestion_type: info.suggestion_type,
                    priority:        info.priority,
                    message:         "Sensitive information found in comments".to_string(),
                    recommendation:  Some(
                        "Remove all sensitive information from SQL comments before production"
                            .to_string()
                    ),
                    example:         Some(
                        "Remove passwords, keys, and other secrets from comments".to_string()
                    )
                }];
            }
        }
        vec![]
    }
}

/// Literal password assignment embedded in the statement
pub struct HardcodedCredentials;

impl Rule for HardcodedCredentials {
    fn info(&self) -> RuleInfo {
        RuleInfo {
            name:            "Hardcoded credentials",
            suggestion_type: SuggestionType::Security,
            priority:        SuggestionPriority::High
        }
    }

    fn enabled(&self, options: &AnalysisOptions) -> bool {
        options.security.check_hardcoded_credentials
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<OptimizationSuggestion> {
        if HARDCODED_PASSWORD.is_match(ctx.sql) {
            let info = self.info();
            return vec![OptimizationSuggestion {
                suggestion_type: info.suggestion_type,
                priority:        info.priority,
                message:         "Hardcoded credentials detected".to_string(),
                recommendation:  Some("Use secure configuration instead".to_string()),
                example:         Some(
                    "Load secrets from a vault or environment, never from statement text"
                        .to_string()
                )
            }];
        }
        vec![]
    }
}
