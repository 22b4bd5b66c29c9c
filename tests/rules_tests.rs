use sql_optimizer::{
    analyzer::Analyzer,
    options::AnalysisOptions,
    rules::{OptimizationSuggestion, SuggestionPriority, SuggestionType}
};

fn analyze(sql: &str) -> Vec<OptimizationSuggestion> {
    Analyzer::analyze(sql, "", &AnalysisOptions::default()).suggestions
}

fn analyze_with_schema(sql: &str, ddl: &str) -> Vec<OptimizationSuggestion> {
    Analyzer::analyze(sql, ddl, &AnalysisOptions::default()).suggestions
}

fn has_message(suggestions: &[OptimizationSuggestion], fragment: &str) -> bool {
    suggestions.iter().any(|s| s.message.contains(fragment))
}

#[test]
fn test_select_star_triggers() {
    let suggestions = analyze("SELECT * FROM users LIMIT 10");
    assert!(has_message(&suggestions, "Avoid SELECT *"));
}

#[test]
fn test_explicit_columns_do_not_trigger_select_star() {
    let suggestions = analyze("SELECT id, name FROM users LIMIT 10");
    assert!(!has_message(&suggestions, "Avoid SELECT *"));
}

#[test]
fn test_missing_index_fires_when_no_where_column_indexed() {
    let suggestions = analyze_with_schema(
        "SELECT id FROM users WHERE name = 'x' LIMIT 10",
        "CREATE TABLE users (id INT PRIMARY KEY, name VARCHAR(50))"
    );
    let index_suggestion = suggestions
        .iter()
        .find(|s| s.suggestion_type == SuggestionType::IndexOptimization)
        .expect("index suggestion expected");
    assert_eq!(index_suggestion.priority, SuggestionPriority::High);
    assert!(
        index_suggestion
            .recommendation
            .as_deref()
            .is_some_and(|r| r.contains("name"))
    );
}

#[test]
fn test_missing_index_all_or_none() {
    // One indexed column among the referenced set suppresses the finding
    let suggestions = analyze_with_schema(
        "SELECT id FROM users WHERE id = 1 AND name = 'x' LIMIT 10",
        "CREATE TABLE users (id INT PRIMARY KEY, name VARCHAR(50))"
    );
    assert!(
        !suggestions
            .iter()
            .any(|s| s.suggestion_type == SuggestionType::IndexOptimization)
    );
}

#[test]
fn test_missing_index_disabled_without_schema() {
    let suggestions = analyze("SELECT id FROM users WHERE name = 'x' LIMIT 10");
    assert!(
        !suggestions
            .iter()
            .any(|s| s.suggestion_type == SuggestionType::IndexOptimization)
    );
}

#[test]
fn test_missing_index_per_where_clause() {
    let sql = "SELECT id FROM a WHERE x = 1 ORDER BY x; DELETE FROM b WHERE y = 2";
    let ddl = "CREATE TABLE a (id INT PRIMARY KEY)";
    let suggestions = analyze_with_schema(sql, ddl);
    let count = suggestions
        .iter()
        .filter(|s| s.suggestion_type == SuggestionType::IndexOptimization)
        .count();
    assert_eq!(count, 2);
}

#[test]
fn test_function_in_where_triggers() {
    let suggestions = analyze("SELECT id FROM users WHERE UPPER(name) = 'JOHN' LIMIT 10");
    assert!(has_message(&suggestions, "Avoid functions in WHERE clause"));
}

#[test]
fn test_plain_comparison_does_not_trigger_function_rule() {
    let suggestions = analyze("SELECT id FROM users WHERE name = 'john' LIMIT 10");
    assert!(!has_message(&suggestions, "Avoid functions in WHERE clause"));
}

#[test]
fn test_leading_wildcard_triggers() {
    let suggestions = analyze("SELECT id FROM users WHERE name LIKE '%john' LIMIT 10");
    assert!(has_message(&suggestions, "Leading wildcards"));
}

#[test]
fn test_trailing_wildcard_does_not_trigger() {
    let suggestions = analyze("SELECT id FROM users WHERE name LIKE 'john%' LIMIT 10");
    assert!(!has_message(&suggestions, "Leading wildcards"));
}

#[test]
fn test_unnecessary_distinct_triggers() {
    let suggestions = analyze("SELECT DISTINCT COUNT(*) FROM users LIMIT 1");
    assert!(has_message(&suggestions, "DISTINCT with COUNT"));
}

#[test]
fn test_subquery_in_triggers() {
    let suggestions =
        analyze("SELECT id FROM users WHERE id IN (SELECT user_id FROM orders) LIMIT 10");
    assert!(has_message(&suggestions, "Subquery inside IN clause"));
}

#[test]
fn test_subquery_not_in_emits_both_shapes() {
    let suggestions =
        analyze("SELECT id FROM users WHERE id NOT IN (SELECT user_id FROM orders) LIMIT 10");
    assert!(has_message(&suggestions, "Subquery inside IN clause"));
    assert!(has_message(&suggestions, "Subquery inside NOT IN clause"));
}

#[test]
fn test_missing_limit_triggers() {
    let suggestions = analyze("SELECT id FROM users WHERE id = 1");
    assert!(has_message(&suggestions, "Consider adding LIMIT/TOP"));
}

#[test]
fn test_limit_present_suppresses_missing_limit() {
    let suggestions = analyze("SELECT id FROM users WHERE id = 1 LIMIT 10");
    assert!(!has_message(&suggestions, "Consider adding LIMIT/TOP"));
}

#[test]
fn test_fetch_counts_as_row_limit() {
    let suggestions = analyze("SELECT id FROM users FETCH FIRST 10 ROWS ONLY");
    assert!(!has_message(&suggestions, "Consider adding LIMIT/TOP"));
}

#[test]
fn test_bulk_insert_over_threshold() {
    let mut options = AnalysisOptions::default();
    options.performance.bulk_insert_threshold = 2;
    let sql = "INSERT INTO t (a) VALUES (1), (2), (3)";
    let result = Analyzer::analyze(sql, "", &options);
    assert!(has_message(&result.suggestions, "batch processing"));
}

#[test]
fn test_bulk_insert_column_list_not_counted() {
    let mut options = AnalysisOptions::default();
    options.performance.bulk_insert_threshold = 3;
    // Three tuples after VALUES, plus a column list before it
    let sql = "INSERT INTO t (a) VALUES (1), (2), (3)";
    let result = Analyzer::analyze(sql, "", &options);
    assert!(!has_message(&result.suggestions, "batch processing"));
}

#[test]
fn test_bulk_insert_under_default_threshold() {
    let suggestions = analyze("INSERT INTO t (a, b) VALUES (1, 'x')");
    assert!(!has_message(&suggestions, "batch processing"));
}

#[test]
fn test_sql_injection_concatenation() {
    let suggestions = analyze("SELECT * FROM users WHERE name = '' + userName + '' LIMIT 10");
    let injection = suggestions
        .iter()
        .find(|s| s.message.contains("SQL injection"))
        .expect("injection suggestion expected");
    assert_eq!(injection.priority, SuggestionPriority::Critical);
    assert_eq!(injection.suggestion_type, SuggestionType::Security);
}

#[test]
fn test_dynamic_sql_exec() {
    let suggestions = analyze("SELECT 1; EXEC('DROP TABLE users')");
    assert!(has_message(&suggestions, "Dynamic SQL detected"));
}

#[test]
fn test_dynamic_sql_execute_with_space() {
    let suggestions = analyze("SELECT 1; EXECUTE ('DROP TABLE users')");
    assert!(has_message(&suggestions, "Dynamic SQL detected"));
}

#[test]
fn test_sensitive_comment_default_keyword() {
    let suggestions = analyze("SELECT id FROM users LIMIT 10 -- admin access only");
    assert!(has_message(&suggestions, "Sensitive information found in comments"));
}

#[test]
fn test_sensitive_comment_single_suggestion_for_many_keywords() {
    let suggestions = analyze("SELECT id FROM t LIMIT 1 -- password and secret and token");
    let count = suggestions
        .iter()
        .filter(|s| s.message.contains("Sensitive information"))
        .count();
    assert_eq!(count, 1);
}

#[test]
fn test_sensitive_comment_custom_keyword() {
    let mut options = AnalysisOptions::default();
    options.security.sensitive_keywords = vec![String::from("internal")];
    let result = Analyzer::analyze("SELECT id FROM t LIMIT 1 -- internal only", "", &options);
    assert!(has_message(&result.suggestions, "Sensitive information"));

    let result = Analyzer::analyze("SELECT id FROM t LIMIT 1 -- password here", "", &options);
    assert!(!has_message(&result.suggestions, "Sensitive information"));
}

#[test]
fn test_comment_without_keywords_is_clean() {
    let suggestions = analyze("SELECT id FROM users LIMIT 10 -- fetch the newest rows");
    assert!(!has_message(&suggestions, "Sensitive information"));
}

#[test]
fn test_hardcoded_credentials() {
    let suggestions = analyze("UPDATE users SET pwd = 'hunter2' WHERE id = 1");
    assert!(has_message(&suggestions, "Hardcoded credentials"));
}

#[test]
fn test_parameterized_password_is_clean() {
    let suggestions = analyze("UPDATE users SET password = @password WHERE id = 1");
    assert!(!has_message(&suggestions, "Hardcoded credentials"));
}

#[test]
fn test_insert_without_column_list() {
    let suggestions = analyze("INSERT INTO users VALUES (1, 'John')");
    assert!(has_message(&suggestions, "INSERT without explicit column names"));
}

#[test]
fn test_insert_with_column_list_is_clean() {
    let suggestions = analyze("INSERT INTO users (id, name) VALUES (1, 'John')");
    assert!(!has_message(&suggestions, "INSERT without explicit column names"));
}

#[test]
fn test_update_without_where() {
    let suggestions = analyze("UPDATE users SET status = 'active'");
    let critical = suggestions
        .iter()
        .find(|s| s.message.contains("UPDATE without WHERE"))
        .expect("update suggestion expected");
    assert_eq!(critical.priority, SuggestionPriority::Critical);
    assert_eq!(critical.suggestion_type, SuggestionType::BestPractice);
}

#[test]
fn test_update_with_where_is_clean() {
    let suggestions = analyze("UPDATE users SET status = 'active' WHERE id = 1");
    assert!(!has_message(&suggestions, "UPDATE without WHERE"));
}

#[test]
fn test_delete_without_where() {
    let suggestions = analyze("DELETE FROM logs");
    let critical = suggestions
        .iter()
        .find(|s| s.message.contains("DELETE without WHERE"))
        .expect("delete suggestion expected");
    assert_eq!(critical.priority, SuggestionPriority::Critical);
}

#[test]
fn test_delete_with_where_is_clean() {
    let suggestions = analyze("DELETE FROM logs WHERE created_at < '2020-01-01'");
    assert!(!has_message(&suggestions, "DELETE without WHERE"));
}

#[test]
fn test_per_rule_toggle() {
    let mut options = AnalysisOptions::default();
    options.performance.check_select_star = false;
    let result = Analyzer::analyze("SELECT * FROM users LIMIT 10", "", &options);
    assert!(!has_message(&result.suggestions, "Avoid SELECT *"));
}

#[test]
fn test_category_toggle_skips_group() {
    let mut options = AnalysisOptions::default();
    options.security_analysis = false;
    let result = Analyzer::analyze(
        "SELECT id FROM t WHERE name = '' + x + '' LIMIT 1 -- password",
        "",
        &options
    );
    assert!(
        !result
            .suggestions
            .iter()
            .any(|s| s.suggestion_type == SuggestionType::Security)
    );
}

#[test]
fn test_every_suggestion_carries_recommendation() {
    let suggestions = analyze("SELECT * FROM users WHERE name LIKE '%x'");
    assert!(!suggestions.is_empty());
    assert!(suggestions.iter().all(|s| s.recommendation.is_some()));
}

#[test]
fn test_deterministic_category_order() {
    let sql = "SELECT * FROM users WHERE name = '' + x + ''";
    let suggestions = analyze(sql);
    let first_security = suggestions
        .iter()
        .position(|s| s.suggestion_type == SuggestionType::Security);
    let last_performance = suggestions
        .iter()
        .rposition(|s| s.suggestion_type == SuggestionType::Performance);
    if let (Some(sec), Some(perf)) = (first_security, last_performance) {
        assert!(perf < sec, "performance suggestions precede security");
    }
}
