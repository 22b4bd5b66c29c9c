use sql_optimizer::query::{
    extract_where_clauses, extract_where_columns, is_recognized_statement, is_reserved_word,
    normalize
};

#[test]
fn test_normalize_trims_and_lowercases() {
    assert_eq!(normalize("  SELECT * FROM Users  "), "select * from users");
}

#[test]
fn test_recognized_statement_openers() {
    assert!(is_recognized_statement("SELECT 1"));
    assert!(is_recognized_statement("insert into t values (1)"));
    assert!(is_recognized_statement("  UPDATE t SET a = 1"));
    assert!(is_recognized_statement("DELETE FROM t"));
    assert!(is_recognized_statement("CREATE TABLE t (id INT)"));
    assert!(is_recognized_statement("ALTER TABLE t ADD c INT"));
    assert!(is_recognized_statement("DROP TABLE t"));
}

#[test]
fn test_unrecognized_statement_openers() {
    assert!(!is_recognized_statement("hello world"));
    assert!(!is_recognized_statement("TRUNCATE TABLE t"));
    assert!(!is_recognized_statement("selecting is not a statement"));
    assert!(!is_recognized_statement(""));
}

#[test]
fn test_where_clause_until_end_of_statement() {
    let clauses = extract_where_clauses("select id from users where id = 1");
    assert_eq!(clauses, vec!["id = 1"]);
}

#[test]
fn test_where_clause_terminated_by_order_by() {
    let clauses = extract_where_clauses("select id from users where id = 1 order by name");
    assert_eq!(clauses, vec!["id = 1"]);
}

#[test]
fn test_where_clause_terminated_by_group_by() {
    let clauses =
        extract_where_clauses("select count(*) from users where active = 1 group by city");
    assert_eq!(clauses, vec!["active = 1"]);
}

#[test]
fn test_where_clause_terminated_by_having() {
    let clauses =
        extract_where_clauses("select city from users where active = 1 having count(*) > 2");
    assert_eq!(clauses, vec!["active = 1"]);
}

#[test]
fn test_multiple_where_clauses_in_order() {
    let sql = "select id from a where x = 1 order by x; delete from b where y = 2";
    let clauses = extract_where_clauses(sql);
    assert_eq!(clauses.len(), 2);
    assert_eq!(clauses[0], "x = 1");
    assert_eq!(clauses[1], "y = 2");
}

#[test]
fn test_no_where_clause_is_empty_not_error() {
    assert!(extract_where_clauses("select id from users").is_empty());
    assert!(extract_where_clauses("").is_empty());
}

#[test]
fn test_columns_from_comparisons() {
    let columns = extract_where_columns("user_id = 123 and age > 18 and score < 10 and x != 1");
    assert_eq!(columns.as_slice(), ["user_id", "age", "score", "x"]);
}

#[test]
fn test_columns_from_between() {
    let columns = extract_where_columns("age between 18 and 65");
    assert_eq!(columns.as_slice(), ["age"]);
}

#[test]
fn test_columns_from_in_list() {
    let columns = extract_where_columns("status in ('active', 'pending')");
    assert_eq!(columns.as_slice(), ["status"]);
}

#[test]
fn test_columns_from_like() {
    let columns = extract_where_columns("name like '%john%'");
    assert_eq!(columns.as_slice(), ["name"]);
}

#[test]
fn test_columns_deduplicated_in_first_seen_order() {
    let columns = extract_where_columns("a = 1 and b = 2 and a > 0 and b like 'x%'");
    assert_eq!(columns.as_slice(), ["a", "b"]);
}

#[test]
fn test_reserved_words_filtered() {
    // "end" sits directly before a comparison but is a keyword
    let columns = extract_where_columns("case when a = 1 then b else c end = 1");
    assert_eq!(columns.as_slice(), ["a"]);
}

#[test]
fn test_keyword_left_hand_tokens_not_reported() {
    // A keyword token inside a string literal must not surface as a column.
    let columns = extract_where_columns("name like 'where = x'");
    assert_eq!(columns.as_slice(), ["name"]);
}

#[test]
fn test_empty_where_body_yields_no_columns() {
    assert!(extract_where_columns("").is_empty());
    assert!(extract_where_columns("1 = 1").is_empty());
}

#[test]
fn test_reserved_word_lookup() {
    assert!(is_reserved_word("select"));
    assert!(is_reserved_word("between"));
    assert!(!is_reserved_word("user_id"));
}
