//! SQL text normalization and WHERE-clause extraction.
//!
//! The analyzer works on pattern-level text scanning rather than a full SQL
//! grammar. This module owns the shared pieces of that scanning:
//!
//! - [`normalize`] - lower-cased, trimmed statement text shared by all rules
//! - [`is_recognized_statement`] - the statement-opener validity gate
//! - [`extract_where_clauses`] - ordered WHERE-clause bodies
//! - [`extract_where_columns`] - candidate column names referenced by one
//!   WHERE body, filtered against SQL reserved words
//!
//! # Example
//!
//! ```
//! use sql_optimizer::query::{extract_where_clauses, extract_where_columns, normalize};
//!
//! let sql = normalize("SELECT * FROM users WHERE name = 'x' ORDER BY id");
//! let clauses = extract_where_clauses(&sql);
//! assert_eq!(clauses, vec!["name = 'x'"]);
//!
//! let columns = extract_where_columns(&clauses[0]);
//! assert_eq!(columns.as_slice(), ["name"]);
//! ```

use std::{collections::HashSet, sync::LazyLock};

use compact_str::CompactString;
use indexmap::IndexSet;
use regex::Regex;
use smallvec::SmallVec;

/// Type alias for small column vectors (typically < 8 elements)
pub type ColumnVec = SmallVec<[CompactString; 8]>;

/// Openers of statements the analyzer recognizes.
const STATEMENT_OPENERS: [&str; 7] = [
    "select", "insert", "update", "delete", "create", "alter", "drop"
];

/// Reserved words that must never be reported as column names.
static RESERVED_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "and", "or", "not", "null", "true", "false", "like", "in", "between", "exists", "case",
        "when", "then", "else", "end", "is", "as", "on", "join", "select", "from", "where",
        "insert", "update", "delete", "create", "drop", "alter", "table", "index", "view", "into",
        "values", "set", "order", "by", "group", "having", "distinct", "union", "inner", "left",
        "right", "outer", "full", "cross", "asc", "desc", "limit", "top", "offset", "fetch",
        "first", "last", "count", "sum", "avg", "min", "max"
    ])
});

// WHERE body: non-greedy up to the nearest ORDER BY / GROUP BY / HAVING or
// end of text.
static WHERE_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\bwhere\s+(.+?)(?:\s+order\s+by|\s+group\s+by|\s+having|\s*$)")
        .unwrap_or_else(|e| panic!("invalid where-clause pattern: {e}"))
});

static COMPARISON_COLUMN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([a-z_][a-z0-9_]*)\s*[=<>!]")
        .unwrap_or_else(|e| panic!("invalid comparison pattern: {e}"))
});

static BETWEEN_COLUMN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([a-z_][a-z0-9_]*)\s+between\b")
        .unwrap_or_else(|e| panic!("invalid between pattern: {e}"))
});

static IN_COLUMN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([a-z_][a-z0-9_]*)\s+in\s*\(")
        .unwrap_or_else(|e| panic!("invalid in pattern: {e}"))
});

static LIKE_COLUMN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([a-z_][a-z0-9_]*)\s+like\b")
        .unwrap_or_else(|e| panic!("invalid like pattern: {e}"))
});

/// Normalize statement text: trim and case-fold once per call.
///
/// Every rule and extractor operates on this shared form, so patterns can
/// match lower-case text without per-pattern case folding.
pub fn normalize(sql: &str) -> String {
    sql.trim().to_lowercase()
}

/// Check whether the text opens with a recognized statement keyword.
///
/// This is a validity gate, not a grammar check: it only confirms that the
/// first keyword is one of SELECT/INSERT/UPDATE/DELETE/CREATE/ALTER/DROP.
pub fn is_recognized_statement(sql: &str) -> bool {
    let normalized = normalize(sql);
    STATEMENT_OPENERS.iter().any(|opener| {
        normalized.strip_prefix(opener).is_some_and(|rest| {
            rest.chars().next().is_some_and(char::is_whitespace)
        })
    })
}

/// Extract the ordered sequence of WHERE-clause bodies from normalized SQL.
///
/// Each body runs up to the nearest following ORDER BY, GROUP BY, or HAVING
/// clause, or the end of the statement. An input without WHERE clauses
/// yields an empty vector, never an error.
pub fn extract_where_clauses(sql: &str) -> Vec<String> {
    WHERE_CLAUSE
        .captures_iter(sql)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .collect()
}

/// Extract distinct candidate column names from one WHERE body.
///
/// Columns are recognized on the left-hand side of comparison operators
/// (`=`, `<`, `>`, `!=`), `BETWEEN`, `IN(...)`, and `LIKE` predicates.
/// Results are lower-cased, de-duplicated in first-seen order, and filtered
/// against the reserved-word set so keyword tokens are never reported.
pub fn extract_where_columns(where_clause: &str) -> ColumnVec {
    let mut columns: IndexSet<CompactString> = IndexSet::new();
    let patterns = [
        &*COMPARISON_COLUMN,
        &*BETWEEN_COLUMN,
        &*IN_COLUMN,
        &*LIKE_COLUMN
    ];
    for pattern in patterns {
        for caps in pattern.captures_iter(where_clause) {
            if let Some(name) = caps.get(1) {
                let name = name.as_str();
                if !is_reserved_word(name) {
                    columns.insert(CompactString::from(name));
                }
            }
        }
    }
    columns.into_iter().collect()
}

/// Whether a lower-cased token is an SQL reserved word.
pub fn is_reserved_word(word: &str) -> bool {
    RESERVED_WORDS.contains(word)
}
