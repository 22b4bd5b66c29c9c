//! Indexed-column extraction from table DDL text.
//!
//! The analyzer only needs to know which columns of the supplied table are
//! backed by an index, so the schema model is a bare set of column names
//! rather than a full table description. A column counts as indexed when it
//! participates in a PRIMARY KEY or UNIQUE constraint, whether declared at
//! table level or inline on the column definition.
//!
//! # Example
//!
//! ```
//! use sql_optimizer::schema::SchemaIndex;
//!
//! let ddl = r#"
//!     CREATE TABLE users (
//!         id INT PRIMARY KEY,
//!         email VARCHAR(255) UNIQUE,
//!         name VARCHAR(50),
//!         UNIQUE (email, name)
//!     )
//! "#;
//!
//! let index = SchemaIndex::parse(ddl);
//! assert!(index.is_indexed("ID"));
//! assert!(index.is_indexed("email"));
//! assert!(index.is_indexed("name"));
//! assert!(!index.is_indexed("created_at"));
//! ```

use std::sync::LazyLock;

use compact_str::CompactString;
use indexmap::IndexSet;
use regex::Regex;

// Table-level constraints: PRIMARY KEY (a, b) / UNIQUE (a, b)
static TABLE_PRIMARY_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"primary\s+key\s*\(\s*([^)]+)\s*\)")
        .unwrap_or_else(|e| panic!("invalid primary key pattern: {e}"))
});

static TABLE_UNIQUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"unique\s*\(\s*([^)]+)\s*\)")
        .unwrap_or_else(|e| panic!("invalid unique pattern: {e}"))
});

// Inline constraints: the column name whose definition carries the marker
// before the next column separator. Anchored at a separator so the capture
// is the column identifier, not an earlier token.
static COLUMN_PRIMARY_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[(,]\s*([a-z_][a-z0-9_]*)\s+[^,]*?primary\s+key")
        .unwrap_or_else(|e| panic!("invalid inline primary key pattern: {e}"))
});

static COLUMN_UNIQUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[(,]\s*([a-z_][a-z0-9_]*)\s+[^,]*?unique")
        .unwrap_or_else(|e| panic!("invalid inline unique pattern: {e}"))
});

/// Set of indexed column names derived from raw DDL text.
///
/// Names are stored lower-cased and de-duplicated; lookups are
/// case-insensitive. No table identity beyond the set is tracked.
#[derive(Debug, Clone, Default)]
pub struct SchemaIndex {
    columns: IndexSet<CompactString>
}

impl SchemaIndex {
    /// Parse raw DDL text into the indexed-column set.
    ///
    /// Blank or empty input yields an empty set, never an error: an empty
    /// table definition is the legal "schema unknown" value that disables
    /// index-aware rules.
    pub fn parse(table_definition: &str) -> Self {
        let mut columns: IndexSet<CompactString> = IndexSet::new();
        if table_definition.trim().is_empty() {
            return Self {
                columns
            };
        }

        let normalized = table_definition.to_lowercase();

        for pattern in [&*TABLE_PRIMARY_KEY, &*TABLE_UNIQUE] {
            for caps in pattern.captures_iter(&normalized) {
                if let Some(list) = caps.get(1) {
                    for column in list.as_str().split(',') {
                        let column = column.trim();
                        if !column.is_empty() {
                            columns.insert(CompactString::from(column));
                        }
                    }
                }
            }
        }

        for pattern in [&*COLUMN_PRIMARY_KEY, &*COLUMN_UNIQUE] {
            for caps in pattern.captures_iter(&normalized) {
                if let Some(name) = caps.get(1) {
                    columns.insert(CompactString::from(name.as_str()));
                }
            }
        }

        Self {
            columns
        }
    }

    /// Case-insensitive membership check.
    pub fn is_indexed(&self, column: &str) -> bool {
        self.columns.contains(column.to_lowercase().as_str())
    }

    /// Whether no indexed columns were found (or no DDL was supplied).
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Number of indexed columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Indexed column names in first-seen order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.as_str())
    }
}
