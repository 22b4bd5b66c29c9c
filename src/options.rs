//! Per-call analysis options.
//!
//! [`AnalysisOptions`] selects which rule categories run and carries nested
//! per-rule toggles and tunables. Options are created once per call (or
//! loaded from configuration) and are never mutated during analysis.

use serde::Deserialize;

/// Toggles and tunables for one analysis call.
///
/// All categories and rules are enabled by default. Disabling a category
/// skips every rule in it regardless of the per-rule toggles.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Run performance rules (index checks included when a schema is given)
    pub performance_analysis:   bool,
    /// Run security rules
    pub security_analysis:      bool,
    /// Run best-practice rules
    pub best_practice_analysis: bool,
    /// Run index-aware rules within the performance pass
    pub index_analysis:         bool,
    pub performance:            PerformanceSettings,
    pub security:               SecuritySettings,
    pub best_practice:          BestPracticeSettings
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            performance_analysis:   true,
            security_analysis:      true,
            best_practice_analysis: true,
            index_analysis:         true,
            performance:            PerformanceSettings::default(),
            security:               SecuritySettings::default(),
            best_practice:          BestPracticeSettings::default()
        }
    }
}

impl AnalysisOptions {
    /// Options with every category and rule switched off.
    ///
    /// Useful as a starting point when enabling a single check.
    pub fn disabled() -> Self {
        Self {
            performance_analysis:   false,
            security_analysis:      false,
            best_practice_analysis: false,
            index_analysis:         false,
            performance:            PerformanceSettings {
                check_select_star:           false,
                check_missing_indexes:       false,
                check_unnecessary_distinct:  false,
                check_subquery_optimization: false,
                check_missing_limit:         false,
                check_functions_in_where:    false,
                check_leading_wildcards:     false,
                check_bulk_insert:           false,
                bulk_insert_threshold:       PerformanceSettings::default()
                    .bulk_insert_threshold
            },
            security:               SecuritySettings {
                check_sql_injection:         false,
                check_dynamic_sql:           false,
                check_sensitive_comments:    false,
                check_hardcoded_credentials: false,
                sensitive_keywords:          SecuritySettings::default().sensitive_keywords
            },
            best_practice:          BestPracticeSettings {
                check_explicit_column_names: false,
                check_where_clause:          false
            }
        }
    }
}

/// Per-rule toggles for the performance category.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PerformanceSettings {
    pub check_select_star:           bool,
    pub check_missing_indexes:       bool,
    pub check_unnecessary_distinct:  bool,
    pub check_subquery_optimization: bool,
    pub check_missing_limit:         bool,
    pub check_functions_in_where:    bool,
    pub check_leading_wildcards:     bool,
    pub check_bulk_insert:           bool,
    /// VALUES-tuple count above which an INSERT is flagged as bulk
    pub bulk_insert_threshold:       usize
}

impl Default for PerformanceSettings {
    fn default() -> Self {
        Self {
            check_select_star:           true,
            check_missing_indexes:       true,
            check_unnecessary_distinct:  true,
            check_subquery_optimization: true,
            check_missing_limit:         true,
            check_functions_in_where:    true,
            check_leading_wildcards:     true,
            check_bulk_insert:           true,
            bulk_insert_threshold:       100
        }
    }
}

/// Per-rule toggles for the security category.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SecuritySettings {
    pub check_sql_injection:         bool,
    pub check_dynamic_sql:           bool,
    pub check_sensitive_comments:    bool,
    pub check_hardcoded_credentials: bool,
    /// Keywords that mark a line comment as sensitive
    pub sensitive_keywords:          Vec<String>
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            check_sql_injection:         true,
            check_dynamic_sql:           true,
            check_sensitive_comments:    true,
            check_hardcoded_credentials: true,
            sensitive_keywords:          vec![
                String::from("password"),
                String::from("admin"),
                String::from("secret"),
                String::from("key"),
                String::from("token"),
                String::from("credential"),
            ]
        }
    }
}

/// Per-rule toggles for the best-practice category.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BestPracticeSettings {
    pub check_explicit_column_names: bool,
    pub check_where_clause:          bool
}

impl Default for BestPracticeSettings {
    fn default() -> Self {
        Self {
            check_explicit_column_names: true,
            check_where_clause:          true
        }
    }
}
