//! # SQL Optimizer Library
//!
//! Rule-based static analysis for SQL statement text.
//!
//! Given a raw SQL statement (and optionally the `CREATE TABLE` definition of
//! the table it touches), the analyzer emits prioritized improvement
//! suggestions covering performance, security, and best-practice concerns.
//! Analysis is synchronous, stateless per call, and never executes SQL or
//! touches a live database.

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod options;
pub mod output;
pub mod query;
pub mod rules;
pub mod schema;
