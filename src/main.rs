//! # SQL Optimizer
//!
//! Rule-based static analysis for SQL statements.
//!
//! `sql-optimizer` inspects SQL statement text (optionally paired with the
//! `CREATE TABLE` definition of the table it touches) and emits prioritized
//! improvement suggestions. Analysis is deterministic and purely textual:
//! nothing is executed and no database is contacted.
//!
//! # Quick Start
//!
//! ```bash
//! # Analyze a statement file
//! sql-optimizer analyze -q query.sql
//!
//! # Schema-aware analysis (enables index rules)
//! sql-optimizer analyze -q query.sql -s schema.sql
//!
//! # Stream the statement from stdin, JSON output
//! echo "SELECT * FROM users" | sql-optimizer analyze -q - -f json
//! ```
//!
//! # Rule Categories
//!
//! - **Performance** - SELECT *, missing indexes, functions in WHERE,
//!   leading wildcards, redundant DISTINCT, IN-subqueries, missing LIMIT,
//!   bulk INSERT
//! - **Security** - string-concatenation injection shapes, dynamic SQL,
//!   sensitive comments, hardcoded credentials
//! - **BestPractice** - implicit INSERT column lists, UPDATE/DELETE without
//!   WHERE
//!
//! # Exit Codes
//!
//! The process exit code reflects the highest priority suggestion found:
//!
//! - `0` - No suggestions, or nothing above Low priority
//! - `1` - Medium priority suggestions found
//! - `2` - High or Critical priority suggestions found, or invalid input
//!
//! # Configuration
//!
//! Rule toggles and tunables load from `.sql-optimizer.toml` in the current
//! directory or `~/.config/sql-optimizer/config.toml`; see [`config`].

use std::{
    fs::read_to_string,
    io::{self, Read},
    process
};

use clap::Parser;
use sql_optimizer::{
    analyzer::Analyzer,
    cli::{Cli, Commands, Format},
    config::Config,
    error::{AppResult, file_read_error},
    output::{OutputFormat, OutputOptions, format_result},
    rules::SuggestionPriority
};

fn main() {
    match run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run() -> AppResult<i32> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze {
            query,
            schema,
            output_format,
            no_color
        } => {
            // Support stdin for the statement with "-"
            let sql_text = if query.to_str() == Some("-") {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .map_err(|e| file_read_error("stdin", e))?;
                buffer
            } else {
                read_to_string(&query)
                    .map_err(|e| file_read_error(&query.display().to_string(), e))?
            };

            let table_definition = match &schema {
                Some(path) => read_to_string(path)
                    .map_err(|e| file_read_error(&path.display().to_string(), e))?,
                None => String::new()
            };

            let result = Analyzer::analyze(&sql_text, &table_definition, &config.analysis);

            let output_opts = OutputOptions {
                format:  match output_format {
                    Format::Text => OutputFormat::Text,
                    Format::Json => OutputFormat::Json,
                    Format::Yaml => OutputFormat::Yaml
                },
                colored: !no_color
            };

            println!("{}", format_result(&result, &output_opts));

            if !result.is_valid {
                return Ok(2);
            }

            let exit_code = if result
                .suggestions
                .iter()
                .any(|s| s.priority >= SuggestionPriority::High)
            {
                2
            } else if result
                .suggestions
                .iter()
                .any(|s| s.priority == SuggestionPriority::Medium)
            {
                1
            } else {
                0
            };

            Ok(exit_code)
        }
    }
}
