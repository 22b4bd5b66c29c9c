use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// SQL Optimizer - rule-based static analysis for SQL statements
#[derive(Parser, Debug)]
#[command(name = "sql-optimizer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze an SQL statement, optionally against a table definition
    Analyze {
        /// Path to SQL statement file (use - for stdin)
        #[arg(short, long)]
        query: PathBuf,

        /// Path to table definition (CREATE TABLE) file
        #[arg(short, long)]
        schema: Option<PathBuf>,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value = "text")]
        output_format: Format,

        /// Disable colored output
        #[arg(long)]
        no_color: bool
    }
}

#[derive(Debug, Clone, ValueEnum)]
pub enum Format {
    Text,
    Json,
    Yaml
}
