use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tally_client::DEFAULT_BASE_URL;

#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(about = "Tally - export employee to-do progress as CSV or JSON", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the users/todos service
    #[arg(long, env = "TALLY_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// Directory the export files are written to
    #[arg(long, env = "TALLY_OUTPUT_DIR", default_value = ".", global = true)]
    pub output_dir: PathBuf,

    /// Request timeout in seconds (none by default)
    #[arg(long, env = "TALLY_TIMEOUT_SECS", global = true)]
    pub timeout_secs: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print an employee's completed tasks
    Report {
        /// Employee ID
        #[arg(value_parser = clap::value_parser!(i64).range(1..))]
        employee_id: i64,
    },

    /// Export an employee's tasks to <EMPLOYEE_ID>.csv
    Csv {
        /// Employee ID
        #[arg(value_parser = clap::value_parser!(i64).range(1..))]
        employee_id: i64,
    },

    /// Export an employee's tasks to <EMPLOYEE_ID>.json
    Json {
        /// Employee ID
        #[arg(value_parser = clap::value_parser!(i64).range(1..))]
        employee_id: i64,
    },

    /// Export every employee's tasks to todo_all_employees.json
    All {
        /// Also print the progress of every employee
        #[arg(long)]
        report: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_parse_single_owner_command() {
        let cli = Cli::try_parse_from(["tally", "csv", "2"]).unwrap();

        assert!(matches!(cli.command, Commands::Csv { employee_id: 2 }));
        assert_eq!(cli.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_parse_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "tally",
            "all",
            "--report",
            "--output-dir",
            "/tmp/out",
            "--base-url",
            "http://localhost:3000",
        ])
        .unwrap();

        assert!(matches!(cli.command, Commands::All { report: true }));
        assert_eq!(cli.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(cli.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_non_integer_id_rejected() {
        let err = Cli::try_parse_from(["tally", "json", "abc"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_non_positive_id_rejected() {
        let err = Cli::try_parse_from(["tally", "report", "0"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_missing_id_rejected() {
        let err = Cli::try_parse_from(["tally", "report"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }
}
