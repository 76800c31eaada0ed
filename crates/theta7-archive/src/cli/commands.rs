//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Show command arguments.
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Sections to print, in order (default: sections from configuration)
    #[arg(short, long = "section", value_name = "NAME")]
    pub sections: Vec<String>,
}

/// Log command arguments.
#[derive(Debug, Args)]
pub struct LogCommand {
    /// Output format (default: from configuration)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Measurements command arguments.
#[derive(Debug, Args)]
pub struct MeasurementsCommand {
    /// Print a single series by name (alpha, beta, gamma, delta, epsilon)
    pub name: Option<String>,
}

/// Export command arguments.
#[derive(Debug, Args)]
pub struct ExportCommand {
    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON
    #[arg(short, long)]
    pub pretty: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Plain,
    /// Formatted table
    Table,
    /// JSON output
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Plain);
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Plain.to_string(), "plain");
        assert_eq!(OutputFormat::Table.to_string(), "table");
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_output_format_serde_names() {
        assert_eq!(
            serde_json::to_string(&OutputFormat::Plain).unwrap(),
            "\"plain\""
        );
        let format: OutputFormat = serde_json::from_str("\"table\"").unwrap();
        assert_eq!(format, OutputFormat::Table);
    }

    #[test]
    fn test_show_command_debug() {
        let cmd = ShowCommand {
            sections: vec!["log".to_string()],
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("sections"));
        assert!(debug_str.contains("log"));
    }

    #[test]
    fn test_export_command_debug() {
        let cmd = ExportCommand {
            output: Some(PathBuf::from("/tmp/archive.json")),
            pretty: true,
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("pretty"));
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Show"));
    }
}
