//! Command-line interface for theta7-archive.
//!
//! This module provides the CLI structure for the `theta7` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    ConfigCommand, ExportCommand, LogCommand, MeasurementsCommand, OutputFormat, ShowCommand,
};

/// theta7 - Browse the recovered Theta-7 station archive
///
/// Prints the recovered dataset exactly as transcribed: the station log,
/// the transmissions, the artifact measurements, the final coordinates,
/// and Dr. Voss's personal cipher. Nothing is decoded or derived.
#[derive(Debug, Parser)]
#[command(name = "theta7")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the archive, section by section
    Show(ShowCommand),

    /// Print the station log
    Log(LogCommand),

    /// Print the recovered transmissions
    Transmissions,

    /// Print the artifact measurement series
    Measurements(MeasurementsCommand),

    /// Print the final coordinates
    Coordinates,

    /// Print Dr. Voss's personal cipher
    Cipher,

    /// Export the whole archive as JSON
    Export(ExportCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_verify() {
        // Verify the CLI structure is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "theta7");
    }

    #[test]
    fn test_verbosity_quiet() {
        let cli = Cli::try_parse_from(["theta7", "-q", "cipher"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Quiet);
    }

    #[test]
    fn test_verbosity_levels() {
        let cli = Cli::try_parse_from(["theta7", "cipher"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Normal);

        let cli = Cli::try_parse_from(["theta7", "-v", "cipher"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Verbose);

        let cli = Cli::try_parse_from(["theta7", "-vv", "cipher"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Trace);
    }

    #[test]
    fn test_parse_show_with_sections() {
        let cli = Cli::try_parse_from(["theta7", "show", "-s", "log", "-s", "cipher"]).unwrap();
        match cli.command {
            Command::Show(cmd) => assert_eq!(cmd.sections, vec!["log", "cipher"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_log_with_format() {
        let cli = Cli::try_parse_from(["theta7", "log", "--format", "table"]).unwrap();
        match cli.command {
            Command::Log(cmd) => assert_eq!(cmd.format, Some(OutputFormat::Table)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_measurements_with_name() {
        let cli = Cli::try_parse_from(["theta7", "measurements", "gamma"]).unwrap();
        match cli.command {
            Command::Measurements(cmd) => assert_eq!(cmd.name.as_deref(), Some("gamma")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_export() {
        let cli =
            Cli::try_parse_from(["theta7", "export", "--pretty", "-o", "/tmp/a.json"]).unwrap();
        match cli.command {
            Command::Export(cmd) => {
                assert!(cmd.pretty);
                assert_eq!(cmd.output, Some(PathBuf::from("/tmp/a.json")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_with_config() {
        let cli = Cli::try_parse_from(["theta7", "-c", "/custom/config.toml", "coordinates"])
            .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
        assert!(matches!(cli.command, Command::Coordinates));
    }

    #[test]
    fn test_parse_config_validate() {
        let cli = Cli::try_parse_from(["theta7", "config", "validate"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Config(ConfigCommand::Validate { file: None })
        ));
    }
}
