//! `theta7` - CLI for the Theta-7 station archive
//!
//! This binary prints the recovered dataset exactly as transcribed. No
//! command decodes, derives, or mutates anything.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use clap::Parser;
use tracing::debug;

use theta7_archive::cli::{
    Cli, Command, ConfigCommand, ExportCommand, LogCommand, MeasurementsCommand, OutputFormat,
    ShowCommand,
};
use theta7_archive::{dataset, init_logging, Config, Error};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    // Execute the command
    match cli.command {
        Command::Show(cmd) => handle_show(&config, &cmd)?,
        Command::Log(cmd) => handle_log(&config, &cmd)?,
        Command::Transmissions => print!("{}", dataset::RECOVERED_TRANSMISSIONS),
        Command::Measurements(cmd) => handle_measurements(&cmd)?,
        Command::Coordinates => print_coordinates(),
        Command::Cipher => println!("{}", dataset::VOSS_PERSONAL_CIPHER),
        Command::Export(cmd) => handle_export(&cmd)?,
        Command::Config(cmd) => handle_config(&config, cmd)?,
    }
    Ok(())
}

fn handle_show(config: &Config, cmd: &ShowCommand) -> theta7_archive::Result<()> {
    let sections = if cmd.sections.is_empty() {
        config.output.sections.clone()
    } else {
        cmd.sections.clone()
    };

    for name in &sections {
        match name.as_str() {
            "log" => {
                println!("[Station Log]");
                print_log_plain();
            }
            "transmissions" => {
                println!("[Recovered Transmissions]");
                print!("{}", dataset::RECOVERED_TRANSMISSIONS);
            }
            "measurements" => {
                println!("[Artifact Measurements]");
                print_measurements();
            }
            "coordinates" => {
                println!("[Final Coordinates]");
                print_coordinates();
            }
            "cipher" => {
                println!("[Voss Personal Cipher]");
                println!("{}", dataset::VOSS_PERSONAL_CIPHER);
            }
            other => return Err(Error::unknown_section(other)),
        }
        println!();
    }
    Ok(())
}

fn handle_log(config: &Config, cmd: &LogCommand) -> theta7_archive::Result<()> {
    match cmd.format.unwrap_or(config.output.format) {
        OutputFormat::Plain => print_log_plain(),
        OutputFormat::Table => print_log_table(),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(dataset::STATION_LOG)?);
        }
    }
    Ok(())
}

fn handle_measurements(cmd: &MeasurementsCommand) -> theta7_archive::Result<()> {
    if let Some(name) = &cmd.name {
        let values =
            dataset::sequence(name).ok_or_else(|| Error::unknown_sequence(name.clone()))?;
        println!("{name}: {}", join_values(values));
    } else {
        print_measurements();
    }
    Ok(())
}

fn handle_export(cmd: &ExportCommand) -> theta7_archive::Result<()> {
    let mut measurements = serde_json::Map::new();
    for (name, values) in dataset::ARTIFACT_MEASUREMENTS {
        measurements.insert((*name).to_string(), serde_json::json!(values));
    }

    let archive = serde_json::json!({
        "station_log": dataset::STATION_LOG,
        "recovered_transmissions": dataset::RECOVERED_TRANSMISSIONS,
        "artifact_measurements": measurements,
        "final_coordinates": dataset::FINAL_COORDINATES,
        "voss_personal_cipher": dataset::VOSS_PERSONAL_CIPHER,
    });

    let json = if cmd.pretty {
        serde_json::to_string_pretty(&archive)?
    } else {
        serde_json::to_string(&archive)?
    };

    if let Some(path) = &cmd.output {
        std::fs::write(path, &json)?;
        debug!("Wrote {} bytes to {}", json.len(), path.display());
        println!("Exported archive to {}", path.display());
    } else {
        println!("{json}");
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> theta7_archive::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Output]");
                println!("  Format:    {}", config.output.format);
                println!("  Sections:  {}", config.output.sections.join(", "));
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}

fn print_log_plain() {
    for entry in dataset::STATION_LOG {
        println!(
            "day {}: {} C, {} hPa, crew {}, incidents {} - {}",
            entry.day,
            entry.temperature_c,
            entry.pressure_hpa,
            entry.crew,
            entry.incidents,
            entry.note
        );
    }
}

fn print_log_table() {
    println!(
        "{:>4}  {:>8}  {:>8}  {:>4}  {:>9}  note",
        "day", "temp (C)", "hPa", "crew", "incidents"
    );
    for entry in dataset::STATION_LOG {
        println!(
            "{:>4}  {:>8.1}  {:>8.1}  {:>4}  {:>9}  {}",
            entry.day,
            entry.temperature_c,
            entry.pressure_hpa,
            entry.crew,
            entry.incidents,
            entry.note
        );
    }
}

fn print_measurements() {
    for (name, values) in dataset::ARTIFACT_MEASUREMENTS {
        println!("{name}: {}", join_values(values));
    }
}

fn print_coordinates() {
    for (x, y) in dataset::FINAL_COORDINATES {
        println!("({x:.1}, {y:.1})");
    }
}

fn join_values(values: &[u32]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
