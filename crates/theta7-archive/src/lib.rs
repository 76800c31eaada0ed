//! `theta7-archive` - Typed access to the recovered Theta-7 station dataset
//!
//! This library exposes the dataset recovered from research station Theta-7
//! as read-only, strongly typed constants: the station log, the recovered
//! transmissions, the artifact measurement series, the final coordinates,
//! and Dr. Voss's personal cipher.
//!
//! The data is a frozen historical record. Nothing in this crate computes,
//! decodes, or interprets it.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod logging;

pub use config::Config;
pub use dataset::{
    LogEntry, ARTIFACT_MEASUREMENTS, FINAL_COORDINATES, RECOVERED_TRANSMISSIONS, STATION_LOG,
    VOSS_PERSONAL_CIPHER,
};
pub use error::{Error, Result};
pub use logging::init_logging;
