//! The station log.
//!
//! Thirteen readings spanning mission day 1 through day 377, transcribed
//! verbatim from the recovered records.

use serde::Serialize;

/// A single entry in the station log.
///
/// Entries form a frozen historical record: fixed at definition time,
/// never updated, never deleted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LogEntry {
    /// Mission day of the reading. Days strictly increase across the log
    /// but are not contiguous.
    pub day: u32,
    /// Outside temperature in degrees Celsius.
    pub temperature_c: f64,
    /// Barometric pressure in hectopascals.
    pub pressure_hpa: f64,
    /// Crew on station. Never increases across the log.
    pub crew: u32,
    /// Incidents recorded since the previous entry.
    pub incidents: u32,
    /// Operator note, verbatim.
    pub note: &'static str,
}

/// The complete station log, day 1 through day 377.
pub const STATION_LOG: &[LogEntry] = &[
    LogEntry {
        day: 1,
        temperature_c: 12.0,
        pressure_hpa: 1013.0,
        crew: 8,
        incidents: 0,
        note: "Arrived safely",
    },
    LogEntry {
        day: 2,
        temperature_c: 11.5,
        pressure_hpa: 1012.0,
        crew: 8,
        incidents: 0,
        note: "Setup complete",
    },
    LogEntry {
        day: 3,
        temperature_c: 11.0,
        pressure_hpa: 1010.0,
        crew: 8,
        incidents: 0,
        note: "First readings nominal",
    },
    LogEntry {
        day: 5,
        temperature_c: 10.0,
        pressure_hpa: 1008.0,
        crew: 8,
        incidents: 1,
        note: "Minor equipment fault",
    },
    LogEntry {
        day: 8,
        temperature_c: 8.5,
        pressure_hpa: 1005.0,
        crew: 8,
        incidents: 0,
        note: "Readings continue",
    },
    LogEntry {
        day: 13,
        temperature_c: 6.0,
        pressure_hpa: 1001.0,
        crew: 7,
        incidents: 2,
        note: "Dr. Marsh reassigned",
    },
    LogEntry {
        day: 21,
        temperature_c: 2.5,
        pressure_hpa: 995.0,
        crew: 7,
        incidents: 1,
        note: "Unusual sounds reported",
    },
    LogEntry {
        day: 34,
        temperature_c: -2.0,
        pressure_hpa: 987.0,
        crew: 6,
        incidents: 3,
        note: "Equipment relocated",
    },
    LogEntry {
        day: 55,
        temperature_c: -8.5,
        pressure_hpa: 976.0,
        crew: 5,
        incidents: 2,
        note: "Reduced operations",
    },
    LogEntry {
        day: 89,
        temperature_c: -17.0,
        pressure_hpa: 962.0,
        crew: 4,
        incidents: 5,
        note: "Emergency protocol beta",
    },
    LogEntry {
        day: 144,
        temperature_c: -28.5,
        pressure_hpa: 944.0,
        crew: 3,
        incidents: 8,
        note: "Request evacuation",
    },
    LogEntry {
        day: 233,
        temperature_c: -43.0,
        pressure_hpa: 921.0,
        crew: 2,
        incidents: 13,
        note: "Signal lost briefly",
    },
    LogEntry {
        day: 377,
        temperature_c: -61.5,
        pressure_hpa: 892.0,
        crew: 1,
        incidents: 21,
        note: "Final entry",
    },
];
