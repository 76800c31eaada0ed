//! The artifact measurement series.
//!
//! Five named series of integer readings taken from the artifact. The names
//! are fixed; the records assign no meaning to the numbers.

/// Measurement series "alpha".
pub const ALPHA: &[u32] = &[1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144];

/// Measurement series "beta".
pub const BETA: &[u32] = &[2, 6, 18, 54, 162, 486, 1458];

/// Measurement series "gamma".
pub const GAMMA: &[u32] = &[1, 4, 9, 16, 25, 36, 49, 64, 81];

/// Measurement series "delta".
pub const DELTA: &[u32] = &[3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];

/// Measurement series "epsilon".
pub const EPSILON: &[u32] = &[2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31];

/// The name-to-series mapping, in recorded order.
pub const ARTIFACT_MEASUREMENTS: &[(&str, &[u32])] = &[
    ("alpha", ALPHA),
    ("beta", BETA),
    ("gamma", GAMMA),
    ("delta", DELTA),
    ("epsilon", EPSILON),
];

/// Look up a measurement series by name.
///
/// Returns `None` if no series with that name was recorded. Names are
/// case-sensitive.
#[must_use]
pub fn sequence(name: &str) -> Option<&'static [u32]> {
    ARTIFACT_MEASUREMENTS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, values)| *values)
}
