//! The final coordinates.
//!
//! Six coordinate pairs from the last recovered page, in recorded order.
//! No projection or datum is given in the records.

/// The final coordinate list.
pub const FINAL_COORDINATES: &[(f64, f64)] = &[
    (61.8, 38.2),
    (38.2, 23.6),
    (23.6, 14.6),
    (14.6, 9.0),
    (9.0, 5.6),
    (5.6, 3.4),
];
