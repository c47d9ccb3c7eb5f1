//! Scalar metrics over coordinates: anchor distance and clarity.
//!
//! Both functions are pure and total over every [`Coordinate`],
//! including the zero coordinate.

use crate::coordinate::Coordinate;

/// The fixed reference point all distances are measured against.
pub const ANCHOR: [f64; 4] = [1.0, 1.0, 1.0, 1.0];

/// Euclidean distance from the coordinate to [`ANCHOR`].
///
/// Over simplex-bounded coordinates the range is [0, 2]: 0.0 at the
/// anchor itself, 2.0 at the zero coordinate.
pub fn distance_from_anchor(c: &Coordinate) -> f64 {
    c.to_array()
        .iter()
        .zip(ANCHOR.iter())
        .map(|(x, a)| (x - a).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// Concentration of the coordinate: its maximum component.
///
/// 1.0 when a single axis holds all mass, 0.25 for the maximally
/// diffuse non-zero case (equal quarters), 0.0 for the zero coordinate.
/// This is a heuristic concentration proxy, not an information-theoretic
/// entropy measure.
pub fn clarity(c: &Coordinate) -> f64 {
    c.to_array().into_iter().fold(0.0, f64::max)
}

// ============================================================================
// Tests
// ============================================================================
