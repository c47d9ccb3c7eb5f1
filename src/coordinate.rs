//! The 4-axis meaning space and the `Coordinate` value type.
//!
//! Every analysis places a text at one point in a fixed 4-dimensional
//! space whose axes are Love, Justice, Power, and Wisdom.  A coordinate
//! is either a point on the probability simplex (components sum to 1.0)
//! or the distinguished all-zero "no signal" value produced when a text
//! contains no recognized keywords.

use serde::{Deserialize, Serialize};

/// Tolerance used when checking the simplex-sum invariant.
pub const SUM_TOLERANCE: f64 = 1e-9;

// ============================================================================
// Axis
// ============================================================================

/// The four semantic dimensions, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Love,
    Justice,
    Power,
    Wisdom,
}

impl Axis {
    /// All four axes in canonical order.  Indexing matches `Axis as usize`.
    pub const ALL: [Axis; 4] = [Self::Love, Self::Justice, Self::Power, Self::Wisdom];

    /// Lowercase name of the axis.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Love => "love",
            Self::Justice => "justice",
            Self::Power => "power",
            Self::Wisdom => "wisdom",
        }
    }

    /// Parse an axis from its lowercase name.
    pub fn from_name(name: &str) -> Option<Axis> {
        match name {
            "love" => Some(Self::Love),
            "justice" => Some(Self::Justice),
            "power" => Some(Self::Power),
            "wisdom" => Some(Self::Wisdom),
            _ => None,
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Coordinate
// ============================================================================

/// A point in the 4-axis meaning space.
///
/// Components are non-negative.  A coordinate produced by extraction is
/// either simplex-normalized (components sum to 1.0) or exactly
/// [`Coordinate::ZERO`] when no keyword matched.  The zero coordinate is
/// an ordinary value that every metric is total over, not an error or
/// an `Option` case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub love: f64,
    pub justice: f64,
    pub power: f64,
    pub wisdom: f64,
}

impl Coordinate {
    /// The "no signal" coordinate.
    pub const ZERO: Coordinate = Coordinate {
        love: 0.0,
        justice: 0.0,
        power: 0.0,
        wisdom: 0.0,
    };

    /// Create a coordinate from explicit components, in canonical axis order.
    pub fn new(love: f64, justice: f64, power: f64, wisdom: f64) -> Self {
        Self {
            love,
            justice,
            power,
            wisdom,
        }
    }

    /// Normalize raw per-axis keyword counts onto the probability simplex.
    ///
    /// Counts are indexed in canonical axis order.  All-zero counts yield
    /// [`Coordinate::ZERO`].
    pub fn from_counts(counts: [u64; 4]) -> Self {
        let total: u64 = counts.iter().sum();
        if total == 0 {
            return Self::ZERO;
        }
        let total = total as f64;
        Self {
            love: counts[0] as f64 / total,
            justice: counts[1] as f64 / total,
            power: counts[2] as f64 / total,
            wisdom: counts[3] as f64 / total,
        }
    }

    /// Component for a single axis.
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Love => self.love,
            Axis::Justice => self.justice,
            Axis::Power => self.power,
            Axis::Wisdom => self.wisdom,
        }
    }

    /// Components as an array, in canonical axis order.
    pub fn to_array(&self) -> [f64; 4] {
        [self.love, self.justice, self.power, self.wisdom]
    }

    /// Sum of all components.
    pub fn sum(&self) -> f64 {
        self.love + self.justice + self.power + self.wisdom
    }

    /// Whether this is the "no signal" coordinate.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// The axis holding the largest share, or `None` for the zero
    /// coordinate.  Ties resolve to the earliest axis in canonical order.
    pub fn dominant_axis(&self) -> Option<Axis> {
        if self.is_zero() {
            return None;
        }
        let mut best = Axis::Love;
        let mut best_val = self.love;
        for axis in Axis::ALL {
            let v = self.get(axis);
            if v > best_val {
                best_val = v;
                best = axis;
            }
        }
        Some(best)
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Self::ZERO
    }
}

// ============================================================================
// Tests
// ============================================================================
