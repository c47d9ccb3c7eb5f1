//! # semcoord
//!
//! Semantic coordinate mapping.  Text is placed at a point in a fixed
//! 4-axis meaning space (Love / Justice / Power / Wisdom) by whole-word
//! keyword counting, and two scalar metrics are derived from the
//! resulting coordinate: Euclidean distance from the (1,1,1,1) anchor
//! and a max-component clarity score.
//!
//! The core is three pure functions over an immutable value type:
//!
//! ```
//! use semcoord::{analyze, clarity, distance_from_anchor};
//!
//! let c = analyze("Agape love, selfless compassion, and pure kindness.");
//! assert_eq!(c.love, 1.0);
//! assert_eq!(clarity(&c), 1.0);
//! assert!((distance_from_anchor(&c) - 3.0_f64.sqrt()).abs() < 1e-9);
//! ```
//!
//! Wrappers around the core: a colored CLI profile printer
//! ([`cli`]) and an axum JSON service ([`server`]).

pub mod cli;
pub mod coordinate;
pub mod extractor;
pub mod lexicon;
pub mod metrics;
pub mod profile;
pub mod server;
pub mod utilities;

// Re-exports for the common call path
pub use coordinate::{Axis, Coordinate};
pub use extractor::{analyze, Analysis, Extractor};
pub use lexicon::Lexicon;
pub use metrics::{clarity, distance_from_anchor, ANCHOR};
pub use profile::Profile;
pub use utilities::errors::LexiconError;

/// Library version.
pub const VERSION: &str = "0.1.0";
