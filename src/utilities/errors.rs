//! Error types for semcoord configuration.

use thiserror::Error;

use crate::coordinate::Axis;

/// Errors raised while building or loading a keyword lexicon.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// A word is mapped to more than one axis.
    #[error("keyword '{word}' is mapped to both '{first}' and '{second}': each word may map to at most one axis")]
    DuplicateKeyword {
        word: String,
        first: Axis,
        second: Axis,
    },

    /// A keyword is not a single lowercase alphanumeric token.
    #[error("invalid keyword '{word}': keywords must be single lowercase alphanumeric tokens")]
    InvalidKeyword { word: String },

    /// An axis name in a configuration file is not one of the four axes.
    #[error("unknown axis '{name}': expected one of love, justice, power, wisdom")]
    UnknownAxis { name: String },

    /// The table contains no keywords at all.
    #[error("lexicon is empty: at least one keyword is required")]
    Empty,

    /// Failed to read a lexicon file.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Failed to parse lexicon YAML.
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}
