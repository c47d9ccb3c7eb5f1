//! The keyword table: a static many-to-one mapping word -> axis.
//!
//! The built-in table is constructed once and never mutated, so it is
//! safe for unlimited concurrent readers.  A custom table may be loaded
//! from YAML (axis name to word list); loading validates that every word
//! is a single lowercase alphanumeric token and that no word is claimed
//! by more than one axis.
//!
//! Matching is whole-word only.  The table is consulted per token after
//! tokenization, so "compassionate" never matches the entry
//! "compassion".  Stemming is deliberately out of scope.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::coordinate::Axis;
use crate::utilities::errors::LexiconError;

// ============================================================================
// Built-in keyword lists
// ============================================================================

const LOVE_WORDS: &[&str] = &[
    "love",
    "compassion",
    "kindness",
    "mercy",
    "care",
    "empathy",
    "forgiveness",
    "devotion",
    "grace",
    "tenderness",
    "affection",
    "charity",
];

const JUSTICE_WORDS: &[&str] = &[
    "justice",
    "fairness",
    "equity",
    "integrity",
    "honesty",
    "righteousness",
    "impartiality",
    "law",
    "judgment",
    "accountability",
];

const POWER_WORDS: &[&str] = &[
    "power",
    "strength",
    "authority",
    "might",
    "force",
    "dominion",
    "command",
    "energy",
    "control",
    "sovereignty",
];

const WISDOM_WORDS: &[&str] = &[
    "wisdom",
    "wise",
    "insight",
    "understanding",
    "knowledge",
    "discernment",
    "prudence",
    "foresight",
    "clarity",
    "truth",
];

lazy_static::lazy_static! {
    /// The built-in table, shared by every default extractor.
    static ref BUILTIN: Lexicon = Lexicon::builtin();
}

// ============================================================================
// Lexicon
// ============================================================================

/// An immutable word -> axis table.
#[derive(Debug, Clone)]
pub struct Lexicon {
    map: HashMap<String, Axis>,
}

/// YAML shape for a custom lexicon: axis name to word list.
#[derive(Debug, Deserialize)]
struct LexiconFile(HashMap<String, Vec<String>>);

impl Lexicon {
    /// The built-in table.
    pub fn builtin() -> Self {
        let entries = [
            (Axis::Love, LOVE_WORDS),
            (Axis::Justice, JUSTICE_WORDS),
            (Axis::Power, POWER_WORDS),
            (Axis::Wisdom, WISDOM_WORDS),
        ];
        let mut map = HashMap::new();
        for (axis, words) in entries {
            for word in words {
                map.insert((*word).to_string(), axis);
            }
        }
        Self { map }
    }

    /// Shared reference to the built-in table singleton.
    pub fn default_table() -> &'static Lexicon {
        &BUILTIN
    }

    /// Build a table from (word, axis) pairs, validating as it goes.
    pub fn from_entries<I>(entries: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = (String, Axis)>,
    {
        let mut map: HashMap<String, Axis> = HashMap::new();
        for (word, axis) in entries {
            if !is_valid_keyword(&word) {
                return Err(LexiconError::InvalidKeyword { word });
            }
            if let Some(existing) = map.get(&word).copied() {
                if existing != axis {
                    return Err(LexiconError::DuplicateKeyword {
                        word,
                        first: existing,
                        second: axis,
                    });
                }
                continue;
            }
            map.insert(word, axis);
        }
        if map.is_empty() {
            return Err(LexiconError::Empty);
        }
        Ok(Self { map })
    }

    /// Parse a custom table from YAML.
    ///
    /// Expected shape:
    ///
    /// ```yaml
    /// love: [warmth, embrace]
    /// justice: [verdict]
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self, LexiconError> {
        let file: LexiconFile = serde_yaml::from_str(yaml)?;
        let mut entries = Vec::new();
        for (axis_name, words) in file.0 {
            let axis = Axis::from_name(&axis_name)
                .ok_or(LexiconError::UnknownAxis { name: axis_name })?;
            for word in words {
                entries.push((word, axis));
            }
        }
        Self::from_entries(entries)
    }

    /// Load a custom table from a YAML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml(&yaml)
    }

    /// The axis a word maps to, if any.  Expects an already-lowercased token.
    pub fn axis_of(&self, word: &str) -> Option<Axis> {
        self.map.get(word).copied()
    }

    /// All words mapped to an axis, sorted.
    pub fn words_for(&self, axis: Axis) -> Vec<&str> {
        let mut words: Vec<&str> = self
            .map
            .iter()
            .filter(|(_, a)| **a == axis)
            .map(|(w, _)| w.as_str())
            .collect();
        words.sort_unstable();
        words
    }

    /// Total number of keywords in the table.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the table holds no keywords.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

fn is_valid_keyword(word: &str) -> bool {
    !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
}

// ============================================================================
// Tests
// ============================================================================
