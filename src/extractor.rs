//! Coordinate extraction: tokenize text, count keyword hits per axis,
//! normalize onto the simplex.
//!
//! Extraction is a pure function of the input text and the immutable
//! keyword table.  Any string is legal input; unrecognized words are
//! silently ignored; a text with zero hits yields the zero coordinate.
//! Only hit counts matter, so the result is independent of word order
//! and of the amount of whitespace between words.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::coordinate::{Axis, Coordinate};
use crate::lexicon::Lexicon;

/// Word tokens are maximal alphanumeric runs of the lowercased input.
static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z0-9]+").unwrap());

// ============================================================================
// Analysis
// ============================================================================

/// Full result of one extraction pass.
///
/// [`Extractor::analyze`] returns only the coordinate; this carries the
/// counts behind it for reporting surfaces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    /// The normalized coordinate (or zero for no hits).
    pub coordinate: Coordinate,
    /// Keyword hits per axis, in canonical axis order.
    pub hits: [u64; 4],
    /// Total keyword hits across all axes.
    pub total_hits: u64,
    /// Total word tokens scanned.
    pub total_tokens: u64,
    /// Matched keywords in input order, repeats included.
    pub matched: Vec<String>,
}

impl Analysis {
    /// Hit count for a single axis.
    pub fn hits_for(&self, axis: Axis) -> u64 {
        self.hits[axis as usize]
    }
}

// ============================================================================
// Extractor
// ============================================================================

/// Maps text onto the 4-axis meaning space via whole-word keyword counts.
#[derive(Debug, Clone)]
pub struct Extractor {
    lexicon: Lexicon,
}

impl Extractor {
    /// Extractor over the built-in keyword table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Extractor over a custom table.
    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// The table this extractor consults.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Map `text` to its coordinate.
    pub fn analyze(&self, text: &str) -> Coordinate {
        self.analyze_detailed(text).coordinate
    }

    /// Map `text` to its coordinate, keeping the counts behind it.
    pub fn analyze_detailed(&self, text: &str) -> Analysis {
        tally(&self.lexicon, text)
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self {
            lexicon: Lexicon::builtin(),
        }
    }
}

/// Map `text` to its coordinate using the built-in table.
pub fn analyze(text: &str) -> Coordinate {
    tally(Lexicon::default_table(), text).coordinate
}

fn tally(lexicon: &Lexicon, text: &str) -> Analysis {
    let lowered = text.to_lowercase();
    let mut hits = [0u64; 4];
    let mut matched = Vec::new();
    let mut total_tokens = 0u64;

    for token in WORD_PATTERN.find_iter(&lowered) {
        total_tokens += 1;
        let word = token.as_str();
        if let Some(axis) = lexicon.axis_of(word) {
            hits[axis as usize] += 1;
            matched.push(word.to_string());
        }
    }

    let total_hits: u64 = hits.iter().sum();
    Analysis {
        coordinate: Coordinate::from_counts(hits),
        hits,
        total_hits,
        total_tokens,
        matched,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::SUM_TOLERANCE;

    #[test]
    fn test_no_keywords_yields_zero_coordinate() {
        let c = analyze("The sky is blue and the grass is green.");
        assert!(c.is_zero());
    }

    #[test]
    fn test_empty_string_yields_zero_coordinate() {
        assert!(analyze("").is_zero());
        assert!(analyze("   \t\n").is_zero());
    }

    #[test]
    fn test_nonzero_result_sums_to_one() {
        let c = analyze("love and power and truth");
        assert!((c.sum() - 1.0).abs() < SUM_TOLERANCE);
        for v in c.to_array() {
            assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn test_pure_love_sentence() {
        // Exactly three table hits, all on the love axis: "love",
        // "compassion", "kindness".  "agape", "selfless", and "pure" are
        // not table entries.
        let a = Extractor::new().analyze_detailed("Agape love, selfless compassion, and pure kindness.");
        assert_eq!(a.total_hits, 3);
        assert_eq!(a.hits_for(Axis::Love), 3);
        assert_eq!(a.coordinate, Coordinate::new(1.0, 0.0, 0.0, 0.0));
        assert_eq!(a.matched, vec!["love", "compassion", "kindness"]);
    }

    #[test]
    fn test_whole_word_matching_is_the_contract() {
        // "wise" hits wisdom and "justice" hits justice; "compassionate"
        // and "rules" are whole-word misses, never substring matches.
        let c = analyze("A wise leader rules with compassionate justice.");
        assert_eq!(c, Coordinate::new(0.0, 0.5, 0.0, 0.5));
    }

    #[test]
    fn test_case_insensitive() {
        let lower = analyze("wisdom and justice");
        let upper = analyze("WISDOM AND JUSTICE");
        let mixed = analyze("WiSdOm AnD jUsTiCe");
        assert_eq!(lower, upper);
        assert_eq!(lower, mixed);
    }

    #[test]
    fn test_whitespace_insensitive() {
        let tight = analyze("love justice power wisdom");
        let loose = analyze("  love \t justice\n\n  power     wisdom  ");
        assert_eq!(tight, loose);
    }

    #[test]
    fn test_order_independent() {
        let a = analyze("love then power");
        let b = analyze("power then love");
        assert_eq!(a, b);
    }

    #[test]
    fn test_repeats_weight_the_axis() {
        let c = analyze("love love love justice");
        assert!((c.love - 0.75).abs() < SUM_TOLERANCE);
        assert!((c.justice - 0.25).abs() < SUM_TOLERANCE);
    }

    #[test]
    fn test_punctuation_splits_tokens() {
        // Punctuation is never part of a token, so "love," still hits.
        let c = analyze("love, justice; power! wisdom?");
        assert!((c.sum() - 1.0).abs() < SUM_TOLERANCE);
        assert_eq!(Extractor::new().analyze_detailed("love, justice; power! wisdom?").total_hits, 4);
    }

    #[test]
    fn test_token_counting() {
        let a = Extractor::new().analyze_detailed("The sky is blue.");
        assert_eq!(a.total_tokens, 4);
        assert_eq!(a.total_hits, 0);
        assert!(a.matched.is_empty());
    }

    #[test]
    fn test_custom_lexicon() {
        let lex = Lexicon::from_yaml("power: [thunder]\nwisdom: [sage]\n").unwrap();
        let ext = Extractor::with_lexicon(lex);
        let c = ext.analyze("the thunder spoke and the sage listened");
        assert_eq!(c, Coordinate::new(0.0, 0.0, 0.5, 0.5));
        // The built-in entries are not consulted.
        assert!(ext.analyze("love and justice").is_zero());
    }
}
