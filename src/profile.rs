//! Profile report: one analysis bundled with its derived metrics and a
//! human-readable summary.

use serde::{Deserialize, Serialize};

use crate::coordinate::Axis;
use crate::extractor::{Analysis, Extractor};
use crate::metrics::{clarity, distance_from_anchor};
use crate::utilities::printer::value_bar;

/// Width of the per-axis value bars in [`Profile::summary`].
const BAR_WIDTH: usize = 20;

/// An analysis plus its derived metrics, ready for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// The analyzed text.
    pub text: String,
    /// Extraction result.
    pub analysis: Analysis,
    /// Euclidean distance to the (1,1,1,1) anchor.
    pub distance_from_anchor: f64,
    /// Maximum coordinate component (concentration heuristic).
    pub clarity: f64,
    /// The axis holding the largest share, if any.
    pub dominant_axis: Option<Axis>,
}

impl Profile {
    /// Analyze `text` with `extractor` and compute both metrics.
    pub fn from_text(extractor: &Extractor, text: &str) -> Self {
        let analysis = extractor.analyze_detailed(text);
        let coordinate = analysis.coordinate;
        Self {
            text: text.to_string(),
            distance_from_anchor: distance_from_anchor(&coordinate),
            clarity: clarity(&coordinate),
            dominant_axis: coordinate.dominant_axis(),
            analysis,
        }
    }

    /// Multi-line plain-text report: per-axis bars, metrics, dominant axis.
    pub fn summary(&self) -> String {
        let c = self.analysis.coordinate;
        let mut out = String::new();
        out.push_str("semantic coordinate profile\n");
        for axis in Axis::ALL {
            let value = c.get(axis);
            out.push_str(&format!(
                "  {:<8} {:.3}  {}  ({} hits)\n",
                axis.name(),
                value,
                value_bar(value, BAR_WIDTH),
                self.analysis.hits_for(axis),
            ));
        }
        out.push_str(&format!(
            "  distance from anchor  {:.3}\n",
            self.distance_from_anchor
        ));
        out.push_str(&format!("  clarity               {:.3}\n", self.clarity));
        match self.dominant_axis {
            Some(axis) => out.push_str(&format!("  dominant axis         {}\n", axis)),
            None => out.push_str("  dominant axis         (no signal)\n"),
        }
        out.push_str(&format!(
            "  keywords matched      {} of {} tokens\n",
            self.analysis.total_hits, self.analysis.total_tokens
        ));
        out
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::Coordinate;

    #[test]
    fn test_profile_pure_love_sentence() {
        let p = Profile::from_text(
            &Extractor::new(),
            "Agape love, selfless compassion, and pure kindness.",
        );
        assert_eq!(p.analysis.coordinate, Coordinate::new(1.0, 0.0, 0.0, 0.0));
        assert_eq!(p.clarity, 1.0);
        assert!((p.distance_from_anchor - 3.0_f64.sqrt()).abs() < 1e-12);
        assert_eq!(p.dominant_axis, Some(Axis::Love));
    }

    #[test]
    fn test_profile_no_signal() {
        let p = Profile::from_text(&Extractor::new(), "The sky is blue and the grass is green.");
        assert!(p.analysis.coordinate.is_zero());
        assert_eq!(p.clarity, 0.0);
        assert!((p.distance_from_anchor - 2.0).abs() < 1e-12);
        assert_eq!(p.dominant_axis, None);
        assert!(p.summary().contains("(no signal)"));
    }

    #[test]
    fn test_summary_lists_every_axis() {
        let p = Profile::from_text(&Extractor::new(), "wisdom and justice");
        let summary = p.summary();
        for axis in Axis::ALL {
            assert!(summary.contains(axis.name()), "summary missing {}", axis);
        }
        assert!(summary.contains("distance from anchor"));
        assert!(summary.contains("clarity"));
    }

    #[test]
    fn test_profile_serializes() {
        let p = Profile::from_text(&Extractor::new(), "love");
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["dominant_axis"], "love");
        assert_eq!(json["analysis"]["coordinate"]["love"], 1.0);
    }
}
