use std::fmt;

use serde::{Deserialize, Serialize};

const EXCELLENT_FLOOR: f64 = 0.8;
const GOOD_FLOOR: f64 = 0.6;
const FAIR_FLOOR: f64 = 0.4;

/// Ordinal compatibility band derived from the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CompatibilityLabel {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl CompatibilityLabel {
    pub const fn label(self) -> &'static str {
        match self {
            CompatibilityLabel::Poor => "Poor",
            CompatibilityLabel::Fair => "Fair",
            CompatibilityLabel::Good => "Good",
            CompatibilityLabel::Excellent => "Excellent",
        }
    }
}

impl fmt::Display for CompatibilityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// NaN and negative scores land in `Poor`.
pub fn classify_compatibility(score: f64) -> CompatibilityLabel {
    if score >= EXCELLENT_FLOOR {
        CompatibilityLabel::Excellent
    } else if score >= GOOD_FLOOR {
        CompatibilityLabel::Good
    } else if score >= FAIR_FLOOR {
        CompatibilityLabel::Fair
    } else {
        CompatibilityLabel::Poor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries_are_inclusive_below() {
        assert_eq!(classify_compatibility(1.0), CompatibilityLabel::Excellent);
        assert_eq!(classify_compatibility(0.8), CompatibilityLabel::Excellent);
        assert_eq!(classify_compatibility(0.799_999), CompatibilityLabel::Good);
        assert_eq!(classify_compatibility(0.6), CompatibilityLabel::Good);
        assert_eq!(classify_compatibility(0.599_999), CompatibilityLabel::Fair);
        assert_eq!(classify_compatibility(0.4), CompatibilityLabel::Fair);
        assert_eq!(classify_compatibility(0.399_999), CompatibilityLabel::Poor);
        assert_eq!(classify_compatibility(0.0), CompatibilityLabel::Poor);
    }

    #[test]
    fn out_of_range_scores_are_poor() {
        assert_eq!(classify_compatibility(-0.1), CompatibilityLabel::Poor);
        assert_eq!(classify_compatibility(f64::NAN), CompatibilityLabel::Poor);
    }

    #[test]
    fn labels_are_ordered() {
        assert!(CompatibilityLabel::Excellent > CompatibilityLabel::Good);
        assert!(CompatibilityLabel::Fair > CompatibilityLabel::Poor);
        assert_eq!(CompatibilityLabel::Good.to_string(), "Good");
    }
}
