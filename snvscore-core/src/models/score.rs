use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

use crate::consts::{LIKELY_BENIGN, LIKELY_PATHOGENIC};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Prediction {
    #[serde(rename = "Likely pathogenic")]
    LikelyPathogenic,
    #[serde(rename = "Likely benign")]
    LikelyBenign,
}

impl Prediction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Prediction::LikelyPathogenic => LIKELY_PATHOGENIC,
            Prediction::LikelyBenign => LIKELY_BENIGN,
        }
    }
}

impl Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

///
/// Outcome of scoring one variant. Serialises to the response body of the
/// scoring endpoint.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub position: u64,
    pub reference: char,
    pub alternative: char,
    /// variant score minus reference score
    pub delta_score: f64,
    pub prediction: Prediction,
    /// in [0, 1]
    pub classification_confidence: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_score_result_wire_format() {
        let result = ScoreResult {
            position: 43119628,
            reference: 'A',
            alternative: 'G',
            delta_score: -0.5,
            prediction: Prediction::LikelyPathogenic,
            classification_confidence: 1.0,
        };

        let json: serde_json::Value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "position": 43119628,
                "reference": "A",
                "alternative": "G",
                "delta_score": -0.5,
                "prediction": "Likely pathogenic",
                "classification_confidence": 1.0
            })
        );
    }

    #[test]
    fn test_prediction_display() {
        assert_eq!(Prediction::LikelyBenign.to_string(), "Likely benign");
    }
}
