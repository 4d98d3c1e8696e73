use snvscore_core::models::{ConfidenceParams, Prediction};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub prediction: Prediction,
    pub confidence: f64,
}

pub fn delta_score(reference_score: f64, variant_score: f64) -> f64 {
    variant_score - reference_score
}

///
/// Classify a delta score against the calibration threshold.
///
/// Deltas strictly below the threshold are likely pathogenic; everything
/// else, the threshold itself included, is likely benign. Confidence is the
/// distance to the threshold in units of the matching class's standard
/// deviation, capped at 1.
///
pub fn classify(delta: f64, params: &ConfidenceParams) -> Classification {
    let distance = (delta - params.threshold()).abs();

    if delta < params.threshold() {
        Classification {
            prediction: Prediction::LikelyPathogenic,
            confidence: (distance / params.lof_std()).min(1.0),
        }
    } else {
        Classification {
            prediction: Prediction::LikelyBenign,
            confidence: (distance / params.func_std()).min(1.0),
        }
    }
}
