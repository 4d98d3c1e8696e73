use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_FUNC_STD, DEFAULT_LOF_STD, DEFAULT_THRESHOLD};
use crate::errors::ConfigError;

#[derive(Deserialize)]
struct RawConfidenceParams {
    threshold: f64,
    lof_std: f64,
    func_std: f64,
}

///
/// Calibration constants used to turn a delta score into a prediction and a
/// confidence. Produced offline by `snvscore calibrate`, consumed read-only
/// while serving.
///
/// Both standard deviations are guaranteed strictly positive, so the
/// confidence computation never divides by zero.
///
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawConfidenceParams")]
pub struct ConfidenceParams {
    threshold: f64,
    lof_std: f64,
    func_std: f64,
}

impl ConfidenceParams {
    pub fn new(threshold: f64, lof_std: f64, func_std: f64) -> Result<Self, ConfigError> {
        for (name, value) in [
            ("threshold", threshold),
            ("lof_std", lof_std),
            ("func_std", func_std),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite(name));
            }
        }
        if lof_std <= 0.0 {
            return Err(ConfigError::NonPositiveStd("lof_std"));
        }
        if func_std <= 0.0 {
            return Err(ConfigError::NonPositiveStd("func_std"));
        }

        Ok(ConfidenceParams {
            threshold,
            lof_std,
            func_std,
        })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn lof_std(&self) -> f64 {
        self.lof_std
    }

    pub fn func_std(&self) -> f64 {
        self.func_std
    }
}

impl Default for ConfidenceParams {
    fn default() -> Self {
        ConfidenceParams {
            threshold: DEFAULT_THRESHOLD,
            lof_std: DEFAULT_LOF_STD,
            func_std: DEFAULT_FUNC_STD,
        }
    }
}

impl TryFrom<RawConfidenceParams> for ConfidenceParams {
    type Error = ConfigError;

    fn try_from(raw: RawConfidenceParams) -> Result<Self, Self::Error> {
        ConfidenceParams::new(raw.threshold, raw.lof_std, raw.func_std)
    }
}
