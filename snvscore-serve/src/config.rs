//! Configuration for the variant scoring service

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use snvscore_core::consts::{DEFAULT_MODEL_ENDPOINT, DEFAULT_UCSC_API, DEFAULT_WINDOW_SIZE};
use snvscore_core::errors::ConfigError;
use snvscore_core::models::{ConfidenceParams, validate_window_size};

/// Main service configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub server: ServerConfig,
    pub genome: GenomeConfig,
    pub model: ModelConfig,
    pub scoring: ScoringConfig,
    /// Inline calibration constants; the BRCA1 defaults when absent
    pub calibration: Option<ConfidenceParams>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    pub host: String,
    /// Port to listen on (default: 8000)
    pub port: u16,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GenomeSource {
    #[default]
    Ucsc,
    Fasta,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GenomeConfig {
    pub source: GenomeSource,
    /// Base URL of the UCSC REST API
    pub ucsc_api: String,
    /// FASTA file served when `source = "fasta"`
    pub fasta: Option<PathBuf>,
    /// Assembly identifier the FASTA file provides
    pub fasta_genome: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ModelConfig {
    /// URL the sequences are POSTed to for scoring
    pub endpoint: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub window_size: usize,
    /// A TOML file written by `snvscore calibrate`; wins over `[calibration]`
    pub params_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Default for GenomeConfig {
    fn default() -> Self {
        Self {
            source: GenomeSource::Ucsc,
            ucsc_api: DEFAULT_UCSC_API.to_string(),
            fasta: None,
            fasta_genome: "hg38".to_string(),
            timeout_seconds: 30,
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_MODEL_ENDPOINT.to_string(),
            timeout_seconds: 600,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            params_file: None,
        }
    }
}

impl ServiceConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: ServiceConfig =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would only fail once requests arrive
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_window_size(self.scoring.window_size)?;

        if self.genome.source == GenomeSource::Fasta && self.genome.fasta.is_none() {
            return Err(ConfigError::Parse(
                "genome.source is \"fasta\" but genome.fasta is not set".to_string(),
            ));
        }
        if self.model.endpoint.is_empty() {
            return Err(ConfigError::Parse("model.endpoint is empty".to_string()));
        }

        Ok(())
    }

    ///
    /// The calibration constants to classify with: from `scoring.params_file`
    /// if set, else the `[calibration]` section, else the built-in defaults.
    ///
    pub fn confidence_params(&self) -> Result<ConfidenceParams, ConfigError> {
        if let Some(path) = &self.scoring.params_file {
            let contents = std::fs::read_to_string(path)?;
            return toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()));
        }

        Ok(self.calibration.unwrap_or_default())
    }
}
