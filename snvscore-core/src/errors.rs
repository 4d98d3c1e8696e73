use thiserror::Error;

/// A request was malformed or does not fit the fetched window. Raised before
/// the model is ever invoked.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid base: {0:?} (expected one of A, C, G, T)")]
    InvalidBase(String),

    #[error("Invalid variant position: {0} (positions are 1-based)")]
    InvalidPosition(u64),

    #[error("Variant position {position} is outside the fetched window (start={start}, end={end})")]
    OutsideWindow { position: u64, start: u64, end: u64 },

    #[error("Offset {offset} is out of range for a sequence of length {len}")]
    Range { offset: usize, len: usize },

    #[error("Fetched sequence window is empty")]
    EmptyWindow,

    #[error("A {window_size} bp window around position {position} runs past the largest genomic coordinate")]
    WindowOverflow { position: u64, window_size: usize },
}

/// The genome sequence provider could not deliver the requested bases.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to fetch genome sequence from {url}: HTTP status {status}")]
    Status { status: u16, url: String },

    #[error("Request to genome provider failed: {0}")]
    Transport(String),

    #[error("Genome provider error: {0}")]
    Provider(String),

    #[error("Genome provider response is missing sequence data")]
    MissingSequence,

    #[error("Unknown chromosome: {0}")]
    UnknownChromosome(String),

    #[error("Malformed genome provider response: {0}")]
    MalformedResponse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// The sequence-likelihood model failed or answered with the wrong shape.
#[derive(Error, Debug)]
pub enum ScoringError {
    #[error("Scoring model error: {0}")]
    Model(String),

    #[error("Scoring model returned {got} scores for {expected} sequences")]
    CountMismatch { expected: usize, got: usize },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Calibration constant `{0}` must be finite")]
    NonFinite(&'static str),

    #[error("Calibration constant `{0}` must be strictly positive")]
    NonPositiveStd(&'static str),

    #[error("Window size must be a positive even number, got {0}")]
    InvalidWindowSize(usize),

    #[error("Can't parse configuration: {0}")]
    Parse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Everything that can go wrong while scoring one variant.
#[derive(Error, Debug)]
pub enum VariantError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Upstream(#[from] FetchError),

    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

impl VariantError {
    pub fn is_validation(&self) -> bool {
        matches!(self, VariantError::Validation(_))
    }
}
