pub const DEFAULT_WINDOW_SIZE: usize = 8192;
pub const DEFAULT_UCSC_API: &str = "https://api.genome.ucsc.edu";
pub const DEFAULT_MODEL_ENDPOINT: &str = "http://127.0.0.1:9000/score";

// derived offline from the first 500 BRCA1 saturation-mutagenesis variants
pub const DEFAULT_THRESHOLD: f64 = -0.0009178519;
pub const DEFAULT_LOF_STD: f64 = 0.0015140239;
pub const DEFAULT_FUNC_STD: f64 = 0.0009016589;

pub const LIKELY_PATHOGENIC: &str = "Likely pathogenic";
pub const LIKELY_BENIGN: &str = "Likely benign";

pub const VALID_BASES: [char; 4] = ['A', 'C', 'G', 'T'];
