pub const DEFAULT_CHUNK_SIZE: usize = 16;
pub const DEFAULT_PARAMS_OUT: &str = "confidence_params.toml";
pub const DEFAULT_VARIANTS_OUT: &str = "calibration_variants.tsv";

pub const LOF_CLASS: &str = "LOF";
pub const FUNC_CLASS: &str = "FUNC/INT";
