use clap::{Arg, Command, arg, value_parser};

use snvscore_calibrate::consts::{DEFAULT_PARAMS_OUT, DEFAULT_VARIANTS_OUT};
use snvscore_core::consts::DEFAULT_MODEL_ENDPOINT;

pub const CALIBRATE_CMD: &str = "calibrate";

pub fn create_calibrate_cli() -> Command {
    Command::new(CALIBRATE_CMD)
        .about("Score a labelled variant table and derive the classification threshold and confidence scales.")
        .arg(
            arg!(--variants <TABLE> "Tab-separated variant table with chrom, pos, ref, alt and class columns")
                .required(true),
        )
        .arg(arg!(--fasta <FASTA> "FASTA file holding the chromosome the variants lie on").required(true))
        .arg(
            Arg::new("chrom-name")
                .long("chrom-name")
                .required(true)
                .help("Name of the FASTA record to score against, e.g. chr17"),
        )
        .arg(
            Arg::new("model-endpoint")
                .long("model-endpoint")
                .required(false)
                .default_value(DEFAULT_MODEL_ENDPOINT)
                .help("URL the sequences are POSTed to for scoring"),
        )
        .arg(
            arg!(--limit <N> "Only score the first N variants of the table")
                .required(false)
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("window-size")
                .long("window-size")
                .required(false)
                .value_parser(value_parser!(usize))
                .help("Number of bases of context around each variant (default: 8192)"),
        )
        .arg(
            Arg::new("chunk-size")
                .long("chunk-size")
                .required(false)
                .value_parser(value_parser!(usize))
                .help("Sequences sent to the model per request (default: 16)"),
        )
        .arg(
            Arg::new("output-params")
                .long("output-params")
                .required(false)
                .default_value(DEFAULT_PARAMS_OUT)
                .help("Where to write the calibration constants (TOML)"),
        )
        .arg(
            Arg::new("output-variants")
                .long("output-variants")
                .required(false)
                .default_value(DEFAULT_VARIANTS_OUT)
                .help("Where to write per-variant delta scores (TSV, gzipped if it ends in .gz)"),
        )
}
