use clap::{Arg, ArgAction, Command, arg, value_parser};

use snvscore_core::consts::{DEFAULT_MODEL_ENDPOINT, DEFAULT_UCSC_API};

pub const SCORE_CMD: &str = "score";

pub fn create_score_cli() -> Command {
    Command::new(SCORE_CMD)
        .about("Score a single nucleotide variant and classify it as likely pathogenic or likely benign.")
        .arg(
            arg!(--position <POSITION> "1-based genomic position of the variant")
                .required(true)
                .value_parser(value_parser!(u64)),
        )
        .arg(arg!(--alt <BASE> "Alternative base (A, C, G or T)").required(true))
        .arg(
            arg!(--genome <GENOME> "Genome assembly")
                .required(false)
                .default_value("hg38"),
        )
        .arg(arg!(--chrom <CHROM> "Chromosome name, e.g. chr17").required(true))
        .arg(
            Arg::new("window-size")
                .long("window-size")
                .required(false)
                .value_parser(value_parser!(usize))
                .help("Number of bases of context around the variant (default: 8192)"),
        )
        .arg(arg!(--fasta <FASTA> "Read reference bases from a local FASTA file instead of UCSC").required(false))
        .arg(
            Arg::new("ucsc-api")
                .long("ucsc-api")
                .required(false)
                .default_value(DEFAULT_UCSC_API)
                .help("Base URL of the UCSC REST API"),
        )
        .arg(
            Arg::new("model-endpoint")
                .long("model-endpoint")
                .required(false)
                .default_value(DEFAULT_MODEL_ENDPOINT)
                .help("URL the sequences are POSTed to for scoring"),
        )
        .arg(arg!(--params <PARAMS> "Calibration constants written by `snvscore calibrate`").required(false))
        .arg(
            arg!(--pretty "Pretty-print the JSON result")
                .action(ArgAction::SetTrue),
        )
}
