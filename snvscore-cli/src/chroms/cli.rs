use clap::{Arg, ArgAction, Command, arg};

use snvscore_core::consts::DEFAULT_UCSC_API;

pub const CHROMS_CMD: &str = "chroms";

pub fn create_chroms_cli() -> Command {
    Command::new(CHROMS_CMD)
        .about("List the chromosomes of a genome assembly available from UCSC.")
        .arg(
            arg!(--genome <GENOME> "Genome assembly")
                .required(false)
                .default_value("hg38"),
        )
        .arg(
            Arg::new("ucsc-api")
                .long("ucsc-api")
                .required(false)
                .default_value(DEFAULT_UCSC_API)
                .help("Base URL of the UCSC REST API"),
        )
        .arg(
            arg!(--all "Include alternate haplotypes, unplaced and random contigs")
                .action(ArgAction::SetTrue),
        )
}
