use clap::{Arg, ArgAction, Command, arg};

use snvscore_core::consts::DEFAULT_UCSC_API;

pub const GENOMES_CMD: &str = "genomes";

pub fn create_genomes_cli() -> Command {
    Command::new(GENOMES_CMD)
        .about("List the genome assemblies available from UCSC, grouped by organism.")
        .arg(arg!(--organism <ORGANISM> "Only list assemblies of this organism, e.g. Human").required(false))
        .arg(
            Arg::new("ucsc-api")
                .long("ucsc-api")
                .required(false)
                .default_value(DEFAULT_UCSC_API)
                .help("Base URL of the UCSC REST API"),
        )
        .arg(
            arg!(--all "Include assemblies UCSC marks as inactive")
                .action(ArgAction::SetTrue),
        )
}
