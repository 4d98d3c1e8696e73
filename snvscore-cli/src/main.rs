mod calibrate;
mod chroms;
mod genomes;
mod score;
mod serve;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "snvscore";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Zero-shot pathogenicity scoring of single nucleotide variants with a genomic language model.")
        .subcommand_required(true)
        .subcommand(score::cli::create_score_cli())
        .subcommand(calibrate::cli::create_calibrate_cli())
        .subcommand(serve::cli::create_serve_cli())
        .subcommand(chroms::cli::create_chroms_cli())
        .subcommand(genomes::cli::create_genomes_cli())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // SINGLE VARIANT
        //
        Some((score::cli::SCORE_CMD, matches)) => {
            score::handlers::run_score(matches)?;
        }

        //
        // OFFLINE CALIBRATION
        //
        Some((calibrate::cli::CALIBRATE_CMD, matches)) => {
            calibrate::handlers::run_calibrate(matches)?;
        }

        //
        // HTTP SERVICE
        //
        Some((serve::cli::SERVE_CMD, matches)) => {
            serve::handlers::run_serve(matches)?;
        }

        Some((chroms::cli::CHROMS_CMD, matches)) => {
            chroms::handlers::run_chroms(matches)?;
        }

        Some((genomes::cli::GENOMES_CMD, matches)) => {
            genomes::handlers::run_genomes(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
