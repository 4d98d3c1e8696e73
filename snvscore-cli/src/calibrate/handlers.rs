use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use snvscore_calibrate::consts::DEFAULT_CHUNK_SIZE;
use snvscore_calibrate::{calibrate, read_variant_table, write_report, write_scored_variants};
use snvscore_core::consts::DEFAULT_WINDOW_SIZE;
use snvscore_fetch::FastaGenome;
use snvscore_scoring::HttpScorer;

pub fn run_calibrate(matches: &ArgMatches) -> Result<()> {
    // get arguments from CLI
    let variants = matches
        .get_one::<String>("variants")
        .expect("A path to a variant table is required.");
    let fasta = matches
        .get_one::<String>("fasta")
        .expect("A path to a FASTA file is required.");
    let chrom_name = matches
        .get_one::<String>("chrom-name")
        .expect("A chromosome name is required.");
    let endpoint = matches
        .get_one::<String>("model-endpoint")
        .expect("A model endpoint is required.");
    let output_params = matches
        .get_one::<String>("output-params")
        .expect("An output path for the constants is required.");
    let output_variants = matches
        .get_one::<String>("output-variants")
        .expect("An output path for the variants is required.");

    let limit = matches.get_one::<usize>("limit").copied();
    let window_size = matches
        .get_one::<usize>("window-size")
        .copied()
        .unwrap_or(DEFAULT_WINDOW_SIZE);
    let chunk_size = matches
        .get_one::<usize>("chunk-size")
        .copied()
        .unwrap_or(DEFAULT_CHUNK_SIZE);

    // coerce arguments to types
    let variants = read_variant_table(Path::new(variants), limit)?;
    info!("Read {} labelled variants", variants.len());

    let only = [chrom_name.clone()];
    let genome = FastaGenome::from_path(fasta, "calibration", Some(&only))?;
    let chrom_seq = genome
        .sequence(chrom_name)
        .with_context(|| format!("{} has no sequence named {}", fasta, chrom_name))?;

    let mut scorer = HttpScorer::new(endpoint, None);

    let (report, deltas) = calibrate(chrom_seq, &variants, &mut scorer, window_size, chunk_size)?;

    info!(
        "threshold={}, lof_std={}, func_std={}, AUROC={:.4}",
        report.threshold, report.lof_std, report.func_std, report.auroc
    );

    write_report(output_params, &report)?;
    write_scored_variants(output_variants, &variants, &deltas)?;
    info!("Wrote {} and {}", output_params, output_variants);

    Ok(())
}
