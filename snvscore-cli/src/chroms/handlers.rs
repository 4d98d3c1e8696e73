use anyhow::Result;
use clap::ArgMatches;
use log::info;

use snvscore_fetch::{GenomeProvider, UcscClient, compare_chromosomes, primary_chromosomes};

pub fn run_chroms(matches: &ArgMatches) -> Result<()> {
    let genome = matches
        .get_one::<String>("genome")
        .expect("A genome assembly is required.");
    let api = matches.get_one::<String>("ucsc-api").cloned();

    let client = UcscClient::new(api, None);
    info!("Listing chromosomes of {} from {}", genome, client.api());
    let mut chromosomes = client.chromosomes(genome)?;

    if matches.get_flag("all") {
        chromosomes.sort_by(|a, b| compare_chromosomes(&a.name, &b.name));
    } else {
        chromosomes = primary_chromosomes(chromosomes);
    }

    for chrom in chromosomes {
        println!("{}\t{}", chrom.name, chrom.size);
    }

    Ok(())
}
