use anyhow::Result;
use clap::ArgMatches;
use log::info;

use snvscore_fetch::UcscClient;

pub fn run_genomes(matches: &ArgMatches) -> Result<()> {
    let api = matches.get_one::<String>("ucsc-api").cloned();
    let organism = matches.get_one::<String>("organism");
    let all = matches.get_flag("all");

    let client = UcscClient::new(api, None);
    info!("Listing genome assemblies from {}", client.api());

    let genomes = client
        .genomes()?
        .into_iter()
        .filter(|g| all || g.active)
        .filter(|g| organism.is_none_or(|o| g.organism.eq_ignore_ascii_case(o)));

    for genome in genomes {
        println!("{}\t{}\t{}", genome.organism, genome.id, genome.name);
    }

    Ok(())
}
