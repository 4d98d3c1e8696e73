use std::fs;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use snvscore_core::consts::DEFAULT_WINDOW_SIZE;
use snvscore_core::models::{ConfidenceParams, VariantRequest, validate_window_size};
use snvscore_fetch::{FastaGenome, GenomeProvider, UcscClient};
use snvscore_scoring::{HttpScorer, score_variant};

pub fn run_score(matches: &ArgMatches) -> Result<()> {
    // get arguments from CLI
    let position = *matches
        .get_one::<u64>("position")
        .expect("A variant position is required.");
    let alt = matches
        .get_one::<String>("alt")
        .expect("An alternative base is required.");
    let genome = matches
        .get_one::<String>("genome")
        .expect("A genome assembly is required.");
    let chrom = matches
        .get_one::<String>("chrom")
        .expect("A chromosome is required.");
    let window_size = matches
        .get_one::<usize>("window-size")
        .copied()
        .unwrap_or(DEFAULT_WINDOW_SIZE);
    let endpoint = matches
        .get_one::<String>("model-endpoint")
        .expect("A model endpoint is required.");

    // coerce arguments to types
    let request = VariantRequest::new(position, alt, genome, chrom)?;
    validate_window_size(window_size)?;

    let params = match matches.get_one::<String>("params") {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Can't read calibration constants from {}", path))?;
            toml::from_str::<ConfidenceParams>(&contents)
                .with_context(|| format!("Can't parse calibration constants in {}", path))?
        }
        None => ConfidenceParams::default(),
    };

    let provider: Box<dyn GenomeProvider> = match matches.get_one::<String>("fasta") {
        Some(fasta) => {
            let only = [request.chromosome.clone()];
            let fasta_genome = FastaGenome::from_path(fasta, genome, Some(&only))?;
            info!("Reading {} bases from {}", fasta_genome.genome(), fasta);
            Box::new(fasta_genome)
        }
        None => {
            let api = matches.get_one::<String>("ucsc-api").cloned();
            let client = UcscClient::new(api, None);
            info!("Reading {} bases from {}", genome, client.api());
            Box::new(client)
        }
    };

    let mut scorer = HttpScorer::new(endpoint, None);
    info!("Scoring with the model at {}", scorer.endpoint());

    let result = score_variant(&request, provider.as_ref(), &mut scorer, &params, window_size)?;

    let output = if matches.get_flag("pretty") {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{}", output);

    Ok(())
}
