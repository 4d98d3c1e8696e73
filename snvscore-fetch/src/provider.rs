use std::cmp::Ordering;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use snvscore_core::errors::{FetchError, ValidationError, VariantError};
use snvscore_core::models::SequenceWindow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chromosome {
    pub name: String,
    pub size: u64,
}

///
/// Anything that can hand out reference bases for a genome assembly.
///
/// Coordinates are 0-based and half-open. A provider may return fewer bases
/// than requested when the interval runs past the end of the chromosome.
///
pub trait GenomeProvider: Send + Sync {
    fn fetch(&self, genome: &str, chrom: &str, start: u64, end: u64) -> Result<String, FetchError>;

    fn chromosomes(&self, genome: &str) -> Result<Vec<Chromosome>, FetchError>;
}

///
/// Compute the half-open interval of `window_size` bases centred on a 1-based
/// `position`. The variant base lands at offset `window_size / 2`, unless the
/// window is clipped at the start of the chromosome.
///
/// Fails when the end of the window does not fit in a genomic coordinate.
///
pub fn window_interval(position: u64, window_size: usize) -> Result<(u64, u64), ValidationError> {
    let p = position.saturating_sub(1);
    let half = (window_size / 2) as u64;
    let end = p
        .checked_add(half)
        .ok_or(ValidationError::WindowOverflow {
            position,
            window_size,
        })?;

    Ok((p.saturating_sub(half), end))
}

///
/// Fetch the sequence window around a variant.
///
/// # Arguments
///
/// - provider: where the bases come from
/// - position: 1-based genomic position of the variant
/// - genome: assembly identifier, e.g. `hg38`
/// - chrom: chromosome name, e.g. `chr17`
/// - window_size: number of bases to fetch
///
pub fn fetch_window<P: GenomeProvider + ?Sized>(
    provider: &P,
    position: u64,
    genome: &str,
    chrom: &str,
    window_size: usize,
) -> Result<SequenceWindow, VariantError> {
    let (start, end) = window_interval(position, window_size)?;

    info!(
        "Fetching {} bp window around position {}",
        window_size, position
    );
    info!("Coordinates: {}:{}-{} ({})", chrom, start, end, genome);

    let sequence = provider.fetch(genome, chrom, start, end)?;

    let expected_length = end - start;
    if sequence.len() as u64 != expected_length {
        warn!(
            "Received sequence length ({}) differs from expected ({})",
            sequence.len(),
            expected_length
        );
    }

    let window = SequenceWindow::new(sequence, start, genome, chrom);
    info!("Loaded reference window {} (length: {} bases)", window, window.len());

    Ok(window)
}

///
/// Whether a contig is a primary assembled chromosome, as opposed to an alt
/// haplotype, an unplaced or a random contig.
///
pub fn is_primary_chromosome(name: &str) -> bool {
    !(name.contains('_') || name.contains("Un") || name.contains("random"))
}

///
/// Order chromosomes naturally: numbered chromosomes first in numeric
/// order, then the rest (X, Y, M, ...) lexicographically.
///
pub fn compare_chromosomes(a: &str, b: &str) -> Ordering {
    let a = a.strip_prefix("chr").unwrap_or(a);
    let b = b.strip_prefix("chr").unwrap_or(b);

    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

///
/// Drop non-primary contigs and sort the remainder naturally.
///
pub fn primary_chromosomes(chromosomes: Vec<Chromosome>) -> Vec<Chromosome> {
    let mut primary: Vec<Chromosome> = chromosomes
        .into_iter()
        .filter(|c| is_primary_chromosome(&c.name))
        .collect();
    primary.sort_by(|a, b| compare_chromosomes(&a.name, &b.name));

    primary
}
