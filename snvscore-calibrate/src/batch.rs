use anyhow::{Context, Result};
use fxhash::FxHashMap as HashMap;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};

use snvscore_core::models::validate_window_size;
use snvscore_scoring::{SequenceScorer, build_variant_sequence};

use crate::table::LabeledVariant;

///
/// Reference and variant sequences for a set of calibration variants.
///
/// Neighbouring variants usually share a reference window, so references
/// are stored once and each variant points at its window by index.
///
#[derive(Debug, Clone, Default)]
pub struct ScoringBatch {
    pub references: Vec<String>,
    pub variants: Vec<String>,
    pub reference_indexes: Vec<usize>,
}

impl ScoringBatch {
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

///
/// Cut the reference window for each variant out of a chromosome sequence
/// and build the matching variant sequence.
///
/// Windows are clipped at both ends of the chromosome; the variant offset
/// inside the window is `min(window_size / 2, pos - 1)`.
///
/// # Arguments
///
/// - chrom_seq: the full chromosome the variants lie on (upper case)
/// - variants: the labelled variants
/// - window_size: number of bases of context
///
pub fn build_batch(chrom_seq: &str, variants: &[LabeledVariant], window_size: usize) -> Result<ScoringBatch> {
    let half = validate_window_size(window_size)? / 2;
    anyhow::ensure!(chrom_seq.is_ascii(), "Chromosome sequence contains non-ASCII characters");
    let mut batch = ScoringBatch::default();
    let mut reference_to_index: HashMap<String, usize> = HashMap::default();

    for variant in variants {
        let p = match variant.pos.checked_sub(1) {
            Some(p) => p as usize,
            None => anyhow::bail!("Variant {}:0: positions are 1-based", variant.chrom),
        };
        if p >= chrom_seq.len() {
            anyhow::bail!(
                "Variant {}:{} lies beyond the end of the chromosome (length {})",
                variant.chrom,
                variant.pos,
                chrom_seq.len()
            );
        }

        let start = p.saturating_sub(half);
        let end = (p + half).min(chrom_seq.len());
        let reference = &chrom_seq[start..end];
        let offset = half.min(p);

        let genome_base = reference.as_bytes()[offset] as char;
        if genome_base != variant.reference {
            warn!(
                "Reference mismatch at {}:{}: table says {}, genome has {}",
                variant.chrom, variant.pos, variant.reference, genome_base
            );
        }

        let variant_seq = build_variant_sequence(reference, offset, variant.alt)
            .with_context(|| format!("Failed to build variant {}:{}", variant.chrom, variant.pos))?;

        let index = match reference_to_index.get(reference) {
            Some(index) => *index,
            None => {
                let index = batch.references.len();
                reference_to_index.insert(reference.to_string(), index);
                batch.references.push(reference.to_string());
                index
            }
        };

        batch.reference_indexes.push(index);
        batch.variants.push(variant_seq);
    }

    info!(
        "Built {} variant sequences over {} unique reference windows",
        batch.variants.len(),
        batch.references.len()
    );

    Ok(batch)
}

fn score_in_chunks<S: SequenceScorer + ?Sized>(
    scorer: &mut S,
    sequences: &[String],
    chunk_size: usize,
    message: &'static str,
) -> Result<Vec<f64>> {
    let pb = ProgressBar::new(sequences.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar().template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")?,
    );
    pb.set_message(message);

    let mut scores = Vec::with_capacity(sequences.len());
    for chunk in sequences.chunks(chunk_size.max(1)) {
        let chunk_scores = scorer.score_sequences(chunk)?;
        if chunk_scores.len() != chunk.len() {
            anyhow::bail!(
                "Scoring model returned {} scores for {} sequences",
                chunk_scores.len(),
                chunk.len()
            );
        }
        scores.extend(chunk_scores);
        pb.inc(chunk.len() as u64);
    }
    pb.finish_and_clear();

    Ok(scores)
}

///
/// Score every unique reference and every variant, and return the delta
/// score (variant minus its reference) for each variant, in input order.
///
pub fn score_batch<S: SequenceScorer + ?Sized>(
    batch: &ScoringBatch,
    scorer: &mut S,
    chunk_size: usize,
) -> Result<Vec<f64>> {
    info!("Scoring likelihoods of {} reference sequences", batch.references.len());
    let reference_scores = score_in_chunks(scorer, &batch.references, chunk_size, "reference sequences")?;

    info!("Scoring likelihoods of {} variant sequences", batch.variants.len());
    let variant_scores = score_in_chunks(scorer, &batch.variants, chunk_size, "variant sequences")?;

    Ok(variant_scores
        .iter()
        .zip(batch.reference_indexes.iter())
        .map(|(variant, index)| variant - reference_scores[*index])
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};
    use snvscore_core::errors::ScoringError;

    use crate::table::VariantClass;

    fn variant(pos: u64, reference: char, alt: char) -> LabeledVariant {
        LabeledVariant {
            chrom: "17".to_string(),
            pos,
            reference,
            alt,
            class: VariantClass::FuncInt,
        }
    }

    #[fixture]
    fn chrom() -> String {
        "ACGT".repeat(25)
    }

    struct GCounter;

    impl SequenceScorer for GCounter {
        fn score_sequences(&mut self, sequences: &[String]) -> Result<Vec<f64>, ScoringError> {
            Ok(sequences
                .iter()
                .map(|s| -(s.matches('G').count() as f64))
                .collect())
        }
    }

    #[rstest]
    fn test_windows_are_centred(chrom: String) {
        let batch = build_batch(&chrom, &[variant(49, 'A', 'G')], 10).unwrap();

        // p = 48, window [43, 53), variant at offset 5
        assert_eq!(batch.references, vec!["TACGTACGTA".to_string()]);
        assert_eq!(batch.variants, vec!["TACGTGCGTA".to_string()]);
    }

    #[rstest]
    fn test_windows_clipped_at_both_ends(chrom: String) {
        let batch = build_batch(&chrom, &[variant(2, 'C', 'A'), variant(99, 'G', 'A')], 10).unwrap();

        // left clip: [0, 6), offset min(5, 1) = 1
        assert_eq!(batch.references[0], "ACGTAC");
        assert_eq!(batch.variants[0], "AAGTAC");
        // right clip: [93, 100), offset 5
        assert_eq!(batch.references[1], "CGTACGT");
        assert_eq!(batch.variants[1], "CGTACAT");
    }

    #[rstest]
    fn test_references_are_deduplicated(chrom: String) {
        let variants = vec![
            variant(49, 'A', 'G'),
            variant(49, 'A', 'C'),
            variant(49, 'A', 'T'),
            variant(50, 'C', 'A'),
        ];
        let batch = build_batch(&chrom, &variants, 10).unwrap();

        assert_eq!(batch.len(), 4);
        assert_eq!(batch.references.len(), 2);
        assert_eq!(batch.reference_indexes, vec![0, 0, 0, 1]);
    }

    #[test]
    fn test_non_ascii_chromosome_is_rejected() {
        let chrom = format!("{}é{}", "ACGT".repeat(12), "ACGT".repeat(12));
        assert!(build_batch(&chrom, &[variant(10, 'C', 'A')], 10).is_err());
    }

    #[rstest]
    fn test_variant_beyond_chromosome(chrom: String) {
        assert!(build_batch(&chrom, &[variant(101, 'A', 'G')], 10).is_err());
    }

    #[rstest]
    fn test_score_batch_deltas(chrom: String) {
        let variants = vec![
            variant(49, 'A', 'G'),
            variant(49, 'A', 'T'),
            variant(51, 'G', 'C'),
        ];
        let batch = build_batch(&chrom, &variants, 10).unwrap();

        for chunk_size in [1, 2, 100] {
            let deltas = score_batch(&batch, &mut GCounter, chunk_size).unwrap();
            assert_eq!(deltas, vec![-1.0, 0.0, 1.0]);
        }
    }
}
