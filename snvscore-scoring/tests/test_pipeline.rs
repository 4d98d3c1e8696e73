//! End-to-end tests of the single-variant flow against a local FASTA genome
//! and a deterministic stand-in for the likelihood model.

use std::io::Write;

use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use tempfile::NamedTempFile;

use snvscore_core::errors::{FetchError, ScoringError, ValidationError, VariantError};
use snvscore_core::models::{ConfidenceParams, Prediction, VariantRequest};
use snvscore_fetch::FastaGenome;
use snvscore_scoring::{SequenceScorer, SharedScorer, score_variant};

/// Log-likelihood stand-in: every G costs one unit.
struct GPenaltyScorer {
    calls: usize,
}

impl SequenceScorer for GPenaltyScorer {
    fn score_sequences(&mut self, sequences: &[String]) -> Result<Vec<f64>, ScoringError> {
        self.calls += 1;
        Ok(sequences
            .iter()
            .map(|s| -(s.chars().filter(|c| *c == 'G').count() as f64))
            .collect())
    }
}

/// chr1 is `ACGT` repeated: 1-based positions 1, 5, 9, ... are `A`, 3, 7, 11, ... are `G`.
#[fixture]
fn genome() -> (NamedTempFile, FastaGenome) {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, ">chr1").unwrap();
    for _ in 0..5 {
        writeln!(file, "{}", "acgt".repeat(10)).unwrap();
    }
    let genome = FastaGenome::from_path(file.path(), "test", None).unwrap();
    (file, genome)
}

#[fixture]
fn params() -> ConfidenceParams {
    ConfidenceParams::new(-0.5, 1.0, 2.0).unwrap()
}

#[rstest]
#[case(101, "G", 'A', -1.0, Prediction::LikelyPathogenic, 0.5)]
#[case(101, "T", 'A', 0.0, Prediction::LikelyBenign, 0.25)]
#[case(103, "A", 'G', 1.0, Prediction::LikelyBenign, 0.75)]
#[case(1, "G", 'A', -1.0, Prediction::LikelyPathogenic, 0.5)]
#[case(200, "G", 'T', -1.0, Prediction::LikelyPathogenic, 0.5)]
fn test_score_variant(
    genome: (NamedTempFile, FastaGenome),
    params: ConfidenceParams,
    #[case] position: u64,
    #[case] alt: &str,
    #[case] reference: char,
    #[case] delta: f64,
    #[case] prediction: Prediction,
    #[case] confidence: f64,
) {
    let (_file, genome) = genome;
    let mut scorer = GPenaltyScorer { calls: 0 };
    let request = VariantRequest::new(position, alt, "test", "chr1").unwrap();

    let result = score_variant(&request, &genome, &mut scorer, &params, 64).unwrap();

    assert_eq!(result.position, position);
    assert_eq!(result.reference, reference);
    assert_eq!(result.alternative, request.alternative);
    assert_eq!(result.delta_score, delta);
    assert_eq!(result.prediction, prediction);
    assert_eq!(result.classification_confidence, confidence);
    // reference and variant are scored separately
    assert_eq!(scorer.calls, 2);
}

#[rstest]
fn test_position_outside_window_never_reaches_model(
    genome: (NamedTempFile, FastaGenome),
    params: ConfidenceParams,
) {
    let (_file, genome) = genome;
    let mut scorer = GPenaltyScorer { calls: 0 };
    // window starts at 197 and is clipped at the chromosome end (200)
    let request = VariantRequest::new(230, "G", "test", "chr1").unwrap();

    let err = score_variant(&request, &genome, &mut scorer, &params, 64).unwrap_err();

    assert!(err.is_validation());
    assert!(matches!(
        err,
        VariantError::Validation(ValidationError::OutsideWindow {
            position: 230,
            start: 198,
            end: 200
        })
    ));
    assert_eq!(scorer.calls, 0);
}

#[rstest]
fn test_unknown_chromosome_is_upstream_error(
    genome: (NamedTempFile, FastaGenome),
    params: ConfidenceParams,
) {
    let (_file, genome) = genome;
    let mut scorer = GPenaltyScorer { calls: 0 };
    let request = VariantRequest::new(10, "G", "test", "chr2").unwrap();

    let err = score_variant(&request, &genome, &mut scorer, &params, 64).unwrap_err();

    assert!(!err.is_validation());
    assert!(matches!(
        err,
        VariantError::Upstream(FetchError::UnknownChromosome(_))
    ));
    assert_eq!(scorer.calls, 0);
}

#[rstest]
fn test_window_past_largest_coordinate_is_validation_error(
    genome: (NamedTempFile, FastaGenome),
    params: ConfidenceParams,
) {
    let (_file, genome) = genome;
    let mut scorer = GPenaltyScorer { calls: 0 };
    let request = VariantRequest::new(u64::MAX, "G", "test", "chr1").unwrap();

    let err = score_variant(&request, &genome, &mut scorer, &params, 64).unwrap_err();

    assert!(matches!(
        err,
        VariantError::Validation(ValidationError::WindowOverflow {
            position: u64::MAX,
            window_size: 64
        })
    ));
    assert_eq!(scorer.calls, 0);
}

#[rstest]
fn test_shared_scorer_is_reused(genome: (NamedTempFile, FastaGenome), params: ConfidenceParams) {
    let (_file, genome) = genome;
    let shared = SharedScorer::new(GPenaltyScorer { calls: 0 });

    for position in [21, 41, 61] {
        let request = VariantRequest::new(position, "G", "test", "chr1").unwrap();
        let mut model = shared.lock().unwrap();
        let result = score_variant(&request, &genome, &mut *model, &params, 32).unwrap();
        assert_eq!(result.prediction, Prediction::LikelyPathogenic);
    }
}
