use log::info;

use snvscore_core::errors::{ValidationError, VariantError};
use snvscore_core::models::{ConfidenceParams, ScoreResult, SequenceWindow, VariantRequest};
use snvscore_fetch::{GenomeProvider, fetch_window};

use crate::builder::build_variant_sequence;
use crate::classifier::{classify, delta_score};
use crate::scorer::{SequenceScorer, score_one};

///
/// Score a variant against an already fetched reference window.
///
/// The window must contain the variant position. Reference and variant are
/// scored with two separate model calls.
///
pub fn score_in_window<S: SequenceScorer + ?Sized>(
    request: &VariantRequest,
    window: &SequenceWindow,
    scorer: &mut S,
    params: &ConfidenceParams,
) -> Result<ScoreResult, VariantError> {
    let offset = window.offset_of(request.position)?;
    info!("Relative position within window: {}", offset);

    let reference = window.base_at(offset).ok_or(ValidationError::Range {
        offset,
        len: window.len(),
    })?;
    info!(
        "Reference base at {}:{} ({}): {}",
        window.chrom(),
        request.position,
        window.genome(),
        reference
    );

    let variant_sequence = build_variant_sequence(window.sequence(), offset, request.alternative)?;

    let reference_score = score_one(scorer, window.sequence())?;
    let variant_score = score_one(scorer, &variant_sequence)?;
    let delta = delta_score(reference_score, variant_score);
    let classification = classify(delta, params);

    info!(
        "{}: delta {:.10} -> {} ({:.3})",
        request, delta, classification.prediction, classification.confidence
    );

    Ok(ScoreResult {
        position: request.position,
        reference,
        alternative: request.alternative,
        delta_score: delta,
        prediction: classification.prediction,
        classification_confidence: classification.confidence,
    })
}

///
/// The full single-variant flow: fetch the window around the variant, build
/// the variant sequence, score both, classify the delta.
///
/// # Arguments
///
/// - request: the validated variant
/// - provider: source of reference bases
/// - scorer: the loaded model, borrowed exclusively for the duration of the call
/// - params: calibration constants
/// - window_size: number of bases of context to score
///
pub fn score_variant<P: GenomeProvider + ?Sized, S: SequenceScorer + ?Sized>(
    request: &VariantRequest,
    provider: &P,
    scorer: &mut S,
    params: &ConfidenceParams,
    window_size: usize,
) -> Result<ScoreResult, VariantError> {
    info!("Scoring variant {}", request);

    let window = fetch_window(
        provider,
        request.position,
        &request.genome,
        &request.chromosome,
        window_size,
    )?;

    score_in_window(request, &window, scorer, params)
}
