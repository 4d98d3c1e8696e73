use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

use snvscore_core::models::ConfidenceParams;
use snvscore_scoring::SequenceScorer;

use crate::batch::{build_batch, score_batch};
use crate::roc::roc_curve;
use crate::table::{LabeledVariant, VariantClass};

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

///
/// Sample standard deviation (`n - 1` in the denominator). Needs at least
/// two values.
///
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let mean = mean(values)?;
    let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    Some((ss / (values.len() - 1) as f64).sqrt())
}

///
/// Summary of a calibration run. Serialises to the TOML file the service
/// reads its classification constants from.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationReport {
    pub threshold: f64,
    pub lof_std: f64,
    pub func_std: f64,
    /// zero-shot AUROC of `-delta` for separating LOF from FUNC/INT
    pub auroc: f64,
    pub n_lof: usize,
    pub n_func: usize,
}

impl CalibrationReport {
    pub fn params(&self) -> Result<ConfidenceParams> {
        Ok(ConfidenceParams::new(self.threshold, self.lof_std, self.func_std)?)
    }
}

///
/// Derive the classification constants from delta scores of labelled
/// variants.
///
/// LOF is the positive class and `-delta` the classifier score, so the
/// Youden-optimal ROC threshold is negated back into delta space.
///
pub fn calibrate_from_deltas(classes: &[VariantClass], deltas: &[f64]) -> Result<CalibrationReport> {
    if classes.len() != deltas.len() {
        anyhow::bail!("Got {} classes but {} delta scores", classes.len(), deltas.len());
    }

    let labels: Vec<bool> = classes.iter().map(|c| c.is_lof()).collect();
    let scores: Vec<f64> = deltas.iter().map(|d| -d).collect();

    let curve = roc_curve(&labels, &scores)?;
    let threshold = -curve.optimal_threshold();
    let auroc = curve.auc();

    let lof: Vec<f64> = deltas
        .iter()
        .zip(labels.iter())
        .filter(|(_, is_lof)| **is_lof)
        .map(|(d, _)| *d)
        .collect();
    let func: Vec<f64> = deltas
        .iter()
        .zip(labels.iter())
        .filter(|(_, is_lof)| !**is_lof)
        .map(|(d, _)| *d)
        .collect();

    let lof_std = sample_std(&lof).context("Need at least two LOF variants to calibrate")?;
    let func_std = sample_std(&func).context("Need at least two FUNC/INT variants to calibrate")?;

    let report = CalibrationReport {
        threshold,
        lof_std,
        func_std,
        auroc,
        n_lof: lof.len(),
        n_func: func.len(),
    };
    // rejects a degenerate threshold or zero spread before anything is written
    report.params().context("Calibration produced unusable constants")?;

    info!(
        "Calibrated on {} LOF and {} FUNC/INT variants: threshold={}, lof_std={}, func_std={}, AUROC={:.4}",
        report.n_lof, report.n_func, report.threshold, report.lof_std, report.func_std, report.auroc
    );

    Ok(report)
}

///
/// Run the whole offline calibration: build windows for every variant on a
/// chromosome, score them, and derive the constants.
///
/// Returns the report and the delta score of every variant, in input order.
///
pub fn calibrate<S: SequenceScorer + ?Sized>(
    chrom_seq: &str,
    variants: &[LabeledVariant],
    scorer: &mut S,
    window_size: usize,
    chunk_size: usize,
) -> Result<(CalibrationReport, Vec<f64>)> {
    let batch = build_batch(chrom_seq, variants, window_size)?;
    let deltas = score_batch(&batch, scorer, chunk_size)?;

    let classes: Vec<VariantClass> = variants.iter().map(|v| v.class).collect();
    let report = calibrate_from_deltas(&classes, &deltas)?;

    Ok((report, deltas))
}
