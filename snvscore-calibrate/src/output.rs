use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::Compression;
use flate2::write::GzEncoder;

use snvscore_core::utils::is_gzipped;

use crate::calibration::CalibrationReport;
use crate::table::LabeledVariant;

pub fn write_report<P: AsRef<Path>>(path: P, report: &CalibrationReport) -> Result<()> {
    let path = path.as_ref();
    let toml = toml::to_string(report).context("Failed to serialize calibration report")?;
    std::fs::write(path, toml).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

pub fn read_report<P: AsRef<Path>>(path: P) -> Result<CalibrationReport> {
    let path = path.as_ref();
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let report: CalibrationReport =
        toml::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(report)
}

///
/// Write every calibration variant with its delta score as a TSV file,
/// gzipped if the path ends in `.gz`.
///
pub fn write_scored_variants<P: AsRef<Path>>(path: P, variants: &[LabeledVariant], deltas: &[f64]) -> Result<()> {
    let path = path.as_ref();
    if variants.len() != deltas.len() {
        anyhow::bail!("Got {} variants but {} delta scores", variants.len(), deltas.len());
    }

    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer: Box<dyn Write> = match is_gzipped(path) {
        true => Box::new(GzEncoder::new(file, Compression::default())),
        false => Box::new(BufWriter::new(file)),
    };

    writeln!(writer, "chrom\tpos\tref\talt\tclass\tdelta_score")?;
    for (variant, delta) in variants.iter().zip(deltas.iter()) {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}\t{}",
            variant.chrom, variant.pos, variant.reference, variant.alt, variant.class, delta
        )?;
    }
    writer.flush()?;

    Ok(())
}
