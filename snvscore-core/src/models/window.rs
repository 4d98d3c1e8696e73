use std::fmt::{self, Display};

use crate::errors::{ConfigError, ValidationError};

///
/// Window sizes must be positive and even so the variant can sit at the centre.
///
pub fn validate_window_size(window_size: usize) -> Result<usize, ConfigError> {
    if window_size == 0 || window_size % 2 != 0 {
        return Err(ConfigError::InvalidWindowSize(window_size));
    }
    Ok(window_size)
}

///
/// A contiguous stretch of genome sequence, fetched around a variant.
///
/// `start` is genome-absolute and 0-based; the window covers the half-open
/// interval `[start, start + len)`.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceWindow {
    sequence: String,
    start: u64,
    genome: String,
    chrom: String,
}

impl SequenceWindow {
    pub fn new(sequence: String, start: u64, genome: &str, chrom: &str) -> Self {
        SequenceWindow {
            sequence: sequence.to_ascii_uppercase(),
            start,
            genome: genome.to_string(),
            chrom: chrom.to_string(),
        }
    }

    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    ///
    /// Exclusive, 0-based end coordinate
    ///
    pub fn end(&self) -> u64 {
        self.start + self.len() as u64
    }

    pub fn genome(&self) -> &str {
        &self.genome
    }

    pub fn chrom(&self) -> &str {
        &self.chrom
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn base_at(&self, offset: usize) -> Option<char> {
        self.sequence.as_bytes().get(offset).map(|b| *b as char)
    }

    ///
    /// Translate a 1-based genomic position into an offset within the window.
    ///
    /// Positions that do not fall inside the window are rejected; the error
    /// reports the window bounds in 1-based inclusive coordinates.
    ///
    pub fn offset_of(&self, position: u64) -> Result<usize, ValidationError> {
        if position == 0 {
            return Err(ValidationError::InvalidPosition(position));
        }
        if self.is_empty() {
            return Err(ValidationError::EmptyWindow);
        }

        let p = position - 1;
        if p < self.start || p >= self.end() {
            return Err(ValidationError::OutsideWindow {
                position,
                start: self.start + 1,
                end: self.end(),
            });
        }

        Ok((p - self.start) as usize)
    }
}

impl Display for SequenceWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}-{} ({})",
            self.chrom,
            self.start,
            self.end(),
            self.genome
        )
    }
}
