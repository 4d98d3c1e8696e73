use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use snvscore_core::errors::FetchError;
use snvscore_core::utils::get_dynamic_reader;

use crate::provider::{Chromosome, GenomeProvider};

///
/// Take the sequence name out of a FASTA header line: everything after `>`
/// up to the first whitespace.
///
pub fn parse_fasta_header(line: &str) -> &str {
    line.trim_start_matches('>')
        .split_whitespace()
        .next()
        .unwrap_or("")
}

///
/// A reference genome held in memory, read from a (optionally gzipped)
/// FASTA file. Serves windows locally, without touching the network.
///
pub struct FastaGenome {
    genome: String,
    sequences: HashMap<String, String>,
}

impl FastaGenome {
    ///
    /// Read a FASTA file.
    ///
    /// # Arguments
    ///
    /// - path: path to a `.fa`/`.fasta` file, optionally `.gz` compressed
    /// - genome: the assembly identifier this file provides, e.g. `hg38`
    /// - only: if given, keep only the listed sequences
    ///
    pub fn from_path<P: AsRef<Path>>(path: P, genome: &str, only: Option<&[String]>) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading FASTA file: {}", path.display());

        let reader = get_dynamic_reader(path)?;
        let mut sequences: HashMap<String, String> = HashMap::new();
        let mut current: Option<(String, String)> = None;

        let keep = |name: &str| only.is_none_or(|names| names.iter().any(|n| n == name));

        for line in reader.lines() {
            let line = line.with_context(|| format!("Failed to read FASTA file: {}", path.display()))?;
            let line = line.trim_end();

            if line.starts_with('>') {
                if let Some((name, seq)) = current.take() {
                    sequences.insert(name, seq);
                }
                let name = parse_fasta_header(line);
                if keep(name) {
                    current = Some((name.to_string(), String::new()));
                }
            } else if let Some((name, seq)) = current.as_mut() {
                if !line.is_ascii() {
                    anyhow::bail!(
                        "Non-ASCII sequence data in record {} of FASTA file: {}",
                        name,
                        path.display()
                    );
                }
                seq.push_str(&line.to_ascii_uppercase());
            }
        }
        if let Some((name, seq)) = current.take() {
            sequences.insert(name, seq);
        }

        if sequences.is_empty() {
            anyhow::bail!("No sequences loaded from FASTA file: {}", path.display());
        }
        info!("Loaded {} sequence(s) for {}", sequences.len(), genome);

        Ok(FastaGenome {
            genome: genome.to_string(),
            sequences,
        })
    }

    pub fn genome(&self) -> &str {
        &self.genome
    }

    pub fn sequence(&self, chrom: &str) -> Option<&str> {
        self.sequences.get(chrom).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}

impl GenomeProvider for FastaGenome {
    fn fetch(&self, genome: &str, chrom: &str, start: u64, end: u64) -> Result<String, FetchError> {
        if genome != self.genome {
            return Err(FetchError::Provider(format!(
                "genome {} is not available, this FASTA provides {}",
                genome, self.genome
            )));
        }

        let seq = self
            .sequences
            .get(chrom)
            .ok_or_else(|| FetchError::UnknownChromosome(chrom.to_string()))?;

        let len = seq.len() as u64;
        if start >= len || start > end {
            return Err(FetchError::Provider(format!(
                "requested interval {}:{}-{} is outside the chromosome (length {})",
                chrom, start, end, len
            )));
        }

        Ok(seq[start as usize..end.min(len) as usize].to_string())
    }

    fn chromosomes(&self, genome: &str) -> Result<Vec<Chromosome>, FetchError> {
        if genome != self.genome {
            return Err(FetchError::Provider(format!(
                "genome {} is not available, this FASTA provides {}",
                genome, self.genome
            )));
        }

        Ok(self
            .sequences
            .iter()
            .map(|(name, seq)| Chromosome {
                name: name.clone(),
                size: seq.len() as u64,
            })
            .collect())
    }
}
