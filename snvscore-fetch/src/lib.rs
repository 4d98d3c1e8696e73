//! # Genome sequence providers for snvscore
//!
//! Fetches the reference window around a variant. Two providers ship with
//! the crate:
//!
//! - `ucsc` - the UCSC Genome Browser REST API (requires the `http` feature)
//! - `fasta` - a local, optionally gzipped, FASTA file held in memory
//!
//! Both implement [`GenomeProvider`], which is all [`fetch_window`] needs.
pub mod fasta;
pub mod provider;
#[cfg(feature = "http")]
pub mod ucsc;

// re-exports
pub use fasta::FastaGenome;
pub use provider::*;
#[cfg(feature = "http")]
pub use ucsc::{GenomeAssembly, UcscClient};
