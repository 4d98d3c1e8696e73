//! Client for the UCSC Genome Browser REST API.
//!
//! Three endpoints are used: `/getData/sequence` for bases,
//! `/list/chromosomes` for the contigs of an assembly and `/list/ucscGenomes`
//! for the assemblies themselves.
use std::collections::HashMap;
use std::time::Duration;

use log::debug;
use serde::Deserialize;
use ureq::Agent;

use snvscore_core::consts::DEFAULT_UCSC_API;
use snvscore_core::errors::FetchError;

use crate::provider::{Chromosome, GenomeProvider};

#[derive(Deserialize)]
struct SequenceResponse {
    dna: Option<String>,
    error: Option<String>,
}

#[derive(Deserialize)]
struct ChromosomesResponse {
    chromosomes: Option<HashMap<String, u64>>,
    error: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAssembly {
    source_name: Option<String>,
    description: Option<String>,
    organism: Option<String>,
    active: Option<i64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenomesResponse {
    ucsc_genomes: Option<HashMap<String, RawAssembly>>,
    error: Option<String>,
}

/// A genome assembly hosted by UCSC
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenomeAssembly {
    pub id: String,
    pub source_name: String,
    pub name: String,
    /// "other" when UCSC does not say
    pub organism: String,
    pub active: bool,
}

pub struct UcscClient {
    api: String,
    agent: Agent,
}

impl UcscClient {
    pub fn new(api: Option<String>, timeout: Option<Duration>) -> Self {
        let api = api.unwrap_or_else(|| DEFAULT_UCSC_API.to_string());
        let config = Agent::config_builder().timeout_global(timeout).build();

        UcscClient {
            api: api.trim_end_matches('/').to_string(),
            agent: config.into(),
        }
    }

    pub fn api(&self) -> &str {
        &self.api
    }

    pub fn sequence_url(&self, genome: &str, chrom: &str, start: u64, end: u64) -> String {
        format!(
            "{}/getData/sequence?genome={};chrom={};start={};end={}",
            self.api, genome, chrom, start, end
        )
    }

    pub fn chromosomes_url(&self, genome: &str) -> String {
        format!("{}/list/chromosomes?genome={}", self.api, genome)
    }

    pub fn genomes_url(&self) -> String {
        format!("{}/list/ucscGenomes", self.api)
    }

    ///
    /// List every assembly UCSC hosts, ordered by organism then id.
    ///
    pub fn genomes(&self) -> Result<Vec<GenomeAssembly>, FetchError> {
        let data: GenomesResponse = self.get_json(&self.genomes_url())?;

        let genomes = match data.ucsc_genomes {
            Some(genomes) => genomes,
            None => {
                return Err(FetchError::Provider(
                    data.error.unwrap_or_else(|| "missing UCSC genomes".to_string()),
                ));
            }
        };

        let mut assemblies: Vec<GenomeAssembly> = genomes
            .into_iter()
            .map(|(id, raw)| GenomeAssembly {
                source_name: raw.source_name.unwrap_or_else(|| id.clone()),
                name: raw.description.unwrap_or_else(|| id.clone()),
                organism: raw.organism.unwrap_or_else(|| "other".to_string()),
                active: raw.active.is_some_and(|a| a != 0),
                id,
            })
            .collect();
        assemblies.sort_by(|a, b| a.organism.cmp(&b.organism).then_with(|| a.id.cmp(&b.id)));

        Ok(assemblies)
    }

    fn get_json<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T, FetchError> {
        debug!("GET {}", url);

        let mut response = match self.agent.get(url).call() {
            Ok(resp) => resp,
            Err(ureq::Error::StatusCode(status)) => {
                return Err(FetchError::Status {
                    status,
                    url: url.to_string(),
                });
            }
            Err(e) => return Err(FetchError::Transport(e.to_string())),
        };

        response
            .body_mut()
            .read_json::<T>()
            .map_err(|e| FetchError::MalformedResponse(e.to_string()))
    }
}

impl Default for UcscClient {
    fn default() -> Self {
        UcscClient::new(None, None)
    }
}

impl GenomeProvider for UcscClient {
    fn fetch(&self, genome: &str, chrom: &str, start: u64, end: u64) -> Result<String, FetchError> {
        let url = self.sequence_url(genome, chrom, start, end);
        let data: SequenceResponse = self.get_json(&url)?;

        match data.dna {
            Some(dna) => Ok(dna.to_ascii_uppercase()),
            None => match data.error {
                Some(error) => Err(FetchError::Provider(error)),
                None => Err(FetchError::MissingSequence),
            },
        }
    }

    fn chromosomes(&self, genome: &str) -> Result<Vec<Chromosome>, FetchError> {
        let url = self.chromosomes_url(genome);
        let data: ChromosomesResponse = self.get_json(&url)?;

        let chromosomes = match data.chromosomes {
            Some(chromosomes) => chromosomes,
            None => {
                return Err(FetchError::Provider(
                    data.error.unwrap_or_else(|| "missing chromosomes".to_string()),
                ));
            }
        };

        Ok(chromosomes
            .into_iter()
            .map(|(name, size)| Chromosome { name, size })
            .collect())
    }
}
