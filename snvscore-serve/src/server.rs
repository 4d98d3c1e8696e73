//! Web server setup using Axum framework

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use axum::routing::{get, post};
use log::info;

use snvscore_core::models::ConfidenceParams;
use snvscore_fetch::{FastaGenome, GenomeProvider, UcscClient};
use snvscore_scoring::{HttpScorer, SharedScorer};

use crate::config::{GenomeSource, ServiceConfig};
use crate::handlers;

/// Process-scoped state shared by every request
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn GenomeProvider>,
    /// The model, loaded once; requests take turns on it
    pub scorer: SharedScorer,
    pub params: ConfidenceParams,
    pub window_size: usize,
    pub genome_source: String,
}

impl AppState {
    ///
    /// Load the genome provider and the model described by a configuration.
    /// Called once when the process starts.
    ///
    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        config.validate()?;
        let params = config.confidence_params()?;

        let (provider, genome_source): (Arc<dyn GenomeProvider>, String) = match config.genome.source {
            GenomeSource::Ucsc => {
                let client = UcscClient::new(
                    Some(config.genome.ucsc_api.clone()),
                    Some(Duration::from_secs(config.genome.timeout_seconds)),
                );
                info!("Using UCSC genome API at {}", client.api());
                let source = format!("ucsc:{}", client.api());
                (Arc::new(client), source)
            }
            GenomeSource::Fasta => {
                let path = config
                    .genome
                    .fasta
                    .as_ref()
                    .context("genome.fasta must be set for a FASTA genome source")?;
                let genome = FastaGenome::from_path(path, &config.genome.fasta_genome, None)?;
                let source = format!("fasta:{}:{}", genome.genome(), path.display());
                (Arc::new(genome), source)
            }
        };

        let model = HttpScorer::new(
            &config.model.endpoint,
            Some(Duration::from_secs(config.model.timeout_seconds)),
        );
        info!("Scoring model at {}", model.endpoint());
        let scorer = SharedScorer::new(model);

        Ok(AppState {
            provider,
            scorer,
            params,
            window_size: config.scoring.window_size,
            genome_source,
        })
    }
}

/// Create the Axum application with all routes
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/analyze_single_variant",
            post(handlers::analyze_single_variant),
        )
        .route("/api/v1/variants/score", post(handlers::score_variant_json))
        .fallback(handlers::handle_404)
        .with_state(state)
}

/// Bind and serve until the process is stopped
pub async fn serve(config: ServiceConfig) -> Result<()> {
    let state = AppState::from_config(&config)?;
    info!(
        "Classification constants: threshold={}, lof_std={}, func_std={}",
        state.params.threshold(),
        state.params.lof_std(),
        state.params.func_std()
    );

    let app = create_app(state);
    let addr = SocketAddr::new(
        config
            .server
            .host
            .parse()
            .with_context(|| format!("Invalid host: {}", config.server.host))?,
        config.server.port,
    );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Variant scoring service running on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
