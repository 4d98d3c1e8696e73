use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use snvscore_serve::{ServiceConfig, serve};

pub fn run_serve(matches: &ArgMatches) -> Result<()> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => {
            info!("Loading configuration from {}", path);
            ServiceConfig::from_file(path).with_context(|| format!("Invalid configuration {}", path))?
        }
        None => ServiceConfig::default(),
    };

    if let Some(host) = matches.get_one::<String>("host") {
        config.server.host = host.clone();
    }
    if let Some(port) = matches.get_one::<u16>("port") {
        config.server.port = *port;
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start the async runtime")?;

    runtime.block_on(serve(config))
}
