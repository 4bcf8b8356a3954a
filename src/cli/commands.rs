//! CLI command implementations
//!
//! Each command loads the config, installs logging, and runs its async
//! body on a fresh tokio runtime.

use std::future::Future;
use std::path::Path;

use tracing::info;

use crate::http_server::HttpServer;
use crate::observability::init_logging;
use crate::plants::{seed, PlantRepository};

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};

/// Main CLI entry point
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&config),
        Command::Serve { config, port } => serve(&config, port),
        Command::Seed { config } => seed_samples(&config),
    }
}

/// Create the database file and the plants table
pub fn init(config_path: &Path) -> CliResult<()> {
    let config = load(config_path)?;

    block_on(async {
        let repo = PlantRepository::connect(&config.database).await?;
        repo.close().await;
        info!(path = %config.database.path.display(), "database initialized");
        Ok::<_, CliError>(())
    })
}

/// Open the store and serve HTTP until Ctrl-C
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let mut config = load(config_path)?;
    if let Some(port) = port {
        config.server.port = port;
    }

    block_on(async {
        let repo = PlantRepository::connect(&config.database).await?;
        let server = HttpServer::new(config.server.clone(), repo.clone());

        let result = server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)));
        repo.close().await;
        result
    })
}

/// Insert the sample plants
pub fn seed_samples(config_path: &Path) -> CliResult<()> {
    let config = load(config_path)?;

    block_on(async {
        let repo = PlantRepository::connect(&config.database).await?;
        let plants = seed::seed(&repo).await?;
        repo.close().await;
        for plant in plants {
            println!("{}\t{}", plant.id, plant.name.unwrap_or_default());
        }
        Ok::<_, CliError>(())
    })
}

fn load(config_path: &Path) -> CliResult<Config> {
    let config = Config::load(config_path)?;
    init_logging(config.log_format);
    Ok(config)
}

fn block_on<F>(fut: F) -> CliResult<()>
where
    F: Future<Output = CliResult<()>>,
{
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;
    rt.block_on(fut)
}
