//! Process service
//!
//! Posts `{"key":"value"}` to the configured endpoint and prints the body of a
//! `201 Created` response.
//!
//! # Flow
//!
//! ```text
//!   config (TOML / env file / env / CLI)
//!        │
//!        ▼
//!   ┌──────────────┐   marshal   ┌──────────┐
//!   │ProcessService│────────────▶│ SerdeJson│
//!   │              │             └──────────┘
//!   │              │   POST      ┌─────────────┐        ┌──────────┐
//!   │              │────────────▶│ReqwestClient│───────▶│ endpoint │
//!   │              │◀────────────│   (pool)    │◀───────│          │
//!   └──────┬───────┘ status+body └─────────────┘        └──────────┘
//!          │
//!          ▼
//!   stdout: body, or the error
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::Instrument;

use process_service::lifecycle::startup::DEFAULT_ENV_FILE;
use process_service::lifecycle::{load_startup_config, EnvFileStatus, StartupOptions, TransportGuard};
use process_service::observability::init_logging;
use process_service::{ProcessService, ReqwestClient, SerdeJson, Service};

#[derive(Parser)]
#[command(name = "process-service")]
#[command(about = "Post a fixed JSON payload and print the created resource", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Environment-style file with KEY=VALUE lines.
    #[arg(short, long, default_value = DEFAULT_ENV_FILE)]
    env_file: PathBuf,

    /// Endpoint URL override.
    #[arg(short, long)]
    url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let options = StartupOptions {
        config_path: cli.config,
        env_file: cli.env_file,
        url: cli.url,
    };
    let startup = load_startup_config(&options, |key| std::env::var(key).ok())?;
    let config = startup.config;

    init_logging(&config.observability);

    tracing::info!("process-service v{} starting", env!("CARGO_PKG_VERSION"));
    match &startup.env_file {
        EnvFileStatus::Loaded => {}
        EnvFileStatus::Missing => tracing::warn!(
            path = %options.env_file.display(),
            "Env file not found, using environment only"
        ),
        EnvFileStatus::Invalid(reason) => tracing::warn!(
            path = %options.env_file.display(),
            error = %reason,
            "Env file ignored, using environment only"
        ),
    }

    let transport = TransportGuard::new(Arc::new(ReqwestClient::new()));
    let service = ProcessService::new(transport.client(), SerdeJson, &config);

    let run_id = uuid::Uuid::new_v4();
    let result = service
        .start_process()
        .instrument(tracing::info_span!("run", %run_id))
        .await;

    match result {
        Ok(body) => println!("{}", body),
        Err(e) => {
            tracing::error!(error = %e, "Process failed");
            println!("{}", e);
            println!();
        }
    }

    drop(transport);
    tracing::info!("Shutdown complete");
    Ok(())
}
