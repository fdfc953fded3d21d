use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use provider_view::{BrowserSession, ViewConfig};

mod interactive;

const DEFAULT_LOG_FILE: &str = "providers-admin.log";

/// Browse, search, filter and sort service providers
#[derive(Parser, Debug)]
#[command(name = "providers-admin", version, about)]
struct Args {
    /// JSON file with provider records (defaults to PROVIDERS_DATA, then the built-in sample)
    #[arg(long, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Rows per page (defaults to PROVIDERS_PAGE_SIZE, then 10)
    #[arg(long, value_name = "ROWS")]
    page_size: Option<usize>,

    /// How long notifications stay up, in milliseconds (defaults to PROVIDERS_TOAST_MS, then 5000)
    #[arg(long, value_name = "MS")]
    toast_ms: Option<u64>,

    /// Log file (defaults to PROVIDERS_LOG, then providers-admin.log)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl Args {
    /// Command-line values win over the environment.
    fn apply(&self, mut config: ViewConfig) -> Result<ViewConfig> {
        if let Some(data) = &self.data {
            config.data_path = Some(data.clone());
        }
        if let Some(page_size) = self.page_size {
            config.items_per_page = page_size;
        }
        if let Some(toast_ms) = self.toast_ms {
            config.notification_duration = Duration::from_millis(toast_ms);
        }
        config.validate().context("Invalid command-line arguments")?;
        Ok(config)
    }

    fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .or_else(|| std::env::var_os("PROVIDERS_LOG").map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (to a file, the terminal belongs to the UI)
    let log_path = args.log_path();
    let log_file = File::create(&log_path)
        .with_context(|| format!("Failed to create log file {}", log_path.display()))?;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,provider_view=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(log_file)),
        )
        .init();

    // Load configuration
    let config = ViewConfig::from_env().context("Failed to load configuration")?;
    let config = args.apply(config)?;
    tracing::info!(
        items_per_page = config.items_per_page,
        notification_ms = config.notification_duration.as_millis() as u64,
        data = ?config.data_path,
        "Configuration loaded"
    );

    let session = BrowserSession::from_config(&config).context("Failed to load provider records")?;

    interactive::run_interactive(interactive::App::new(session, &config)).await
}
