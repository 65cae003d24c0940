pub mod cli;
pub mod config;
pub mod db;
pub mod entities;
pub mod models;
pub mod seed;

pub use config::Config;

use cli::{Cli, Commands};
use config::LogFormat;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `RUST_LOG` wins over `general.log_level`.
/// Logs go to stderr so command output on stdout stays clean.
pub fn init_tracing(config: &Config) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.general.log_format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

pub async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    config.validate()?;
    init_tracing(&config);
    debug!(database = %config.general.database_path, "Configuration loaded");

    match cli.command {
        Commands::Up {
            transactional,
            skip_check,
        } => cli::cmd_up(&config, transactional, skip_check).await,
        Commands::Down => cli::cmd_down(&config).await,
        Commands::Reset {
            transactional,
            skip_check,
        } => cli::cmd_reset(&config, transactional, skip_check).await,
        Commands::Status => cli::cmd_status(&config).await,
        Commands::Check => cli::cmd_check(),
        Commands::Init => cli::cmd_init(cli.config.as_deref()),
    }
}
