use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use assistant_api::{build_router, Cli, ConfigError, Container, ContainerConfig, ModelBackend};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Configuration problems are fatal: refuse to start before binding.
    let backend = if cli.mock_model {
        ModelBackend::Mock
    } else {
        let kind = cli.model.provider();
        let config = cli.model.to_model_config().map_err(|err| {
            let hint = match err {
                ConfigError::MissingField("api_key") => {
                    format!(" (set {} or pass --api-key)", kind.api_key_env())
                }
                _ => String::new(),
            };
            anyhow::Error::new(err).context(format!(
                "invalid {} model configuration{hint}",
                kind.as_str()
            ))
        })?;
        ModelBackend::Provider { kind, config }
    };

    let container = Container::new(ContainerConfig {
        backend,
        service_name: cli.service_name.clone(),
    })?;
    let app = build_router(container);

    let listener = tokio::net::TcpListener::bind((cli.host.as_str(), cli.port))
        .await
        .with_context(|| format!("failed to bind {}:{}", cli.host, cli.port))?;
    info!(
        "{} listening on http://{}",
        cli.service_name,
        listener.local_addr()?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
