use anyhow::Context;
use repository::init_repository;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;
use util::load_config;

const CONFIG_NAME: &str = "Config.toml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_config(CONFIG_NAME)?;
    let port = config
        .get("server")
        .and_then(|server| server.get("port"))
        .and_then(|port| port.as_integer())
        .context("server.port is missing from the config")?;
    let port = u16::try_from(port).context("server.port must fit in u16")?;

    let repository = init_repository();
    info!(
        task = "seed store",
        events = repository.event.find_all().await?.len(),
        sponsors = repository.sponsor.find_all().await?.len(),
    );

    let router = api::serve(repository, CONFIG_NAME).await?;

    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    info!(task = "bind", addr = %listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!(task = "shutdown");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        signal(SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
