use clap::Parser;
use college_info::{app, init_tracing, Catalog, Config};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

const DEBUG_LOG: &str = "/tmp/college-info-debug.log";

#[derive(Parser)]
#[command(name = "college-info", about = "Read-only college information API")]
struct Cli {
    /// Address to listen on; overrides `server.bind`.
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// Config file to load instead of $XDG_CONFIG_HOME/college-info/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write debug logs to /tmp/college-info-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.server.bind = bind;
    }

    init_tracing(
        &config.server.log_level,
        cli.debug.then(|| Path::new(DEBUG_LOG)),
    )?;

    let catalog = Catalog::embedded()?;
    tracing::info!(
        colleges = catalog.colleges().len(),
        news = catalog.news().len(),
        "catalog loaded"
    );

    let listener = tokio::net::TcpListener::bind(config.server.bind).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app(catalog, &config))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
