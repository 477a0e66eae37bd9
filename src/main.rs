use clap::Parser;
use planview::cli::Cli;
use planview::config::{config_root, watcher::ConfigWatcher, Settings};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let settings = Settings::new_with_cli(&cli)?;
    let host = settings.server.host.clone();
    let port = settings.server.port;

    info!(
        "Starting planview on {}:{} with {} plans",
        host,
        port,
        settings.plans.len()
    );

    let settings = Arc::new(RwLock::new(settings));

    let _watcher = if cli.no_watch {
        None
    } else {
        let settings_for_watcher = settings.clone();
        let cli_for_watcher = cli.clone();
        let paths = vec![
            cli.config.clone(),
            config_root(&cli.config).join("config/plans"),
        ];
        Some(ConfigWatcher::new(paths, move || {
            match Settings::new_with_cli(&cli_for_watcher) {
                Ok(new_settings) => {
                    let mut w = settings_for_watcher.blocking_write();
                    *w = new_settings;
                    info!("Configuration reloaded successfully");
                }
                Err(e) => error!("Failed to reload configuration: {}", e),
            }
        })?)
    };

    let app = planview::create_app(settings);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
