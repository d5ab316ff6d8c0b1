use anyhow::Result;
use hashchain::{Node, NodeConfig};
use hashchain_server::{router, LogFormat, ServerConfig};
use tokio::{net::TcpListener, signal};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes logging. `RUST_LOG` overrides the default filter.
fn init_logging(config: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("warn,hashchain=info,hashchain_store=info,hashchain_server=info,tower_http=info")
    });

    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Json => {
            registry.with(tracing_subscriber::fmt::layer().json()).init();
        }
        LogFormat::Pretty => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .pretty()
                .with_file(true)
                .with_line_number(true)
                .with_target(false);
            registry.with(fmt_layer).init();
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<()> {
    let config =
        ServerConfig::load().map_err(|e| anyhow::anyhow!("configuration failed: {e}"))?;

    init_logging(&config);
    info!("Starting hashchain node");
    debug!(?config, "configuration loaded");

    // Genesis exists before the listener is bound.
    let node = Node::in_memory(NodeConfig {
        genesis_payload: config.genesis_payload,
    });
    let genesis = node.tip();
    info!(
        index = genesis.index,
        timestamp = %genesis.timestamp,
        payload = genesis.payload,
        hash = %genesis.hash,
        "genesis block"
    );

    let addr = config.socket_addr().map_err(anyhow::Error::msg)?;
    let listener = TcpListener::bind(addr).await?;
    info!(address = %addr, "listening");

    let app = router(node, config.request_timeout());
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
