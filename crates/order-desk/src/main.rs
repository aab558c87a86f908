use actor_framework::tracing::setup_tracing;
use order_desk::config::DeskConfig;
use order_desk::http;
use order_desk::lifecycle::OrderSystem;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = DeskConfig::from_env()?;
    info!(
        addr = %config.addr,
        mailbox = config.mailbox,
        discount = ?config.discount_mode,
        "Starting order desk"
    );

    let system = OrderSystem::from_config(&config)?;
    let app = http::router(system.desk_client.clone());

    let listener = TcpListener::bind(config.addr).await?;
    info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    let desk = system.shutdown().await?;
    info!(
        orders = desk.ledger().len(),
        products = desk.catalog().len(),
        "Stopped"
    );
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
