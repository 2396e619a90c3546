//! Utilities for running a service

pub mod database;
pub mod environment;

use axum::Router;
use std::env;
use std::net::{Ipv6Addr, SocketAddr};
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

const PORT_VAR: &str = "PORT";

/// Bind the registration site on all interfaces
///
/// The port comes from `PORT`. Without a usable value the OS picks one, which
/// is logged so a local run can still be found.
///
/// # Errors
///
/// - If the socket can't be bound
pub async fn get_tcp_listener() -> Result<TcpListener, tokio::io::Error> {
    let port = match env::var(PORT_VAR).map(|raw| raw.trim().parse::<u16>()) {
        Ok(Ok(port)) => port,
        Ok(Err(err)) => {
            warn!(%err, "{PORT_VAR} is not a valid port, using a random one");
            0
        }
        Err(_) => {
            debug!("{PORT_VAR} not set, using a random port");
            0
        }
    };

    let listener = TcpListener::bind(SocketAddr::from((Ipv6Addr::UNSPECIFIED, port))).await?;
    info!(addr = ?listener.local_addr()?, "listening");
    Ok(listener)
}

/// Serves an HTTP router until Ctrl-C is received
///
/// # Errors
///
/// - If the TCP listener fails to bind (see [`get_tcp_listener`])
/// - If the server fails while running
pub async fn start_http_service(app: Router) -> anyhow::Result<()> {
    let listener = get_tcp_listener().await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(%err, "failed to listen for Ctrl-C, running until killed");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
