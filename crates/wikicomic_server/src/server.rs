//! Listener binding and graceful shutdown.

use crate::{AppState, ServiceConfig, create_router};
use tracing::info;
use wikicomic_error::{ServerError, ServerErrorKind, WikicomicResult};

/// Bind the configured address and serve until SIGINT or SIGTERM.
///
/// After the listener stops accepting connections the task runner is
/// drained, so in-flight generation runs finish before the process exits.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
/// while accepting connections.
pub async fn serve(config: &ServiceConfig, state: AppState) -> WikicomicResult<()> {
    let app = create_router(state.clone(), &config.server.media_root);
    let address = config.bind_address();

    let listener = tokio::net::TcpListener::bind(&address).await.map_err(|e| {
        ServerError::new(ServerErrorKind::Bind {
            address: address.clone(),
            message: e.to_string(),
        })
    })?;
    info!(%address, "WikiComic server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Io(e.to_string())))?;

    info!("Server stopped accepting connections, draining generation runs");
    state.runner.shutdown().await;

    Ok(())
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server shuts
/// down cleanly whether stopped interactively or by a process manager.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received SIGINT, starting graceful shutdown");
        }
        () = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
