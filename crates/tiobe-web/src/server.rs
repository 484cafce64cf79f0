//! Server loop: bind, serve until a stop signal, drain in-flight requests.

use std::future::Future;
use std::sync::Arc;

use anyhow::Context;
use tiobe_config::Config;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

use crate::router::build_router;
use crate::state::{AppState, SharedState};

/// Build state from `config`, bind the configured address and serve until
/// SIGINT/SIGTERM. A bind failure is returned as an error so the process
/// exits non-zero and the supervisor restarts it.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let addr = config.server.bind_addr()?;
    let state: SharedState = Arc::new(AppState::new(config)?);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    serve(listener, state, shutdown_signal()).await?;
    info!("Server stopped");
    Ok(())
}

/// Serve on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: SharedState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_router(Arc::clone(&state));
    let addr = listener.local_addr()?;

    state.mark_serving();
    info!("🚀 Server running at http://{}", addr);
    info!("   API:     http://{}/api/languages", addr);
    info!("   OpenAPI: http://{}/api-docs/openapi.json", addr);
    info!("   Swagger: http://{}/swagger-ui/", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}

/// Resolves on Ctrl+C or, on unix, SIGTERM from the process manager.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
