use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use configs::AppConfig;
use service::recipes::{MemoryRecipeStore, RecipeStore};
use service::storage::json_seed::BootstrapOutcome;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn parse_bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    let raw = cfg.server.bind_addr();
    raw.parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address {raw}: {e}")))
}

/// Seed the store from the configured bootstrap file and build the router.
pub async fn build_app(cfg: &AppConfig) -> (Router, BootstrapOutcome) {
    // 启动结果由 bootstrap 自行记录日志，这里只负责装配
    let (store, outcome) = MemoryRecipeStore::bootstrap(&cfg.store.bootstrap_path).await;
    let store: Arc<dyn RecipeStore> = store;
    let app = routes::build_router(AppState::new(store), build_cors());
    (app, outcome)
}

/// Public entry: seed the store, bind and serve until Ctrl+C / SIGTERM
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let addr = parse_bind_addr(&cfg)?;
    let (app, _) = build_app(&cfg).await;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.to_string(), source })?;
    info!(service = "server", event = "listening", %addr, "recipes api listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)?;

    info!(service = "server", event = "drained", "server stopped accepting connections");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!(event = "shutdown_signal", "received terminate signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "failed to install SIGTERM handler");
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
