use std::{future::Future, net::SocketAddr};

use axum::Router;
use configs::AppConfig;
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Build the app router with a fresh store for `cfg`.
pub async fn build_app(cfg: &AppConfig) -> Router {
    let state = AppState::from_config(cfg).await;
    routes::build_router(state, build_cors())
}

async fn bind(cfg: &AppConfig) -> Result<TcpListener, StartupError> {
    let addr = cfg.bind_addr();
    TcpListener::bind(addr.as_str())
        .await
        .map_err(|source| StartupError::Bind { addr, source })
}

/// Serve until `shutdown` resolves, then drain in-flight requests.
pub async fn run_until<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_app(&cfg).await;
    let listener = bind(&cfg).await?;
    let addr = listener.local_addr()?;
    info!(%addr, seed = cfg.recipes.seed, "starting recipes server");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    info!(%addr, "recipes server stopped");
    Ok(())
}

/// Public entry: serve until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    run_until(cfg, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "cannot listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
        info!("received Ctrl+C, shutting down");
    })
    .await
}

/// Handle to a server started with [`spawn`].
pub struct RunningServer {
    pub addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<std::io::Result<()>>,
}

impl RunningServer {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Stop accepting connections and wait for the serve task to finish.
    pub async fn shutdown(mut self) -> anyhow::Result<()> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle.await??;
        Ok(())
    }
}

/// Bind (port 0 picks a free port) and serve in a background task.
pub async fn spawn(cfg: &AppConfig) -> anyhow::Result<RunningServer> {
    let app = build_app(cfg).await;
    let listener = bind(cfg).await?;
    let addr = listener.local_addr()?;
    let (tx, rx) = oneshot::channel::<()>();

    let handle = tokio::spawn(async move {
        let res = axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = rx.await;
            })
            .await;
        if let Err(e) = &res {
            error!(error = %e, "server error");
        }
        res
    });
    info!(%addr, "recipes server spawned");

    Ok(RunningServer { addr, shutdown: Some(tx), handle })
}
