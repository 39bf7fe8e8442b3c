use crate::api::{self, AppState};
use crate::clients::{AuthClient, DataClient, NotifyClient};
use crate::config::Config;
use crate::error::ServiceError;
use crate::orchestration::Pipeline;
use relay_framework::{HttpTransport, Transport};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Builds the pipeline with all three adapters sharing `transport`.
pub fn build_pipeline(transport: Arc<dyn Transport>, destructive_actions_enabled: bool) -> Pipeline {
    Pipeline::new(
        AuthClient::new(transport.clone()),
        DataClient::new(transport.clone(), destructive_actions_enabled),
        NotifyClient::new(transport),
    )
}

/// The running service: an HTTP server plus the pipeline behind it.
///
/// # Example
///
/// ```ignore
/// let system = IntegrationSystem::start(&config).await?;
/// println!("listening on {}", system.local_addr());
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct IntegrationSystem {
    local_addr: SocketAddr,
    pipeline: Pipeline,
    shutdown_tx: oneshot::Sender<()>,
    handle: JoinHandle<std::io::Result<()>>,
}

impl IntegrationSystem {
    /// Binds the listener, wires the adapters and spawns the server.
    ///
    /// Port `0` picks a free port; read it back with [`local_addr`](Self::local_addr).
    pub async fn start(config: &Config) -> Result<Self, ServiceError> {
        let addr = config.bind_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| ServiceError::Bind {
                addr: addr.clone(),
                source,
            })?;
        let local_addr = listener
            .local_addr()
            .map_err(|source| ServiceError::Bind { addr, source })?;

        let base_url = config
            .downstream_base_url
            .clone()
            .unwrap_or_else(|| loopback_url(local_addr));
        let transport = Arc::new(HttpTransport::new(base_url.clone())?);
        let pipeline = build_pipeline(transport, config.destructive_actions_enabled);

        let router = api::router(AppState::new(pipeline.clone()));
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
        });

        info!(
            %local_addr,
            downstream = %base_url,
            destructive_actions_enabled = config.destructive_actions_enabled,
            "Integration service started"
        );

        Ok(Self {
            local_addr,
            pipeline,
            shutdown_tx,
            handle,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// The pipeline the server routes `/api/process` to.
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Stops accepting connections, lets in-flight requests finish, and waits for the
    /// server task.
    pub async fn shutdown(self) -> Result<(), ServiceError> {
        info!("Shutting down integration service...");

        // The server may already be gone; the join below reports why.
        let _ = self.shutdown_tx.send(());

        match self.handle.await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                error!(error = %e, "Server stopped with an error");
                return Err(ServiceError::Server(e.to_string()));
            }
            Err(e) => {
                error!("Server task failed: {:?}", e);
                return Err(ServiceError::Server(format!("{e:?}")));
            }
        }

        info!("Integration service shutdown complete.");
        Ok(())
    }
}

fn loopback_url(local_addr: SocketAddr) -> String {
    if local_addr.ip().is_unspecified() {
        format!("http://127.0.0.1:{}", local_addr.port())
    } else {
        format!("http://{local_addr}")
    }
}
