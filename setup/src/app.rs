use std::sync::Arc;

use anyhow::Error;
use tokio::net::TcpListener;

use lyricsync_application::{SyncLyricsUseCase, SyncLyricsUseCaseImpl};
use lyricsync_configuration::{AppConfig, ServerConfig};
use lyricsync_domain::ForcedAlignmentPort;
use lyricsync_http_server::{create_app_routes, AppState};
use lyricsync_infra_aeneas::{AeneasAdapterConfig, AeneasForcedAligner};

pub async fn build_and_run(config: AppConfig, server_config: ServerConfig) -> Result<(), Error> {
    let app = Application::new(config).await?;
    app.run(server_config).await
}

pub struct Application {
    pub config: AppConfig,
    pub state: AppState,
}

impl Application {
    pub async fn new(config: AppConfig) -> Result<Self, Error> {
        tracing::info!(
            command = %config.aligner.command,
            workspace_root = %config.aligner.workspace_root,
            default_language = %config.aligner.default_language,
            "initializing lyrics sync application"
        );

        let adapter_cfg = AeneasAdapterConfig {
            command: config.aligner.command.clone(),
            args: config.aligner.args.clone(),
            workspace_root: config.aligner.workspace_root.clone(),
        };
        let aligner: Arc<dyn ForcedAlignmentPort> = Arc::new(
            AeneasForcedAligner::new(&adapter_cfg)
                .map_err(|err| anyhow::anyhow!("aeneas adapter setup failed: {err}"))?,
        );
        let usecase: Arc<dyn SyncLyricsUseCase> = Arc::new(SyncLyricsUseCaseImpl::new(
            aligner,
            config.aligner.default_language.clone(),
        ));
        let state = AppState::new(usecase);

        Ok(Self { config, state })
    }

    pub async fn run(self, server_config: ServerConfig) -> Result<(), Error> {
        tracing::info!(
            host = %server_config.host,
            port = server_config.port,
            "starting lyrics sync HTTP server"
        );

        let router = create_app_routes(self.state);
        let listener = TcpListener::bind(server_config.bind_address()).await?;
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|err| anyhow::anyhow!("server startup failed: {err}"))
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
