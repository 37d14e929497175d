use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::routes;
use crate::state::AppState;
use service::auth::service::AuthConfig;

fn auth_config(cfg: &configs::AuthConfig) -> AuthConfig {
    AuthConfig { jwt_secret: cfg.jwt_secret.clone(), token_ttl_hours: cfg.token_ttl_hours }
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        info!("received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("received terminate signal, shutting down");
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

/// Public entry: connect, migrate, build the app and serve until shutdown
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    // 启动时按配置执行迁移
    if cfg.database.run_migrations {
        models::db::migrate(&db).await?;
    }

    let jwt = cfg.auth.jwt_secret.is_some();
    let state = AppState::with_database(db, auth_config(&cfg.auth));
    let app: Router = routes::build_router(state);

    let addr: SocketAddr = cfg.server.bind_addr().parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, jwt, service = common::SERVICE_NAME, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}
