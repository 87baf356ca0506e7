//! API Server setup

use axum::Router;
use reklamap_db::ReklamapDatabase;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::middleware::JwtConfig;
use crate::routes::create_router;
use crate::state::{ApiConfig, AppState};

/// Create the API server
pub async fn create_server(
    config: ApiConfig,
    database: Arc<ReklamapDatabase>,
) -> Result<(Router, SocketAddr), Box<dyn std::error::Error + Send + Sync>> {
    let jwt = JwtConfig::try_new(config.jwt_secret.clone())?;
    let state = AppState::new(database, jwt).await?;

    let mut router = create_router(state);

    router = router.layer(TraceLayer::new_for_http());

    if config.enable_cors {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    Ok((router, addr))
}

/// Run the API server
pub async fn run_server(
    config: ApiConfig,
    database: Arc<ReklamapDatabase>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let (router, addr) = create_server(config, database).await?;

    tracing::info!("ReklaMap API server listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

/// Start server in background (for testing)
pub async fn start_background_server(
    config: ApiConfig,
    database: Arc<ReklamapDatabase>,
) -> Result<SocketAddr, Box<dyn std::error::Error + Send + Sync>> {
    let (router, addr) = create_server(config, database).await?;

    // Port 0 binds an ephemeral port
    let listener = TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            tracing::error!(error = %e, "Server error");
        }
    });

    Ok(actual_addr)
}
