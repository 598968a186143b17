use crate::error::ServerError;
use crate::room::RoomHandle;
use crate::transport::{ServerConfig, SessionRegistry, ws_handler};
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use lockstep_core::RoomSnapshot;
use std::future::Future;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

/// Shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub registry: SessionRegistry,
    pub room: RoomHandle,
}

impl AppState {
    /// Spawns the room task; must run inside a tokio runtime.
    pub fn new(config: &ServerConfig) -> Self {
        let registry = SessionRegistry::new();
        let room = RoomHandle::spawn(Arc::new(registry.clone()), config.command_capacity);

        Self { registry, room }
    }
}

pub fn router(state: AppState, config: &ServerConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(&config.room_path, get(ws_handler))
        .route("/status", get(status_handler))
        .layer(cors)
        .with_state(state)
}

pub(crate) async fn status_handler(
    State(state): State<AppState>,
) -> Result<Json<RoomSnapshot>, StatusCode> {
    match state.room.snapshot().await {
        Ok(snapshot) => Ok(Json(snapshot)),
        Err(e) => {
            error!("Status request failed: {}", e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}

/// Bind, then serve the room until `shutdown` resolves.
pub async fn serve<F>(config: ServerConfig, shutdown: F) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    config.validate()?;

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.bind,
            source,
        })?;
    let local_addr = listener.local_addr().map_err(|source| ServerError::Bind {
        addr: config.bind,
        source,
    })?;
    info!(
        "Room server listening on ws://{}{}",
        local_addr, config.room_path
    );

    let state = AppState::new(&config);
    let app = router(state, &config);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Room server stopped");
    Ok(())
}
