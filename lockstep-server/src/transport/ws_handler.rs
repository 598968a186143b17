use crate::transport::AppState;
use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use lockstep_core::{ClientFrame, SessionId};
use tokio::sync::mpsc;
use tracing::{debug, error, info};

pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    // one session per connection
    let session = SessionId::new();

    ws.on_upgrade(move |socket| handle_socket(socket, session, state))
}

async fn handle_socket(socket: WebSocket, session: SessionId, state: AppState) {
    info!("New WebSocket connection: {}", session);

    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel();

    state.registry.add_session(session, tx);

    if let Err(e) = state.room.join(session).await {
        error!("Room rejected join for {}: {}", session, e);
        state.registry.remove_session(&session);
        return;
    }

    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(msg).await.is_err() {
                break;
            }
        }
    });

    let mut recv_task = tokio::spawn({
        let room = state.room.clone();

        async move {
            while let Some(Ok(msg)) = receiver.next().await {
                match msg {
                    Message::Text(text) => {
                        let frame = ClientFrame::decode(text.as_str());
                        if let Err(e) = room.message(session, frame).await {
                            error!("Room died: {}", e);
                            break;
                        }
                    }
                    Message::Binary(data) => {
                        debug!("Ignoring {} byte binary frame from {}", data.len(), session);
                    }
                    Message::Close(_) => break,
                    _ => {}
                }
            }
        }
    });

    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    };

    // leave exactly once, whichever half ended first
    if let Err(e) = state.room.leave(session).await {
        error!("Room rejected leave for {}: {}", session, e);
    }
    state.registry.remove_session(&session);
    info!("WebSocket disconnected: {}", session);
}
