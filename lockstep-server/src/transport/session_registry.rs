use crate::error::DeliveryError;
use crate::transport::SessionOutput;
use async_trait::async_trait;
use axum::extract::ws::Message;
use dashmap::DashMap;
use lockstep_core::SessionId;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Live WebSocket writers, keyed by session.
#[derive(Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<DashMap<SessionId, mpsc::UnboundedSender<Message>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_session(&self, session: SessionId, tx: mpsc::UnboundedSender<Message>) {
        self.sessions.insert(session, tx);
    }

    pub fn remove_session(&self, session: &SessionId) {
        self.sessions.remove(session);
    }
}

#[async_trait]
impl SessionOutput for SessionRegistry {
    async fn send(&self, session: &SessionId, text: String) -> Result<(), DeliveryError> {
        // clone the sender so the shard lock is not held across the send
        let tx = self
            .sessions
            .get(session)
            .map(|entry| entry.value().clone())
            .ok_or(DeliveryError::UnknownSession(*session))?;

        tx.send(Message::Text(text.into()))
            .map_err(|_| DeliveryError::SessionClosed(*session))
    }
}
