use crate::error::RoomError;
use crate::room::{Room, RoomCommand};
use crate::transport::SessionOutput;
use lockstep_core::{ClientFrame, RoomSnapshot, SessionId};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing::info;

/// Cloneable entry point into a running room.
///
/// The room task stops once every handle has been dropped.
#[derive(Clone)]
pub struct RoomHandle {
    command_tx: mpsc::Sender<RoomCommand>,
}

impl RoomHandle {
    /// Start a room task on the current runtime. A capacity of 0 is raised to 1.
    pub fn spawn(output: Arc<dyn SessionOutput>, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        info!("Creating room (queue capacity {})", capacity);
        let (command_tx, command_rx) = mpsc::channel(capacity);

        let room = Room::new(command_rx, output);
        tokio::spawn(room.run());

        Self { command_tx }
    }

    pub async fn join(&self, session: SessionId) -> Result<(), RoomError> {
        self.send(RoomCommand::Join { session }).await
    }

    pub async fn message(&self, session: SessionId, frame: ClientFrame) -> Result<(), RoomError> {
        self.send(RoomCommand::Message { session, frame }).await
    }

    pub async fn leave(&self, session: SessionId) -> Result<(), RoomError> {
        self.send(RoomCommand::Leave { session }).await
    }

    /// Resolves after every command sent before it has been fully processed.
    pub async fn snapshot(&self) -> Result<RoomSnapshot, RoomError> {
        let (reply, rx) = oneshot::channel();
        self.send(RoomCommand::Snapshot { reply }).await?;
        rx.await.map_err(|_| RoomError::Closed)
    }

    async fn send(&self, cmd: RoomCommand) -> Result<(), RoomError> {
        self.command_tx
            .send(cmd)
            .await
            .map_err(|_| RoomError::Closed)
    }
}
