use crate::room::context::RoomContext;
use crate::room::coordinator::RoomCoordinator;
use crate::room::room_command::RoomCommand;
use crate::transport::SessionOutput;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, warn};

/// The room actor.
///
/// Owns the coordinator and processes one command at a time, so every event
/// observes and leaves behind a consistent membership/host/playback state, and
/// its sends are performed before the next event is looked at.
pub struct Room {
    coordinator: RoomCoordinator,
    command_rx: mpsc::Receiver<RoomCommand>,
    ctx: RoomContext,
}

impl Room {
    pub fn new(command_rx: mpsc::Receiver<RoomCommand>, output: Arc<dyn SessionOutput>) -> Self {
        Self {
            coordinator: RoomCoordinator::new(),
            command_rx,
            ctx: RoomContext::new(output),
        }
    }

    pub async fn run(mut self) {
        info!("Room event loop started");

        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd).await;
        }

        info!(
            "Command channel closed with {} member(s) left. Room event loop finished",
            self.coordinator.member_count()
        );
    }

    async fn handle_command(&mut self, cmd: RoomCommand) {
        let outbound = match cmd {
            RoomCommand::Join { session } => self.coordinator.join(session),

            RoomCommand::Message { session, frame } => self.coordinator.message(session, frame),

            RoomCommand::Leave { session } => self.coordinator.leave(session),

            RoomCommand::Snapshot { reply } => {
                if reply.send(self.coordinator.snapshot()).is_err() {
                    warn!("Snapshot requester went away before the reply");
                }
                return;
            }
        };

        let report = self.ctx.dispatch(outbound).await;
        if !report.is_clean() {
            warn!(
                "{} of {} deliveries failed",
                report.failed.len(),
                report.failed.len() + report.delivered
            );
        }
    }
}
