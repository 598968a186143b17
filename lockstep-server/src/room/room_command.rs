use lockstep_core::{ClientFrame, RoomSnapshot, SessionId};
use tokio::sync::oneshot;

/// Events the transport delivers to the room.
#[derive(Debug)]
pub enum RoomCommand {
    /// A connection was established for this session.
    Join { session: SessionId },

    /// One inbound text frame, already decoded.
    Message {
        session: SessionId,
        frame: ClientFrame,
    },

    /// The connection for this session ended, for any reason.
    Leave { session: SessionId },

    /// Read-only view of the room, answered on `reply`.
    Snapshot { reply: oneshot::Sender<RoomSnapshot> },
}
