use lockstep_core::SessionId;
use thiserror::Error;

/// Failure to hand a message to one session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    #[error("session {0} is not connected")]
    UnknownSession(SessionId),

    #[error("session {0} closed its connection")]
    SessionClosed(SessionId),
}

#[derive(Debug, Error)]
pub enum RoomError {
    /// The room task has stopped and no longer accepts events.
    #[error("room is closed")]
    Closed,
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server terminated: {0}")]
    Serve(#[from] std::io::Error),

    #[error("invalid room path '{0}': must start with '/'")]
    InvalidPath(String),

    #[error("room command queue capacity must be at least 1")]
    InvalidCapacity,
}
