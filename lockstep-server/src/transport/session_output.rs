use crate::error::DeliveryError;
use async_trait::async_trait;
use lockstep_core::SessionId;

/// What the transport must provide so the room can talk back to participants.
///
/// A failed send concerns that one session only; the room logs it and moves on.
#[async_trait]
pub trait SessionOutput: Send + Sync {
    /// Deliver one text frame to one session.
    async fn send(&self, session: &SessionId, text: String) -> Result<(), DeliveryError>;
}
