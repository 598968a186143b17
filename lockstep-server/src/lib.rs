//! Watch-party room server: one host drives playback, everyone else follows.

pub mod error;
pub mod room;
pub mod transport;

pub use error::{DeliveryError, RoomError, ServerError};
pub use room::*;
pub use transport::*;
