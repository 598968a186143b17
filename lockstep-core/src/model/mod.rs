mod notice;
mod protocol;
mod session;
mod snapshot;

pub use notice::ServerNotice;
pub use protocol::{CONTROL_PREFIX, ClientFrame, ProtocolError, VideoControl};
pub use session::SessionId;
pub use snapshot::{DEFAULT_SEEK_TIME, DEFAULT_VIDEO_STATE, RoomSnapshot, VideoState};
