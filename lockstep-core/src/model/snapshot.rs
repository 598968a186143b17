use crate::model::session::SessionId;
use serde::{Deserialize, Serialize};

pub const DEFAULT_VIDEO_STATE: &str = "VIDEO_PAUSE";
pub const DEFAULT_SEEK_TIME: &str = "0";

/// Last playback position the host communicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoState {
    /// Raw play/pause directive.
    pub directive: String,
    pub seek_time: String,
}

impl Default for VideoState {
    fn default() -> Self {
        Self {
            directive: DEFAULT_VIDEO_STATE.to_owned(),
            seek_time: DEFAULT_SEEK_TIME.to_owned(),
        }
    }
}

/// Point-in-time view of a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSnapshot {
    pub members: usize,
    pub host: Option<SessionId>,
    pub video: VideoState,
}
