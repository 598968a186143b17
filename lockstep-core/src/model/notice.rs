use std::fmt;

/// Everything the room ever says to a participant.
///
/// `Display` renders the exact text that goes on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerNotice {
    HostAssigned,
    Welcome,
    /// Last play/pause directive, replayed to a late joiner.
    VideoState(String),
    /// Last seek position, replayed to a late joiner.
    Seek(String),
    /// Directive from the host, after any rewriting.
    Control(String),
    HostOnly,
    UserJoined { total: usize },
    UserLeft { total: usize },
    HostLeft,
    Chat(String),
}

impl fmt::Display for ServerNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HostAssigned => f.write_str("You are the host."),
            Self::Welcome => f.write_str("Welcome to the room."),
            Self::VideoState(directive) | Self::Control(directive) => f.write_str(directive),
            Self::Seek(time) => write!(f, "VIDEO_SEEK:{}", time),
            Self::HostOnly => f.write_str("Error: Only the host can control the video."),
            Self::UserJoined { total } => {
                write!(f, "A new user has joined the room. Total users: {}", total)
            }
            Self::UserLeft { total } => {
                write!(f, "A user has left the room. Total users: {}", total)
            }
            Self::HostLeft => f.write_str("The host has left the room. A new host is needed."),
            Self::Chat(text) => write!(f, "User message: {}", text),
        }
    }
}
