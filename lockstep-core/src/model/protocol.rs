use thiserror::Error;

/// Prefix that marks a frame as a playback directive.
pub const CONTROL_PREFIX: &str = "VIDEO_";

const PLAY: &str = "VIDEO_PLAY";
const PAUSE: &str = "VIDEO_PAUSE";
const SEEK: &str = "VIDEO_SEEK";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// `VIDEO_SEEK` without a `:<time>` field, or with an empty one.
    #[error("seek directive '{0}' carries no time field")]
    MissingSeekTime(String),
}

/// Playback directive sent by a participant.
///
/// `directive` keeps the payload exactly as received, since the room replays
/// it verbatim to late joiners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoControl {
    Play { directive: String },
    Pause { directive: String },
    Seek { directive: String, time: String },
    /// Any other `VIDEO_*` word. Forwarded as-is, never interpreted.
    Other { directive: String },
}

impl VideoControl {
    pub fn parse(text: &str) -> Result<Self, ProtocolError> {
        if text.starts_with(PLAY) {
            return Ok(Self::Play {
                directive: text.to_owned(),
            });
        }
        if text.starts_with(PAUSE) {
            return Ok(Self::Pause {
                directive: text.to_owned(),
            });
        }
        if text.starts_with(SEEK) {
            return match text.split_once(':') {
                Some((_, time)) if !time.is_empty() => Ok(Self::Seek {
                    directive: text.to_owned(),
                    time: time.to_owned(),
                }),
                _ => Err(ProtocolError::MissingSeekTime(text.to_owned())),
            };
        }

        Ok(Self::Other {
            directive: text.to_owned(),
        })
    }
}

/// One inbound text frame, classified at the transport boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientFrame {
    /// Anything starting with `VIDEO_`. A malformed directive is still a control
    /// frame: only the host may send those, whatever they contain.
    Control(Result<VideoControl, ProtocolError>),
    Chat(String),
}

impl ClientFrame {
    pub fn decode(text: &str) -> Self {
        if text.starts_with(CONTROL_PREFIX) {
            Self::Control(VideoControl::parse(text))
        } else {
            Self::Chat(text.to_owned())
        }
    }

    pub fn is_control(&self) -> bool {
        matches!(self, Self::Control(_))
    }
}
