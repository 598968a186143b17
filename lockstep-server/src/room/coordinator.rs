use lockstep_core::{ClientFrame, RoomSnapshot, ServerNotice, SessionId, VideoControl, VideoState};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info, warn};

/// A send the room wants performed, with its recipients resolved at the moment
/// the event was processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outbound {
    Unicast {
        to: SessionId,
        notice: ServerNotice,
    },
    Broadcast {
        to: Vec<SessionId>,
        notice: ServerNotice,
    },
}

impl Outbound {
    pub fn recipients(&self) -> &[SessionId] {
        match self {
            Self::Unicast { to, .. } => std::slice::from_ref(to),
            Self::Broadcast { to, .. } => to,
        }
    }

    pub fn notice(&self) -> &ServerNotice {
        match self {
            Self::Unicast { notice, .. } | Self::Broadcast { notice, .. } => notice,
        }
    }
}

/// Membership, host and playback state of one room.
///
/// Every method runs to completion and returns the sends it produced, in the
/// order they must be delivered. Callers are expected to serialize access;
/// the room actor owns the only instance.
#[derive(Debug, Default)]
pub struct RoomCoordinator {
    /// Join sequence -> session. Iteration order is join order.
    members: BTreeMap<u64, SessionId>,
    sequence_of: HashMap<SessionId, u64>,
    next_sequence: u64,
    host: Option<SessionId>,
    video: VideoState,
}

impl RoomCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn join(&mut self, session: SessionId) -> Vec<Outbound> {
        if self.is_member(&session) {
            warn!("Ignoring duplicate join for session {}", session);
            return Vec::new();
        }

        let mut out = Vec::new();

        if self.host.is_none() {
            self.host = Some(session);
            info!("Session {} joined and became host", session);
            out.push(Outbound::Unicast {
                to: session,
                notice: ServerNotice::HostAssigned,
            });
        } else {
            info!("Session {} joined as viewer", session);
            for notice in [
                ServerNotice::Welcome,
                ServerNotice::VideoState(self.video.directive.clone()),
                ServerNotice::Seek(self.video.seek_time.clone()),
            ] {
                out.push(Outbound::Unicast { to: session, notice });
            }
        }

        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.members.insert(sequence, session);
        self.sequence_of.insert(session, sequence);

        out.push(self.broadcast(ServerNotice::UserJoined {
            total: self.members.len(),
        }));
        out
    }

    pub fn message(&mut self, session: SessionId, frame: ClientFrame) -> Vec<Outbound> {
        if !self.is_member(&session) {
            warn!("Dropping frame from non-member session {}", session);
            return Vec::new();
        }

        match frame {
            ClientFrame::Chat(text) => vec![self.broadcast(ServerNotice::Chat(text))],

            ClientFrame::Control(_) if self.host != Some(session) => {
                warn!("Session {} tried to control playback without being host", session);
                vec![Outbound::Unicast {
                    to: session,
                    notice: ServerNotice::HostOnly,
                }]
            }

            ClientFrame::Control(Ok(control)) => vec![self.apply_control(control)],

            ClientFrame::Control(Err(e)) => {
                warn!("Dropping malformed control from host {}: {}", session, e);
                Vec::new()
            }
        }
    }

    pub fn leave(&mut self, session: SessionId) -> Vec<Outbound> {
        let Some(sequence) = self.sequence_of.remove(&session) else {
            debug!("Leave for unknown session {} ignored", session);
            return Vec::new();
        };
        self.members.remove(&sequence);

        let mut out = Vec::new();

        if self.host == Some(session) {
            self.host = None;
            out.push(self.broadcast(ServerNotice::HostLeft));

            if let Some(&successor) = self.members.values().next() {
                self.host = Some(successor);
                info!("Host {} left, handing over to {}", session, successor);
                out.push(Outbound::Unicast {
                    to: successor,
                    notice: ServerNotice::HostAssigned,
                });
            } else {
                info!("Host {} left an empty room", session);
            }
        } else {
            info!("Session {} left", session);
        }

        out.push(self.broadcast(ServerNotice::UserLeft {
            total: self.members.len(),
        }));
        out
    }

    pub fn host(&self) -> Option<SessionId> {
        self.host
    }

    pub fn is_member(&self, session: &SessionId) -> bool {
        self.sequence_of.contains_key(session)
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Members in join order.
    pub fn members(&self) -> Vec<SessionId> {
        self.members.values().copied().collect()
    }

    pub fn video(&self) -> &VideoState {
        &self.video
    }

    pub fn snapshot(&self) -> RoomSnapshot {
        RoomSnapshot {
            members: self.members.len(),
            host: self.host,
            video: self.video.clone(),
        }
    }

    fn apply_control(&mut self, control: VideoControl) -> Outbound {
        let directive = match control {
            VideoControl::Play { directive } => {
                // resuming clients get the seek offset bundled with the play
                let outbound = format!("{}:{}", directive, self.video.seek_time);
                self.video.directive = directive;
                outbound
            }
            VideoControl::Pause { directive } => {
                self.video.directive = directive.clone();
                directive
            }
            VideoControl::Seek { directive, time } => {
                self.video.seek_time = time;
                directive
            }
            VideoControl::Other { directive } => {
                debug!("Forwarding unrecognized directive {}", directive);
                directive
            }
        };

        self.broadcast(ServerNotice::Control(directive))
    }

    fn broadcast(&self, notice: ServerNotice) -> Outbound {
        Outbound::Broadcast {
            to: self.members(),
            notice,
        }
    }
}
