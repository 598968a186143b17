use crate::error::DeliveryError;
use crate::room::Outbound;
use crate::transport::SessionOutput;
use lockstep_core::SessionId;
use std::sync::Arc;
use tracing::{debug, error};

/// Outcome of one fan-out.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DeliveryReport {
    pub delivered: usize,
    pub failed: Vec<DeliveryError>,
}

impl DeliveryReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    fn merge(&mut self, other: DeliveryReport) {
        self.delivered += other.delivered;
        self.failed.extend(other.failed);
    }
}

/// Sends room output to sessions. Failures are logged per recipient and never
/// interrupt the remaining deliveries.
#[derive(Clone)]
pub struct RoomContext {
    output: Arc<dyn SessionOutput>,
}

impl RoomContext {
    pub fn new(output: Arc<dyn SessionOutput>) -> Self {
        Self { output }
    }

    /// Send one text frame to one session.
    pub async fn send(&self, session: &SessionId, text: String) -> Result<(), DeliveryError> {
        let result = self.output.send(session, text).await;
        if let Err(e) = &result {
            error!("Failed to send message to session {}: {}", session, e);
        }
        result
    }

    /// Send the same text to every recipient, in order.
    pub async fn broadcast(&self, recipients: &[SessionId], text: &str) -> DeliveryReport {
        let mut report = DeliveryReport::default();

        for session in recipients {
            match self.send(session, text.to_owned()).await {
                Ok(()) => report.delivered += 1,
                Err(e) => report.failed.push(e),
            }
        }

        report
    }

    /// Perform every send the coordinator produced for one event.
    pub async fn dispatch(&self, outbound: Vec<Outbound>) -> DeliveryReport {
        let mut report = DeliveryReport::default();

        for item in outbound {
            let text = item.notice().to_string();
            debug!("Dispatching '{}' to {} session(s)", text, item.recipients().len());
            report.merge(self.broadcast(item.recipients(), &text).await);
        }

        report
    }
}
