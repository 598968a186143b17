use crate::error::ServerError;
use std::net::{Ipv4Addr, SocketAddr};

/// Listener settings for the room server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    /// Path that accepts WebSocket upgrades.
    pub room_path: String,
    /// Room command queue size; transports wait when it is full.
    pub command_capacity: usize,
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), ServerError> {
        if !self.room_path.starts_with('/') || self.room_path == "/status" {
            return Err(ServerError::InvalidPath(self.room_path.clone()));
        }
        if self.command_capacity == 0 {
            return Err(ServerError::InvalidCapacity);
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8080)),
            room_path: "/room".to_owned(),
            command_capacity: 256,
        }
    }
}
