mod router;
mod session_output;
mod session_registry;
mod transport_config;
mod ws_handler;

pub use router::{AppState, router, serve};
pub use session_output::SessionOutput;
pub use session_registry::SessionRegistry;
pub use transport_config::ServerConfig;
pub use ws_handler::ws_handler;
