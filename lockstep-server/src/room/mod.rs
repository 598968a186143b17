mod context;
mod coordinator;
mod room;
mod room_command;
mod room_handle;

pub use context::*;
pub use coordinator::*;
pub use room::*;
pub use room_command::*;
pub use room_handle::*;
