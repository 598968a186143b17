pub use lockstep_core::model::SessionId;

pub mod model {
    pub use lockstep_core::model::*;
}

#[cfg(feature = "server")]
pub mod server {
    pub use lockstep_server::*;
}
