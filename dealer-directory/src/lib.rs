pub mod api;
pub mod config;
pub mod directory;
pub mod session;

pub use api::*;
pub use config::*;
pub use directory::*;
pub use session::*;
