pub mod config;
mod session;
pub mod viewport;

pub use config::{Config, ConfigError};
pub use session::{RunState, Session};
pub use viewport::Viewport;
