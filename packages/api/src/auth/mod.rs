//! Authentication types and backend configuration.

mod config;
mod session;

pub use config::load_config;
pub use session::{AuthUser, Session};
