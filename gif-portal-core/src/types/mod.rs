//! Core type definitions

mod config;
mod connection;
mod list;
mod notice;
mod render;
mod state;

pub use config::PortalConfig;
pub use connection::ConnectionState;
pub use list::{ListItem, ListState};
pub use notice::{Notice, NoticeLevel};
pub use render::RenderState;
pub use state::{PortalState, StartupPhase};

// Re-export provider types used in the core API
pub use gif_portal_provider::{Identity, ListAccountId};
