//! GIF Portal Core Library
//!
//! The portal state machine, independent of any front end:
//! - Connection management (silent reconnect at startup, explicit connect)
//! - Shared list management (fetch, one-time account creation, submissions)
//! - Render state selection
//!
//! Wallet and list backends come in through the traits of `gif-portal-provider`;
//! observers follow state changes through a `tokio::sync::watch` receiver.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{
    ConnectionManager, ListManager, MountGuard, PortalView, ServiceContext, Transition,
};
pub use traits::Notifier;
pub use types::{
    ConnectionState, ListItem, ListState, Notice, NoticeLevel, PortalConfig, PortalState,
    RenderState, StartupPhase,
};
