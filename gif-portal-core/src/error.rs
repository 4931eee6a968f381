//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use gif_portal_provider::ProviderError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// The operation needs a connected wallet
    #[error("Wallet not connected")]
    NotConnected,

    /// The list is not in a state that allows the operation
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Submitted link is empty
    #[error("Link is empty")]
    EmptyLink,

    /// A submission is still in flight and the latch is enabled
    #[error("A submission is already in flight")]
    SubmissionInFlight,

    /// `mount()` was called twice
    #[error("Portal view already mounted")]
    AlreadyMounted,

    /// Provider error (converting from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// 是否为预期行为（用户操作、账户尚未创建等），用于日志分级。
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::NotConnected
            | Self::InvalidState(_)
            | Self::EmptyLink
            | Self::SubmissionInFlight
            | Self::AlreadyMounted => true,
            Self::Provider(e) => e.is_expected(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
