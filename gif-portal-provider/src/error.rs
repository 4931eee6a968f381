use serde::{Deserialize, Serialize};

/// Unified error type for wallet and list service operations.
///
/// Each variant includes a `provider` field identifying which backend produced the error
/// (`"keypair"`, `"memory"`, `"solana"`, ...), plus variant-specific context. All variants
/// are serializable for structured error reporting.
///
/// None of these errors are retried automatically. Retry is always user-initiated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// No wallet capability exists in the host environment (e.g. keypair file missing).
    WalletNotFound {
        /// Provider that produced the error.
        provider: String,
        /// Where the wallet was looked for.
        detail: String,
    },

    /// Something wallet-like exists but is not a wallet this application knows how to use.
    UnknownWallet {
        /// Provider that produced the error.
        provider: String,
        /// Why the wallet was rejected.
        detail: String,
    },

    /// The wallet did not grant a connection (never approved, or the user declined).
    ConnectionDeclined {
        /// Provider that produced the error.
        provider: String,
        /// Original message from the wallet, if available.
        raw_message: Option<String>,
    },

    /// The remote list account does not exist (yet).
    AccountNotFound {
        /// Provider that produced the error.
        provider: String,
        /// Address of the missing account.
        account: String,
    },

    /// The remote account exists but its data could not be decoded.
    InvalidAccountData {
        /// Provider that produced the error.
        provider: String,
        /// Address of the account.
        account: String,
        /// Details about the decode failure.
        detail: String,
    },

    /// A request parameter is invalid (malformed address, signer mismatch, ...).
    InvalidParameter {
        /// Provider that produced the error.
        provider: String,
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// A network-level error occurred talking to the cluster.
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The cluster rejected or failed to confirm a transaction.
    TransactionFailed {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the RPC node, if available.
        raw_message: Option<String>,
    },

    /// Failed to serialize instruction data.
    SerializationError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the serialization failure.
        detail: String,
    },

    /// Local storage (trust store, keypair file) could not be read or written.
    StorageError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// An unrecognized error from the backend.
    Unknown {
        /// Provider that produced the error.
        provider: String,
        /// Raw error code, if available.
        raw_code: Option<String>,
        /// Raw error message.
        raw_message: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（用户拒绝、账户尚未创建等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::WalletNotFound { .. }
                | Self::UnknownWallet { .. }
                | Self::ConnectionDeclined { .. }
                | Self::AccountNotFound { .. }
                | Self::InvalidParameter { .. }
        )
    }

    /// Name of the backend that produced this error.
    #[must_use]
    pub fn provider(&self) -> &str {
        match self {
            Self::WalletNotFound { provider, .. }
            | Self::UnknownWallet { provider, .. }
            | Self::ConnectionDeclined { provider, .. }
            | Self::AccountNotFound { provider, .. }
            | Self::InvalidAccountData { provider, .. }
            | Self::InvalidParameter { provider, .. }
            | Self::NetworkError { provider, .. }
            | Self::TransactionFailed { provider, .. }
            | Self::SerializationError { provider, .. }
            | Self::StorageError { provider, .. }
            | Self::Unknown { provider, .. } => provider,
        }
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WalletNotFound { provider, detail } => {
                write!(f, "[{provider}] Wallet not found: {detail}")
            }
            Self::UnknownWallet { provider, detail } => {
                write!(f, "[{provider}] Unknown wallet: {detail}")
            }
            Self::ConnectionDeclined {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Connection declined: {msg}")
                } else {
                    write!(f, "[{provider}] Connection declined")
                }
            }
            Self::AccountNotFound { provider, account } => {
                write!(f, "[{provider}] Account '{account}' not found")
            }
            Self::InvalidAccountData {
                provider,
                account,
                detail,
            } => {
                write!(f, "[{provider}] Invalid data in account '{account}': {detail}")
            }
            Self::InvalidParameter {
                provider,
                param,
                detail,
            } => {
                write!(f, "[{provider}] Invalid parameter '{param}': {detail}")
            }
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::TransactionFailed {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Transaction failed: {msg}")
                } else {
                    write!(f, "[{provider}] Transaction failed")
                }
            }
            Self::SerializationError { provider, detail } => {
                write!(f, "[{provider}] Serialization error: {detail}")
            }
            Self::StorageError { provider, detail } => {
                write!(f, "[{provider}] Storage error: {detail}")
            }
            Self::Unknown {
                provider,
                raw_message,
                ..
            } => {
                write!(f, "[{provider}] {raw_message}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
