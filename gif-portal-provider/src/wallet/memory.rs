//! 内存钱包
//!
//! Demo mode and tests. Holds a fixed identity and remembers approval for the
//! lifetime of the process.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::traits::Wallet;
use crate::types::{ConnectMode, Identity};

const PROVIDER_NAME: &str = "memory";

/// 内存钱包
pub struct MemoryWallet {
    identity: Identity,
    present: bool,
    trusted: AtomicBool,
}

impl MemoryWallet {
    pub fn new(identity: Identity) -> Self {
        Self {
            identity,
            present: true,
            trusted: AtomicBool::new(false),
        }
    }

    /// 模拟宿主环境中没有钱包
    pub fn absent() -> Self {
        Self {
            identity: Identity::new(String::new()),
            present: false,
            trusted: AtomicBool::new(false),
        }
    }

    /// 预先批准（trusted-only 连接直接成功）
    #[must_use]
    pub fn trusted(self) -> Self {
        self.trusted.store(true, Ordering::SeqCst);
        self
    }
}

#[async_trait]
impl Wallet for MemoryWallet {
    fn id(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn is_present(&self) -> bool {
        self.present
    }

    fn is_known_provider(&self) -> bool {
        self.present
    }

    async fn connect(&self, mode: ConnectMode) -> Result<Identity> {
        if !self.present {
            return Err(ProviderError::WalletNotFound {
                provider: PROVIDER_NAME.to_string(),
                detail: "no in-memory wallet configured".to_string(),
            });
        }

        match mode {
            ConnectMode::TrustedOnly if !self.trusted.load(Ordering::SeqCst) => {
                Err(ProviderError::ConnectionDeclined {
                    provider: PROVIDER_NAME.to_string(),
                    raw_message: None,
                })
            }
            ConnectMode::TrustedOnly => Ok(self.identity.clone()),
            ConnectMode::Interactive => {
                self.trusted.store(true, Ordering::SeqCst);
                Ok(self.identity.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn interactive_connect_grants_trust() {
        let wallet = MemoryWallet::new(Identity::new("demo"));
        assert!(wallet.connect(ConnectMode::TrustedOnly).await.is_err());
        assert_eq!(
            wallet.connect(ConnectMode::Interactive).await.unwrap(),
            Identity::new("demo")
        );
        assert!(wallet.connect(ConnectMode::TrustedOnly).await.is_ok());
    }

    #[tokio::test]
    async fn absent_wallet_reports_not_found() {
        let wallet = MemoryWallet::absent();
        assert!(!wallet.is_present());
        let err = wallet.connect(ConnectMode::Interactive).await.unwrap_err();
        assert!(matches!(err, ProviderError::WalletNotFound { .. }));
    }

    #[tokio::test]
    async fn pre_trusted_wallet_reconnects_silently() {
        let wallet = MemoryWallet::new(Identity::new("demo")).trusted();
        assert!(wallet.connect(ConnectMode::TrustedOnly).await.is_ok());
    }
}
