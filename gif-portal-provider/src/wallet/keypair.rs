//! Solana keypair 钱包
//!
//! 以 Solana CLI 生成的 keypair JSON 文件作为钱包能力：
//! - 文件存在 → 钱包存在
//! - 文件可解析为 keypair → 已知钱包类型
//! - 信任列表决定 trusted-only 连接是否成功

use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use solana_sdk::signature::Signer;
use solana_sdk::signer::keypair::{Keypair, read_keypair_file};

use crate::error::{ProviderError, Result};
use crate::list::solana::PayerSource;
use crate::traits::Wallet;
use crate::types::{ConnectMode, Identity};
use crate::wallet::TrustStore;

const PROVIDER_NAME: &str = "keypair";

/// Keypair 文件钱包
pub struct KeypairWallet {
    keypair_path: PathBuf,
    trust_store: TrustStore,
    /// 文件存在后只解析一次，失败也缓存
    keypair: OnceLock<Result<Arc<Keypair>>>,
}

impl KeypairWallet {
    pub fn new(keypair_path: impl Into<PathBuf>, trust_store: TrustStore) -> Self {
        Self {
            keypair_path: keypair_path.into(),
            trust_store,
            keypair: OnceLock::new(),
        }
    }

    pub fn keypair_path(&self) -> &Path {
        &self.keypair_path
    }

    /// 读取（并缓存）keypair
    fn load_keypair(&self) -> Result<Arc<Keypair>> {
        if let Some(loaded) = self.keypair.get() {
            return loaded.clone();
        }

        // 文件尚未创建时不缓存
        if !self.is_present() {
            return Err(ProviderError::WalletNotFound {
                provider: PROVIDER_NAME.to_string(),
                detail: self.keypair_path.display().to_string(),
            });
        }

        self.keypair
            .get_or_init(|| {
                read_keypair_file(&self.keypair_path)
                    .map(Arc::new)
                    .map_err(|e| {
                        log::warn!(
                            "[{PROVIDER_NAME}] {} is not a keypair file: {e}",
                            self.keypair_path.display()
                        );
                        ProviderError::UnknownWallet {
                            provider: PROVIDER_NAME.to_string(),
                            detail: format!("{}: {e}", self.keypair_path.display()),
                        }
                    })
            })
            .clone()
    }
}

#[async_trait]
impl Wallet for KeypairWallet {
    fn id(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn is_present(&self) -> bool {
        self.keypair_path.is_file()
    }

    fn is_known_provider(&self) -> bool {
        self.load_keypair().is_ok()
    }

    async fn connect(&self, mode: ConnectMode) -> Result<Identity> {
        let keypair = self.load_keypair()?;
        let address = keypair.pubkey().to_string();

        match mode {
            ConnectMode::TrustedOnly => {
                if self.trust_store.is_trusted(&address).await? {
                    Ok(Identity::new(address))
                } else {
                    log::debug!("[{PROVIDER_NAME}] {address} has not approved this application");
                    Err(ProviderError::ConnectionDeclined {
                        provider: PROVIDER_NAME.to_string(),
                        raw_message: Some("wallet has not approved this application".to_string()),
                    })
                }
            }
            ConnectMode::Interactive => {
                self.trust_store.trust(&address).await?;
                Ok(Identity::new(address))
            }
        }
    }
}

impl PayerSource for KeypairWallet {
    fn payer(&self) -> Result<Arc<Keypair>> {
        self.load_keypair()
    }
}
