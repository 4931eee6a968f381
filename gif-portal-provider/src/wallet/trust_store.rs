//! 信任列表
//!
//! 记录用户曾经批准过的钱包地址，使用 JSON 文件持久化。
//! Trusted-only connects consult this list and never prompt.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::sync::Mutex;

use crate::error::{ProviderError, Result};

const PROVIDER_NAME: &str = "trust-store";

/// 已批准的钱包
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustedWallet {
    pub address: String,
    pub approved_at: DateTime<Utc>,
}

/// 基于 JSON 文件的信任列表
pub struct TrustStore {
    path: PathBuf,
    /// 内存缓存（None 表示尚未从文件加载）
    cache: Mutex<Option<Vec<TrustedWallet>>>,
}

impl TrustStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn storage_error(e: impl ToString) -> ProviderError {
        ProviderError::StorageError {
            provider: PROVIDER_NAME.to_string(),
            detail: e.to_string(),
        }
    }

    /// 从文件加载
    async fn load_from_file(&self) -> Result<Vec<TrustedWallet>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(Self::storage_error)?;

        serde_json::from_str(&content).map_err(|e| ProviderError::SerializationError {
            provider: PROVIDER_NAME.to_string(),
            detail: e.to_string(),
        })
    }

    /// 保存到文件
    async fn save_to_file(&self, wallets: &[TrustedWallet]) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir).await.map_err(Self::storage_error)?;
            }
        }

        let content =
            serde_json::to_string_pretty(wallets).map_err(|e| ProviderError::SerializationError {
                provider: PROVIDER_NAME.to_string(),
                detail: e.to_string(),
            })?;

        fs::write(&self.path, content)
            .await
            .map_err(Self::storage_error)
    }

    /// 获取所有已批准的钱包
    pub async fn list(&self) -> Result<Vec<TrustedWallet>> {
        let mut cache = self.cache.lock().await;
        if let Some(ref wallets) = *cache {
            return Ok(wallets.clone());
        }
        let wallets = self.load_from_file().await?;
        *cache = Some(wallets.clone());
        Ok(wallets)
    }

    /// 地址是否已被批准
    pub async fn is_trusted(&self, address: &str) -> Result<bool> {
        Ok(self.list().await?.iter().any(|w| w.address == address))
    }

    /// 批准地址（已存在则不变）
    pub async fn trust(&self, address: &str) -> Result<()> {
        let mut wallets = self.list().await?;
        if wallets.iter().any(|w| w.address == address) {
            return Ok(());
        }

        wallets.push(TrustedWallet {
            address: address.to_string(),
            approved_at: Utc::now(),
        });
        self.save_to_file(&wallets).await?;
        log::info!("[{PROVIDER_NAME}] Wallet {address} approved");

        *self.cache.lock().await = Some(wallets);
        Ok(())
    }
}
