//! 配置服务

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use gif_portal_provider::Commitment;
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

pub const DEFAULT_RPC_URL: &str = "https://api.devnet.solana.com";
pub const DEFAULT_FOOTER_HANDLE: &str = "thefemiayodeji";

/// 应用配置（JSON 文件）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub rpc_url: String,
    pub commitment: Commitment,
    /// 列表程序地址
    pub program_id: String,
    /// 共享列表账户地址
    pub list_account: String,
    /// 列表账户密钥（仅初始化时需要）
    pub list_account_keypair: Option<PathBuf>,
    /// 钱包密钥文件，缺省为 `~/.config/solana/id.json`
    pub wallet_keypair: Option<PathBuf>,
    pub guard_concurrent_submissions: bool,
    pub theme: Theme,
    /// 页脚展示的社交账号
    pub footer_handle: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            commitment: Commitment::default(),
            program_id: String::new(),
            list_account: String::new(),
            list_account_keypair: None,
            wallet_keypair: None,
            guard_concurrent_submissions: false,
            theme: Theme::Dark,
            footer_handle: DEFAULT_FOOTER_HANDLE.to_string(),
        }
    }
}

impl AppConfig {
    /// 钱包密钥路径（未配置时使用 Solana CLI 默认位置）
    pub fn wallet_keypair_path(&self) -> Option<PathBuf> {
        self.wallet_keypair.clone().or_else(|| {
            dirs::home_dir().map(|home| home.join(".config").join("solana").join("id.json"))
        })
    }
}

pub trait ConfigService: Send + Sync {
    /// 加载配置（文件不存在时返回默认值）
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 基于 JSON 文件的配置服务
pub struct JsonConfigService {
    path: PathBuf,
}

impl JsonConfigService {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// `<config dir>/gif-portal/config.json`
    pub fn from_default_location() -> Result<Self> {
        let dir = dirs::config_dir().ok_or_else(|| anyhow!("no config directory on this platform"))?;
        Ok(Self::new(dir.join("gif-portal").join("config.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl ConfigService for JsonConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::debug!("No config at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("invalid config file {}", self.path.display()))
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(config)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        log::info!("Config saved to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = JsonConfigService::new(dir.path().join("config.json"));

        assert!(!service.exists());
        assert_eq!(service.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let service = JsonConfigService::new(dir.path().join("nested").join("config.json"));
        let config = AppConfig {
            program_id: "Prog111".to_string(),
            list_account: "List111".to_string(),
            commitment: Commitment::Confirmed,
            theme: Theme::Light,
            ..AppConfig::default()
        };

        service.save(&config).unwrap();
        assert!(service.exists());
        assert_eq!(service.load().unwrap(), config);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "programId": "Prog111", "theme": "light" }"#).unwrap();

        let config = JsonConfigService::new(path).load().unwrap();
        assert_eq!(config.program_id, "Prog111");
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.rpc_url, DEFAULT_RPC_URL);
        assert_eq!(config.footer_handle, DEFAULT_FOOTER_HANDLE);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(JsonConfigService::new(path).load().is_err());
    }

    #[test]
    fn explicit_wallet_path_wins() {
        let config = AppConfig {
            wallet_keypair: Some(PathBuf::from("/tmp/me.json")),
            ..AppConfig::default()
        };
        assert_eq!(
            config.wallet_keypair_path(),
            Some(PathBuf::from("/tmp/me.json"))
        );
    }
}
