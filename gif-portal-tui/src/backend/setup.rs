//! 后端组装：配置 → 钱包 + 列表服务 → `PortalView`

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow, bail};
use gif_portal_core::{PortalConfig, PortalView, ServiceContext};
use gif_portal_provider::{
    Identity, ListAccountId, ListSettings, RemoteItem, WalletSettings, create_backend,
};
use tokio::sync::mpsc::UnboundedSender;

use super::AppConfig;
use super::notifier::ChannelNotifier;
use crate::message::AppMessage;

/// 演示模式的列表账户
pub const DEMO_LIST_ACCOUNT: &str = "demo-gif-list";

/// 演示模式的预置链接
pub const DEMO_GIFS: [&str; 4] = [
    "https://i.giphy.com/media/eIG0HfouRQJQr1wBzz/giphy.webp",
    "https://media3.giphy.com/media/L71a8LW2UrKwPaWNYM/giphy.gif?cid=ecf05e47rr9qizx2msjucl1xyvuu47d7kf25tqt2lvo024uo&rid=giphy.gif&ct=g",
    "https://media4.giphy.com/media/AeFmQjHMtEySooOc8K/giphy.gif?cid=ecf05e47qdzhdma2y3ugn32lkgi972z9mpfzocjj6z1ro4ec&rid=giphy.gif&ct=g",
    "https://i.giphy.com/media/PAqjdPkJLDsmBRSYUp/giphy.webp",
];

/// Wallet and list settings plus the fixed list account, derived from config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendPlan {
    pub wallet: WalletSettings,
    pub list: ListSettings,
    pub account: ListAccountId,
}

pub fn plan_backend(config: &AppConfig, demo: bool) -> Result<BackendPlan> {
    if demo {
        let account = ListAccountId::new(DEMO_LIST_ACCOUNT);
        let curator = Identity::new("demo-curator");
        let seed = DEMO_GIFS
            .iter()
            .map(|link| RemoteItem::new(*link, curator.clone()))
            .collect();
        return Ok(BackendPlan {
            wallet: WalletSettings::Memory,
            list: ListSettings::Memory {
                account: account.clone(),
                seed: Some(seed),
            },
            account,
        });
    }

    if config.program_id.trim().is_empty() {
        bail!("programId is not configured (set it in the config file, pass --program-id, or run with --demo)");
    }
    if config.list_account.trim().is_empty() {
        bail!("listAccount is not configured (set it in the config file, pass --list-account, or run with --demo)");
    }
    let keypair_path = config
        .wallet_keypair_path()
        .ok_or_else(|| anyhow!("cannot locate a wallet keypair; pass --wallet"))?;

    Ok(BackendPlan {
        wallet: WalletSettings::Keypair {
            keypair_path,
            trust_store_path: trust_store_path()?,
        },
        list: ListSettings::Solana {
            rpc_url: config.rpc_url.clone(),
            program_id: config.program_id.trim().to_string(),
            commitment: config.commitment,
            list_account_keypair: config.list_account_keypair.clone(),
        },
        account: ListAccountId::new(config.list_account.trim()),
    })
}

/// 已批准钱包的记录文件
fn trust_store_path() -> Result<PathBuf> {
    let dir = dirs::data_dir().ok_or_else(|| anyhow!("no data directory on this platform"))?;
    Ok(dir.join("gif-portal").join("trusted_wallets.json"))
}

/// 组装 `PortalView`；通知经 `tx` 送回主循环
pub fn build_portal(
    config: &AppConfig,
    demo: bool,
    tx: UnboundedSender<AppMessage>,
) -> Result<Arc<PortalView>> {
    let plan = plan_backend(config, demo)?;
    let backend = create_backend(plan.wallet, plan.list).context("failed to build the backend")?;
    log::info!(
        "Portal wired: wallet={}, list={}, account={}",
        backend.wallet.id(),
        backend.list_service.id(),
        plan.account
    );

    let portal_config =
        PortalConfig::new(plan.account).with_submission_guard(config.guard_concurrent_submissions);
    let ctx = ServiceContext::new(
        backend.wallet,
        backend.list_service,
        Arc::new(ChannelNotifier::new(tx)),
        portal_config,
    );
    Ok(Arc::new(PortalView::new(ctx)))
}
