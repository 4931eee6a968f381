//! 命令行参数
//!
//! Flags override values loaded from the config file.

use std::path::PathBuf;

use clap::Parser;

use crate::backend::AppConfig;

#[derive(Debug, Parser)]
#[command(
    name = "gif-portal",
    version,
    about = "Share GIF links on a Solana list account from the terminal"
)]
pub struct Cli {
    /// Config file (default: <config dir>/gif-portal/config.json)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Cluster JSON-RPC endpoint
    #[arg(long, value_name = "URL")]
    pub rpc_url: Option<String>,

    /// Wallet keypair file
    #[arg(long, value_name = "PATH")]
    pub wallet: Option<PathBuf>,

    /// Address of the list program
    #[arg(long, value_name = "PUBKEY")]
    pub program_id: Option<String>,

    /// Address of the shared list account
    #[arg(long, value_name = "PUBKEY")]
    pub list_account: Option<String>,

    /// Run with an in-memory wallet and a seeded in-memory list
    #[arg(long)]
    pub demo: bool,

    /// Reject a submission while another one is still in flight
    #[arg(long)]
    pub guard_submissions: bool,

    /// Log filter, e.g. `info` or `gif_portal_core=debug`
    #[arg(long, env = "GIF_PORTAL_LOG", default_value = "info")]
    pub log_level: String,
}

impl Cli {
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(url) = &self.rpc_url {
            config.rpc_url.clone_from(url);
        }
        if let Some(path) = &self.wallet {
            config.wallet_keypair = Some(path.clone());
        }
        if let Some(id) = &self.program_id {
            config.program_id.clone_from(id);
        }
        if let Some(account) = &self.list_account {
            config.list_account.clone_from(account);
        }
        if self.guard_submissions {
            config.guard_concurrent_submissions = true;
        }
    }
}
