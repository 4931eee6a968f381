//! Anchor 列表程序客户端（Solana JSON-RPC）

mod error;
mod program;
mod rpc;
mod service;

use std::sync::Arc;

use solana_sdk::signer::keypair::Keypair;

use crate::error::Result;

pub use service::SolanaListService;

/// 交易付费/签名密钥来源
///
/// The wallet that connected is also the one that pays for and signs list
/// transactions; this seam lets the list service borrow its keypair.
pub trait PayerSource: Send + Sync {
    fn payer(&self) -> Result<Arc<Keypair>>;
}
