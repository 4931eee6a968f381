//! 钱包连接管理

use std::sync::Arc;

use gif_portal_provider::ConnectMode;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{ConnectionState, Identity, Notice};

/// 宿主环境没有钱包时的提示
pub const NO_WALLET_NOTICE: &str = "Wallet not found! Create a Solana keypair to connect 👻";

/// 连接状态变化
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Newly connected, or connected with a different address.
    Established(Identity),
    /// Already connected with this address; nothing changed.
    Unchanged(Identity),
    /// Still disconnected.
    NotConnected,
}

/// 钱包连接管理
pub struct ConnectionManager {
    ctx: Arc<ServiceContext>,
}

impl ConnectionManager {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 启动时静默重连
    ///
    /// Never prompts and never fails: a missing wallet raises one notice, a
    /// wallet that never approved this application just stays disconnected.
    pub async fn try_reconnect_silently(&self) -> Transition {
        let wallet = &self.ctx.wallet;

        if !wallet.is_present() {
            log::warn!("No wallet found ({})", wallet.id());
            self.ctx.notifier.notify(Notice::warning(NO_WALLET_NOTICE));
            return Transition::NotConnected;
        }
        log::info!("Wallet found: {}", wallet.id());

        if !wallet.is_known_provider() {
            log::warn!("Wallet {} is not a supported wallet", wallet.id());
            return Transition::NotConnected;
        }

        match wallet.connect(ConnectMode::TrustedOnly).await {
            Ok(identity) => {
                log::info!("Connected with public key: {identity}");
                self.commit(identity)
            }
            Err(e) if e.is_expected() => {
                log::debug!("Silent reconnect declined: {e}");
                Transition::NotConnected
            }
            Err(e) => {
                log::error!("Silent reconnect failed: {e}");
                Transition::NotConnected
            }
        }
    }

    /// 用户主动连接
    ///
    /// On failure the connection state is left as it was and the error is returned.
    pub async fn connect_explicitly(&self) -> CoreResult<Transition> {
        match self.ctx.wallet.connect(ConnectMode::Interactive).await {
            Ok(identity) => {
                log::info!("Connected with public key: {identity}");
                Ok(self.commit(identity))
            }
            Err(e) => {
                let err = CoreError::from(e);
                self.ctx.log_failure("Connect", &err);
                Err(err)
            }
        }
    }

    fn commit(&self, identity: Identity) -> Transition {
        let established = self.ctx.update_if(|state| {
            if state.connection.identity() == Some(&identity) {
                return false;
            }
            state.connection = ConnectionState::Connected(identity.clone());
            true
        });
        if established {
            Transition::Established(identity)
        } else {
            Transition::Unchanged(identity)
        }
    }
}
