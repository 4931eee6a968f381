//! Portal 视图：连接与列表的编排

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::error::{CoreError, CoreResult};
use crate::services::{ConnectionManager, ListManager, ServiceContext, Transition};
use crate::types::{Identity, ListState, PortalConfig, PortalState, RenderState, StartupPhase};

/// Portal 视图
///
/// Owns all portal state. Every operation takes `&self`, so a shared
/// `Arc<PortalView>` can run several of them at once (no lock is held across
/// a wallet or list call).
pub struct PortalView {
    ctx: Arc<ServiceContext>,
    connection: ConnectionManager,
    list: ListManager,
    mounted: AtomicBool,
}

impl PortalView {
    #[must_use]
    pub fn new(ctx: ServiceContext) -> Self {
        let ctx = Arc::new(ctx);
        Self {
            connection: ConnectionManager::new(Arc::clone(&ctx)),
            list: ListManager::new(Arc::clone(&ctx)),
            ctx,
            mounted: AtomicBool::new(false),
        }
    }

    pub fn config(&self) -> &PortalConfig {
        &self.ctx.config
    }

    pub fn snapshot(&self) -> PortalState {
        self.ctx.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<PortalState> {
        self.ctx.subscribe()
    }

    pub fn render_state(&self) -> RenderState {
        self.ctx.snapshot().render_state()
    }

    /// 挂载：启动一次静默重连
    ///
    /// Only the first call starts the reconnect; dropping the returned guard
    /// aborts it if it is still running.
    pub fn mount(self: &Arc<Self>) -> CoreResult<MountGuard> {
        if self.mounted.swap(true, Ordering::SeqCst) {
            return Err(CoreError::AlreadyMounted);
        }
        self.ctx.update(|state| state.startup = StartupPhase::Pending);

        let view = Arc::clone(self);
        let task = tokio::spawn(async move {
            view.try_reconnect_silently().await;
            view.ctx.update(|state| state.startup = StartupPhase::Done);
        });

        Ok(MountGuard {
            task,
            ctx: Arc::clone(&self.ctx),
        })
    }

    /// 等待启动阶段结束（未挂载时立即返回）
    pub async fn startup_settled(&self) {
        let mut rx = self.ctx.subscribe();
        // sender 由 ctx 持有，不会提前关闭
        let _ = rx
            .wait_for(|state| state.startup != StartupPhase::Pending)
            .await;
    }

    /// 静默重连；建立连接后读取一次列表
    pub async fn try_reconnect_silently(&self) {
        let transition = self.connection.try_reconnect_silently().await;
        self.on_transition(transition).await;
    }

    /// 用户主动连接；建立连接后读取一次列表
    ///
    /// Waits for a pending startup reconnect first.
    pub async fn connect_explicitly(&self) -> CoreResult<Identity> {
        self.startup_settled().await;
        let transition = self.connection.connect_explicitly().await?;
        let identity = match &transition {
            Transition::Established(identity) | Transition::Unchanged(identity) => {
                identity.clone()
            }
            Transition::NotConnected => return Err(CoreError::NotConnected),
        };
        self.on_transition(transition).await;
        Ok(identity)
    }

    async fn on_transition(&self, transition: Transition) {
        if let Transition::Established(identity) = transition {
            self.on_connection_established(&identity).await;
        }
    }

    /// 连接建立回调（状态已提交）
    async fn on_connection_established(&self, identity: &Identity) {
        log::debug!("Connection established for {identity}, fetching list");
        if let Err(e) = self.list.fetch_list().await {
            self.ctx.log_failure("Initial fetch", &e);
        }
    }

    pub async fn fetch_list(&self) -> CoreResult<ListState> {
        self.list.fetch_list().await
    }

    pub async fn initialize_account(&self) -> CoreResult<ListState> {
        self.list.initialize_account().await
    }

    pub async fn submit(&self, link: &str) -> CoreResult<ListState> {
        self.list.submit(link).await
    }

    pub async fn submit_input(&self) -> CoreResult<ListState> {
        self.list.submit_input().await
    }

    pub fn set_input(&self, text: impl Into<String>) {
        self.list.set_input(text);
    }

    pub fn edit_input(&self, f: impl FnOnce(&mut String)) {
        self.list.edit_input(f);
    }
}

/// 挂载守卫
///
/// Dropping it tears down the startup reconnect.
pub struct MountGuard {
    task: JoinHandle<()>,
    ctx: Arc<ServiceContext>,
}

impl Drop for MountGuard {
    fn drop(&mut self) {
        self.task.abort();
        self.ctx.update_if(|state| {
            if state.startup != StartupPhase::Pending {
                return false;
            }
            state.startup = StartupPhase::Done;
            true
        });
    }
}
