//! 业务逻辑服务层

mod connection_manager;
mod list_manager;
mod portal_view;

pub use connection_manager::{ConnectionManager, Transition};
pub use list_manager::ListManager;
pub use portal_view::{MountGuard, PortalView};

use std::sync::Arc;

use gif_portal_provider::{ListService, Wallet};
use tokio::sync::watch;

use crate::error::CoreError;
use crate::traits::Notifier;
use crate::types::{PortalConfig, PortalState};

/// 服务上下文 - 持有所有依赖与状态
///
/// 平台层创建此上下文，并注入钱包、列表服务和通知实现。
pub struct ServiceContext {
    /// 钱包能力
    pub wallet: Arc<dyn Wallet>,
    /// 远程列表服务
    pub list_service: Arc<dyn ListService>,
    /// 用户通知
    pub notifier: Arc<dyn Notifier>,
    /// 运行配置
    pub config: PortalConfig,
    state: watch::Sender<PortalState>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(
        wallet: Arc<dyn Wallet>,
        list_service: Arc<dyn ListService>,
        notifier: Arc<dyn Notifier>,
        config: PortalConfig,
    ) -> Self {
        Self {
            wallet,
            list_service,
            notifier,
            config,
            state: watch::Sender::new(PortalState::default()),
        }
    }

    /// 当前状态快照
    pub fn snapshot(&self) -> PortalState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<PortalState> {
        self.state.subscribe()
    }

    /// 修改状态并通知订阅者
    pub(crate) fn update(&self, f: impl FnOnce(&mut PortalState)) {
        self.state.send_modify(f);
    }

    /// 修改状态；`f` 返回 `false` 时不通知订阅者
    pub(crate) fn update_if(&self, f: impl FnOnce(&mut PortalState) -> bool) -> bool {
        self.state.send_if_modified(f)
    }

    /// 按错误是否预期选择日志级别
    pub(crate) fn log_failure(&self, action: &str, err: &CoreError) {
        if err.is_expected() {
            log::warn!("{action} failed: {err}");
        } else {
            log::error!("{action} failed: {err}");
        }
    }
}
