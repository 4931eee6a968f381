//! 应用主消息枚举

use super::{PortalMessage, TaskMessage};

/// 应用主消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 用户对 portal 的操作
    Portal(PortalMessage),

    /// 后台任务回传
    Task(TaskMessage),

    /// 重新读取列表
    Refresh,

    /// 列表滚动
    ScrollUp,
    ScrollDown,

    /// 切换深色 / 浅色主题
    ToggleTheme,

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
