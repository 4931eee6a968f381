//! 后台任务消息

use gif_portal_core::Notice;

/// 后台任务种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Connect,
    Initialize,
    Submit,
    Refresh,
}

impl TaskKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Connect => "Connect",
            Self::Initialize => "Initialize",
            Self::Submit => "Submit",
            Self::Refresh => "Refresh",
        }
    }

    /// 成功后的状态栏提示
    pub fn success_text(self) -> &'static str {
        match self {
            Self::Connect => "Wallet connected",
            Self::Initialize => "GIF program account created",
            Self::Submit => "GIF link submitted",
            Self::Refresh => "List refreshed",
        }
    }
}

/// 后台任务回传
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskMessage {
    /// 核心库发出的用户通知
    Notice(Notice),
    Done(TaskKind),
    Failed {
        kind: TaskKind,
        message: String,
        /// 预期内的失败（用户拒绝、未连接等）
        expected: bool,
    },
}
