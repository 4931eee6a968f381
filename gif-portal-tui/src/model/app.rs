use gif_portal_core::{NoticeLevel, PortalState};

use crate::backend::AppConfig;
use crate::message::TaskKind;
use crate::view::theme::Theme;

/// 状态栏消息级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

impl From<NoticeLevel> for StatusLevel {
    fn from(level: NoticeLevel) -> Self {
        match level {
            NoticeLevel::Info => Self::Info,
            NoticeLevel::Warning => Self::Warning,
            NoticeLevel::Error => Self::Error,
        }
    }
}

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 状态栏消息
    pub status_message: Option<(StatusLevel, String)>,

    /// 核心库状态快照
    pub portal: PortalState,

    /// 列表中高亮的条目
    pub scroll: usize,

    /// 已发出、尚未回传的任务
    pub pending: Vec<TaskKind>,

    pub theme: Theme,

    /// 页脚展示的社交账号
    pub footer_handle: String,
}

impl App {
    pub fn new(config: &AppConfig, portal: PortalState) -> Self {
        Self {
            should_quit: false,
            status_message: None,
            portal,
            scroll: 0,
            pending: Vec::new(),
            theme: config.theme,
            footer_handle: config.footer_handle.clone(),
        }
    }

    /// 同步核心库快照，并把滚动位置限制在列表范围内
    pub fn sync_portal(&mut self, portal: PortalState) {
        self.portal = portal;
        let len = self.portal.list.items().len();
        self.scroll = self.scroll.min(len.saturating_sub(1));
    }

    pub fn set_status(&mut self, level: StatusLevel, message: impl Into<String>) {
        self.status_message = Some((level, message.into()));
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn begin_task(&mut self, kind: TaskKind) {
        self.pending.push(kind);
    }

    pub fn finish_task(&mut self, kind: TaskKind) {
        if let Some(pos) = self.pending.iter().position(|k| *k == kind) {
            self.pending.remove(pos);
        }
    }

    /// 是否有任务在进行（包括核心库中的读取）
    pub fn is_busy(&self) -> bool {
        !self.pending.is_empty() || self.portal.is_fetching()
    }

    pub fn is_pending(&self, kind: TaskKind) -> bool {
        self.pending.contains(&kind)
    }
}
