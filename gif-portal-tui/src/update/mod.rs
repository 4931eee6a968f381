//! Update 层：根据消息修改 Model
//!
//! 用户操作经 `PortalCommands` 交给后台任务执行；任务的结果稍后以
//! `AppMessage::Task` 回到这里。portal 状态本身不在此修改，主循环每轮
//! 从核心库同步快照。

mod portal;
mod task;

use crate::backend::PortalCommands;
use crate::message::{AppMessage, TaskKind};
use crate::model::App;
use crate::view::theme;

/// 处理消息，更新状态
pub fn update(app: &mut App, msg: AppMessage, commands: &dyn PortalCommands) {
    match msg {
        AppMessage::Quit => app.should_quit = true,
        AppMessage::Portal(portal_msg) => portal::update(app, portal_msg, commands),
        AppMessage::Task(task_msg) => task::update(app, task_msg),
        AppMessage::Refresh => {
            if app.portal.connection.is_connected() {
                app.begin_task(TaskKind::Refresh);
                commands.refresh();
            }
        }
        AppMessage::ScrollUp => app.scroll = app.scroll.saturating_sub(1),
        AppMessage::ScrollDown => {
            let last = app.portal.list.items().len().saturating_sub(1);
            app.scroll = (app.scroll + 1).min(last);
        }
        AppMessage::ToggleTheme => {
            app.theme = app.theme.toggled();
            theme::set_theme(app.theme);
        }
        AppMessage::ClearStatus => app.clear_status(),
        AppMessage::Noop => {}
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::cell::RefCell;

    use crate::backend::PortalCommands;
    use crate::message::InputEdit;

    /// 记录发出的操作
    #[derive(Default)]
    pub struct RecordingCommands {
        pub calls: RefCell<Vec<String>>,
    }

    impl RecordingCommands {
        pub fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        fn record(&self, call: impl Into<String>) {
            self.calls.borrow_mut().push(call.into());
        }
    }

    impl PortalCommands for RecordingCommands {
        fn connect(&self) {
            self.record("connect");
        }

        fn initialize(&self) {
            self.record("initialize");
        }

        fn submit(&self) {
            self.record("submit");
        }

        fn refresh(&self) {
            self.record("refresh");
        }

        fn edit_input(&self, edit: InputEdit) {
            self.record(format!("edit:{edit:?}"));
        }
    }
}
