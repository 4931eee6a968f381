//! 后台任务消息处理

use crate::message::TaskMessage;
use crate::model::{App, StatusLevel};

pub fn update(app: &mut App, msg: TaskMessage) {
    match msg {
        TaskMessage::Notice(notice) => app.set_status(notice.level.into(), notice.message),
        TaskMessage::Done(kind) => {
            app.finish_task(kind);
            app.set_status(StatusLevel::Info, kind.success_text());
        }
        TaskMessage::Failed {
            kind,
            message,
            expected,
        } => {
            app.finish_task(kind);
            let level = if expected {
                StatusLevel::Warning
            } else {
                StatusLevel::Error
            };
            app.set_status(level, format!("{} failed: {message}", kind.label()));
        }
    }
}
