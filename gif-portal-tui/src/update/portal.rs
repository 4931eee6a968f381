//! Portal 操作消息处理

use crate::backend::PortalCommands;
use crate::message::{PortalMessage, TaskKind};
use crate::model::{App, StatusLevel};

pub fn update(app: &mut App, msg: PortalMessage, commands: &dyn PortalCommands) {
    match msg {
        PortalMessage::Connect => {
            if app.is_pending(TaskKind::Connect) {
                return;
            }
            app.set_status(StatusLevel::Info, "Connecting to wallet...");
            app.begin_task(TaskKind::Connect);
            commands.connect();
        }
        PortalMessage::Initialize => {
            if app.is_pending(TaskKind::Initialize) {
                return;
            }
            app.set_status(StatusLevel::Info, "Creating GIF program account...");
            app.begin_task(TaskKind::Initialize);
            commands.initialize();
        }
        PortalMessage::Input(edit) => commands.edit_input(edit),
        PortalMessage::Submit => {
            // 空输入也交给核心库判定，不在界面层重复校验
            app.begin_task(TaskKind::Submit);
            commands.submit();
        }
    }
}
