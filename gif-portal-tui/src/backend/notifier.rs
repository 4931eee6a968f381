use gif_portal_core::{Notice, Notifier};
use tokio::sync::mpsc::UnboundedSender;

use crate::message::{AppMessage, TaskMessage};

/// 把核心库的通知转发到主循环，由状态栏展示
pub struct ChannelNotifier {
    tx: UnboundedSender<AppMessage>,
}

impl ChannelNotifier {
    pub fn new(tx: UnboundedSender<AppMessage>) -> Self {
        Self { tx }
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notice: Notice) {
        // 主循环已退出时丢弃
        if self.tx.send(AppMessage::Task(TaskMessage::Notice(notice))).is_err() {
            log::debug!("Notice dropped, UI is gone");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forwards_notice() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        ChannelNotifier::new(tx).notify(Notice::warning("no wallet"));

        match rx.try_recv().unwrap() {
            AppMessage::Task(TaskMessage::Notice(notice)) => assert_eq!(notice.message, "no wallet"),
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn closed_channel_is_ignored() {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        drop(rx);
        ChannelNotifier::new(tx).notify(Notice::warning("late"));
    }
}
