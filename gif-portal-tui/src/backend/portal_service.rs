//! Portal 服务：在 tokio 运行时中执行核心库操作

use std::future::Future;
use std::sync::Arc;

use gif_portal_core::{CoreResult, MountGuard, PortalState, PortalView};
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::watch;

use crate::message::{AppMessage, InputEdit, TaskKind, TaskMessage};

/// Update 层可以发出的 portal 操作
///
/// Each call returns immediately; the outcome arrives later as a
/// [`TaskMessage`] on the main loop's channel.
pub trait PortalCommands {
    fn connect(&self);
    fn initialize(&self);
    fn submit(&self);
    fn refresh(&self);
    /// 同步修改输入框内容
    fn edit_input(&self, edit: InputEdit);
}

pub struct PortalService {
    view: Arc<PortalView>,
    tx: UnboundedSender<AppMessage>,
}

impl PortalService {
    pub fn new(view: Arc<PortalView>, tx: UnboundedSender<AppMessage>) -> Self {
        Self { view, tx }
    }

    /// 启动静默重连；必须在运行时上下文中调用
    pub fn mount(&self) -> CoreResult<MountGuard> {
        self.view.mount()
    }

    pub fn snapshot(&self) -> PortalState {
        self.view.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<PortalState> {
        self.view.subscribe()
    }

    fn spawn<F, Fut>(&self, kind: TaskKind, op: F)
    where
        F: FnOnce(Arc<PortalView>) -> Fut,
        Fut: Future<Output = CoreResult<()>> + Send + 'static,
    {
        let tx = self.tx.clone();
        let fut = op(Arc::clone(&self.view));
        tokio::spawn(async move {
            let msg = match fut.await {
                Ok(()) => TaskMessage::Done(kind),
                Err(e) => TaskMessage::Failed {
                    kind,
                    message: e.to_string(),
                    expected: e.is_expected(),
                },
            };
            if tx.send(AppMessage::Task(msg)).is_err() {
                log::debug!("{} finished after the UI closed", kind.label());
            }
        });
    }
}

impl PortalCommands for PortalService {
    fn connect(&self) {
        self.spawn(TaskKind::Connect, |view| async move {
            view.connect_explicitly().await.map(|_| ())
        });
    }

    fn initialize(&self) {
        self.spawn(TaskKind::Initialize, |view| async move {
            view.initialize_account().await.map(|_| ())
        });
    }

    fn submit(&self) {
        self.spawn(TaskKind::Submit, |view| async move {
            view.submit_input().await.map(|_| ())
        });
    }

    fn refresh(&self) {
        self.spawn(TaskKind::Refresh, |view| async move {
            view.fetch_list().await.map(|_| ())
        });
    }

    fn edit_input(&self, edit: InputEdit) {
        self.view.edit_input(|input| edit.apply(input));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gif_portal_core::{ListState, RenderState};
    use tokio::sync::mpsc;

    use crate::backend::{AppConfig, build_portal};

    async fn next_task(rx: &mut mpsc::UnboundedReceiver<AppMessage>) -> TaskMessage {
        loop {
            match rx.recv().await {
                Some(AppMessage::Task(TaskMessage::Notice(_))) => {}
                Some(AppMessage::Task(msg)) => return msg,
                other => panic!("unexpected message: {other:?}"),
            }
        }
    }

    fn demo_service() -> (PortalService, mpsc::UnboundedReceiver<AppMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let view = build_portal(&AppConfig::default(), true, tx.clone()).unwrap();
        (PortalService::new(view, tx), rx)
    }

    #[tokio::test]
    async fn connect_then_submit_in_demo() {
        let (service, mut rx) = demo_service();

        service.connect();
        assert!(matches!(next_task(&mut rx).await, TaskMessage::Done(TaskKind::Connect)));
        let state = service.snapshot();
        assert_eq!(state.render_state(), RenderState::ConnectedPopulated);
        let before = state.list.items().len();

        for c in "https://x/new.gif".chars() {
            service.edit_input(InputEdit::Push(c));
        }
        assert_eq!(service.snapshot().input, "https://x/new.gif");

        service.submit();
        assert!(matches!(next_task(&mut rx).await, TaskMessage::Done(TaskKind::Submit)));
        let state = service.snapshot();
        assert_eq!(state.input, "");
        assert_eq!(state.list.items().len(), before + 1);
    }

    #[tokio::test]
    async fn submit_without_connection_fails_expectedly() {
        let (service, mut rx) = demo_service();
        service.edit_input(InputEdit::Push('x'));

        service.submit();
        match next_task(&mut rx).await {
            TaskMessage::Failed {
                kind,
                message,
                expected,
            } => {
                assert_eq!(kind, TaskKind::Submit);
                assert_eq!(message, "Wallet not connected");
                assert!(expected);
            }
            other => panic!("unexpected message: {other:?}"),
        }
        assert_eq!(service.snapshot().list, ListState::Uninitialized);
    }
}
