//! app.rs
//! 应用主循环
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//!
//! loop {
//!     terminal.draw(|f| view::render(&app, f))    // 渲染 UI
//!     if app.should_quit { break }
//!     drain(rx)                                   // 后台任务结果、核心库通知
//!     sync(state_rx)                              // 核心库状态快照
//!     poll_event(100ms) → handle_event → update   // 用户输入
//! }
//!
//! update 只发出操作，从不等待；所以按键期间界面不会卡在网络调用上。

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::{UnboundedReceiver, error::TryRecvError};

use crate::backend::PortalService;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    portal: &PortalService,
    mut rx: UnboundedReceiver<AppMessage>,
) -> Result<()> {
    let mut state_rx = portal.subscribe();
    view::theme::set_theme(app.theme);

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 后台任务回传
        loop {
            match rx.try_recv() {
                Ok(msg) => update::update(app, msg, portal),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    log::warn!("Task channel closed");
                    break;
                }
            }
        }

        // 4. 同步核心库状态
        if state_rx.has_changed().unwrap_or(false) {
            app.sync_portal(state_rx.borrow_and_update().clone());
        }

        // 5. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            update::update(app, msg, portal);
            // 输入框的修改是同步的，立即反映
            app.sync_portal(state_rx.borrow_and_update().clone());
        }
    }

    Ok(())
}
