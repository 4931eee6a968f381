//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use gif_portal_core::RenderState;

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, InputEdit, PortalMessage};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变时下一轮自动重绘
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press，避免 Windows 终端上的重复按键
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 全局快捷键
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::ALT_QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::TOGGLE_THEME.matches(&key) {
        return AppMessage::ToggleTheme;
    }
    if DefaultKeymap::DISMISS.matches(&key) {
        return AppMessage::ClearStatus;
    }

    let render = app.portal.render_state();
    if render != RenderState::Unconnected && DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }

    match render {
        RenderState::Unconnected => handle_unconnected_keys(key),
        RenderState::ConnectedUninitialized => handle_uninitialized_keys(key),
        RenderState::ConnectedEmpty | RenderState::ConnectedPopulated => handle_form_keys(key),
    }
}

fn handle_unconnected_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::CONNECT.matches(&key) || DefaultKeymap::CONFIRM.matches(&key) {
        return AppMessage::Portal(PortalMessage::Connect);
    }
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    AppMessage::Noop
}

fn handle_uninitialized_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::INITIALIZE.matches(&key) || DefaultKeymap::CONFIRM.matches(&key) {
        return AppMessage::Portal(PortalMessage::Initialize);
    }
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    AppMessage::Noop
}

/// 表单分支：普通字符都进入输入框，所以这里没有单键退出
fn handle_form_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::CONFIRM.matches(&key) {
        return AppMessage::Portal(PortalMessage::Submit);
    }
    if DefaultKeymap::CLEAR_INPUT.matches(&key) {
        return AppMessage::Portal(PortalMessage::Input(InputEdit::Clear));
    }
    if DefaultKeymap::SCROLL_UP.matches(&key) {
        return AppMessage::ScrollUp;
    }
    if DefaultKeymap::SCROLL_DOWN.matches(&key) {
        return AppMessage::ScrollDown;
    }

    match key.code {
        KeyCode::Backspace => AppMessage::Portal(PortalMessage::Input(InputEdit::Pop)),
        KeyCode::Char(c)
            if key.modifiers == KeyModifiers::NONE || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Portal(PortalMessage::Input(InputEdit::Push(c)))
        }
        _ => AppMessage::Noop,
    }
}
