//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
    /// 状态栏中的写法
    pub label: &'static str,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode, label: &'static str) -> Self {
        Self {
            modifiers,
            code,
            label,
        }
    }

    pub const fn key(code: KeyCode, label: &'static str) -> Self {
        Self::new(KeyModifiers::NONE, code, label)
    }

    pub const fn alt(code: KeyCode, label: &'static str) -> Self {
        Self::new(KeyModifiers::ALT, code, label)
    }

    pub const fn ctrl(code: KeyCode, label: &'static str) -> Self {
        Self::new(KeyModifiers::CONTROL, code, label)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'), "q");
    pub const ALT_QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'), "Alt+q");
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'), "Ctrl+c");
    pub const REFRESH: KeyBinding = KeyBinding::alt(KeyCode::Char('r'), "Alt+r");
    pub const TOGGLE_THEME: KeyBinding = KeyBinding::alt(KeyCode::Char('t'), "Alt+t");
    pub const DISMISS: KeyBinding = KeyBinding::key(KeyCode::Esc, "Esc");

    // 列表
    pub const SCROLL_UP: KeyBinding = KeyBinding::key(KeyCode::Up, "↑");
    pub const SCROLL_DOWN: KeyBinding = KeyBinding::key(KeyCode::Down, "↓");

    // 操作
    pub const CONNECT: KeyBinding = KeyBinding::key(KeyCode::Char('c'), "c");
    pub const INITIALIZE: KeyBinding = KeyBinding::key(KeyCode::Char('i'), "i");
    pub const CONFIRM: KeyBinding = KeyBinding::key(KeyCode::Enter, "Enter");
    pub const CLEAR_INPUT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('u'), "Ctrl+u");
}
