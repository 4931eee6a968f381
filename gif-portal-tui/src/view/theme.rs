//! 主题

use std::sync::atomic::{AtomicU8, Ordering};

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

static CURRENT_THEME: AtomicU8 = AtomicU8::new(0);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    fn index(self) -> u8 {
        match self {
            Self::Dark => 0,
            Self::Light => 1,
        }
    }
}

pub fn set_theme(theme: Theme) {
    CURRENT_THEME.store(theme.index(), Ordering::SeqCst);
}

pub fn colors() -> ThemeColors {
    match CURRENT_THEME.load(Ordering::SeqCst) {
        0 => ThemeColors::dark(),
        _ => ThemeColors::light(),
    }
}

#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub fg: Color,
    pub border: Color,
    /// 已连接时的容器边框
    pub border_authed: Color,
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    /// 标题渐变的两端（终端里取首尾两色）
    pub accent_from: Color,
    pub accent_to: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub muted: Color,
}

impl ThemeColors {
    /// 深色主题（夜色背景，绿 → 蓝强调色）
    pub fn dark() -> Self {
        Self {
            fg: Color::Rgb(226, 232, 240),
            border: Color::Rgb(74, 85, 104),
            border_authed: Color::Rgb(96, 198, 87),
            highlight: Color::Rgb(53, 174, 226),
            selected_bg: Color::Rgb(45, 55, 72),
            selected_fg: Color::Rgb(255, 255, 255),
            accent_from: Color::Rgb(96, 198, 87),
            accent_to: Color::Rgb(53, 174, 226),
            success: Color::Rgb(104, 211, 145),
            warning: Color::Rgb(246, 173, 85),
            error: Color::Rgb(252, 129, 129),
            muted: Color::Rgb(160, 174, 192),
        }
    }

    /// 浅色主题
    pub fn light() -> Self {
        Self {
            fg: Color::Rgb(26, 32, 44),
            border: Color::Rgb(203, 213, 224),
            border_authed: Color::Rgb(56, 161, 105),
            highlight: Color::Rgb(43, 108, 176),
            selected_bg: Color::Rgb(190, 227, 248),
            selected_fg: Color::Rgb(26, 32, 44),
            accent_from: Color::Rgb(56, 161, 105),
            accent_to: Color::Rgb(43, 108, 176),
            success: Color::Rgb(47, 133, 90),
            warning: Color::Rgb(192, 86, 33),
            error: Color::Rgb(197, 48, 48),
            muted: Color::Rgb(113, 128, 150),
        }
    }
}

pub struct Styles;

impl Styles {
    pub fn border(authed: bool) -> Style {
        let c = colors();
        Style::default().fg(if authed { c.border_authed } else { c.border })
    }

    pub fn selected() -> Style {
        let c = colors();
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn header() -> Style {
        Style::default()
            .fg(colors().accent_from)
            .add_modifier(Modifier::BOLD)
    }

    pub fn sub_text() -> Style {
        Style::default().fg(colors().accent_to)
    }

    /// 行动按钮（Connect / Initialize / Submit）
    pub fn button() -> Style {
        let c = colors();
        Style::default()
            .bg(c.highlight)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted() -> Style {
        Style::default().fg(colors().muted)
    }

    pub fn title_bar() -> Style {
        let c = colors();
        Style::default().bg(c.highlight).fg(c.selected_fg)
    }

    pub fn statusbar() -> Style {
        let c = colors();
        Style::default().bg(c.highlight).fg(c.selected_fg)
    }

    pub fn hint_key() -> Style {
        Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }

    pub fn hint_desc() -> Style {
        Style::new().fg(Color::Rgb(237, 242, 247))
    }
}
