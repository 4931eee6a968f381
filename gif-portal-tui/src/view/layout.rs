use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use gif_portal_core::RenderState;
use unicode_width::UnicodeWidthStr;

use crate::message::TaskKind;
use crate::model::App;

use super::components;
use super::theme::{Styles, colors};

pub const HEADER: &str = "GIF Portal";
pub const SUB_TEXT: &str = "View your GIF collection in the metaverse ✨";
pub const CONNECT_LABEL: &str = "Connect to Wallet";
pub const INITIALIZE_LABEL: &str = "Do One-Time Initialization For GIF Program Account";

pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 标题栏 + 容器 + 页脚 + 状态栏
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(size);

    render_title_bar(app, frame, rows[0]);
    render_container(app, frame, rows[1]);
    render_footer(app, frame, rows[2]);
    components::statusbar::render(app, frame, rows[3]);
}

fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let identity = match app.portal.connection.identity() {
        Some(identity) => format!("● {} ", identity.short()),
        None => "○ not connected ".to_string(),
    };
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(u16::try_from(identity.width()).unwrap_or(u16::MAX)),
        ])
        .split(area);

    let title = Paragraph::new(format!(" GIF Portal v{}", env!("CARGO_PKG_VERSION")))
        .style(Styles::title_bar());
    frame.render_widget(title, halves[0]);
    frame.render_widget(Paragraph::new(identity).style(Styles::title_bar()), halves[1]);
}

/// 容器：连接前后使用不同的边框与对齐方式
fn render_container(app: &App, frame: &mut Frame, area: Rect) {
    let authed = app.portal.connection.is_connected();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border(authed));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(inner);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(HEADER, Styles::header())),
        Line::from(Span::styled(SUB_TEXT, Styles::sub_text())),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, sections[0]);

    let body = sections[1];
    match app.portal.render_state() {
        RenderState::Unconnected => {
            let busy = app.is_pending(TaskKind::Connect);
            render_action(frame, body, CONNECT_LABEL, "press c or Enter", busy);
        }
        RenderState::ConnectedUninitialized => {
            let busy = app.is_pending(TaskKind::Initialize);
            render_action(frame, body, INITIALIZE_LABEL, "press i or Enter", busy);
        }
        RenderState::ConnectedEmpty | RenderState::ConnectedPopulated => {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(3), Constraint::Min(1)])
                .split(body);
            components::form::render(app, frame, parts[0]);
            components::gif_grid::render(app, frame, parts[1]);
        }
    }
}

/// 单个居中的行动按钮
fn render_action(frame: &mut Frame, area: Rect, label: &str, hint: &str, busy: bool) {
    let [row] = Layout::vertical([Constraint::Length(3)])
        .flex(Flex::Center)
        .areas(area);

    let hint = if busy { "waiting for wallet..." } else { hint };
    let lines = vec![
        Line::from(Span::styled(format!("  {label}  "), Styles::button())),
        Line::from(""),
        Line::from(Span::styled(hint, Styles::muted())),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), row);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let line = Line::from(vec![
        Span::styled("Built by ", Styles::muted()),
        Span::styled(format!("@{}", app.footer_handle), Style::default().fg(c.highlight)),
        Span::styled("  ·  All Rights Licensed", Styles::muted()),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
