//! 提交表单：输入框 + Submit 按钮

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::message::TaskKind;
use crate::model::App;
use crate::util::text::tail_to_width;
use crate::view::theme::{Styles, colors};

const PLACEHOLDER: &str = "Enter gif link!";
const SUBMIT_LABEL: &str = " Submit ";

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(12)])
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors().highlight));
    let inner = block.inner(columns[0]);
    frame.render_widget(block, columns[0]);

    let input = &app.portal.input;
    // 光标前留一列
    let visible = tail_to_width(input, usize::from(inner.width.saturating_sub(1)));
    if input.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(PLACEHOLDER, Styles::muted())),
            inner,
        );
    } else {
        frame.render_widget(
            Paragraph::new(visible).style(Style::default().fg(colors().fg)),
            inner,
        );
    }

    if inner.width > 0 && inner.height > 0 {
        let offset = u16::try_from(visible.width()).unwrap_or(inner.width);
        frame.set_cursor_position(Position::new(inner.x + offset, inner.y));
    }

    let label = if app.is_pending(TaskKind::Submit) {
        " Sending "
    } else {
        SUBMIT_LABEL
    };
    let button_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(columns[1]);
    frame.render_widget(
        Paragraph::new(Span::styled(label, Styles::button())).centered(),
        button_area[1],
    );
}
