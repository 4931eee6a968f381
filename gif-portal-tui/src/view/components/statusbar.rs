use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use gif_portal_core::RenderState;

use crate::event::DefaultKeymap;
use crate::model::{App, StatusLevel};
use crate::view::theme::{Styles, colors};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if app.is_busy() {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::raw("⏳"));
    }

    if let Some((level, msg)) = &app.status_message {
        let c = colors();
        let fg = match level {
            StatusLevel::Info => Color::White,
            StatusLevel::Warning => c.warning,
            StatusLevel::Error => c.error,
        };
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(fg)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = Vec::new();

    match app.portal.render_state() {
        RenderState::Unconnected => {
            hints.push((DefaultKeymap::CONNECT.label, "Connect"));
            hints.push((DefaultKeymap::QUIT.label, "Quit"));
        }
        RenderState::ConnectedUninitialized => {
            hints.push((DefaultKeymap::INITIALIZE.label, "Initialize"));
            hints.push((DefaultKeymap::REFRESH.label, "Refresh"));
            hints.push((DefaultKeymap::QUIT.label, "Quit"));
        }
        RenderState::ConnectedEmpty | RenderState::ConnectedPopulated => {
            hints.push((DefaultKeymap::CONFIRM.label, "Submit"));
            hints.push((DefaultKeymap::CLEAR_INPUT.label, "Clear"));
            hints.push(("↑↓", "Scroll"));
            hints.push((DefaultKeymap::REFRESH.label, "Refresh"));
            hints.push((DefaultKeymap::ALT_QUIT.label, "Quit"));
        }
    }
    hints.push((DefaultKeymap::TOGGLE_THEME.label, "Theme"));

    hints
}
