//! GIF 列表
//!
//! 终端里无法显示图片，每条提交以链接和提交者展示。

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::model::App;
use crate::util::text::truncate_to_width;
use crate::view::theme::{Styles, colors};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let items = app.portal.list.items();

    let mut title = format!(" GIFs ({}) ", items.len());
    if app.portal.is_fetching() {
        title.push_str("· loading… ");
    }
    let block = Block::default()
        .title(title)
        .borders(Borders::TOP)
        .border_style(Style::default().fg(colors().border));

    if items.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No GIFs yet. Be the first to submit one!",
            Styles::muted(),
        ))
        .centered()
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let width = usize::from(area.width.saturating_sub(6));
    let rows: Vec<ListItem> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!("{:>3} ", i + 1), Styles::muted()),
                    Span::raw(truncate_to_width(&item.link, width)),
                ]),
                Line::from(Span::styled(
                    format!("    by {}", item.submitter.short()),
                    Style::default().fg(colors().success),
                )),
            ])
        })
        .collect();

    let list = List::new(rows)
        .block(block)
        .highlight_style(Styles::selected())
        .highlight_symbol("▶ ");
    let mut state = ListState::default().with_selected(Some(app.scroll));
    frame.render_stateful_widget(list, area, &mut state);
}
