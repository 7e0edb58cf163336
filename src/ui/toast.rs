use ratatui::{
    layout::Rect,
    prelude::Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::notify::Toasts;
use crate::ui::layout::top_right;
use crate::ui::style::severity_color;

const TOAST_WIDTH: u16 = 48;

/// Stack visible toasts in the top-right corner, newest last.
pub fn draw_toasts(f: &mut Frame<'_>, size: Rect, toasts: &Toasts) {
    let mut y_off = 0u16;
    for n in toasts.visible() {
        let inner_w = TOAST_WIDTH.saturating_sub(4).max(1) as usize;
        let body_lines = textwrap::wrap(&n.description, inner_w).len() as u16;
        let h = body_lines + 2;

        let area = top_right(TOAST_WIDTH, size.height.saturating_sub(y_off), size);
        let area = Rect { y: area.y + y_off, height: h.min(area.height), ..area };
        if area.height < 3 {
            break;
        }

        let color = severity_color(n.severity);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(Line::from(Span::styled(
                format!(" {} ", n.title),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )));
        let body = Paragraph::new(n.description.clone()).block(block).wrap(Wrap { trim: true });

        f.render_widget(Clear, area);
        f.render_widget(body, area);
        y_off += area.height;
    }
}
