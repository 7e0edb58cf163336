use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    prelude::Frame,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::{AppCtx, ScreenWidget, Transition};
use crate::ui::layout::centered_rect_abs;
use crate::ui::style::buttons_line;

const MESSAGE: &str = "Quit the Food Meme Factory?";
const IN_FLIGHT: &str = "Requests still running will be abandoned.";

pub struct ConfirmQuitScreen {
    quit_selected: bool,
}

impl ConfirmQuitScreen {
    pub fn new() -> Self {
        Self { quit_selected: false }
    }
}

impl Default for ConfirmQuitScreen {
    fn default() -> Self { Self::new() }
}

#[async_trait]
impl ScreenWidget for ConfirmQuitScreen {
    fn title(&self) -> &str { "" }

    fn draw(&self, f: &mut Frame<'_>, size: Rect, _ctx: &AppCtx) {
        let inner_width = (IN_FLIGHT.len() as u16).max(36);
        let area = centered_rect_abs(inner_width + 4, 8, size);
        let inner = area.inner(&Margin { horizontal: 2, vertical: 1 });

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1); 5])
            .split(inner);

        let buttons = buttons_line(&[
            ("Don't Quit", !self.quit_selected, true),
            ("Quit", self.quit_selected, true),
        ]);

        f.render_widget(Clear, area);
        f.render_widget(Block::default().borders(Borders::ALL).title(self.title()), area);
        f.render_widget(Paragraph::new(Line::from(MESSAGE)).alignment(Alignment::Center), rows[0]);
        f.render_widget(Paragraph::new(Line::from(IN_FLIGHT)).alignment(Alignment::Center), rows[1]);
        f.render_widget(Paragraph::new(buttons).alignment(Alignment::Center), rows[3]);
    }

    async fn on_key(&mut self, k: KeyEvent, _ctx: &mut AppCtx) -> Result<Transition> {
        match k.code {
            KeyCode::Esc => return Ok(Transition::Pop),
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::Char(' ') => {
                self.quit_selected = !self.quit_selected;
            }
            KeyCode::Enter => {
                return Ok(if self.quit_selected { Transition::Quit } else { Transition::Pop });
            }
            _ => {}
        }
        Ok(Transition::Stay)
    }
}
