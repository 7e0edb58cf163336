use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::Frame,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::{AppCtx, AppEvent, ScreenWidget, Transition};
use crate::generation::{GenerationSession, ImageOutcome};
use crate::prompt::PromptCapture;
use crate::screens::{ConfirmQuitScreen, LaunchFormScreen};
use crate::ui::common_nav::{focus_step, step_index};
use crate::ui::components::{edit_text, field_line_text, text_area_lines};
use crate::ui::help::help_generate;
use crate::ui::layout::page_layout;
use crate::ui::style::{buttons_line, heading, muted};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Preset(usize),
    Prompt,
    AutoGenerate,
    Generate,
    Regenerate,
    Recipe,
    Proceed,
}

/// Prompt capture, generation, and the result panel.
pub struct GenerateScreen {
    pub session: GenerationSession,
    focus: Focus,
    recipe_scroll: u16,
}

impl GenerateScreen {
    pub fn new() -> Self {
        Self { session: GenerationSession::new(), focus: Focus::Prompt, recipe_scroll: 0 }
    }

    pub fn focus(&self) -> Focus { self.focus }

    fn focus_order(&self) -> Vec<Focus> {
        let mut order: Vec<Focus> = (0..PromptCapture::presets().len()).map(Focus::Preset).collect();
        order.extend([Focus::Prompt, Focus::AutoGenerate, Focus::Generate]);
        if self.session.has_result() {
            order.extend([Focus::Regenerate, Focus::Recipe, Focus::Proceed]);
        }
        order
    }

    fn move_focus(&mut self, forward: bool) {
        let order = self.focus_order();
        let idx = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[step_index(idx, order.len(), forward)];
    }

    /// The result panel can vanish under the cursor (new generation started).
    fn fix_focus(&mut self) {
        if !self.focus_order().contains(&self.focus) {
            self.focus = Focus::Generate;
        }
    }

    fn start_generation(&mut self, ctx: &mut AppCtx) {
        let ticket = self.session.begin_image();
        self.recipe_scroll = 0;
        self.fix_focus();
        ctx.spawn_image(ticket);
    }

    fn start_regenerate(&mut self, ctx: &mut AppCtx) {
        if self.session.is_recipe_loading() {
            return;
        }
        let ticket = self.session.begin_recipe();
        ctx.spawn_recipe(ticket);
    }

    fn draw_result(&self, f: &mut Frame<'_>, area: Rect) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);

        let meme = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(self.session.image_url().to_string(), Style::default().fg(Color::LightBlue))),
        ])
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Generated Meme "));
        f.render_widget(meme, cols[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(3), Constraint::Length(1)])
            .split(cols[1]);

        let regen_label = if self.session.is_recipe_loading() { "Regenerating..." } else { "Regenerate Recipe" };
        let mut title_spans = vec![Span::raw("Generated Recipe   ")];
        title_spans.extend(
            buttons_line(&[(regen_label, self.focus == Focus::Regenerate, !self.session.is_recipe_loading())]).spans,
        );
        f.render_widget(Paragraph::new(Line::from(title_spans)), right[0]);

        let editing = self.focus == Focus::Recipe;
        let border = if editing { Style::default().fg(Color::Cyan) } else { Style::default() };
        let recipe = Paragraph::new(text_area_lines(self.session.recipe(), editing))
            .wrap(Wrap { trim: false })
            .scroll((self.recipe_scroll, 0))
            .block(Block::default().borders(Borders::ALL).border_style(border));
        f.render_widget(recipe, right[1]);

        f.render_widget(
            Paragraph::new(buttons_line(&[("Proceed to Launch →", self.focus == Focus::Proceed, true)])),
            right[2],
        );
    }
}

impl Default for GenerateScreen {
    fn default() -> Self { Self::new() }
}

#[async_trait]
impl ScreenWidget for GenerateScreen {
    fn title(&self) -> &str { "Food Meme Factory" }

    fn draw(&self, f: &mut Frame<'_>, size: Rect, _ctx: &AppCtx) {
        let page = page_layout(size, 3);

        // === HEADER ===
        f.render_widget(Block::default().borders(Borders::ALL), page.header);
        let header = Paragraph::new(vec![
            heading(self.title()),
            Line::from("Example prompts for generating food meme coins are listed below."),
            Line::from(muted("AI sometimes generates inaccurate info, so double-check responses.")),
        ])
        .alignment(Alignment::Center);
        f.render_widget(header, page.header_inner);

        // === BODY ===
        f.render_widget(Block::default().borders(Borders::ALL), page.body);
        let body = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(7), Constraint::Min(0)])
            .split(page.body_inner);

        let presets: Vec<(&'static str, bool, bool)> = PromptCapture::presets()
            .iter()
            .enumerate()
            .map(|(i, p)| (*p, self.focus == Focus::Preset(i), true))
            .collect();

        let mut lines = vec![
            buttons_line(&presets),
            Line::from(""),
            field_line_text("Prompt", self.session.prompt.field(), self.focus == Focus::Prompt),
            buttons_line(&[
                ("✨ Auto-generate prompt", self.focus == Focus::AutoGenerate, true),
                ("Generate meme and recipe", self.focus == Focus::Generate, true),
            ]),
            Line::from(""),
        ];
        if self.session.is_loading() {
            lines.push(Line::from(Span::styled(
                "Generating meme and recipe...",
                Style::default().fg(Color::Magenta),
            )));
        }
        f.render_widget(Paragraph::new(lines), body[0]);

        if self.session.has_result() {
            self.draw_result(f, body[1]);
        }

        // === FOOTER ===
        f.render_widget(Block::default().borders(Borders::ALL), page.footer);
        f.render_widget(help_generate(), page.footer_inner);
    }

    async fn on_key(&mut self, k: KeyEvent, ctx: &mut AppCtx) -> Result<Transition> {
        if k.code == KeyCode::Esc {
            return Ok(Transition::Push(Box::new(ConfirmQuitScreen::new())));
        }

        // Tab/arrows always move focus, except Left/Right which stay with the text inputs.
        if let Some(forward) = focus_step(k) {
            self.move_focus(forward);
            return Ok(Transition::Stay);
        }

        match (self.focus, k.code) {
            (Focus::Recipe, KeyCode::PageDown) => self.recipe_scroll = self.recipe_scroll.saturating_add(5),
            (Focus::Recipe, KeyCode::PageUp) => self.recipe_scroll = self.recipe_scroll.saturating_sub(5),
            (Focus::Recipe, KeyCode::Enter) => self.session.recipe_mut().insert_char('\n'),
            (Focus::Recipe, _) => {
                edit_text(self.session.recipe_mut(), k);
            }

            (Focus::Preset(i), KeyCode::Enter) => self.session.prompt.apply_preset(i),
            (Focus::AutoGenerate, KeyCode::Enter) => self.session.prompt.auto_generate(),
            (Focus::Prompt | Focus::Generate, KeyCode::Enter) => self.start_generation(ctx),
            (Focus::Prompt, _) => {
                edit_text(self.session.prompt.field_mut(), k);
            }

            (Focus::Regenerate, KeyCode::Enter) => self.start_regenerate(ctx),
            (Focus::Proceed, KeyCode::Enter) => {
                return Ok(Transition::Push(Box::new(LaunchFormScreen::new(ctx))));
            }
            _ => {}
        }
        Ok(Transition::Stay)
    }

    fn on_event(&mut self, event: &AppEvent, ctx: &mut AppCtx) {
        match event {
            AppEvent::ImageDone { ticket, result } => {
                let outcome = self.session.complete_image(ticket, result.clone(), &mut ctx.toasts);
                if let ImageOutcome::FetchRecipe(next) = outcome {
                    ctx.spawn_recipe(next);
                }
            }
            AppEvent::RecipeDone { ticket, result } => {
                self.session.complete_recipe(ticket, result.clone(), &mut ctx.toasts);
                self.fix_focus();
            }
            AppEvent::LookupDone { .. } => {}
        }
    }
}
