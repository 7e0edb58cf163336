use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    prelude::Frame,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{AppCtx, ScreenWidget, Transition};
use crate::chain::{self, Chain};
use crate::launch::{Coefficient, LaunchForm};
use crate::notify::{Notification, Notifier};
use crate::ui::common_nav::{cycle_step, esc_to_back, focus_step, step_index};
use crate::ui::components::{edit_text, field_line_text, select_line, value_line};
use crate::ui::help::help_launch;
use crate::ui::layout::page_layout;
use crate::ui::style::{buttons_line, heading, muted};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Name,
    Symbol,
    MaxSupply,
    Chain,
    PriceMode,
    Coef(Coefficient),
    /// "Connect Wallet" while disconnected, "Launch" once connected.
    Submit,
    Back,
}

pub struct LaunchFormScreen {
    pub form: LaunchForm,
    focus: Focus,
}

impl LaunchFormScreen {
    pub fn new(ctx: &AppCtx) -> Self {
        let mut form = LaunchForm::new();
        let chains = &ctx.config.launch_chains;
        if !chains.contains(&form.chain) {
            if let Some(first) = chains.first() {
                form.chain = *first;
            }
        }
        Self { form, focus: Focus::Name }
    }

    pub fn focus(&self) -> Focus { self.focus }

    fn focus_order(&self) -> Vec<Focus> {
        let mut order = vec![Focus::Name, Focus::Symbol, Focus::MaxSupply, Focus::Chain, Focus::PriceMode];
        order.extend(self.form.visible_coefficients().iter().map(|c| Focus::Coef(*c)));
        order.extend([Focus::Submit, Focus::Back]);
        order
    }

    fn move_focus(&mut self, forward: bool) {
        if self.focus == Focus::MaxSupply {
            self.form.commit_max_supply();
        }
        let order = self.focus_order();
        let idx = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[step_index(idx, order.len(), forward)];
    }

    fn cycle_chain(&mut self, chains: &[Chain], forward: bool) {
        if let Some(next) = chain::cycle(chains, Some(self.form.chain), forward) {
            self.form.chain = next;
        }
    }

    fn submit(&mut self, ctx: &mut AppCtx) {
        if !ctx.wallet.connected {
            ctx.connect_wallet();
            return;
        }
        let AppCtx { wallet, launch_sink, toasts, .. } = ctx;
        if let Err(e) = self.form.submit(wallet, launch_sink.as_mut(), toasts) {
            toasts.notify(Notification::error(e.to_string()));
        }
    }

    fn form_lines(&self, ctx: &AppCtx) -> Vec<Line<'static>> {
        let f = &self.form;
        let mut lines = vec![
            field_line_text("Name", &f.name, self.focus == Focus::Name),
            field_line_text("Symbol", &f.symbol, self.focus == Focus::Symbol),
            field_line_text("Max Supply", &f.max_supply, self.focus == Focus::MaxSupply),
            select_line("Chain", &f.chain.option_label(), self.focus == Focus::Chain),
            Line::from(""),
            select_line("Price Mode", &f.price_mode.to_string(), self.focus == Focus::PriceMode),
            Line::from(Span::styled(
                format!("    {}", f.price_mode.formula()),
                Style::default().fg(Color::LightGreen),
            )),
        ];
        for c in f.visible_coefficients() {
            lines.push(field_line_text(c.label(), f.coefficient(*c), self.focus == Focus::Coef(*c)));
        }
        lines.push(Line::from(""));

        let submit_selected = self.focus == Focus::Submit;
        let back_selected = self.focus == Focus::Back;
        match ctx.wallet.short_address() {
            Some(short) if ctx.wallet.connected => {
                lines.push(value_line("Wallet Connected", &short));
                lines.push(Line::from(""));
                lines.push(buttons_line(&[
                    ("Launch", submit_selected, f.can_submit(&ctx.wallet)),
                    ("Back", back_selected, true),
                ]));
            }
            _ => {
                lines.push(Line::from(muted("Connect a wallet to launch.")));
                lines.push(Line::from(""));
                lines.push(buttons_line(&[
                    ("Connect Wallet", submit_selected, true),
                    ("Back", back_selected, true),
                ]));
            }
        }
        lines
    }
}

#[async_trait]
impl ScreenWidget for LaunchFormScreen {
    fn title(&self) -> &str { "Launch Your Food Meme Coin" }

    fn draw(&self, f: &mut Frame<'_>, size: Rect, ctx: &AppCtx) {
        let page = page_layout(size, 1);

        // === HEADER ===
        f.render_widget(Block::default().borders(Borders::ALL), page.header);
        f.render_widget(Paragraph::new(heading(self.title())).alignment(Alignment::Center), page.header_inner);

        // === BODY ===
        f.render_widget(Block::default().borders(Borders::ALL), page.body);
        f.render_widget(Paragraph::new(self.form_lines(ctx)), page.body_inner);

        // === FOOTER ===
        f.render_widget(Block::default().borders(Borders::ALL), page.footer);
        f.render_widget(help_launch(), page.footer_inner);
    }

    async fn on_key(&mut self, k: KeyEvent, ctx: &mut AppCtx) -> Result<Transition> {
        if let Some(t) = esc_to_back(k) {
            return Ok(t);
        }
        if let Some(forward) = focus_step(k) {
            self.move_focus(forward);
            return Ok(Transition::Stay);
        }

        match self.focus {
            Focus::Name => {
                edit_text(&mut self.form.name, k);
            }
            Focus::Symbol => {
                edit_text(&mut self.form.symbol, k);
            }
            Focus::MaxSupply => match k.code {
                KeyCode::Char(c) if !LaunchForm::max_supply_accepts(c) => {}
                KeyCode::Enter => {
                    self.form.commit_max_supply();
                }
                _ => {
                    edit_text(&mut self.form.max_supply, k);
                }
            },
            Focus::Chain => {
                if let Some(forward) = cycle_step(k) {
                    self.cycle_chain(&ctx.config.launch_chains, forward);
                }
            }
            Focus::PriceMode => {
                if let Some(forward) = cycle_step(k) {
                    let mode = if forward { self.form.price_mode.next() } else { self.form.price_mode.prev() };
                    self.form.set_price_mode(mode);
                }
            }
            Focus::Coef(c) => {
                edit_text(self.form.coefficient_mut(c), k);
            }
            Focus::Submit => {
                if k.code == KeyCode::Enter {
                    self.submit(ctx);
                }
            }
            Focus::Back => {
                if k.code == KeyCode::Enter {
                    return Ok(Transition::Pop);
                }
            }
        }
        Ok(Transition::Stay)
    }
}
