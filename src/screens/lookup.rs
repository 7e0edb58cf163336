use anyhow::Result;
use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};

use crate::app::{AppCtx, AppEvent, ScreenWidget, Transition};
use crate::chain::{self, Chain, SUPPORTED_CHAINS};
use crate::lookup::{LookupState, MintForm, TransferForm, MOCK_BALANCES, MOCK_REVIEWS};
use crate::screens::ConfirmQuitScreen;
use crate::ui::common_nav::{cycle_step, focus_step, step_index};
use crate::ui::components::{edit_text, field_line_text, select_line, value_line, TextField};
use crate::ui::help::help_lookup;
use crate::ui::layout::{columns, page_layout};
use crate::ui::style::{buttons_line, heading, muted};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Recipe,
    MintChain,
    MintAmount,
    MintSubmit,
    TransferFrom,
    TransferTo,
    TransferAmount,
    TransferSubmit,
}

const FOCUS_ORDER: [Focus; 8] = [
    Focus::Recipe,
    Focus::MintChain,
    Focus::MintAmount,
    Focus::MintSubmit,
    Focus::TransferFrom,
    Focus::TransferTo,
    Focus::TransferAmount,
    Focus::TransferSubmit,
];

/// Read-only view of a stored record plus the placeholder panels.
pub struct LookupScreen {
    pub state: LookupState,
    pub mint: MintForm,
    pub transfer: TransferForm,
    focus: Focus,
    recipe_scroll: u16,
}

fn unselected(c: Option<Chain>) -> String {
    c.map(Chain::option_label).unwrap_or_else(|| "Select a chain".to_string())
}

fn stars(n: u8) -> String {
    (0..5).map(|i| if i < n { '★' } else { '☆' }).collect()
}

/// Amounts are numeric with at most one decimal point; anything else is dropped.
fn edit_amount(tf: &mut TextField, k: KeyEvent) {
    match k.code {
        KeyCode::Char('.') if tf.text.contains('.') => {}
        KeyCode::Char(c) if !(c.is_ascii_digit() || c == '.') => {}
        _ => {
            edit_text(tf, k);
        }
    }
}

impl LookupScreen {
    /// Build the screen and issue the single fetch for `address`.
    pub fn open(address: &str, ctx: &mut AppCtx) -> Self {
        let mut state = LookupState::new(address);
        let ticket = state.begin_fetch();
        ctx.spawn_lookup(ticket);
        Self {
            state,
            mint: MintForm::default(),
            transfer: TransferForm::default(),
            focus: Focus::Recipe,
            recipe_scroll: 0,
        }
    }

    pub fn focus(&self) -> Focus { self.focus }

    fn move_focus(&mut self, forward: bool) {
        let idx = FOCUS_ORDER.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = FOCUS_ORDER[step_index(idx, FOCUS_ORDER.len(), forward)];
    }

    fn draw_record(&self, f: &mut Frame<'_>, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title(" Food Meme ");
        let Some(rec) = self.state.record() else {
            let msg = if self.state.is_loading() { "Loading address info..." } else { "No record to show." };
            f.render_widget(Paragraph::new(Line::from(muted(msg))).block(block), area);
            return;
        };

        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(3)])
            .split(area);

        let meta = Paragraph::new(vec![
            heading(&rec.name),
            value_line("Address", self.state.address()),
            Line::from(vec![
                Span::styled("Image: ", Style::default().fg(Color::Yellow)),
                Span::styled(rec.url_path.clone(), Style::default().fg(Color::LightBlue)),
            ]),
        ])
        .wrap(Wrap { trim: false })
        .block(block);
        f.render_widget(meta, parts[0]);

        let border = if self.focus == Focus::Recipe { Style::default().fg(Color::Cyan) } else { Style::default() };
        let recipe = Paragraph::new(rec.recipe.clone())
            .wrap(Wrap { trim: false })
            .scroll((self.recipe_scroll, 0))
            .block(Block::default().borders(Borders::ALL).border_style(border).title(" Recipe "));
        f.render_widget(recipe, parts[1]);
    }

    fn draw_panels(&self, f: &mut Frame<'_>, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(7), Constraint::Length(4), Constraint::Min(8)])
            .split(area);

        let top = columns(rows[0], 2);
        let supported: Vec<Line> = SUPPORTED_CHAINS.iter().map(|c| Line::from(format!("• {}", c.label()))).collect();
        f.render_widget(
            Paragraph::new(supported).block(Block::default().borders(Borders::ALL).title(" Supported Chains ")),
            top[0],
        );

        let bold = Style::default().add_modifier(Modifier::BOLD);
        let balances = Table::new(
            MOCK_BALANCES.iter().map(|b| Row::new(vec![Cell::from(b.chain), Cell::from(b.balance)])),
            [Constraint::Percentage(50), Constraint::Percentage(50)],
        )
        .header(Row::new(vec!["Chain", "Balance"]).style(bold))
        .block(Block::default().borders(Borders::ALL).title(" Balances "));
        f.render_widget(balances, top[1]);

        let reviews: Vec<Line> = MOCK_REVIEWS
            .iter()
            .map(|r| {
                Line::from(vec![
                    Span::styled(stars(r.stars), Style::default().fg(Color::Yellow)),
                    Span::raw(format!("  {}  ", r.user_address)),
                    Span::raw(r.text),
                ])
            })
            .collect();
        f.render_widget(
            Paragraph::new(reviews).block(Block::default().borders(Borders::ALL).title(" Reviews ")),
            rows[1],
        );

        let forms = columns(rows[2], 2);
        let mint = Paragraph::new(vec![
            select_line("Chain", &unselected(self.mint.chain), self.focus == Focus::MintChain),
            field_line_text("Amount", &self.mint.amount, self.focus == Focus::MintAmount),
            Line::from(""),
            buttons_line(&[("Mint", self.focus == Focus::MintSubmit, self.mint.can_submit())]),
        ])
        .block(Block::default().borders(Borders::ALL).title(" Mint "));
        f.render_widget(mint, forms[0]);

        let t = &self.transfer;
        let transfer = Paragraph::new(vec![
            select_line("From", &unselected(t.from()), self.focus == Focus::TransferFrom),
            select_line("To", &unselected(t.to()), self.focus == Focus::TransferTo),
            field_line_text("Amount", &t.amount, self.focus == Focus::TransferAmount),
            Line::from(""),
            buttons_line(&[("Transfer", self.focus == Focus::TransferSubmit, t.can_submit())]),
        ])
        .block(Block::default().borders(Borders::ALL).title(" Transfer "));
        f.render_widget(transfer, forms[1]);
    }
}

#[async_trait]
impl ScreenWidget for LookupScreen {
    fn title(&self) -> &str { "Food Meme Lookup" }

    fn draw(&self, f: &mut Frame<'_>, size: Rect, _ctx: &AppCtx) {
        let page = page_layout(size, 1);

        // === HEADER ===
        f.render_widget(Block::default().borders(Borders::ALL), page.header);
        f.render_widget(Paragraph::new(heading(self.title())).alignment(Alignment::Center), page.header_inner);

        // === BODY ===
        f.render_widget(Block::default().borders(Borders::ALL), page.body);
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(page.body_inner);
        self.draw_record(f, cols[0]);
        self.draw_panels(f, cols[1]);

        // === FOOTER ===
        f.render_widget(Block::default().borders(Borders::ALL), page.footer);
        f.render_widget(help_lookup(), page.footer_inner);
    }

    async fn on_key(&mut self, k: KeyEvent, ctx: &mut AppCtx) -> Result<Transition> {
        if k.code == KeyCode::Esc {
            return Ok(Transition::Push(Box::new(ConfirmQuitScreen::new())));
        }
        if let Some(forward) = focus_step(k) {
            self.move_focus(forward);
            return Ok(Transition::Stay);
        }

        let chains = &ctx.config.lookup_chains;
        match self.focus {
            Focus::Recipe => match k.code {
                KeyCode::PageDown => self.recipe_scroll = self.recipe_scroll.saturating_add(5),
                KeyCode::PageUp => self.recipe_scroll = self.recipe_scroll.saturating_sub(5),
                _ => {}
            },
            Focus::MintChain => {
                if let Some(forward) = cycle_step(k) {
                    self.mint.chain = chain::cycle(chains, self.mint.chain, forward);
                }
            }
            Focus::MintAmount => edit_amount(&mut self.mint.amount, k),
            Focus::MintSubmit => {
                if k.code == KeyCode::Enter {
                    self.mint.submit(&mut ctx.toasts);
                }
            }
            Focus::TransferFrom => {
                if let Some(forward) = cycle_step(k) {
                    let next = chain::cycle(chains, self.transfer.from(), forward);
                    self.transfer.set_from(next);
                }
            }
            Focus::TransferTo => {
                if let Some(forward) = cycle_step(k) {
                    let options = self.transfer.to_options(chains);
                    let next = chain::cycle(&options, self.transfer.to(), forward);
                    self.transfer.set_to(next);
                }
            }
            Focus::TransferAmount => edit_amount(&mut self.transfer.amount, k),
            Focus::TransferSubmit => {
                if k.code == KeyCode::Enter {
                    self.transfer.submit(&mut ctx.toasts);
                }
            }
        }
        Ok(Transition::Stay)
    }

    fn on_event(&mut self, event: &AppEvent, ctx: &mut AppCtx) {
        if let AppEvent::LookupDone { ticket, result } = event {
            if self.state.complete_fetch(ticket, result.clone(), &mut ctx.toasts) {
                self.recipe_scroll = 0;
            }
        }
    }
}
