use ratatui::{
    text::Line,
    widgets::{Paragraph, Wrap},
};

use super::style::{span_key, span_sep, span_text};

pub fn help_generate<'a>() -> Paragraph<'a> {
    let line = Line::from(vec![
        span_key("↑/↓/Tab"), span_text(" Move"), span_sep(),
        span_key("Enter"), span_text(" Select / Generate"), span_sep(),
        span_key("←/→/Home/End"), span_text(" Cursor"), span_sep(),
        span_key("PgUp/PgDn"), span_text(" Scroll recipe"), span_sep(),
        span_key("Esc"), span_text(" Quit"),
    ]);
    Paragraph::new(line).wrap(Wrap { trim: true })
}

pub fn help_launch<'a>() -> Paragraph<'a> {
    let line = Line::from(vec![
        span_key("↑/↓/Tab"), span_text(" Move"), span_sep(),
        span_key("←/→/Space"), span_text(" Change selection"), span_sep(),
        span_key("Enter"), span_text(" Press button"), span_sep(),
        span_key("Backspace/Delete"), span_text(" Edit"), span_sep(),
        span_key("Esc"), span_text(" Back"), span_sep(),
        span_key("Ctrl+Q"), span_text(" Quit"),
    ]);
    Paragraph::new(line).wrap(Wrap { trim: true })
}

pub fn help_lookup<'a>() -> Paragraph<'a> {
    let line = Line::from(vec![
        span_key("↑/↓/Tab"), span_text(" Move"), span_sep(),
        span_key("←/→/Space"), span_text(" Change chain"), span_sep(),
        span_key("Enter"), span_text(" Submit"), span_sep(),
        span_key("PgUp/PgDn"), span_text(" Scroll recipe"), span_sep(),
        span_key("Esc"), span_text(" Quit"),
    ]);
    Paragraph::new(line).wrap(Wrap { trim: true })
}
