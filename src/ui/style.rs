// style.rs
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use std::borrow::Cow;

use crate::notify::Severity;

pub fn span_key(s: &'static str) -> Span<'static> {
    Span::styled(s, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
}
pub fn span_sep() -> Span<'static> {
    Span::styled("  |  ", Style::default().fg(Color::DarkGray))
}
pub fn span_text(s: &'static str) -> Span<'static> {
    Span::raw(s)
}

/* ---------- buttons: magenta brackets, yellow when selected ---------- */

const ACCENT_BRACKET: Color = Color::Magenta;
const SELECTED_TEXT: Color = Color::Yellow;
const IDLE_TEXT: Color = Color::LightMagenta;

/// Core painter: "< " + LABEL + " >"
pub fn button_spans<S: Into<Cow<'static, str>>>(label: S, selected: bool) -> Vec<Span<'static>> {
    let label = label.into();
    let text = if selected {
        Style::default().fg(SELECTED_TEXT).add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(IDLE_TEXT).add_modifier(Modifier::BOLD)
    };
    vec![
        Span::styled("< ", Style::default().fg(ACCENT_BRACKET).add_modifier(Modifier::BOLD)),
        Span::styled(label, text),
        Span::styled(" >", Style::default().fg(ACCENT_BRACKET).add_modifier(Modifier::BOLD)),
    ]
}

/// Same look, but visually "disabled". Focus still shows as an underline.
pub fn button_spans_disabled<S: Into<Cow<'static, str>>>(label: S, selected: bool) -> Vec<Span<'static>> {
    let label = label.into();
    let mut text = Style::default().fg(Color::Gray);
    if selected {
        text = text.add_modifier(Modifier::UNDERLINED);
    }
    vec![
        Span::styled("< ", Style::default().fg(Color::DarkGray)),
        Span::styled(label, text),
        Span::styled(" >", Style::default().fg(Color::DarkGray)),
    ]
}

/// Buttons separated by three spaces; `(label, selected, enabled)`.
pub fn buttons_line(buttons: &[(&'static str, bool, bool)]) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    for (i, (label, selected, enabled)) in buttons.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        if *enabled {
            spans.extend(button_spans(*label, *selected));
        } else {
            spans.extend(button_spans_disabled(*label, *selected));
        }
    }
    Line::from(spans)
}

pub fn severity_color(s: Severity) -> Color {
    match s {
        Severity::Success => Color::Green,
        Severity::Info => Color::Cyan,
        Severity::Error => Color::Red,
    }
}

pub fn heading(s: &str) -> Line<'static> {
    Line::from(Span::styled(s.to_string(), Style::default().add_modifier(Modifier::BOLD)))
}

pub fn muted(s: &str) -> Span<'static> {
    Span::styled(s.to_string(), Style::default().fg(Color::DarkGray))
}
