use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Single-buffer text input. `cursor` counts chars, not bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    pub text: String,
    pub cursor: usize,
}

impl TextField {
    pub fn with(text: &str) -> Self {
        Self { text: text.into(), cursor: text.chars().count() }
    }

    fn len(&self) -> usize { self.text.chars().count() }

    fn byte_at(&self, idx: usize) -> usize {
        self.text.char_indices().nth(idx).map(|(i, _)| i).unwrap_or(self.text.len())
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_at(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_at(self.cursor);
            self.text.remove(at);
        }
    }
    pub fn delete(&mut self) {
        if self.cursor < self.len() {
            let at = self.byte_at(self.cursor);
            self.text.remove(at);
        }
    }
    pub fn move_left(&mut self) { if self.cursor > 0 { self.cursor -= 1; } }
    pub fn move_right(&mut self) { if self.cursor < self.len() { self.cursor += 1; } }
    pub fn home(&mut self) { self.cursor = 0; }
    pub fn end(&mut self) { self.cursor = self.len(); }

    pub fn set(&mut self, text: &str) {
        *self = Self::with(text);
    }
}

/// Editing keys shared by every text input. Returns false if the key is not an edit key.
pub fn edit_text(tf: &mut TextField, key: crossterm::event::KeyEvent) -> bool {
    use crossterm::event::{KeyCode, KeyModifiers};
    match key.code {
        KeyCode::Left => tf.move_left(),
        KeyCode::Right => tf.move_right(),
        KeyCode::Home => tf.home(),
        KeyCode::End => tf.end(),
        KeyCode::Backspace => tf.backspace(),
        KeyCode::Delete => tf.delete(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => tf.insert_char(c),
        _ => return false,
    }
    true
}

fn cursor_block(s: &str) -> Span<'static> {
    Span::styled(
        s.to_string(),
        Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD),
    )
}

fn label_span(label: &str) -> Span<'static> {
    Span::styled(format!("{label}: "), Style::default().fg(Color::Yellow))
}

/// Split `s` at char index `idx`, returning (before, char at idx, after).
fn split_cursor(s: &str, idx: usize) -> (&str, Option<char>, &str) {
    let at = s.char_indices().nth(idx).map(|(i, _)| i).unwrap_or(s.len());
    let (left, rest) = s.split_at(at);
    match rest.chars().next() {
        Some(ch) => (left, Some(ch), &rest[ch.len_utf8()..]),
        None => (left, None, ""),
    }
}

// Bash-style block cursor that covers the char (no shifting)
pub fn field_line_text<'a>(label: &str, field: &TextField, focused: bool) -> Line<'a> {
    let text = field.text.as_str();

    if !focused {
        return Line::from(vec![label_span(label), Span::raw(text.to_string())]);
    }

    let (left, ch, after) = split_cursor(text, field.cursor);
    match ch {
        Some(ch) => Line::from(vec![
            label_span(label),
            Span::raw(left.to_string()),
            cursor_block(&ch.to_string()),
            Span::raw(after.to_string()),
        ]),
        None => Line::from(vec![label_span(label), Span::raw(left.to_string()), cursor_block(" ")]),
    }
}

/// Multi-line rendering of a field whose text may contain '\n'.
pub fn text_area_lines(field: &TextField, focused: bool) -> Vec<Line<'static>> {
    let mut out = Vec::new();
    let mut start = 0usize;
    for raw in field.text.split('\n') {
        let len = raw.chars().count();
        let cursor_here = focused && field.cursor >= start && field.cursor <= start + len;
        if cursor_here {
            let (left, ch, after) = split_cursor(raw, field.cursor - start);
            let mut spans = vec![Span::raw(left.to_string())];
            match ch {
                Some(ch) => {
                    spans.push(cursor_block(&ch.to_string()));
                    spans.push(Span::raw(after.to_string()));
                }
                None => spans.push(cursor_block(" ")),
            }
            out.push(Line::from(spans));
        } else {
            out.push(Line::from(raw.to_string()));
        }
        start += len + 1;
    }
    out
}

/// "Label: < value >" selector row; arrows cycle the value.
pub fn select_line<'a>(label: &str, value: &str, focused: bool) -> Line<'a> {
    let val_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let (l, r) = if focused { ("◀ ", " ▶") } else { ("", "") };
    Line::from(vec![
        label_span(label),
        Span::styled(l, Style::default().fg(Color::DarkGray)),
        Span::styled(value.to_string(), val_style),
        Span::styled(r, Style::default().fg(Color::DarkGray)),
    ])
}

/// Read-only "Label: value" row.
pub fn value_line<'a>(label: &str, value: &str) -> Line<'a> {
    Line::from(vec![label_span(label), Span::raw(value.to_string())])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_multibyte_text_keeps_char_boundaries() {
        let mut tf = TextField::with("añb");
        assert_eq!(tf.cursor, 3);
        tf.move_left();
        tf.backspace();
        assert_eq!(tf.text, "ab");
        tf.insert_char('é');
        assert_eq!(tf.text, "aéb");
        tf.home();
        tf.delete();
        assert_eq!(tf.text, "éb");
    }

    #[test]
    fn text_area_puts_cursor_on_the_right_line() {
        let mut tf = TextField::with("ab\ncd");
        tf.cursor = 2; // on the newline, end of first line
        let lines = text_area_lines(&tf, true);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].spans.len(), 2);
        assert_eq!(lines[1].spans.len(), 1);
    }
}
