use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

/// Header box, body box, one-line footer box.
pub struct Page {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
    pub header_inner: Rect,
    pub body_inner: Rect,
    pub footer_inner: Rect,
}

pub fn page_layout(size: Rect, header_lines: u16) -> Page {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(header_lines + 2),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(size);

    let inner = |r: Rect| r.inner(&Margin { horizontal: 2, vertical: 1 });

    Page {
        header: chunks[0],
        body: chunks[1],
        footer: chunks[2],
        header_inner: inner(chunks[0]),
        body_inner: inner(chunks[1]),
        footer_inner: chunks[2].inner(&Margin { horizontal: 1, vertical: 1 }),
    }
}

/// Split `r` into equal-width columns.
pub fn columns(r: Rect, n: u16) -> Vec<Rect> {
    let n = n.max(1);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, n as u32); n as usize])
        .split(r)
        .to_vec()
}

pub fn centered_rect_abs(width: u16, height: u16, r: Rect) -> Rect {
    let w = width.min(r.width.saturating_sub(2));
    let h = height.min(r.height.saturating_sub(2));
    let x = r.x + (r.width.saturating_sub(w)) / 2;
    let y = r.y + (r.height.saturating_sub(h)) / 2;
    Rect { x, y, width: w, height: h }
}

/// Anchor a `width` x `height` box to the top-right corner of `r`.
pub fn top_right(width: u16, height: u16, r: Rect) -> Rect {
    let w = width.min(r.width);
    let h = height.min(r.height);
    Rect { x: r.x + r.width - w, y: r.y, width: w, height: h }
}
