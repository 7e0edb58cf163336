use crossterm::event::{KeyCode, KeyEvent};
use crate::app::Transition;

/// Return `Transition::Pop` on Esc so every screen gets "Back" for free.
pub fn esc_to_back(k: KeyEvent) -> Option<Transition> {
    matches!(k.code, KeyCode::Esc).then_some(Transition::Pop)
}

/// Focus movement keys: `Some(true)` forward, `Some(false)` backward.
pub fn focus_step(k: KeyEvent) -> Option<bool> {
    match k.code {
        KeyCode::Down | KeyCode::Tab => Some(true),
        KeyCode::Up | KeyCode::BackTab => Some(false),
        _ => None,
    }
}

/// Next index in `0..len`, wrapping.
pub fn step_index(idx: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward { (idx + 1) % len } else { (idx + len - 1) % len }
}

/// Value-cycling keys on selectors: `Some(true)` next, `Some(false)` previous.
pub fn cycle_step(k: KeyEvent) -> Option<bool> {
    match k.code {
        KeyCode::Right | KeyCode::Char(' ') => Some(true),
        KeyCode::Left => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_wraps() {
        assert_eq!(step_index(0, 3, false), 2);
        assert_eq!(step_index(2, 3, true), 0);
        assert_eq!(step_index(0, 0, true), 0);
    }
}
