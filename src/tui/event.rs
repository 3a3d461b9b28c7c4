use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use log::{debug, warn};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    Quit,
    Submit,
    ToggleImageBox, // Ctrl+P
    RefreshFeed,    // Ctrl+R

    // TUI-local events (handled directly in TUI)
    InputChar(char),
    Paste(String),
    Backspace,
    Delete,
    DeleteWord, // Ctrl+W
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    NextField,
    PrevField,
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            warn!("Event poll failed: {e}");
            return None;
        }
    }
    let event = match event::read() {
        Ok(event) => event,
        Err(e) => {
            warn!("Event read failed: {e}");
            return None;
        }
    };
    match event {
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
            debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            map_key(key_event.modifiers, key_event.code)
        }
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn map_key(modifiers: KeyModifiers, code: KeyCode) -> Option<TuiEvent> {
    match (modifiers, code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        (KeyModifiers::CONTROL, KeyCode::Char('p')) => Some(TuiEvent::ToggleImageBox),
        (KeyModifiers::CONTROL, KeyCode::Char('r')) => Some(TuiEvent::RefreshFeed),
        (KeyModifiers::CONTROL, KeyCode::Char('w')) => Some(TuiEvent::DeleteWord),
        (KeyModifiers::CONTROL, KeyCode::Char('a')) => Some(TuiEvent::CursorHome),
        (KeyModifiers::CONTROL, KeyCode::Char('e')) => Some(TuiEvent::CursorEnd),
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            Some(TuiEvent::InputChar(c))
        }
        (_, KeyCode::Char(_)) | (KeyModifiers::CONTROL, _) => None,
        (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
        (_, KeyCode::Delete) => Some(TuiEvent::Delete),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        (_, KeyCode::Esc) => Some(TuiEvent::Quit),
        (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
        (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
        (_, KeyCode::Home) => Some(TuiEvent::CursorHome),
        (_, KeyCode::End) => Some(TuiEvent::CursorEnd),
        (_, KeyCode::Tab) | (_, KeyCode::Down) => Some(TuiEvent::NextField),
        (_, KeyCode::BackTab) | (_, KeyCode::Up) => Some(TuiEvent::PrevField),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_shortcuts() {
        assert_eq!(map_key(KeyModifiers::CONTROL, KeyCode::Char('p')), Some(TuiEvent::ToggleImageBox));
        assert_eq!(map_key(KeyModifiers::CONTROL, KeyCode::Char('c')), Some(TuiEvent::Quit));
        assert_eq!(map_key(KeyModifiers::CONTROL, KeyCode::Char('x')), None);
    }

    #[test]
    fn test_shifted_chars_are_input() {
        assert_eq!(map_key(KeyModifiers::SHIFT, KeyCode::Char('H')), Some(TuiEvent::InputChar('H')));
    }

    #[test]
    fn test_modified_chars_are_not_typed() {
        assert_eq!(map_key(KeyModifiers::ALT, KeyCode::Char('x')), None);
        assert_eq!(
            map_key(KeyModifiers::CONTROL | KeyModifiers::SHIFT, KeyCode::Char('X')),
            None
        );
        assert_eq!(map_key(KeyModifiers::NONE, KeyCode::Char('x')), Some(TuiEvent::InputChar('x')));
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(map_key(KeyModifiers::NONE, KeyCode::Tab), Some(TuiEvent::NextField));
        assert_eq!(map_key(KeyModifiers::SHIFT, KeyCode::BackTab), Some(TuiEvent::PrevField));
        assert_eq!(map_key(KeyModifiers::NONE, KeyCode::Enter), Some(TuiEvent::Submit));
    }
}
