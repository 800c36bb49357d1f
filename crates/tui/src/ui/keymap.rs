use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Quit,
    ToggleDark,
    ExportCsv,
    ExportPdf,
    NextField,
    PrevField,
    Submit,
    Backspace,
    Up,
    Down,
    DeleteRow,
    Cancel,
    Input(char),
    None,
}

pub fn map_key(key: KeyEvent) -> AppAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => AppAction::Quit,
            KeyCode::Char('d') => AppAction::ToggleDark,
            KeyCode::Char('e') => AppAction::ExportCsv,
            KeyCode::Char('p') => AppAction::ExportPdf,
            _ => AppAction::None,
        };
    }

    match key.code {
        KeyCode::Esc => AppAction::Cancel,
        KeyCode::Tab => AppAction::NextField,
        KeyCode::BackTab => AppAction::PrevField,
        KeyCode::Enter => AppAction::Submit,
        KeyCode::Backspace => AppAction::Backspace,
        KeyCode::Up => AppAction::Up,
        KeyCode::Down => AppAction::Down,
        KeyCode::Delete => AppAction::DeleteRow,
        KeyCode::Char(ch) => AppAction::Input(ch),
        _ => AppAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn control_chords_map_to_commands() {
        assert_eq!(
            map_key(key(KeyCode::Char('d'), KeyModifiers::CONTROL)),
            AppAction::ToggleDark
        );
        assert_eq!(
            map_key(key(KeyCode::Char('e'), KeyModifiers::CONTROL)),
            AppAction::ExportCsv
        );
        assert_eq!(
            map_key(key(KeyCode::Char('p'), KeyModifiers::CONTROL)),
            AppAction::ExportPdf
        );
        assert_eq!(
            map_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            AppAction::Quit
        );
    }

    #[test]
    fn plain_characters_stay_input() {
        assert_eq!(
            map_key(key(KeyCode::Char('d'), KeyModifiers::NONE)),
            AppAction::Input('d')
        );
    }
}
