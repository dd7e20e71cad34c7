//! Keyboard input handling

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    Quit,
    /// A key press named the way the game's bindings expect
    Key(String),
}

/// Translate a terminal key event into a host command
pub fn translate(event: &KeyEvent) -> Option<HostCommand> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return match event.code {
            KeyCode::Char('c') => Some(HostCommand::Quit),
            _ => None,
        };
    }
    match event.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(HostCommand::Quit),
        KeyCode::Up => Some(HostCommand::Key("Up".to_owned())),
        KeyCode::Down => Some(HostCommand::Key("Down".to_owned())),
        KeyCode::Char(c) => Some(HostCommand::Key(c.to_string())),
        _ => None,
    }
}
