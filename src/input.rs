//! Key bindings for both scenes.

use crate::view::Scene;
use crossterm::event::KeyCode;

/// Everything a key press can ask the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    // Main scene buttons
    Start,
    Pause,
    Reset,
    GoToTitle,
    // Title scene
    GoToMain,
    RequestDataReset,
    ConfirmDataReset,
    CancelDataReset,
    Quit,
}

/// Maps a key to an action for the current scene. While the reset-data
/// confirmation is showing, only y/n/Esc are accepted.
pub fn map_key(scene: Scene, confirming_reset: bool, code: KeyCode) -> Option<InputAction> {
    if confirming_reset {
        return match code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(InputAction::ConfirmDataReset),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                Some(InputAction::CancelDataReset)
            }
            _ => None,
        };
    }

    match scene {
        Scene::Title => match code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(InputAction::GoToMain),
            KeyCode::Char('x') | KeyCode::Char('X') => Some(InputAction::RequestDataReset),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(InputAction::Quit),
            _ => None,
        },
        Scene::Main => match code {
            KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char(' ') => {
                Some(InputAction::Start)
            }
            KeyCode::Char('p') | KeyCode::Char('P') => Some(InputAction::Pause),
            KeyCode::Char('r') | KeyCode::Char('R') => Some(InputAction::Reset),
            KeyCode::Char('t') | KeyCode::Char('T') | KeyCode::Esc => {
                Some(InputAction::GoToTitle)
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(InputAction::Quit),
            _ => None,
        },
    }
}
