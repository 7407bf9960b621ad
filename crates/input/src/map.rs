//! Key mapping from terminal events to game actions.

use crate::types::{Category, GameAction, Phase};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions for the current screen.
pub fn handle_key_event(key: KeyEvent, phase: Phase) -> Option<GameAction> {
    match phase {
        Phase::Welcome => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(GameAction::Start),
            _ => None,
        },
        Phase::CategorySelect => match key.code {
            KeyCode::Char(c @ '1'..='3') => {
                let index = c as usize - '1' as usize;
                Some(GameAction::SelectCategory(Category::ALL[index]))
            }
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('B') => {
                Some(GameAction::BackToWelcome)
            }
            _ => None,
        },
        Phase::Playing => match key.code {
            // Cursor
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => {
                Some(GameAction::CursorMove(0, -1))
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => {
                Some(GameAction::CursorMove(0, 1))
            }
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => {
                Some(GameAction::CursorMove(-1, 0))
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => {
                Some(GameAction::CursorMove(1, 0))
            }

            // Selection
            KeyCode::Char(' ') | KeyCode::Enter => Some(GameAction::CursorToggle),
            KeyCode::Esc => Some(GameAction::CursorCancel),

            // Navigation
            KeyCode::Char('n') | KeyCode::Char('N') => Some(GameAction::NewPuzzle),
            KeyCode::Char('b') | KeyCode::Char('B') => Some(GameAction::BackToWelcome),

            _ => None,
        },
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
