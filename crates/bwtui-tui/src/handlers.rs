//! Keyboard event handling.

use crate::app::{App, Effect, Field, Focus};
use bwtui_core::{Action, ClipboardSink};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Handle a key event. Returns the side effect to run, if any.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Option<Effect> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl+C quits from anywhere
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return dispatch(app, Action::Quit);
    }

    match app.focus {
        Focus::List => handle_list_key(app, key),
        Focus::Filter => {
            handle_filter_key(app, key);
            None
        }
        Focus::Details => handle_details_key(app, key),
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) -> Option<Effect> {
    let action = match key.code {
        KeyCode::Enter => Action::OpenDetails,
        KeyCode::Esc => Action::DismissMessage,
        KeyCode::Up => Action::MoveUp,
        KeyCode::Down => Action::MoveDown,
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.keys.list_action(c)?
        }
        _ => return None,
    };
    dispatch(app, action)
}

fn handle_filter_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Tab | KeyCode::Up | KeyCode::Down => {
            app.focus_list();
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.set_filter_text(String::new());
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.push_filter_char(c);
        }
        KeyCode::Backspace => app.pop_filter_char(),
        _ => {}
    }
}

fn handle_details_key(app: &mut App, key: KeyEvent) -> Option<Effect> {
    let action = match key.code {
        KeyCode::Esc | KeyCode::Enter => Action::CloseDetails,
        KeyCode::Char(c) => app.keys.details_action(c)?,
        _ => return None,
    };
    dispatch(app, action)
}

/// Apply `action` to the application state.
pub fn dispatch(app: &mut App, action: Action) -> Option<Effect> {
    tracing::trace!("Dispatching {}", action);
    match action {
        Action::FocusFilter => app.focus_filter(),
        Action::ClearFilter => app.clear_filter(),
        Action::MoveUp => app.move_up(),
        Action::MoveDown => app.move_down(),
        Action::CopyPassword => return app.copy(Field::Password),
        Action::CopyUsername => return app.copy(Field::Username),
        Action::OpenDetails => app.open_details(),
        Action::ToggleReveal => app.toggle_reveal(),
        Action::CloseDetails => app.close_details(),
        Action::DismissMessage => app.feedback.dismiss(),
        Action::Quit => app.quit(),
    }
    None
}

/// Run a side effect and report the outcome on the feedback line.
pub fn run_effect(app: &mut App, clipboard: &mut dyn ClipboardSink, effect: Effect) {
    match effect {
        Effect::Copy { field, text } => match clipboard.set_text(&text) {
            Ok(()) => app.feedback.post(format!("{field} copied to clipboard")),
            Err(e) => {
                tracing::warn!("Copying {} failed: {}", field, e);
                app.feedback.post(format!("copy failed: {e}"));
            }
        },
    }
}
