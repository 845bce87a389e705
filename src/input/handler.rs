use crate::app::AppState;
use crate::domain::{DraftField, Tab, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::env;
use std::fs;
use std::process::Command;
use tempfile::NamedTempFile;
use tracing::warn;

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::Form => handle_form_mode(app, key),
    }
}

/// Whether this key should suspend the terminal and open $EDITOR for notes
pub fn is_external_edit_key(app: &AppState, key: &KeyEvent) -> bool {
    app.ui_mode == UiMode::Form
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('e') | KeyCode::Char('E'))
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Navigation
        KeyCode::Up => {
            if app.tab == Tab::Activities {
                app.move_selection_up();
            }
            Ok(false)
        }
        KeyCode::Down => {
            if app.tab == Tab::Activities {
                app.move_selection_down();
            }
            Ok(false)
        }
        KeyCode::Left => {
            if app.tab == Tab::Calendar {
                app.select_prev_day();
            }
            Ok(false)
        }
        KeyCode::Right => {
            if app.tab == Tab::Calendar {
                app.select_next_day();
            }
            Ok(false)
        }

        // Tabs
        KeyCode::Tab | KeyCode::BackTab => {
            app.toggle_tab();
            Ok(false)
        }
        KeyCode::Char('1') => {
            app.switch_tab(Tab::Activities);
            Ok(false)
        }
        KeyCode::Char('2') => {
            app.switch_tab(Tab::Calendar);
            Ok(false)
        }

        // Focus the form (add new or continue the current draft)
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('i') | KeyCode::Char('I') => {
            app.focus_form();
            Ok(false)
        }

        // Edit selected activity
        KeyCode::Char('e') | KeyCode::Char('E') => {
            if app.tab == Tab::Activities {
                app.start_edit_selected();
            }
            Ok(false)
        }

        // Delete selected activity
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => {
            if app.tab == Tab::Activities {
                app.delete_selected();
            }
            Ok(false)
        }

        // Cancel the current draft
        KeyCode::Char('c') | KeyCode::Char('C') => {
            app.cancel_form();
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys while typing into the activity form
fn handle_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Add or save
        KeyCode::Enter => {
            app.submit_form();
            Ok(false)
        }

        // Leave the form, keep the draft
        KeyCode::Esc => {
            app.blur_form();
            Ok(false)
        }

        // Switch fields
        KeyCode::Tab | KeyCode::Down => {
            app.form.focus_next();
            Ok(false)
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.form.focus_prev();
            Ok(false)
        }

        // Date picker
        KeyCode::Right if app.form.focus == DraftField::Date => {
            let trip = app.trip;
            app.form.date_forward(&trip);
            Ok(false)
        }
        KeyCode::Left if app.form.focus == DraftField::Date => {
            let trip = app.trip;
            app.form.date_back(&trip);
            Ok(false)
        }

        // Discard the draft
        KeyCode::Char('x') | KeyCode::Char('X') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.cancel_form();
            Ok(false)
        }

        // Backspace
        KeyCode::Backspace => {
            app.form.backspace();
            Ok(false)
        }

        // Add character (without Ctrl modifier so Ctrl+E reaches the editor hook)
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.form.push_char(c);
            Ok(false)
        }

        _ => Ok(false),
    }
}

/// Edit the draft's notes using external $EDITOR
pub fn edit_notes_external(app: &mut AppState) -> Result<()> {
    // Get editor from environment, default to vi
    let editor = env::var("EDITOR").unwrap_or_else(|_| {
        if cfg!(windows) {
            "notepad".to_string()
        } else {
            "vi".to_string()
        }
    });

    // Create temp file with current notes
    let mut temp_file = NamedTempFile::new()?;
    std::io::Write::write_all(&mut temp_file, app.form.draft.notes.as_bytes())?;
    let temp_path = temp_file.into_temp_path();

    let status = Command::new(&editor).arg(&temp_path).status()?;

    if status.success() {
        let edited_notes = fs::read_to_string(&temp_path)?;
        app.set_draft_notes(edited_notes);
    } else {
        warn!(%editor, ?status, "editor exited with failure, notes unchanged");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::domain::FormPhase;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn create_test_app() -> AppState {
        AppState::new(AppConfig::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_key(app, key(KeyCode::Char(c))).unwrap();
        }
    }

    /// Fill name and cost from an idle form and submit
    fn add_via_keys(app: &mut AppState, name: &str, cost: &str) {
        handle_key(app, key(KeyCode::Char('a'))).unwrap();
        type_text(app, name);
        handle_key(app, key(KeyCode::Tab)).unwrap();
        type_text(app, cost);
        handle_key(app, key(KeyCode::Enter)).unwrap();
    }

    #[test]
    fn test_handle_quit() {
        let mut app = create_test_app();
        let should_quit = handle_key(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(should_quit);
    }

    #[test]
    fn test_q_is_text_inside_form() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('a'))).unwrap();
        let should_quit = handle_key(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(!should_quit);
        assert_eq!(app.form.draft.name, "q");
    }

    #[test]
    fn test_handle_add_activity() {
        let mut app = create_test_app();

        handle_key(&mut app, key(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::Form);
        assert_eq!(app.form.phase, FormPhase::Idle);

        type_text(&mut app, "Zip-lining");
        assert_eq!(app.form.phase, FormPhase::Creating);
        handle_key(&mut app, key(KeyCode::Tab)).unwrap();
        type_text(&mut app, "85");
        handle_key(&mut app, key(KeyCode::Tab)).unwrap();
        // Date picker starts at the first trip day
        handle_key(&mut app, key(KeyCode::Right)).unwrap();
        handle_key(&mut app, key(KeyCode::Right)).unwrap();
        handle_key(&mut app, key(KeyCode::Right)).unwrap();
        handle_key(&mut app, key(KeyCode::Tab)).unwrap();
        type_text(&mut app, "Anfi del Mar");

        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.form.phase, FormPhase::Idle);
        assert_eq!(app.store.len(), 1);

        let activity = &app.store.as_slice()[0];
        assert_eq!(activity.name, "Zip-lining");
        assert_eq!(activity.cost, 85.0);
        assert_eq!(activity.date, NaiveDate::from_ymd_opt(2024, 9, 19));
        assert_eq!(activity.location, "Anfi del Mar");
    }

    #[test]
    fn test_invalid_add_keeps_form_open() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('a'))).unwrap();
        type_text(&mut app, "Spa");
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();

        assert!(app.store.is_empty());
        assert_eq!(app.ui_mode, UiMode::Form);
        assert_eq!(app.form.draft.name, "Spa");
    }

    #[test]
    fn test_escape_keeps_draft_and_cancel_clears_it() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('a'))).unwrap();
        type_text(&mut app, "Half");
        handle_key(&mut app, key(KeyCode::Esc)).unwrap();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.form.draft.name, "Half");
        assert_eq!(app.form.phase, FormPhase::Creating);

        handle_key(&mut app, key(KeyCode::Char('c'))).unwrap();
        assert!(app.form.draft.is_empty());
        assert_eq!(app.form.phase, FormPhase::Idle);
    }

    #[test]
    fn test_handle_edit_and_save() {
        let mut app = create_test_app();
        add_via_keys(&mut app, "Beach", "10");
        let id = app.store.as_slice()[0].id;

        handle_key(&mut app, key(KeyCode::Char('e'))).unwrap();
        assert_eq!(app.form.phase, FormPhase::Editing(id));
        assert_eq!(app.form.draft.cost, "10");

        handle_key(&mut app, key(KeyCode::Tab)).unwrap();
        handle_key(&mut app, key(KeyCode::Backspace)).unwrap();
        handle_key(&mut app, key(KeyCode::Backspace)).unwrap();
        type_text(&mut app, "25");
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();

        assert_eq!(app.form.phase, FormPhase::Idle);
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.get(id).unwrap().cost, 25.0);
    }

    #[test]
    fn test_ctrl_x_cancels_edit_from_form() {
        let mut app = create_test_app();
        add_via_keys(&mut app, "Beach", "10");
        handle_key(&mut app, key(KeyCode::Char('e'))).unwrap();
        type_text(&mut app, " party");

        let ctrl_x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL);
        handle_key(&mut app, ctrl_x).unwrap();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.form.phase, FormPhase::Idle);
        assert_eq!(app.store.as_slice()[0].name, "Beach");
    }

    #[test]
    fn test_handle_delete() {
        let mut app = create_test_app();
        add_via_keys(&mut app, "Beach", "10");
        add_via_keys(&mut app, "Dinner", "40");
        assert_eq!(app.store.len(), 2);

        handle_key(&mut app, key(KeyCode::Char('x'))).unwrap();
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.as_slice()[0].name, "Beach");

        handle_key(&mut app, key(KeyCode::Delete)).unwrap();
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_tab_switching() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('2'))).unwrap();
        assert_eq!(app.tab, Tab::Calendar);

        handle_key(&mut app, key(KeyCode::Right)).unwrap();
        assert_eq!(app.selected_day, 1);

        handle_key(&mut app, key(KeyCode::Tab)).unwrap();
        assert_eq!(app.tab, Tab::Activities);
    }

    #[test]
    fn test_external_edit_key_only_in_form() {
        let mut app = create_test_app();
        let ctrl_e = KeyEvent::new(KeyCode::Char('e'), KeyModifiers::CONTROL);
        assert!(!is_external_edit_key(&app, &ctrl_e));

        app.focus_form();
        assert!(is_external_edit_key(&app, &ctrl_e));
        assert!(!is_external_edit_key(&app, &key(KeyCode::Char('e'))));
    }
}
