use crate::ui::app::{App, Focus};
use crate::ui::form::{FormField, FormIntent};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    // The alert blocks everything else until acknowledged.
    if app.alert().is_visible() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.dismiss_alert();
        }
        return;
    }

    match key.code {
        KeyCode::Tab => return app.focus_next(),
        KeyCode::BackTab => return app.focus_prev(),
        _ => {}
    }

    match app.focus() {
        Focus::Form => handle_form_key(app, key),
        Focus::Table => handle_table_key(app, key),
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    let focused = app.form().focused;
    match key.code {
        KeyCode::Enter => app.submit(Instant::now()),
        KeyCode::Down => app.focus_next(),
        KeyCode::Up => app.focus_prev(),
        KeyCode::Backspace => app.dispatch_form(FormIntent::Backspace),
        KeyCode::Right => app.dispatch_form(FormIntent::NextOption),
        KeyCode::Left => app.dispatch_form(FormIntent::PrevOption),
        KeyCode::Char(' ') if focused == FormField::Disability => {
            app.dispatch_form(FormIntent::ToggleDisability)
        }
        KeyCode::Char(' ') if focused == FormField::Submit => app.submit(Instant::now()),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_form(FormIntent::InsertChar(ch))
        }
        _ => {}
    }
}

fn handle_table_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.select_prev_row(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_row(),
        KeyCode::Char('e') | KeyCode::Enter => app.request_edit(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
