use crate::ui::app::{App, Focus};
use crate::ui::counter::CounterIntent;
use crate::ui::roster::RosterIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Quit works from any focus
    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.focus() {
        Focus::Roster => handle_roster_key(app, key),
        Focus::Search => handle_search_key(app, key),
        Focus::Amount => handle_amount_key(app, key),
    }
}

fn handle_roster_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Right => {
            app.dispatch_roster(RosterIntent::SelectNext)
        }
        KeyCode::Char('k') | KeyCode::Up | KeyCode::Left => {
            app.dispatch_roster(RosterIntent::SelectPrev)
        }
        KeyCode::Enter => app.toggle_selected(),
        KeyCode::Char('/') => app.set_focus(Focus::Search),
        KeyCode::Char('n') => app.set_focus(Focus::Amount),
        KeyCode::Char('r') => app.dispatch_counter(CounterIntent::IncrementRandom),
        KeyCode::Char('o') => app.dispatch_counter(CounterIntent::IncrementToNextOdd),
        KeyCode::Char('d') => app.decrement_by_amount(),
        KeyCode::Char('c') => app.reset_counter(),
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.set_focus(Focus::Roster),
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.push_search_char(c)
        }
        _ => {}
    }
}

fn handle_amount_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.set_focus(Focus::Roster),
        KeyCode::Backspace => app.pop_amount_char(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.push_amount_char(c)
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
