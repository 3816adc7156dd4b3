use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::types::{AppEvent, EventResult};
use crate::app::App;
use crate::data::SortKey;

/// Handle an application event
pub fn handle_event(app: &mut App, event: AppEvent) -> EventResult {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Tick => {
            app.refresh();
            EventResult::Continue
        }
        AppEvent::Resize(_, _) => {
            // UI will handle resize automatically
            EventResult::Continue
        }
        AppEvent::Quit => EventResult::Exit,
    }
}

/// Handle a key event, returns EventResult
pub fn handle_key(app: &mut App, key: KeyEvent) -> EventResult {
    if app.confirm.is_some() {
        return handle_confirm_key(app, key);
    }
    if app.search_active {
        return handle_search_key(app, key);
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => EventResult::Exit,
        KeyCode::Char('q') => EventResult::Exit,
        KeyCode::Up => {
            app.move_selection(-1);
            EventResult::Continue
        }
        KeyCode::Down => {
            app.move_selection(1);
            EventResult::Continue
        }
        KeyCode::Left => {
            app.set_sort_key(app.sort_key.prev());
            EventResult::Continue
        }
        KeyCode::Right => {
            app.set_sort_key(app.sort_key.next());
            EventResult::Continue
        }
        KeyCode::Char(' ') => {
            app.toggle_sort_dir();
            EventResult::Continue
        }
        KeyCode::Tab => {
            app.toggle_focus();
            EventResult::Continue
        }
        KeyCode::Enter => {
            app.open_confirm();
            EventResult::Continue
        }
        KeyCode::Char('/') => {
            app.begin_search();
            EventResult::Continue
        }
        KeyCode::Char('c') => {
            app.set_sort_key(SortKey::Cpu);
            EventResult::Continue
        }
        KeyCode::Char('m') => {
            app.set_sort_key(SortKey::Memory);
            EventResult::Continue
        }
        KeyCode::Char('p') => {
            app.set_sort_key(SortKey::Pid);
            EventResult::Continue
        }
        KeyCode::Char('n') => {
            app.set_sort_key(SortKey::Name);
            EventResult::Continue
        }
        KeyCode::Char('r') => {
            app.refresh();
            EventResult::Continue
        }
        _ => EventResult::Continue,
    }
}

fn handle_confirm_key(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => EventResult::Exit,
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('q') => {
            app.cancel_confirm();
            EventResult::Continue
        }
        KeyCode::Enter | KeyCode::Char('y') => {
            app.confirm_terminate();
            EventResult::Continue
        }
        _ => EventResult::Continue,
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => EventResult::Exit,
        KeyCode::Esc => {
            app.cancel_search();
            EventResult::Continue
        }
        KeyCode::Enter => {
            app.end_search();
            EventResult::Continue
        }
        KeyCode::Backspace => {
            app.pop_search_char();
            EventResult::Continue
        }
        KeyCode::Char(ch) => {
            app.push_search_char(ch);
            EventResult::Continue
        }
        _ => EventResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_app;
    use crate::data::ProcessRecord;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn seeded_app() -> App {
        let mut app = test_app();
        app.processes = vec![ProcessRecord {
            pid: 1234,
            name: "bash".to_string(),
            cpu: 1.0,
            memory: 0.5,
            status: "running".to_string(),
        }];
        handle_event(&mut app, AppEvent::Resize(120, 40));
        app
    }

    #[test]
    fn quit_keys_exit() {
        let mut app = seeded_app();
        assert!(handle_key(&mut app, key(KeyCode::Char('q'))).should_exit());
        assert!(
            handle_key(
                &mut app,
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
            )
            .should_exit()
        );
    }

    #[test]
    fn declined_confirm_issues_nothing() {
        let mut app = seeded_app();
        handle_key(&mut app, key(KeyCode::Down));
        handle_key(&mut app, key(KeyCode::Enter));
        assert!(app.confirm.is_some());

        handle_key(&mut app, key(KeyCode::Esc));
        assert!(app.confirm.is_none());
        assert_eq!(app.gates.processes.issued(), 0);
        assert_eq!(app.processes.len(), 1);
    }

    #[test]
    fn search_mode_captures_characters() {
        let mut app = seeded_app();
        handle_key(&mut app, key(KeyCode::Char('/')));
        assert!(app.search_active);

        // 'q' must edit the query, not quit.
        assert_eq!(
            handle_key(&mut app, key(KeyCode::Char('q'))),
            EventResult::Continue
        );
        assert_eq!(app.search_query, "q");

        handle_key(&mut app, key(KeyCode::Backspace));
        handle_key(&mut app, key(KeyCode::Char('3')));
        handle_key(&mut app, key(KeyCode::Char('4')));
        handle_key(&mut app, key(KeyCode::Enter));
        assert!(!app.search_active);
        assert_eq!(app.search_query, "34");
        assert_eq!(app.visible_processes().len(), 1);
    }

    #[test]
    fn tick_event_issues_a_refresh_cycle() {
        let mut app = seeded_app();
        handle_event(&mut app, AppEvent::Tick);
        assert_eq!(app.gates.stats.issued(), 1);
        assert_eq!(app.gates.history.issued(), 1);
    }

    #[test]
    fn sort_keys_reorder_without_touching_snapshot() {
        let mut app = seeded_app();
        handle_key(&mut app, key(KeyCode::Char('p')));
        assert_eq!(app.sort_key, SortKey::Pid);
        handle_key(&mut app, key(KeyCode::Char(' ')));
        assert_eq!(app.processes.len(), 1);
    }
}
