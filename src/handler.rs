use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use crate::app::{App, InputMode};
use crate::tui::AppEvent;

/// Convert a character index to a byte index for UTF-8 safe string operations
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

pub fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Mouse(mouse) => handle_mouse(app, mouse),
        AppEvent::Resize(_, _) => {}
        AppEvent::Tick => app.tick_animation(),
        AppEvent::Reply(reply) => app.on_reply(reply),
        AppEvent::Speech(event) => app.on_speech_event(event),
        AppEvent::Location(outcome) => app.on_location(outcome),
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Global keys that work in any mode
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Editing => handle_editing_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        // Quit
        KeyCode::Char('q') => app.should_quit = true,

        // Focus the input field
        KeyCode::Char('i') | KeyCode::Char('/') => {
            app.input_mode = InputMode::Editing;
            app.cursor = app.input.chars().count();
        }

        // Voice input; this guard is the UI-level disable while a
        // session or a reply is already running
        KeyCode::Char('v') => {
            if !app.listening && !app.conversation.is_pending() {
                app.start_listening();
            }
        }

        // Language toggle
        KeyCode::Char('l') => app.toggle_language(),

        // Suggestion chips of the latest assistant message
        KeyCode::Char('1') => app.apply_suggestion(0),
        KeyCode::Char('2') => app.apply_suggestion(1),
        KeyCode::Char('3') => app.apply_suggestion(2),

        // Transcript scrolling
        KeyCode::Char('j') | KeyCode::Down => app.scroll_down(),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_up(),
        KeyCode::Char('g') => app.scroll_to_top(),
        KeyCode::Char('G') => app.scroll_to_latest(),

        _ => {}
    }
}

fn handle_editing_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Enter => {
            if !app.input.trim().is_empty() && !app.conversation.is_pending() {
                app.submit_query();
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Backspace => {
            if app.cursor > 0 {
                app.cursor -= 1;
                let byte_pos = char_to_byte_index(&app.input, app.cursor);
                app.input.remove(byte_pos);
            }
        }
        KeyCode::Delete => {
            let char_count = app.input.chars().count();
            if app.cursor < char_count {
                let byte_pos = char_to_byte_index(&app.input, app.cursor);
                app.input.remove(byte_pos);
            }
        }
        KeyCode::Left => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        KeyCode::Right => {
            let char_count = app.input.chars().count();
            app.cursor = (app.cursor + 1).min(char_count);
        }
        KeyCode::Home => {
            app.cursor = 0;
        }
        KeyCode::End => {
            app.cursor = app.input.chars().count();
        }
        KeyCode::Char(c) => {
            let byte_pos = char_to_byte_index(&app.input, app.cursor);
            app.input.insert(byte_pos, c);
            app.cursor += 1;
        }
        _ => {}
    }
}

/// Check if a point is within a rectangle
fn point_in_rect(x: u16, y: u16, rect: Rect) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let x = mouse.column;
    let y = mouse.row;

    let in_transcript = app
        .transcript_area
        .map(|r| point_in_rect(x, y, r))
        .unwrap_or(false);

    match mouse.kind {
        MouseEventKind::ScrollDown => {
            if in_transcript {
                app.scroll_down();
                app.scroll_down();
                app.scroll_down();
            }
        }
        MouseEventKind::ScrollUp => {
            if in_transcript {
                app.scroll_up();
                app.scroll_up();
                app.scroll_up();
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::sync::mpsc;
    use crate::language::Language;

    fn test_app() -> App {
        let (tx, _rx) = mpsc::unbounded_channel();
        App::new(Language::En, Duration::ZERO, None, None, tx)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[tokio::test]
    async fn test_enter_submits_and_leaves_editing() {
        let mut app = test_app();
        app.input_mode = InputMode::Editing;
        for c in "level?".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert!(app.conversation.is_pending());
        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(app.input.is_empty());
        assert_eq!(app.cursor, 0);
    }

    #[tokio::test]
    async fn test_enter_on_blank_input_stays_in_editing() {
        let mut app = test_app();
        app.input_mode = InputMode::Editing;
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Enter);
        assert!(!app.conversation.is_pending());
        assert_eq!(app.input_mode, InputMode::Editing);
    }

    #[test]
    fn test_voice_key_ignored_while_pending() {
        let mut app = test_app();
        app.conversation.begin_turn("query");
        // With no recognizer a real call would append an unavailable
        // notice, so an unchanged store proves the guard fired.
        press(&mut app, KeyCode::Char('v'));
        assert_eq!(app.conversation.messages().len(), 1);
    }

    #[test]
    fn test_voice_key_ignored_while_listening() {
        let mut app = test_app();
        app.listening = true;
        press(&mut app, KeyCode::Char('v'));
        assert!(app.conversation.messages().is_empty());
    }

    #[test]
    fn test_cursor_editing_is_multibyte_safe() {
        let mut app = test_app();
        app.input_mode = InputMode::Editing;
        for c in "स्तर".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.input, "स्तर");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input, "स्त");
        press(&mut app, KeyCode::Home);
        press(&mut app, KeyCode::Delete);
        assert_eq!(app.input, "्त");
        press(&mut app, KeyCode::End);
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.input, "्तx");
    }

    #[test]
    fn test_digit_key_prefills_latest_chips() {
        let mut app = test_app();
        let reply = crate::intent::compose(crate::intent::Intent::Help, Language::En, false);
        app.conversation.begin_turn("anything");
        app.conversation.complete_turn(reply);

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.input, crate::i18n::strings(Language::En).sample_queries[1]);
        assert_eq!(app.input_mode, InputMode::Editing);
    }

    #[test]
    fn test_ctrl_c_quits_in_any_mode() {
        let mut app = test_app();
        app.input_mode = InputMode::Editing;
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }
}
