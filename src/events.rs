// ============================================================================
// EVENT HANDLING - keyboard and mouse mapped onto controls
// ============================================================================

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tui_textarea::{Input, Key};

use crate::app::{App, Control, Modal};
use crate::view::Section;

pub fn inside_rect(mouse: MouseEvent, rect: Rect) -> bool {
    mouse.row >= rect.y
        && mouse.row < rect.y + rect.height
        && mouse.column >= rect.x
        && mouse.column < rect.x + rect.width
}

/// Topmost control under the pointer. Areas are recorded in paint order, so
/// the last match is the one drawn on top.
pub fn find_clicked_control(mouse: MouseEvent, areas: &[(Control, Rect)]) -> Option<Control> {
    areas
        .iter()
        .rev()
        .find(|(_, rect)| inside_rect(mouse, *rect))
        .map(|(control, _)| *control)
}

fn add_control_for(section: Section) -> Option<Control> {
    match section {
        Section::Flashcards => Some(Control::AddFlashcard),
        Section::Gallery => Some(Control::AddImage),
        Section::Notes => Some(Control::AddNote),
        _ => None,
    }
}

fn step_section(app: &mut App, forward: bool) {
    let len = Section::ALL.len();
    let idx = Section::ALL
        .iter()
        .position(|s| *s == app.active_section)
        .unwrap_or(0);
    let next = if forward { (idx + 1) % len } else { (idx + len - 1) % len };
    app.activate(Control::Nav(Section::ALL[next]));
}

/// Returns `Ok(true)` when the user asked to quit.
pub fn handle_key(app: &mut App, key: KeyEvent) -> anyhow::Result<bool> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return Ok(true);
    }

    // Modal swallows everything until dismissed
    if app.modal.is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
            app.close_modal();
        }
        return Ok(false);
    }

    if app.sidebar_open {
        match key.code {
            KeyCode::Esc => app.activate(Control::CloseSidebar),
            KeyCode::Up => app.sidebar_cursor = app.sidebar_cursor.saturating_sub(1),
            KeyCode::Down => {
                app.sidebar_cursor = (app.sidebar_cursor + 1).min(Section::ALL.len() - 1);
            }
            KeyCode::Enter => {
                if let Some(section) = Section::ALL.get(app.sidebar_cursor) {
                    app.activate(Control::Nav(*section));
                }
            }
            KeyCode::Char('t') => app.activate(Control::ThemeToggleSidebar),
            KeyCode::Char('m') => app.activate(Control::CloseSidebar),
            _ => {}
        }
        return Ok(false);
    }

    // Global shortcuts that never collide with typing
    match key.code {
        KeyCode::Tab => {
            step_section(app, true);
            return Ok(false);
        }
        KeyCode::BackTab => {
            step_section(app, false);
            return Ok(false);
        }
        KeyCode::F(1) => {
            app.open_modal(Modal::Help);
            return Ok(false);
        }
        KeyCode::Char('t') if ctrl => {
            app.activate(Control::ThemeToggle);
            return Ok(false);
        }
        KeyCode::Char('b') if ctrl => {
            app.activate(Control::MenuToggle);
            return Ok(false);
        }
        _ => {}
    }

    if app.active_section == Section::Chat {
        handle_chat_key(app, key);
        return Ok(false);
    }

    match key.code {
        KeyCode::Char('q') => return Ok(true),
        KeyCode::Char('t') => app.activate(Control::ThemeToggle),
        KeyCode::Char('m') => app.activate(Control::MenuToggle),
        KeyCode::Char('?') => app.open_modal(Modal::Help),
        KeyCode::Char('a') => {
            if let Some(control) = add_control_for(app.active_section) {
                app.activate(control);
            }
        }
        KeyCode::Char(c @ '1'..='7') => {
            let idx = c as usize - '1' as usize;
            app.activate(Control::Nav(Section::ALL[idx]));
        }
        _ => {}
    }

    Ok(false)
}

fn handle_chat_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // Shift+Enter only reaches us on terminals that report modifiers on
        // Enter; Alt+Enter works everywhere.
        KeyCode::Enter if key.modifiers.intersects(KeyModifiers::SHIFT | KeyModifiers::ALT) => {
            app.textarea.input(Input {
                key: Key::Enter,
                ctrl: false,
                alt: false,
            });
        }
        KeyCode::Enter => app.activate(Control::SendMessage),
        KeyCode::Esc => app.activate(Control::Nav(Section::Dashboard)),
        KeyCode::PageUp => app.chat_scroll = app.chat_scroll.saturating_add(5),
        KeyCode::PageDown => app.chat_scroll = app.chat_scroll.saturating_sub(5),
        _ => {
            // Forward everything else to the input box
            let input = Input {
                key: match key.code {
                    KeyCode::Char(c) => Key::Char(c),
                    KeyCode::Enter => Key::Enter,
                    KeyCode::Backspace => Key::Backspace,
                    KeyCode::Delete => Key::Delete,
                    KeyCode::Left => Key::Left,
                    KeyCode::Right => Key::Right,
                    KeyCode::Up => Key::Up,
                    KeyCode::Down => Key::Down,
                    KeyCode::Home => Key::Home,
                    KeyCode::End => Key::End,
                    _ => Key::Null,
                },
                ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
                alt: key.modifiers.contains(KeyModifiers::ALT),
            };
            app.textarea.input(input);
        }
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if app.modal.is_some() {
                // Clicks inside the box do nothing; outside is the backdrop
                if !inside_rect(mouse, app.modal_area) {
                    app.activate(Control::ModalBackdrop);
                }
                return;
            }
            if let Some(control) = find_clicked_control(mouse, &app.control_areas) {
                app.activate(control);
            }
        }
        MouseEventKind::ScrollUp => {
            if app.active_section == Section::Chat {
                app.chat_scroll = app.chat_scroll.saturating_add(3);
            }
        }
        MouseEventKind::ScrollDown => {
            if app.active_section == Section::Chat {
                app.chat_scroll = app.chat_scroll.saturating_sub(3);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Author;
    use crate::config::Config;
    use chrono::NaiveDate;
    use crossterm::event::KeyEventKind;
    use crossterm::event::KeyEventState;

    fn app() -> App {
        App::start(
            Config::default(),
            NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
        )
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn shift_enter() -> KeyEvent {
        KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::SHIFT,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_key(app, press(KeyCode::Char(c))).unwrap();
        }
    }

    #[test]
    fn digits_select_sections() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('4'))).unwrap();
        assert_eq!(app.active_section, Section::Calendar);
        handle_key(&mut app, press(KeyCode::Tab)).unwrap();
        assert_eq!(app.active_section, Section::Chat);
        handle_key(&mut app, press(KeyCode::BackTab)).unwrap();
        handle_key(&mut app, press(KeyCode::BackTab)).unwrap();
        assert_eq!(app.active_section, Section::Gallery);
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        assert!(handle_key(&mut app, press(KeyCode::Char('q'))).unwrap());
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(handle_key(&mut app, ctrl_c).unwrap());
    }

    #[test]
    fn chat_typing_and_enter_send() {
        let mut app = app();
        app.activate(Control::Nav(Section::Chat));
        // 'q' and 't' are plain text inside the chat
        type_text(&mut app, "tq");
        assert_eq!(app.chat_input(), "tq");
        handle_key(&mut app, press(KeyCode::Backspace)).unwrap();
        handle_key(&mut app, press(KeyCode::Backspace)).unwrap();

        type_text(&mut app, "hi");
        handle_key(&mut app, shift_enter()).unwrap();
        type_text(&mut app, "there");
        assert_eq!(app.chat_input(), "hi\nthere");

        handle_key(&mut app, press(KeyCode::Enter)).unwrap();
        assert_eq!(app.chat_transcript.len(), 1);
        assert_eq!(app.chat_transcript[0].author, Author::User);
        assert_eq!(app.chat_transcript[0].text, "hi\nthere");
        assert_eq!(app.chat_input(), "");
    }

    #[test]
    fn alt_enter_breaks_line_without_enhanced_keys() {
        let mut app = app();
        app.activate(Control::Nav(Section::Chat));
        type_text(&mut app, "one");
        handle_key(&mut app, KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT)).unwrap();
        type_text(&mut app, "two");
        assert_eq!(app.chat_input(), "one\ntwo");
        assert!(app.chat_transcript.is_empty());

        handle_key(&mut app, press(KeyCode::Enter)).unwrap();
        assert_eq!(app.chat_transcript[0].text, "one\ntwo");
    }

    #[test]
    fn modal_swallows_keys_until_dismissed() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('2'))).unwrap();
        handle_key(&mut app, press(KeyCode::Char('a'))).unwrap();
        assert!(matches!(app.modal, Some(Modal::Notice(_))));

        handle_key(&mut app, press(KeyCode::Char('5'))).unwrap();
        assert_eq!(app.active_section, Section::Flashcards);
        handle_key(&mut app, press(KeyCode::Esc)).unwrap();
        assert!(app.modal.is_none());
    }

    #[test]
    fn sidebar_keyboard_selection() {
        let mut app = app();
        app.viewport_width = 80;
        handle_key(&mut app, press(KeyCode::Char('m'))).unwrap();
        assert!(app.sidebar_open);
        handle_key(&mut app, press(KeyCode::Down)).unwrap();
        handle_key(&mut app, press(KeyCode::Down)).unwrap();
        handle_key(&mut app, press(KeyCode::Enter)).unwrap();
        assert_eq!(app.active_section, Section::Gallery);
        assert!(!app.sidebar_open);
    }

    #[test]
    fn click_hits_topmost_control() {
        let mut app = app();
        app.control_areas = vec![
            (Control::Nav(Section::Notes), Rect::new(0, 0, 10, 3)),
            (Control::SidebarOverlay, Rect::new(0, 0, 40, 20)),
            (Control::Nav(Section::Timer), Rect::new(0, 5, 10, 1)),
        ];
        app.sidebar_open = true;
        handle_mouse(&mut app, click(2, 5));
        assert_eq!(app.active_section, Section::Timer);

        app.viewport_width = 200;
        handle_mouse(&mut app, click(2, 1));
        assert_eq!(app.active_section, Section::Timer);
        assert!(!app.sidebar_open);
    }

    #[test]
    fn click_outside_modal_closes_it() {
        let mut app = app();
        app.open_modal(Modal::Help);
        app.modal_area = Rect::new(10, 10, 20, 5);
        handle_mouse(&mut app, click(12, 11));
        assert!(app.modal.is_some());
        handle_mouse(&mut app, click(0, 0));
        assert!(app.modal.is_none());
    }

    #[test]
    fn click_on_empty_space_is_tolerated() {
        let mut app = app();
        app.control_areas.clear();
        handle_mouse(&mut app, click(3, 3));
        assert_eq!(app.active_section, Section::Dashboard);
    }
}
