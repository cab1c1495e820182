use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};

use crate::menu::{action::MenuAction, hit_map::HitTarget, state::MenuState};

pub trait EventHandler {
    fn handle_event(&self, event: Event, state: &MenuState) -> MenuAction;
}

pub struct DefaultEventHandler;

impl EventHandler for DefaultEventHandler {
    fn handle_event(&self, event: Event, state: &MenuState) -> MenuAction {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                handle_key(key, state)
            }
            Event::Mouse(mouse) => handle_mouse(mouse, state),
            _ => MenuAction::Nop,
        }
    }
}

fn handle_key(key: KeyEvent, state: &MenuState) -> MenuAction {
    if state.modal().is_open() {
        return handle_modal_key(key);
    }

    if state.show_help {
        return handle_help_popup_key(key);
    }

    handle_normal_mode_key(key)
}

fn handle_modal_key(key: KeyEvent) -> MenuAction {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
            MenuAction::CloseModal
        }
        _ => MenuAction::Nop,
    }
}

fn handle_help_popup_key(key: KeyEvent) -> MenuAction {
    match (key.modifiers.contains(KeyModifiers::CONTROL), key.code) {
        (true, KeyCode::Char('h')) => MenuAction::ToggleHelp,
        (true, KeyCode::Char('c')) => MenuAction::Exit,
        (false, KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter) => {
            MenuAction::ToggleHelp
        }
        _ => MenuAction::Nop,
    }
}

fn handle_normal_mode_key(key: KeyEvent) -> MenuAction {
    match (key.modifiers.contains(KeyModifiers::CONTROL), key.code) {
        (true, KeyCode::Char('p')) => MenuAction::MoveSelection(-1),
        (true, KeyCode::Char('n')) => MenuAction::MoveSelection(1),
        (true, KeyCode::Char('c')) => MenuAction::Exit,
        (true, KeyCode::Char('h')) => MenuAction::ToggleHelp,
        (true, KeyCode::Char('w')) => MenuAction::RemoveLastWord,
        (true, KeyCode::Char('u')) => MenuAction::ClearInput,

        (false, KeyCode::Char(c)) => MenuAction::AppendToInput(c),
        (false, KeyCode::Backspace) => MenuAction::DeleteFromInput,
        (false, KeyCode::Up) => MenuAction::MoveSelection(-1),
        (false, KeyCode::Down) => MenuAction::MoveSelection(1),
        (false, KeyCode::Left | KeyCode::BackTab) => {
            MenuAction::CycleCategory(-1)
        }
        (false, KeyCode::Right | KeyCode::Tab) => MenuAction::CycleCategory(1),
        (false, KeyCode::Enter) => MenuAction::OpenSelectedImage,
        (false, KeyCode::Esc) => MenuAction::Exit,

        _ => MenuAction::Nop,
    }
}

fn handle_mouse(mouse: MouseEvent, state: &MenuState) -> MenuAction {
    // the help popup covers the menu but registers no regions of its own
    if state.show_help && !state.modal().is_open() {
        return MenuAction::Nop;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            match state.hit_map.hit_test(mouse.column, mouse.row) {
                Some(HitTarget::CategoryPill(idx)) => {
                    MenuAction::SelectCategory(idx)
                }
                Some(HitTarget::Thumbnail(idx)) => MenuAction::OpenImage(idx),
                Some(HitTarget::ModalBackdrop | HitTarget::ModalClose) => {
                    MenuAction::CloseModal
                }
                Some(HitTarget::ModalBody) | None => MenuAction::Nop,
            }
        }
        MouseEventKind::ScrollUp => MenuAction::MoveSelection(-1),
        MouseEventKind::ScrollDown => MenuAction::MoveSelection(1),
        _ => MenuAction::Nop,
    }
}
