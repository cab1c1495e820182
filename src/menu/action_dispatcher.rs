use anyhow::Result;

use crate::menu::{action::MenuAction, state::MenuState};

pub trait ActionDispatcher {
    fn dispatch(&self, action: MenuAction, state: &mut MenuState)
    -> Result<()>;
}

pub struct DefaultActionDispatcher;

impl ActionDispatcher for DefaultActionDispatcher {
    fn dispatch(
        &self,
        action: MenuAction,
        state: &mut MenuState,
    ) -> Result<()> {
        if action != MenuAction::Nop {
            tracing::trace!(?action, "Dispatching");
        }

        match action {
            MenuAction::SelectCategory(idx) => state.select_category(idx),
            MenuAction::CycleCategory(delta) => state.cycle_category(delta),
            MenuAction::MoveSelection(delta) => state.move_selection(delta),
            MenuAction::OpenImage(idx) => state.open_image(idx),
            MenuAction::OpenSelectedImage => state.open_selected_image(),
            MenuAction::CloseModal => state.close_modal(),
            MenuAction::AppendToInput(c) => {
                state.handle_input(|input| input.insert_char(c))
            }
            MenuAction::DeleteFromInput => state.handle_input(|input| {
                input.delete_char();
            }),
            MenuAction::RemoveLastWord => state.handle_input(|input| {
                input.delete_word();
            }),
            MenuAction::ClearInput => state.handle_input(|input| {
                input.select_all();
                input.cut();
            }),
            MenuAction::ToggleHelp => state.toggle_help(),
            MenuAction::Exit => state.should_exit = true,
            MenuAction::Nop => {}
        }

        Ok(())
    }
}
