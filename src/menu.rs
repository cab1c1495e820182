//! Interactive menu: state, input handling, dispatch and drawing.
pub mod action;
pub mod action_dispatcher;
pub mod categories;
pub mod event_handler;
pub mod hit_map;
pub mod modal;
pub mod renderer;
pub mod state;

use std::time::Duration;

use anyhow::Result;
use crossterm::event;
use ratatui::DefaultTerminal;

use crate::catalog::GroupedCatalog;
use crate::config::UiConfig;
use crate::menu::{
    action_dispatcher::{ActionDispatcher, DefaultActionDispatcher},
    event_handler::{DefaultEventHandler, EventHandler},
    renderer::{DefaultMenuRenderer, MenuRenderer},
    state::MenuState,
};

/// Poll timeout while something is animating.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
/// Poll timeout when idle.
const IDLE_INTERVAL: Duration = Duration::from_millis(250);

pub struct Menu<'a, R, E, D>
where
    R: MenuRenderer,
    E: EventHandler,
    D: ActionDispatcher,
{
    state: MenuState<'a>,
    renderer: R,
    event_handler: E,
    action_dispatcher: D,
}

impl<'a>
    Menu<'a, DefaultMenuRenderer, DefaultEventHandler, DefaultActionDispatcher>
{
    pub fn new(catalog: GroupedCatalog, ui: &UiConfig) -> Self {
        Self::with_components(
            MenuState::new(catalog, ui.animations),
            DefaultMenuRenderer {
                show_help_hint: ui.help_hint,
            },
            DefaultEventHandler,
            DefaultActionDispatcher,
        )
    }
}

impl<'a, R, E, D> Menu<'a, R, E, D>
where
    R: MenuRenderer,
    E: EventHandler,
    D: ActionDispatcher,
{
    pub fn with_components(
        state: MenuState<'a>,
        renderer: R,
        event_handler: E,
        action_dispatcher: D,
    ) -> Self {
        Self {
            state,
            renderer,
            event_handler,
            action_dispatcher,
        }
    }

    pub fn state(&self) -> &MenuState<'a> {
        &self.state
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.state.should_exit {
            terminal.draw(|frame| self.renderer.draw(frame, &mut self.state))?;

            let timeout = if self.state.is_animating() {
                FRAME_INTERVAL
            } else {
                IDLE_INTERVAL
            };

            if event::poll(timeout)? {
                let event = event::read()?;
                self.handle_event(event)?;
            }

            self.state.tick();
        }

        Ok(())
    }

    /// Maps one terminal event to an action and applies it.
    pub fn handle_event(&mut self, event: event::Event) -> Result<()> {
        let action = self.event_handler.handle_event(event, &self.state);
        self.action_dispatcher.dispatch(action, &mut self.state)
    }
}
