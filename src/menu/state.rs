use std::time::Instant;

use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders, ListState},
};
use tui_textarea::TextArea;

use crate::catalog::{
    Card, CatalogView, GroupedCatalog,
    search::{normalize_term, search},
};
use crate::menu::{
    categories::CategoryStrip, hit_map::HitMap, modal::ImageModal,
};

/// What produced the cards currently in the catalog area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewSource {
    /// The cards of the current category.
    Category,
    /// Search results for the given normalized term.
    Search(String),
}

/// Everything the menu shows, mutated only through the methods below.
pub struct MenuState<'a> {
    pub search_input: TextArea<'a>,
    /// Selected card and scroll offset of the catalog.
    pub list_state: ListState,
    /// Clickable regions of the last frame.
    pub hit_map: HitMap,
    /// Width of the pill strip in the last frame.
    pub strip_viewport: u16,
    pub show_help: bool,
    pub should_exit: bool,

    catalog: GroupedCatalog,
    strip: CategoryStrip,
    current_category: Option<String>,
    view: CatalogView,
    view_source: ViewSource,
    view_shown_at: Instant,
    modal: ImageModal,
    animations: bool,
}

impl<'a> MenuState<'a> {
    /// Builds the initial view: first category active, its cards shown.
    pub fn new(catalog: GroupedCatalog, animations: bool) -> Self {
        let strip = CategoryStrip::new(catalog.categories().to_vec(), 0);
        let current_category = catalog.initial_category().map(str::to_owned);

        let mut state = Self {
            search_input: new_search_input(),
            list_state: ListState::default(),
            hit_map: HitMap::default(),
            strip_viewport: 0,
            show_help: false,
            should_exit: false,
            catalog,
            strip,
            current_category,
            view: CatalogView::Empty(String::new()),
            view_source: ViewSource::Category,
            view_shown_at: Instant::now(),
            modal: ImageModal::default(),
            animations,
        };
        state.show_current_category();
        state
    }

    pub fn catalog(&self) -> &GroupedCatalog {
        &self.catalog
    }

    pub fn strip(&self) -> &CategoryStrip {
        &self.strip
    }

    pub fn current_category(&self) -> Option<&str> {
        self.current_category.as_deref()
    }

    pub fn view(&self) -> &CatalogView {
        &self.view
    }

    pub fn view_source(&self) -> &ViewSource {
        &self.view_source
    }

    /// The term whose results are on screen, if search results are shown.
    ///
    /// Differs from [`Self::search_term`] after a category is picked while
    /// text is still in the search box.
    pub fn shown_search(&self) -> Option<&str> {
        match &self.view_source {
            ViewSource::Search(term) => Some(term),
            ViewSource::Category => None,
        }
    }

    /// Records the strip width of the current frame, re-centering the
    /// active pill when it changed.
    pub fn resize_strip(&mut self, width: u16) {
        if width != self.strip_viewport {
            self.strip_viewport = width;
            self.strip.recenter(width);
        }
    }

    pub fn modal(&self) -> &ImageModal {
        &self.modal
    }

    /// The normalized contents of the search box.
    pub fn search_term(&self) -> String {
        normalize_term(&self.search_input.lines().join("\n"))
    }

    pub fn is_searching(&self) -> bool {
        !self.search_term().is_empty()
    }

    /// Activates pill `index` and shows its category.
    pub fn select_category(&mut self, index: usize) {
        let Some(name) = self
            .strip
            .select(index, self.strip_viewport)
            .map(str::to_owned)
        else {
            return;
        };

        if !self.animations {
            self.strip.finish_scroll();
        }

        tracing::debug!(category = %name, "Category selected");
        self.current_category = Some(name);
        self.show_current_category();
    }

    pub fn cycle_category(&mut self, delta: i32) {
        if let Some(index) = self.strip.cycled_index(delta) {
            self.select_category(index);
        }
    }

    /// Applies `operation` to the search box and re-filters.
    pub fn handle_input<F>(&mut self, operation: F)
    where
        F: FnOnce(&mut TextArea),
    {
        operation(&mut self.search_input);
        self.refresh_search();
    }

    /// Shows search results for the current term, or the current category
    /// when the term is empty.
    pub fn refresh_search(&mut self) {
        let term = self.search_term();
        if term.is_empty() {
            self.show_current_category();
            return;
        }

        let view = {
            let matches = search(self.catalog.items(), &term);
            tracing::debug!(term = %term, matches = matches.len(), "Search");
            CatalogView::for_search(&matches, &term)
        };
        self.show_view(view, ViewSource::Search(term));
    }

    fn show_current_category(&mut self) {
        let view = match &self.current_category {
            Some(category) => {
                CatalogView::for_category(&self.catalog.items_in(category))
            }
            None => CatalogView::for_category(&[]),
        };
        self.show_view(view, ViewSource::Category);
    }

    fn show_view(&mut self, view: CatalogView, source: ViewSource) {
        self.list_state
            .select(if view.is_empty() { None } else { Some(0) });
        *self.list_state.offset_mut() = 0;
        self.view = view;
        self.view_source = source;
        self.view_shown_at = Instant::now();
    }

    pub fn selected_card(&self) -> Option<(usize, &Card)> {
        let idx = self.list_state.selected()?;
        self.view.card(idx).map(|card| (idx, card))
    }

    /// Moves the card selection. Ignored while the image modal is open.
    pub fn move_selection(&mut self, delta: i32) {
        if self.modal.locks_scroll() {
            return;
        }

        if let Some(selection_idx) = self.list_state.selected() {
            let new_selected =
                usize::try_from((selection_idx as i32 + delta).max(0))
                    .unwrap_or(0);
            self.list_state.select(Some(
                new_selected.min(self.view.len().saturating_sub(1)),
            ));
        }
    }

    /// Opens the modal with the image of card `index`, if it has one.
    pub fn open_image(&mut self, index: usize) {
        let Some(card) = self.view.card(index) else {
            return;
        };
        let Some(source) = card.image.clone() else {
            return;
        };

        tracing::debug!(image = %source, "Opening image modal");
        self.modal.open(source, card.name.clone());
        self.list_state.select(Some(index));
    }

    pub fn open_selected_image(&mut self) {
        if let Some(idx) = self.list_state.selected() {
            self.open_image(idx);
        }
    }

    pub fn close_modal(&mut self) {
        if self.modal.is_open() {
            tracing::debug!("Closing image modal");
        }
        self.modal.close();
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Number of cards currently revealed by the staggered animation.
    pub fn revealed_cards(&self) -> usize {
        if self.animations {
            self.view.revealed(self.view_shown_at.elapsed())
        } else {
            self.view.len()
        }
    }

    pub fn is_animating(&self) -> bool {
        self.strip.is_scrolling() || self.revealed_cards() < self.view.len()
    }

    /// Advances animations by one frame.
    pub fn tick(&mut self) {
        self.strip.tick();
    }
}

fn new_search_input<'a>() -> TextArea<'a> {
    let mut input = TextArea::default();
    input.set_cursor_line_style(Style::default());
    input.set_style(Style::default().fg(Color::Green));
    input.set_placeholder_text("Buscar no cardápio...");
    input.set_block(Block::default().borders(Borders::ALL).title("Buscar"));
    input
}
