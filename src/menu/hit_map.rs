use ratatui::layout::{Position, Rect};

/// A clickable element of the last drawn frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// A category pill, by strip index.
    CategoryPill(usize),
    /// The thumbnail of a card, by index in the current view.
    Thumbnail(usize),
    ModalBackdrop,
    ModalBody,
    ModalClose,
}

/// Screen regions registered while drawing, used to resolve mouse clicks.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Registers `area` for `target`. Later registrations sit on top.
    pub fn register(&mut self, area: Rect, target: HitTarget) {
        if !area.is_empty() {
            self.regions.push((area, target));
        }
    }

    /// The topmost target under `(column, row)`.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<HitTarget> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|&(_, target)| target)
    }

    pub fn targets(&self) -> impl Iterator<Item = HitTarget> + '_ {
        self.regions.iter().map(|&(_, target)| target)
    }

    pub fn area_of(&self, target: HitTarget) -> Option<Rect> {
        self.regions
            .iter()
            .rev()
            .find(|(_, t)| *t == target)
            .map(|&(area, _)| area)
    }
}
