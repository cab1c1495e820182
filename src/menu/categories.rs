use ratatui::text::Span;

/// Columns between two pills.
pub const PILL_GAP: u16 = 1;
/// Columns of padding inside a pill, on each side of the label.
pub const PILL_PADDING: u16 = 1;

/// The horizontal strip of category pills.
///
/// Exactly one pill is active whenever the strip is non-empty.
#[derive(Debug, Clone, Default)]
pub struct CategoryStrip {
    pills: Vec<String>,
    active: Option<usize>,
    scroll: u16,
    scroll_target: u16,
}

impl CategoryStrip {
    /// Creates the strip with `active_default` marked active (clamped).
    pub fn new(pills: Vec<String>, active_default: usize) -> Self {
        let active = (!pills.is_empty())
            .then(|| active_default.min(pills.len() - 1));

        Self {
            pills,
            active,
            scroll: 0,
            scroll_target: 0,
        }
    }

    pub fn pills(&self) -> &[String] {
        &self.pills
    }

    pub fn len(&self) -> usize {
        self.pills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pills.is_empty()
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn active_name(&self) -> Option<&str> {
        self.active.map(|i| self.pills[i].as_str())
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Current horizontal scroll offset, in columns.
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn scroll_target(&self) -> u16 {
        self.scroll_target
    }

    pub fn is_scrolling(&self) -> bool {
        self.scroll != self.scroll_target
    }

    pub fn pill_width(&self, index: usize) -> u16 {
        let label = Span::raw(self.pills[index].as_str()).width() as u16;
        label + 2 * PILL_PADDING
    }

    /// Column of the left edge of pill `index`, relative to the strip start.
    pub fn pill_left(&self, index: usize) -> u16 {
        (0..index).map(|i| self.pill_width(i) + PILL_GAP).sum()
    }

    pub fn total_width(&self) -> u16 {
        let widths: u16 = (0..self.pills.len()).map(|i| self.pill_width(i)).sum();
        widths + PILL_GAP * (self.pills.len().saturating_sub(1) as u16)
    }

    /// Marks pill `index` active and aims the scroll so that the pill is
    /// centered in a viewport `viewport` columns wide.
    ///
    /// Returns the selected category, or `None` if `index` is out of range.
    pub fn select(&mut self, index: usize, viewport: u16) -> Option<&str> {
        if index >= self.pills.len() {
            return None;
        }

        self.active = Some(index);
        self.scroll_target = self.centered_scroll(index, viewport);
        Some(self.pills[index].as_str())
    }

    /// Index of the pill `delta` steps away from the active one, wrapping.
    pub fn cycled_index(&self, delta: i32) -> Option<usize> {
        let active = self.active?;
        let len = self.pills.len() as i32;
        Some((active as i32 + delta).rem_euclid(len) as usize)
    }

    fn centered_scroll(&self, index: usize, viewport: u16) -> u16 {
        let left = i32::from(self.pill_left(index));
        let width = i32::from(self.pill_width(index));
        let viewport = i32::from(viewport);
        let max = (i32::from(self.total_width()) - viewport).max(0);

        let target = left + width / 2 - viewport / 2;
        target.clamp(0, max) as u16
    }

    /// Re-aims the scroll at the active pill for a new viewport width and
    /// jumps there.
    pub fn recenter(&mut self, viewport: u16) {
        if let Some(active) = self.active {
            self.scroll_target = self.centered_scroll(active, viewport);
            self.finish_scroll();
        }
    }

    /// Jumps straight to the scroll target.
    pub fn finish_scroll(&mut self) {
        self.scroll = self.scroll_target;
    }

    /// Advances the visible scroll towards its target.
    ///
    /// Returns whether the strip is still moving afterwards.
    pub fn tick(&mut self) -> bool {
        let diff = i32::from(self.scroll_target) - i32::from(self.scroll);
        if diff != 0 {
            let step = (diff.abs() / 3).max(1) * diff.signum();
            self.scroll = (i32::from(self.scroll) + step) as u16;
        }
        self.is_scrolling()
    }
}
