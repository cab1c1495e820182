/// The enlarged-image overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ImageModal {
    #[default]
    Closed,
    Open {
        /// Image URL or path being shown.
        source: String,
        /// Name of the item the image belongs to.
        caption: String,
    },
}

impl ImageModal {
    /// Shows `source`, replacing the current image if already open.
    ///
    /// An empty source leaves the modal as it is. Returns whether the
    /// modal is open afterwards.
    pub fn open(
        &mut self,
        source: impl Into<String>,
        caption: impl Into<String>,
    ) -> bool {
        let source = source.into();
        if !source.is_empty() {
            *self = Self::Open {
                source,
                caption: caption.into(),
            };
        }
        self.is_open()
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn source(&self) -> Option<&str> {
        match self {
            Self::Open { source, .. } => Some(source),
            Self::Closed => None,
        }
    }

    pub fn caption(&self) -> Option<&str> {
        match self {
            Self::Open { caption, .. } => Some(caption),
            Self::Closed => None,
        }
    }

    /// The catalog under the overlay does not scroll while it is open.
    pub fn locks_scroll(&self) -> bool {
        self.is_open()
    }
}
