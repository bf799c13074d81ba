use crate::ids::ItemId;

/// A single carousel entry.
///
/// The `visible` and `has_margin` flags are owned by the carousel engine for
/// as long as the item is mounted; hosts render from them and must not write
/// them back. Items start hidden, the engine reveals the initial window.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselItem {
    id: ItemId,
    /// Tooltip text surfaced by the host, if any.
    title: Option<String>,
    visible: bool,
    has_margin: bool,
}

impl CarouselItem {
    pub fn new(id: ItemId) -> Self {
        Self {
            id,
            title: None,
            visible: false,
            has_margin: false,
        }
    }

    pub fn with_title(id: ItemId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: Some(title.into()),
            visible: false,
            has_margin: false,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn has_margin(&self) -> bool {
        self.has_margin
    }

    /// Shows the item.
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Hides the item.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Add or remove the trailing gap used in multi-item display.
    pub fn set_margin(&mut self, has_margin: bool) {
        self.has_margin = has_margin;
    }
}
