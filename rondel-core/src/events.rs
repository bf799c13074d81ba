//! Slide-change notification payload and listener plumbing.

use rondel_model::ItemId;

use crate::policy::SlideDirection;

/// Payload emitted after every committed transition: the active items in
/// display order and the direction the window moved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideChange {
    pub active_items: Vec<ItemId>,
    pub direction: SlideDirection,
}

/// Callback invoked on every slide change until the carousel is destroyed.
pub type SlideChangeListener = Box<dyn FnMut(&SlideChange)>;
