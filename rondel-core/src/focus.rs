//! Carousel focus controller
//!
//! Tracks which carousel should receive keyboard navigation events based on
//! hover state and explicit focus commands.

use std::time::{Duration, Instant};

use crate::registry::CarouselKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusSource {
    #[default]
    None,
    Mouse,
    Keyboard,
}

/// Decides which of several carousels arrow keys are routed to.
///
/// Resolution order for the keyboard target:
/// 1. `hovered_key` - if the pointer is over a carousel, it takes priority
/// 2. `keyboard_active_key` - explicit focus from chevron presses or
///    programmatic focus
/// 3. Fallback to host-specific defaults (handled by the caller)
///
/// Hover-driven switches are gated on recent mouse movement so content
/// scrolling under a stationary pointer does not steal focus.
#[derive(Debug, Default, Clone)]
pub struct CarouselFocus {
    /// The carousel currently hovered by the mouse.
    pub hovered_key: Option<CarouselKey>,

    /// The carousel that should receive keyboard events when none is
    /// hovered. Set by chevron presses or explicit focus commands.
    pub keyboard_active_key: Option<CarouselKey>,

    /// Timestamp of the last mouse movement observed.
    pub last_mouse_move_at: Option<Instant>,

    /// Which input source last set the active focus target.
    pub last_source: FocusSource,
}

impl CarouselFocus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hovered carousel (called on pointer enter/leave).
    pub fn set_hovered(&mut self, key: Option<CarouselKey>) {
        self.hovered_key = key;
    }

    /// Set the keyboard-active carousel (chevron press or explicit focus).
    pub fn set_keyboard_active(&mut self, key: Option<CarouselKey>) {
        self.keyboard_active_key = key;
        self.last_source = FocusSource::Keyboard;
    }

    /// The carousel key keyboard navigation currently targets, hovered
    /// carousel first.
    pub fn active_key(&self) -> Option<CarouselKey> {
        self.hovered_key.or(self.keyboard_active_key)
    }

    /// Check if a specific carousel is the active keyboard target.
    pub fn is_active(&self, key: &CarouselKey) -> bool {
        self.active_key().as_ref() == Some(key)
    }

    /// Clear hover state (typically when the pointer leaves the window).
    pub fn clear_hover(&mut self) {
        self.hovered_key = None;
    }

    /// Clear all focus state.
    pub fn clear_all(&mut self) {
        self.hovered_key = None;
        self.keyboard_active_key = None;
        self.last_source = FocusSource::None;
    }

    /// Record a mouse movement timestamp.
    pub fn record_mouse_move(&mut self, when: Instant) {
        self.last_mouse_move_at = Some(when);
    }

    /// True if a mouse movement occurred within `window` before `now`.
    pub fn has_recent_mouse_move(&self, now: Instant, window: Duration) -> bool {
        match self.last_mouse_move_at {
            Some(at) => now.saturating_duration_since(at) <= window,
            None => false,
        }
    }

    /// Activate hover focus explicitly (used when a hover target is
    /// accepted as the new focus).
    pub fn activate_hovered(&mut self, key: CarouselKey) {
        self.hovered_key = Some(key);
        self.last_source = FocusSource::Mouse;
    }

    /// Decide if hover should win over the keyboard-active carousel.
    ///
    /// While the last focus change came from the mouse, hover keeps winning
    /// as long as something is hovered; after a keyboard-driven change, a
    /// recent mouse movement is required before hover may take over again.
    pub fn should_prefer_hover(&self, now: Instant, window: Duration) -> bool {
        if self.hovered_key.is_none() {
            return false;
        }
        if self.last_source == FocusSource::Mouse {
            return true;
        }
        self.has_recent_mouse_move(now, window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GATE: Duration = Duration::from_millis(300);

    #[test]
    fn hover_takes_priority_over_keyboard_focus() {
        let mut focus = CarouselFocus::new();
        let hovered = CarouselKey::Named("hovered");
        let active = CarouselKey::Named("active");

        focus.set_keyboard_active(Some(active));
        assert_eq!(focus.active_key(), Some(active));

        focus.set_hovered(Some(hovered));
        assert_eq!(focus.active_key(), Some(hovered));
        assert!(focus.is_active(&hovered));
        assert!(!focus.is_active(&active));

        focus.clear_hover();
        assert_eq!(focus.active_key(), Some(active));
    }

    #[test]
    fn hover_preference_requires_recent_movement_after_keyboard_use() {
        let mut focus = CarouselFocus::new();
        let now = Instant::now();
        focus.set_keyboard_active(Some(CarouselKey::Named("active")));
        focus.set_hovered(Some(CarouselKey::Named("hovered")));

        // Keyboard was the last source and the mouse has not moved.
        assert!(!focus.should_prefer_hover(now, GATE));

        focus.record_mouse_move(now);
        assert!(focus.should_prefer_hover(now + Duration::from_millis(100), GATE));
        assert!(!focus.should_prefer_hover(now + Duration::from_millis(500), GATE));
    }

    #[test]
    fn mouse_driven_focus_keeps_preferring_hover() {
        let mut focus = CarouselFocus::new();
        focus.activate_hovered(CarouselKey::Named("hovered"));
        assert_eq!(focus.last_source, FocusSource::Mouse);
        // No recent movement needed once the mouse owns focus.
        assert!(focus.should_prefer_hover(Instant::now() + GATE * 10, GATE));
    }

    #[test]
    fn clear_all_resets_everything() {
        let mut focus = CarouselFocus::new();
        focus.activate_hovered(CarouselKey::unique());
        focus.set_keyboard_active(Some(CarouselKey::unique()));
        focus.clear_all();

        assert_eq!(focus.active_key(), None);
        assert_eq!(focus.last_source, FocusSource::None);
        assert!(!focus.should_prefer_hover(Instant::now(), GATE));
    }
}
