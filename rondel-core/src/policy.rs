//! Navigation policy: how the window moves and when the chevrons are enabled.

use rondel_model::WrapMode;

use crate::window::SlideWindow;

/// Direction of a slide transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideDirection {
    Next,
    Previous,
}

/// Enabled state of the two navigation buttons.
///
/// Always derived from the current [`SlideWindow`], never set independently;
/// the engine recomputes it on every transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub left_disabled: bool,
    pub right_disabled: bool,
}

impl NavigationState {
    /// Both buttons disabled; the state of empty or misconfigured carousels.
    pub const INERT: Self = Self {
        left_disabled: true,
        right_disabled: true,
    };
}

impl SlideWindow {
    /// Move the window `magnitude` steps in `direction`, in place.
    ///
    /// Circular mode wraps with euclidean modulo; finite mode saturates at
    /// the first and last full window. A magnitude beyond `total_items` is
    /// clamped so noisy gesture input cannot over-rotate the window. With no
    /// items this is a no-op.
    pub fn shift(&mut self, direction: SlideDirection, magnitude: usize) {
        if self.total_items == 0 || magnitude == 0 {
            return;
        }
        let step = magnitude.min(self.total_items) as isize;
        let delta = match direction {
            SlideDirection::Next => step,
            SlideDirection::Previous => -step,
        };
        let raw = self.start_index as isize + delta;
        self.start_index = match self.wrap_mode {
            WrapMode::Infinite => raw.rem_euclid(self.total_items as isize) as usize,
            WrapMode::Finite => raw.clamp(0, self.max_start_index() as isize) as usize,
        };
    }

    /// Recompute chevron enablement from the current window.
    ///
    /// A single item (or none) disables both directions regardless of wrap
    /// mode; a circular carousel with more than one item never disables
    /// either. In finite mode the right chevron also goes dark once the last
    /// item has entered a multi-item window.
    pub fn navigation_state(&self) -> NavigationState {
        if self.total_items <= 1 {
            return NavigationState::INERT;
        }
        match self.wrap_mode {
            WrapMode::Infinite => NavigationState::default(),
            WrapMode::Finite => NavigationState {
                left_disabled: self.start_index == 0,
                right_disabled: self.start_index == self.total_items - 1
                    || (self.visible_count > 1
                        && self.start_index + self.visible_count >= self.total_items),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finite(total: usize, visible: usize, start: usize) -> SlideWindow {
        SlideWindow::new(total, visible, start, WrapMode::Finite)
    }

    fn circular(total: usize, visible: usize, start: usize) -> SlideWindow {
        SlideWindow::new(total, visible, start, WrapMode::Infinite)
    }

    #[test]
    fn finite_single_item_window_walks_to_the_end() {
        let mut window = finite(5, 1, 0);
        assert!(window.navigation_state().left_disabled);
        assert!(!window.navigation_state().right_disabled);

        for _ in 0..4 {
            window.shift(SlideDirection::Next, 1);
        }
        assert_eq!(window.start_index, 4);
        assert!(window.navigation_state().right_disabled);
        assert!(!window.navigation_state().left_disabled);
    }

    #[test]
    fn finite_multi_item_right_disables_once_tail_is_shown() {
        let mut window = finite(5, 3, 0);
        window.shift(SlideDirection::Next, 1);
        window.shift(SlideDirection::Next, 1);
        assert_eq!(window.start_index, 2);
        let nav = window.navigation_state();
        assert!(nav.right_disabled);
        assert!(!nav.left_disabled);
    }

    #[test]
    fn finite_shift_saturates_at_both_ends() {
        let mut window = finite(5, 3, 0);
        window.shift(SlideDirection::Previous, 1);
        assert_eq!(window.start_index, 0);

        window.shift(SlideDirection::Next, 10);
        assert_eq!(window.start_index, 2);
    }

    #[test]
    fn circular_shift_wraps_both_ways() {
        let mut window = circular(5, 1, 4);
        window.shift(SlideDirection::Next, 1);
        assert_eq!(window.start_index, 0);

        window.shift(SlideDirection::Previous, 2);
        assert_eq!(window.start_index, 3);
    }

    #[test]
    fn circular_full_cycle_returns_to_origin() {
        let mut window = circular(7, 3, 2);
        for _ in 0..7 {
            window.shift(SlideDirection::Next, 1);
            assert!(window.start_index < 7);
        }
        assert_eq!(window.start_index, 2);
    }

    #[test]
    fn circular_navigation_never_disables_with_multiple_items() {
        let window = circular(2, 1, 0);
        assert_eq!(window.navigation_state(), NavigationState::default());
    }

    #[test]
    fn single_item_is_inert_in_both_modes() {
        assert_eq!(finite(1, 1, 0).navigation_state(), NavigationState::INERT);
        assert_eq!(circular(1, 1, 0).navigation_state(), NavigationState::INERT);
    }

    #[test]
    fn empty_carousel_is_inert_and_shift_is_a_noop() {
        let mut window = finite(0, 3, 0);
        assert_eq!(window.navigation_state(), NavigationState::INERT);
        window.shift(SlideDirection::Next, 1);
        assert_eq!(window.start_index, 0);
    }
}
