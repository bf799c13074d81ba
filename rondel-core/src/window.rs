//! SlideWindow: which contiguous range of items the carousel currently shows.

use rondel_model::WrapMode;

/// The contiguous range of currently active items.
///
/// `start_index` stays within `[0, total_items)` whenever `total_items > 0`.
/// In finite mode it is additionally held at or below [`max_start_index`],
/// so a full window of items is always available; circular mode lets the
/// range wrap past the last item instead.
///
/// [`max_start_index`]: SlideWindow::max_start_index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideWindow {
    pub start_index: usize,
    pub visible_count: usize,
    pub total_items: usize,
    pub wrap_mode: WrapMode,
}

impl SlideWindow {
    /// Create a window with `start_index` clamped into bounds.
    pub fn new(
        total_items: usize,
        visible_count: usize,
        start_index: usize,
        wrap_mode: WrapMode,
    ) -> Self {
        let mut window = Self {
            start_index: 0,
            visible_count: visible_count.max(1),
            total_items,
            wrap_mode,
        };
        window.start_index = start_index.min(window.max_start_index());
        window
    }

    /// How many items are actually shown; `visible_count` capped by the
    /// number of items available.
    pub fn effective_visible(&self) -> usize {
        self.visible_count.min(self.total_items)
    }

    /// Largest start index navigation may land on.
    pub fn max_start_index(&self) -> usize {
        match self.wrap_mode {
            WrapMode::Infinite => self.total_items.saturating_sub(1),
            WrapMode::Finite => {
                if self.visible_count >= self.total_items {
                    0
                } else {
                    self.total_items - self.visible_count
                }
            }
        }
    }

    /// Indices of the items the window covers, in display order. Wraps with
    /// modulo arithmetic in circular mode.
    pub fn visible_indices(&self) -> Vec<usize> {
        if self.total_items == 0 {
            return Vec::new();
        }
        let count = self.effective_visible();
        match self.wrap_mode {
            WrapMode::Infinite => (0..count)
                .map(|offset| (self.start_index + offset) % self.total_items)
                .collect(),
            WrapMode::Finite => {
                let end = (self.start_index + count).min(self.total_items);
                (self.start_index..end).collect()
            }
        }
    }

    /// Whether `index` falls inside the window.
    pub fn contains(&self, index: usize) -> bool {
        if self.total_items == 0 || index >= self.total_items {
            return false;
        }
        let count = self.effective_visible();
        match self.wrap_mode {
            WrapMode::Infinite => {
                let offset = (index + self.total_items - self.start_index) % self.total_items;
                offset < count
            }
            WrapMode::Finite => index >= self.start_index && index < self.start_index + count,
        }
    }

    /// Number of distinct pages the indicator shows.
    pub fn page_count(&self) -> usize {
        if self.total_items == 0 {
            return 0;
        }
        if self.wrap_mode == WrapMode::Infinite && self.visible_count > 1 {
            self.total_items
        } else {
            self.total_items.saturating_sub(self.visible_count) + 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_start_index() {
        let window = SlideWindow::new(5, 3, 4, WrapMode::Finite);
        assert_eq!(window.start_index, 2);

        let window = SlideWindow::new(5, 3, 4, WrapMode::Infinite);
        assert_eq!(window.start_index, 4);

        let window = SlideWindow::new(0, 1, 7, WrapMode::Finite);
        assert_eq!(window.start_index, 0);
    }

    #[test]
    fn visible_indices_clamp_in_finite_mode() {
        let window = SlideWindow::new(5, 3, 1, WrapMode::Finite);
        assert_eq!(window.visible_indices(), vec![1, 2, 3]);
    }

    #[test]
    fn visible_indices_wrap_in_circular_mode() {
        let window = SlideWindow::new(5, 3, 4, WrapMode::Infinite);
        assert_eq!(window.visible_indices(), vec![4, 0, 1]);
    }

    #[test]
    fn visible_indices_cover_everything_when_window_is_wider() {
        let window = SlideWindow::new(2, 5, 0, WrapMode::Infinite);
        assert_eq!(window.visible_indices(), vec![0, 1]);
        assert_eq!(window.effective_visible(), 2);
    }

    #[test]
    fn contains_matches_visible_indices() {
        let window = SlideWindow::new(5, 3, 4, WrapMode::Infinite);
        for index in 0..5 {
            assert_eq!(
                window.contains(index),
                window.visible_indices().contains(&index),
                "index {index}"
            );
        }
        assert!(!window.contains(5));
    }

    #[test]
    fn page_count_by_mode() {
        assert_eq!(SlideWindow::new(5, 1, 0, WrapMode::Finite).page_count(), 5);
        assert_eq!(SlideWindow::new(5, 3, 0, WrapMode::Finite).page_count(), 3);
        assert_eq!(SlideWindow::new(5, 3, 0, WrapMode::Infinite).page_count(), 5);
        assert_eq!(SlideWindow::new(5, 1, 0, WrapMode::Infinite).page_count(), 5);
        assert_eq!(SlideWindow::new(2, 5, 0, WrapMode::Finite).page_count(), 1);
        assert_eq!(SlideWindow::new(0, 1, 0, WrapMode::Finite).page_count(), 0);
    }
}
