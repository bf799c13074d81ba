use std::time::Duration;

use crate::error::ConfigError;

/// Carousel paging and boundary behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WrapMode {
    /// Finite (clamped) carousel.
    Finite,
    /// Circular carousel. Indexing wraps with modulo arithmetic.
    Infinite,
}

/// Static configuration for a carousel instance. These can be derived from
/// presets (single, multi, looping) or provided ad-hoc by callsites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselConfig {
    /// Number of items shown at once.
    pub visible_count: usize,
    /// Window start position on initialization.
    pub start_index: usize,
    pub wrap_mode: WrapMode,
    /// How long the host's slide animation runs; exiting items stay visible
    /// for this long after a transition.
    pub transition_duration: Duration,
    /// Whether swipe/drag input is honored.
    pub swipe_enabled: bool,
    /// Item count above which the page indicator switches from dots to a
    /// numeric label.
    pub numeric_indicator_limit: usize,
}

impl CarouselConfig {
    /// One item at a time, stopping at both ends.
    pub const fn single() -> Self {
        Self {
            visible_count: 1,
            start_index: 0,
            wrap_mode: WrapMode::Finite,
            transition_duration: Duration::from_millis(150),
            swipe_enabled: true,
            numeric_indicator_limit: 8,
        }
    }

    /// Several items at once, stopping at both ends.
    pub const fn multi(visible_count: usize) -> Self {
        Self {
            visible_count,
            ..Self::single()
        }
    }

    /// One item at a time, wrapping past both ends.
    pub const fn looping() -> Self {
        Self {
            wrap_mode: WrapMode::Infinite,
            ..Self::single()
        }
    }

    /// Check the constraints the engine relies on. A failed validation makes
    /// the engine render inert instead of panicking, but hosts that want the
    /// error itself can call this up front.
    pub fn validate(&self, total_items: usize) -> Result<(), ConfigError> {
        if self.visible_count == 0 {
            return Err(ConfigError::ZeroVisibleCount);
        }
        if total_items > 0 && self.start_index >= total_items {
            return Err(ConfigError::StartIndexOutOfRange {
                start: self.start_index,
                total: total_items,
            });
        }
        Ok(())
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::single()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets() {
        let single = CarouselConfig::single();
        assert_eq!(single.visible_count, 1);
        assert_eq!(single.wrap_mode, WrapMode::Finite);
        assert_eq!(single.transition_duration, Duration::from_millis(150));

        assert_eq!(CarouselConfig::multi(3).visible_count, 3);
        assert_eq!(CarouselConfig::looping().wrap_mode, WrapMode::Infinite);
    }

    #[test]
    fn validate_rejects_zero_visible_count() {
        let config = CarouselConfig::multi(0);
        assert_eq!(config.validate(5), Err(ConfigError::ZeroVisibleCount));
    }

    #[test]
    fn validate_rejects_out_of_range_start() {
        let config = CarouselConfig {
            start_index: 5,
            ..CarouselConfig::single()
        };
        assert_eq!(
            config.validate(5),
            Err(ConfigError::StartIndexOutOfRange { start: 5, total: 5 })
        );
    }

    #[test]
    fn validate_accepts_empty_carousel() {
        // Zero items is a degraded state, not a configuration error.
        assert_eq!(CarouselConfig::single().validate(0), Ok(()));
    }
}
