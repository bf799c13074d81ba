//! Swipe translation: from "which item the gesture landed on" to a discrete step.

use rondel_model::ItemId;

use crate::policy::SlideDirection;

/// A gesture outcome expressed as a navigation step.
///
/// Consumed by the same transition path as button clicks, which use
/// magnitude 1. Magnitude 0 means the gesture resolved to no movement and
/// must produce no transition and no notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepEvent {
    pub direction: SlideDirection,
    pub magnitude: usize,
    pub origin: ItemId,
}

impl StepEvent {
    pub fn is_noop(&self) -> bool {
        self.magnitude == 0
    }
}

/// Translate a completed swipe into a [`StepEvent`].
///
/// `active` is the index the gesture left active, `start` the window start
/// before the gesture, `after` whether the motion was forward. Distances that
/// cross the seam are resolved against `total`, and a magnitude beyond
/// `total` is clamped rather than rejected to tolerate noisy gesture input.
pub fn translate_swipe(
    origin: ItemId,
    active: usize,
    start: usize,
    total: usize,
    after: bool,
) -> StepEvent {
    let direction = if after {
        SlideDirection::Next
    } else {
        SlideDirection::Previous
    };
    // A swipe at the first position before any rotation has happened.
    if total == 0 || (active == 0 && start == 0) {
        return StepEvent {
            direction,
            magnitude: 0,
            origin,
        };
    }
    let magnitude = if after {
        if active > start {
            active - start
        } else {
            total - start + active
        }
    } else if active < start {
        start - active
    } else {
        start + total - active
    };
    StepEvent {
        direction,
        magnitude: magnitude.min(total),
        origin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swipe(active: usize, start: usize, total: usize, after: bool) -> StepEvent {
        translate_swipe(ItemId::new(), active, start, total, after)
    }

    #[test]
    fn forward_within_range() {
        let step = swipe(2, 0, 5, true);
        assert_eq!(step.direction, SlideDirection::Next);
        assert_eq!(step.magnitude, 2);
    }

    #[test]
    fn forward_across_the_seam() {
        let step = swipe(0, 3, 5, true);
        assert_eq!(step.direction, SlideDirection::Next);
        assert_eq!(step.magnitude, 2);
    }

    #[test]
    fn backward_within_range() {
        let step = swipe(1, 3, 5, false);
        assert_eq!(step.direction, SlideDirection::Previous);
        assert_eq!(step.magnitude, 2);
    }

    #[test]
    fn backward_across_the_seam() {
        let step = swipe(4, 1, 5, false);
        assert_eq!(step.direction, SlideDirection::Previous);
        assert_eq!(step.magnitude, 2);
    }

    #[test]
    fn swipe_at_origin_is_a_noop() {
        assert!(swipe(0, 0, 5, true).is_noop());
        assert!(swipe(0, 0, 5, false).is_noop());
    }

    #[test]
    fn full_rotation_clamps_to_total() {
        // Landing back on the start counts as a full cycle, never more.
        let step = swipe(3, 3, 5, true);
        assert_eq!(step.magnitude, 5);
    }

    #[test]
    fn empty_carousel_translates_to_noop() {
        assert!(swipe(0, 0, 0, true).is_noop());
    }
}
