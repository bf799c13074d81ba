//! The carousel engine: navigation, visibility ownership, and lifecycle.

use std::fmt;

use rondel_model::{
    CarouselConfig, CarouselItem, CarouselStrings, CarouselStringsOverride, ConfigError, ItemId,
};

use crate::clock::{Clock, SystemClock};
use crate::events::{SlideChange, SlideChangeListener};
use crate::gesture;
use crate::policy::{NavigationState, SlideDirection};
use crate::scheduler::VisibilityScheduler;
use crate::window::SlideWindow;

/// A single carousel instance.
///
/// The engine owns the items' `visible`/`has_margin` flags and the window
/// position. Hosts feed input in (`next`, `previous`, `on_swipe_end`,
/// `on_drag`), pump [`tick`](Carousel::tick) from their frame loop or timer
/// so the deferred hide pass can run, and read state back through queries or
/// the slide-change listener.
///
/// A navigation call always updates the window and emits the notification
/// synchronously before returning; only hiding the items that scrolled out is
/// deferred by the configured transition duration.
pub struct Carousel {
    items: Vec<CarouselItem>,
    window: SlideWindow,
    nav: NavigationState,
    scheduler: VisibilityScheduler,
    config: CarouselConfig,
    strings: CarouselStrings,
    clock: Box<dyn Clock>,
    listener: Option<SlideChangeListener>,
    config_error: Option<ConfigError>,
    slide_swiped: bool,
    dragging: bool,
    destroyed: bool,
}

impl Carousel {
    /// Create an engine over `items` using the system clock.
    pub fn new(config: CarouselConfig, items: Vec<CarouselItem>) -> Self {
        Self::with_clock(config, items, Box::new(SystemClock))
    }

    /// Create an engine with an injected clock (virtual in tests).
    ///
    /// An invalid configuration does not panic: the carousel comes up inert,
    /// with no items visible and both chevrons disabled, and the error is
    /// kept for [`config_error`](Carousel::config_error).
    pub fn with_clock(
        config: CarouselConfig,
        items: Vec<CarouselItem>,
        clock: Box<dyn Clock>,
    ) -> Self {
        let total = items.len();
        let config_error = config.validate(total).err();
        let window = SlideWindow::new(
            total,
            config.visible_count.max(1),
            config.start_index,
            config.wrap_mode,
        );
        let mut carousel = Self {
            items,
            window,
            nav: NavigationState::INERT,
            scheduler: VisibilityScheduler::new(),
            config,
            strings: CarouselStrings::default(),
            clock,
            listener: None,
            config_error,
            slide_swiped: false,
            dragging: false,
            destroyed: false,
        };
        match carousel.config_error {
            Some(err) => {
                log::warn!("carousel configuration rejected, rendering inert: {err}");
            }
            None => {
                carousel.nav = carousel.window.navigation_state();
                carousel.reveal_entering();
                carousel.apply_margins();
            }
        }
        carousel
    }

    /// Register the slide-change callback. Replaces any previous listener;
    /// unregistered automatically on [`destroy`](Carousel::destroy).
    pub fn on_slide_change(&mut self, listener: impl FnMut(&SlideChange) + 'static) {
        if self.destroyed {
            return;
        }
        self.listener = Some(Box::new(listener));
    }

    /// Transition to the next window. No-op while the right chevron is
    /// disabled, so a finite carousel can never be driven past its tail.
    pub fn next(&mut self) {
        self.navigate(SlideDirection::Next);
    }

    /// Transition to the previous window. No-op while the left chevron is
    /// disabled.
    pub fn previous(&mut self) {
        self.navigate(SlideDirection::Previous);
    }

    /// Keyboard path for the right arrow. Same boundary guard as
    /// [`next`](Carousel::next), but a drag in progress swallows the key so
    /// the pointer keeps ownership of the window until it is released.
    pub fn arrow_next(&mut self) {
        if self.dragging {
            return;
        }
        self.navigate(SlideDirection::Next);
    }

    /// Keyboard path for the left arrow; see [`arrow_next`](Carousel::arrow_next).
    pub fn arrow_previous(&mut self) {
        if self.dragging {
            return;
        }
        self.navigate(SlideDirection::Previous);
    }

    fn navigate(&mut self, direction: SlideDirection) {
        if self.inert() {
            return;
        }
        let blocked = match direction {
            SlideDirection::Next => self.nav.right_disabled,
            SlideDirection::Previous => self.nav.left_disabled,
        };
        if blocked {
            log::debug!("navigation {direction:?} ignored at boundary");
            return;
        }
        self.commit(direction, 1);
    }

    /// Translate a completed swipe into a transition. `after` is true for
    /// forward motion. A gesture that resolves to no movement is dropped
    /// without a notification.
    pub fn on_swipe_end(&mut self, origin: ItemId, after: bool) {
        if self.inert() || !self.config.swipe_enabled {
            return;
        }
        let Some(active) = self.items.iter().position(|item| item.id() == origin) else {
            log::debug!("swipe ended on unknown item {origin}");
            return;
        };
        let step = gesture::translate_swipe(
            origin,
            active,
            self.window.start_index,
            self.window.total_items,
            after,
        );
        if step.is_noop() {
            return;
        }
        self.slide_swiped = true;
        self.commit(step.direction, step.magnitude);
    }

    /// Drag-state handling. While a drag is in progress every item is
    /// revealed so the slide effect is not lost; a drag that ends without a
    /// completed swipe schedules a revert pass for the current window.
    pub fn on_drag(&mut self, dragging: bool) {
        if self.inert() || !self.config.swipe_enabled {
            return;
        }
        if dragging {
            self.scheduler.cancel();
            for item in &mut self.items {
                item.show();
            }
            self.slide_swiped = false;
            self.dragging = true;
        } else {
            self.dragging = false;
            if !self.slide_swiped {
                self.scheduler.schedule(
                    self.clock.now(),
                    self.config.transition_duration,
                    self.window,
                );
            }
        }
    }

    /// Apply a due deferred pass, if any. Hosts pump this from their frame
    /// loop or a timer with at least the transition duration's resolution.
    pub fn tick(&mut self) {
        if self.destroyed {
            return;
        }
        if let Some(pass) = self.scheduler.due(self.clock.now()) {
            self.enforce_window_visibility(pass.window);
        }
    }

    /// Tear down: cancels the pending pass and drops the listener. Every
    /// call after this is a no-op, so a stale host timer can no longer
    /// mutate items the carousel no longer owns.
    pub fn destroy(&mut self) {
        self.scheduler.cancel();
        self.listener = None;
        self.destroyed = true;
    }

    /// Replace the item set, re-initializing the window at the nearest valid
    /// position. Applies visibility immediately; no notification is emitted.
    pub fn set_items(&mut self, items: Vec<CarouselItem>) {
        if self.destroyed {
            return;
        }
        self.items = items;
        self.reinitialize();
    }

    /// Change how many items are shown at once, keeping the current position
    /// where possible. Mirrors a host-driven layout change.
    pub fn set_visible_count(&mut self, visible_count: usize) {
        if self.destroyed {
            return;
        }
        self.config.visible_count = visible_count;
        self.reinitialize();
    }

    /// Apply a partial strings override on top of the current strings.
    pub fn override_strings(&mut self, overrides: CarouselStringsOverride) {
        self.strings = std::mem::take(&mut self.strings).merged(overrides);
    }

    pub fn strings(&self) -> &CarouselStrings {
        &self.strings
    }

    /// Chevron enablement, queryable at any time.
    pub fn navigation_state(&self) -> NavigationState {
        self.nav
    }

    pub fn window(&self) -> &SlideWindow {
        &self.window
    }

    pub fn items(&self) -> &[CarouselItem] {
        &self.items
    }

    /// The items the window currently covers, in display order.
    pub fn active_items(&self) -> Vec<&CarouselItem> {
        if self.inert() {
            return Vec::new();
        }
        self.window
            .visible_indices()
            .into_iter()
            .map(|index| &self.items[index])
            .collect()
    }

    /// Whether a deferred hide pass is still outstanding.
    pub fn is_transitioning(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// Whether a drag gesture is currently in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// The configuration error this carousel degraded on, if any.
    pub fn config_error(&self) -> Option<ConfigError> {
        self.config_error
    }

    pub fn page_count(&self) -> usize {
        if self.config_error.is_some() {
            return 0;
        }
        self.window.page_count()
    }

    /// `"{current} of {pages}"` for the numeric page indicator.
    pub fn page_indicator_label(&self) -> String {
        format!(
            "{} {} {}",
            self.current_page(),
            self.strings.of_label,
            self.page_count()
        )
    }

    /// Longer variant for assistive tech: "Displaying item 3 of 7".
    pub fn screen_reader_label(&self) -> String {
        format!(
            "{} {} {} {}",
            self.strings.reader_label,
            self.current_page(),
            self.strings.of_label,
            self.page_count()
        )
    }

    /// Whether the indicator should render as a numeric label instead of
    /// page dots; kicks in once there are too many items for dots.
    pub fn numeric_indicator(&self) -> bool {
        self.items.len() > self.config.numeric_indicator_limit
    }

    fn current_page(&self) -> usize {
        if self.config_error.is_some() || self.window.total_items == 0 {
            0
        } else {
            self.window.start_index + 1
        }
    }

    fn inert(&self) -> bool {
        self.destroyed || self.config_error.is_some() || self.items.is_empty()
    }

    /// Shared transition path for chevrons, keyboard, and swipe steps.
    fn commit(&mut self, direction: SlideDirection, magnitude: usize) {
        let previous_start = self.window.start_index;
        self.window.shift(direction, magnitude);
        self.nav = self.window.navigation_state();
        self.reveal_entering();
        self.apply_margins();
        log::debug!(
            "slide {direction:?} by {magnitude}: window {previous_start} -> {} of {}",
            self.window.start_index,
            self.window.total_items,
        );
        self.scheduler.schedule(
            self.clock.now(),
            self.config.transition_duration,
            self.window,
        );
        self.notify(direction);
    }

    fn notify(&mut self, direction: SlideDirection) {
        let change = SlideChange {
            active_items: self
                .window
                .visible_indices()
                .into_iter()
                .map(|index| self.items[index].id())
                .collect(),
            direction,
        };
        if let Some(listener) = self.listener.as_mut() {
            listener(&change);
        }
    }

    /// Reveal the items entering the window. Items scrolling out keep their
    /// visibility until the deferred pass runs.
    fn reveal_entering(&mut self) {
        for index in self.window.visible_indices() {
            self.items[index].show();
        }
    }

    /// Every active item except the last carries the gap margin when more
    /// than one item is shown.
    fn apply_margins(&mut self) {
        let active = self.window.visible_indices();
        let multi = self.window.effective_visible() > 1;
        let last = active.last().copied();
        for (index, item) in self.items.iter_mut().enumerate() {
            let margin = multi && Some(index) != last && active.contains(&index);
            item.set_margin(margin);
        }
    }

    /// Make visibility match `window` exactly: reveal inside, hide outside.
    fn enforce_window_visibility(&mut self, window: SlideWindow) {
        let active = window.visible_indices();
        log::debug!(
            "visibility pass: window {}..+{} of {}",
            window.start_index,
            window.effective_visible(),
            window.total_items,
        );
        for (index, item) in self.items.iter_mut().enumerate() {
            if active.contains(&index) {
                item.show();
            } else {
                item.hide();
            }
        }
    }

    /// Re-derive the window after an item or layout change; visibility is
    /// applied immediately since there is no animation to wait out.
    fn reinitialize(&mut self) {
        self.scheduler.cancel();
        let total = self.items.len();
        self.config_error = if self.config.visible_count == 0 {
            Some(ConfigError::ZeroVisibleCount)
        } else {
            None
        };
        self.window = SlideWindow::new(
            total,
            self.config.visible_count.max(1),
            self.window.start_index,
            self.config.wrap_mode,
        );
        if let Some(err) = self.config_error {
            log::warn!("carousel reconfiguration rejected, rendering inert: {err}");
            self.nav = NavigationState::INERT;
            for item in &mut self.items {
                item.hide();
                item.set_margin(false);
            }
            return;
        }
        self.nav = self.window.navigation_state();
        self.enforce_window_visibility(self.window);
        self.apply_margins();
    }
}

impl fmt::Debug for Carousel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carousel")
            .field("window", &self.window)
            .field("nav", &self.nav)
            .field("transitioning", &self.is_transitioning())
            .field("dragging", &self.dragging)
            .field("destroyed", &self.destroyed)
            .finish_non_exhaustive()
    }
}
