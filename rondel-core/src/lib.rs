//! Carousel active-window navigation core.
//!
//! Rondel tracks which items of a carousel are visible, decides how the
//! window moves in finite and circular mode, translates swipe gestures into
//! discrete steps, and defers the hide half of a transition until the host's
//! slide animation has finished. Rendering, input capture, and accessibility
//! wiring stay in the host; the engine owns only the item flags and window
//! state it hands back through queries and slide-change notifications.

pub mod carousel;
pub mod clock;
pub mod events;
pub mod focus;
pub mod gesture;
pub mod policy;
pub mod registry;
pub mod scheduler;
pub mod window;

pub use carousel::Carousel;
pub use clock::{Clock, SystemClock, VirtualClock};
pub use events::{SlideChange, SlideChangeListener};
pub use focus::{CarouselFocus, FocusSource};
pub use gesture::{StepEvent, translate_swipe};
pub use policy::{NavigationState, SlideDirection};
pub use registry::{CarouselKey, CarouselRegistry};
pub use scheduler::{VisibilityPass, VisibilityScheduler};
pub use window::SlideWindow;
