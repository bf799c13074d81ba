//! Core data model definitions shared across Rondel crates.
#![allow(missing_docs)]

pub mod config;
pub mod error;
pub mod ids;
pub mod item;
pub mod strings;

// Intentionally curated re-exports for downstream consumers.
pub use config::{CarouselConfig, WrapMode};
pub use error::{ConfigError, Result as ModelResult};
pub use ids::ItemId;
pub use item::CarouselItem;
pub use strings::{CarouselStrings, CarouselStringsOverride};
