//! Registry for managing multiple carousel engines keyed by [`CarouselKey`].

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use uuid::Uuid;

use rondel_model::{CarouselConfig, CarouselItem};

use crate::carousel::Carousel;

/// Identifies one carousel instance within a host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarouselKey {
    /// A well-known carousel the host refers to by name ("recently-added").
    Named(&'static str),
    /// A dynamically created instance.
    Instance(Uuid),
}

impl CarouselKey {
    /// Mint a key for a carousel that has no stable name.
    pub fn unique() -> Self {
        Self::Instance(Uuid::now_v7())
    }
}

/// Owns every live carousel engine of a host.
///
/// Hosts with a single carousel can hold a [`Carousel`] directly; pages that
/// stack several (a media row per library, say) go through the registry so
/// one [`tick_all`](CarouselRegistry::tick_all) pump drives every pending
/// deferred pass and removal reliably tears the engine down.
#[derive(Debug, Default)]
pub struct CarouselRegistry {
    engines: HashMap<CarouselKey, Carousel>,
}

impl CarouselRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a mutable reference, creating the engine with the provided
    /// factory when absent.
    pub fn get_or_insert_with<F>(&mut self, key: CarouselKey, init: F) -> &mut Carousel
    where
        F: FnOnce() -> Carousel,
    {
        self.engines.entry(key).or_insert_with(init)
    }

    /// Convenience helper for creating an engine from config plus items.
    ///
    /// Always brings the item set up to date even if the engine already
    /// exists, so a carousel reflects current content without waiting for a
    /// host-driven rebuild.
    pub fn ensure(
        &mut self,
        key: CarouselKey,
        config: CarouselConfig,
        items: Vec<CarouselItem>,
    ) -> &mut Carousel {
        match self.engines.entry(key) {
            Entry::Occupied(entry) => {
                let engine = entry.into_mut();
                if engine.items().len() != items.len() {
                    engine.set_items(items);
                }
                engine
            }
            Entry::Vacant(entry) => entry.insert(Carousel::new(config, items)),
        }
    }

    pub fn get(&self, key: &CarouselKey) -> Option<&Carousel> {
        self.engines.get(key)
    }

    pub fn get_mut(&mut self, key: &CarouselKey) -> Option<&mut Carousel> {
        self.engines.get_mut(key)
    }

    /// Remove an engine, destroying it first so a pending deferred pass can
    /// never fire against items the host has already unmounted.
    pub fn remove(&mut self, key: &CarouselKey) -> Option<Carousel> {
        let mut engine = self.engines.remove(key)?;
        engine.destroy();
        Some(engine)
    }

    /// Return a snapshot of all keys currently in the registry.
    pub fn keys(&self) -> Vec<CarouselKey> {
        self.engines.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.engines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }

    /// Pump every engine's deferred visibility pass.
    pub fn tick_all(&mut self) {
        for engine in self.engines.values_mut() {
            engine.tick();
        }
    }
}
