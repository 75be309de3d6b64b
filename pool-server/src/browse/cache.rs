//! Card cache.
//!
//! Cards are rebuilt on every date change in the original; caching by
//! `(facility name, date)` avoids redoing identical work. The key assumes no
//! two facilities share a name. Enrichment merges change facility metrics
//! out from under cached cards, so the merge path must call
//! [`CardCache::invalidate_all`] or stale, annotation-less cards would keep
//! rendering.

use moka::sync::Cache;

use crate::domain::Facility;

use super::card::{Card, build_card};

/// Default maximum number of cached cards.
const DEFAULT_CAPACITY: u64 = 4096;

/// Cache of built cards keyed by `(facility name, date)`.
#[derive(Clone)]
pub struct CardCache {
    cards: Cache<(String, String), Card>,
}

impl CardCache {
    /// Create a cache holding at most `max_capacity` cards.
    pub fn new(max_capacity: u64) -> Self {
        Self {
            cards: Cache::builder().max_capacity(max_capacity).build(),
        }
    }

    /// Fetch the card for `(facility, date)`, building and caching it on a
    /// miss. `None` when the facility has no windows that date.
    pub fn get_or_build(&self, facility: &Facility, date: &str) -> Option<Card> {
        let key = (facility.name.clone(), date.to_string());

        if let Some(card) = self.cards.get(&key) {
            return Some(card);
        }

        let card = build_card(facility, date)?;
        self.cards.insert(key, card.clone());
        Some(card)
    }

    /// Drop every cached card. Called after enrichment merges.
    pub fn invalidate_all(&self) {
        self.cards.invalidate_all();
    }

    /// Number of cached cards (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.cards.run_pending_tasks();
        self.cards.entry_count()
    }
}

impl Default for CardCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
