//! Per-image load tracking for the placeholder/image swap.
//!
//! The rendering engine fetches each image itself; its `load` and `error`
//! events feed a [`PreloadTracker`], and a watchdog marks images that never
//! answer as failed. Nothing here blocks the caller.

use std::collections::BTreeMap;

mod image;
pub use image::PreloadedImage;

/// A remote image shown in a gallery or carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaItem {
    pub id: u32,
    pub url: &'static str,
    pub alt: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    state: LoadState,
    attempt: u32,
}

/// Load state for a fixed set of media items.
///
/// `Loaded` is terminal. `Failed` can be retried, which returns the item to
/// `Loading` under a new attempt number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreloadTracker {
    entries: BTreeMap<u32, Entry>,
}

impl PreloadTracker {
    pub fn new(ids: impl IntoIterator<Item = u32>) -> Self {
        let entries = ids
            .into_iter()
            .map(|id| {
                (
                    id,
                    Entry {
                        state: LoadState::Loading,
                        attempt: 0,
                    },
                )
            })
            .collect();
        Self { entries }
    }

    pub fn for_items(items: &[MediaItem]) -> Self {
        Self::new(items.iter().map(|item| item.id))
    }

    /// Current state; unknown ids report `Loading` so they render a placeholder.
    pub fn state(&self, id: u32) -> LoadState {
        self.entries
            .get(&id)
            .map(|entry| entry.state)
            .unwrap_or(LoadState::Loading)
    }

    pub fn is_loaded(&self, id: u32) -> bool {
        self.state(id) == LoadState::Loaded
    }

    pub fn attempt(&self, id: u32) -> u32 {
        self.entries.get(&id).map(|entry| entry.attempt).unwrap_or(0)
    }

    pub fn loaded_count(&self) -> usize {
        self.entries
            .values()
            .filter(|entry| entry.state == LoadState::Loaded)
            .count()
    }

    /// Returns `true` only on the transition into `Loaded`.
    pub fn mark_loaded(&mut self, id: u32) -> bool {
        match self.entries.get_mut(&id) {
            Some(entry) if entry.state != LoadState::Loaded => {
                entry.state = LoadState::Loaded;
                true
            }
            _ => false,
        }
    }

    /// Only a `Loading` item can fail.
    pub fn mark_failed(&mut self, id: u32) -> bool {
        match self.entries.get_mut(&id) {
            Some(entry) if entry.state == LoadState::Loading => {
                entry.state = LoadState::Failed;
                true
            }
            _ => false,
        }
    }

    /// Watchdog expiry for `attempt`. Fails the item only if that attempt is
    /// still the current one and still loading; a stale watchdog from before a
    /// retry, or one firing after the image arrived, changes nothing.
    pub fn time_out(&mut self, id: u32, attempt: u32) -> bool {
        if self.attempt(id) != attempt {
            return false;
        }
        self.mark_failed(id)
    }

    pub fn retry(&mut self, id: u32) -> bool {
        match self.entries.get_mut(&id) {
            Some(entry) if entry.state == LoadState::Failed => {
                entry.state = LoadState::Loading;
                entry.attempt = entry.attempt.saturating_add(1);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_start_loading() {
        let tracker = PreloadTracker::new([1, 2, 3]);
        assert_eq!(tracker.state(2), LoadState::Loading);
        assert_eq!(tracker.loaded_count(), 0);
    }

    #[test]
    fn loaded_transition_happens_once() {
        let mut tracker = PreloadTracker::new([1]);
        assert!(tracker.mark_loaded(1));
        assert!(!tracker.mark_loaded(1));
        assert!(tracker.is_loaded(1));
    }

    #[test]
    fn loaded_never_regresses() {
        let mut tracker = PreloadTracker::new([1]);
        tracker.mark_loaded(1);

        assert!(!tracker.mark_failed(1));
        assert!(!tracker.retry(1));
        assert_eq!(tracker.state(1), LoadState::Loaded);
    }

    #[test]
    fn failures_are_independent_per_item() {
        let mut tracker = PreloadTracker::new([1, 2]);
        tracker.mark_failed(1);
        tracker.mark_loaded(2);

        assert_eq!(tracker.state(1), LoadState::Failed);
        assert_eq!(tracker.state(2), LoadState::Loaded);
        assert_eq!(tracker.loaded_count(), 1);
    }

    #[test]
    fn retry_only_from_failed_and_bumps_attempt() {
        let mut tracker = PreloadTracker::new([7]);
        assert!(!tracker.retry(7));

        tracker.mark_failed(7);
        assert!(tracker.retry(7));
        assert_eq!(tracker.state(7), LoadState::Loading);
        assert_eq!(tracker.attempt(7), 1);

        assert!(tracker.mark_loaded(7));
    }

    #[test]
    fn time_out_fails_current_attempt() {
        let mut tracker = PreloadTracker::new([3]);
        assert!(tracker.time_out(3, 0));
        assert_eq!(tracker.state(3), LoadState::Failed);
    }

    #[test]
    fn stale_time_out_ignored_after_retry() {
        let mut tracker = PreloadTracker::new([3]);
        tracker.mark_failed(3);
        tracker.retry(3);

        assert!(!tracker.time_out(3, 0));
        assert_eq!(tracker.state(3), LoadState::Loading);

        assert!(tracker.time_out(3, 1));
        assert_eq!(tracker.state(3), LoadState::Failed);
    }

    #[test]
    fn time_out_never_overrides_loaded() {
        let mut tracker = PreloadTracker::new([3]);
        tracker.mark_loaded(3);
        assert!(!tracker.time_out(3, 0));
        assert!(tracker.is_loaded(3));
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut tracker = PreloadTracker::new([1]);
        assert!(!tracker.mark_loaded(99));
        assert!(!tracker.mark_failed(99));
        assert_eq!(tracker.state(99), LoadState::Loading);
    }

    #[test]
    fn tracker_from_items_uses_ids() {
        let items = [
            MediaItem {
                id: 4,
                url: "https://example.com/a.jpg",
                alt: "a",
            },
            MediaItem {
                id: 9,
                url: "https://example.com/b.jpg",
                alt: "b",
            },
        ];
        let mut tracker = PreloadTracker::for_items(&items);
        assert!(tracker.mark_loaded(9));
        assert!(!tracker.is_loaded(4));
    }
}
