//! Shared, refreshable dictionary snapshot
//!
//! Builds lazily on first use, then hands out the same `Arc` until a refresh swaps
//! in a new snapshot. Readers always see a whole snapshot, old or new.

use super::builder::{DictionaryBuilder, DictionaryError};
use super::snapshot::DictionarySnapshot;
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tracing::{info, warn};

/// Snapshot cache with an optional max age
///
/// Refresh policy: [`get`](Self::get) never rebuilds a cached snapshot,
/// [`get_fresh`](Self::get_fresh) rebuilds once the snapshot is older than the
/// max age, and [`refresh`](Self::refresh) always rebuilds. A failed rebuild
/// leaves the previous snapshot in place.
pub struct SnapshotCache {
    builder: DictionaryBuilder,
    max_age: Option<Duration>,
    current: RwLock<Option<Arc<DictionarySnapshot>>>,
    building: Mutex<()>,
}

impl SnapshotCache {
    #[must_use]
    pub fn new(builder: DictionaryBuilder) -> Self {
        Self {
            builder,
            max_age: None,
            current: RwLock::new(None),
            building: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn with_max_age(mut self, max_age: Duration) -> Self {
        self.max_age = Some(max_age);
        self
    }

    /// Seed the cache with an already-built snapshot
    #[must_use]
    pub fn preloaded(self, snapshot: DictionarySnapshot) -> Self {
        *self.current.write() = Some(Arc::new(snapshot));
        self
    }

    #[must_use]
    pub const fn builder(&self) -> &DictionaryBuilder {
        &self.builder
    }

    /// The cached snapshot, without building
    #[must_use]
    pub fn current(&self) -> Option<Arc<DictionarySnapshot>> {
        self.current.read().clone()
    }

    /// The cached snapshot, building it on first use
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if the first build yields no words.
    pub fn get(&self) -> Result<Arc<DictionarySnapshot>, DictionaryError> {
        if let Some(snapshot) = self.current() {
            return Ok(snapshot);
        }

        let _guard = self.building.lock();
        // Another caller may have finished building while we waited
        if let Some(snapshot) = self.current() {
            return Ok(snapshot);
        }
        self.rebuild()
    }

    /// Like [`get`](Self::get), but rebuilds a snapshot older than the max age
    ///
    /// A stale snapshot is still returned if the rebuild fails.
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` only when there is no snapshot at all.
    pub fn get_fresh(&self) -> Result<Arc<DictionarySnapshot>, DictionaryError> {
        match self.current() {
            Some(snapshot) if !self.is_stale(&snapshot) => Ok(snapshot),
            Some(stale) => {
                let _guard = self.building.lock();
                // Another caller may have rebuilt it while we waited
                match self.current() {
                    Some(snapshot) if !self.is_stale(&snapshot) => Ok(snapshot),
                    _ => self.rebuild().or(Ok(stale)),
                }
            }
            None => self.get(),
        }
    }

    /// Rebuild now and swap the result in
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if the rebuild yields no words; the previous
    /// snapshot, if any, stays cached.
    pub fn refresh(&self) -> Result<Arc<DictionarySnapshot>, DictionaryError> {
        let _guard = self.building.lock();
        self.rebuild()
    }

    /// When the cached snapshot was built
    #[must_use]
    pub fn last_refresh(&self) -> Option<SystemTime> {
        self.current().map(|s| s.built_at())
    }

    fn is_stale(&self, snapshot: &DictionarySnapshot) -> bool {
        let Some(max_age) = self.max_age else {
            return false;
        };
        snapshot
            .built_at()
            .elapsed()
            .map_or(true, |age| age >= max_age)
    }

    fn rebuild(&self) -> Result<Arc<DictionarySnapshot>, DictionaryError> {
        match self.builder.build() {
            Ok(snapshot) => {
                let snapshot = Arc::new(snapshot);
                *self.current.write() = Some(Arc::clone(&snapshot));
                info!(words = snapshot.len(), "Dictionary cache refreshed");
                Ok(snapshot)
            }
            Err(e) => {
                if self.current.read().is_some() {
                    warn!(error = %e, "Dictionary rebuild failed, keeping previous snapshot");
                }
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::dictionary::WordEntry;
    use crate::fetch::testing::StaticFetcher;
    use crate::fetch::{Fetcher, Page, SourceFetchError};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    const LEXICO: &str = "https://words.test/lexico";

    /// Serves a different word list on every call, then fails
    struct RotatingFetcher {
        calls: AtomicUsize,
        lists: Vec<&'static str>,
    }

    impl Fetcher for RotatingFetcher {
        fn get(&self, url: &str) -> Result<Page, SourceFetchError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            self.lists
                .get(call)
                .map(|body| Page::ok(*body))
                .ok_or_else(|| SourceFetchError::Transport {
                    url: url.to_string(),
                    message: "gone".to_string(),
                })
        }
    }

    fn rotating(lists: Vec<&'static str>) -> (Arc<RotatingFetcher>, SnapshotCache) {
        let fetcher = Arc::new(RotatingFetcher {
            calls: AtomicUsize::new(0),
            lists,
        });
        let builder = DictionaryBuilder::new(fetcher.clone(), [LEXICO.to_string()]);
        (fetcher, SnapshotCache::new(builder))
    }

    #[test]
    fn cache_builds_lazily_once() {
        let (fetcher, cache) = rotating(vec!["termo", "mundo"]);
        assert!(cache.current().is_none());
        assert!(cache.last_refresh().is_none());

        let first = cache.get().unwrap();
        let second = cache.get().unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
        assert!(first.contains_accented("termo"));
        assert!(cache.last_refresh().is_some());
    }

    #[test]
    fn cache_refresh_swaps_snapshot() {
        let (_, cache) = rotating(vec!["termo", "mundo"]);
        let old = cache.get().unwrap();
        let new = cache.refresh().unwrap();

        assert!(old.contains_accented("termo"));
        assert!(new.contains_accented("mundo"));
        assert!(!new.contains_accented("termo"));
        assert!(Arc::ptr_eq(&new, &cache.current().unwrap()));
    }

    #[test]
    fn cache_failed_refresh_keeps_previous() {
        let (_, cache) = rotating(vec!["termo"]);
        let old = cache.get().unwrap();

        assert!(matches!(cache.refresh(), Err(DictionaryError::Empty)));
        assert!(Arc::ptr_eq(&old, &cache.current().unwrap()));
    }

    #[test]
    fn cache_get_fresh_rebuilds_stale_snapshot() {
        let (fetcher, cache) = rotating(vec!["termo", "mundo"]);
        let cache = cache.with_max_age(Duration::ZERO);

        cache.get().unwrap();
        let fresh = cache.get_fresh().unwrap();

        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 2);
        assert!(fresh.contains_accented("mundo"));
    }

    #[test]
    fn cache_get_fresh_falls_back_to_stale() {
        let (_, cache) = rotating(vec!["termo"]);
        let cache = cache.with_max_age(Duration::ZERO);

        cache.get().unwrap();
        let snapshot = cache.get_fresh().unwrap();
        assert!(snapshot.contains_accented("termo"));
    }

    /// Slow source that counts requests
    struct SlowFetcher {
        calls: AtomicUsize,
    }

    impl Fetcher for SlowFetcher {
        fn get(&self, _url: &str) -> Result<Page, SourceFetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            thread::sleep(Duration::from_millis(200));
            Ok(Page::ok("mundo"))
        }
    }

    #[test]
    fn cache_get_fresh_rebuilds_once_for_concurrent_callers() {
        let fetcher = Arc::new(SlowFetcher {
            calls: AtomicUsize::new(0),
        });
        let builder = DictionaryBuilder::new(fetcher.clone(), [LEXICO.to_string()]);
        let old = DictionarySnapshot::from_entries([WordEntry {
            word: Word::new("termo").unwrap(),
            source: "test".to_string(),
        }])
        .with_built_at(SystemTime::now() - Duration::from_secs(120));
        let cache = SnapshotCache::new(builder)
            .with_max_age(Duration::from_secs(60))
            .preloaded(old);

        thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    let snapshot = cache.get_fresh().unwrap();
                    assert!(snapshot.contains_accented("mundo"));
                });
            }
        });

        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn cache_without_max_age_never_stale() {
        let (fetcher, cache) = rotating(vec!["termo", "mundo"]);
        cache.get().unwrap();
        cache.get_fresh().unwrap();
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn cache_empty_first_build_is_error() {
        let builder = DictionaryBuilder::new(Arc::new(StaticFetcher::new()), [LEXICO.to_string()]);
        let cache = SnapshotCache::new(builder);
        assert!(matches!(cache.get(), Err(DictionaryError::Empty)));
        assert!(cache.current().is_none());
    }

    #[test]
    fn cache_preloaded_skips_build() {
        let fetcher = Arc::new(StaticFetcher::new());
        let builder = DictionaryBuilder::new(fetcher.clone(), [LEXICO.to_string()]);
        let snapshot = DictionarySnapshot::from_entries([WordEntry {
            word: Word::new("festa").unwrap(),
            source: "test".to_string(),
        }]);
        let cache = SnapshotCache::new(builder).preloaded(snapshot);

        assert!(cache.get().unwrap().contains_accented("festa"));
        assert!(fetcher.requests().is_empty());
    }
}
