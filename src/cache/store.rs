//! In-memory resource cache
//!
//! Entries are keyed by [`QueryKey`] and hold the last good value as JSON.
//! Reads follow stale-while-revalidate:
//!
//! - fresh: served from memory, no network
//! - stale: served from memory, one background refetch is started
//! - empty or failed: the caller waits for the fetch
//!
//! Fetches run on their own task, so a reader that gives up waiting does not
//! cancel the network call; the result still lands in the cache. Concurrent
//! readers of a key that is being fetched share a single in-flight request.
//!
//! The state lock is never held across an `.await`.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::broadcast;
use tokio::time::Instant;

use super::key::QueryKey;
use crate::error::{ApiError, ApiResult};

const EVENT_CAPACITY: usize = 64;

type SharedFetch = Shared<BoxFuture<'static, ApiResult<Value>>>;

/// Observable status of a cache entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    Empty,
    Fetching,
    Fresh,
    Stale,
    Error,
}

/// Snapshot of one entry, as returned by [`ResourceCache::peek`].
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub key: QueryKey,
    pub status: CacheStatus,
    /// Last successfully fetched value; kept after a failed refetch
    pub value: Option<Value>,
    pub fetched_at: Option<Instant>,
    pub stale_after: Duration,
    /// Failure from the most recent fetch, if it failed
    pub error: Option<ApiError>,
}

impl CacheEntry {
    fn empty(key: QueryKey) -> Self {
        Self {
            key,
            status: CacheStatus::Empty,
            value: None,
            fetched_at: None,
            stale_after: Duration::ZERO,
            error: None,
        }
    }
}

/// Change notifications for subscribers (e.g. a UI re-rendering after a
/// background refetch).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheEvent {
    Updated(QueryKey),
    Failed(QueryKey),
    Invalidated(QueryKey),
}

struct InFlight {
    id: u64,
    fetch: SharedFetch,
    /// Started by a stale read; readers keep getting the old value meanwhile
    background: bool,
}

struct Slot {
    value: Option<Value>,
    fetched_at: Option<Instant>,
    stale_after: Duration,
    error: Option<ApiError>,
    in_flight: Option<InFlight>,
}

impl Slot {
    fn new(stale_after: Duration) -> Self {
        Self {
            value: None,
            fetched_at: None,
            stale_after,
            error: None,
            in_flight: None,
        }
    }

    fn status(&self, now: Instant) -> CacheStatus {
        if self.in_flight.is_some() {
            return CacheStatus::Fetching;
        }
        if self.error.is_some() {
            return CacheStatus::Error;
        }
        match self.fetched_at {
            None => CacheStatus::Empty,
            Some(at) if now.duration_since(at) > self.stale_after => CacheStatus::Stale,
            Some(_) => CacheStatus::Fresh,
        }
    }
}

#[derive(Default)]
struct State {
    slots: HashMap<QueryKey, Slot>,
    next_fetch_id: u64,
}

/// What a read decided to do while holding the lock
enum Plan {
    Serve(Value),
    Wait(SharedFetch),
}

/// Process-wide cache of API reads.
///
/// Cheap to clone; clones share the same state.
#[derive(Clone)]
pub struct ResourceCache {
    state: Arc<Mutex<State>>,
    events: broadcast::Sender<CacheEvent>,
    enabled: bool,
}

impl Default for ResourceCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceCache {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            state: Arc::new(Mutex::new(State::default())),
            events,
            enabled: true,
        }
    }

    /// Cache that never stores anything; every read hits the loader.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::new()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Subscribe to entry changes
    pub fn subscribe(&self) -> broadcast::Receiver<CacheEvent> {
        self.events.subscribe()
    }

    /// Read `key`, calling `loader` only when the cache cannot answer.
    ///
    /// `stale_after` is the staleness window for this read site.
    pub async fn read<T, F, Fut>(&self, key: &QueryKey, stale_after: Duration, loader: F) -> ApiResult<T>
    where
        T: Serialize + DeserializeOwned + Send + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = ApiResult<T>> + Send + 'static,
    {
        if !self.enabled {
            return loader().await;
        }

        let plan = {
            let mut state = self.lock();
            let now = Instant::now();
            let slot = state
                .slots
                .entry(key.clone())
                .or_insert_with(|| Slot::new(stale_after));
            slot.stale_after = stale_after;

            if let Some(in_flight) = &slot.in_flight {
                match (&slot.value, in_flight.background) {
                    (Some(value), true) => {
                        log::debug!("Cache stale: {} (refetch already running)", key);
                        Plan::Serve(value.clone())
                    }
                    _ => {
                        log::debug!("Attaching to in-flight fetch: {}", key);
                        Plan::Wait(in_flight.fetch.clone())
                    }
                }
            } else {
                match slot.status(now) {
                    CacheStatus::Fresh => {
                        log::debug!("Cache hit: {}", key);
                        Plan::Serve(slot.value.clone().unwrap_or(Value::Null))
                    }
                    CacheStatus::Stale => {
                        log::debug!("Cache stale: {} (revalidating in background)", key);
                        let value = slot.value.clone().unwrap_or(Value::Null);
                        let _revalidate = self.start_fetch(&mut state, key, loader, true);
                        Plan::Serve(value)
                    }
                    CacheStatus::Empty | CacheStatus::Error | CacheStatus::Fetching => {
                        log::debug!("Cache miss: {}", key);
                        Plan::Wait(self.start_fetch(&mut state, key, loader, false))
                    }
                }
            }
        };

        let value = match plan {
            Plan::Serve(value) => value,
            Plan::Wait(fetch) => fetch.await?,
        };

        serde_json::from_value(value)
            .map_err(|e| ApiError::InvalidResponse(format!("Cached value has wrong shape: {}", e)))
    }

    /// Current entry for `key`, or an `Empty` snapshot.
    pub fn peek(&self, key: &QueryKey) -> CacheEntry {
        let state = self.lock();
        let Some(slot) = state.slots.get(key) else {
            return CacheEntry::empty(key.clone());
        };
        CacheEntry {
            key: key.clone(),
            status: slot.status(Instant::now()),
            value: slot.value.clone(),
            fetched_at: slot.fetched_at,
            stale_after: slot.stale_after,
            error: slot.error.clone(),
        }
    }

    /// Remove every entry whose key starts with any of `prefixes`.
    ///
    /// Applied under a single lock, so no read can observe a half-applied
    /// invalidation. Fetches already in flight for removed keys still
    /// complete for the readers attached to them, but their results are not
    /// stored. Returns the number of entries removed.
    pub fn invalidate(&self, prefixes: &[QueryKey]) -> usize {
        let removed: Vec<QueryKey> = {
            let mut state = self.lock();
            let doomed: Vec<QueryKey> = state
                .slots
                .keys()
                .filter(|key| prefixes.iter().any(|prefix| key.starts_with(prefix)))
                .cloned()
                .collect();
            for key in &doomed {
                state.slots.remove(key);
            }
            doomed
        };

        for prefix in prefixes {
            log::debug!("Invalidated prefix {}", prefix);
        }
        for key in &removed {
            let _ = self.events.send(CacheEvent::Invalidated(key.clone()));
        }
        removed.len()
    }

    /// Remove entries under a single prefix
    pub fn remove(&self, prefix: &QueryKey) -> usize {
        self.invalidate(std::slice::from_ref(prefix))
    }

    /// Drop every entry
    pub fn clear(&self) {
        let count = {
            let mut state = self.lock();
            let count = state.slots.len();
            state.slots.clear();
            count
        };
        log::debug!("Cleared {} cache entries", count);
    }

    /// Number of entries currently held
    pub fn len(&self) -> usize {
        self.lock().slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Spawn the loader and register it as the key's in-flight fetch.
    fn start_fetch<T, F, Fut>(
        &self,
        state: &mut State,
        key: &QueryKey,
        loader: F,
        background: bool,
    ) -> SharedFetch
    where
        T: Serialize + Send + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = ApiResult<T>> + Send + 'static,
    {
        state.next_fetch_id += 1;
        let id = state.next_fetch_id;

        let cache = self.clone();
        let task_key = key.clone();
        let request = tokio::spawn(loader());
        // Completion runs outside the loader's task so a panicking or aborted
        // loader still moves the entry out of `Fetching`.
        let task = tokio::spawn(async move {
            let outcome = match request.await {
                Ok(result) => result.and_then(|data| {
                    serde_json::to_value(data)
                        .map_err(|e| ApiError::InvalidResponse(format!("Failed to cache value: {}", e)))
                }),
                Err(e) => Err(ApiError::Cancelled(e.to_string())),
            };
            cache.complete(&task_key, id, &outcome);
            outcome
        });

        let fetch = async move {
            task.await
                .unwrap_or_else(|e| Err(ApiError::Cancelled(e.to_string())))
        }
        .boxed()
        .shared();

        if let Some(slot) = state.slots.get_mut(key) {
            slot.in_flight = Some(InFlight {
                id,
                fetch: fetch.clone(),
                background,
            });
        }
        fetch
    }

    /// Record a fetch outcome, unless the entry was invalidated meanwhile.
    fn complete(&self, key: &QueryKey, id: u64, outcome: &ApiResult<Value>) {
        let event = {
            let mut state = self.lock();
            let Some(slot) = state.slots.get_mut(key) else {
                log::debug!("Discarding fetch result for invalidated key {}", key);
                return;
            };
            if slot.in_flight.as_ref().map(|f| f.id) != Some(id) {
                log::debug!("Discarding superseded fetch result for {}", key);
                return;
            }
            slot.in_flight = None;

            match outcome {
                Ok(value) => {
                    slot.value = Some(value.clone());
                    slot.fetched_at = Some(Instant::now());
                    slot.error = None;
                    CacheEvent::Updated(key.clone())
                }
                Err(err) => {
                    log::debug!("Fetch failed for {}: {}", key, err);
                    slot.error = Some(err.clone());
                    CacheEvent::Failed(key.clone())
                }
            }
        };
        let _ = self.events.send(event);
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::key::{PRODUCTS, VENDORS};
    use std::sync::atomic::{AtomicUsize, Ordering};

    const WINDOW: Duration = Duration::from_secs(300);

    /// Loader that counts invocations and resolves after `delay`.
    fn counting_loader(
        calls: &Arc<AtomicUsize>,
        delay: Duration,
        result: ApiResult<Vec<String>>,
    ) -> impl FnOnce() -> BoxFuture<'static, ApiResult<Vec<String>>> + use<> {
        let calls = calls.clone();
        move || {
            calls.fetch_add(1, Ordering::SeqCst);
            async move {
                tokio::time::sleep(delay).await;
                result
            }
            .boxed()
        }
    }

    /// Loader whose future panics instead of resolving.
    fn exploding_loader() -> impl FnOnce() -> BoxFuture<'static, ApiResult<Vec<String>>> {
        || {
            async {
                let items: Vec<String> = Vec::new();
                if items.is_empty() {
                    panic!("loader exploded");
                }
                Ok(items)
            }
            .boxed()
        }
    }

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_miss_then_fresh_hit() {
        let cache = ResourceCache::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let key = VENDORS.lists();

        let first: Vec<String> = cache
            .read(&key, WINDOW, counting_loader(&calls, Duration::ZERO, Ok(names(&["a"]))))
            .await
            .unwrap();
        let second: Vec<String> = cache
            .read(&key, WINDOW, counting_loader(&calls, Duration::ZERO, Ok(names(&["b"]))))
            .await
            .unwrap();

        assert_eq!(first, names(&["a"]));
        assert_eq!(second, names(&["a"]));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.peek(&key).status, CacheStatus::Fresh);
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_reads_coalesce() {
        let cache = ResourceCache::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let key = VENDORS.lists();

        let reads = (0..5).map(|_| {
            cache.read::<Vec<String>, _, _>(
                &key,
                WINDOW,
                counting_loader(&calls, Duration::from_millis(50), Ok(names(&["a", "b"]))),
            )
        });
        let results = futures::future::join_all(reads).await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        for result in results {
            assert_eq!(result.unwrap(), names(&["a", "b"]));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_coalesced_readers_share_failure() {
        let cache = ResourceCache::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let key = VENDORS.detail("v1");
        let failure = ApiError::Domain("Vendor not found".to_string());

        let reads = (0..3).map(|_| {
            cache.read::<Vec<String>, _, _>(
                &key,
                WINDOW,
                counting_loader(&calls, Duration::from_millis(10), Err(failure.clone())),
            )
        });
        let results = futures::future::join_all(reads).await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        for result in results {
            assert_eq!(result.unwrap_err(), failure);
        }
        let entry = cache.peek(&key);
        assert_eq!(entry.status, CacheStatus::Error);
        assert_eq!(entry.error, Some(failure));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_read_serves_old_value_and_refetches_once() {
        let cache = ResourceCache::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let key = VENDORS.lists();
        let window = Duration::from_secs(60);

        let _: Vec<String> = cache
            .read(&key, window, counting_loader(&calls, Duration::ZERO, Ok(names(&["old"]))))
            .await
            .unwrap();

        // Still fresh just before the window closes
        tokio::time::advance(Duration::from_secs(59)).await;
        let _: Vec<String> = cache
            .read(&key, window, counting_loader(&calls, Duration::ZERO, Ok(names(&["x"]))))
            .await
            .unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        tokio::time::advance(Duration::from_secs(2)).await;
        assert_eq!(cache.peek(&key).status, CacheStatus::Stale);

        let slow = Duration::from_millis(100);
        let stale: Vec<String> = cache
            .read(&key, window, counting_loader(&calls, slow, Ok(names(&["new"]))))
            .await
            .unwrap();
        let again: Vec<String> = cache
            .read(&key, window, counting_loader(&calls, slow, Ok(names(&["newer"]))))
            .await
            .unwrap();

        assert_eq!(stale, names(&["old"]));
        assert_eq!(again, names(&["old"]));
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        let mut events = cache.subscribe();
        tokio::time::sleep(slow * 2).await;
        assert_eq!(events.recv().await.unwrap(), CacheEvent::Updated(key.clone()));

        let fresh: Vec<String> = cache
            .read(&key, window, counting_loader(&calls, Duration::ZERO, Ok(names(&["x"]))))
            .await
            .unwrap();
        assert_eq!(fresh, names(&["new"]));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_refetch_keeps_value_but_blocks_next_read() {
        let cache = ResourceCache::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let key = PRODUCTS.lists();
        let window = Duration::from_secs(1);

        let _: Vec<String> = cache
            .read(&key, window, counting_loader(&calls, Duration::ZERO, Ok(names(&["p"]))))
            .await
            .unwrap();
        tokio::time::advance(Duration::from_secs(2)).await;

        // Stale read triggers a refetch that fails
        let _: Vec<String> = cache
            .read(
                &key,
                window,
                counting_loader(&calls, Duration::ZERO, Err(ApiError::Network("down".into()))),
            )
            .await
            .unwrap();
        tokio::task::yield_now().await;
        tokio::time::sleep(Duration::from_millis(1)).await;

        let entry = cache.peek(&key);
        assert_eq!(entry.status, CacheStatus::Error);
        assert_eq!(entry.value, Some(serde_json::json!(["p"])));

        // Error is not served as fresh: the next read waits for a new fetch
        let err = cache
            .read::<Vec<String>, _, _>(
                &key,
                window,
                counting_loader(&calls, Duration::ZERO, Err(ApiError::Network("still down".into()))),
            )
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::Network("still down".into()));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_detached_reader_does_not_cancel_fetch() {
        let cache = ResourceCache::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let key = VENDORS.detail("v1");

        let attempt = tokio::time::timeout(
            Duration::from_millis(10),
            cache.read::<Vec<String>, _, _>(
                &key,
                WINDOW,
                counting_loader(&calls, Duration::from_millis(100), Ok(names(&["v1"]))),
            ),
        )
        .await;
        assert!(attempt.is_err(), "reader should have given up");
        assert_eq!(cache.peek(&key).status, CacheStatus::Fetching);

        tokio::time::sleep(Duration::from_millis(200)).await;

        let entry = cache.peek(&key);
        assert_eq!(entry.status, CacheStatus::Fresh);
        assert_eq!(entry.value, Some(serde_json::json!(["v1"])));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalidate_by_prefix() {
        let cache = ResourceCache::new();
        let calls = Arc::new(AtomicUsize::new(0));

        for key in [VENDORS.lists(), VENDORS.detail("v1"), PRODUCTS.lists()] {
            let _: Vec<String> = cache
                .read(&key, WINDOW, counting_loader(&calls, Duration::ZERO, Ok(names(&["x"]))))
                .await
                .unwrap();
        }
        assert_eq!(cache.len(), 3);

        let mut events = cache.subscribe();
        let removed = cache.invalidate(&[VENDORS.root()]);

        assert_eq!(removed, 2);
        assert_eq!(cache.peek(&VENDORS.lists()).status, CacheStatus::Empty);
        assert_eq!(cache.peek(&VENDORS.detail("v1")).status, CacheStatus::Empty);
        assert_eq!(cache.peek(&PRODUCTS.lists()).status, CacheStatus::Fresh);
        assert!(matches!(events.try_recv(), Ok(CacheEvent::Invalidated(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalidation_discards_in_flight_result() {
        let cache = ResourceCache::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let key = VENDORS.lists();

        let early = {
            let cache = cache.clone();
            let key = key.clone();
            let loader = counting_loader(&calls, Duration::from_millis(100), Ok(names(&["before"])));
            tokio::spawn(async move { cache.read::<Vec<String>, _, _>(&key, WINDOW, loader).await })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(cache.peek(&key).status, CacheStatus::Fetching);

        cache.invalidate(&[VENDORS.lists()]);

        // A read starting after invalidation issues its own fetch
        let late: Vec<String> = cache
            .read(
                &key,
                WINDOW,
                counting_loader(&calls, Duration::from_millis(200), Ok(names(&["after"]))),
            )
            .await
            .unwrap();

        // The early reader still gets the outcome it attached to
        assert_eq!(early.await.unwrap().unwrap(), names(&["before"]));
        assert_eq!(late, names(&["after"]));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(cache.peek(&key).value, Some(serde_json::json!(["after"])));
    }

    #[tokio::test]
    async fn test_panicking_loader_leaves_entry_retryable() {
        let cache = ResourceCache::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let key = VENDORS.detail("v1");

        let err = cache
            .read::<Vec<String>, _, _>(&key, WINDOW, exploding_loader())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Cancelled(_)));
        assert_eq!(cache.peek(&key).status, CacheStatus::Error);

        let recovered: Vec<String> = cache
            .read(&key, WINDOW, counting_loader(&calls, Duration::ZERO, Ok(names(&["v1"]))))
            .await
            .unwrap();
        assert_eq!(recovered, names(&["v1"]));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.peek(&key).status, CacheStatus::Fresh);
    }

    #[tokio::test(start_paused = true)]
    async fn test_panicking_background_refetch_keeps_value() {
        let cache = ResourceCache::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let key = VENDORS.lists();
        let window = Duration::from_secs(1);

        let _: Vec<String> = cache
            .read(&key, window, counting_loader(&calls, Duration::ZERO, Ok(names(&["old"]))))
            .await
            .unwrap();
        tokio::time::advance(Duration::from_secs(2)).await;

        let mut events = cache.subscribe();
        let stale: Vec<String> = cache.read(&key, window, exploding_loader()).await.unwrap();
        assert_eq!(stale, names(&["old"]));
        assert_eq!(events.recv().await.unwrap(), CacheEvent::Failed(key.clone()));

        let entry = cache.peek(&key);
        assert_eq!(entry.status, CacheStatus::Error);
        assert_eq!(entry.value, Some(serde_json::json!(["old"])));
    }

    #[tokio::test(start_paused = true)]
    async fn test_remove_single_prefix() {
        let cache = ResourceCache::new();
        let calls = Arc::new(AtomicUsize::new(0));

        for key in [PRODUCTS.lists(), PRODUCTS.detail("p1"), VENDORS.lists()] {
            let _: Vec<String> = cache
                .read(&key, WINDOW, counting_loader(&calls, Duration::ZERO, Ok(names(&["x"]))))
                .await
                .unwrap();
        }

        assert_eq!(cache.remove(&PRODUCTS.detail("p1")), 1);
        assert_eq!(cache.peek(&PRODUCTS.detail("p1")).status, CacheStatus::Empty);
        assert_eq!(cache.peek(&PRODUCTS.lists()).status, CacheStatus::Fresh);
        assert_eq!(cache.remove(&PRODUCTS.detail("p1")), 0);
        assert_eq!(cache.len(), 2);
    }

    #[tokio::test]
    async fn test_disabled_cache_always_loads() {
        let cache = ResourceCache::disabled();
        let calls = Arc::new(AtomicUsize::new(0));
        let key = VENDORS.lists();

        for _ in 0..2 {
            let _: Vec<String> = cache
                .read(&key, WINDOW, counting_loader(&calls, Duration::ZERO, Ok(names(&["a"]))))
                .await
                .unwrap();
        }

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_peek_unknown_key_is_empty() {
        let cache = ResourceCache::new();
        let entry = cache.peek(&VENDORS.detail("nope"));
        assert_eq!(entry.status, CacheStatus::Empty);
        assert!(entry.value.is_none());
    }

    #[tokio::test]
    async fn test_clear_drops_everything() {
        let cache = ResourceCache::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let _: Vec<String> = cache
            .read(
                &VENDORS.lists(),
                WINDOW,
                counting_loader(&calls, Duration::ZERO, Ok(names(&["a"]))),
            )
            .await
            .unwrap();

        cache.clear();
        assert!(cache.is_empty());
    }
}
