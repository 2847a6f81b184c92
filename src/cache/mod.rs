//! Query cache for API reads
//!
//! - [`key`]: hierarchical query keys and per-domain key spaces
//! - [`store`]: the in-memory cache with coalescing and stale-while-revalidate
//! - [`invalidation`]: which keys a mutation evicts

pub mod invalidation;
pub mod key;
pub mod store;

use std::time::Duration;

/// Default staleness window, applied uniformly to every domain unless a call
/// site overrides it.
pub const DEFAULT_STALE_TIME: Duration = Duration::from_secs(5 * 60); // 5 min

pub use invalidation::{Effect, invalidate};
pub use key::{ASSESSMENT_ANALYSIS, KeySegment, KeySpace, PRODUCTS, QueryKey, VENDORS};
pub use store::{CacheEntry, CacheEvent, CacheStatus, ResourceCache};
