use crate::{
	building::{Building, CatalogSnapshot},
	loader::CatalogLoader,
};
use parking_lot::Mutex;
use std::{sync::Arc, time::Duration};

/// Window after which a snapshot counts as stale.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// Anything that can produce a full catalog.
///
/// The production source is [`CatalogLoader`]; tests substitute counting
/// stubs to observe reload behavior.
pub trait CatalogSource: Send + Sync {
	fn load_catalog(&self) -> Vec<Building>;
}

impl CatalogSource for CatalogLoader {
	fn load_catalog(&self) -> Vec<Building> {
		CatalogLoader::load_catalog(self)
	}
}

/// In-memory catalog cache with time-based invalidation.
///
/// Holds one immutable snapshot behind a mutex. The mutex guards the whole
/// check-and-reload sequence, so at most one reload runs at a time: callers
/// arriving during a reload block until it finishes and then share the fresh
/// snapshot. Reads outside the expiry instant only clone an `Arc`.
///
/// An empty load result (the loader already absorbed its failure) is cached
/// like any other snapshot, which bounds reload attempts to one per TTL
/// window under persistent failure.
pub struct BuildingCache {
	source: Box<dyn CatalogSource>,
	ttl: Duration,
	snapshot: Mutex<Option<Arc<CatalogSnapshot>>>,
}

impl BuildingCache {
	pub fn new(source: impl CatalogSource + 'static, ttl: Duration) -> Self {
		Self {
			source: Box::new(source),
			ttl,
			snapshot: Mutex::new(None),
		}
	}

	/// Current snapshot, reloading first if none exists or the TTL elapsed.
	pub fn snapshot(&self) -> Arc<CatalogSnapshot> {
		let mut slot = self.snapshot.lock();
		match slot.as_ref() {
			Some(snapshot) if snapshot.loaded_at.elapsed() < self.ttl => Arc::clone(snapshot),
			_ => {
				let fresh = Arc::new(CatalogSnapshot::new(self.source.load_catalog()));
				*slot = Some(Arc::clone(&fresh));
				fresh
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::sync::atomic::{AtomicUsize, Ordering};

	struct CountingSource {
		calls: Arc<AtomicUsize>,
	}

	impl CatalogSource for CountingSource {
		fn load_catalog(&self) -> Vec<Building> {
			self.calls.fetch_add(1, Ordering::SeqCst);
			Vec::new()
		}
	}

	fn counting_cache(ttl: Duration) -> (BuildingCache, Arc<AtomicUsize>) {
		let calls = Arc::new(AtomicUsize::new(0));
		let cache = BuildingCache::new(
			CountingSource {
				calls: Arc::clone(&calls),
			},
			ttl,
		);
		(cache, calls)
	}

	#[test]
	fn fresh_snapshot_is_reused() {
		let (cache, calls) = counting_cache(Duration::from_secs(3600));

		let first = cache.snapshot();
		let second = cache.snapshot();

		assert_eq!(calls.load(Ordering::SeqCst), 1);
		assert!(Arc::ptr_eq(&first, &second));
	}

	#[test]
	fn expired_snapshot_is_replaced() {
		let (cache, calls) = counting_cache(Duration::ZERO);

		let first = cache.snapshot();
		let second = cache.snapshot();

		assert_eq!(calls.load(Ordering::SeqCst), 2);
		assert!(!Arc::ptr_eq(&first, &second));
	}

	#[test]
	fn concurrent_first_access_loads_once() {
		let (cache, calls) = counting_cache(Duration::from_secs(3600));
		let cache = Arc::new(cache);

		std::thread::scope(|scope| {
			for _ in 0..16 {
				let cache = Arc::clone(&cache);
				scope.spawn(move || cache.snapshot());
			}
		});

		assert_eq!(calls.load(Ordering::SeqCst), 1);
	}

	#[test]
	fn expiry_under_concurrency_reloads_exactly_once() {
		let (cache, calls) = counting_cache(Duration::from_millis(100));
		let cache = Arc::new(cache);

		cache.snapshot();
		assert_eq!(calls.load(Ordering::SeqCst), 1);
		std::thread::sleep(Duration::from_millis(120));

		std::thread::scope(|scope| {
			for _ in 0..16 {
				let cache = Arc::clone(&cache);
				scope.spawn(move || cache.snapshot());
			}
		});

		assert_eq!(calls.load(Ordering::SeqCst), 2);
	}

	#[test]
	fn empty_result_is_cached_for_a_full_window() {
		// A failed load (already absorbed into an empty catalog) must not
		// trigger an immediate retry.
		let (cache, calls) = counting_cache(Duration::from_secs(3600));

		assert!(cache.snapshot().buildings.is_empty());
		assert!(cache.snapshot().buildings.is_empty());

		assert_eq!(calls.load(Ordering::SeqCst), 1);
	}
}
