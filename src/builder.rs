use std::hash::Hash;

use crate::cache::Cache;

/// Builder for configuring a [`Cache`].
///
/// # Example
///
/// ```
/// use weighted_lru::CacheBuilder;
///
/// let mut cache = CacheBuilder::new(64 * 1024) // 64 KiB of weight
/// 	.reserve(256)
/// 	.build::<String, Vec<u8>>();
///
/// cache.insert_weighted("a".to_string(), vec![0u8; 100], 100);
/// assert_eq!(cache.size(), 100);
/// ```
pub struct CacheBuilder {
	capacity: u64,
	reserve: usize,
}

impl CacheBuilder {
	/// Create a new builder with the given weight capacity.
	pub fn new(capacity: u64) -> Self {
		Self {
			capacity,
			reserve: 0,
		}
	}

	/// Pre-allocate space for `entries` entries in the index and the recency
	/// arena.
	///
	/// Avoids rehashing and arena growth during warm-up when the steady-state
	/// entry count is known. Purely an allocation hint; the weight capacity is
	/// the only admission bound.
	///
	/// Default: 0 (grow on demand)
	pub fn reserve(mut self, entries: usize) -> Self {
		self.reserve = entries;
		self
	}

	/// Build the cache with the configured settings.
	pub fn build<K: Hash + Eq + Clone, V>(self) -> Cache<K, V> {
		Cache::with_reserve(self.capacity, self.reserve)
	}
}

impl Default for CacheBuilder {
	/// Create a builder with a capacity of 1024 weight units.
	///
	/// With default-weight entries that is a 1024-entry cache.
	fn default() -> Self {
		Self::new(1024)
	}
}
