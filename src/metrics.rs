//! Cache performance metrics.

/// Snapshot of a cache's counters and occupancy.
///
/// Obtained via [`Cache::metrics`](crate::Cache::metrics). Counters accumulate
/// over the lifetime of the instance; occupancy fields reflect the moment the
/// snapshot was taken. The cache keeps these per instance; there is no global
/// or ambient metrics state.
///
/// # Example
///
/// ```
/// use weighted_lru::Cache;
///
/// let mut cache = Cache::new(100);
/// cache.insert("a", 1);
/// cache.get(&"a");
/// cache.get(&"b");
///
/// let metrics = cache.metrics();
/// assert_eq!(metrics.hits, 1);
/// assert_eq!(metrics.misses, 1);
/// assert!((metrics.hit_rate() - 0.5).abs() < f64::EPSILON);
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct CacheMetrics {
	/// Successful promoting lookups (`get`). `peek` and `contains` never
	/// count.
	pub hits: u64,
	/// Failed promoting lookups (`get` on an absent key).
	pub misses: u64,
	/// New entries admitted under a previously absent key.
	pub inserts: u64,
	/// Admitted inserts that replaced an existing entry.
	pub updates: u64,
	/// Inserts refused because the entry outweighed the whole capacity.
	pub rejections: u64,
	/// Entries evicted to restore the capacity invariant.
	pub evictions: u64,
	/// Entries explicitly removed via `remove`.
	pub removals: u64,
	/// Total weight of live entries at snapshot time.
	pub current_weight: u64,
	/// Weight capacity at snapshot time.
	pub capacity: u64,
	/// Number of live entries at snapshot time.
	pub entry_count: usize,
}

impl CacheMetrics {
	/// Cache hit rate as a ratio between 0.0 and 1.0.
	///
	/// Returns 0.0 if there have been no promoting lookups.
	pub fn hit_rate(&self) -> f64 {
		let total = self.hits + self.misses;
		if total == 0 {
			0.0
		} else {
			self.hits as f64 / total as f64
		}
	}

	/// Fraction of the weight capacity currently in use, between 0.0 and 1.0.
	///
	/// # Example
	///
	/// ```
	/// use weighted_lru::Cache;
	///
	/// let mut cache = Cache::new(10);
	/// cache.insert_weighted("a", (), 4);
	///
	/// assert!((cache.metrics().utilization() - 0.4).abs() < f64::EPSILON);
	/// ```
	pub fn utilization(&self) -> f64 {
		if self.capacity == 0 {
			0.0
		} else {
			self.current_weight as f64 / self.capacity as f64
		}
	}

	/// Total promoting lookups (hits + misses).
	pub fn total_accesses(&self) -> u64 {
		self.hits + self.misses
	}

	/// Total admitted writes (inserts + updates). Rejections are not writes.
	pub fn total_writes(&self) -> u64 {
		self.inserts + self.updates
	}
}
