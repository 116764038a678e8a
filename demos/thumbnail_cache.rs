use weighted_lru::Cache;

/// Example demonstrating a byte-bounded thumbnail cache: weights are encoded
/// sizes, so large previews displace many small icons but never blow the
/// memory budget.

fn thumbnail_bytes(id: u64) -> Vec<u8> {
	// Pretend-decode: odd ids are large previews, even ids small icons
	let len = if id % 2 == 0 { 1024 } else { 16 * 1024 };
	vec![(id % 251) as u8; len]
}

fn main() {
	// 64 KiB budget; roughly four large previews or sixty icons
	let mut cache = Cache::new(64 * 1024);

	for id in 0..20u64 {
		let bytes = thumbnail_bytes(id);
		let weight = bytes.len() as u64;
		cache.insert_weighted(id, bytes, weight);
	}

	// More inserts push cold entries out; the two the user keeps viewing
	// stay at the most-recently-used end and survive
	for id in 20..30u64 {
		let bytes = thumbnail_bytes(id);
		let weight = bytes.len() as u64;
		cache.insert_weighted(id, bytes, weight);
		let _ = cache.get(&18);
		let _ = cache.get(&19);
	}

	if cache.contains(&18) && cache.contains(&19) {
		println!("✓ recently used thumbnails survived eviction");
	} else {
		println!("✗ recently used thumbnails were evicted (unexpected)");
	}

	// A whole-image paste bigger than the budget is refused, not admitted
	// at the cost of emptying the cache
	let oversized = vec![0u8; 128 * 1024];
	if !cache.insert_weighted(999, oversized, 128 * 1024) {
		println!("✓ oversized entry rejected");
	}

	// Memory pressure: shrink the budget in place
	cache.set_capacity(16 * 1024);
	println!("\nAfter shrinking to 16 KiB:");
	println!("  Entries: {}", cache.len());
	println!("  Weight:  {} bytes", cache.size());

	let metrics = cache.metrics();
	println!("\nCache stats:");
	println!("  Hit rate:    {:.2}%", metrics.hit_rate() * 100.0);
	println!("  Utilization: {:.2}%", metrics.utilization() * 100.0);
	println!("  Evictions:   {}", metrics.evictions);
	println!("  Rejections:  {}", metrics.rejections);
}
