//! # Weighted LRU
//!
//! An in-memory, capacity-bounded LRU cache with:
//! - **Weighted entries** (integer cost per entry, default `1`, so the bound
//!   can model bytes or any other cost rather than entry count)
//! - **Strict recency order** (a total MRU→LRU order over all live entries;
//!   eviction always takes the least-recently-used entry first)
//! - **O(1) operations** (a hash index plus an arena-backed intrusive list;
//!   promotion and eviction are index surgery with no per-node allocations)
//! - **Explicit admission** (inserts report whether the entry was accepted,
//!   so a rejected oversized entry is distinguishable from one that was
//!   admitted and later evicted)
//!
//! ## Quick Start
//!
//! ```rust
//! use weighted_lru::Cache;
//!
//! // Capacity is a weight budget, not an entry count
//! let mut cache = Cache::new(10);
//!
//! cache.insert_weighted("thumbnail", vec![1u8, 2, 3], 3);
//! cache.insert("metadata", vec![9u8]); // default weight 1
//! assert_eq!(cache.size(), 4);
//!
//! // `get` promotes the entry to most-recently-used
//! assert_eq!(cache.get(&"thumbnail"), Some(&vec![1u8, 2, 3]));
//!
//! // `peek` reads without disturbing the eviction order
//! assert_eq!(cache.peek(&"metadata"), Some(&vec![9u8]));
//! ```
//!
//! ## Promoting vs. non-promoting reads
//!
//! [`Cache::get`] marks the entry as just-used, shielding it from near-term
//! eviction; [`Cache::peek`] inspects without leaving a trace. The distinction
//! is part of the contract, not an implementation accident: diagnostics and
//! tests can observe the cache through `peek` without changing which entry is
//! evicted next.
//!
//! ## Sizing by weight
//!
//! Weights bound memory-like costs. A thumbnail cache passes the encoded byte
//! length as the weight; [`Cache::insert_sized`] does this automatically for
//! any value implementing [`DeepSizeOf`]. An entry whose weight exceeds the
//! whole capacity is refused outright rather than admitted at the cost of
//! emptying the cache.
//!
//! ## Thread safety
//!
//! The cache is deliberately single-threaded: mutating operations take
//! `&mut self`, there is no internal locking, and eviction happens
//! synchronously inside the call that requires it. To share an instance
//! across threads, wrap the whole cache in a mutex.

mod builder;
mod cache;
mod list;
mod metrics;

pub use builder::CacheBuilder;
pub use cache::Cache;
pub use deepsize::DeepSizeOf;
pub use metrics::CacheMetrics;
