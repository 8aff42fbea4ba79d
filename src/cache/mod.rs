//! Cache module for storing API payloads to disk
//!
//! Raw endpoint payloads are written to one JSON file per key and served
//! back until they outlive a 24-hour TTL, at which point they are treated
//! as absent. Cache faults never propagate; the worst outcome of a broken
//! cache is a refetch.

mod store;

pub use store::CacheStore;
