//! A consistent hashing ring.
//!
//! Nodes are projected onto a 64-bit ring through several virtual nodes each,
//! and a key is owned by the first virtual node at or after the key's digest.
//! Membership changes only move the keys owned by the changed node.
//!
//! ```
//! use consistent_hasher::core::{Config, ConsistentHasher};
//!
//! let ring = ConsistentHasher::with_murmur3(Config::default()).unwrap();
//! ring.add("cache-1".to_string());
//! ring.add("cache-2".to_string());
//! assert!(ring.get("user:42").is_some());
//! ```

pub mod core;
