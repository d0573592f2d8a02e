#![allow(dead_code)]

use std::collections::HashMap;
use consistent_hasher::core::{
	ConsistentHasher,
	KeyHasher,
	Node
};
use rand::{
	Rng,
	distributions::Alphanumeric
};

/// Node type used by the tests: an id plus a payload the ring never looks at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Server {
	pub name: String,
	pub addr: String
}

impl Server {
	pub fn new(name: &str) -> Self {
		Server {
			name: name.to_string(),
			addr: format!("{}.internal:11211", name)
		}
	}
}

impl Node for Server {
	fn id(&self) -> &str {
		&self.name
	}
}

pub fn init_logger() {
	let _ = env_logger::builder().is_test(true).try_init();
}

// Generate `n` random 32-character keys
pub fn generate_keys<T: Rng>(rng: &mut T, n: usize) -> Vec<String> {
	let mut keys = Vec::with_capacity(n);
	for _ in 0..n {
		let key: String = (0..32)
			.map(|_| char::from(rng.sample(Alphanumeric)))
			.collect();
		keys.push(key);
	}
	keys
}

/// Owner id of every key, `None` where the ring has no owner
pub fn assignments<N: Node + Clone, H: KeyHasher>(ring: &ConsistentHasher<N, H>, keys: &[String]) -> Vec<Option<String>> {
	keys.iter()
		.map(|k| ring.get(k).map(|n| n.id().to_string()))
		.collect()
}

/// Number of keys owned by each node id
pub fn hit_counts<N: Node + Clone, H: KeyHasher>(ring: &ConsistentHasher<N, H>, keys: &[String]) -> HashMap<String, usize> {
	let mut counts = HashMap::new();
	for key in keys {
		if let Some(n) = ring.get(key) {
			*counts.entry(n.id().to_string()).or_insert(0) += 1;
		}
	}
	counts
}
