//! Ordered index of virtual nodes.

use std::collections::{
	BTreeMap,
	btree_map::Entry
};
use super::digest::Digest;

/// Sorted map from virtual node digest to the ids registered there.
///
/// Distinct virtual nodes may hash to the same digest. Each slot keeps every
/// id inserted at it in insertion order and the newest one owns the slot
/// (last write wins). Older ids stay shadowed underneath and take the slot
/// back once the newer ones are removed.
#[derive(Debug, Clone, Default)]
pub struct VirtualNodeIndex {
	slots: BTreeMap<Digest, Vec<String>>
}

impl VirtualNodeIndex {
	pub fn new() -> Self {
		VirtualNodeIndex {
			slots: BTreeMap::new()
		}
	}

	pub fn insert(&mut self, digest: Digest, id: &str) {
		self.slots.entry(digest).or_default().push(id.to_string());
	}

	/// Remove the newest occurrence of `id` at `digest`.
	/// Returns false if `id` is not registered there.
	pub fn remove(&mut self, digest: Digest, id: &str) -> bool {
		match self.slots.entry(digest) {
			Entry::Occupied(mut entry) => {
				let owners = entry.get_mut();
				match owners.iter().rposition(|o| o == id) {
					Some(pos) => {
						owners.remove(pos);
						if owners.is_empty() {
							entry.remove();
						}
						true
					},
					None => false
				}
			},
			Entry::Vacant(_) => false
		}
	}

	/// Owner of the first slot at or after `digest`, wrapping around to the
	/// first slot of the ring.
	pub fn successor(&self, digest: Digest) -> Option<&str> {
		self.slots.range(digest..)
			.next()
			.or_else(|| self.slots.iter().next())
			.and_then(|(_, owners)| owners.last())
			.map(String::as_str)
	}

	/// Slot owners clockwise from `digest`, one full turn.
	pub fn walk(&self, digest: Digest) -> impl Iterator<Item = &str> + '_ {
		self.slots.range(digest..)
			.chain(self.slots.range(..digest))
			.filter_map(|(_, owners)| owners.last())
			.map(String::as_str)
	}

	/// All ids registered at `digest`, oldest first.
	pub fn owners(&self, digest: Digest) -> &[String] {
		match self.slots.get(&digest) {
			Some(owners) => owners,
			None => &[]
		}
	}

	/// Number of occupied slots
	pub fn len(&self) -> usize {
		self.slots.len()
	}

	pub fn is_empty(&self) -> bool {
		self.slots.is_empty()
	}
}
