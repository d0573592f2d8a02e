use std::{
	collections::HashMap,
	sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard}
};
use log::{debug, trace};
use super::{
	config::*,
	digest::*,
	error::*,
	index::VirtualNodeIndex,
	node::Node
};

// A registered node and the digests inserted for it by its last add
struct Member<N> {
	node: N,
	digests: Vec<Digest>
}

struct RingState<N> {
	index: VirtualNodeIndex,
	members: HashMap<String, Member<N>>
}

impl<N: Node> RingState<N> {
	fn new() -> Self {
		RingState {
			index: VirtualNodeIndex::new(),
			members: HashMap::new()
		}
	}

	fn unregister(&mut self, id: &str) -> Option<Member<N>> {
		let member = self.members.remove(id)?;
		// Newest first so repeated digests of this node unwind in order
		for digest in member.digests.iter().rev() {
			self.index.remove(*digest, id);
		}
		Some(member)
	}

	fn register(&mut self, node: N, digests: Vec<Digest>) {
		let id = node.id().to_string();
		for digest in &digests {
			self.index.insert(*digest, &id);
		}
		self.members.insert(id, Member { node, digests });
	}

	fn owner(&self, id: &str) -> Option<&N> {
		self.members.get(id).map(|m| &m.node)
	}
}

/// Thread-safe consistent hashing ring.
///
/// Clones share the same ring. Lookups take a read lock and run in parallel;
/// every mutation takes the write lock exactly once, so re-adding a node
/// swaps its virtual nodes without any reader seeing it disappear.
pub struct ConsistentHasher<N, H = Murmur3> {
	hasher: Arc<H>,
	config: Config,
	state: Arc<RwLock<RingState<N>>>
}

impl<N, H> Clone for ConsistentHasher<N, H> {
	fn clone(&self) -> Self {
		ConsistentHasher {
			hasher: self.hasher.clone(),
			config: self.config,
			state: self.state.clone()
		}
	}
}

impl<N: Node + Clone> ConsistentHasher<N, Murmur3> {
	pub fn with_murmur3(config: Config) -> RingResult<Self> {
		Self::new(config, Murmur3)
	}
}

impl<N: Node + Clone> Default for ConsistentHasher<N, Murmur3> {
	fn default() -> Self {
		ConsistentHasher {
			hasher: Arc::new(Murmur3),
			config: Config::default(),
			state: Arc::new(RwLock::new(RingState::new()))
		}
	}
}

impl<N, H> ConsistentHasher<N, H>
where
	N: Node + Clone,
	H: KeyHasher
{
	pub fn new(config: Config, hasher: H) -> RingResult<Self> {
		config.validate()?;
		Ok(ConsistentHasher {
			hasher: Arc::new(hasher),
			config,
			state: Arc::new(RwLock::new(RingState::new()))
		})
	}

	pub fn config(&self) -> &Config {
		&self.config
	}

	/// Add a node with `max_replicas` virtual nodes
	pub fn add(&self, node: N) {
		self.add_by_virtual_nodes(node, self.config.max_replicas);
	}

	/// Add a node with `count` virtual nodes, capped at `max_replicas`.
	///
	/// A node that is already on the ring is replaced. With `count == 0` the
	/// node is a member but owns no keys.
	pub fn add_by_virtual_nodes(&self, node: N, count: usize) {
		let count = count.min(self.config.max_replicas);
		let digests = vnode_digests(self.hasher.as_ref(), node.id(), count);

		let mut state = self.write();
		let replaced = state.unregister(node.id()).is_some();
		debug!("{}: added with {} virtual nodes (replaced: {})", node.id(), count, replaced);
		state.register(node, digests);
	}

	/// Add a node with virtual nodes proportional to `weight`:
	/// `max_replicas * weight / max_weight`, rounded down.
	pub fn add_with_weight(&self, node: N, weight: i64) -> RingResult<()> {
		let count = self.config.replicas_for_weight(weight)?;
		self.add_by_virtual_nodes(node, count);
		Ok(())
	}

	/// Node owning `key`, or `None` if no node has any virtual node.
	pub fn get(&self, key: &str) -> Option<N> {
		let digest = self.hasher.hash(key);
		let state = self.read();
		let owner = state.index.successor(digest)
			.and_then(|id| state.owner(id))
			.cloned();
		trace!("get {} ({}) -> {:?}", key, digest, owner.as_ref().map(|n| n.id()));
		owner
	}

	/// Up to `n` distinct nodes for `key`, clockwise from its position.
	/// The first one is the node `get` returns.
	pub fn get_successors(&self, key: &str, n: usize) -> Vec<N> {
		if n == 0 {
			return Vec::new();
		}
		let digest = self.hasher.hash(key);
		let state = self.read();
		let mut ids: Vec<&str> = Vec::with_capacity(n.min(state.members.len()));
		for id in state.index.walk(digest) {
			if !ids.contains(&id) {
				ids.push(id);
				if ids.len() == n {
					break;
				}
			}
		}
		ids.into_iter()
			.filter_map(|id| state.owner(id).cloned())
			.collect()
	}

	/// Remove a node and all of its virtual nodes. No-op if it is not a member.
	pub fn remove(&self, node: &N) {
		let mut state = self.write();
		if let Some(member) = state.unregister(node.id()) {
			debug!("{}: removed {} virtual nodes", node.id(), member.digests.len());
		}
	}

	pub fn contains(&self, node: &N) -> bool {
		self.read().members.contains_key(node.id())
	}

	/// Virtual node count of a member as of its last add
	pub fn replicas(&self, node: &N) -> Option<usize> {
		self.read().members.get(node.id()).map(|m| m.digests.len())
	}

	/// Number of member nodes
	pub fn len(&self) -> usize {
		self.read().members.len()
	}

	pub fn is_empty(&self) -> bool {
		self.read().members.is_empty()
	}

	/// Number of occupied positions on the ring.
	/// Colliding virtual nodes share one position.
	pub fn vnode_count(&self) -> usize {
		self.read().index.len()
	}

	/// All members, ordered by id
	pub fn nodes(&self) -> Vec<N> {
		let state = self.read();
		let mut nodes: Vec<N> = state.members.values()
			.map(|m| m.node.clone())
			.collect();
		nodes.sort_by(|a, b| a.id().cmp(b.id()));
		nodes
	}

	// Critical sections only touch precomputed digests, so state behind a
	// poisoned lock is still consistent
	fn read(&self) -> RwLockReadGuard<'_, RingState<N>> {
		self.state.read().unwrap_or_else(PoisonError::into_inner)
	}

	fn write(&self) -> RwLockWriteGuard<'_, RingState<N>> {
		self.state.write().unwrap_or_else(PoisonError::into_inner)
	}
}
