//! Hashing of keys and virtual nodes onto the ring.

/// A position on the ring.
pub type Digest = u64;

/// Maps a string to a position on the ring.
///
/// Implementations must be deterministic across calls and processes: every
/// process sharing a membership must place keys identically. Closures and
/// function pointers of type `Fn(&str) -> u64` implement it directly.
pub trait KeyHasher: Send + Sync {
	fn hash(&self, key: &str) -> Digest;
}

impl<F> KeyHasher for F
where
	F: Fn(&str) -> Digest + Send + Sync
{
	fn hash(&self, key: &str) -> Digest {
		self(key)
	}
}

/// MurmurHash3 (x64, 128-bit, seed 0) truncated to its low 64 bits.
#[derive(Debug, Clone, Copy, Default)]
pub struct Murmur3;

impl KeyHasher for Murmur3 {
	fn hash(&self, key: &str) -> Digest {
		let mut bytes = key.as_bytes();
		// Reading from an in-memory slice never fails
		let digest = murmur3::murmur3_x64_128(&mut bytes, 0).unwrap_or_default();
		digest as Digest
	}
}

/// Key of the `index`-th virtual node of a node: the id followed by the decimal index.
pub fn vnode_key(id: &str, index: usize) -> String {
	format!("{}{}", id, index)
}

/// Digests of the first `count` virtual nodes of a node
pub fn vnode_digests<H: KeyHasher + ?Sized>(hasher: &H, id: &str, count: usize) -> Vec<Digest> {
	(0..count)
		.map(|i| hasher.hash(&vnode_key(id, i)))
		.collect()
}
