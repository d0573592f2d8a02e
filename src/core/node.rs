use std::sync::Arc;

/// Anything that can be placed on the ring.
///
/// The identifier must be stable and unique: two values with the same id are
/// the same node as far as the ring is concerned.
pub trait Node {
	fn id(&self) -> &str;
}

impl Node for String {
	fn id(&self) -> &str {
		self
	}
}

impl Node for &str {
	fn id(&self) -> &str {
		self
	}
}

impl<T: Node + ?Sized> Node for Box<T> {
	fn id(&self) -> &str {
		(**self).id()
	}
}

impl<T: Node + ?Sized> Node for Arc<T> {
	fn id(&self) -> &str {
		(**self).id()
	}
}
