pub mod node;
pub mod digest;
pub mod index;
pub mod hasher;
pub mod config;
pub mod error;

pub use node::*;
pub use digest::{Digest, KeyHasher, Murmur3};
pub use index::VirtualNodeIndex;
pub use hasher::*;
pub use config::*;
pub use error::*;
