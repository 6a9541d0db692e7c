//! In-memory cache backend.
//!
//! [`MemoryCache`] composes three independently locked parts: an exact store,
//! a regex-pattern store and a blacklist. Each lock is held only for the
//! duration of a single operation.

pub mod blacklist;
pub mod exact;
pub mod memory;
pub mod wildcard;

pub use blacklist::Blacklist;
pub use exact::ExactRecords;
pub use memory::{MemoryCache, MEMORY_BACKEND};
pub use wildcard::WildcardRecords;
