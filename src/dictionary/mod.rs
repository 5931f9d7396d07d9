//! Dictionary acquisition and caching
//!
//! Word lists are fetched, merged and filtered into an immutable
//! [`DictionarySnapshot`], which a [`SnapshotCache`] shares and refreshes.

mod builder;
mod cache;
mod denylist;
mod snapshot;

pub use builder::{DictionaryBuilder, DictionaryError};
pub use cache::SnapshotCache;
pub use denylist::Denylist;
pub use snapshot::{DictionarySnapshot, SourceSummary, WordEntry};
