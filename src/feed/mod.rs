//! The persisted version feed: storage and merging.

pub mod merge;
pub mod store;

pub use merge::{merge, MergeOutcome};
pub use store::FeedStore;
