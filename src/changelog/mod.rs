//! Changelog parsing and the typed release model.

pub mod parser;
pub mod types;

pub use parser::parse;
pub use types::{ChangeItem, ChangeKind, ReleaseRecord};
