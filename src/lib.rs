//! # feedsync
//!
//! Synchronizes a human-edited `CHANGELOG.md` into the JSON version feed
//! consumed by an in-app updates screen.
//!
//! ## Features
//!
//! - Forgiving changelog parsing: structured lines are captured, prose is
//!   skipped
//! - Deduplicating merge that only ever prepends genuinely new releases
//! - Optional AI rewrite of change descriptions with per-item fallback
//!
//! ## Quick Start
//!
//! ```rust
//! let releases = feedsync::changelog::parse("## [1.0.0](https://example.com) (2025-01-01)");
//! assert_eq!(releases[0].version, "1.0.0");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod ai;
pub mod changelog;
pub mod cli;
pub mod feed;
pub mod utils;

pub use crate::cli::Cli;

/// The current version of feedsync.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
