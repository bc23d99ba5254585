//! # NavRisk Ext File
//!
//! File-backed and in-memory NAV sources for the NavRisk analytics engine.
//!
//! - [`FileNavSource`]: one JSON or CSV file per scheme in a data directory,
//!   plus an optional `schemes.csv` index for search
//! - [`InMemoryNavSource`]: map-backed source for tests and embedding
//!
//! For live data, implement [`NavSource`](navrisk_traits::NavSource) against
//! the remote API in a separate extension.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod memory;
mod nav_files;

pub use memory::InMemoryNavSource;
pub use nav_files::{parse_json, search_schemes, FileNavSource, SCHEME_INDEX_FILE};
