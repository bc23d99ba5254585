//! # NavRisk Traits
//!
//! Trait seams between the analytics engine and its data collaborators.
//!
//! - [`source`]: [`NavSource`] and [`SchemeDirectory`]
//! - [`error`]: [`SourceError`], distinguishing not-found from transient
//!   failures
//!
//! Implementations live in extension crates (`navrisk-ext-file` ships the
//! file-backed and in-memory ones). The engine receives a source by
//! dependency injection:
//!
//! ```ignore
//! let screener = FundScreener::new(FileNavSource::open(dir)?, EngineConfig::default());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod source;

pub use error::SourceError;
pub use source::{NavSource, SchemeDirectory, SourceType};
