//! NAV data source traits.
//!
//! - [`NavSource`]: NAV history for a scheme code
//! - [`SchemeDirectory`]: scheme search by free-text term
//!
//! Both are synchronous; a fetch blocks the calling thread. Implementations
//! must be `Send + Sync` so a screener can fan fetches out across threads.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use navrisk_core::{NavSeries, SchemeCode, SchemeInfo};

use crate::error::SourceError;

/// Where a source gets its data from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceType {
    /// Remote API
    Remote,
    /// Local files (CSV, JSON)
    File,
    /// In-process data
    Memory,
}

/// Provider of NAV histories.
pub trait NavSource: Send + Sync {
    /// Source type.
    fn source_type(&self) -> SourceType;

    /// Full NAV history for a scheme, sorted by date.
    ///
    /// # Errors
    ///
    /// `SourceError::NotFound` for an unknown scheme, `SourceError::Transient`
    /// for upstream failures.
    fn nav_history(&self, scheme: &SchemeCode) -> Result<NavSeries, SourceError>;
}

/// Directory of schemes searchable by name.
pub trait SchemeDirectory: Send + Sync {
    /// Schemes whose name matches `term`.
    fn search(&self, term: &str) -> Result<Vec<SchemeInfo>, SourceError>;
}

impl<T: NavSource + ?Sized> NavSource for Arc<T> {
    fn source_type(&self) -> SourceType {
        (**self).source_type()
    }

    fn nav_history(&self, scheme: &SchemeCode) -> Result<NavSeries, SourceError> {
        (**self).nav_history(scheme)
    }
}

impl<T: NavSource + ?Sized> NavSource for &T {
    fn source_type(&self) -> SourceType {
        (**self).source_type()
    }

    fn nav_history(&self, scheme: &SchemeCode) -> Result<NavSeries, SourceError> {
        (**self).nav_history(scheme)
    }
}

impl<T: SchemeDirectory + ?Sized> SchemeDirectory for Arc<T> {
    fn search(&self, term: &str) -> Result<Vec<SchemeInfo>, SourceError> {
        (**self).search(term)
    }
}

impl<T: SchemeDirectory + ?Sized> SchemeDirectory for &T {
    fn search(&self, term: &str) -> Result<Vec<SchemeInfo>, SourceError> {
        (**self).search(term)
    }
}
