//! In-memory NAV source.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use dashmap::DashMap;

use navrisk_core::{NavSeries, SchemeCode, SchemeInfo};
use navrisk_traits::{NavSource, SchemeDirectory, SourceError, SourceType};

use crate::nav_files::search_schemes;

/// Map-backed NAV source for tests and embedding.
///
/// Codes registered with [`InMemoryNavSource::fail_with_transient`] always
/// fail with [`SourceError::Transient`], which makes screener failure paths
/// easy to exercise.
#[derive(Default)]
pub struct InMemoryNavSource {
    series: DashMap<SchemeCode, NavSeries>,
    schemes: Vec<SchemeInfo>,
    failing: HashSet<SchemeCode>,
    fetches: AtomicUsize,
}

impl InMemoryNavSource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a scheme with its NAV history.
    #[must_use]
    pub fn with_scheme(
        mut self,
        code: impl Into<SchemeCode>,
        name: impl Into<String>,
        series: NavSeries,
    ) -> Self {
        let info = SchemeInfo::new(code, name);
        self.series.insert(info.scheme_code.clone(), series);
        self.schemes.push(info);
        self
    }

    /// Lists a scheme in the directory without any NAV history.
    #[must_use]
    pub fn with_listing(mut self, code: impl Into<SchemeCode>, name: impl Into<String>) -> Self {
        self.schemes.push(SchemeInfo::new(code, name));
        self
    }

    /// Makes every fetch of `code` fail with a transient error.
    #[must_use]
    pub fn fail_with_transient(mut self, code: impl Into<SchemeCode>) -> Self {
        self.failing.insert(code.into());
        self
    }

    /// Inserts or replaces a NAV history.
    pub fn insert(&self, code: impl Into<SchemeCode>, series: NavSeries) {
        self.series.insert(code.into(), series);
    }

    /// Listed schemes, in insertion order.
    pub fn schemes(&self) -> &[SchemeInfo] {
        &self.schemes
    }

    /// Number of `nav_history` calls served so far, including failures.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::Relaxed)
    }
}

impl NavSource for InMemoryNavSource {
    fn source_type(&self) -> SourceType {
        SourceType::Memory
    }

    fn nav_history(&self, scheme: &SchemeCode) -> Result<NavSeries, SourceError> {
        self.fetches.fetch_add(1, Ordering::Relaxed);
        if self.failing.contains(scheme) {
            return Err(SourceError::Transient(format!(
                "simulated upstream failure for {scheme}"
            )));
        }
        self.series
            .get(scheme)
            .map(|s| s.clone())
            .ok_or_else(|| SourceError::NotFound(scheme.to_string()))
    }
}

impl SchemeDirectory for InMemoryNavSource {
    fn search(&self, term: &str) -> Result<Vec<SchemeInfo>, SourceError> {
        Ok(search_schemes(&self.schemes, term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use navrisk_core::Date;

    fn series() -> NavSeries {
        NavSeries::from_pairs([
            (Date::from_ymd(2024, 1, 1).unwrap(), 10.0),
            (Date::from_ymd(2024, 1, 2).unwrap(), 10.1),
        ])
        .unwrap()
    }

    #[test]
    fn test_lookup_and_failures() {
        let source = InMemoryNavSource::new()
            .with_scheme("1", "Alpha Growth", series())
            .with_scheme("2", "Beta Growth", series())
            .fail_with_transient("2");

        assert_eq!(source.nav_history(&"1".into()).unwrap().len(), 2);
        let err = source.nav_history(&"2".into()).unwrap_err();
        assert!(err.is_transient());
        assert!(matches!(
            source.nav_history(&"3".into()),
            Err(SourceError::NotFound(_))
        ));
        assert_eq!(source.fetch_count(), 3);
    }

    #[test]
    fn test_search() {
        let source = InMemoryNavSource::new()
            .with_scheme("1", "Alpha Large Cap - Growth", series())
            .with_listing("2", "Beta Large Cap - IDCW");
        assert_eq!(source.search("large cap").unwrap().len(), 2);
        assert_eq!(source.source_type(), SourceType::Memory);
    }
}
