//! Directory-backed NAV source.

use std::path::{Path, PathBuf};

use dashmap::DashMap;
use serde::Deserialize;
use tracing::debug;

use navrisk_core::{Date, NavPoint, NavSeries, SchemeCode, SchemeInfo};
use navrisk_traits::{NavSource, SchemeDirectory, SourceError, SourceType};

/// Name of the optional scheme index inside a data directory.
pub const SCHEME_INDEX_FILE: &str = "schemes.csv";

// =============================================================================
// RECORDS
// =============================================================================

/// NAV payload in the public mutual fund API shape.
#[derive(Debug, Deserialize)]
struct NavPayload {
    #[serde(default)]
    #[allow(dead_code)]
    meta: Option<serde_json::Value>,
    data: Vec<RawNav>,
}

/// A NAV row with the value as text or number.
#[derive(Debug, Deserialize)]
struct RawNav {
    date: String,
    nav: RawValue,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Number(f64),
    Text(String),
}

impl RawNav {
    fn into_point(self) -> Result<NavPoint, SourceError> {
        let date = Date::parse_any(&self.date)?;
        let point = match self.nav {
            RawValue::Number(n) => NavPoint::from_f64(date, n)?,
            RawValue::Text(s) => NavPoint::parse(date, &s)?,
        };
        Ok(point)
    }
}

/// Row of `schemes.csv`.
#[derive(Debug, Deserialize)]
struct SchemeRecord {
    scheme_code: String,
    scheme_name: String,
}

// =============================================================================
// FILE NAV SOURCE
// =============================================================================

/// NAV histories stored as files in one directory.
///
/// Each scheme lives in `<code>.json` (public API shape,
/// `{"meta": {...}, "data": [{"date": "DD-MM-YYYY", "nav": "12.34"}]}`) or
/// `<code>.csv` (`date,nav`). JSON wins when both exist. An optional
/// `schemes.csv` (`scheme_code,scheme_name`) backs [`SchemeDirectory`].
///
/// Parsed series are cached for the lifetime of the source.
pub struct FileNavSource {
    root: PathBuf,
    cache: DashMap<SchemeCode, NavSeries>,
    schemes: Vec<SchemeInfo>,
}

impl FileNavSource {
    /// Opens a data directory and loads its scheme index, if any.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, SourceError> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(SourceError::Io(format!(
                "data directory {} does not exist",
                root.display()
            )));
        }
        let schemes = load_index(&root.join(SCHEME_INDEX_FILE))?;
        debug!(root = %root.display(), schemes = schemes.len(), "opened NAV directory");
        Ok(Self {
            root,
            cache: DashMap::new(),
            schemes,
        })
    }

    /// Data directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every scheme in the index.
    pub fn schemes(&self) -> &[SchemeInfo] {
        &self.schemes
    }

    /// Drops cached series so the next read goes back to disk.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    fn load(&self, code: &SchemeCode) -> Result<NavSeries, SourceError> {
        let json = self.root.join(format!("{}.json", code.as_str()));
        if json.is_file() {
            return parse_json(&std::fs::read_to_string(&json)?);
        }
        let csv = self.root.join(format!("{}.csv", code.as_str()));
        if csv.is_file() {
            return parse_csv(&csv);
        }
        Err(SourceError::NotFound(code.to_string()))
    }
}

impl NavSource for FileNavSource {
    fn source_type(&self) -> SourceType {
        SourceType::File
    }

    fn nav_history(&self, scheme: &SchemeCode) -> Result<NavSeries, SourceError> {
        if let Some(cached) = self.cache.get(scheme) {
            return Ok(cached.clone());
        }
        // Only plain codes map to file names.
        if scheme.as_str().is_empty()
            || scheme.as_str().contains(['/', '\\', '.'])
        {
            return Err(SourceError::NotFound(scheme.to_string()));
        }
        let series = self.load(scheme)?;
        debug!(scheme = %scheme, points = series.len(), "loaded NAV history");
        self.cache.insert(scheme.clone(), series.clone());
        Ok(series)
    }
}

impl SchemeDirectory for FileNavSource {
    fn search(&self, term: &str) -> Result<Vec<SchemeInfo>, SourceError> {
        Ok(search_schemes(&self.schemes, term))
    }
}

/// Case-insensitive match of `term` against scheme names, or an exact code.
pub fn search_schemes(schemes: &[SchemeInfo], term: &str) -> Vec<SchemeInfo> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    schemes
        .iter()
        .filter(|s| {
            s.scheme_name.to_lowercase().contains(&needle) || s.scheme_code.as_str() == needle
        })
        .cloned()
        .collect()
}

fn load_index(path: &Path) -> Result<Vec<SchemeInfo>, SourceError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let mut reader = csv::Reader::from_path(path).map_err(|e| SourceError::Io(e.to_string()))?;
    reader
        .deserialize()
        .map(|row| {
            let record: SchemeRecord = row.map_err(|e| SourceError::Parse(e.to_string()))?;
            Ok(SchemeInfo::new(record.scheme_code, record.scheme_name))
        })
        .collect()
}

/// Parses a NAV payload in the public API shape.
pub fn parse_json(content: &str) -> Result<NavSeries, SourceError> {
    let payload: NavPayload =
        serde_json::from_str(content).map_err(|e| SourceError::Parse(e.to_string()))?;
    let points = payload
        .data
        .into_iter()
        .map(RawNav::into_point)
        .collect::<Result<Vec<_>, _>>()?;
    // The API publishes newest first.
    Ok(NavSeries::from_unsorted(points)?)
}

fn parse_csv(path: &Path) -> Result<NavSeries, SourceError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| SourceError::Io(e.to_string()))?;
    let points = reader
        .deserialize()
        .map(|row| {
            let raw: RawNav = row.map_err(|e| SourceError::Parse(e.to_string()))?;
            raw.into_point()
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(NavSeries::from_unsorted(points)?)
}
