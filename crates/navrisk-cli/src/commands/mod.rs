//! CLI command implementations.

pub mod analyze;
pub mod categories;
pub mod compare;
pub mod config;
pub mod screen;
pub mod search;

// Re-export submodules for convenience
pub use analyze::AnalyzeArgs;
pub use compare::CompareArgs;
pub use config::ConfigArgs;
pub use screen::ScreenArgs;
pub use search::SearchArgs;

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use tracing::debug;

use navrisk_analytics::EngineConfig;
use navrisk_core::SchemeCode;
use navrisk_ext_file::FileNavSource;
use navrisk_traits::SchemeDirectory;

use crate::error::{CliError, CliResult};

/// Shared state for a command run.
pub struct Context {
    /// Effective engine configuration.
    pub config: EngineConfig,
    /// NAV data directory.
    pub data_dir: PathBuf,
    /// Suppress non-essential output.
    pub quiet: bool,
}

impl Context {
    /// Opens the NAV directory.
    pub fn open_source(&self) -> Result<FileNavSource> {
        if !self.data_dir.is_dir() {
            return Err(CliError::DataDir(self.data_dir.clone()).into());
        }
        Ok(FileNavSource::open(&self.data_dir)?)
    }
}

/// Loads the engine configuration, applying a TOML override file if given.
pub fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    let config = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("reading config file {}", path.display()))?;
            let config: EngineConfig =
                toml::from_str(&content).map_err(|e| CliError::Config(e.to_string()))?;
            debug!(path = %path.display(), "loaded configuration overrides");
            config
        }
        None => EngineConfig::default(),
    };
    config
        .validate()
        .map_err(|e| CliError::Config(e.to_string()))?;
    Ok(config)
}

/// Display name for a scheme code, falling back to the code itself.
pub fn scheme_name(source: &FileNavSource, code: &SchemeCode) -> String {
    source
        .search(code.as_str())
        .ok()
        .and_then(|hits| hits.into_iter().find(|s| &s.scheme_code == code))
        .map_or_else(|| code.to_string(), |s| s.scheme_name)
}

/// Validates an analysis window in years.
pub fn validate_years(years: u32) -> CliResult<u32> {
    if years == 0 {
        return Err(CliError::InvalidYears(years));
    }
    Ok(years)
}

/// Validates a risk-free rate given in percent and returns it as a fraction.
pub fn validate_rate(percent: f64) -> CliResult<f64> {
    if !percent.is_finite() || !(-50.0..=100.0).contains(&percent) {
        return Err(CliError::InvalidRate(percent));
    }
    Ok(percent / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_validate_inputs() {
        assert!(validate_years(0).is_err());
        assert_eq!(validate_years(3).unwrap(), 3);
        assert!((validate_rate(6.5).unwrap() - 0.065).abs() < 1e-12);
        assert!(validate_rate(250.0).is_err());
        assert!(validate_rate(f64::NAN).is_err());
    }

    #[test]
    fn test_load_config_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "risk_free_rate = 0.06\ntop_n = 10").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.top_n, 10);
        assert!((config.risk_free_rate - 0.06).abs() < 1e-12);
        assert_eq!(config.screening_years, 5);
    }

    #[test]
    fn test_load_config_rejects_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "top_n = 0").unwrap();
        assert!(load_config(Some(file.path())).is_err());
        assert_eq!(load_config(None).unwrap(), EngineConfig::default());
    }
}
