//! Game configuration loader.

use std::path::Path;

use land_core::GameConfig;
use tracing::debug;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
///
/// Keys missing from the document keep their `GameConfig::DEFAULT_*` value;
/// unknown keys are rejected so that typos surface at load time.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        let config =
            Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))?;

        debug!(path = %path.display(), ?config, "loaded game config");
        Ok(config)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}
