//! Building configuration file loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use lift_core::BuildingConfig;

/// Read a TOML building file.  Missing keys take their defaults.
pub fn load(path: &Path) -> Result<BuildingConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: BuildingConfig = toml::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    info!("loaded {}", path.display());
    Ok(config)
}
