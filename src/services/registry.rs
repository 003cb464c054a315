use crate::domain::models::{CodedError, ConfigFile, DistRecord, Registry};
use std::path::{Path, PathBuf};

fn default_registry_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home)
        .join(".local")
        .join("share")
        .join("vercheck")
        .join("registry.json"))
}

/// Precedence: `--registry` flag, then config file, then the default path.
pub fn resolve_registry_path(
    flag: Option<&Path>,
    config: &ConfigFile,
) -> anyhow::Result<PathBuf> {
    if let Some(p) = flag {
        return Ok(p.to_path_buf());
    }
    if let Some(p) = &config.general.registry_path {
        return Ok(p.clone());
    }
    default_registry_path()
}

/// A missing file reads as an empty registry (nothing installed yet).
pub fn load_registry(path: &Path) -> anyhow::Result<Registry> {
    if !path.exists() {
        return Ok(Registry::default());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

pub fn find_record(registry: &Registry, package: &str) -> anyhow::Result<DistRecord> {
    registry
        .distributions
        .iter()
        .find(|d| d.name == package)
        .cloned()
        .ok_or_else(|| {
            CodedError::new(
                "MISSING_RECORD",
                format!("no installed distribution record for {}", package),
            )
            .into()
        })
}

pub fn version_of(registry: &Registry, package: &str) -> anyhow::Result<String> {
    Ok(find_record(registry, package)?.version)
}
