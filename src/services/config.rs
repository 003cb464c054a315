use crate::domain::models::{ConfigFile, ConfigGeneral};
use std::path::PathBuf;

pub fn load_config() -> anyhow::Result<ConfigFile> {
    let home = std::env::var("HOME")?;
    let path = PathBuf::from(home).join(".config/vercheck/config.toml");
    if !path.exists() {
        return Ok(ConfigFile {
            general: ConfigGeneral::default(),
        });
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}
