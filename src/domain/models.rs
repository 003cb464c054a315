use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonFail {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// Domain failure with a stable machine-readable code.
/// Codes surface verbatim in the `--json` failure envelope.
#[derive(Debug)]
pub struct CodedError {
    pub code: &'static str,
    pub message: String,
}

impl CodedError {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for CodedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CodedError {}

/// In-memory copy of the installed-distribution metadata registry.
/// Populated externally at install time; read-only here.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Registry {
    pub version: u32,
    #[serde(default)]
    pub distributions: Vec<DistRecord>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DistRecord {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub overall: String,
    pub package: String,
    pub declared: String,
    pub recorded: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub general: ConfigGeneral,
}

#[derive(Debug, Deserialize, Default)]
pub struct ConfigGeneral {
    #[serde(default)]
    pub registry_path: Option<PathBuf>,
}
