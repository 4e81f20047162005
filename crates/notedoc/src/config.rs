//! Configuration file (notedoc.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use notedoc_static::OutputFormat;
use serde::Deserialize;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct ConfigFile {
    #[serde(default)]
    pub document: DocumentConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct DocumentConfig {
    /// Document title, "Notebook" when unset
    pub title: Option<String>,
    #[serde(default)]
    pub links: bool,
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    /// Output file, stdout when unset
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub open: bool,
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::info!("Loaded config from {}", path.display());

    Ok(config)
}

pub const DEFAULT_CONFIG: &str = r#"# notedoc configuration

[document]
# Document title (defaults to "Notebook")
title = "My Notebook"

# Link the functions list to each function's section
links = true

# Output format: "html" or "json"
format = "html"

[output]
# Output file (omit to print to stdout)
path = "documentation.html"

# Open the output file when done
open = false
"#;
